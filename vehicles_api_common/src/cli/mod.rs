pub mod constants;
pub mod helpers;
