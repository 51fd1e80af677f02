pub mod cli;
pub mod config;
pub mod errors;
pub mod marketplace;
pub mod requests;
pub mod table;

pub use requests::*;
