pub mod handlers;
pub mod routes;
pub mod store;

pub use routes::routes;
pub use store::{MockStore, SharedStore};
