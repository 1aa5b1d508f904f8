pub mod health;
pub mod retrieve;
pub mod store;

pub use health::health_handler;
pub use retrieve::retrieve_handler;
pub use store::store_handler;
