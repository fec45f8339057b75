//! Warehouse-management REST API over a pluggable key-value store.

pub mod config;
pub mod entities;
pub mod error;
pub mod handlers;
pub mod response;
pub mod routes;
pub mod service;
pub mod state;
pub mod store;

pub use config::TableNames;
pub use error::ApiError;
pub use routes::router;
pub use state::AppState;
pub use store::{MemoryStore, Store};
