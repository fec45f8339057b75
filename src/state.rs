//! Shared application state for all routes.

use crate::config::TableNames;
use crate::store::Store;
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn Store>,
    pub tables: TableNames,
}

impl AppState {
    pub fn new(store: Arc<dyn Store>, tables: TableNames) -> Self {
        Self { store, tables }
    }
}
