//! HTTP handlers, one module per entity. Handlers stay thin: extract, hand
//! off to the service layer, wrap the body.

pub mod bills;
pub mod categories;
pub mod products;
pub mod stocks;
pub mod suppliers;
pub mod units;
pub mod warehouse_location;

use crate::error::ApiError;
use axum::Json;
use serde_json::{json, Value};

/// GET /connection — static liveness probe, no storage involved.
pub async fn connection() -> Json<Value> {
    Json(json!({ "message": "Connection successful", "status": true }))
}

/// Router fallback for unmatched paths.
pub async fn not_found() -> ApiError {
    ApiError::RouteNotFound
}

/// Method fallback for known paths hit with an unsupported verb.
pub async fn method_not_allowed() -> ApiError {
    ApiError::MethodNotAllowed
}
