//! Supplier handlers: CRUD with a no-op PUT, plus bulk insert.

use crate::entities::SUPPLIER;
use crate::error::ApiError;
use crate::service::bulk::{self, BulkSpec};
use crate::service::crud;
use crate::state::AppState;
use axum::extract::{Query, State};
use axum::http::StatusCode;
use axum::Json;
use serde_json::Value;
use std::collections::HashMap;

const BULK: BulkSpec = BulkSpec {
    required: &["id", "name"],
    missing_message: "Missing required fields 'id', 'name'",
};

pub async fn fetch(
    State(state): State<AppState>,
    Query(params): Query<HashMap<String, String>>,
) -> Result<Json<Value>, ApiError> {
    let table = state.tables.resolve(SUPPLIER.table);
    let body = crud::fetch(state.store.as_ref(), &table, &SUPPLIER, &params, None).await?;
    Ok(Json(body))
}

pub async fn create(State(state): State<AppState>, body: String) -> Result<Json<Value>, ApiError> {
    let table = state.tables.resolve(SUPPLIER.table);
    let record = crud::parse_object(&body)?;
    let body = crud::create(state.store.as_ref(), &table, &SUPPLIER, record, None).await?;
    Ok(Json(body))
}

/// PUT /suppliers is accepted but does nothing: the route exists, the update
/// was never implemented behind it. Returns 200 with an empty body.
pub async fn update() -> StatusCode {
    StatusCode::OK
}

pub async fn remove(State(state): State<AppState>, body: String) -> Result<Json<Value>, ApiError> {
    let table = state.tables.resolve(SUPPLIER.table);
    let record = crud::parse_object(&body)?;
    let body = crud::remove(state.store.as_ref(), &table, &SUPPLIER, record).await?;
    Ok(Json(body))
}

/// POST /suppliers/add-multiple
pub async fn add_multiple(
    State(state): State<AppState>,
    body: String,
) -> Result<(StatusCode, Json<Value>), ApiError> {
    let table = state.tables.resolve(SUPPLIER.table);
    let body = bulk::insert(state.store.as_ref(), &table, &SUPPLIER, &BULK, &body).await?;
    Ok((StatusCode::CREATED, Json(body)))
}
