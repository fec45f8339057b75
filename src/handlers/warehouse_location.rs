//! Warehouse-location handlers: GET/POST/DELETE, with the same accepted-but-
//! unimplemented PUT as suppliers.

use crate::entities::WAREHOUSE_LOCATION;
use crate::error::ApiError;
use crate::service::crud;
use crate::state::AppState;
use axum::extract::{Query, State};
use axum::http::StatusCode;
use axum::Json;
use serde_json::Value;
use std::collections::HashMap;

pub async fn fetch(
    State(state): State<AppState>,
    Query(params): Query<HashMap<String, String>>,
) -> Result<Json<Value>, ApiError> {
    let table = state.tables.resolve(WAREHOUSE_LOCATION.table);
    let body = crud::fetch(
        state.store.as_ref(),
        &table,
        &WAREHOUSE_LOCATION,
        &params,
        None,
    )
    .await?;
    Ok(Json(body))
}

pub async fn create(State(state): State<AppState>, body: String) -> Result<Json<Value>, ApiError> {
    let table = state.tables.resolve(WAREHOUSE_LOCATION.table);
    let record = crud::parse_object(&body)?;
    let body = crud::create(
        state.store.as_ref(),
        &table,
        &WAREHOUSE_LOCATION,
        record,
        None,
    )
    .await?;
    Ok(Json(body))
}

/// PUT /warehouse-location is accepted but does nothing. 200, empty body.
pub async fn update() -> StatusCode {
    StatusCode::OK
}

pub async fn remove(State(state): State<AppState>, body: String) -> Result<Json<Value>, ApiError> {
    let table = state.tables.resolve(WAREHOUSE_LOCATION.table);
    let record = crud::parse_object(&body)?;
    let body = crud::remove(
        state.store.as_ref(),
        &table,
        &WAREHOUSE_LOCATION,
        record,
    )
    .await?;
    Ok(Json(body))
}
