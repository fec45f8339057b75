//! Bill handlers: CRUD plus the bills/suppliers join endpoint.

use crate::entities::{BILL, SUPPLIER};
use crate::error::ApiError;
use crate::service::{crud, join};
use crate::state::AppState;
use axum::extract::{Query, State};
use axum::Json;
use serde_json::Value;
use std::collections::HashMap;

pub async fn fetch(
    State(state): State<AppState>,
    Query(params): Query<HashMap<String, String>>,
) -> Result<Json<Value>, ApiError> {
    let table = state.tables.resolve(BILL.table);
    let body = crud::fetch(state.store.as_ref(), &table, &BILL, &params, None).await?;
    Ok(Json(body))
}

pub async fn create(State(state): State<AppState>, body: String) -> Result<Json<Value>, ApiError> {
    let table = state.tables.resolve(BILL.table);
    let record = crud::parse_object(&body)?;
    let body = crud::create(state.store.as_ref(), &table, &BILL, record, None).await?;
    Ok(Json(body))
}

pub async fn update(State(state): State<AppState>, body: String) -> Result<Json<Value>, ApiError> {
    let table = state.tables.resolve(BILL.table);
    let record = crud::parse_object(&body)?;
    let body = crud::update(state.store.as_ref(), &table, &BILL, record).await?;
    Ok(Json(body))
}

pub async fn remove(State(state): State<AppState>, body: String) -> Result<Json<Value>, ApiError> {
    let table = state.tables.resolve(BILL.table);
    let record = crud::parse_object(&body)?;
    let body = crud::remove(state.store.as_ref(), &table, &BILL, record).await?;
    Ok(Json(body))
}

/// GET /bills/suppliers — suppliers referenced by at least one bill.
pub async fn suppliers(State(state): State<AppState>) -> Result<Json<Value>, ApiError> {
    let bills_table = state.tables.resolve(BILL.table);
    let suppliers_table = state.tables.resolve(SUPPLIER.table);
    let body = join::bill_suppliers(state.store.as_ref(), &bills_table, &suppliers_table).await?;
    Ok(Json(body))
}
