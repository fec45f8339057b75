//! Stock handlers. GET supports an `id_product` filter for looking up the
//! stock rows of one product.

use crate::entities::STOCK;
use crate::error::ApiError;
use crate::service::crud;
use crate::state::AppState;
use crate::store::Filter;
use axum::extract::{Query, State};
use axum::Json;
use serde_json::Value;
use std::collections::HashMap;

pub async fn fetch(
    State(state): State<AppState>,
    Query(params): Query<HashMap<String, String>>,
) -> Result<Json<Value>, ApiError> {
    let table = state.tables.resolve(STOCK.table);
    let filter = params
        .get("id_product")
        .map(|id| Filter::eq("id_product", Value::String(id.clone())));
    let body = crud::fetch(state.store.as_ref(), &table, &STOCK, &params, filter).await?;
    Ok(Json(body))
}

pub async fn create(State(state): State<AppState>, body: String) -> Result<Json<Value>, ApiError> {
    let table = state.tables.resolve(STOCK.table);
    let record = crud::parse_object(&body)?;
    let body = crud::create(state.store.as_ref(), &table, &STOCK, record, None).await?;
    Ok(Json(body))
}

pub async fn update(State(state): State<AppState>, body: String) -> Result<Json<Value>, ApiError> {
    let table = state.tables.resolve(STOCK.table);
    let record = crud::parse_object(&body)?;
    let body = crud::update(state.store.as_ref(), &table, &STOCK, record).await?;
    Ok(Json(body))
}

pub async fn remove(State(state): State<AppState>, body: String) -> Result<Json<Value>, ApiError> {
    let table = state.tables.resolve(STOCK.table);
    let record = crud::parse_object(&body)?;
    let body = crud::remove(state.store.as_ref(), &table, &STOCK, record).await?;
    Ok(Json(body))
}
