//! Product handlers: CRUD plus the bulk-insert and pagination specials.

use crate::entities::PRODUCT;
use crate::error::ApiError;
use crate::service::bulk::{self, BulkSpec};
use crate::service::{crud, page};
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
    let table = state.tables.resolve(PRODUCT.table);
    let body = crud::fetch(state.store.as_ref(), &table, &PRODUCT, &params, None).await?;
    Ok(Json(body))
}

pub async fn create(State(state): State<AppState>, body: String) -> Result<Json<Value>, ApiError> {
    let table = state.tables.resolve(PRODUCT.table);
    let record = crud::parse_object(&body)?;
    let body = crud::create(state.store.as_ref(), &table, &PRODUCT, record, None).await?;
    Ok(Json(body))
}

pub async fn update(State(state): State<AppState>, body: String) -> Result<Json<Value>, ApiError> {
    let table = state.tables.resolve(PRODUCT.table);
    let record = crud::parse_object(&body)?;
    let body = crud::update(state.store.as_ref(), &table, &PRODUCT, record).await?;
    Ok(Json(body))
}

pub async fn remove(State(state): State<AppState>, body: String) -> Result<Json<Value>, ApiError> {
    let table = state.tables.resolve(PRODUCT.table);
    let record = crud::parse_object(&body)?;
    let body = crud::remove(state.store.as_ref(), &table, &PRODUCT, record).await?;
    Ok(Json(body))
}

/// POST /products/add-multiple
pub async fn add_multiple(
    State(state): State<AppState>,
    body: String,
) -> Result<(StatusCode, Json<Value>), ApiError> {
    let table = state.tables.resolve(PRODUCT.table);
    let body = bulk::insert(state.store.as_ref(), &table, &PRODUCT, &BULK, &body).await?;
    Ok((StatusCode::CREATED, Json(body)))
}

/// GET /products/get-paginations
pub async fn get_paginations(
    State(state): State<AppState>,
    Query(params): Query<HashMap<String, String>>,
) -> Result<Json<Value>, ApiError> {
    let table = state.tables.resolve(PRODUCT.table);
    let body = page::paginate(state.store.as_ref(), &table, &params).await?;
    Ok(Json(body))
}
