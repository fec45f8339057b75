//! Category handlers. GET supports a numeric `type` filter; the routing table
//! exposes no DELETE for categories.

use crate::entities::CATEGORY;
use crate::error::ApiError;
use crate::service::bulk::{self, BulkSpec};
use crate::service::crud;
use crate::state::AppState;
use crate::store::Filter;
use axum::extract::{Query, State};
use axum::http::StatusCode;
use axum::Json;
use serde_json::Value;
use std::collections::HashMap;

const BULK: BulkSpec = BulkSpec {
    required: &["id", "name", "type"],
    missing_message: "Missing required fields 'id', 'name', or 'type'",
};

/// Coerces the query parameter the way the stored field is typed: `type` is a
/// number, so a non-numeric parameter matches nothing.
fn type_filter(raw: &str) -> Filter {
    let coerced = raw
        .trim()
        .parse::<f64>()
        .ok()
        .and_then(serde_json::Number::from_f64)
        .map(Value::Number)
        .unwrap_or(Value::Null);
    Filter::eq("type", coerced)
}

pub async fn fetch(
    State(state): State<AppState>,
    Query(params): Query<HashMap<String, String>>,
) -> Result<Json<Value>, ApiError> {
    let table = state.tables.resolve(CATEGORY.table);
    let filter = params.get("type").map(|raw| type_filter(raw));
    let body = crud::fetch(state.store.as_ref(), &table, &CATEGORY, &params, filter).await?;
    Ok(Json(body))
}

pub async fn create(State(state): State<AppState>, body: String) -> Result<Json<Value>, ApiError> {
    let table = state.tables.resolve(CATEGORY.table);
    let record = crud::parse_object(&body)?;
    let body = crud::create(state.store.as_ref(), &table, &CATEGORY, record, None).await?;
    Ok(Json(body))
}

pub async fn update(State(state): State<AppState>, body: String) -> Result<Json<Value>, ApiError> {
    let table = state.tables.resolve(CATEGORY.table);
    let record = crud::parse_object(&body)?;
    let body = crud::update(state.store.as_ref(), &table, &CATEGORY, record).await?;
    Ok(Json(body))
}

/// POST /categories/add-multiple
pub async fn add_multiple(
    State(state): State<AppState>,
    body: String,
) -> Result<(StatusCode, Json<Value>), ApiError> {
    let table = state.tables.resolve(CATEGORY.table);
    let body = bulk::insert(state.store.as_ref(), &table, &CATEGORY, &BULK, &body).await?;
    Ok((StatusCode::CREATED, Json(body)))
}
