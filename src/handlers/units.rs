//! Unit handlers. POST enforces composite uniqueness on
//! `(id_product, ratio, unit)` — only when all three fields arrive.

use crate::entities::UNIT;
use crate::error::ApiError;
use crate::service::crud;
use crate::state::AppState;
use crate::store::{Filter, Record};
use axum::extract::{Query, State};
use axum::Json;
use serde_json::Value;
use std::collections::HashMap;

fn composite_filter(record: &Record) -> Option<Filter> {
    let fields = ["id_product", "ratio", "unit"];
    if !fields.iter().all(|f| crud::truthy(record.get(*f))) {
        return None;
    }
    let mut iter = fields.iter();
    let first = iter.next()?;
    let mut filter = Filter::eq(*first, record[*first].clone());
    for field in iter {
        filter = filter.and(*field, record[*field].clone());
    }
    Some(filter)
}

pub async fn fetch(
    State(state): State<AppState>,
    Query(params): Query<HashMap<String, String>>,
) -> Result<Json<Value>, ApiError> {
    let table = state.tables.resolve(UNIT.table);
    let filter = params
        .get("id_product")
        .map(|id| Filter::eq("id_product", Value::String(id.clone())));
    let body = crud::fetch(state.store.as_ref(), &table, &UNIT, &params, filter).await?;
    Ok(Json(body))
}

pub async fn create(State(state): State<AppState>, body: String) -> Result<Json<Value>, ApiError> {
    let table = state.tables.resolve(UNIT.table);
    let record = crud::parse_object(&body)?;
    let duplicate_check = composite_filter(&record);
    let body = crud::create(state.store.as_ref(), &table, &UNIT, record, duplicate_check).await?;
    Ok(Json(body))
}

pub async fn update(State(state): State<AppState>, body: String) -> Result<Json<Value>, ApiError> {
    let table = state.tables.resolve(UNIT.table);
    let record = crud::parse_object(&body)?;
    let body = crud::update(state.store.as_ref(), &table, &UNIT, record).await?;
    Ok(Json(body))
}

pub async fn remove(State(state): State<AppState>, body: String) -> Result<Json<Value>, ApiError> {
    let table = state.tables.resolve(UNIT.table);
    let record = crud::parse_object(&body)?;
    let body = crud::remove(state.store.as_ref(), &table, &UNIT, record).await?;
    Ok(Json(body))
}
