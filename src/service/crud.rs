//! Single-record CRUD shared by every entity handler. Each operation is one
//! validation pass plus one or two storage calls; entity-specific quirks
//! (filters, duplicate checks) are injected by the caller.

use crate::entities::EntityMeta;
use crate::error::ApiError;
use crate::response;
use crate::store::{key_of, Filter, Patch, Record, ScanRequest, Store};
use serde_json::Value;
use std::collections::HashMap;

/// Parses a request body into a flat record. Anything that is not a JSON
/// object (including unparseable bytes) surfaces as an internal error, the
/// same way a thrown parse error would.
pub fn parse_object(body: &str) -> Result<Record, ApiError> {
    Ok(serde_json::from_str::<Record>(body)?)
}

/// Presence in the loose sense the API contract uses: absent, null, empty
/// string, zero and false all count as missing.
pub fn truthy(value: Option<&Value>) -> bool {
    match value {
        None | Some(Value::Null) => false,
        Some(Value::Bool(b)) => *b,
        Some(Value::String(s)) => !s.is_empty(),
        Some(Value::Number(n)) => n.as_f64() != Some(0.0),
        Some(_) => true,
    }
}

/// GET: point lookup when `id` is supplied (missing key is a 404), otherwise a
/// table scan — filtered when the entity supports a filter parameter,
/// unbounded otherwise.
pub async fn fetch(
    store: &dyn Store,
    table: &str,
    meta: &EntityMeta,
    params: &HashMap<String, String>,
    filter: Option<Filter>,
) -> Result<Value, ApiError> {
    if let Some(id) = params.get("id").filter(|id| !id.is_empty()) {
        let record = store.get(table, id).await?;
        return record
            .map(Value::Object)
            .ok_or(ApiError::RecordNotFound(meta.name));
    }
    let page = store
        .scan(
            table,
            ScanRequest {
                filter,
                ..Default::default()
            },
        )
        .await?;
    Ok(Value::Array(page.items.into_iter().map(Value::Object).collect()))
}

/// POST: write the record as-is (full replace, no existence check), then read
/// it back for the response — the put does not echo the stored value. An
/// optional pre-write duplicate scan rejects the create before anything is
/// written.
pub async fn create(
    store: &dyn Store,
    table: &str,
    meta: &EntityMeta,
    record: Record,
    duplicate_check: Option<Filter>,
) -> Result<Value, ApiError> {
    let id = key_of(&record).ok_or(ApiError::MissingField("Missing required fields"))?;
    if let Some(filter) = duplicate_check {
        let existing = store
            .scan(
                table,
                ScanRequest {
                    filter: Some(filter),
                    ..Default::default()
                },
            )
            .await?;
        if existing.count > 0 {
            return Err(ApiError::Duplicate(meta.name));
        }
    }
    store.put(table, record).await?;
    let stored = store.get(table, &id).await?;
    Ok(response::created(meta.name, stored))
}

/// PUT: partial attribute merge keyed by `id`. Every present non-`id` field is
/// written, nulls included; an empty patch is rejected.
pub async fn update(
    store: &dyn Store,
    table: &str,
    meta: &EntityMeta,
    record: Record,
) -> Result<Value, ApiError> {
    let id = key_of(&record).ok_or(ApiError::MissingField("Missing required field: id"))?;
    let patch = Patch::from_body(record);
    if patch.is_empty() {
        return Err(ApiError::NoFieldsToUpdate);
    }
    store.update(table, &id, patch).await?;
    Ok(response::confirmation(meta.name, "updated"))
}

/// DELETE: remove by key. No existence check — deleting an absent key still
/// confirms success.
pub async fn remove(
    store: &dyn Store,
    table: &str,
    meta: &EntityMeta,
    record: Record,
) -> Result<Value, ApiError> {
    let id = key_of(&record).ok_or(ApiError::MissingField("Missing required fields id"))?;
    store.delete(table, &id).await?;
    Ok(response::confirmation(meta.name, "deleted"))
}
