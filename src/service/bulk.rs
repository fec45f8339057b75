//! Bulk insert with name dedup. Items are processed in input order; a name
//! that already exists in the table is recorded and skipped, never an error.
//! Validation failures abort the whole call, but items written before the
//! failing one stay written — there is no rollback.

use super::crud::{parse_object, truthy};
use crate::entities::EntityMeta;
use crate::error::ApiError;
use crate::store::{Filter, Record, ScanRequest, Store};
use serde_json::{json, Map, Value};

/// Per-entity bulk contract: which fields every item must carry, and the
/// message used when one is missing.
pub struct BulkSpec {
    pub required: &'static [&'static str],
    pub missing_message: &'static str,
}

impl BulkSpec {
    fn item_is_complete(&self, item: &Record) -> bool {
        self.required.iter().all(|field| match *field {
            // `type` may legitimately be zero; only absence counts as missing.
            "type" => item.contains_key("type"),
            other => truthy(item.get(other)),
        })
    }
}

/// Inserts `items` one by one, skipping any whose `name` already exists in the
/// table (the uniqueness scan checks `name` only, not `id`). Responds with the
/// inserted items, the skipped names (omitted when none), and a final scan of
/// the whole table.
///
/// The scan-then-write sequence is not atomic: two concurrent calls can both
/// pass the name check before either writes.
pub async fn insert(
    store: &dyn Store,
    table: &str,
    meta: &EntityMeta,
    spec: &BulkSpec,
    body: &str,
) -> Result<Value, ApiError> {
    let request = parse_object(body)?;
    let items = match request.get("items") {
        Some(Value::Array(items)) if !items.is_empty() => items,
        _ => {
            return Err(ApiError::InvalidItems(
                "Missing required fields or items array is empty",
            ))
        }
    };

    let mut inserted: Vec<Value> = Vec::new();
    let mut existing: Vec<Value> = Vec::new();

    for item in items {
        let record = match item {
            Value::Object(map) if spec.item_is_complete(map) => map,
            _ => return Err(ApiError::InvalidItems(spec.missing_message)),
        };
        let name = record.get("name").cloned().unwrap_or(Value::Null);

        let matches = store
            .scan(
                table,
                ScanRequest {
                    filter: Some(Filter::eq("name", name.clone())),
                    ..Default::default()
                },
            )
            .await?;
        if matches.count > 0 {
            existing.push(name);
            continue;
        }

        store.put(table, record.clone()).await?;
        inserted.push(item.clone());
    }

    let all = store.scan(table, ScanRequest::default()).await?;

    let mut body = Map::new();
    body.insert(
        "message".into(),
        json!(format!("{} processed successfully", meta.plural)),
    );
    body.insert("insertedItems".into(), Value::Array(inserted));
    if !existing.is_empty() {
        body.insert(format!("existing{}", meta.plural), Value::Array(existing));
    }
    body.insert(
        format!("all{}", meta.plural),
        Value::Array(all.items.into_iter().map(Value::Object).collect()),
    );
    body.insert("status".into(), json!(true));
    Ok(Value::Object(body))
}
