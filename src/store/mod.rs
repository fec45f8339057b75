//! Minimal key-value storage interface: point lookup, unconditional put,
//! delete, partial update, and linear scan with an opaque continuation token.
//! The API layer talks only to the [`Store`] trait; [`MemoryStore`] is the
//! bundled backend.

mod memory;

pub use memory::MemoryStore;

use async_trait::async_trait;
use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine;
use serde_json::{Map, Value};
use std::collections::HashMap;
use thiserror::Error;

/// A stored row: a flat record of named fields keyed by its `id` field.
pub type Record = Map<String, Value>;

#[derive(Error, Debug)]
pub enum StoreError {
    #[error("record has no usable 'id' key")]
    MissingKey,
    #[error("invalid continuation token")]
    BadToken,
    #[error("{0}")]
    Backend(String),
}

/// Extracts the string key a record is stored under. Numeric ids are keyed by
/// their decimal rendering so `{"id": 1}` and `?id=1` address the same row.
/// Empty strings and zero are treated as missing, like every other presence
/// check in this API.
pub fn key_of(record: &Record) -> Option<String> {
    match record.get("id") {
        Some(Value::String(s)) if !s.is_empty() => Some(s.clone()),
        Some(Value::Number(n)) if n.as_f64() != Some(0.0) => Some(n.to_string()),
        _ => None,
    }
}

/// Opaque cursor returned by a bounded scan. The encoded form is what crosses
/// the wire; the raw key never leaks to clients.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContinuationToken(String);

impl ContinuationToken {
    pub fn new(last_key: impl Into<String>) -> Self {
        Self(last_key.into())
    }

    pub fn key(&self) -> &str {
        &self.0
    }

    pub fn encode(&self) -> String {
        BASE64.encode(&self.0)
    }

    pub fn decode(encoded: &str) -> Result<Self, StoreError> {
        let bytes = BASE64.decode(encoded).map_err(|_| StoreError::BadToken)?;
        let key = String::from_utf8(bytes).map_err(|_| StoreError::BadToken)?;
        Ok(Self(key))
    }
}

/// Conjunction of field equality tests applied during a scan.
#[derive(Debug, Clone, Default)]
pub struct Filter(Vec<(String, Value)>);

impl Filter {
    pub fn eq(field: impl Into<String>, value: Value) -> Self {
        Self(vec![(field.into(), value)])
    }

    pub fn and(mut self, field: impl Into<String>, value: Value) -> Self {
        self.0.push((field.into(), value));
        self
    }

    pub fn matches(&self, record: &Record) -> bool {
        self.0
            .iter()
            .all(|(field, expected)| record.get(field).is_some_and(|v| value_eq(v, expected)))
    }
}

/// Equality with numeric widening: stored integers must match filter floats of
/// the same magnitude (query parameters arrive as decimal strings and coerce
/// through f64).
fn value_eq(a: &Value, b: &Value) -> bool {
    match (a, b) {
        (Value::Number(n), Value::Number(m)) => n.as_f64() == m.as_f64(),
        _ => a == b,
    }
}

#[derive(Debug, Default)]
pub struct ScanRequest {
    pub filter: Option<Filter>,
    /// Bounds the number of records examined, not the number matched.
    pub limit: Option<usize>,
    /// Resume strictly after the record this token points at.
    pub start_after: Option<ContinuationToken>,
    /// Count matches without materializing items.
    pub count_only: bool,
}

#[derive(Debug, Default)]
pub struct ScanPage {
    pub items: Vec<Record>,
    pub count: usize,
    /// Present when the scan stopped at `limit` with records remaining.
    pub last_key: Option<ContinuationToken>,
}

/// Attribute names that collide with reserved words in expression-based
/// stores. Resolved from this table at patch-render time instead of being
/// string-patched per request.
const RESERVED_ATTRIBUTES: &[&str] = &["status"];

/// Partial update: every field of the request body except `id`, in body order.
#[derive(Debug, Clone)]
pub struct Patch {
    fields: Vec<(String, Value)>,
}

impl Patch {
    /// Builds a patch from a request body, dropping `id` (the key is never
    /// updatable). JSON nulls are kept: a client sending `"field": null`
    /// writes a null, it does not skip the field.
    pub fn from_body(body: Record) -> Self {
        let fields = body.into_iter().filter(|(k, _)| k != "id").collect();
        Self { fields }
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    pub fn fields(&self) -> &[(String, Value)] {
        &self.fields
    }

    /// Renders the patch as a `SET`-expression for wire stores that parse
    /// update expressions. Reserved attribute names are aliased through
    /// [`RESERVED_ATTRIBUTES`] and reported in the name map.
    pub fn expression(&self) -> UpdateExpression {
        let mut assignments = Vec::with_capacity(self.fields.len());
        let mut names = HashMap::new();
        let mut values = HashMap::new();
        for (field, value) in &self.fields {
            let attribute = if RESERVED_ATTRIBUTES.contains(&field.as_str()) {
                let alias = format!("#{field}");
                names.insert(alias.clone(), field.clone());
                alias
            } else {
                field.clone()
            };
            assignments.push(format!("{attribute} = :{field}"));
            values.insert(format!(":{field}"), value.clone());
        }
        UpdateExpression {
            set_clause: format!("SET {}", assignments.join(", ")),
            names,
            values,
        }
    }
}

/// A rendered update expression: `SET` clause plus the alias and value maps.
#[derive(Debug)]
pub struct UpdateExpression {
    pub set_clause: String,
    pub names: HashMap<String, String>,
    pub values: HashMap<String, Value>,
}

#[async_trait]
pub trait Store: Send + Sync {
    /// Point lookup by key. Missing keys are `Ok(None)`, not an error.
    async fn get(&self, table: &str, id: &str) -> Result<Option<Record>, StoreError>;

    /// Unconditional put: full replace-or-create, last write wins. The stored
    /// value is not echoed back.
    async fn put(&self, table: &str, record: Record) -> Result<(), StoreError>;

    /// Delete by key; deleting an absent key succeeds.
    async fn delete(&self, table: &str, id: &str) -> Result<(), StoreError>;

    /// Partial attribute merge by key. Creates the record when absent.
    async fn update(&self, table: &str, id: &str, patch: Patch) -> Result<(), StoreError>;

    /// Forward linear scan; see [`ScanRequest`] for filter/limit/cursor
    /// semantics.
    async fn scan(&self, table: &str, request: ScanRequest) -> Result<ScanPage, StoreError>;
}
