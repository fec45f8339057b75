//! Response body helpers shared by the entity services.

use crate::store::Record;
use serde_json::{json, Value};

/// `{message: "<Entity> <action> successfully", status: true}` — the shape PUT
/// and DELETE confirmations use.
pub fn confirmation(entity: &str, action: &str) -> Value {
    json!({
        "message": format!("{entity} {action} successfully"),
        "status": true,
    })
}

/// POST confirmation carrying the stored record read back after the write.
pub fn created(entity: &str, data: Option<Record>) -> Value {
    json!({
        "message": format!("{entity} created successfully"),
        "data": data.map(Value::Object),
        "status": true,
    })
}
