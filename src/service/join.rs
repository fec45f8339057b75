//! Application-level inner join between bills and suppliers: two independent
//! full scans issued concurrently, joined on `supplierId` in memory. The store
//! offers no join primitive, and both scans are read-only and unrelated, so
//! they run in parallel.

use crate::error::ApiError;
use crate::store::{ScanRequest, Store};
use serde_json::{json, Value};
use std::collections::HashSet;

/// Returns the suppliers whose `supplierId` appears on at least one bill.
/// Matching is exact on the JSON value, so a numeric id on a bill does not
/// match a string id on a supplier.
pub async fn bill_suppliers(
    store: &dyn Store,
    bills_table: &str,
    suppliers_table: &str,
) -> Result<Value, ApiError> {
    let (bills, suppliers) = tokio::join!(
        store.scan(bills_table, ScanRequest::default()),
        store.scan(suppliers_table, ScanRequest::default()),
    );
    let bills = bills?;
    let suppliers = suppliers?;

    let referenced: HashSet<String> = bills
        .items
        .iter()
        .filter_map(|bill| bill.get("supplierId"))
        .map(Value::to_string)
        .collect();

    let matched: Vec<Value> = suppliers
        .items
        .into_iter()
        .filter(|supplier| {
            supplier
                .get("supplierId")
                .is_some_and(|id| referenced.contains(&id.to_string()))
        })
        .map(Value::Object)
        .collect();

    Ok(json!({ "suppliers": matched }))
}
