//! In-memory [`Store`] backend. Tables are ordered maps so scans walk a stable
//! key order and continuation tokens stay valid between calls.

use super::{key_of, ContinuationToken, Patch, Record, ScanPage, ScanRequest, Store, StoreError};
use async_trait::async_trait;
use serde_json::Value;
use std::collections::{BTreeMap, HashMap};
use std::ops::Bound;
use std::sync::RwLock;

type Table = BTreeMap<String, Record>;

#[derive(Default)]
pub struct MemoryStore {
    tables: RwLock<HashMap<String, Table>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn read_tables(&self) -> std::sync::RwLockReadGuard<'_, HashMap<String, Table>> {
        self.tables.read().unwrap_or_else(|e| e.into_inner())
    }

    fn write_tables(&self) -> std::sync::RwLockWriteGuard<'_, HashMap<String, Table>> {
        self.tables.write().unwrap_or_else(|e| e.into_inner())
    }
}

#[async_trait]
impl Store for MemoryStore {
    async fn get(&self, table: &str, id: &str) -> Result<Option<Record>, StoreError> {
        tracing::debug!(table, id, "get");
        Ok(self
            .read_tables()
            .get(table)
            .and_then(|t| t.get(id))
            .cloned())
    }

    async fn put(&self, table: &str, record: Record) -> Result<(), StoreError> {
        let key = key_of(&record).ok_or(StoreError::MissingKey)?;
        tracing::debug!(table, key = %key, "put");
        self.write_tables()
            .entry(table.to_string())
            .or_default()
            .insert(key, record);
        Ok(())
    }

    async fn delete(&self, table: &str, id: &str) -> Result<(), StoreError> {
        tracing::debug!(table, id, "delete");
        if let Some(t) = self.write_tables().get_mut(table) {
            t.remove(id);
        }
        Ok(())
    }

    async fn update(&self, table: &str, id: &str, patch: Patch) -> Result<(), StoreError> {
        tracing::debug!(table, id, expr = %patch.expression().set_clause, "update");
        let mut tables = self.write_tables();
        let t = tables.entry(table.to_string()).or_default();
        // Merge-or-create: updating an absent key materializes the record.
        let record = t.entry(id.to_string()).or_insert_with(|| {
            let mut fresh = Record::new();
            fresh.insert("id".into(), Value::String(id.to_string()));
            fresh
        });
        for (field, value) in patch.fields() {
            record.insert(field.clone(), value.clone());
        }
        Ok(())
    }

    async fn scan(&self, table: &str, request: ScanRequest) -> Result<ScanPage, StoreError> {
        tracing::debug!(
            table,
            limit = ?request.limit,
            count_only = request.count_only,
            "scan"
        );
        let tables = self.read_tables();
        let Some(data) = tables.get(table) else {
            return Ok(ScanPage::default());
        };

        let range = match &request.start_after {
            Some(token) => data.range::<str, _>((Bound::Excluded(token.key()), Bound::Unbounded)),
            None => data.range::<str, _>((Bound::Unbounded, Bound::Unbounded)),
        };

        let limit = request.limit.unwrap_or(usize::MAX);
        let mut page = ScanPage::default();
        let mut examined = 0usize;
        let mut last_examined: Option<&str> = None;
        for (key, record) in range {
            if examined == limit {
                // Stopped with at least one record left: hand back a cursor.
                page.last_key = last_examined.map(ContinuationToken::new);
                break;
            }
            examined += 1;
            last_examined = Some(key);
            let matched = request
                .filter
                .as_ref()
                .map_or(true, |f| f.matches(record));
            if matched {
                page.count += 1;
                if !request.count_only {
                    page.items.push(record.clone());
                }
            }
        }
        Ok(page)
    }
}
