//! Offset pagination over a store that only supports forward scans with an
//! opaque continuation token.

use crate::error::ApiError;
use crate::store::{ContinuationToken, Record, ScanRequest, Store, StoreError};
use serde_json::{json, Value};
use std::collections::HashMap;

const DEFAULT_LIMIT: usize = 10;
const DEFAULT_PAGE: usize = 1;

/// Cursor over bounded scans of one table, carrying the continuation token
/// between calls. Restartable: a fresh cursor always begins at the head of the
/// table.
pub struct PageCursor<'a> {
    store: &'a dyn Store,
    table: &'a str,
    token: Option<ContinuationToken>,
}

impl<'a> PageCursor<'a> {
    pub fn new(store: &'a dyn Store, table: &'a str) -> Self {
        Self {
            store,
            table,
            token: None,
        }
    }

    /// Fetches the next bounded page and advances the cursor.
    pub async fn next(&mut self, limit: usize) -> Result<(Vec<Record>, usize), StoreError> {
        let page = self
            .store
            .scan(
                self.table,
                ScanRequest {
                    limit: Some(limit),
                    start_after: self.token.take(),
                    ..Default::default()
                },
            )
            .await?;
        self.token = page.last_key;
        Ok((page.items, page.count))
    }

    /// The token the next call would resume from; `None` once the table is
    /// exhausted.
    pub fn token(&self) -> Option<&ContinuationToken> {
        self.token.as_ref()
    }
}

/// GET /products/get-paginations: `limit` (default 10) records from 1-indexed
/// `page` (default 1), plus totals and the continuation token of the fetched
/// page.
pub async fn paginate(
    store: &dyn Store,
    table: &str,
    params: &HashMap<String, String>,
) -> Result<Value, ApiError> {
    let limit = parse_param(params, "limit", DEFAULT_LIMIT)?;
    let page = parse_param(params, "page", DEFAULT_PAGE)?;

    // Count-only pass for the totals; the range check runs before any fetch.
    let counted = store
        .scan(
            table,
            ScanRequest {
                count_only: true,
                ..Default::default()
            },
        )
        .await?;
    let total_items = counted.count;
    let total_pages = total_items.div_ceil(limit);
    if page > total_pages {
        return Err(ApiError::PageOutOfRange);
    }

    let (items, last_key) = skip_then_fetch(store, table, limit, page).await?;
    Ok(json!({
        "items": items,
        "page": page,
        "limit": limit,
        "totalPages": total_pages,
        "totalItems": total_items,
        "lastKey": last_key.map(|t| t.encode()),
        "status": true,
    }))
}

/// Both parameters must be positive integers; zero, negative and unparseable
/// values are rejected up front.
fn parse_param(
    params: &HashMap<String, String>,
    key: &str,
    default: usize,
) -> Result<usize, ApiError> {
    match params.get(key) {
        None => Ok(default),
        Some(raw) => match raw.parse::<usize>() {
            Ok(n) if n > 0 => Ok(n),
            _ => Err(ApiError::InvalidPagination),
        },
    }
}

/// Two-pass skip-then-fetch. The store has no offset seek, so reaching page N
/// means scanning past the first `(N-1) * limit` records in bounded chunks,
/// carrying the continuation token forward, then issuing one more bounded scan
/// for the page itself. Costs O(page × limit) scanned records per request —
/// acceptable for the small tables this API serves, and documented rather than
/// optimized.
async fn skip_then_fetch(
    store: &dyn Store,
    table: &str,
    limit: usize,
    page: usize,
) -> Result<(Vec<Record>, Option<ContinuationToken>), StoreError> {
    let mut cursor = PageCursor::new(store, table);
    let start_index = (page - 1) * limit;

    let mut skipped = 0usize;
    while skipped < start_index {
        let (_, count) = cursor.next(limit.min(start_index - skipped)).await?;
        skipped += count;
        if cursor.token().is_none() {
            // End of table before the requested offset.
            break;
        }
    }

    if skipped >= start_index || cursor.token().is_some() {
        let (items, _) = cursor.next(limit).await?;
        let token = cursor.token().cloned();
        return Ok((items, token));
    }
    Ok((Vec::new(), None))
}
