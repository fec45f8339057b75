//! Entity-agnostic request logic: CRUD translation, bulk insert with name
//! dedup, offset pagination over a scan-only store, and the bills/suppliers
//! join.

pub mod bulk;
pub mod crud;
pub mod join;
pub mod page;
