//! Dimfill-DB: Access to the `images` table of an existing catalog database.
//!
//! This crate provides the storage side of dimfill using SQLite through
//! rusqlite. It does not create or migrate schemas; it checks that the
//! expected table and columns exist and fails early when they do not.
//!
//! # Modules
//!
//! - `models` - Rust models matching the `images` table
//! - `store` - Connection handling, schema check, and the [`store::DimensionStore`] seam
//! - `queries` - Database query operations
//!
//! # Example
//!
//! ```no_run
//! use dimfill_db::store::{DimensionStore, SqliteStore};
//!
//! let store = SqliteStore::open("/var/lib/photos/catalog.db").unwrap();
//! let candidates = store.find_missing_dimensions().unwrap();
//! println!("{} images need dimensions", candidates.len());
//! store.close().unwrap();
//! ```

pub mod models;
pub mod queries;
pub mod store;

#[cfg(test)]
pub(crate) mod test_fixtures;
