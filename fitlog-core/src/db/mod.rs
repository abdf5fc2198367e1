//! Database layer for fitlog
//!
//! SQLite storage behind the [`KeyValueStore`](crate::store::KeyValueStore)
//! interface:
//! - Schema migrations
//! - A single JSON document table keyed by name

pub mod repo;
pub mod schema;

pub use repo::Database;
