//! Database module: the SQLite table standing in for the browser's local storage.
//!
//! Layout:
//! - `models.rs`: the row struct
//! - `schema.rs`: SQL DDL for initializing the database
//! - `sqlite.rs`: raw string get/set over a pool

pub mod models;
pub mod schema;
pub mod sqlite;

pub use models::KvEntry;
pub use schema::SQLITE_INIT;
pub use sqlite::{KvStorage, SqlitePool};
