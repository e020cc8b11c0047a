//! SQL DDL for the local key-value store.

/// One row per persisted key. `value` holds a JSON document, written whole on
/// every save.
pub const SQLITE_INIT: &str = r#"
CREATE TABLE IF NOT EXISTS kv_entries (
    key TEXT PRIMARY KEY NOT NULL,
    value TEXT NOT NULL
);
"#;
