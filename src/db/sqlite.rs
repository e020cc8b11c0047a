use crate::db::models::KvEntry;
use crate::db::schema::SQLITE_INIT;
use crate::error::ClubHubError;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use sqlx::{Pool, Sqlite};
use std::str::FromStr;

pub type SqlitePool = Pool<Sqlite>;

/// String-keyed, string-valued storage. Knows nothing about JSON.
#[derive(Clone)]
pub struct KvStorage {
    pool: SqlitePool,
}

impl KvStorage {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Open (creating if missing) the database at `database_url` and ensure the schema.
    pub async fn connect(database_url: &str) -> Result<Self, ClubHubError> {
        let connect_opts = SqliteConnectOptions::from_str(database_url)?.create_if_missing(true);
        // A single connection keeps `sqlite::memory:` databases coherent.
        let pool = SqlitePoolOptions::new()
            .max_connections(1)
            .connect_with(connect_opts)
            .await?;
        let storage = Self::new(pool);
        storage.init_schema().await?;
        Ok(storage)
    }

    /// Initialize the schema by executing the bundled DDL.
    pub async fn init_schema(&self) -> Result<(), ClubHubError> {
        for stmt in SQLITE_INIT.split(';') {
            let s = stmt.trim();
            if s.is_empty() {
                continue;
            }
            sqlx::query(s).execute(&self.pool).await?;
        }
        Ok(())
    }

    pub async fn get(&self, key: &str) -> Result<Option<String>, ClubHubError> {
        let row: Option<KvEntry> =
            sqlx::query_as("SELECT key, value FROM kv_entries WHERE key = ?")
                .bind(key)
                .fetch_optional(&self.pool)
                .await?;
        Ok(row.map(|entry| entry.value))
    }

    /// Insert or replace the value stored under `key`.
    pub async fn set(&self, key: &str, value: &str) -> Result<(), ClubHubError> {
        sqlx::query(
            r#"
            INSERT INTO kv_entries (key, value) VALUES (?, ?)
            ON CONFLICT(key) DO UPDATE SET value = excluded.value
            "#,
        )
        .bind(key)
        .bind(value)
        .execute(&self.pool)
        .await?;
        Ok(())
    }

    #[cfg(test)]
    pub async fn remove(&self, key: &str) -> Result<(), ClubHubError> {
        sqlx::query("DELETE FROM kv_entries WHERE key = ?")
            .bind(key)
            .execute(&self.pool)
            .await?;
        Ok(())
    }

    #[cfg(test)]
    pub async fn list(&self) -> Result<Vec<KvEntry>, ClubHubError> {
        let rows = sqlx::query_as("SELECT key, value FROM kv_entries ORDER BY key")
            .fetch_all(&self.pool)
            .await?;
        Ok(rows)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn set_get_overwrite_remove() {
        let kv = KvStorage::connect("sqlite::memory:").await.unwrap();
        assert_eq!(kv.get("a").await.unwrap(), None);

        kv.set("a", "[1]").await.unwrap();
        assert_eq!(kv.get("a").await.unwrap().as_deref(), Some("[1]"));

        kv.set("a", "[2,1]").await.unwrap();
        assert_eq!(kv.get("a").await.unwrap().as_deref(), Some("[2,1]"));
        assert_eq!(kv.list().await.unwrap().len(), 1);

        kv.remove("a").await.unwrap();
        assert_eq!(kv.get("a").await.unwrap(), None);
    }
}
