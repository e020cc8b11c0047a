//! Typed JSON persistence over [`KvStorage`].
//!
//! Reads substitute a default on any failure and writes are best-effort; both
//! log what went wrong so nothing is lost silently.

use crate::db::KvStorage;
use crate::error::ClubHubError;
use serde::Serialize;
use serde::de::DeserializeOwned;
use std::fmt;
use tracing::{debug, warn};

/// The independently persisted entries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StoreKey {
    HeartedClubIds,
    UserClubs,
    UserRequests,
}

impl StoreKey {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::HeartedClubIds => "hearted_club_ids",
            Self::UserClubs => "user_clubs",
            Self::UserRequests => "user_requests",
        }
    }
}

impl fmt::Display for StoreKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Clone)]
pub struct PersistentStore {
    kv: KvStorage,
}

impl PersistentStore {
    pub fn new(kv: KvStorage) -> Self {
        Self { kv }
    }

    pub async fn open(database_url: &str) -> Result<Self, ClubHubError> {
        Ok(Self::new(KvStorage::connect(database_url).await?))
    }

    pub fn kv(&self) -> &KvStorage {
        &self.kv
    }

    /// Strict read: `Ok(None)` when absent, `Err` on storage or decode failure.
    pub async fn try_load<T: DeserializeOwned>(
        &self,
        key: StoreKey,
    ) -> Result<Option<T>, ClubHubError> {
        match self.kv.get(key.as_str()).await? {
            Some(raw) => Ok(Some(serde_json::from_str(&raw)?)),
            None => Ok(None),
        }
    }

    /// Read `key`, falling back to `T::default()` when absent or unreadable.
    pub async fn load_or_default<T: DeserializeOwned + Default>(&self, key: StoreKey) -> T {
        match self.try_load(key).await {
            Ok(Some(value)) => value,
            Ok(None) => {
                debug!(%key, "no persisted entry; using default");
                T::default()
            }
            Err(e) => {
                warn!(%key, error = %e, "failed to read persisted entry; using default");
                T::default()
            }
        }
    }

    /// Strict write.
    pub async fn try_save<T: Serialize + ?Sized>(
        &self,
        key: StoreKey,
        value: &T,
    ) -> Result<(), ClubHubError> {
        let raw = serde_json::to_string(value)?;
        self.kv.set(key.as_str(), &raw).await
    }

    /// Write `value` under `key`, logging and discarding any failure.
    pub async fn save<T: Serialize + ?Sized>(&self, key: StoreKey, value: &T) {
        if let Err(e) = self.try_save(key, value).await {
            warn!(%key, error = %e, "failed to persist entry; change kept in memory only");
        }
    }
}
