// Typed, time-bounded memoization on top of a CacheStore.
// A value is recomputed only when the stored entry is missing or expired.

use std::future::Future;
use std::marker::PhantomData;
use std::sync::Arc;
use std::time::Duration;

use log::{debug, warn};
use serde::{Serialize, de::DeserializeOwned};

use crate::error::Result;

use super::store::{CacheEntry, CacheStore};

/// Default validity for release metadata: 24 hours.
pub const DEFAULT_VALIDITY: Duration = Duration::from_secs(24 * 60 * 60);

/// A single named cache slot holding a value of type `T`.
///
/// There is no locking: two concurrent misses on the same key both run their
/// compute function and the last write wins.
pub struct DataCache<T> {
    key: String,
    validity: Duration,
    store: Arc<dyn CacheStore>,
    _value: PhantomData<fn() -> T>,
}

impl<T> DataCache<T>
where
    T: Serialize + DeserializeOwned,
{
    pub fn new(key: impl Into<String>, validity: Duration, store: Arc<dyn CacheStore>) -> Self {
        Self {
            key: key.into(),
            validity,
            store,
            _value: PhantomData,
        }
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    pub fn validity(&self) -> Duration {
        self.validity
    }

    /// Read the stored entry regardless of age.
    /// Entries that no longer decode are reported as absent.
    pub async fn read(&self) -> Result<Option<CacheEntry<T>>> {
        let Some(contents) = self.store.load(&self.key).await? else {
            return Ok(None);
        };

        match serde_json::from_str(&contents) {
            Ok(entry) => Ok(Some(entry)),
            Err(e) => {
                warn!("Discarding unreadable cache entry '{}': {}", self.key, e);
                Ok(None)
            }
        }
    }

    /// Return the cached value if it is still valid, otherwise run `compute`,
    /// persist its result, and return it.
    ///
    /// `compute` runs at most once. If it fails, nothing is written and the
    /// previous entry (stale or absent) is left in place.
    pub async fn fetch_or_compute<F, Fut>(&self, compute: F) -> Result<T>
    where
        F: FnOnce() -> Fut,
        Fut: Future<Output = Result<T>>,
    {
        if let Some(entry) = self.read().await? {
            if entry.is_valid(self.validity) {
                debug!("Cache hit for '{}'", self.key);
                return Ok(entry.value);
            }
            debug!("Cache entry '{}' expired", self.key);
        } else {
            debug!("Cache miss for '{}'", self.key);
        }

        let entry = CacheEntry::new(compute().await?);
        let json = serde_json::to_string(&entry)?;
        self.store.save(&self.key, &json).await?;

        Ok(entry.value)
    }

    /// Drop the stored entry so the next read recomputes.
    pub async fn invalidate(&self) -> Result<()> {
        self.store.remove(&self.key).await
    }
}
