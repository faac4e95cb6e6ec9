// Cache store for reading and writing cache entries.
// Handles entry timestamps, validity checks, and the persistence backends.

use std::collections::HashMap;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use std::time::Duration;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tempfile::NamedTempFile;
use tokio::fs;

use crate::error::{InstallerError, Result};

use super::paths;

/// A cached value with the time it was computed.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CacheEntry<T> {
    /// The cached value.
    pub value: T,
    /// When the value was computed.
    pub created_at: DateTime<Utc>,
}

impl<T> CacheEntry<T> {
    /// Create a new entry stamped with the current time.
    pub fn new(value: T) -> Self {
        Self {
            value,
            created_at: Utc::now(),
        }
    }

    /// Check if this entry is older than the validity window.
    /// Entries stamped in the future count as expired.
    pub fn is_expired(&self, validity: Duration) -> bool {
        let elapsed = Utc::now()
            .signed_duration_since(self.created_at)
            .to_std()
            .unwrap_or(Duration::MAX);

        elapsed >= validity
    }

    /// Check if this entry is still inside the validity window.
    pub fn is_valid(&self, validity: Duration) -> bool {
        !self.is_expired(validity)
    }
}

/// Key-value persistence behind a [`DataCache`](super::DataCache).
///
/// Values are opaque serialized entries; the store never interprets them.
#[async_trait]
pub trait CacheStore: Send + Sync {
    /// Load the raw entry stored under `key`, if any.
    async fn load(&self, key: &str) -> Result<Option<String>>;

    /// Replace the entry stored under `key`.
    async fn save(&self, key: &str, contents: &str) -> Result<()>;

    /// Remove the entry stored under `key`. Missing keys are not an error.
    async fn remove(&self, key: &str) -> Result<()>;

    /// Remove every entry.
    async fn clear(&self) -> Result<()>;
}

/// Filesystem store: one JSON file per key under a root directory.
#[derive(Debug, Clone)]
pub struct FileStore {
    root: PathBuf,
}

impl FileStore {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Store rooted at the platform cache directory, if one can be resolved.
    pub fn default_location() -> Option<Self> {
        paths::cache_dir().map(Self::new)
    }

    pub fn root(&self) -> &Path {
        &self.root
    }
}

#[async_trait]
impl CacheStore for FileStore {
    async fn load(&self, key: &str) -> Result<Option<String>> {
        let path = paths::entry_path(&self.root, key);
        match fs::read_to_string(&path).await {
            Ok(contents) => Ok(Some(contents)),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    async fn save(&self, key: &str, contents: &str) -> Result<()> {
        let path = paths::entry_path(&self.root, key);
        let contents = contents.to_owned();

        tokio::task::spawn_blocking(move || write_atomic(&path, contents.as_bytes()))
            .await
            .map_err(|e| InstallerError::Other(format!("cache write task failed: {}", e)))?
    }

    async fn remove(&self, key: &str) -> Result<()> {
        let path = paths::entry_path(&self.root, key);
        match fs::remove_file(&path).await {
            Err(e) if e.kind() != io::ErrorKind::NotFound => Err(e.into()),
            _ => Ok(()),
        }
    }

    async fn clear(&self) -> Result<()> {
        let dir = paths::entries_dir(&self.root);
        match fs::remove_dir_all(&dir).await {
            Err(e) if e.kind() != io::ErrorKind::NotFound => Err(e.into()),
            _ => Ok(()),
        }
    }
}

/// Write `contents` to `path` through a temp file unique to this write,
/// so overlapping writers to one key never share a temp path.
fn write_atomic(path: &Path, contents: &[u8]) -> Result<()> {
    let parent = path.parent().unwrap_or_else(|| Path::new("."));

    // Ensure parent directory exists
    std::fs::create_dir_all(parent)?;

    let mut file = NamedTempFile::new_in(parent)?;
    file.write_all(contents)?;
    file.as_file().sync_all()?;
    file.persist(path).map_err(|e| e.error)?;

    Ok(())
}

/// In-process store. Contents are lost when the store is dropped.
#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: Mutex<HashMap<String, String>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn entries(&self) -> std::sync::MutexGuard<'_, HashMap<String, String>> {
        self.entries.lock().unwrap_or_else(|e| e.into_inner())
    }
}

#[async_trait]
impl CacheStore for MemoryStore {
    async fn load(&self, key: &str) -> Result<Option<String>> {
        Ok(self.entries().get(key).cloned())
    }

    async fn save(&self, key: &str, contents: &str) -> Result<()> {
        self.entries().insert(key.to_string(), contents.to_string());
        Ok(())
    }

    async fn remove(&self, key: &str) -> Result<()> {
        self.entries().remove(key);
        Ok(())
    }

    async fn clear(&self) -> Result<()> {
        self.entries().clear();
        Ok(())
    }
}
