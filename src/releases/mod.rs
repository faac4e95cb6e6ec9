// Release metadata module.
// Fetches, caches, and classifies mod releases, and resolves per-track latest versions.

pub mod classify;
pub mod latest;

use std::sync::Arc;
use std::time::Duration;

use log::debug;

use crate::cache::{CacheStore, DataCache, DEFAULT_VALIDITY};
use crate::error::Result;
use crate::github::ReleaseSource;
use crate::mods::{Mod, ModTrack};

pub use classify::{ChangeType, ModVersion, classify, is_version_tag, versions_from_releases};
pub use latest::LatestVersion;

/// Cache key prefix for release lists. Each repository gets its own entry
/// (`releases_<repo>`) so one mod's list is never served for another.
pub const RELEASES_CACHE_KEY: &str = "releases";

/// Entry point for release lookups against one GitHub owner.
#[derive(Clone)]
pub struct ReleaseClassifier {
    source: Arc<dyn ReleaseSource>,
    store: Arc<dyn CacheStore>,
    owner: String,
    validity: Duration,
}

impl ReleaseClassifier {
    pub fn new(
        source: Arc<dyn ReleaseSource>,
        store: Arc<dyn CacheStore>,
        owner: impl Into<String>,
    ) -> Self {
        Self {
            source,
            store,
            owner: owner.into(),
            validity: DEFAULT_VALIDITY,
        }
    }

    /// Override the validity window used for every cache this classifier creates.
    pub fn with_validity(mut self, validity: Duration) -> Self {
        self.validity = validity;
        self
    }

    pub fn owner(&self) -> &str {
        &self.owner
    }

    /// The store backing every cache entry, for lifecycle operations such as clearing.
    pub fn store(&self) -> &Arc<dyn CacheStore> {
        &self.store
    }

    fn releases_cache(&self, repo: &str) -> DataCache<Vec<ModVersion>> {
        DataCache::new(
            format!("{}_{}", RELEASES_CACHE_KEY, repo),
            self.validity,
            self.store.clone(),
        )
    }

    /// Version-tagged releases of a mod in upstream order, each classified
    /// against its neighbor.
    pub async fn mod_releases(&self, m: &Mod) -> Result<Vec<ModVersion>> {
        let source = self.source.as_ref();
        let owner = self.owner.as_str();
        let repo = m.repo_name.as_str();

        let mut versions = self
            .releases_cache(repo)
            .fetch_or_compute(move || fetch_versions(source, owner, repo))
            .await?;

        classify(&mut versions);
        Ok(versions)
    }

    /// Deferred lookup of a track's latest version name. Nothing is fetched
    /// until [`LatestVersion::resolve`] is awaited.
    pub fn latest_version(&self, m: &Mod, track: &ModTrack) -> LatestVersion {
        LatestVersion::new(
            self.source.clone(),
            DataCache::new(track.cache_key.clone(), self.validity, self.store.clone()),
            self.owner.clone(),
            m.repo_name.clone(),
            track.latest.clone(),
        )
    }

    /// Drop every cached entry.
    pub async fn clear_cache(&self) -> Result<()> {
        self.store.clear().await
    }
}

/// Fetch and filter releases without touching the cache.
async fn fetch_versions(
    source: &dyn ReleaseSource,
    owner: &str,
    repo: &str,
) -> Result<Vec<ModVersion>> {
    let releases = source.releases(owner, repo).await?;
    debug!("Fetched {} releases for {}/{}", releases.len(), owner, repo);
    Ok(versions_from_releases(&releases))
}

#[cfg(test)]
pub(crate) mod testing {
    use std::collections::HashMap;
    use std::sync::Mutex;
    use std::sync::atomic::{AtomicUsize, Ordering};

    use async_trait::async_trait;
    use chrono::{Duration, Utc};

    use crate::error::{InstallerError, Result};
    use crate::github::{Commit, Release, ReleaseSource};

    /// In-memory release source that counts calls.
    #[derive(Default)]
    pub struct FakeSource {
        pub releases: Mutex<HashMap<String, Vec<Release>>>,
        pub commits: Mutex<HashMap<String, String>>,
        pub release_calls: AtomicUsize,
        pub commit_calls: AtomicUsize,
        pub fail: bool,
    }

    impl FakeSource {
        pub fn with_releases(repo: &str, names: &[&str]) -> Self {
            let source = Self::default();
            source.set_releases(repo, names);
            source
        }

        pub fn failing() -> Self {
            Self {
                fail: true,
                ..Self::default()
            }
        }

        /// Releases are dated one day apart, newest first.
        pub fn set_releases(&self, repo: &str, names: &[&str]) {
            let now = Utc::now();
            let releases = names
                .iter()
                .enumerate()
                .map(|(i, name)| Release {
                    name: Some(name.to_string()),
                    tag_name: name.to_string(),
                    published_at: Some(now - Duration::days(i as i64)),
                    created_at: None,
                })
                .collect();
            self.releases
                .lock()
                .unwrap()
                .insert(repo.to_string(), releases);
        }

        pub fn set_commit(&self, branch: &str, sha: &str) {
            self.commits
                .lock()
                .unwrap()
                .insert(branch.to_string(), sha.to_string());
        }

        pub fn release_calls(&self) -> usize {
            self.release_calls.load(Ordering::SeqCst)
        }

        pub fn commit_calls(&self) -> usize {
            self.commit_calls.load(Ordering::SeqCst)
        }
    }

    #[async_trait]
    impl ReleaseSource for FakeSource {
        async fn releases(&self, _owner: &str, repo: &str) -> Result<Vec<Release>> {
            self.release_calls.fetch_add(1, Ordering::SeqCst);
            if self.fail {
                return Err(InstallerError::Other("network unreachable".to_string()));
            }
            Ok(self
                .releases
                .lock()
                .unwrap()
                .get(repo)
                .cloned()
                .unwrap_or_default())
        }

        async fn newest_commit(&self, _owner: &str, _repo: &str, branch: &str) -> Result<Commit> {
            self.commit_calls.fetch_add(1, Ordering::SeqCst);
            if self.fail {
                return Err(InstallerError::Other("network unreachable".to_string()));
            }
            self.commits
                .lock()
                .unwrap()
                .get(branch)
                .map(|sha| Commit { sha: sha.clone() })
                .ok_or_else(|| InstallerError::NotFound(branch.to_string()))
        }
    }
}
