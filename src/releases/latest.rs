// Per-track latest version lookup.

use std::sync::Arc;

use log::debug;

use crate::cache::DataCache;
use crate::error::{InstallerError, Result};
use crate::github::ReleaseSource;
use crate::mods::LatestVersionSource;

/// A track's latest version name, fetched on first [`resolve`](Self::resolve)
/// and cached under the track's own key.
pub struct LatestVersion {
    source: Arc<dyn ReleaseSource>,
    cache: DataCache<String>,
    owner: String,
    repo: String,
    kind: LatestVersionSource,
}

impl LatestVersion {
    pub(crate) fn new(
        source: Arc<dyn ReleaseSource>,
        cache: DataCache<String>,
        owner: String,
        repo: String,
        kind: LatestVersionSource,
    ) -> Self {
        Self {
            source,
            cache,
            owner,
            repo,
            kind,
        }
    }

    pub fn cache_key(&self) -> &str {
        self.cache.key()
    }

    /// Resolve the version name: the newest release name for release tracks,
    /// the abbreviated head commit for branch tracks.
    pub async fn resolve(&self) -> Result<String> {
        let source = self.source.as_ref();
        let owner = self.owner.as_str();
        let repo = self.repo.as_str();
        let kind = &self.kind;

        self.cache
            .fetch_or_compute(move || fetch_latest(source, owner, repo, kind))
            .await
    }
}

/// Derive the version name from the network without touching the cache.
async fn fetch_latest(
    source: &dyn ReleaseSource,
    owner: &str,
    repo: &str,
    kind: &LatestVersionSource,
) -> Result<String> {
    match kind {
        LatestVersionSource::Release => {
            let releases = source.releases(owner, repo).await?;
            let newest = releases.first().ok_or_else(|| InstallerError::NoReleases {
                owner: owner.to_string(),
                repo: repo.to_string(),
            })?;
            Ok(newest.display_name().to_string())
        }
        LatestVersionSource::Commit { branch } => {
            let commit = source.newest_commit(owner, repo, branch).await?;
            debug!("Head of {}/{}@{} is {}", owner, repo, branch, commit.sha);
            Ok(commit.short_sha().to_string())
        }
    }
}
