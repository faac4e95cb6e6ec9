// Release source abstraction.
// The cache layer depends on this trait rather than on the HTTP client directly.

use async_trait::async_trait;

use crate::error::Result;

use super::client::GitHubClient;
use super::types::{Commit, Release};

/// Upstream provider of release listings and branch heads.
#[async_trait]
pub trait ReleaseSource: Send + Sync {
    /// Published releases for `owner/repo` in upstream order.
    async fn releases(&self, owner: &str, repo: &str) -> Result<Vec<Release>>;

    /// Head commit of `branch` in `owner/repo`.
    async fn newest_commit(&self, owner: &str, repo: &str, branch: &str) -> Result<Commit>;
}

#[async_trait]
impl ReleaseSource for GitHubClient {
    async fn releases(&self, owner: &str, repo: &str) -> Result<Vec<Release>> {
        self.get_releases(owner, repo).await
    }

    async fn newest_commit(&self, owner: &str, repo: &str, branch: &str) -> Result<Commit> {
        self.get_newest_commit(owner, repo, branch).await
    }
}
