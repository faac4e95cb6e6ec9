// GitHub API endpoint functions.
// Typed methods for the release-listing and newest-commit endpoints.

use crate::error::Result;

use super::client::GitHubClient;
use super::types::{Commit, Release};

impl GitHubClient {
    /// Get published releases for a repository, newest first.
    pub async fn get_releases(&self, owner: &str, repo: &str) -> Result<Vec<Release>> {
        let response = self
            .get(&format!("/repos/{}/{}/releases", owner, repo))
            .await?;
        let releases: Vec<Release> = response.json().await?;
        Ok(releases)
    }

    /// Get the head commit of a branch.
    pub async fn get_newest_commit(&self, owner: &str, repo: &str, branch: &str) -> Result<Commit> {
        let response = self
            .get(&format!("/repos/{}/{}/commits/{}", owner, repo, branch))
            .await?;
        let commit: Commit = response.json().await?;
        Ok(commit)
    }
}
