// GitHub API response types.
// Defines structs for deserializing release and commit responses.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A published GitHub release.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Release {
    #[serde(default)]
    pub name: Option<String>,
    pub tag_name: String,
    /// Unset for drafts.
    #[serde(default)]
    pub published_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
}

impl Release {
    /// Release title, falling back to the tag when the release is unnamed.
    pub fn display_name(&self) -> &str {
        match self.name.as_deref() {
            Some(name) if !name.is_empty() => name,
            _ => &self.tag_name,
        }
    }

    /// Publication date, falling back to creation for unpublished drafts.
    pub fn date(&self) -> DateTime<Utc> {
        self.published_at
            .or(self.created_at)
            .unwrap_or_default()
    }
}

/// A commit as returned by the commits endpoint. Only the hash is used.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Commit {
    pub sha: String,
}

impl Commit {
    /// Abbreviated hash, as shown by `git log --oneline`.
    pub fn short_sha(&self) -> &str {
        match self.sha.char_indices().nth(7) {
            Some((end, _)) => &self.sha[..end],
            None => &self.sha,
        }
    }
}

/// Rate limit information from response headers.
#[derive(Debug, Clone, Default)]
pub struct RateLimit {
    pub limit: u64,
    pub remaining: u64,
    pub reset: u64,
}
