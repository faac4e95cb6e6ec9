// Runtime configuration.
// Defaults overridable from the environment, then from command-line flags.

use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

use log::warn;

use crate::cache::{CacheStore, DEFAULT_VALIDITY, FileStore, MemoryStore};
use crate::error::Result;
use crate::github::GitHubClient;
use crate::github::client::GITHUB_API_BASE;

/// GitHub organization that publishes the mods.
pub const DEFAULT_OWNER: &str = "flybywiresim";

/// Timeout for a single HTTP request.
pub const DEFAULT_HTTP_TIMEOUT: Duration = Duration::from_secs(30);

#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub owner: String,
    pub api_base_url: String,
    pub token: Option<String>,
    /// Cache root; `None` falls back to the platform cache directory.
    pub cache_dir: Option<PathBuf>,
    /// Keep cache entries in memory only.
    pub ephemeral_cache: bool,
    pub release_validity: Duration,
    pub http_timeout: Duration,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            owner: DEFAULT_OWNER.to_string(),
            api_base_url: GITHUB_API_BASE.to_string(),
            token: None,
            cache_dir: None,
            ephemeral_cache: false,
            release_validity: DEFAULT_VALIDITY,
            http_timeout: DEFAULT_HTTP_TIMEOUT,
        }
    }
}

impl Config {
    /// Build from defaults and process environment variables.
    pub fn from_env() -> Self {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Build from defaults and an arbitrary variable lookup.
    /// Empty values are ignored.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let var = |name: &str| lookup(name).filter(|value| !value.trim().is_empty());
        let defaults = Self::default();

        Self {
            owner: var("FBW_OWNER").unwrap_or(defaults.owner),
            api_base_url: var("FBW_API_URL").unwrap_or(defaults.api_base_url),
            token: var("GITHUB_TOKEN"),
            cache_dir: var("FBW_CACHE_DIR").map(PathBuf::from),
            ..defaults
        }
    }

    /// Open the cache store this configuration describes.
    pub fn cache_store(&self) -> Arc<dyn CacheStore> {
        if self.ephemeral_cache {
            return Arc::new(MemoryStore::new());
        }

        match self.cache_dir.clone().map(FileStore::new) {
            Some(store) => Arc::new(store),
            None => match FileStore::default_location() {
                Some(store) => Arc::new(store),
                None => {
                    warn!("No cache directory available, caching in memory only");
                    Arc::new(MemoryStore::new())
                }
            },
        }
    }

    pub fn github_client(&self) -> Result<GitHubClient> {
        GitHubClient::new(&self.api_base_url, self.token.as_deref(), self.http_timeout)
    }
}
