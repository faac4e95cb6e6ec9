// Error types for the installer core.
// Covers GitHub API failures, cache persistence errors, and catalog lookups.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum InstallerError {
    #[error("GitHub API error: {0}")]
    Api(#[from] reqwest::Error),

    #[error("Authentication failed: invalid or expired token")]
    Unauthorized,

    #[error("Resource not found: {0}")]
    NotFound(String),

    #[error("Rate limit exceeded, resets at {reset_at}")]
    RateLimited { reset_at: String },

    #[error("No releases published for {owner}/{repo}")]
    NoReleases { owner: String, repo: String },

    #[error("Unknown mod: {0}")]
    UnknownMod(String),

    #[error("Unknown variant: {0}")]
    UnknownVariant(String),

    #[error("Unknown track: {0}")]
    UnknownTrack(String),

    #[error("JSON parsing error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("{0}")]
    Other(String),
}

pub type Result<T> = std::result::Result<T, InstallerError>;
