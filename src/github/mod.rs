// GitHub API module.
// Provides the client, response types, and the release source seam used by the cache layer.

pub mod client;
pub mod endpoints;
pub mod source;
pub mod types;

pub use client::GitHubClient;
pub use source::ReleaseSource;
pub use types::*;
