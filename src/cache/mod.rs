// Cache module for time-bounded memoization of remote data.
// Persists release metadata so the GitHub API is hit at most once per validity window.

pub mod data_cache;
pub mod paths;
pub mod store;

pub use data_cache::{DataCache, DEFAULT_VALIDITY};
pub use store::{CacheEntry, CacheStore, FileStore, MemoryStore};
