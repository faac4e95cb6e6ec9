// Release metadata core for the FlyByWire installer.
// Mod catalog, GitHub release lookups, and the on-disk cache that fronts them.

pub mod cache;
pub mod config;
pub mod error;
pub mod github;
pub mod mods;
pub mod releases;

pub use config::Config;
pub use error::{InstallerError, Result};
pub use mods::{Mod, ModTrack, ModVariant};
pub use releases::{ChangeType, LatestVersion, ModVersion, ReleaseClassifier};
