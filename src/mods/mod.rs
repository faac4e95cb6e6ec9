// Mod catalog module.
// Describes installable aircraft mods, their variants, and download tracks.

pub mod catalog;

use serde::Serialize;

pub use catalog::{builtin_mods, find_mod};

/// An installable aircraft modification.
#[derive(Debug, Clone, Serialize)]
pub struct Mod {
    pub name: String,
    /// Repository name under the configured GitHub owner.
    pub repo_name: String,
    pub aircraft_name: String,
    pub key: String,
    pub enabled: bool,
    pub background_image_urls: Vec<String>,
    pub short_description: String,
    pub description: String,
    /// Directory name inside the simulator's community folder.
    pub target_directory: String,
    pub variants: Vec<ModVariant>,
}

impl Mod {
    pub fn find_variant(&self, key: &str) -> Option<&ModVariant> {
        self.variants.iter().find(|variant| variant.key == key)
    }
}

/// A buildable flavor of a mod (e.g. an engine option).
#[derive(Debug, Clone, Serialize)]
pub struct ModVariant {
    pub name: String,
    pub key: String,
    pub image_alt: String,
    pub enabled: bool,
    pub tracks: Vec<ModTrack>,
}

impl ModVariant {
    pub fn find_track(&self, key: &str) -> Option<&ModTrack> {
        self.tracks.iter().find(|track| track.key == key)
    }
}

/// A download channel for a variant.
#[derive(Debug, Clone, Serialize)]
pub struct ModTrack {
    pub name: String,
    pub key: String,
    /// Download URL of the packaged build.
    pub url: String,
    pub kind: TrackKind,
    pub latest: LatestVersionSource,
    /// Cache key for this track's latest version name.
    pub cache_key: String,
}

impl ModTrack {
    pub fn is_experimental(&self) -> bool {
        matches!(self.kind, TrackKind::Experimental { .. })
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum TrackKind {
    Mainline,
    /// Shown behind a warning the user has to acknowledge.
    Experimental { warning: String },
}

/// How a track's latest version name is derived.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum LatestVersionSource {
    /// Name of the newest published release.
    Release,
    /// Abbreviated head commit of a branch.
    Commit { branch: String },
}
