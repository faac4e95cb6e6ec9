// Release filtering and change-type classification.
// Titles are compared character by character at fixed positions, not parsed as semver.

use std::sync::LazyLock;

use chrono::{DateTime, Utc};
use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::github::Release;

/// Matches release names that look like version tags (`v` followed by a digit).
static VERSION_TAG: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"v\d").expect("version tag pattern is valid"));

/// Character positions of the major, minor, and patch digits in `vX.Y.Z`.
const MAJOR_POS: usize = 1;
const MINOR_POS: usize = 3;
const PATCH_POS: usize = 5;

/// Size of the change a release introduces relative to its neighbor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChangeType {
    Major,
    Minor,
    Patch,
}

impl ChangeType {
    pub fn as_str(&self) -> &'static str {
        match self {
            ChangeType::Major => "major",
            ChangeType::Minor => "minor",
            ChangeType::Patch => "patch",
        }
    }
}

/// A classified release of a mod.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModVersion {
    pub title: String,
    pub date: DateTime<Utc>,
    #[serde(rename = "type")]
    pub change_type: ChangeType,
}

/// Whether a release name looks like a version tag.
pub fn is_version_tag(name: &str) -> bool {
    VERSION_TAG.is_match(name)
}

/// Keep releases whose name is a version tag, in upstream order, as
/// unclassified versions. Unnamed releases are dropped.
pub fn versions_from_releases(releases: &[Release]) -> Vec<ModVersion> {
    releases
        .iter()
        .filter_map(|release| {
            let name = release.name.as_deref().filter(|name| is_version_tag(name))?;
            Some(ModVersion {
                title: name.to_string(),
                date: release.date(),
                change_type: ChangeType::Minor,
            })
        })
        .collect()
}

/// Assign a change type to every version by comparing it with one neighbor:
/// the previous entry for the last element, the next entry otherwise.
///
/// Only the characters at positions 1, 3, and 5 are compared, so titles that
/// do not follow the single-digit `vX.Y.Z` layout are classified arbitrarily
/// (`v1.2.10` against `v1.2.11` reports no change).
pub fn classify(versions: &mut [ModVersion]) {
    let len = versions.len();

    for index in 0..len {
        let is_last = index + 1 == len;
        // A single entry is its own neighbor.
        let neighbor = if is_last { index.saturating_sub(1) } else { index + 1 };

        if let Some(change) =
            change_between(&versions[index].title, &versions[neighbor].title, is_last)
        {
            versions[index].change_type = change;
        }
    }
}

/// Positional comparison of two titles. `None` leaves the current type in place.
fn change_between(current: &str, other: &str, is_last: bool) -> Option<ChangeType> {
    let differs = |pos: usize| current.chars().nth(pos) != other.chars().nth(pos);

    if differs(MAJOR_POS) {
        Some(ChangeType::Major)
    } else if differs(MINOR_POS) {
        Some(ChangeType::Minor)
    } else if differs(PATCH_POS) {
        // The oldest entry in the window never drops to patch.
        Some(if is_last {
            ChangeType::Minor
        } else {
            ChangeType::Patch
        })
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn release(name: &str) -> Release {
        Release {
            name: Some(name.to_string()),
            tag_name: name.to_string(),
            published_at: Some(Utc::now()),
            created_at: None,
        }
    }

    fn versions(titles: &[&str]) -> Vec<ModVersion> {
        let releases: Vec<Release> = titles.iter().map(|t| release(t)).collect();
        versions_from_releases(&releases)
    }

    fn types(versions: &[ModVersion]) -> Vec<ChangeType> {
        versions.iter().map(|v| v.change_type).collect()
    }

    #[test]
    fn test_filter_keeps_version_tags_only() {
        let filtered = versions(&["v1.0.0", "beta", "v2.0.0-rc1", "1.0"]);
        let titles: Vec<&str> = filtered.iter().map(|v| v.title.as_str()).collect();
        assert_eq!(titles, vec!["v1.0.0", "v2.0.0-rc1"]);
    }

    #[test]
    fn test_filter_ignores_tag_of_unnamed_release() {
        let mut unnamed = release("v0.5.3");
        unnamed.name = None;
        let mut blank = release("v0.5.2");
        blank.name = Some(String::new());

        let filtered = versions_from_releases(&[unnamed, blank, release("v0.5.1")]);
        let titles: Vec<&str> = filtered.iter().map(|v| v.title.as_str()).collect();
        assert_eq!(titles, vec!["v0.5.1"]);
    }

    #[test]
    fn test_title_is_release_name_not_tag() {
        let mut named = release("v0.5.2 hotfix");
        named.tag_name = "v0.5.2".to_string();

        let filtered = versions_from_releases(&[named]);
        assert_eq!(filtered[0].title, "v0.5.2 hotfix");
    }

    #[test]
    fn test_filter_defaults_to_minor() {
        let filtered = versions(&["v0.5.2", "v0.5.1"]);
        assert!(filtered.iter().all(|v| v.change_type == ChangeType::Minor));
    }

    #[test]
    fn test_minor_bump_pair() {
        let mut list = versions(&["v1.0.0", "v1.1.0"]);
        classify(&mut list);
        assert_eq!(types(&list), vec![ChangeType::Minor, ChangeType::Minor]);
    }

    #[test]
    fn test_major_bump_pair() {
        let mut list = versions(&["v1.0.0", "v2.0.0"]);
        classify(&mut list);
        assert_eq!(types(&list), vec![ChangeType::Major, ChangeType::Major]);
    }

    #[test]
    fn test_single_release_stays_minor() {
        let mut list = versions(&["v1.0.0"]);
        classify(&mut list);
        assert_eq!(types(&list), vec![ChangeType::Minor]);
    }

    #[test]
    fn test_empty_list() {
        let mut list: Vec<ModVersion> = Vec::new();
        classify(&mut list);
        assert!(list.is_empty());
    }

    #[test]
    fn test_newest_first_history() {
        let mut list = versions(&["v0.5.2", "v0.5.1", "v0.5.0", "v0.4.0"]);
        classify(&mut list);
        assert_eq!(
            types(&list),
            vec![
                ChangeType::Patch,
                ChangeType::Patch,
                ChangeType::Minor,
                ChangeType::Minor
            ]
        );
    }

    #[test]
    fn test_last_patch_difference_is_minor() {
        let mut list = versions(&["v0.5.0", "v0.5.1"]);
        classify(&mut list);
        assert_eq!(types(&list), vec![ChangeType::Patch, ChangeType::Minor]);
    }

    #[test]
    fn test_classification_is_idempotent() {
        let mut list = versions(&["v0.6.0", "v0.5.2", "v0.5.1", "v1.0.0", "v0.4.0"]);
        classify(&mut list);
        let first = types(&list);
        classify(&mut list);
        assert_eq!(types(&list), first);
    }

    #[test]
    fn test_multi_digit_components_compare_positionally() {
        let mut list = versions(&["v1.2.10", "v1.2.11"]);
        classify(&mut list);
        assert_eq!(types(&list), vec![ChangeType::Minor, ChangeType::Minor]);

        let mut list = versions(&["v10.0.0", "v1.0.0"]);
        classify(&mut list);
        // Position 1 is '1' in both; position 3 is '.' vs '0'
        assert_eq!(types(&list), vec![ChangeType::Minor, ChangeType::Minor]);
    }

    #[test]
    fn test_short_titles_do_not_panic() {
        let mut list = versions(&["v1", "v1.2"]);
        classify(&mut list);
        assert_eq!(types(&list), vec![ChangeType::Minor, ChangeType::Minor]);
    }

    #[test]
    fn test_serializes_type_field_lowercase() {
        let version = ModVersion {
            title: "v0.5.2".to_string(),
            date: "2021-01-12T18:00:00Z".parse().unwrap(),
            change_type: ChangeType::Patch,
        };
        let json = serde_json::to_value(&version).unwrap();
        assert_eq!(json["type"], "patch");
        assert_eq!(json["title"], "v0.5.2");
    }
}
