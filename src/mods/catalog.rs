// Built-in mod catalog.

use super::{LatestVersionSource, Mod, ModTrack, ModVariant, TrackKind};

const CDN_BASE: &str = "https://flybywiresim-packages.b-cdn.net";

const A32NX_DESCRIPTION: &str = "The A320neo (new engine option) is one of many upgrades introduced by Airbus to help maintain \
its A320 product line's position as the world's most advanced and fuel-efficient single-aisle \
aircraft family. The baseline A320neo jetliner has a choice of two new-generation engines \
(the PurePower PW1100G-JM from Pratt and Whitney and the LEAP-1A from CFM International) \
and features large, fuel-saving wingtip devices known as Sharklets.";

const FBW_WARNING: &str = "The custom fly-by-wire version contains an experimental handling system that more closely \
matches real-life controls in an A320neo. This system is in development and bugs are to be expected. \
See https://github.com/flybywiresim/a32nx/blob/fbw/docs/README.md before installing. \
No support will be offered via Discord help channels.";

const AP_WARNING: &str = "The custom autopilot version contains a very early experimental system that more closely \
matches the A320neo autopilot and fixes multiple issues. This system is in development and bugs are to be expected. \
See https://github.com/flybywiresim/a32nx/blob/autopilot/docs/README.md before installing. \
No support will be offered via Discord help channels.";

fn track(
    name: &str,
    key: &str,
    path: &str,
    kind: TrackKind,
    latest: LatestVersionSource,
    cache_key: &str,
) -> ModTrack {
    ModTrack {
        name: name.to_string(),
        key: key.to_string(),
        url: format!("{}/{}", CDN_BASE, path),
        kind,
        latest,
        cache_key: cache_key.to_string(),
    }
}

fn branch(name: &str) -> LatestVersionSource {
    LatestVersionSource::Commit {
        branch: name.to_string(),
    }
}

fn experimental(warning: &str) -> TrackKind {
    TrackKind::Experimental {
        warning: warning.to_string(),
    }
}

/// The mods the launcher knows how to install.
pub fn builtin_mods() -> Vec<Mod> {
    vec![
        Mod {
            name: "A32NX".to_string(),
            repo_name: "a32nx".to_string(),
            aircraft_name: "A320neo".to_string(),
            key: "A32NX".to_string(),
            enabled: true,
            background_image_urls: vec![
                "https://nyc3.digitaloceanspaces.com/fselite/2020/11/123263426_126778999193686_7966913238295950901_o.png"
                    .to_string(),
            ],
            short_description: "Airbus A320neo Series".to_string(),
            description: A32NX_DESCRIPTION.to_string(),
            target_directory: "A32NX".to_string(),
            variants: vec![ModVariant {
                name: "Neo (CFM LEAP-1A)".to_string(),
                key: "LEAP".to_string(),
                image_alt: "CFM Leap-1".to_string(),
                enabled: true,
                tracks: vec![
                    track(
                        "Stable",
                        "a32nx-stable",
                        "stable/A32NX-stable.zip",
                        TrackKind::Mainline,
                        LatestVersionSource::Release,
                        "latest_version_stable",
                    ),
                    track(
                        "Development",
                        "a32nx-dev",
                        "vmaster/A32NX-master.zip",
                        TrackKind::Mainline,
                        branch("master"),
                        "latest_version_dev",
                    ),
                    track(
                        "Custom FBW",
                        "a32nx-fbw",
                        "vmaster-cfbw/A32NX-master-cfbw.zip",
                        experimental(FBW_WARNING),
                        branch("fbw"),
                        "latest_version_fbw",
                    ),
                    track(
                        "Custom FBW+AP",
                        "a32nx-ap",
                        "vmaster-cfbw-cap/A32NX-master-cfbw-cap.zip",
                        experimental(AP_WARNING),
                        branch("autopilot"),
                        "latest_version_ap",
                    ),
                ],
            }],
        },
        Mod {
            name: "A380X".to_string(),
            repo_name: "a380x".to_string(),
            aircraft_name: "A380".to_string(),
            key: "A380X".to_string(),
            enabled: false,
            background_image_urls: Vec::new(),
            short_description: "Airbus A380-800".to_string(),
            description: String::new(),
            target_directory: "A380".to_string(),
            variants: Vec::new(),
        },
    ]
}

/// Look a mod up by key, ignoring case.
pub fn find_mod(key: &str) -> Option<Mod> {
    builtin_mods()
        .into_iter()
        .find(|m| m.key.eq_ignore_ascii_case(key))
}
