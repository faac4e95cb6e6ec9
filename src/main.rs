// Command-line front end for the installer core.
// Lists the mod catalog and prints release and track version information.

use std::path::PathBuf;
use std::process::ExitCode;
use std::sync::Arc;

use clap::{Parser, Subcommand};
use env_logger::Env;
use log::{error, warn};

use fbw_installer::mods::{builtin_mods, find_mod};
use fbw_installer::{Config, InstallerError, Mod, ModTrack, ReleaseClassifier, Result};

#[derive(Parser, Debug)]
#[command(
    name = "fbw-installer",
    author,
    version,
    about = "Inspect FlyByWire mod releases and download tracks"
)]
struct Cli {
    /// GitHub owner publishing the mods.
    #[arg(long, global = true)]
    owner: Option<String>,

    /// Base URL of the GitHub API.
    #[arg(long, global = true)]
    api_url: Option<String>,

    /// Directory for cached API responses.
    #[arg(long, global = true)]
    cache_dir: Option<PathBuf>,

    /// Bypass the on-disk cache.
    #[arg(long, global = true)]
    no_cache: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// List known mods, variants, and tracks.
    Mods,
    /// Show classified releases of a mod.
    Releases {
        /// Mod key, e.g. A32NX.
        #[arg(value_name = "MOD")]
        mod_key: String,
        /// Print JSON instead of a table.
        #[arg(long)]
        json: bool,
    },
    /// Show the latest version of a download track.
    Latest {
        /// Mod key, e.g. A32NX.
        #[arg(value_name = "MOD")]
        mod_key: String,
        /// Variant key, e.g. LEAP.
        variant: String,
        /// Track key, e.g. a32nx-stable.
        track: String,
    },
    /// Delete all cached API responses.
    ClearCache,
}

impl Cli {
    fn config(&self) -> Config {
        let mut config = Config::from_env();
        if let Some(owner) = &self.owner {
            config.owner = owner.clone();
        }
        if let Some(api_url) = &self.api_url {
            config.api_base_url = api_url.clone();
        }
        if let Some(cache_dir) = &self.cache_dir {
            config.cache_dir = Some(cache_dir.clone());
        }
        // Clearing always targets the on-disk store.
        config.ephemeral_cache = self.no_cache && !matches!(self.command, Command::ClearCache);
        config
    }
}

#[tokio::main]
async fn main() -> ExitCode {
    env_logger::Builder::from_env(Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();
    if cli.no_cache && matches!(cli.command, Command::ClearCache) {
        warn!("--no-cache has no effect on clear-cache; clearing the on-disk cache");
    }
    match run(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{}", e);
            ExitCode::FAILURE
        }
    }
}

async fn run(cli: Cli) -> Result<()> {
    let config = cli.config();
    let classifier = ReleaseClassifier::new(
        Arc::new(config.github_client()?),
        config.cache_store(),
        config.owner.clone(),
    )
    .with_validity(config.release_validity);

    match cli.command {
        Command::Mods => print_catalog(&builtin_mods()),
        Command::Releases { mod_key, json } => {
            let m = lookup_mod(&mod_key)?;
            let versions = classifier.mod_releases(&m).await?;
            if json {
                println!("{}", serde_json::to_string_pretty(&versions)?);
            } else {
                for version in &versions {
                    println!(
                        "{:<16} {:<6} {}",
                        version.title,
                        version.change_type.as_str(),
                        version.date.format("%Y-%m-%d")
                    );
                }
            }
        }
        Command::Latest {
            mod_key,
            variant,
            track,
        } => {
            let m = lookup_mod(&mod_key)?;
            let found = find_track(&m, &variant, &track)?;
            let version = classifier.latest_version(&m, found).resolve().await?;
            println!("{} {}: {}", m.name, found.name, version);
        }
        Command::ClearCache => classifier.clear_cache().await?,
    }

    Ok(())
}

fn lookup_mod(key: &str) -> Result<Mod> {
    find_mod(key).ok_or_else(|| InstallerError::UnknownMod(key.to_string()))
}

fn find_track<'a>(m: &'a Mod, variant_key: &str, track_key: &str) -> Result<&'a ModTrack> {
    m.find_variant(variant_key)
        .ok_or_else(|| InstallerError::UnknownVariant(variant_key.to_string()))?
        .find_track(track_key)
        .ok_or_else(|| InstallerError::UnknownTrack(track_key.to_string()))
}

fn print_catalog(mods: &[Mod]) {
    for m in mods {
        let status = if m.enabled { "" } else { " (coming soon)" };
        println!("{} - {}{}", m.key, m.short_description, status);
        for variant in &m.variants {
            println!("  {} [{}]", variant.name, variant.key);
            for track in &variant.tracks {
                let marker = if track.is_experimental() { " (experimental)" } else { "" };
                println!("    {:<16} {}{}", track.key, track.name, marker);
            }
        }
    }
}
