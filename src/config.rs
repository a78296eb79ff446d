// Command-line arguments and run configuration.
// Turns parsed CLI flags into the explicit parameters the fetch and filter stages take.

use std::path::PathBuf;

use clap::Parser;
use tracing::Level;

use crate::error::Result;
use crate::filter::Matcher;

/// Default cache file, relative to the working directory.
pub const DEFAULT_CACHE_FILE: &str = "ranking-downloads.json";

/// Action word that forces a refetch.
pub const FETCH_ACTION: &str = "fetch";

/// Scan the GNOME extensions catalog for an author's extensions and
/// extensions with related keywords.
#[derive(Debug, Clone, Parser)]
#[command(name = "ego-ranking", version, about)]
pub struct Cli {
    /// `fetch` refetches the catalog and overwrites the cache; anything else uses the cache
    pub action: Option<String>,

    /// Cache file holding the full extension list
    #[arg(long, env = "EGO_RANKING_CACHE", default_value = DEFAULT_CACHE_FILE)]
    pub cache: PathBuf,

    /// Sort order requested from the catalog
    #[arg(long, default_value = "downloads")]
    pub sort: Option<String>,

    /// Only fetch extensions for this shell version
    #[arg(long)]
    pub shell_version: Option<String>,

    /// Creator whose extensions are highlighted
    #[arg(long, default_value = "Deminder")]
    pub creator: String,

    /// Case-insensitive pattern searched in name and description
    #[arg(long, default_value = "Shutdown|OSD")]
    pub pattern: String,

    /// Shell version whose absence marks an extension as [old]
    #[arg(long, default_value = "43")]
    pub current_version: String,

    /// Increase log verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Only log errors
    #[arg(short, long, conflicts_with = "verbose")]
    pub quiet: bool,
}

impl Cli {
    pub fn refetch(&self) -> bool {
        self.action.as_deref() == Some(FETCH_ACTION)
    }

    pub fn log_level(&self) -> Level {
        match self.verbose {
            0 if self.quiet => Level::ERROR,
            0 => Level::WARN,
            1 => Level::INFO,
            2 => Level::DEBUG,
            _ => Level::TRACE,
        }
    }

    pub fn config(&self) -> Config {
        Config {
            cache_path: self.cache.clone(),
            refetch: self.refetch(),
            sort: self.sort.clone().filter(|s| !s.is_empty()),
            shell_version: self.shell_version.clone(),
        }
    }

    pub fn matcher(&self) -> Result<Matcher> {
        Matcher::new(&self.creator, &self.pattern, &self.current_version)
    }
}

/// Parameters for loading the extension list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Cache file location.
    pub cache_path: PathBuf,
    /// Ignore an existing cache and fetch again.
    pub refetch: bool,
    pub sort: Option<String>,
    pub shell_version: Option<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            cache_path: PathBuf::from(DEFAULT_CACHE_FILE),
            refetch: false,
            sort: Some("downloads".to_string()),
            shell_version: None,
        }
    }
}
