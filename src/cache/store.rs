// Cache store for the fetched extension list.
// Presence-based: a cache file on disk is used as-is until a refetch is requested.

use std::fs;
use std::io::Write;
use std::path::Path;

use chrono::{DateTime, Utc};
use tracing::{debug, info};

use crate::catalog::{CatalogClient, Extension};
use crate::config::Config;
use crate::error::Result;

/// Where the extension list of a run came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Source {
    Cache,
    Network,
}

/// Read the cached extension list, or `None` if no cache file exists.
pub fn read_extensions(path: &Path) -> Result<Option<Vec<Extension>>> {
    if !path.exists() {
        return Ok(None);
    }

    let contents = fs::read_to_string(path)?;
    let extensions: Vec<Extension> = serde_json::from_str(&contents)?;
    Ok(Some(extensions))
}

/// Write the extension list as compact JSON, replacing any previous cache.
pub fn write_extensions(path: &Path, extensions: &[Extension]) -> Result<()> {
    // Ensure parent directory exists
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)?;
    }

    let json = serde_json::to_string(extensions)?;

    // Write atomically via temp file
    let temp_path = path.with_extension("tmp");
    let mut file = fs::File::create(&temp_path)?;
    file.write_all(json.as_bytes())?;
    file.sync_all()?;
    fs::rename(&temp_path, path)?;

    Ok(())
}

/// Get the modification time of a cache file.
pub fn modified_at(path: &Path) -> Option<DateTime<Utc>> {
    fs::metadata(path)
        .and_then(|meta| meta.modified())
        .ok()
        .map(DateTime::<Utc>::from)
}

/// Load the extension list from cache, or fetch it and refresh the cache.
///
/// The cache is only rewritten once every page has been fetched, so a
/// failed refetch leaves the previous file untouched.
pub async fn load_or_fetch(
    config: &Config,
    client: &CatalogClient,
    on_page: impl FnMut(u64),
) -> Result<(Vec<Extension>, Source)> {
    let path = config.cache_path.as_path();

    if !config.refetch {
        if let Some(extensions) = read_extensions(path)? {
            info!(
                path = %path.display(),
                records = extensions.len(),
                "using cached extension list"
            );
            if let Some(at) = modified_at(path) {
                debug!(cached_at = %at.format("%Y-%m-%d %H:%M:%S"), "cache age");
            }
            return Ok((extensions, Source::Cache));
        }
        info!(path = %path.display(), "no cache file, fetching catalog");
    } else {
        info!(path = %path.display(), "refetch requested");
    }

    let extensions = client
        .fetch_all(
            config.sort.as_deref(),
            config.shell_version.as_deref(),
            on_page,
        )
        .await?;
    write_extensions(path, &extensions)?;
    debug!(path = %path.display(), records = extensions.len(), "cache written");

    Ok((extensions, Source::Network))
}
