//! Config file discovery.
//!
//! Walks from the current directory up to the git root looking for
//! contains-snippet.toml.

use std::path::{Path, PathBuf};

use crate::config::{self, Config};
use crate::error::{Error, Result};

/// Name of the config file looked up during discovery.
pub const CONFIG_FILE_NAME: &str = "contains-snippet.toml";

/// Find contains-snippet.toml starting from `start_dir`, stopping at the git root.
pub fn find_config(start_dir: &Path) -> Option<PathBuf> {
    start_dir
        .ancestors()
        .find_map(|dir| {
            let candidate = dir.join(CONFIG_FILE_NAME);
            if candidate.is_file() {
                Some(Some(candidate))
            } else if dir.join(".git").exists() {
                // git root reached without a config
                Some(None)
            } else {
                None
            }
        })
        .flatten()
}

/// Resolve config path from CLI arg, env var, or discovery.
///
/// Priority:
/// 1. `-C`/`--config` (clap also reads `CONTAINS_SNIPPET_CONFIG`)
/// 2. Discovery from `cwd` up to the git root
/// 3. None (built-in defaults)
pub fn resolve_config(explicit: Option<&Path>, cwd: &Path) -> Result<Option<PathBuf>> {
    match explicit {
        Some(path) if path.is_file() => Ok(Some(path.to_path_buf())),
        Some(path) => Err(Error::Config {
            message: format!("config file not found: {}", path.display()),
            path: Some(path.to_path_buf()),
        }),
        None => Ok(find_config(cwd)),
    }
}

/// Resolve and load the config, falling back to defaults when none is found.
pub fn load_config(explicit: Option<&Path>, cwd: &Path) -> Result<Config> {
    match resolve_config(explicit, cwd)? {
        Some(path) => {
            tracing::debug!(path = %path.display(), "loading config");
            config::load(&path)
        }
        None => {
            tracing::debug!("no config file, using defaults");
            Ok(Config::default())
        }
    }
}

#[cfg(test)]
#[path = "discovery_tests.rs"]
mod tests;
