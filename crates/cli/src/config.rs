//! Configuration parsing and validation.
//!
//! Handles contains-snippet.toml parsing with version validation and unknown
//! key warnings:
//!
//! ```toml
//! version = 1
//! case_insensitive_extensions = true
//!
//! [prefixes]
//! ".js" = "//"
//! ".sql" = "--"
//! ".txt" = "raw"
//! ```

use std::collections::BTreeMap;
use std::path::Path;

use serde::Deserialize;

use crate::error::{Error, Result};
use crate::strategy::{MatchStrategy, normalize_extension};

/// Minimum config structure for version checking.
#[derive(Deserialize)]
struct VersionOnly {
    version: Option<i64>,
}

/// Full configuration.
#[derive(Debug, Deserialize)]
pub struct Config {
    /// Config file version (must be 1).
    pub version: i64,

    /// Extension to comment marker (or `raw`).
    #[serde(default)]
    pub prefixes: BTreeMap<String, String>,

    /// Treat `.MD` like `.md` (default: true).
    #[serde(default = "Config::default_case_insensitive")]
    pub case_insensitive_extensions: bool,

    #[serde(flatten)]
    unknown: BTreeMap<String, toml::Value>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            version: SUPPORTED_VERSION,
            prefixes: BTreeMap::new(),
            case_insensitive_extensions: Self::default_case_insensitive(),
            unknown: BTreeMap::new(),
        }
    }
}

impl Config {
    fn default_case_insensitive() -> bool {
        true
    }

    /// Keys present in the file that this version does not understand.
    pub fn unknown_keys(&self) -> impl Iterator<Item = &str> {
        self.unknown.keys().map(String::as_str)
    }

    /// Convert `[prefixes]` into strategy overrides.
    pub fn prefix_overrides(&self) -> Result<BTreeMap<String, MatchStrategy>> {
        let mut overrides = BTreeMap::new();
        for (ext, value) in &self.prefixes {
            let value = value.trim();
            if ext.trim().trim_start_matches('.').is_empty() || value.is_empty() {
                return Err(Error::Config {
                    message: format!("invalid prefixes entry `{ext}` = `{value}`"),
                    path: None,
                });
            }
            overrides.insert(
                normalize_extension(ext),
                MatchStrategy::from_prefix_value(value),
            );
        }
        Ok(overrides)
    }
}

/// Currently supported config version.
pub const SUPPORTED_VERSION: i64 = 1;

/// Load and validate config from a file path.
pub fn load(path: &Path) -> Result<Config> {
    let content = std::fs::read_to_string(path).map_err(|e| Error::Io {
        path: path.to_path_buf(),
        source: e,
    })?;

    parse(&content, path)
}

/// Parse config from string content.
pub fn parse(content: &str, path: &Path) -> Result<Config> {
    // First check version
    let version_check: VersionOnly = toml::from_str(content).map_err(|e| Error::Config {
        message: e.to_string(),
        path: Some(path.to_path_buf()),
    })?;

    let version = version_check.version.ok_or_else(|| Error::Config {
        message: "missing required field: version".to_string(),
        path: Some(path.to_path_buf()),
    })?;

    if version != SUPPORTED_VERSION {
        return Err(Error::Config {
            message: format!(
                "unsupported config version {version} (supported: {SUPPORTED_VERSION})"
            ),
            path: Some(path.to_path_buf()),
        });
    }

    let config: Config = toml::from_str(content).map_err(|e| Error::Config {
        message: e.to_string(),
        path: Some(path.to_path_buf()),
    })?;

    for key in config.unknown_keys() {
        warn_unknown_key(path, key);
    }

    // Surface bad entries with the file path attached.
    config.prefix_overrides().map_err(|e| match e {
        Error::Config { message, .. } => Error::Config {
            message,
            path: Some(path.to_path_buf()),
        },
        other => other,
    })?;

    Ok(config)
}

fn warn_unknown_key(path: &Path, key: &str) {
    tracing::warn!(path = %path.display(), key, "unrecognized config field");
    eprintln!(
        "contains-snippet: warning: {}: unrecognized field `{}` (ignored)",
        path.display(),
        key
    );
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod tests;
