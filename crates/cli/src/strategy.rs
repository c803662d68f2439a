// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Extension-based strategy selection.
//!
//! Built-in table:
//!
//! | extension            | strategy              |
//! |----------------------|-----------------------|
//! | `.md`                | raw substring         |
//! | `.py` `.yml` `.yaml` | commented, marker `#` |
//!
//! Anything else is an unsupported file type unless a prefix map entry or a
//! forced comment prefix covers it.

use std::collections::BTreeMap;
use std::fmt;
use std::path::Path;

use serde::Serialize;

use crate::error::{Error, Result};

/// Comment marker used by the built-in commented extensions.
pub const HASH_MARKER: &str = "#";

/// Prefix map value meaning "use raw substring matching".
pub const RAW_VALUE: &str = "raw";

/// Built-in extension table. `None` means raw matching.
pub const BUILTIN_PREFIXES: &[(&str, Option<&str>)] = &[
    (".md", None),
    (".py", Some(HASH_MARKER)),
    (".yml", Some(HASH_MARKER)),
    (".yaml", Some(HASH_MARKER)),
];

/// How a target file is searched for the snippet.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum MatchStrategy {
    /// Snippet must appear verbatim.
    RawSubstring,
    /// Snippet lines must appear prefixed by `marker`.
    CommentedMatch { marker: String },
}

impl MatchStrategy {
    pub fn commented(marker: impl Into<String>) -> Self {
        MatchStrategy::CommentedMatch {
            marker: marker.into(),
        }
    }

    /// Parse a prefix map value: `raw` (any case) or a comment marker.
    pub fn from_prefix_value(value: &str) -> Self {
        if value.eq_ignore_ascii_case(RAW_VALUE) {
            MatchStrategy::RawSubstring
        } else {
            MatchStrategy::commented(value)
        }
    }

    pub fn marker(&self) -> Option<&str> {
        match self {
            MatchStrategy::RawSubstring => None,
            MatchStrategy::CommentedMatch { marker } => Some(marker),
        }
    }
}

impl fmt::Display for MatchStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MatchStrategy::RawSubstring => write!(f, "raw"),
            MatchStrategy::CommentedMatch { marker } => write!(f, "commented, prefix `{marker}`"),
        }
    }
}

/// Normalize an extension key: trimmed, leading dot. Case is kept; the
/// selector folds it when matching case-insensitively.
pub fn normalize_extension(ext: &str) -> String {
    let ext = ext.trim();
    if ext.starts_with('.') {
        ext.to_string()
    } else {
        format!(".{ext}")
    }
}

/// Parse a `--comment-prefix-map` value such as `.js=//,.ts=//,.md=raw`.
///
/// Empty segments are skipped. Extensions are normalized with
/// [`normalize_extension`].
pub fn parse_prefix_map(map_arg: &str) -> Result<BTreeMap<String, MatchStrategy>> {
    let mut map = BTreeMap::new();

    for entry in map_arg.split(',') {
        if entry.trim().is_empty() {
            continue;
        }

        let Some((ext, value)) = entry.split_once('=') else {
            return Err(Error::Argument(format!(
                "invalid prefix map entry `{}`: expected EXT=PREFIX",
                entry.trim()
            )));
        };

        let ext = ext.trim();
        let value = value.trim();
        if ext.is_empty() || ext == "." {
            return Err(Error::Argument(format!(
                "invalid prefix map entry `{}`: missing extension",
                entry.trim()
            )));
        }
        if value.is_empty() {
            return Err(Error::Argument(format!(
                "invalid prefix map entry `{}`: missing prefix",
                entry.trim()
            )));
        }

        map.insert(
            normalize_extension(ext),
            MatchStrategy::from_prefix_value(value),
        );
    }

    Ok(map)
}

/// Maps file extensions to match strategies.
#[derive(Debug, Clone)]
pub struct StrategySelector {
    table: BTreeMap<String, MatchStrategy>,
    forced: Option<MatchStrategy>,
    case_insensitive: bool,
}

impl Default for StrategySelector {
    fn default() -> Self {
        Self::builtin()
    }
}

impl StrategySelector {
    /// Selector with the built-in table, case-insensitive extensions.
    pub fn builtin() -> Self {
        let table = BUILTIN_PREFIXES
            .iter()
            .map(|(ext, marker)| {
                let strategy = match marker {
                    Some(m) => MatchStrategy::commented(*m),
                    None => MatchStrategy::RawSubstring,
                };
                ((*ext).to_string(), strategy)
            })
            .collect();

        Self {
            table,
            forced: None,
            case_insensitive: true,
        }
    }

    /// Add or replace table entries. Keys are normalized, and lowercased
    /// when the selector is case-insensitive.
    pub fn with_overrides<I>(mut self, overrides: I) -> Self
    where
        I: IntoIterator<Item = (String, MatchStrategy)>,
    {
        for (ext, strategy) in overrides {
            let key = self.table_key(&normalize_extension(&ext));
            self.table.insert(key, strategy);
        }
        self
    }

    /// Use `strategy` for every file, ignoring the table.
    pub fn with_forced(mut self, strategy: MatchStrategy) -> Self {
        self.forced = Some(strategy);
        self
    }

    /// Whether `.MD` selects the same strategy as `.md`.
    ///
    /// Switching to case-insensitive folds keys already in the table.
    pub fn with_case_insensitive(mut self, case_insensitive: bool) -> Self {
        self.case_insensitive = case_insensitive;
        if case_insensitive {
            self.table = std::mem::take(&mut self.table)
                .into_iter()
                .map(|(ext, strategy)| (ext.to_lowercase(), strategy))
                .collect();
        }
        self
    }

    fn table_key(&self, ext: &str) -> String {
        if self.case_insensitive {
            ext.to_lowercase()
        } else {
            ext.to_string()
        }
    }

    /// The strategy applied to every file, if one was forced.
    pub fn forced(&self) -> Option<&MatchStrategy> {
        self.forced.as_ref()
    }

    /// Look up the strategy for an extension given without the dot.
    pub fn for_extension(&self, ext: &str) -> Option<&MatchStrategy> {
        if let Some(forced) = &self.forced {
            return Some(forced);
        }

        self.table.get(&self.table_key(&format!(".{ext}")))
    }

    /// Select the strategy for `path` from its extension.
    pub fn select(&self, path: &Path) -> Result<&MatchStrategy> {
        if let Some(forced) = &self.forced {
            return Ok(forced);
        }

        let extension = path
            .extension()
            .map(|ext| ext.to_string_lossy().into_owned());

        if let Some(strategy) = extension.as_deref().and_then(|ext| self.for_extension(ext)) {
            return Ok(strategy);
        }

        Err(Error::UnsupportedFileType {
            path: path.to_path_buf(),
            extension,
        })
    }

    /// Extensions currently mapped, in sorted order.
    pub fn extensions(&self) -> impl Iterator<Item = (&str, &MatchStrategy)> {
        self.table.iter().map(|(ext, s)| (ext.as_str(), s))
    }
}

#[cfg(test)]
#[path = "strategy_tests.rs"]
mod tests;
