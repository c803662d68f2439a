// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Verbose output logger for diagnostic information.
//!
//! Writes `[verbose]` prefixed lines to stderr when `--verbose` is given:
//! the extension table in effect and the snippet being searched for.

use crate::matcher::CommentedSnippet;
use crate::strategy::StrategySelector;

/// Verbose output logger. Writes to stderr with a `[verbose]` prefix.
/// All output is conditional on verbose mode being enabled.
pub struct VerboseLogger {
    enabled: bool,
}

impl VerboseLogger {
    pub fn new(enabled: bool) -> Self {
        Self { enabled }
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// Print a verbose line to stderr.
    pub fn log(&self, msg: &str) {
        if self.is_enabled() {
            eprintln!("[verbose] {}", msg);
        }
    }

    /// Print a verbose section header.
    pub fn section(&self, title: &str) {
        if self.is_enabled() {
            eprintln!("[verbose] === {} ===", title);
        }
    }

    /// Describe the selector's extension table.
    pub fn strategies(&self, selector: &StrategySelector) {
        if !self.is_enabled() {
            return;
        }
        self.section("Strategies");
        for line in strategy_lines(selector) {
            self.log(&line);
        }
    }

    /// Show the snippet and, for each marker in use, its commented rendering.
    pub fn snippet(&self, snippet: &str, selector: &StrategySelector) {
        if !self.is_enabled() {
            return;
        }
        self.section("Snippet");
        self.log(&format!("{} line(s)", snippet.lines().count()));
        for marker in markers(selector) {
            self.log(&format!("rendered with `{marker}`:"));
            for line in CommentedSnippet::render(snippet, &marker)
                .to_canonical_string()
                .lines()
            {
                self.log(&format!("  {line}"));
            }
        }
    }
}

fn strategy_lines(selector: &StrategySelector) -> Vec<String> {
    if let Some(forced) = selector.forced() {
        return vec![format!("all files: {forced}")];
    }
    selector
        .extensions()
        .map(|(ext, strategy)| format!("{ext}: {strategy}"))
        .collect()
}

/// Distinct comment markers the selector can produce, sorted.
fn markers(selector: &StrategySelector) -> Vec<String> {
    let mut markers: Vec<String> = if let Some(forced) = selector.forced() {
        forced.marker().map(str::to_string).into_iter().collect()
    } else {
        selector
            .extensions()
            .filter_map(|(_, s)| s.marker().map(str::to_string))
            .collect()
    };
    markers.sort();
    markers.dedup();
    markers
}

#[cfg(test)]
#[path = "verbose_tests.rs"]
mod tests;
