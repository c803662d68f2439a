// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! CLI argument parsing with clap derive.

use std::path::PathBuf;

use clap::Parser;

use crate::config::Config;
use crate::error::{Error, Result};
use crate::strategy::{MatchStrategy, StrategySelector, parse_prefix_map};

/// Check that a snippet is present in every target file
#[derive(Parser)]
#[command(name = "contains-snippet")]
#[command(version, about, long_about = None)]
#[command(after_help = AFTER_HELP)]
pub struct Cli {
    /// File containing the snippet to search for
    #[arg(long = "content-file", visible_alias = "snippet-file", value_name = "PATH")]
    pub content_file: PathBuf,

    /// Files to check for the snippet
    #[arg(value_name = "FILE", required = true)]
    pub files: Vec<PathBuf>,

    /// Treat every file as source with this comment prefix (e.g. "#", "//")
    #[arg(
        long,
        value_name = "PREFIX",
        allow_hyphen_values = true,
        conflicts_with_all = ["infer_comment_prefix", "comment_prefix_map"]
    )]
    pub comment_prefix: Option<String>,

    /// Pick the comment prefix from each file's extension (default)
    #[arg(long)]
    pub infer_comment_prefix: bool,

    /// Extra extension mappings, e.g. ".js=//,.ts=//,.txt=raw"
    #[arg(long, value_name = "MAP", allow_hyphen_values = true)]
    pub comment_prefix_map: Option<String>,

    /// Match extensions case-sensitively (".MD" is not ".md")
    #[arg(long)]
    pub case_sensitive: bool,

    /// Use specific config file
    #[arg(short = 'C', long = "config", env = "CONTAINS_SNIPPET_CONFIG")]
    pub config: Option<PathBuf>,

    /// Output format
    #[arg(short, long, default_value = "text")]
    pub output: OutputFormat,

    /// Force color output
    #[arg(long)]
    pub color: bool,

    /// Disable color output
    #[arg(long)]
    pub no_color: bool,

    /// Report passing files and a summary
    #[arg(long, short = 'v')]
    pub verbose: bool,
}

const AFTER_HELP: &str = "\
Built-in extensions:
  .md                 raw substring match
  .py .yml .yaml      commented match with prefix \"#\"

Exit codes:
  0  every file contains the snippet
  1  at least one file is missing the snippet
  2  usage, configuration, or file error";

#[derive(Clone, Copy, Default, Debug, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

impl Cli {
    /// Build the strategy selector from config and flags.
    ///
    /// Layering: built-in table, then config `[prefixes]`, then
    /// `--comment-prefix-map`. `--comment-prefix` replaces all of it.
    pub fn selector(&self, config: &Config) -> Result<StrategySelector> {
        let case_insensitive = config.case_insensitive_extensions && !self.case_sensitive;

        let mut selector = StrategySelector::builtin()
            .with_case_insensitive(case_insensitive)
            .with_overrides(config.prefix_overrides()?);

        if let Some(map) = &self.comment_prefix_map {
            selector = selector.with_overrides(parse_prefix_map(map)?);
        }

        if let Some(prefix) = &self.comment_prefix {
            let prefix = prefix.trim();
            if prefix.is_empty() {
                return Err(Error::Argument(
                    "--comment-prefix must not be empty".to_string(),
                ));
            }
            selector = selector.with_forced(MatchStrategy::commented(prefix));
        }

        Ok(selector)
    }
}

#[cfg(test)]
#[path = "cli_tests.rs"]
mod tests;
