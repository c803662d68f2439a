// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Verify that a text snippet is present in target files, either verbatim
//! or as a block of comment lines.

pub mod check;
pub mod cli;
pub mod color;
pub mod config;
pub mod discovery;
pub mod error;
pub mod matcher;
pub mod output;
pub mod reader;
pub mod strategy;
pub mod verbose;

pub use check::{CheckOutput, FileReport, FileStatus, SnippetChecker};
pub use cli::{Cli, OutputFormat};
pub use config::Config;
pub use error::{Error, ExitCode, Result};
pub use matcher::{CommentedSnippet, commented_match, raw_match};
pub use reader::{FileContent, FileReader};
pub use strategy::{MatchStrategy, StrategySelector};

#[cfg(test)]
pub mod test_utils;
