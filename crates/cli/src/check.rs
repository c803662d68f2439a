// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Per-file snippet checks and the aggregate result.

use std::path::{Path, PathBuf};

use serde::Serialize;

use crate::error::ExitCode;
use crate::matcher;
use crate::reader::FileReader;
use crate::strategy::{MatchStrategy, StrategySelector};

/// Outcome of checking one target.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum FileStatus {
    /// Snippet found.
    Pass,
    /// Snippet not found.
    Fail,
    /// File could not be checked (unsupported type, unreadable, ...).
    Error,
}

/// Result for a single target file.
#[derive(Debug, Clone, Serialize)]
pub struct FileReport {
    pub path: PathBuf,

    pub status: FileStatus,

    /// Strategy used, if one was selected.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub strategy: Option<MatchStrategy>,

    /// Error message for `FileStatus::Error`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl FileReport {
    pub fn matched(path: impl Into<PathBuf>, strategy: MatchStrategy, found: bool) -> Self {
        Self {
            path: path.into(),
            status: if found {
                FileStatus::Pass
            } else {
                FileStatus::Fail
            },
            strategy: Some(strategy),
            error: None,
        }
    }

    pub fn errored(path: impl Into<PathBuf>, error: &crate::Error) -> Self {
        Self {
            path: path.into(),
            status: FileStatus::Error,
            strategy: None,
            error: Some(error.to_string()),
        }
    }

    pub fn passed(&self) -> bool {
        self.status == FileStatus::Pass
    }
}

/// Aggregate of all file reports, in input order.
#[derive(Debug, Clone, Default, Serialize)]
pub struct CheckOutput {
    pub files: Vec<FileReport>,
}

impl CheckOutput {
    pub fn new(files: Vec<FileReport>) -> Self {
        Self { files }
    }

    fn count(&self, status: FileStatus) -> usize {
        self.files.iter().filter(|f| f.status == status).count()
    }

    pub fn passed(&self) -> usize {
        self.count(FileStatus::Pass)
    }

    pub fn failed(&self) -> usize {
        self.count(FileStatus::Fail)
    }

    pub fn errored(&self) -> usize {
        self.count(FileStatus::Error)
    }

    /// True when every target contains the snippet.
    pub fn all_passed(&self) -> bool {
        self.files.iter().all(FileReport::passed)
    }

    /// Errors dominate failures: any errored file exits 2.
    pub fn exit_code(&self) -> ExitCode {
        if self.errored() > 0 {
            ExitCode::ConfigError
        } else if self.failed() > 0 {
            ExitCode::CheckFailed
        } else {
            ExitCode::Success
        }
    }
}

/// Checks target files for one snippet.
pub struct SnippetChecker<'a> {
    snippet: &'a str,
    selector: &'a StrategySelector,
    reader: FileReader,
}

impl<'a> SnippetChecker<'a> {
    pub fn new(snippet: &'a str, selector: &'a StrategySelector) -> Self {
        Self {
            snippet,
            selector,
            reader: FileReader::new(),
        }
    }

    /// Replace the file reader (e.g. to change the size limit).
    pub fn with_reader(mut self, reader: FileReader) -> Self {
        self.reader = reader;
        self
    }

    /// Select a strategy, read the file, and match.
    ///
    /// The strategy is selected before reading so unsupported files are
    /// reported without touching the filesystem.
    pub fn check_file(&self, path: &Path) -> FileReport {
        let strategy = match self.selector.select(path) {
            Ok(s) => s,
            Err(e) => {
                tracing::debug!(path = %path.display(), error = %e, "no strategy");
                return FileReport::errored(path, &e);
            }
        };

        let content = match self.reader.read(path) {
            Ok(c) => c,
            Err(e) => {
                tracing::debug!(path = %path.display(), error = %e, "read failed");
                return FileReport::errored(path, &e);
            }
        };

        let found = matcher::contains(strategy, self.snippet, &content.text);
        tracing::debug!(
            path = %path.display(),
            strategy = %strategy,
            found,
            "checked"
        );

        FileReport::matched(path, strategy.clone(), found)
    }

    /// Check every path in order. Per-file errors never stop the batch.
    pub fn check_all<P: AsRef<Path>>(&self, paths: &[P]) -> CheckOutput {
        CheckOutput::new(paths.iter().map(|p| self.check_file(p.as_ref())).collect())
    }
}

#[cfg(test)]
#[path = "check_tests.rs"]
mod tests;
