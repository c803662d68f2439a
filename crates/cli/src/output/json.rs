// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! JSON output formatter.
//!
//! Buffered: one document is written once every file has been checked.
//!
//! ```json
//! {
//!   "timestamp": "2026-01-21T10:30:00Z",
//!   "passed": false,
//!   "exit_code": 1,
//!   "summary": { "total": 2, "passed": 1, "failed": 1, "errored": 0 },
//!   "files": [
//!     { "path": "README.md", "status": "pass", "strategy": { "kind": "raw_substring" } },
//!     { "path": "main.py", "status": "fail", "strategy": { "kind": "commented_match", "marker": "#" } }
//!   ]
//! }
//! ```

use std::io::Write;

use chrono::Utc;
use serde::Serialize;

use crate::check::{CheckOutput, FileReport};

/// Per-status counts.
#[derive(Debug, Serialize)]
pub struct Summary {
    pub total: usize,
    pub passed: usize,
    pub failed: usize,
    pub errored: usize,
}

impl From<&CheckOutput> for Summary {
    fn from(output: &CheckOutput) -> Self {
        Self {
            total: output.files.len(),
            passed: output.passed(),
            failed: output.failed(),
            errored: output.errored(),
        }
    }
}

/// Top-level JSON document.
#[derive(Debug, Serialize)]
struct JsonOutput<'a> {
    timestamp: String,
    passed: bool,
    exit_code: u8,
    summary: Summary,
    files: &'a [FileReport],
}

/// JSON output formatter.
pub struct JsonFormatter<W: Write> {
    writer: W,
}

impl<W: Write> JsonFormatter<W> {
    /// Create a new JSON formatter.
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    /// Write the complete JSON output.
    pub fn write(&mut self, output: &CheckOutput) -> std::io::Result<()> {
        let document = JsonOutput {
            timestamp: timestamp(),
            passed: output.all_passed(),
            exit_code: output.exit_code() as u8,
            summary: output.into(),
            files: &output.files,
        };
        let json = serde_json::to_string_pretty(&document).map_err(std::io::Error::other)?;
        writeln!(self.writer, "{}", json)
    }
}

/// Current time as RFC 3339 with second precision.
pub fn timestamp() -> String {
    Utc::now().to_rfc3339_opts(chrono::SecondsFormat::Secs, true)
}

#[cfg(test)]
#[path = "json_tests.rs"]
mod tests;
