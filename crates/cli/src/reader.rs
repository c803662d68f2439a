// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Size-gated text reading.
//!
//! Files above 10MB are rejected. Content must be UTF-8 and is returned with
//! `\r\n` line endings normalized to `\n`; the snippet and every target go
//! through the same reader so both sides are compared in the same form.

use std::fs::File;
use std::io::Read;
use std::path::Path;

use crate::error::{Error, Result};

/// Size at which to log about large files (1MB).
pub const LARGE_FILE_WARN: u64 = 1024 * 1024;

/// Maximum file size to read (10MB).
pub const MAX_FILE_SIZE: u64 = 10 * 1024 * 1024;

/// Text content read from disk.
#[derive(Debug)]
pub struct FileContent {
    /// Content with normalized line endings.
    pub text: String,

    /// File size in bytes, as reported by the filesystem.
    pub size: u64,
}

/// Size-gated file reader.
pub struct FileReader {
    /// Maximum file size to read.
    max_size: u64,
}

impl Default for FileReader {
    fn default() -> Self {
        Self {
            max_size: MAX_FILE_SIZE,
        }
    }
}

impl FileReader {
    /// Create a new file reader with default thresholds.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a reader with custom max size.
    pub fn with_max_size(max_size: u64) -> Self {
        Self { max_size }
    }

    /// Read a file as text, checking size limits.
    ///
    /// Returns `Err(FileTooLarge)` for files exceeding max_size and
    /// `Err(Encoding)` for content that is not UTF-8.
    pub fn read(&self, path: &Path) -> Result<FileContent> {
        let metadata = std::fs::metadata(path).map_err(|e| Error::Io {
            path: path.to_path_buf(),
            source: e,
        })?;

        if metadata.is_dir() {
            return Err(Error::Io {
                path: path.to_path_buf(),
                source: std::io::Error::other("is a directory"),
            });
        }

        let size = metadata.len();

        // Check size before reading
        if size > self.max_size {
            return Err(Error::FileTooLarge {
                path: path.to_path_buf(),
                size,
                max_size: self.max_size,
            });
        }

        if size > LARGE_FILE_WARN {
            tracing::info!(path = %path.display(), size, "Reading large file");
        }

        let bytes = self.read_direct(path, size)?;
        let text = String::from_utf8(bytes).map_err(|_| Error::Encoding {
            path: path.to_path_buf(),
        })?;

        Ok(FileContent {
            text: normalize_line_endings(text),
            size,
        })
    }

    /// Read file directly into buffer.
    fn read_direct(&self, path: &Path, size: u64) -> Result<Vec<u8>> {
        let mut file = File::open(path).map_err(|e| Error::Io {
            path: path.to_path_buf(),
            source: e,
        })?;

        let mut buffer = Vec::with_capacity(usize::try_from(size).unwrap_or(0));
        file.read_to_end(&mut buffer).map_err(|e| Error::Io {
            path: path.to_path_buf(),
            source: e,
        })?;

        Ok(buffer)
    }
}

/// Convert `\r\n` to `\n`. Lone `\r` is left alone.
pub fn normalize_line_endings(text: String) -> String {
    if text.contains("\r\n") {
        text.replace("\r\n", "\n")
    } else {
        text
    }
}

#[cfg(test)]
#[path = "reader_tests.rs"]
mod tests;
