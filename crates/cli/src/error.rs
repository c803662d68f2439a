// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use std::path::PathBuf;

/// contains-snippet error types
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Configuration file not found or invalid
    #[error("config error: {message}")]
    Config {
        message: String,
        path: Option<PathBuf>,
    },

    /// Invalid command-line arguments
    #[error("argument error: {0}")]
    Argument(String),

    /// File I/O error
    #[error("io error: {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Extension has no matching strategy.
    #[error("unsupported file type: {} (extension: {})", .path.display(), display_extension(.extension))]
    UnsupportedFileType {
        path: PathBuf,
        extension: Option<String>,
    },

    /// File exceeds maximum size limit.
    #[error("file too large: {} ({} bytes, max: {} bytes)", .path.display(), .size, .max_size)]
    FileTooLarge {
        path: PathBuf,
        size: u64,
        max_size: u64,
    },

    /// File content is not valid UTF-8.
    #[error("not valid UTF-8: {}", .path.display())]
    Encoding { path: PathBuf },
}

fn display_extension(extension: &Option<String>) -> String {
    match extension {
        Some(ext) => format!(".{ext}"),
        None => "none".to_string(),
    }
}

/// Result type using contains-snippet Error
pub type Result<T> = std::result::Result<T, Error>;

/// Process exit codes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum ExitCode {
    /// Every target contains the snippet
    Success = 0,
    /// At least one target is missing the snippet
    CheckFailed = 1,
    /// Usage, configuration, or runtime error
    ConfigError = 2,
}

impl From<&Error> for ExitCode {
    fn from(err: &Error) -> Self {
        match err {
            Error::Config { .. }
            | Error::Argument(_)
            | Error::Io { .. }
            | Error::UnsupportedFileType { .. }
            | Error::FileTooLarge { .. }
            | Error::Encoding { .. } => ExitCode::ConfigError,
        }
    }
}

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
