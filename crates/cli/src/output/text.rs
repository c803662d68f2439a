//! Text output formatter.
//!
//! Written to stderr so stdout stays empty for scripted callers:
//! ```text
//! <file>: FAIL
//!   snippet not found (commented, prefix `#`)
//! <file>: ERROR
//!   unsupported file type: notes.txt (extension: .txt)
//! ```
//!
//! Passing files and the summary line only appear in verbose mode.

use std::io::Write;
use termcolor::{ColorChoice, ColorSpec, StandardStream, WriteColor};

use super::FormatOptions;
use crate::check::{CheckOutput, FileReport, FileStatus};
use crate::color::scheme;

/// Text output formatter with color support.
pub struct TextFormatter<W: WriteColor> {
    writer: W,
    options: FormatOptions,
}

impl TextFormatter<StandardStream> {
    /// Formatter writing to stderr.
    pub fn stderr(color_choice: ColorChoice, options: FormatOptions) -> Self {
        Self::new(StandardStream::stderr(color_choice), options)
    }
}

impl<W: WriteColor> TextFormatter<W> {
    pub fn new(writer: W, options: FormatOptions) -> Self {
        Self { writer, options }
    }

    /// Write one file result. Passing files are silent unless verbose.
    pub fn write_file(&mut self, report: &FileReport) -> std::io::Result<()> {
        let (label, spec) = match report.status {
            FileStatus::Pass if !self.options.verbose => return Ok(()),
            FileStatus::Pass => ("PASS", scheme::pass()),
            FileStatus::Fail => ("FAIL", scheme::fail()),
            FileStatus::Error => ("ERROR", scheme::error()),
        };

        self.colored(&scheme::path(), &report.path.display().to_string())?;
        write!(self.writer, ": ")?;
        self.colored(&spec, label)?;

        match (report.status, &report.strategy) {
            (FileStatus::Pass, Some(strategy)) => {
                write!(self.writer, " ")?;
                self.colored(&scheme::detail(), &format!("({strategy})"))?;
                writeln!(self.writer)?;
            }
            (FileStatus::Fail, Some(strategy)) => {
                writeln!(self.writer)?;
                writeln!(self.writer, "  snippet not found ({strategy})")?;
            }
            _ => {
                writeln!(self.writer)?;
                if let Some(error) = &report.error {
                    writeln!(self.writer, "  {error}")?;
                }
            }
        }

        Ok(())
    }

    /// Write every file result, then the summary in verbose mode.
    pub fn write_output(&mut self, output: &CheckOutput) -> std::io::Result<()> {
        for report in &output.files {
            self.write_file(report)?;
        }
        if self.options.verbose {
            self.write_summary(output)?;
        }
        self.writer.flush()
    }

    /// Write the summary line.
    pub fn write_summary(&mut self, output: &CheckOutput) -> std::io::Result<()> {
        let total = output.files.len();
        writeln!(
            self.writer,
            "{} file{} checked: {} passed, {} failed, {} errored",
            total,
            if total == 1 { "" } else { "s" },
            output.passed(),
            output.failed(),
            output.errored()
        )
    }

    /// Consume the formatter, returning the writer.
    pub fn into_inner(self) -> W {
        self.writer
    }

    fn colored(&mut self, spec: &ColorSpec, text: &str) -> std::io::Result<()> {
        self.writer.set_color(spec)?;
        write!(self.writer, "{}", text)?;
        self.writer.reset()
    }
}

#[cfg(test)]
#[path = "text_tests.rs"]
mod tests;
