// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Snippet containment matching.
//!
//! Two strategies:
//! - raw: the snippet must appear verbatim as a substring of the file
//! - commented: every snippet line must appear, in order and on consecutive
//!   lines, prefixed by a comment marker
//!
//! Commented rendering of a snippet line `L` with marker `M` accepts exactly
//! two literal forms:
//!
//! ```text
//! M L     (marker, one space, line)
//! ML      (marker, line)
//! ```
//!
//! A blank snippet line accepts an empty file line, the bare marker, or the
//! marker followed only by whitespace.

use crate::strategy::MatchStrategy;

/// Check whether `content` contains `snippet` under the given strategy.
pub fn contains(strategy: &MatchStrategy, snippet: &str, content: &str) -> bool {
    match strategy {
        MatchStrategy::RawSubstring => raw_match(snippet, content),
        MatchStrategy::CommentedMatch { marker } => commented_match(snippet, content, marker),
    }
}

/// Literal substring check. An empty snippet is always contained.
pub fn raw_match(snippet: &str, content: &str) -> bool {
    content.contains(snippet)
}

/// Commented-block check using `marker` as the comment leader.
pub fn commented_match(snippet: &str, content: &str, marker: &str) -> bool {
    CommentedSnippet::render(snippet, marker).is_contained_in(content)
}

/// Accepted renderings for a single snippet line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedLine {
    /// `marker + " " + line`
    spaced: String,
    /// `marker + line`
    bare: String,
    blank: bool,
}

impl RenderedLine {
    fn new(line: &str, marker: &str) -> Self {
        Self {
            spaced: format!("{marker} {line}"),
            bare: format!("{marker}{line}"),
            blank: line.is_empty(),
        }
    }

    /// Both accepted literal forms, spaced first.
    pub fn candidates(&self) -> [&str; 2] {
        [&self.spaced, &self.bare]
    }

    /// Check a single file line against this rendering.
    pub fn accepts(&self, file_line: &str) -> bool {
        if self.blank {
            // `bare` is the marker itself for a blank line
            return file_line.is_empty() || file_line.trim_end() == self.bare;
        }
        self.candidates().iter().any(|c| *c == file_line)
    }

    /// Canonical form used when showing the expected rendering.
    pub fn canonical(&self) -> &str {
        if self.blank { &self.bare } else { &self.spaced }
    }
}

/// A snippet rendered into its commented form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommentedSnippet {
    lines: Vec<RenderedLine>,
}

impl CommentedSnippet {
    /// Render every snippet line with `marker`.
    ///
    /// A final newline does not produce a trailing blank line.
    pub fn render(snippet: &str, marker: &str) -> Self {
        let lines = snippet
            .lines()
            .map(|line| RenderedLine::new(line, marker))
            .collect();
        Self { lines }
    }

    pub fn lines(&self) -> &[RenderedLine] {
        &self.lines
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Scan `content` for a contiguous run of lines matching every rendered line.
    pub fn is_contained_in(&self, content: &str) -> bool {
        if self.is_empty() {
            return true;
        }

        let file_lines: Vec<&str> = content.lines().collect();
        if file_lines.len() < self.len() {
            return false;
        }

        file_lines.windows(self.len()).any(|window| {
            window
                .iter()
                .zip(&self.lines)
                .all(|(file_line, rendered)| rendered.accepts(file_line))
        })
    }

    /// Canonical multi-line rendering (spaced form, bare marker for blanks).
    pub fn to_canonical_string(&self) -> String {
        self.lines
            .iter()
            .map(RenderedLine::canonical)
            .collect::<Vec<_>>()
            .join("\n")
    }
}

#[cfg(test)]
#[path = "matcher_tests.rs"]
mod tests;
