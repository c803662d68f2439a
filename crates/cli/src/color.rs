// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Color detection and terminal styling.
//!
//! Detection order:
//! 1. `--color` / `--no-color` flags
//! 2. `NO_COLOR` env var (any value) -> no color
//! 3. `COLOR` env var (any value) -> color
//! 4. default: color only when stderr is a TTY and `CI` is unset
//!
//! Diagnostics are written to stderr, so the TTY check looks at stderr.

use std::io::IsTerminal;
use termcolor::ColorChoice;

/// Resolve color choice from environment variables and CLI flags.
pub fn resolve_color(force: bool, disable: bool) -> ColorChoice {
    if let Some(choice) = choice_from_flags(force, disable) {
        return choice;
    }
    if std::env::var_os("NO_COLOR").is_some() {
        return ColorChoice::Never;
    }
    if std::env::var_os("COLOR").is_some() {
        return ColorChoice::Always;
    }
    auto_detect()
}

/// Explicit flag choice, if any. `--no-color` wins over `--color`.
fn choice_from_flags(force: bool, disable: bool) -> Option<ColorChoice> {
    match (force, disable) {
        (_, true) => Some(ColorChoice::Never),
        (true, false) => Some(ColorChoice::Always),
        (false, false) => None,
    }
}

fn auto_detect() -> ColorChoice {
    if !std::io::stderr().is_terminal() || std::env::var_os("CI").is_some() {
        return ColorChoice::Never;
    }
    ColorChoice::Auto
}

/// Color scheme for per-file diagnostics.
pub mod scheme {
    use termcolor::{Color, ColorSpec};

    /// Green "PASS" indicator.
    pub fn pass() -> ColorSpec {
        let mut spec = ColorSpec::new();
        spec.set_fg(Some(Color::Green)).set_bold(true);
        spec
    }

    /// Red "FAIL" indicator.
    pub fn fail() -> ColorSpec {
        let mut spec = ColorSpec::new();
        spec.set_fg(Some(Color::Red)).set_bold(true);
        spec
    }

    /// Yellow "ERROR" indicator.
    pub fn error() -> ColorSpec {
        let mut spec = ColorSpec::new();
        spec.set_fg(Some(Color::Yellow)).set_bold(true);
        spec
    }

    /// Cyan file path.
    pub fn path() -> ColorSpec {
        let mut spec = ColorSpec::new();
        spec.set_fg(Some(Color::Cyan));
        spec
    }

    /// Dim strategy annotation.
    pub fn detail() -> ColorSpec {
        let mut spec = ColorSpec::new();
        spec.set_dimmed(true);
        spec
    }
}

#[cfg(test)]
#[path = "color_tests.rs"]
mod tests;
