//! Output formatting for check results.

pub mod json;
pub mod text;

/// Output formatting options.
#[derive(Debug, Clone, Default)]
pub struct FormatOptions {
    /// Also report passing files and a summary line.
    pub verbose: bool,
}
