// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Check command implementation.

use contains_snippet::check::SnippetChecker;
use contains_snippet::cli::{Cli, OutputFormat};
use contains_snippet::color::resolve_color;
use contains_snippet::discovery;
use contains_snippet::error::ExitCode;
use contains_snippet::output::FormatOptions;
use contains_snippet::output::json::JsonFormatter;
use contains_snippet::output::text::TextFormatter;
use contains_snippet::reader::FileReader;
use contains_snippet::verbose::VerboseLogger;

/// Run the snippet check over every target file.
pub fn run(cli: &Cli) -> anyhow::Result<ExitCode> {
    let verbose = VerboseLogger::new(cli.verbose);
    let cwd = std::env::current_dir()?;

    let config = discovery::load_config(cli.config.as_deref(), &cwd)?;
    let selector = cli.selector(&config)?;
    verbose.strategies(&selector);

    // Without the snippet no check is possible: abort the whole run.
    let snippet = FileReader::new().read(&cli.content_file)?.text;
    tracing::debug!(
        path = %cli.content_file.display(),
        lines = snippet.lines().count(),
        "loaded snippet"
    );
    verbose.snippet(&snippet, &selector);

    let output = SnippetChecker::new(&snippet, &selector).check_all(&cli.files);

    match cli.output {
        OutputFormat::Text => {
            let options = FormatOptions {
                verbose: cli.verbose,
            };
            let mut formatter =
                TextFormatter::stderr(resolve_color(cli.color, cli.no_color), options);
            formatter.write_output(&output)?;
        }
        OutputFormat::Json => {
            let stdout = std::io::stdout();
            JsonFormatter::new(stdout.lock()).write(&output)?;
        }
    }

    let exit_code = output.exit_code();
    tracing::debug!(?exit_code, "done");
    Ok(exit_code)
}
