// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! contains-snippet CLI entry point.

use clap::Parser;
use tracing_subscriber::{EnvFilter, fmt};

use contains_snippet::cli::Cli;
use contains_snippet::error::ExitCode;

mod cmd_check;

fn init_logging() {
    let filter = EnvFilter::try_from_env("CONTAINS_SNIPPET_LOG")
        .unwrap_or_else(|_| EnvFilter::new("off"));

    fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn main() {
    init_logging();

    let exit_code = match run() {
        Ok(code) => code,
        Err(e) => {
            eprintln!("contains-snippet: {}", e);
            match e.downcast_ref::<contains_snippet::Error>() {
                Some(err) => ExitCode::from(err),
                // Anything else is still a runtime error
                None => ExitCode::ConfigError,
            }
        }
    };

    std::process::exit(exit_code as i32);
}

fn run() -> anyhow::Result<ExitCode> {
    let cli = Cli::parse();
    cmd_check::run(&cli)
}
