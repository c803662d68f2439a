// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Behavioral specs for text and JSON output.

use crate::prelude::*;

// =============================================================================
// TEXT OUTPUT
// =============================================================================

/// > Failures name the file and the strategy on stderr
#[test]
fn text_failure_format() {
    let temp = Project::with_snippet("Copyright 2024");
    temp.file("README.md", "nothing here\n");

    temp.snippet()
        .args(&["--no-color"])
        .on(&["README.md"])
        .fails()
        .stdout_empty()
        .stderr_eq("README.md: FAIL\n  snippet not found (raw)\n");
}

/// > Errors carry the error message on the following line
#[test]
fn text_error_format() {
    let temp = Project::with_snippet("Copyright 2024");
    temp.file("notes.txt", "Copyright 2024\n");

    temp.snippet()
        .args(&["--no-color"])
        .on(&["notes.txt"])
        .errors()
        .stderr_eq("notes.txt: ERROR\n  unsupported file type: notes.txt (extension: .txt)\n");
}

/// > Files are reported in argument order
#[test]
fn text_reports_in_argument_order() {
    let temp = Project::with_snippet("x");
    temp.file("b.md", "nope\n");
    temp.file("a.md", "nope\n");

    let stderr = temp.snippet().on(&["b.md", "a.md"]).fails().stderr();
    let b = stderr.find("b.md").unwrap();
    let a = stderr.find("a.md").unwrap();
    assert!(b < a, "expected b.md before a.md:\n{stderr}");
}

// =============================================================================
// VERBOSE
// =============================================================================

/// > --verbose reports passing files and a summary
#[test]
fn verbose_shows_passes_and_summary() {
    let temp = Project::with_snippet("Copyright 2024");
    temp.file("README.md", "Copyright 2024\n");
    temp.file("main.py", "print()\n");

    temp.snippet()
        .args(&["--verbose", "--no-color"])
        .on(&["README.md", "main.py"])
        .fails()
        .stdout_empty()
        .stderr_has("README.md: PASS (raw)")
        .stderr_has("main.py: FAIL")
        .stderr_has("2 files checked: 1 passed, 1 failed, 0 errored");
}

/// > --verbose describes strategies and the rendered snippet
#[test]
fn verbose_shows_strategies_and_rendering() {
    let temp = Project::with_snippet("Copyright 2024\n");
    temp.file("main.py", "# Copyright 2024\n");

    temp.snippet()
        .args(&["-v"])
        .on(&["main.py"])
        .passes()
        .stderr_has("[verbose] === Strategies ===")
        .stderr_has("[verbose] .py: commented, prefix `#`")
        .stderr_has("[verbose] .md: raw")
        .stderr_has("[verbose] === Snippet ===")
        .stderr_has("[verbose]   # Copyright 2024");
}

/// > --verbose with a forced prefix reports a single strategy
#[test]
fn verbose_forced_prefix() {
    let temp = Project::with_snippet("Copyright 2024\n");
    temp.file("main.rs", "// Copyright 2024\n");

    temp.snippet()
        .args(&["-v", "--comment-prefix", "//"])
        .on(&["main.rs"])
        .passes()
        .stderr_has("[verbose] all files: commented, prefix `//`")
        .stderr_lacks("[verbose] .md: raw");
}

/// > Normal mode has no verbose output
#[test]
fn normal_mode_has_no_verbose_output() {
    let temp = Project::with_snippet("Copyright 2024");
    temp.file("README.md", "Copyright 2024\n");

    temp.snippet()
        .on(&["README.md"])
        .passes()
        .stderr_lacks("[verbose]")
        .stderr_lacks("checked:");
}

// =============================================================================
// COLOR
// =============================================================================

/// > --color forces ANSI codes on stderr
#[test]
fn color_flag_forces_ansi() {
    let temp = Project::with_snippet("Copyright 2024");
    temp.file("README.md", "nothing\n");

    temp.snippet()
        .args(&["--color"])
        .on(&["README.md"])
        .fails()
        .stderr_has("\x1b[");
}

/// > NO_COLOR disables color
#[test]
fn no_color_env_disables_color() {
    let temp = Project::with_snippet("Copyright 2024");
    temp.file("README.md", "nothing\n");

    temp.snippet()
        .env("NO_COLOR", "1")
        .env("COLOR", "1")
        .on(&["README.md"])
        .fails()
        .stderr_lacks("\x1b[");
}

/// > --color wins over NO_COLOR
#[test]
fn color_flag_overrides_no_color_env() {
    let temp = Project::with_snippet("Copyright 2024");
    temp.file("README.md", "nothing\n");

    temp.snippet()
        .args(&["--color"])
        .env("NO_COLOR", "1")
        .on(&["README.md"])
        .fails()
        .stderr_has("\x1b[");
}

/// > --no-color wins over COLOR
#[test]
fn no_color_flag_overrides_color_env() {
    let temp = Project::with_snippet("Copyright 2024");
    temp.file("README.md", "nothing\n");

    temp.snippet()
        .args(&["--no-color"])
        .env("COLOR", "1")
        .on(&["README.md"])
        .fails()
        .stderr_lacks("\x1b[");
}

/// > COLOR forces color without a TTY
#[test]
fn color_env_forces_color() {
    let temp = Project::with_snippet("Copyright 2024");
    temp.file("README.md", "nothing\n");

    temp.snippet()
        .env("COLOR", "1")
        .on(&["README.md"])
        .fails()
        .stderr_has("\x1b[");
}

/// > Piped stderr gets no color by default
#[test]
fn no_color_when_not_a_tty() {
    let temp = Project::with_snippet("Copyright 2024");
    temp.file("README.md", "nothing\n");

    temp.snippet()
        .on(&["README.md"])
        .fails()
        .stderr_lacks("\x1b[");
}

// =============================================================================
// JSON OUTPUT
// =============================================================================

/// > -o json writes one document to stdout
#[test]
fn json_output_document() {
    let temp = Project::with_snippet("Copyright 2024");
    temp.file("README.md", "Copyright 2024\n");
    temp.file("main.py", "print()\n");
    temp.file("notes.txt", "Copyright 2024\n");

    let json = temp
        .snippet()
        .on(&["README.md", "main.py", "notes.txt"])
        .json(2);

    let root = json.value();
    assert_eq!(root["passed"], false);
    assert_eq!(root["exit_code"], 2);
    assert_eq!(root["summary"]["total"], 3);
    assert_eq!(root["summary"]["passed"], 1);
    assert_eq!(root["summary"]["failed"], 1);
    assert_eq!(root["summary"]["errored"], 1);
    assert!(root["timestamp"].as_str().unwrap().ends_with('Z'));

    assert_eq!(json.status("README.md"), "pass");
    assert_eq!(json.status("main.py"), "fail");
    assert_eq!(json.status("notes.txt"), "error");
}

/// > JSON entries describe the strategy used
#[test]
fn json_strategy_fields() {
    let temp = Project::with_snippet("Copyright 2024");
    temp.file("README.md", "Copyright 2024\n");
    temp.file("ci.yml", "# Copyright 2024\n");

    let json = temp.snippet().on(&["README.md", "ci.yml"]).json(0);

    assert_eq!(json.value()["passed"], true);
    assert_eq!(json.file("README.md")["strategy"]["kind"], "raw_substring");
    assert_eq!(json.file("ci.yml")["strategy"]["kind"], "commented_match");
    assert_eq!(json.file("ci.yml")["strategy"]["marker"], "#");
}

/// > JSON error entries carry the message and no strategy
#[test]
fn json_error_entry() {
    let temp = Project::with_snippet("x");

    let json = temp.snippet().on(&["missing.md"]).json(2);
    let entry = json.file("missing.md");

    assert!(entry.get("strategy").is_none());
    assert!(
        entry["error"].as_str().unwrap().contains("io error"),
        "unexpected entry: {entry}"
    );
}

/// > JSON mode keeps stderr free of per-file lines
#[test]
fn json_mode_stderr_quiet() {
    let temp = Project::with_snippet("Copyright 2024");
    temp.file("main.py", "print()\n");

    contains_snippet_cmd()
        .args(["--content-file", "snippet.txt", "-o", "json", "main.py"])
        .current_dir(temp.path())
        .assert()
        .code(1)
        .stdout(predicates::str::starts_with("{"))
        .stderr(predicates::str::is_empty());
}

// =============================================================================
// LOGGING
// =============================================================================

/// > CONTAINS_SNIPPET_LOG enables debug logging to stderr
#[test]
fn env_log_enables_debug() {
    let temp = Project::with_snippet("Copyright 2024");
    temp.file("README.md", "Copyright 2024\n");

    temp.snippet()
        .env("CONTAINS_SNIPPET_LOG", "debug")
        .on(&["README.md"])
        .passes()
        .stderr_has("DEBUG")
        .stderr_has("loaded snippet");
}
