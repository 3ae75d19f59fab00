#![allow(
    clippy::expect_used,
    clippy::unwrap_used,
    clippy::wildcard_imports,
    clippy::indexing_slicing
)]
//! Integration tests for the `demo` and `version` commands.

use recase_cli::commands::{demo, version};

/// Snapshot of the full demo output.
///
/// Any change to the showcase inputs or to converter behaviour will cause
/// this test to fail, prompting a deliberate snapshot update.
#[test]
fn demo_output() {
    let mut out = Vec::new();
    demo::run(&mut out).unwrap();
    let output = String::from_utf8(out).unwrap();
    insta::assert_snapshot!("demo_output", output.trim_end());
}

#[test]
fn demo_lines_show_input_and_output() {
    let mut out = Vec::new();
    demo::run(&mut out).unwrap();
    let output = String::from_utf8(out).unwrap();
    for line in output.lines() {
        assert!(line.contains(" -> "), "malformed demo line: {line:?}");
    }
}

#[test]
fn version_line() {
    let mut out = Vec::new();
    version::run(&mut out).unwrap();
    let output = String::from_utf8(out).unwrap();
    assert!(output.starts_with("recase "), "{output}");
    assert!(output.ends_with('\n'));
}
