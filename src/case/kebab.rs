//! kebab-case conversion.
//!
//! Unlike the camelCase and dot.case converters this one does not split into
//! words first. It rewrites the string in a fixed sequence of passes, which
//! also turns camelCase boundaries (`thisString`) into dashes.
use std::sync::LazyLock;

use regex::Regex;

use super::words::WHITESPACE;

/// A lowercase ASCII letter or digit directly followed by an uppercase one.
#[allow(clippy::expect_used)] // literal pattern
static CASE_BOUNDARY: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"([a-z0-9])([A-Z])").expect("boundary pattern compiles"));

#[allow(clippy::expect_used)] // constant pattern
static SPACE_OR_UNDERSCORE_RUN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(&format!("[{WHITESPACE}_]+")).expect("separator pattern compiles")
});

#[allow(clippy::expect_used)] // literal pattern
static DASH_RUN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"-+").expect("dash pattern compiles"));

/// Convert `input` to kebab-case.
///
/// Passes, in order:
///
/// 1. insert `-` at lower/digit to upper boundaries (`thisString` -> `this-String`)
/// 2. replace whitespace/underscore runs with `-`
/// 3. lowercase
/// 4. collapse dash runs
/// 5. trim dashes at both ends
///
/// Empty input falls through every pass and comes out empty.
#[must_use]
pub fn to_kebab_case(input: &str) -> String {
    let split = CASE_BOUNDARY.replace_all(input, "${1}-${2}");
    let dashed = SPACE_OR_UNDERSCORE_RUN.replace_all(&split, "-");
    let lowered = dashed.to_lowercase();
    let collapsed = DASH_RUN.replace_all(&lowered, "-");
    collapsed.trim_matches('-').to_string()
}
