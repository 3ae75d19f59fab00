//! Word splitting shared by the camelCase and dot.case converters.
use std::sync::LazyLock;

use regex::Regex;

/// Whitespace characters that act as delimiters, as a regex class body.
///
/// Narrower than the `regex` crate's Unicode `\s`: NEL (U+0085) is not a
/// delimiter, while the byte-order mark (U+FEFF) is.
pub(super) const WHITESPACE: &str = r"\t\n\x0B\x0C\r \x{A0}\x{1680}\x{2000}-\x{200A}\x{2028}\x{2029}\x{202F}\x{205F}\x{3000}\x{FEFF}";

/// One or more consecutive whitespace, dash or underscore characters.
#[allow(clippy::expect_used)] // constant pattern
static DELIMITER_RUN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(&format!("[{WHITESPACE}_-]+")).expect("delimiter pattern compiles")
});

/// Split `input` into words on delimiter runs.
///
/// A run of mixed delimiters (`"a -_b"`) is a single split point, and
/// leading or trailing delimiters never produce empty words. Casing is left
/// untouched; camelCase boundaries inside a word are not split.
#[must_use]
pub fn split_words(input: &str) -> Vec<&str> {
    DELIMITER_RUN
        .split(input)
        .filter(|word| !word.is_empty())
        .collect()
}
