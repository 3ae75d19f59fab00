//! dot.case conversion.
use super::words::split_words;

/// Convert `input` to dot.case: every word lowercased, joined with `.`.
#[must_use]
pub fn to_dot_case(input: &str) -> String {
    if input.is_empty() {
        return String::new();
    }

    split_words(input)
        .iter()
        .map(|word| word.to_lowercase())
        .collect::<Vec<_>>()
        .join(".")
}
