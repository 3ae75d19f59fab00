//! camelCase conversion.
use super::words::split_words;

/// Convert `input` to camelCase.
///
/// The first word is lowercased; every following word gets an uppercase
/// first character and a lowercased remainder, so `"STRING"` becomes
/// `"String"`. Input made only of delimiters converts to `""`.
#[must_use]
pub fn to_camel_case(input: &str) -> String {
    if input.is_empty() {
        return String::new();
    }

    let mut words = split_words(input).into_iter();
    let Some(first) = words.next() else {
        return String::new();
    };

    let mut out = first.to_lowercase();
    for word in words {
        push_capitalized(&mut out, word);
    }
    out
}

fn push_capitalized(out: &mut String, word: &str) {
    let mut chars = word.chars();
    if let Some(first) = chars.next() {
        out.extend(first.to_uppercase());
        out.push_str(&chars.as_str().to_lowercase());
    }
}
