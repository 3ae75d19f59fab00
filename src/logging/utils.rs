//! Console helpers: ANSI stripping and colour detection.
use std::ffi::OsStr;
use std::io::IsTerminal as _;

/// Strip ANSI escape sequences from a string.
///
/// Handles SGR sequences (ending in `m`) and other CSI sequences (ending
/// in any letter in the `@`..`~` range), so cursor movement, erase, etc.
/// are also stripped without consuming unrelated text.
pub(super) fn strip_ansi(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut chars = s.chars();
    while let Some(c) = chars.next() {
        if c == '\x1b' {
            if let Some(next) = chars.next()
                && next == '['
            {
                for inner in chars.by_ref() {
                    if ('@'..='~').contains(&inner) {
                        break;
                    }
                }
            }
        } else {
            out.push(c);
        }
    }
    out
}

/// Whether console output should carry ANSI colour.
///
/// Off when `NO_COLOR` is set to a non-empty value or stderr is not a terminal.
pub(super) fn use_color() -> bool {
    color_enabled(
        std::env::var_os("NO_COLOR").as_deref(),
        std::io::stderr().is_terminal(),
    )
}

fn color_enabled(no_color: Option<&OsStr>, is_terminal: bool) -> bool {
    let opted_out = no_color.is_some_and(|v| !v.is_empty());
    !opted_out && is_terminal
}
