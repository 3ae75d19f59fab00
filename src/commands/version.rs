//! Command: print version information.
use std::io::Write;

/// Version string: `RECASE_VERSION` from the build, else the crate version.
#[must_use]
pub fn version() -> &'static str {
    option_env!("RECASE_VERSION").unwrap_or(env!("CARGO_PKG_VERSION"))
}

/// Print the recase version.
///
/// # Errors
///
/// Returns an error if writing to `out` fails.
pub fn run(out: &mut impl Write) -> std::io::Result<()> {
    writeln!(out, "recase {}", version())
}
