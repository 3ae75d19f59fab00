//! Convert command implementation.
use anyhow::{Context as _, Result};
use std::io::{BufRead, Write};

use crate::case::Case;
use crate::cli::{ConvertOpts, GlobalOpts};
use crate::logging::Logger;

/// Run the convert command.
///
/// Converts every positional input, or every line of `input` when there are
/// none, writing one result per line to `out`.
///
/// # Errors
///
/// Returns an error if the settings cannot be loaded, or reading `input` or
/// writing `out` fails.
pub fn run(
    global: &GlobalOpts,
    opts: &ConvertOpts,
    log: &Logger,
    input: impl BufRead,
    out: &mut impl Write,
) -> Result<()> {
    let setup = super::CommandSetup::init(global, log)?;
    let case = opts.to.unwrap_or(setup.settings.default_case);
    log.debug(&format!("converting to {case}"));

    let count = if opts.inputs.is_empty() {
        convert_lines(case, input, out).context("converting stdin")?
    } else {
        write_conversions(case, &opts.inputs, out).context("writing output")?
    };
    log.debug(&format!("{count} line(s) converted"));
    Ok(())
}

/// Convert each item of `inputs` and write one result per line.
///
/// # Errors
///
/// Returns an error if writing to `out` fails.
pub fn write_conversions<S: AsRef<str>>(
    case: Case,
    inputs: impl IntoIterator<Item = S>,
    out: &mut impl Write,
) -> std::io::Result<usize> {
    let mut count = 0;
    for input in inputs {
        writeln!(out, "{}", case.convert(input.as_ref()))?;
        count += 1;
    }
    Ok(count)
}

/// Convert every line read from `reader`, streaming results to `out`.
///
/// Lines end at `\n` or `\r\n`. Invalid UTF-8 is replaced with U+FFFD
/// rather than ending the stream.
///
/// # Errors
///
/// Returns an error if reading from `reader` or writing a result fails.
pub fn convert_lines(
    case: Case,
    reader: impl BufRead,
    out: &mut impl Write,
) -> std::io::Result<usize> {
    let mut count = 0;
    for line in reader.split(b'\n') {
        let bytes = line?;
        let bytes = bytes.strip_suffix(b"\r").unwrap_or(bytes.as_slice());
        writeln!(out, "{}", case.convert(&String::from_utf8_lossy(bytes)))?;
        count += 1;
    }
    Ok(count)
}
