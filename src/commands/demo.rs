//! Command: show example conversions for every case.
use std::io::Write;

use crate::case::Case;

/// Showcase inputs, per case.
pub const EXAMPLES: &[(Case, &str)] = &[
    (Case::Camel, "hello world"),
    (Case::Camel, "convert_this-string"),
    (Case::Camel, "crazy--input"),
    (Case::Dot, "hello world"),
    (Case::Dot, "convert_this-string"),
    (Case::Dot, "crazy--input"),
    (Case::Kebab, "Hello World"),
    (Case::Kebab, "convert_thisString"),
    (Case::Kebab, "This--is__crazy"),
];

/// Write one `<case>  <input>  -> <output>` line per example.
///
/// # Errors
///
/// Returns an error if writing to `out` fails.
pub fn run(out: &mut impl Write) -> std::io::Result<()> {
    for &(case, input) in EXAMPLES {
        let quoted = format!("{input:?}");
        let output = case.convert(input);
        writeln!(out, "{:<5}  {quoted:<21}  -> {output:?}", case.name())?;
    }
    Ok(())
}
