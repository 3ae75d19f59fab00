//! Batch command implementation.
use anyhow::{Context as _, Result};
use rayon::prelude::*;
use serde::Serialize;
use serde_json::Value;
use std::io::Write;
use std::path::Path;

use crate::case::{Case, convert_value};
use crate::cli::{BatchOpts, GlobalOpts};
use crate::config::batch::{BatchEntry, BatchFile};
use crate::error::RecaseError;
use crate::logging::{ConversionStatus, Logger};

/// Result of one batch entry.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BatchOutcome {
    /// Label or `#<n>`.
    pub name: String,
    /// Case the entry was converted to.
    pub case: Case,
    /// Raw input value.
    pub input: Value,
    /// Outcome.
    pub status: ConversionStatus,
    /// Converted text, absent on failure.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub output: Option<String>,
    /// Error message, present only on failure.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

/// Outcomes of a whole batch file, in file order.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct BatchReport {
    /// One outcome per entry.
    pub outcomes: Vec<BatchOutcome>,
}

impl BatchReport {
    /// Number of failed entries.
    #[must_use]
    pub fn failure_count(&self) -> usize {
        self.outcomes
            .iter()
            .filter(|o| o.status == ConversionStatus::Failed)
            .count()
    }
}

/// Load `path` and convert every entry.
///
/// Entries without a case use the file-level case, then `fallback`.
///
/// # Errors
///
/// Returns an error if the batch file cannot be loaded. Entries whose input
/// is not a string do not fail the call; they are reported as
/// [`ConversionStatus::Failed`].
pub fn execute(path: &Path, fallback: Case, parallel: bool) -> Result<BatchReport, RecaseError> {
    let batch = BatchFile::load(path)?;
    Ok(run_batch(&batch, fallback, parallel))
}

/// Convert every entry of `batch`, optionally on the rayon thread pool.
///
/// Outcomes are returned in entry order either way.
#[must_use]
pub fn run_batch(batch: &BatchFile, fallback: Case, parallel: bool) -> BatchReport {
    let convert = |(index, entry): (usize, &BatchEntry)| {
        convert_entry(index, entry, batch.case_for(entry, fallback))
    };
    let outcomes = if parallel {
        batch.conversions.par_iter().enumerate().map(convert).collect()
    } else {
        batch.conversions.iter().enumerate().map(convert).collect()
    };
    BatchReport { outcomes }
}

fn convert_entry(index: usize, entry: &BatchEntry, case: Case) -> BatchOutcome {
    let name = entry.display_name(index);
    let input = entry.input.clone();
    match convert_value(case, &entry.input) {
        Ok(output) => {
            let status = if entry.input.as_str() == Some(output.as_str()) {
                ConversionStatus::Unchanged
            } else {
                ConversionStatus::Converted
            };
            BatchOutcome {
                name,
                case,
                input,
                status,
                output: Some(output),
                error: None,
            }
        }
        Err(e) => BatchOutcome {
            name,
            case,
            input,
            status: ConversionStatus::Failed,
            output: None,
            error: Some(e.to_string()),
        },
    }
}

/// Write the text report: one `<name> [<case>] <output>` line per entry,
/// with `error: <message>` in place of the output for failures.
///
/// # Errors
///
/// Returns an error if writing to `out` fails.
pub fn write_report(report: &BatchReport, out: &mut impl Write) -> std::io::Result<()> {
    for outcome in &report.outcomes {
        match (&outcome.output, &outcome.error) {
            (Some(output), _) => writeln!(out, "{} [{}] {output}", outcome.name, outcome.case)?,
            (None, Some(error)) => {
                writeln!(out, "{} [{}] error: {error}", outcome.name, outcome.case)?;
            }
            (None, None) => writeln!(out, "{} [{}]", outcome.name, outcome.case)?,
        }
    }
    Ok(())
}

/// Run the batch command.
///
/// # Errors
///
/// Returns an error if the settings or batch file cannot be loaded, output
/// cannot be written, or any entry failed to convert.
pub fn run(global: &GlobalOpts, opts: &BatchOpts, log: &Logger, out: &mut impl Write) -> Result<()> {
    let setup = super::CommandSetup::init(global, log)?;

    log.stage(&format!("Converting {}", opts.file.display()));
    let report = execute(&opts.file, setup.settings.default_case, setup.parallel)
        .with_context(|| format!("loading batch file {}", opts.file.display()))?;
    if report.outcomes.is_empty() {
        log.warn(&format!("no conversions in {}", opts.file.display()));
    } else {
        log.info(&format!("{} entries", report.outcomes.len()));
    }

    for outcome in &report.outcomes {
        match &outcome.error {
            Some(error) => log.error(&format!("{}: {error}", outcome.name)),
            None => log.debug(&format!(
                "{}: {} -> {}",
                outcome.name,
                outcome.input,
                outcome.output.as_deref().unwrap_or_default()
            )),
        }
        log.record(&outcome.name, outcome.status, outcome.error.as_deref());
    }

    if opts.json {
        serde_json::to_writer_pretty(&mut *out, &report).context("writing JSON report")?;
        writeln!(out).context("writing JSON report")?;
    } else {
        write_report(&report, out).context("writing report")?;
    }

    log.print_summary();

    if log.has_failures() {
        anyhow::bail!("{} conversion(s) failed", log.failure_count());
    }
    Ok(())
}
