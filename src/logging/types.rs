//! Conversion entries recorded for the run summary.
use serde::Serialize;

/// Result of one conversion, kept for the summary.
#[derive(Debug, Clone)]
pub struct ConversionEntry {
    /// Label or entry number.
    pub name: String,
    /// Outcome.
    pub status: ConversionStatus,
    /// Optional detail (the error message for failures).
    pub message: Option<String>,
}

/// Outcome of a single conversion.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ConversionStatus {
    /// Output differs from the input.
    Converted,
    /// Input was already in the target case.
    Unchanged,
    /// Input was rejected.
    Failed,
}
