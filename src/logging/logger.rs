//! Structured logger with per-conversion summary collection.
use std::sync::Mutex;

use super::types::{ConversionEntry, ConversionStatus};

/// Structured logger that records conversion outcomes for the run summary.
///
/// Messages go through [`tracing`]; the console layout is decided by the
/// subscriber installed with [`init_subscriber`](super::init_subscriber).
#[derive(Debug, Default)]
pub struct Logger {
    entries: Mutex<Vec<ConversionEntry>>,
}

impl Logger {
    /// Create a logger with no recorded entries.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            entries: Mutex::new(Vec::new()),
        }
    }

    /// Return a clone of all recorded entries (test-only).
    #[cfg(test)]
    pub(crate) fn entries(&self) -> Vec<ConversionEntry> {
        self.entries.lock().map_or_else(|_| vec![], |g| g.clone())
    }

    /// Log an error message.
    pub fn error(&self, msg: &str) {
        tracing::error!("{msg}");
    }

    /// Log a warning message.
    pub fn warn(&self, msg: &str) {
        tracing::warn!("{msg}");
    }

    /// Log a stage header (major section).
    pub fn stage(&self, msg: &str) {
        tracing::info!(target: "recase::stage", "{msg}");
    }

    /// Log an informational message.
    pub fn info(&self, msg: &str) {
        tracing::info!("{msg}");
    }

    /// Log a debug message (suppressed on console unless verbose).
    pub fn debug(&self, msg: &str) {
        tracing::debug!("{msg}");
    }

    /// Record a conversion result for the summary.
    pub fn record(&self, name: &str, status: ConversionStatus, message: Option<&str>) {
        if let Ok(mut guard) = self.entries.lock() {
            guard.push(ConversionEntry {
                name: name.to_string(),
                status,
                message: message.map(String::from),
            });
        }
    }

    /// Return `true` if any recorded conversion has failed.
    #[must_use]
    pub fn has_failures(&self) -> bool {
        self.failure_count() > 0
    }

    /// Count the number of failed conversions.
    #[must_use]
    pub fn failure_count(&self) -> usize {
        self.entries.lock().map_or(0, |guard| {
            guard
                .iter()
                .filter(|e| e.status == ConversionStatus::Failed)
                .count()
        })
    }

    /// Log the summary of all recorded conversions.
    pub fn print_summary(&self) {
        let entries = match self.entries.lock() {
            Ok(guard) => guard.clone(),
            Err(_) => return,
        };
        if entries.is_empty() {
            return;
        }

        self.stage("Summary");

        let mut converted = 0u32;
        let mut unchanged = 0u32;
        let mut failed = 0u32;

        for entry in &entries {
            let (icon, color) = match entry.status {
                ConversionStatus::Converted => {
                    converted += 1;
                    ("✓", "\x1b[32m")
                }
                ConversionStatus::Unchanged => {
                    unchanged += 1;
                    ("·", "\x1b[2m")
                }
                ConversionStatus::Failed => {
                    failed += 1;
                    ("✗", "\x1b[31m")
                }
            };

            let suffix = entry
                .message
                .as_ref()
                .map_or_else(String::new, |msg| format!(" ({msg})"));

            self.info(&format!("{color}{icon} {}{suffix}\x1b[0m", entry.name));
        }

        let total = converted + unchanged + failed;
        self.info(&format!(
            "{total} conversions: \x1b[32m{converted} converted\x1b[0m, \x1b[2m{unchanged} unchanged\x1b[0m, \x1b[31m{failed} failed\x1b[0m"
        ));
    }
}
