//! Batch job files: a list of conversions read from TOML or JSON.
//!
//! ```toml
//! case = "kebab"            # default for entries without their own case
//!
//! [[conversion]]
//! input = "Hello World"
//!
//! [[conversion]]
//! label = "constant"
//! case = "camel"
//! input = "MAX_RETRY_COUNT"
//! ```
//!
//! `input` is kept as an untyped value so that a number, a boolean or a
//! missing input is reported per entry instead of failing the whole file.
use serde::Deserialize;
use serde_json::Value;
use std::path::Path;

use super::toml_loader;
use crate::case::Case;
use crate::error::ConfigError;

/// A parsed batch file.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct BatchFile {
    /// File-level default case.
    pub case: Option<Case>,
    /// Entries in file order.
    #[serde(rename = "conversion")]
    pub conversions: Vec<BatchEntry>,
}

/// One conversion request.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct BatchEntry {
    /// Optional name shown in reports instead of the entry number.
    #[serde(default)]
    pub label: Option<String>,
    /// Case for this entry; falls back to the file-level case.
    #[serde(default)]
    pub case: Option<Case>,
    /// Value to convert. Absent inputs are [`Value::Null`].
    ///
    /// TOML values without a JSON counterpart are mapped on load: a
    /// datetime becomes an object, and `nan` or `inf` become `null`
    /// because JSON numbers are finite.
    #[serde(default)]
    pub input: Value,
}

impl BatchFile {
    /// Load a batch file, choosing the format from the extension
    /// (`.json` is JSON, anything else TOML).
    ///
    /// # Errors
    ///
    /// Returns an error if the file is missing, unreadable, or malformed.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let is_json = path
            .extension()
            .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));
        if is_json {
            toml_loader::load_json(path)
        } else {
            let content = toml_loader::read(path)?;
            toml_loader::parse_toml(path, &content)
        }
    }

    /// Case for `entry`: its own, else the file's, else `fallback`.
    #[must_use]
    pub fn case_for(&self, entry: &BatchEntry, fallback: Case) -> Case {
        entry.case.or(self.case).unwrap_or(fallback)
    }
}

impl BatchEntry {
    /// Display name: the label if set, otherwise `#<n>` (1-based).
    #[must_use]
    pub fn display_name(&self, index: usize) -> String {
        self.label
            .clone()
            .unwrap_or_else(|| format!("#{}", index + 1))
    }
}
