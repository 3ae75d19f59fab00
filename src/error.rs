//! Domain-specific error types for recase.
//!
//! Library code returns the typed errors below; command handlers at the CLI
//! boundary convert them to [`anyhow::Error`] via the standard `?` operator.
//!
//! # Error hierarchy
//!
//! ```text
//! RecaseError
//! └── Config(ConfigError) settings and batch file loading
//!
//! CaseError               input that is not a string
//! ```
//!
//! A [`CaseError`] never aborts a command on its own: batch runs record it
//! against the failing entry and carry on.

use std::path::PathBuf;

use thiserror::Error;

/// Top-level error type for recase.
#[derive(Error, Debug)]
pub enum RecaseError {
    /// A settings or batch file could not be loaded.
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),
}

/// Errors raised by the case converters.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CaseError {
    /// The value handed to a converter was not a string.
    #[error("Input must be a string, got {found}")]
    InvalidArgument {
        /// JSON kind of the rejected value (`"null"`, `"number"`, ...).
        found: &'static str,
    },
}

/// Errors that arise while loading settings or batch files.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// An explicitly requested file does not exist.
    #[error("Config file not found: {}", .0.display())]
    NotFound(PathBuf),

    /// The file exists but could not be read.
    #[error("IO error reading {}: {source}", .path.display())]
    Io {
        /// Path to the file that could not be read.
        path: PathBuf,
        /// Underlying I/O error.
        source: std::io::Error,
    },

    /// The file is not valid TOML or JSON for the expected shape.
    #[error("Invalid {format} in {}: {message}", .path.display())]
    Parse {
        /// Path to the offending file.
        path: PathBuf,
        /// `"TOML"` or `"JSON"`.
        format: &'static str,
        /// Parser message.
        message: String,
    },
}
