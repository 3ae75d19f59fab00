//! String case conversion.
//!
//! Converts text to camelCase, dot.case or kebab-case. The converters are
//! pure functions over `&str`; the rest of the crate wraps them in a small
//! command-line tool.
//!
//! The public API is organised into these layers:
//!
//! - **[`case`]**: the converters, the word splitter and the [`case::Case`] selector
//! - **[`config`]**: settings and batch job files (TOML / JSON)
//! - **[`commands`]**: subcommand orchestration (`convert`, `batch`, `demo`, `version`)
//! - **[`logging`]**: tracing-based console output and run summary
#![deny(clippy::or_fun_call)]
#![deny(clippy::bool_to_int_with_if)]

pub mod case;
pub mod cli;
pub mod commands;
pub mod config;
pub mod error;
pub mod logging;
