// Shared helpers for integration tests.
//
// Provides a temporary-directory-backed workspace holding a settings file and
// batch job files, plus a fluent builder, so each integration test can set up
// an isolated environment without repeating filesystem boilerplate.
//
// Used by all integration test binaries that declare `mod common;`.
#![allow(dead_code)]

use std::path::{Path, PathBuf};

use recase_cli::cli::GlobalOpts;
use recase_cli::logging::Logger;

/// An isolated test workspace backed by a [`tempfile::TempDir`].
///
/// The directory is automatically deleted when dropped.
pub struct IntegrationTestContext {
    /// Temporary directory containing `config.toml` and any job files.
    pub root: tempfile::TempDir,
}

impl IntegrationTestContext {
    /// Create a new context with an empty `config.toml` (all defaults).
    pub fn new() -> Self {
        let root = tempfile::tempdir().expect("create temp dir");
        std::fs::write(root.path().join("config.toml"), "").expect("write config.toml");
        Self { root }
    }

    /// Path to the workspace root.
    pub fn root_path(&self) -> &Path {
        self.root.path()
    }

    /// Path of a file inside the workspace.
    pub fn path(&self, name: &str) -> PathBuf {
        self.root.path().join(name)
    }

    /// Global options pointing at this workspace's `config.toml`.
    pub fn global_opts(&self, parallel: bool) -> GlobalOpts {
        GlobalOpts {
            config: Some(self.path("config.toml")),
            parallel,
        }
    }

    /// A fresh logger for one command run.
    pub fn logger(&self) -> Logger {
        Logger::new()
    }
}

/// Fluent builder for [`IntegrationTestContext`].
pub struct TestContextBuilder {
    ctx: IntegrationTestContext,
}

impl TestContextBuilder {
    /// Begin building a new context with default settings.
    pub fn new() -> Self {
        Self {
            ctx: IntegrationTestContext::new(),
        }
    }

    /// Overwrite `config.toml` with `content`.
    pub fn with_settings(self, content: &str) -> Self {
        std::fs::write(self.ctx.path("config.toml"), content).expect("write config.toml");
        self
    }

    /// Write a batch job file named `name`.
    pub fn with_batch_file(self, name: &str, content: &str) -> Self {
        std::fs::write(self.ctx.path(name), content).expect("write batch file");
        self
    }

    /// Finish building and return the configured context.
    pub fn build(self) -> IntegrationTestContext {
        self.ctx
    }
}
