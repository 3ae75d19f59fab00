//! Subcommand implementations.
pub mod batch;
pub mod convert;
pub mod demo;
pub mod version;

use anyhow::{Context as _, Result};

use crate::cli::GlobalOpts;
use crate::config::{self, Settings};
use crate::logging::Logger;

/// Shared state produced by the common command setup sequence.
///
/// Resolves the settings file and folds the global flags into it so that
/// each command does not have to repeat the boilerplate.
#[derive(Debug, Clone, Copy)]
pub struct CommandSetup {
    /// Settings as loaded from disk.
    pub settings: Settings,
    /// Effective parallelism: `--no-parallel` and `parallel = false` both disable it.
    pub parallel: bool,
}

impl CommandSetup {
    /// Load settings and combine them with the global options.
    ///
    /// # Errors
    ///
    /// Returns an error if the settings file cannot be read or parsed, or if
    /// an explicitly requested settings file does not exist.
    pub fn init(global: &GlobalOpts, log: &Logger) -> Result<Self> {
        let path = global
            .config
            .clone()
            .or_else(config::default_settings_path);
        if let Some(path) = &path {
            log.debug(&format!("settings file: {}", path.display()));
        }

        let settings = Settings::resolve(global.config.as_deref()).context("loading settings")?;
        let parallel = global.parallel && settings.parallel;

        log.debug(&format!("default case: {}", settings.default_case));
        log.debug(&format!("parallel: {parallel}"));

        Ok(Self { settings, parallel })
    }
}

#[cfg(test)]
#[allow(clippy::expect_used, clippy::unwrap_used, clippy::indexing_slicing)]
mod tests {
    use super::*;
    use crate::case::Case;

    fn global_with(config: &std::path::Path, parallel: bool) -> GlobalOpts {
        GlobalOpts {
            config: Some(config.to_path_buf()),
            parallel,
        }
    }

    #[test]
    fn init_reads_explicit_settings() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "default_case = \"dot\"\n").unwrap();
        let setup = CommandSetup::init(&global_with(&path, true), &Logger::new()).unwrap();
        assert_eq!(setup.settings.default_case, Case::Dot);
        assert!(setup.parallel);
    }

    #[test]
    fn no_parallel_flag_wins_over_settings() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "parallel = true\n").unwrap();
        let setup = CommandSetup::init(&global_with(&path, false), &Logger::new()).unwrap();
        assert!(!setup.parallel);
    }

    #[test]
    fn settings_can_disable_parallel() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "parallel = false\n").unwrap();
        let setup = CommandSetup::init(&global_with(&path, true), &Logger::new()).unwrap();
        assert!(!setup.parallel);
    }

    #[test]
    fn missing_explicit_settings_fail() {
        let dir = tempfile::tempdir().unwrap();
        let global = global_with(&dir.path().join("missing.toml"), true);
        let err = CommandSetup::init(&global, &Logger::new()).unwrap_err();
        assert!(format!("{err:#}").contains("loading settings"), "{err:#}");
    }
}
