//! User settings and batch job files.
pub mod batch;
pub mod toml_loader;

use serde::Deserialize;
use std::path::{Path, PathBuf};

use crate::case::Case;
use crate::error::ConfigError;

/// Settings read from `recase/config.toml`.
///
/// ```toml
/// default_case = "kebab"
/// parallel = false
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Settings {
    /// Case used by `convert` when `--to` is not given.
    pub default_case: Case,
    /// Whether batch entries may be converted on multiple threads.
    pub parallel: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            default_case: Case::default(),
            parallel: true,
        }
    }
}

impl Settings {
    /// Load settings from `explicit`, or from the default location.
    ///
    /// A missing file at the default location yields [`Settings::default`];
    /// a missing explicit file is an error.
    ///
    /// # Errors
    ///
    /// Returns an error if the explicit file is missing, or if either file
    /// cannot be read or parsed.
    pub fn resolve(explicit: Option<&Path>) -> Result<Self, ConfigError> {
        match explicit {
            Some(path) => {
                let content = toml_loader::read(path)?;
                toml_loader::parse_toml(path, &content)
            }
            None => default_settings_path()
                .map_or_else(|| Ok(Self::default()), |path| toml_loader::load_config(&path)),
        }
    }
}

/// Return `$XDG_CONFIG_HOME/recase/config.toml` (or `~/.config/recase/config.toml`).
///
/// Returns `None` when no home directory can be determined.
#[must_use]
pub fn default_settings_path() -> Option<PathBuf> {
    let config_dir = std::env::var_os("XDG_CONFIG_HOME")
        .filter(|v| !v.is_empty())
        .map(PathBuf::from)
        .or_else(|| {
            std::env::var_os("HOME")
                .or_else(|| std::env::var_os("USERPROFILE"))
                .map(|home| PathBuf::from(home).join(".config"))
        })?;
    Some(config_dir.join("recase").join("config.toml"))
}

#[cfg(test)]
#[allow(clippy::expect_used, clippy::unwrap_used, clippy::indexing_slicing)]
mod tests {
    use super::*;

    fn write(dir: &tempfile::TempDir, content: &str) -> PathBuf {
        let path = dir.path().join("config.toml");
        std::fs::write(&path, content).unwrap();
        path
    }

    #[test]
    fn defaults() {
        let settings = Settings::default();
        assert_eq!(settings.default_case, Case::Camel);
        assert!(settings.parallel);
    }

    #[test]
    fn explicit_file_overrides_fields() {
        let dir = tempfile::tempdir().unwrap();
        let path = write(&dir, "default_case = \"kebab-case\"\nparallel = false\n");
        let settings = Settings::resolve(Some(path.as_path())).unwrap();
        assert_eq!(settings.default_case, Case::Kebab);
        assert!(!settings.parallel);
    }

    #[test]
    fn partial_file_keeps_other_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = write(&dir, "default_case = \"dot\"\n");
        let settings = Settings::resolve(Some(path.as_path())).unwrap();
        assert_eq!(settings.default_case, Case::Dot);
        assert!(settings.parallel);
    }

    #[test]
    fn empty_file_is_all_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = write(&dir, "");
        assert_eq!(Settings::resolve(Some(path.as_path())).unwrap(), Settings::default());
    }

    #[test]
    fn missing_explicit_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = Settings::resolve(Some(dir.path().join("nope.toml").as_path())).unwrap_err();
        assert!(matches!(err, ConfigError::NotFound(_)), "{err}");
    }

    #[test]
    fn unknown_keys_are_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let path = write(&dir, "default_cse = \"dot\"\n");
        let err = Settings::resolve(Some(path.as_path())).unwrap_err();
        assert!(matches!(err, ConfigError::Parse { .. }), "{err}");
    }

    #[test]
    fn unknown_case_is_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let path = write(&dir, "default_case = \"snake\"\n");
        assert!(Settings::resolve(Some(path.as_path())).is_err());
    }

    #[test]
    fn default_path_ends_with_recase_config() {
        if let Some(path) = default_settings_path() {
            assert!(path.ends_with("recase/config.toml"), "{}", path.display());
        }
    }
}
