//! Configuration file loading and parsing.
//!
//! Loads `<config_dir>/seace-admin/config.toml`. Every field is optional;
//! command-line flags are layered on top with [`ConfigFile::with_overrides`].

use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::error::{Error, Result};
use crate::shell::DEFAULT_TITLE;

/// Top-level configuration file structure.
#[derive(Debug, Default, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct ConfigFile {
    /// Heading settings
    pub shell: ShellConfig,
    /// Terminal UI settings
    pub ui: UiConfig,
    /// Log output settings
    pub logging: LoggingConfig,
}

/// Page heading settings.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct ShellConfig {
    pub title: String,
}

impl Default for ShellConfig {
    fn default() -> Self {
        Self {
            title: DEFAULT_TITLE.to_string(),
        }
    }
}

/// Terminal UI settings.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct UiConfig {
    /// Accept mouse clicks on the mode buttons
    pub mouse: bool,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self { mouse: true }
    }
}

/// Log output settings.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Filter directive, e.g. "info" or "seace_admin=debug"
    pub level: String,
    /// Log file for the interactive UI (stdout belongs to the terminal)
    pub file: Option<PathBuf>,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            file: None,
        }
    }
}

/// Values given on the command line. `None` keeps the file's value.
#[derive(Debug, Default, Clone)]
pub struct Overrides {
    pub title: Option<String>,
    pub log_file: Option<PathBuf>,
}

impl ConfigFile {
    /// Get the config directory (~/.config/seace-admin)
    pub fn config_dir() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("seace-admin"))
    }

    /// Get the default config file path
    pub fn config_path() -> Option<PathBuf> {
        Self::config_dir().map(|p| p.join("config.toml"))
    }

    /// Load the config named on the command line, or the default one.
    ///
    /// An explicit path must exist. A missing default file means defaults.
    pub fn resolve(explicit: Option<&Path>) -> Result<Self> {
        match explicit {
            Some(path) => Self::load_from(path),
            None => Self::load(),
        }
    }

    /// Load from the default location.
    pub fn load() -> Result<Self> {
        match Self::config_path() {
            Some(path) if path.exists() => Self::load_from(&path),
            _ => {
                tracing::debug!("no config file found, using defaults");
                Ok(Self::default())
            }
        }
    }

    /// Load from a specific path.
    pub fn load_from(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path).map_err(|e| Error::Config {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;
        Self::parse(&content).map_err(|message| Error::Config {
            path: path.to_path_buf(),
            message,
        })
    }

    /// Parse TOML text.
    pub fn parse(content: &str) -> std::result::Result<Self, String> {
        toml::from_str(content).map_err(|e| e.to_string())
    }

    /// Apply command-line overrides.
    pub fn with_overrides(mut self, overrides: Overrides) -> Self {
        if let Some(title) = overrides.title {
            self.shell.title = title;
        }
        if let Some(file) = overrides.log_file {
            self.logging.file = Some(file);
        }
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_default_config() {
        let config = ConfigFile::default();
        assert_eq!(config.shell.title, DEFAULT_TITLE);
        assert!(config.ui.mouse);
        assert_eq!(config.logging.level, "info");
        assert!(config.logging.file.is_none());
    }

    #[test]
    fn test_parse_full_config() {
        let config = ConfigFile::parse(
            r#"
[shell]
title = "Reportes"

[ui]
mouse = false

[logging]
level = "debug"
file = "/tmp/seace.log"
"#,
        )
        .unwrap();
        assert_eq!(config.shell.title, "Reportes");
        assert!(!config.ui.mouse);
        assert_eq!(config.logging.level, "debug");
        assert_eq!(config.logging.file, Some(PathBuf::from("/tmp/seace.log")));
    }

    #[test]
    fn test_partial_config_keeps_defaults() {
        let config = ConfigFile::parse("[ui]\nmouse = false\n").unwrap();
        assert_eq!(config.shell.title, DEFAULT_TITLE);
        assert!(!config.ui.mouse);
    }

    #[test]
    fn test_empty_title_is_kept() {
        let config = ConfigFile::parse("[shell]\ntitle = \"\"\n").unwrap();
        assert_eq!(config.shell.title, "");
    }

    #[test]
    fn test_invalid_toml_is_error() {
        assert!(ConfigFile::parse("[shell\ntitle = 3").is_err());
    }

    #[test]
    fn test_load_from_file() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "[shell]\ntitle = \"Sitio de administración\"").unwrap();
        let config = ConfigFile::load_from(file.path()).unwrap();
        assert_eq!(config.shell.title, "Sitio de administración");
    }

    #[test]
    fn test_load_from_bad_file_names_path() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "shell = 42").unwrap();
        let err = ConfigFile::load_from(file.path()).unwrap_err();
        match err {
            Error::Config { path, .. } => assert_eq!(path, file.path()),
            other => panic!("Expected Config error, got {:?}", other),
        }
    }

    #[test]
    fn test_explicit_missing_file_is_error() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("nope.toml");
        assert!(matches!(
            ConfigFile::resolve(Some(&missing)),
            Err(Error::Config { .. })
        ));
    }

    #[test]
    fn test_overrides_win() {
        let config = ConfigFile::default().with_overrides(Overrides {
            title: Some("Otro".to_string()),
            log_file: Some(PathBuf::from("x.log")),
        });
        assert_eq!(config.shell.title, "Otro");
        assert_eq!(config.logging.file, Some(PathBuf::from("x.log")));
    }

    #[test]
    fn test_empty_overrides_keep_file_values() {
        let base = ConfigFile::parse("[shell]\ntitle = \"Base\"\n").unwrap();
        let config = base.clone().with_overrides(Overrides::default());
        assert_eq!(config, base);
    }
}
