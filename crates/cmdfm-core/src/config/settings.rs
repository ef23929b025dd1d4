//! Application configuration loaded from a TOML file.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{CoreError, CoreResult};
use crate::fs::metadata::DEFAULT_DATE_FORMAT;

/// Top-level application configuration.
///
/// All fields have sensible defaults so cmdfm works without a config file.
/// Call [`Config::load`] to read from a TOML path.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub navigator: NavigatorConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl Config {
    /// Loads configuration from a TOML file at `path`.
    ///
    /// # Errors
    ///
    /// - [`CoreError::NotFound`] if the file does not exist.
    /// - [`CoreError::PermissionDenied`] if the file is not readable.
    /// - [`CoreError::ConfigParse`] if the TOML is malformed.
    pub fn load(path: &Path) -> CoreResult<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| match e.kind() {
            std::io::ErrorKind::NotFound => CoreError::NotFound(path.to_path_buf()),
            std::io::ErrorKind::PermissionDenied => CoreError::PermissionDenied(path.to_path_buf()),
            _ => CoreError::Io(e),
        })?;
        toml::from_str(&content).map_err(|e| CoreError::ConfigParse(e.to_string()))
    }

    /// Like [`Config::load`], but a missing file yields `Ok(None)`.
    pub fn load_optional(path: &Path) -> CoreResult<Option<Self>> {
        match Self::load(path) {
            Ok(config) => Ok(Some(config)),
            Err(CoreError::NotFound(_)) => Ok(None),
            Err(e) => Err(e),
        }
    }

    /// Where the binary looks for its config file: `config/cmdfm.toml`
    /// under `cwd` if present, else `~/.config/cmdfm/config.toml`.
    pub fn discover(cwd: &Path) -> PathBuf {
        let local = cwd.join("config").join("cmdfm.toml");
        if local.exists() {
            local
        } else {
            home_dir().join(".config").join("cmdfm").join("config.toml")
        }
    }
}

/// Settings for the interactive navigator.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NavigatorConfig {
    /// Where the last visited directory is written on quit. Empty disables it.
    #[serde(default = "default_last_dir_file")]
    pub last_dir_file: String,
    /// chrono format string for timestamps in the info overlay.
    #[serde(default = "default_date_format")]
    pub date_format: String,
    #[serde(default = "default_true")]
    pub show_hidden: bool,
}

impl NavigatorConfig {
    /// Resolved marker path, with a leading `~` expanded to `$HOME`.
    pub fn last_dir_path(&self) -> Option<PathBuf> {
        if self.last_dir_file.trim().is_empty() {
            return None;
        }
        Some(expand_home(&self.last_dir_file))
    }
}

impl Default for NavigatorConfig {
    fn default() -> Self {
        Self {
            last_dir_file: default_last_dir_file(),
            date_format: default_date_format(),
            show_hidden: true,
        }
    }
}

/// Log output settings used by the binary.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Default filter directive (`error`, `warn`, `info`, `debug`, `trace`).
    #[serde(default = "default_log_level")]
    pub level: String,
    /// Log file path. Empty means `cmdfm.log` in the temp directory.
    #[serde(default)]
    pub file: String,
}

impl LoggingConfig {
    pub fn file_path(&self) -> PathBuf {
        if self.file.trim().is_empty() {
            std::env::temp_dir().join("cmdfm.log")
        } else {
            expand_home(&self.file)
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            file: String::new(),
        }
    }
}

/// Returns `$HOME`, falling back to `/`.
pub fn home_dir() -> PathBuf {
    std::env::var("HOME")
        .map(PathBuf::from)
        .unwrap_or_else(|_| PathBuf::from("/"))
}

fn expand_home(raw: &str) -> PathBuf {
    if raw == "~" {
        return home_dir();
    }
    match raw.strip_prefix("~/") {
        Some(rest) => home_dir().join(rest),
        None => PathBuf::from(raw),
    }
}

fn default_true() -> bool {
    true
}

fn default_last_dir_file() -> String {
    "~/.cmdfm_last_dir".to_string()
}

fn default_date_format() -> String {
    DEFAULT_DATE_FORMAT.to_string()
}

fn default_log_level() -> String {
    "info".to_string()
}
