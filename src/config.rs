//! Persisted application settings.
//!
//! Settings live in a TOML file under the `.oncoform` directory. A missing
//! file yields defaults; only genuinely broken files surface errors.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::app_dirs;

/// Default filename used to store the app settings.
pub const SETTINGS_FILE_NAME: &str = "config.toml";

/// Base address the original deployment serves predictions from.
pub const DEFAULT_SERVICE_URL: &str = "http://localhost:5000";

/// User-tunable application settings.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Base URL of the prediction service. The `/predict` path is fixed.
    pub service_url: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            service_url: DEFAULT_SERVICE_URL.to_string(),
        }
    }
}

/// Errors that can occur while loading or saving settings.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// The application directory could not be prepared.
    #[error(transparent)]
    AppDir(#[from] app_dirs::AppDirError),
    /// Reading the settings file failed.
    #[error("Failed to read settings at {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },
    /// Writing the settings file failed.
    #[error("Failed to write settings at {path}: {source}")]
    Write {
        path: PathBuf,
        source: std::io::Error,
    },
    /// The settings file is not valid TOML.
    #[error("Failed to parse settings at {path}: {source}")]
    Parse {
        path: PathBuf,
        source: toml::de::Error,
    },
    /// The settings could not be serialized to TOML.
    #[error("Failed to serialize settings: {0}")]
    Serialize(#[from] toml::ser::Error),
}

/// Resolve the settings file path, ensuring the app directory exists.
pub fn settings_path() -> Result<PathBuf, ConfigError> {
    Ok(app_dirs::app_root_dir()?.join(SETTINGS_FILE_NAME))
}

/// Load settings from disk, returning defaults if the file is missing.
pub fn load_or_default() -> Result<Settings, ConfigError> {
    load_from(&settings_path()?)
}

/// Load settings from a specific path.
pub fn load_from(path: &Path) -> Result<Settings, ConfigError> {
    if !path.exists() {
        return Ok(Settings::default());
    }
    let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    toml::from_str(&text).map_err(|source| ConfigError::Parse {
        path: path.to_path_buf(),
        source,
    })
}

/// Persist settings, overwriting any previous contents.
pub fn save(settings: &Settings) -> Result<(), ConfigError> {
    save_to(settings, &settings_path()?)
}

/// Save settings to a specific path, creating parent directories as needed.
pub fn save_to(settings: &Settings, path: &Path) -> Result<(), ConfigError> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).map_err(|source| ConfigError::Write {
            path: parent.to_path_buf(),
            source,
        })?;
    }
    let text = toml::to_string_pretty(settings)?;
    std::fs::write(path, text).map_err(|source| ConfigError::Write {
        path: path.to_path_buf(),
        source,
    })
}
