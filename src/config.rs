//! Configuration file handling
//!
//! Settings live in `<config dir>/npt/config.toml`. Every field has a
//! default, so a missing file, a missing section or a partial section are
//! all valid.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::session::script::DEFAULT_PORTAL_URL;

/// Errors that can occur while loading or saving the configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Could not determine the user config directory")]
    NoConfigDir,

    #[error("Failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Invalid config file {path}: {source}")]
    Parse {
        path: PathBuf,
        source: toml::de::Error,
    },

    #[error("Failed to serialize config: {0}")]
    Serialize(#[from] toml::ser::Error),

    #[error("Failed to write {path}: {source}")]
    Write {
        path: PathBuf,
        source: std::io::Error,
    },
}

/// Lower/upper bound for the clock multiplier.
pub const MIN_SPEED: f64 = 0.1;
pub const MAX_SPEED: f64 = 16.0;

/// Top-level configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub session: SessionConfig,
    pub display: DisplayConfig,
    pub portal: PortalConfig,
    pub logging: LoggingConfig,
}

/// Session clock and randomness.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SessionConfig {
    /// Fixed random seed; omitted means OS entropy
    #[serde(skip_serializing_if = "Option::is_none")]
    pub seed: Option<u64>,
    /// Clock multiplier applied by the terminal driver
    pub speed: f64,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            seed: None,
            speed: 1.0,
        }
    }
}

impl SessionConfig {
    /// Speed clamped to the supported range.
    pub fn effective_speed(&self) -> f64 {
        if self.speed.is_finite() {
            self.speed.clamp(MIN_SPEED, MAX_SPEED)
        } else {
            1.0
        }
    }
}

/// Presentation options.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DisplayConfig {
    /// Theme name: terminal, classic or ocean
    pub theme: String,
    /// Transliterate emoji and other non-ASCII text
    pub ascii_only: bool,
    /// Number of flakes drawn by the snow overlay
    pub snowflakes: usize,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            theme: "terminal".to_string(),
            ascii_only: false,
            snowflakes: 50,
        }
    }
}

/// Wishlist portal link.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PortalConfig {
    pub url: String,
}

impl Default for PortalConfig {
    fn default() -> Self {
        Self {
            url: DEFAULT_PORTAL_URL.to_string(),
        }
    }
}

/// Log file settings. The terminal UI owns stdout, so logs go to a file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    pub enabled: bool,
    /// `tracing` filter directive
    pub level: String,
    /// Log file; defaults to `<state dir>/npt/npt.log`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub file: Option<PathBuf>,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            level: "info".to_string(),
            file: None,
        }
    }
}

impl Config {
    /// Default location of the config file.
    pub fn config_path() -> Result<PathBuf, ConfigError> {
        dirs::config_dir()
            .map(|dir| dir.join("npt").join("config.toml"))
            .ok_or(ConfigError::NoConfigDir)
    }

    /// Load from the default location, falling back to defaults if the file is absent.
    pub fn load() -> Result<Self, ConfigError> {
        let path = Self::config_path()?;
        if path.exists() {
            Self::load_from(&path)
        } else {
            Ok(Self::default())
        }
    }

    /// Load from an explicit path. The file must exist.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml(&content).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    pub fn from_toml(content: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(content)
    }

    pub fn to_toml(&self) -> Result<String, ConfigError> {
        Ok(toml::to_string_pretty(self)?)
    }

    /// Save to the default location.
    pub fn save(&self) -> Result<PathBuf, ConfigError> {
        let path = Self::config_path()?;
        self.save_to(&path)?;
        Ok(path)
    }

    /// Save to an explicit path, creating parent directories.
    pub fn save_to(&self, path: &Path) -> Result<(), ConfigError> {
        let content = self.to_toml()?;
        let write_err = |source| ConfigError::Write {
            path: path.to_path_buf(),
            source,
        };
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).map_err(write_err)?;
        }
        fs::write(path, content).map_err(write_err)
    }
}
