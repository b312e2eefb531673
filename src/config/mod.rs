//! Configuration management for jira-client.
//!
//! Profiles (instance URL + username) and client options are stored as TOML
//! in the platform config directory. Passwords are never written here; they
//! live in the OS keyring.

mod options;
mod profile;

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

pub use options::ClientOptions;
pub use profile::Profile;

/// Configuration file name inside the config directory.
const CONFIG_FILE: &str = "config.toml";

/// Directory name under the platform config directory.
const APP_DIR: &str = "jira-client";

/// Errors from loading, saving or validating configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("could not determine the user configuration directory")]
    NoConfigDir,

    #[error("failed to create config directory {path}: {source}")]
    CreateDirError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to read {path}: {source}")]
    ReadError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to write {path}: {source}")]
    WriteError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse configuration: {0}")]
    ParseError(#[from] toml::de::Error),

    #[error("failed to serialize configuration: {0}")]
    SerializeError(#[from] toml::ser::Error),

    #[error("invalid configuration: {0}")]
    ValidationError(String),

    #[error("profile '{0}' not found")]
    ProfileNotFound(String),
}

pub type Result<T> = std::result::Result<T, ConfigError>;

/// The persisted configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// The name of the profile used when none is requested.
    pub default_profile: Option<String>,
    pub profiles: Vec<Profile>,
    pub client: ClientOptions,
}

impl Config {
    /// Default location: `<config_dir>/jira-client/config.toml`.
    pub fn default_path() -> Result<PathBuf> {
        let base = dirs::config_dir().ok_or(ConfigError::NoConfigDir)?;
        Ok(base.join(APP_DIR).join(CONFIG_FILE))
    }

    /// Load from the default location. A missing file yields the defaults.
    pub fn load() -> Result<Self> {
        let path = Self::default_path()?;
        if !path.exists() {
            debug!(path = %path.display(), "No config file, using defaults");
            return Ok(Self::default());
        }
        Self::load_from(&path)
    }

    /// Load and validate a config file.
    pub fn load_from(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path).map_err(|source| ConfigError::ReadError {
            path: path.to_path_buf(),
            source,
        })?;
        let config: Config = toml::from_str(&contents)?;
        config.validate()?;
        debug!(path = %path.display(), profiles = config.profiles.len(), "Loaded config");
        Ok(config)
    }

    /// Save to the default location.
    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::default_path()?)
    }

    /// Validate and write the config, creating parent directories as needed.
    pub fn save_to(&self, path: &Path) -> Result<()> {
        self.validate()?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(|source| ConfigError::CreateDirError {
                path: parent.to_path_buf(),
                source,
            })?;
        }
        let contents = toml::to_string_pretty(self)?;
        std::fs::write(path, contents).map_err(|source| ConfigError::WriteError {
            path: path.to_path_buf(),
            source,
        })?;
        debug!(path = %path.display(), "Saved config");
        Ok(())
    }

    /// Check every profile, profile name uniqueness and the default profile.
    pub fn validate(&self) -> Result<()> {
        for (i, profile) in self.profiles.iter().enumerate() {
            profile.validate()?;
            if self.profiles[..i].iter().any(|p| p.name == profile.name) {
                return Err(ConfigError::ValidationError(format!(
                    "duplicate profile name '{}'",
                    profile.name
                )));
            }
        }
        if let Some(name) = &self.default_profile {
            if self.profile(name).is_none() {
                return Err(ConfigError::ProfileNotFound(name.clone()));
            }
        }
        self.client.validate()
    }

    /// Find a profile by name.
    pub fn profile(&self, name: &str) -> Option<&Profile> {
        self.profiles.iter().find(|p| p.name == name)
    }

    /// The default profile, or the only one if exactly one is configured.
    pub fn active_profile(&self) -> Result<&Profile> {
        match &self.default_profile {
            Some(name) => self
                .profile(name)
                .ok_or_else(|| ConfigError::ProfileNotFound(name.clone())),
            None => match self.profiles.as_slice() {
                [only] => Ok(only),
                [] => Err(ConfigError::ValidationError(
                    "no profiles configured".to_string(),
                )),
                _ => Err(ConfigError::ValidationError(
                    "multiple profiles configured but no default_profile set".to_string(),
                )),
            },
        }
    }
}
