//! JIRA instance profiles.

use serde::{Deserialize, Serialize};

use super::{ConfigError, Result};
use crate::api::{keyring, BasicAuth};

/// Connection details for one JIRA instance.
///
/// The password or API token is not part of the profile; it is kept in the
/// OS keyring under the profile's URL and username.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Profile {
    /// Unique, whitespace-free profile name.
    pub name: String,

    /// The JIRA instance URL (e.g., "https://company.atlassian.net").
    pub url: String,

    /// Email address (JIRA Cloud) or username (Server / Data Center).
    pub username: String,
}

impl Profile {
    pub fn new(name: String, url: String, username: String) -> Self {
        Self {
            name,
            url,
            username,
        }
    }

    /// Validate this profile.
    ///
    /// # Errors
    ///
    /// Returns a `ConfigError::ValidationError` naming the offending field.
    pub fn validate(&self) -> Result<()> {
        if self.name.is_empty() {
            return Err(ConfigError::ValidationError(
                "profile name cannot be empty".to_string(),
            ));
        }

        if self.name.contains(char::is_whitespace) {
            return Err(ConfigError::ValidationError(format!(
                "profile name '{}' cannot contain whitespace",
                self.name
            )));
        }

        if self.url.is_empty() {
            return Err(ConfigError::ValidationError(format!(
                "profile '{}': URL cannot be empty",
                self.name
            )));
        }

        if !self.url.starts_with("https://") && !self.url.starts_with("http://") {
            return Err(ConfigError::ValidationError(format!(
                "profile '{}': URL must start with http:// or https://",
                self.name
            )));
        }

        if self.username.trim().is_empty() {
            return Err(ConfigError::ValidationError(format!(
                "profile '{}': username cannot be empty",
                self.name
            )));
        }

        Ok(())
    }

    /// Basic auth credential with the password taken from the OS keyring.
    pub fn credential(&self) -> crate::error::Result<BasicAuth> {
        self.validate()?;
        BasicAuth::from_keyring(&self.url, &self.username)
    }

    /// Basic auth credential with an explicitly supplied password.
    pub fn credential_with_password(&self, password: impl Into<String>) -> BasicAuth {
        BasicAuth::new(self.url.as_str(), self.username.as_str(), password)
    }

    /// Whether a password for this profile is stored in the OS keyring.
    pub fn has_stored_password(&self) -> bool {
        keyring::has_password(&self.url, &self.username)
    }
}
