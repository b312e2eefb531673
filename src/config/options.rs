//! HTTP client options.

use serde::{Deserialize, Serialize};

use super::{ConfigError, Result};

/// Default request timeout in seconds.
const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Options for the HTTP transport.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClientOptions {
    /// Log every request line and response body at debug level.
    pub debug: bool,
    /// Per-request timeout in seconds.
    pub timeout_secs: u64,
    /// The `User-Agent` header sent with every request.
    pub user_agent: String,
}

impl Default for ClientOptions {
    fn default() -> Self {
        Self {
            debug: false,
            timeout_secs: DEFAULT_TIMEOUT_SECS,
            user_agent: format!("jira-client/{}", env!("CARGO_PKG_VERSION")),
        }
    }
}

impl ClientOptions {
    pub fn validate(&self) -> Result<()> {
        if self.timeout_secs == 0 {
            return Err(ConfigError::ValidationError(
                "timeout_secs must be greater than zero".to_string(),
            ));
        }
        if self.user_agent.trim().is_empty() {
            return Err(ConfigError::ValidationError(
                "user_agent cannot be empty".to_string(),
            ));
        }
        Ok(())
    }
}
