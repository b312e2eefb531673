//! Centralized error types for jira-client.
//!
//! Every fallible operation in the crate returns [`Error`]. Credential
//! problems are reported before any network activity, transport failures are
//! passed through unchanged, and non-2xx responses carry the decoded
//! [`ErrorResponse`].

use reqwest::StatusCode;
use thiserror::Error;

use crate::api::ErrorResponse;
use crate::config::ConfigError;

/// The error type for all client operations.
#[derive(Debug, Error)]
pub enum Error {
    /// The credential is absent where one is required or misses a field.
    #[error("invalid credential")]
    InvalidCredential,

    /// A request was attempted before any credential was installed.
    #[error("nil credential: no credential has been configured")]
    MissingCredential,

    /// The credential endpoint is not a usable URL.
    #[error("invalid endpoint '{endpoint}': {reason}")]
    InvalidEndpoint { endpoint: String, reason: String },

    /// JIRA answered with a non-2xx status.
    ///
    /// Displays exactly the [`ErrorResponse::summary`].
    #[error("{response}")]
    Api {
        status: StatusCode,
        response: ErrorResponse,
    },

    /// Connection-level failure (DNS, TCP, TLS, timeout).
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    /// The request arguments could not be encoded.
    #[error("failed to encode request: {0}")]
    Encode(#[source] serde_json::Error),

    /// The response body did not match the expected type.
    #[error("failed to decode response: {0}")]
    Decode(#[source] serde_json::Error),

    /// Configuration loading or validation failed.
    #[error("{0}")]
    Config(#[from] ConfigError),

    /// Keyring error when storing/retrieving passwords.
    #[error("Keyring error: {0}")]
    Keyring(String),
}

impl Error {
    /// HTTP status of an API error, if this is one.
    pub fn status(&self) -> Option<StatusCode> {
        match self {
            Error::Api { status, .. } => Some(*status),
            Error::Network(e) => e.status(),
            _ => None,
        }
    }

    /// The decoded error body of an API error.
    pub fn response(&self) -> Option<&ErrorResponse> {
        match self {
            Error::Api { response, .. } => Some(response),
            _ => None,
        }
    }

    /// Whether this error was raised while resolving the credential.
    pub fn is_credential_error(&self) -> bool {
        matches!(
            self,
            Error::InvalidCredential | Error::MissingCredential | Error::InvalidEndpoint { .. }
        )
    }

    /// Get a user-friendly message for display.
    pub fn user_message(&self) -> String {
        match self {
            Error::InvalidCredential => {
                "The JIRA credential is incomplete. Endpoint, username and password are required."
                    .to_string()
            }
            Error::MissingCredential => "No JIRA credential has been configured.".to_string(),
            Error::InvalidEndpoint { endpoint, .. } => {
                format!("'{}' is not a valid JIRA URL.", endpoint)
            }
            Error::Api { status, response } => match status.as_u16() {
                401 => "Authentication failed. Please check your username and API token.".to_string(),
                403 => "Access denied. You don't have permission to access this resource.".to_string(),
                429 => "Too many requests. Please wait a moment and try again.".to_string(),
                _ if response.is_empty() => format!("JIRA returned HTTP {}.", status),
                _ => response.summary(),
            },
            Error::Network(_) => "Connection failed. Please check your network and JIRA URL.".to_string(),
            Error::Encode(_) => "The request could not be encoded.".to_string(),
            Error::Decode(_) => "Unexpected response from JIRA.".to_string(),
            Error::Config(e) => format!("Configuration error: {}", e),
            Error::Keyring(_) => "Could not access secure storage.".to_string(),
        }
    }

    /// Get a suggested action for the user.
    pub fn suggested_action(&self) -> Option<&'static str> {
        match self {
            Error::InvalidCredential | Error::MissingCredential => {
                Some("Provide an endpoint, username and API token before making requests.")
            }
            Error::Api { status, .. } if *status == StatusCode::UNAUTHORIZED => {
                Some("Check your API token at https://id.atlassian.com/manage-profile/security/api-tokens")
            }
            Error::Network(_) | Error::InvalidEndpoint { .. } => {
                Some("Check your internet connection and JIRA URL.")
            }
            _ => None,
        }
    }
}

/// Result type for client operations.
pub type Result<T> = std::result::Result<T, Error>;
