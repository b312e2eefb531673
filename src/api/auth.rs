//! Authentication handling for the JIRA API.
//!
//! A [`Credential`] bundles the instance endpoint with the material needed
//! to authorize a call. The client keeps the active credential in an
//! [`AuthService`], which resolves it into [`CallOptions`] right before each
//! request.

use std::fmt;
use std::sync::{Arc, PoisonError, RwLock};

use serde::{Deserialize, Serialize};
use tracing::debug;

use super::keyring;
use super::transport::{validate_endpoint, CallOptions};
use crate::error::{Error, Result};

/// Authentication material for one JIRA instance.
///
/// New schemes are added by implementing this trait; the client only ever
/// goes through these three methods.
pub trait Credential: Send + Sync + fmt::Debug {
    /// Base URL of the JIRA instance, e.g. `https://company.atlassian.net`.
    fn endpoint(&self) -> &str;

    /// Produce the authorization material for a call.
    ///
    /// Must not perform I/O. Only called after [`Credential::valid`] passed.
    fn generate_call_options(&self) -> Result<CallOptions>;

    /// Check that every required field is present.
    fn valid(&self) -> Result<()>;
}

/// HTTP basic authentication with a username (or email) and password (or
/// API token).
#[derive(Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BasicAuth {
    pub endpoint: String,
    pub username: String,
    pub password: String,
}

impl BasicAuth {
    pub fn new(
        endpoint: impl Into<String>,
        username: impl Into<String>,
        password: impl Into<String>,
    ) -> Self {
        Self {
            endpoint: endpoint.into(),
            username: username.into(),
            password: password.into(),
        }
    }

    /// Build a credential whose password is read from the OS keyring.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Keyring`] if no password is stored for this
    /// endpoint and username.
    pub fn from_keyring(endpoint: &str, username: &str) -> Result<Self> {
        let password = keyring::get_password(endpoint, username)?;
        Ok(Self::new(endpoint, username, password))
    }
}

impl fmt::Debug for BasicAuth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BasicAuth")
            .field("endpoint", &self.endpoint)
            .field("username", &self.username)
            .field("password", &"<redacted>")
            .finish()
    }
}

impl Credential for BasicAuth {
    fn endpoint(&self) -> &str {
        &self.endpoint
    }

    fn generate_call_options(&self) -> Result<CallOptions> {
        Ok(CallOptions::basic(&self.username, &self.password))
    }

    fn valid(&self) -> Result<()> {
        if self.endpoint.is_empty() || self.username.is_empty() || self.password.is_empty() {
            return Err(Error::InvalidCredential);
        }
        Ok(())
    }
}

/// Bearer authentication with a personal access token (JIRA Data Center).
#[derive(Clone, Default, PartialEq, Eq)]
pub struct BearerAuth {
    pub endpoint: String,
    pub token: String,
}

impl BearerAuth {
    pub fn new(endpoint: impl Into<String>, token: impl Into<String>) -> Self {
        Self {
            endpoint: endpoint.into(),
            token: token.into(),
        }
    }
}

impl fmt::Debug for BearerAuth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BearerAuth")
            .field("endpoint", &self.endpoint)
            .field("token", &"<redacted>")
            .finish()
    }
}

impl Credential for BearerAuth {
    fn endpoint(&self) -> &str {
        &self.endpoint
    }

    fn generate_call_options(&self) -> Result<CallOptions> {
        Ok(CallOptions::bearer(&self.token))
    }

    fn valid(&self) -> Result<()> {
        if self.endpoint.is_empty() || self.token.is_empty() {
            return Err(Error::InvalidCredential);
        }
        Ok(())
    }
}

/// Holds the active credential and resolves it into call options.
///
/// Exposed as `client.oauth()`. Readers take a snapshot (`Arc` clone) of the
/// credential, so a concurrent replacement never mixes the endpoint of one
/// credential with the authorization of another.
#[derive(Default)]
pub struct AuthService {
    credential: RwLock<Option<Arc<dyn Credential>>>,
}

impl AuthService {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    /// Snapshot of the installed credential.
    pub fn credential(&self) -> Option<Arc<dyn Credential>> {
        self.credential
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Validate the installed credential and generate its call options.
    ///
    /// # Errors
    ///
    /// [`Error::MissingCredential`] if none is installed, or the
    /// credential's own validation error.
    pub fn generate_call_options(&self) -> Result<CallOptions> {
        let credential = self.credential().ok_or(Error::MissingCredential)?;
        resolve(credential.as_ref())
    }

    /// Replace the installed credential. On error the previous one is kept.
    pub(crate) fn set(&self, credential: Option<Arc<dyn Credential>>) -> Result<()> {
        let credential = credential.ok_or(Error::InvalidCredential)?;
        credential.valid()?;
        validate_endpoint(credential.endpoint())?;

        debug!(endpoint = credential.endpoint(), "Installing credential");
        *self
            .credential
            .write()
            .unwrap_or_else(PoisonError::into_inner) = Some(credential);
        Ok(())
    }
}

impl fmt::Debug for AuthService {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AuthService")
            .field("credential", &self.credential())
            .finish()
    }
}

/// Validate, then generate. The order is what keeps an invalid credential
/// from ever producing call options.
pub(crate) fn resolve(credential: &dyn Credential) -> Result<CallOptions> {
    credential.valid()?;
    credential.generate_call_options()
}
