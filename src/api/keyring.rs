//! Password storage in the OS keyring.
//!
//! Entries live under one service name and are keyed by
//! `username@host`, so the same user on two instances gets two entries.

use reqwest::Url;

use crate::error::{Error, Result};

/// The keyring service name for stored passwords and API tokens.
const KEYRING_SERVICE: &str = "jira-client";

/// Keyring account for a user on an instance.
///
/// Falls back to the raw endpoint when it has no host, so lookups stay
/// deterministic even for malformed input.
fn account(endpoint: &str, username: &str) -> String {
    let host = Url::parse(endpoint)
        .ok()
        .and_then(|url| url.host_str().map(str::to_string))
        .unwrap_or_else(|| endpoint.trim_end_matches('/').to_string());
    format!("{}@{}", username, host)
}

fn entry(endpoint: &str, username: &str) -> Result<::keyring::Entry> {
    ::keyring::Entry::new(KEYRING_SERVICE, &account(endpoint, username))
        .map_err(|e| Error::Keyring(format!("failed to access keyring: {}", e)))
}

/// Store a password (or API token) in the OS keyring.
pub fn store_password(endpoint: &str, username: &str, password: &str) -> Result<()> {
    entry(endpoint, username)?
        .set_password(password)
        .map_err(|e| Error::Keyring(format!("failed to store password: {}", e)))
}

/// Retrieve a stored password from the OS keyring.
///
/// # Errors
///
/// Returns [`Error::Keyring`] if no entry exists or the keyring is
/// unavailable.
pub fn get_password(endpoint: &str, username: &str) -> Result<String> {
    entry(endpoint, username)?
        .get_password()
        .map_err(|e| Error::Keyring(format!("failed to retrieve password: {}", e)))
}

/// Delete a stored password from the OS keyring.
pub fn delete_password(endpoint: &str, username: &str) -> Result<()> {
    entry(endpoint, username)?
        .delete_password()
        .map_err(|e| Error::Keyring(format!("failed to delete password: {}", e)))
}

/// Check if a password is stored for this user and instance.
pub fn has_password(endpoint: &str, username: &str) -> bool {
    get_password(endpoint, username).is_ok()
}
