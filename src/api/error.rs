//! Structured error body returned by JIRA for non-2xx responses.

use std::fmt;

use serde::{Deserialize, Deserializer, Serialize};

/// The error payload JIRA sends alongside a non-2xx status.
///
/// JIRA reports failures in one of three shapes: a single `message`, a list
/// of `errorMessages`, or an `errors` object keyed by field name. All three
/// are kept so [`ErrorResponse::summary`] can pick the most specific one.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ErrorResponse {
    /// General error messages not tied to a field.
    #[serde(default, deserialize_with = "null_as_default")]
    pub error_messages: Vec<String>,
    /// Opaque per-field errors (usually an object of `field -> message`).
    #[serde(default)]
    pub errors: Option<serde_json::Value>,
    /// A single message, used by some endpoints and by the gateway.
    #[serde(default, deserialize_with = "null_as_default")]
    pub message: String,
}

impl ErrorResponse {
    /// Build an error from a raw response body.
    ///
    /// A body that is not a JSON error document is kept verbatim as the
    /// `message` so proxies returning HTML or plain text still produce a
    /// readable summary.
    pub fn from_body(body: &[u8]) -> Self {
        let mut response = Self::default();
        if response.decode(body).is_err() {
            response.message = String::from_utf8_lossy(body).trim().to_string();
        }
        response
    }

    /// Reset this instance and fill it from a response body.
    ///
    /// An empty or JSON `null` body leaves the zero state. On a decode error
    /// the instance is also left in the zero state.
    pub fn decode(&mut self, body: &[u8]) -> serde_json::Result<()> {
        self.reset();
        let text = String::from_utf8_lossy(body);
        let trimmed = text.trim();
        if trimmed.is_empty() || trimmed == "null" {
            return Ok(());
        }
        *self = serde_json::from_slice(body)?;
        Ok(())
    }

    /// Clear every field, returning the instance to its zero state.
    pub fn reset(&mut self) {
        self.error_messages.clear();
        self.errors = None;
        self.message.clear();
    }

    /// Whether no error information is present at all.
    pub fn is_empty(&self) -> bool {
        self.summary().is_empty()
    }

    /// Human-readable summary of the error.
    ///
    /// Priority: `message`, then `errorMessages` joined with `,`, then the
    /// JSON form of `errors`, then the empty string.
    pub fn summary(&self) -> String {
        if !self.message.is_empty() {
            return self.message.clone();
        }
        if !self.error_messages.is_empty() {
            return self.error_messages.join(",");
        }
        match &self.errors {
            Some(errors) if !errors.is_null() => serde_json::to_string(errors).unwrap_or_default(),
            _ => String::new(),
        }
    }
}

impl fmt::Display for ErrorResponse {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.summary())
    }
}

impl std::error::Error for ErrorResponse {}

fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}
