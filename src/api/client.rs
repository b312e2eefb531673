//! JIRA API client implementation.
//!
//! [`Client::invoke`] is the single dispatch path for every API call: it
//! resolves the active credential, encodes the arguments, hands the request
//! to the [`Transport`] and maps the reply into a typed value or an
//! [`Error`]. The service groups (`users()`, `issues()`, `projects()`) are
//! thin wrappers around it.

use std::fmt;
use std::sync::Arc;

use reqwest::Method;
use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::{debug, error, info, instrument};

use super::auth::{self, AuthService, Credential};
use super::error::ErrorResponse;
use super::query::to_query_pairs;
use super::services::{IssuesService, ProjectsService, UsersService};
use super::transport::{HttpTransport, Transport, TransportRequest};
use super::types::User;
use crate::config::{ClientOptions, Profile};
use crate::error::{Error, Result};

/// The JIRA API client.
///
/// Cheap to share behind an `Arc`; all methods take `&self`, including
/// [`Client::set_credential`].
pub struct Client {
    transport: Arc<dyn Transport>,
    options: ClientOptions,
    auth: AuthService,
}

impl Client {
    /// Create a client backed by the `reqwest` transport.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The options fail validation
    /// - The HTTP client cannot be built
    /// - A credential is given but is invalid or has an unusable endpoint
    pub fn new(credential: Option<Arc<dyn Credential>>, options: ClientOptions) -> Result<Self> {
        options.validate()?;
        let transport = Arc::new(HttpTransport::new(&options)?);
        Self::with_transport(transport, credential, options)
    }

    /// Create a client for one credential with default options.
    pub fn with_credential(credential: impl Credential + 'static) -> Result<Self> {
        Self::new(Some(Arc::new(credential)), ClientOptions::default())
    }

    /// Create a client on top of any [`Transport`].
    pub fn with_transport(
        transport: Arc<dyn Transport>,
        credential: Option<Arc<dyn Credential>>,
        options: ClientOptions,
    ) -> Result<Self> {
        options.validate()?;
        let client = Self {
            transport,
            options,
            auth: AuthService::new(),
        };
        if credential.is_some() {
            client.set_credential(credential)?;
        }
        Ok(client)
    }

    /// Create a client from a configured profile, reading the password from
    /// the OS keyring.
    #[instrument(skip(profile, options), fields(profile_name = %profile.name))]
    pub fn from_profile(profile: &Profile, options: ClientOptions) -> Result<Self> {
        info!("Creating JIRA client for profile");
        let credential = profile.credential()?;
        Self::new(Some(Arc::new(credential)), options)
    }

    /// Replace the credential used for subsequent calls.
    ///
    /// Calls already in flight keep the credential they started with.
    ///
    /// # Errors
    ///
    /// - [`Error::InvalidCredential`] for `None`
    /// - the credential's own validation error
    /// - [`Error::InvalidEndpoint`] if the endpoint is not an http(s) URL
    ///
    /// On error the previously installed credential stays in place.
    pub fn set_credential(&self, credential: Option<Arc<dyn Credential>>) -> Result<()> {
        self.auth.set(credential)
    }

    /// The credential dispatcher.
    pub fn oauth(&self) -> &AuthService {
        &self.auth
    }

    pub fn users(&self) -> UsersService<'_> {
        UsersService::new(self)
    }

    pub fn issues(&self) -> IssuesService<'_> {
        IssuesService::new(self)
    }

    pub fn projects(&self) -> ProjectsService<'_> {
        ProjectsService::new(self)
    }

    pub fn options(&self) -> &ClientOptions {
        &self.options
    }

    /// Verify the URL is reachable and the credential is accepted by calling
    /// `GET /rest/api/2/myself`.
    #[instrument(skip(self))]
    pub async fn validate_connection(&self) -> Result<User> {
        debug!("Validating JIRA connection");

        let user = self.users().get_current_user().await.map_err(|e| {
            error!("Connection validation failed: {}", e);
            e
        })?;

        info!("Connected as user: {}", user);
        Ok(user)
    }

    /// Issue one API call.
    ///
    /// For GET, `args` are flattened into query parameters; for every other
    /// method they are sent as the JSON body. An empty 2xx body decodes as
    /// JSON `null`, so `R` may be `()` or an `Option`.
    ///
    /// # Errors
    ///
    /// - [`Error::MissingCredential`] or a validation error, before any I/O
    /// - [`Error::Encode`] if `args` cannot be encoded
    /// - [`Error::Network`] for connection-level failures
    /// - [`Error::Api`] for non-2xx responses
    /// - [`Error::Decode`] if the body does not match `R`
    #[instrument(skip(self, args))]
    pub async fn invoke<A, R>(&self, method: Method, path: &str, args: Option<&A>) -> Result<R>
    where
        A: Serialize + Sync + ?Sized,
        R: DeserializeOwned,
    {
        // One snapshot serves both the endpoint and the authorization.
        let credential = self.auth.credential().ok_or(Error::MissingCredential)?;
        let mut options = auth::resolve(credential.as_ref())?;

        let mut body = None;
        if let Some(args) = args {
            if method == Method::GET {
                options.query = to_query_pairs(args)?;
            } else {
                body = Some(serde_json::to_vec(args).map_err(Error::Encode)?);
            }
        }

        let request = TransportRequest {
            method,
            endpoint: credential.endpoint().to_string(),
            path: path.to_string(),
            body,
            options,
        };
        let response = self.transport.invoke(request).await?;

        if !response.status.is_success() {
            debug!(
                status = %response.status,
                body = %String::from_utf8_lossy(&response.body),
                "Error response"
            );
            return Err(Error::Api {
                status: response.status,
                response: ErrorResponse::from_body(&response.body),
            });
        }

        decode_body(&response.body)
    }
}

impl fmt::Debug for Client {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Client")
            .field("options", &self.options)
            .field("auth", &self.auth)
            .finish_non_exhaustive()
    }
}

fn decode_body<R: DeserializeOwned>(body: &[u8]) -> Result<R> {
    let body = if body.iter().all(u8::is_ascii_whitespace) {
        b"null".as_slice()
    } else {
        body
    };
    serde_json::from_slice(body).map_err(Error::Decode)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::BasicAuth;

    #[test]
    fn test_decode_empty_body_as_null() {
        decode_body::<()>(b"").unwrap();
        assert_eq!(decode_body::<Option<User>>(b"  \n").unwrap(), None);
    }

    #[test]
    fn test_decode_typed_body() {
        let user: User = decode_body(br#"{"accountId": "abc"}"#).unwrap();
        assert_eq!(user.account_id.as_deref(), Some("abc"));
    }

    #[test]
    fn test_decode_mismatched_body() {
        assert!(matches!(
            decode_body::<Vec<User>>(br#"{"accountId": "abc"}"#),
            Err(Error::Decode(_))
        ));
    }

    #[test]
    fn test_new_without_credential() {
        let client = Client::new(None, ClientOptions::default()).unwrap();
        assert!(client.oauth().credential().is_none());
    }

    #[test]
    fn test_new_rejects_incomplete_credential() {
        let result = Client::with_credential(BasicAuth::new("https://company.atlassian.net", "user", ""));
        assert!(matches!(result, Err(Error::InvalidCredential)));
    }

    #[test]
    fn test_debug_does_not_expose_password() {
        let client =
            Client::with_credential(BasicAuth::new("https://company.atlassian.net", "user", "secret_token"))
                .unwrap();
        let debug_output = format!("{:?}", client);
        assert!(debug_output.contains("company.atlassian.net"));
        assert!(!debug_output.contains("secret_token"));
    }

    #[test]
    fn test_new_rejects_zero_timeout() {
        let options = ClientOptions {
            timeout_secs: 0,
            ..Default::default()
        };
        let err = Client::new(None, options).unwrap_err();
        assert!(matches!(
            err,
            Error::Config(crate::config::ConfigError::ValidationError(_))
        ));
    }

    #[test]
    fn test_with_transport_rejects_empty_user_agent() {
        let options = ClientOptions {
            user_agent: "  ".to_string(),
            ..Default::default()
        };
        let transport = Arc::new(HttpTransport::new(&ClientOptions::default()).unwrap());
        let result = Client::with_transport(transport, None, options);
        assert!(matches!(result, Err(Error::Config(_))));
    }
}
