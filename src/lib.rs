//! jira-client - a typed async client for the JIRA REST API v2.
//!
//! ```no_run
//! use jira_client::{BasicAuth, Client};
//!
//! # async fn run() -> jira_client::Result<()> {
//! let client = Client::with_credential(BasicAuth::new(
//!     "https://company.atlassian.net",
//!     "user@example.com",
//!     "api-token",
//! ))?;
//! let me = client.users().get_current_user().await?;
//! println!("Logged in as {}", me);
//! # Ok(())
//! # }
//! ```

pub mod api;
pub mod config;
pub mod error;
pub mod logging;

pub use api::{
    AuthService, BasicAuth, BearerAuth, CallOptions, Client, Credential, ErrorResponse,
    HttpTransport, Transport, TransportRequest, TransportResponse,
};
pub use config::{ClientOptions, Config, ConfigError, Profile};
pub use error::{Error, Result};

pub use reqwest::{Method, StatusCode};
