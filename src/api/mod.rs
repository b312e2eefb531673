//! JIRA API client and types.
//!
//! This module provides the interface for communicating with the JIRA REST
//! API v2: credentials, the dispatching [`Client`], the transport seam and
//! the service groups built on top of them.

mod auth;
mod client;
mod error;
pub mod keyring;
mod query;
mod services;
mod transport;
pub mod types;

pub use auth::{AuthService, BasicAuth, BearerAuth, Credential};
pub use client::Client;
pub use error::ErrorResponse;
pub use services::{IssuesService, ProjectsService, UsersService};
pub use transport::{CallOptions, HttpTransport, Transport, TransportRequest, TransportResponse};
