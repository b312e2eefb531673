//! API service groups.
//!
//! Each service borrows the [`Client`](super::Client) and maps one REST
//! resource group onto `Client::invoke` calls.

mod issues;
mod projects;
mod users;

use std::borrow::Cow;

pub use issues::IssuesService;
pub use projects::ProjectsService;
pub use users::UsersService;

/// Percent-encode a caller-supplied path segment (issue key, project key).
fn segment(value: &str) -> Cow<'_, str> {
    urlencoding::encode(value)
}

#[cfg(test)]
pub(crate) mod test_support {
    use wiremock::MockServer;

    use crate::api::{BasicAuth, Client};

    pub const USERNAME: &str = "test_user";
    pub const PASSWORD: &str = "test_token";

    /// A client pointed at the mock server with basic auth test credentials.
    pub fn client_for(server: &MockServer) -> Client {
        Client::with_credential(BasicAuth::new(server.uri(), USERNAME, PASSWORD))
            .expect("mock server credential is valid")
    }
}
