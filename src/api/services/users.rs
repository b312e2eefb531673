use reqwest::Method;
use tracing::{debug, instrument};

use crate::api::types::{
    CreateUserOptions, FindUsersByQueryOptions, FindUsersOptions, SearchOptions, User,
};
use crate::api::Client;
use crate::error::Result;

/// User endpoints under `/rest/api/2/user*` and `/rest/api/2/myself`.
#[derive(Debug, Clone, Copy)]
pub struct UsersService<'a> {
    client: &'a Client,
}

impl<'a> UsersService<'a> {
    pub(crate) fn new(client: &'a Client) -> Self {
        Self { client }
    }

    /// The user the credential authenticates as.
    #[instrument(skip(self))]
    pub async fn get_current_user(&self) -> Result<User> {
        self.client
            .invoke::<(), _>(Method::GET, "/rest/api/2/myself", None)
            .await
    }

    /// All users, including inactive and app users.
    #[instrument(skip(self))]
    pub async fn get_all_users(&self, search: Option<&SearchOptions>) -> Result<Vec<User>> {
        let users: Vec<User> = self
            .client
            .invoke(Method::GET, "/rest/api/2/users", search)
            .await?;
        debug!("Fetched {} users", users.len());
        Ok(users)
    }

    /// Users matching a name, email, account ID or property.
    #[instrument(skip(self))]
    pub async fn find_users(&self, options: &FindUsersOptions) -> Result<Vec<User>> {
        self.client
            .invoke(Method::GET, "/rest/api/2/user/search", Some(options))
            .await
    }

    /// Users matching a structured query such as `is assignee of PROJ`.
    #[instrument(skip(self))]
    pub async fn find_users_by_query(&self, options: &FindUsersByQueryOptions) -> Result<Vec<User>> {
        self.client
            .invoke(Method::GET, "/rest/api/2/user/search/query", Some(options))
            .await
    }

    /// Create a user. Requires site administration permissions.
    #[instrument(skip(self))]
    pub async fn create(&self, options: &CreateUserOptions) -> Result<User> {
        self.client
            .invoke(Method::POST, "/rest/api/2/user", Some(options))
            .await
    }
}
