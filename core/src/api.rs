//! Asynchronous client for the user-directory API.
//!
//! Every operation follows the same three steps: build the request with
//! `UserClient`, hand it to the `Transport`, and parse whatever comes back.
//! A build failure returns before the transport is touched. Each returned
//! future resolves exactly once, to either a value or an `ApiError`.

use tracing::debug;

use crate::client::UserClient;
use crate::error::ApiError;
use crate::http::{HttpRequest, HttpResponse};
use crate::transport::Transport;
use crate::types::{AddUserRequest, User, UserDetail};

/// User-directory client over an injected `Transport`.
///
/// Holds no mutable state, so one instance can serve any number of
/// concurrent calls.
#[derive(Debug, Clone)]
pub struct ApiClient<T> {
    requests: UserClient,
    transport: T,
}

impl<T: Transport + Default> Default for ApiClient<T> {
    fn default() -> Self {
        Self::new(T::default())
    }
}

impl<T: Transport> ApiClient<T> {
    /// Client for the hosted service at `DEFAULT_BASE_URL`.
    pub fn new(transport: T) -> Self {
        Self {
            requests: UserClient::default(),
            transport,
        }
    }

    pub fn with_base_url(base_url: &str, transport: T) -> Self {
        Self {
            requests: UserClient::new(base_url),
            transport,
        }
    }

    pub fn base_url(&self) -> &str {
        self.requests.base_url()
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    /// `GET /users`. Users come back in the order the server sent them.
    pub async fn list_users(&self) -> Result<Vec<User>, ApiError> {
        let request = self.requests.build_list_users()?;
        let response = self.send(request).await?;
        self.requests.parse_list_users(response)
    }

    /// `GET /users/{id}`.
    pub async fn get_user(&self, id: i64) -> Result<UserDetail, ApiError> {
        let request = self.requests.build_get_user(id)?;
        let response = self.send(request).await?;
        self.requests.parse_get_user(response)
    }

    /// `POST /users`. The server assigns the id of the returned user.
    pub async fn add_user(&self, input: &AddUserRequest) -> Result<User, ApiError> {
        let request = self.requests.build_add_user(input)?;
        let response = self.send(request).await?;
        self.requests.parse_add_user(response)
    }

    /// `PUT /users/{id}`, replacing name and email.
    pub async fn update_user(&self, id: i64, input: &AddUserRequest) -> Result<User, ApiError> {
        let request = self.requests.build_update_user(id, input)?;
        let response = self.send(request).await?;
        self.requests.parse_update_user(response)
    }

    /// `DELETE /users/{id}`. Succeeds whenever the transport does.
    pub async fn delete_user(&self, id: i64) -> Result<(), ApiError> {
        let request = self.requests.build_delete_user(id)?;
        let response = self.send(request).await?;
        self.requests.parse_delete_user(response)
    }

    async fn send(&self, request: HttpRequest) -> Result<HttpResponse, ApiError> {
        let method = request.method;
        let url = request.url.clone();
        debug!(%method, %url, "sending request");

        match self.transport.execute(request).await {
            Ok(response) => {
                debug!(%method, %url, status = response.status, bytes = response.body.len(), "received response");
                Ok(response)
            }
            Err(e) => {
                debug!(%method, %url, error = %e, "transport failed");
                Err(ApiError::Transport(e))
            }
        }
    }
}
