//! Stateless HTTP request builder and response parser for the user API.
//!
//! # Design
//! `UserClient` holds only a `base_url` and carries no mutable state between
//! calls. Each operation is split into a `build_*` method that produces an
//! `HttpRequest` and a `parse_*` method that consumes an `HttpResponse`.
//! `ApiClient` glues the two together around a `Transport`; keeping the
//! halves separate lets them be tested without any I/O.
//!
//! Parse methods never look at `HttpResponse::status`. An error status whose
//! body happens to decode is returned as a success, and one whose body does
//! not decode becomes `ApiError::Decoding`.

use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::error::ApiError;
use crate::http::{HttpMethod, HttpRequest, HttpResponse};
use crate::types::{AddUserRequest, User, UserDetail};

/// Base URL of the hosted user-directory service.
pub const DEFAULT_BASE_URL: &str = "https://userlistapi.netlify.app/api";

/// Synchronous, stateless request builder and response parser.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserClient {
    base_url: String,
}

impl Default for UserClient {
    fn default() -> Self {
        Self::new(DEFAULT_BASE_URL)
    }
}

impl UserClient {
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn build_list_users(&self) -> Result<HttpRequest, ApiError> {
        Ok(HttpRequest {
            method: HttpMethod::Get,
            url: self.endpoint("/users")?,
            headers: Vec::new(),
            body: None,
        })
    }

    pub fn build_get_user(&self, id: i64) -> Result<HttpRequest, ApiError> {
        Ok(HttpRequest {
            method: HttpMethod::Get,
            url: self.endpoint(&format!("/users/{id}"))?,
            headers: Vec::new(),
            body: None,
        })
    }

    pub fn build_add_user(&self, input: &AddUserRequest) -> Result<HttpRequest, ApiError> {
        let url = self.endpoint("/users")?;
        Ok(HttpRequest {
            method: HttpMethod::Post,
            url,
            headers: json_headers(),
            body: Some(encode(input)?),
        })
    }

    pub fn build_update_user(&self, id: i64, input: &AddUserRequest) -> Result<HttpRequest, ApiError> {
        let url = self.endpoint(&format!("/users/{id}"))?;
        Ok(HttpRequest {
            method: HttpMethod::Put,
            url,
            headers: json_headers(),
            body: Some(encode(input)?),
        })
    }

    pub fn build_delete_user(&self, id: i64) -> Result<HttpRequest, ApiError> {
        Ok(HttpRequest {
            method: HttpMethod::Delete,
            url: self.endpoint(&format!("/users/{id}"))?,
            headers: Vec::new(),
            body: None,
        })
    }

    pub fn parse_list_users(&self, response: HttpResponse) -> Result<Vec<User>, ApiError> {
        decode(&response)
    }

    pub fn parse_get_user(&self, response: HttpResponse) -> Result<UserDetail, ApiError> {
        decode(&response)
    }

    pub fn parse_add_user(&self, response: HttpResponse) -> Result<User, ApiError> {
        decode(&response)
    }

    pub fn parse_update_user(&self, response: HttpResponse) -> Result<User, ApiError> {
        decode(&response)
    }

    /// The delete response carries nothing the caller needs; its status and
    /// body are ignored.
    pub fn parse_delete_user(&self, _response: HttpResponse) -> Result<(), ApiError> {
        Ok(())
    }

    /// Concatenate `path` onto the base URL and check that the result is an
    /// absolute URL.
    fn endpoint(&self, path: &str) -> Result<String, ApiError> {
        let url = format!("{}{path}", self.base_url);
        reqwest::Url::parse(&url).map_err(|e| ApiError::InvalidEndpoint {
            url: url.clone(),
            reason: e.to_string(),
        })?;
        Ok(url)
    }
}

fn json_headers() -> Vec<(String, String)> {
    vec![("content-type".to_string(), "application/json".to_string())]
}

fn encode<T: Serialize>(input: &T) -> Result<String, ApiError> {
    serde_json::to_string(input).map_err(ApiError::Encoding)
}

fn decode<T: DeserializeOwned>(response: &HttpResponse) -> Result<T, ApiError> {
    serde_json::from_slice(&response.body).map_err(ApiError::Decoding)
}
