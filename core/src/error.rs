//! Error types for the user-directory client.
//!
//! # Design
//! Only four things can go wrong: the endpoint URL does not parse, the body
//! does not serialize, the transport fails, or the response body does not
//! decode. HTTP status codes are not errors here; a 404 or 500 whose body
//! does not match the expected shape surfaces as `Decoding`.

use thiserror::Error;

use crate::transport::TransportError;

/// Errors returned by `UserClient` and `ApiClient` operations.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The target URL could not be constructed from the base URL and path.
    #[error("invalid endpoint `{url}`: {reason}")]
    InvalidEndpoint { url: String, reason: String },

    /// The request payload could not be serialized to JSON.
    #[error("failed to encode request body: {0}")]
    Encoding(#[source] serde_json::Error),

    /// The transport failed before a response was received. The inner error
    /// is whatever the transport reported.
    #[error("transport failed: {0}")]
    Transport(#[source] TransportError),

    /// The response body could not be deserialized into the expected type.
    #[error("failed to decode response body: {0}")]
    Decoding(#[source] serde_json::Error),
}
