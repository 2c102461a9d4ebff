//! Asynchronous API client for the user-directory service.
//!
//! # Overview
//! `UserClient` builds `HttpRequest` values and parses `HttpResponse` values
//! without touching the network. `ApiClient` pairs it with an injected
//! `Transport` (by default `ReqwestTransport`) and exposes the five
//! operations as async methods.
//!
//! # Design
//! - Both clients hold only the base URL; there is no cache and no retry.
//! - Only transport failures are errors at the HTTP level. Status codes are
//!   not inspected, so an error response surfaces as a decode failure unless
//!   its body happens to match the expected shape.
//! - DTOs are defined independently from the mock-server crate; integration
//!   tests catch schema drift.

pub mod api;
pub mod client;
pub mod error;
pub mod http;
pub mod transport;
pub mod types;

pub use api::ApiClient;
pub use client::{UserClient, DEFAULT_BASE_URL};
pub use error::ApiError;
pub use http::{HttpMethod, HttpRequest, HttpResponse};
pub use transport::{ReqwestTransport, Transport, TransportError};
pub use types::{AddUserRequest, User, UserDetail};
