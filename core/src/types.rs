//! Domain DTOs for the user-directory API.
//!
//! # Design
//! These types mirror the mock-server's schema but are defined independently,
//! so the integration tests catch any schema drift between the two crates.
//! `UserDetail` carries the same fields as `User`; it exists as its own type
//! because the single-user endpoint is a distinct view on the server side.

use serde::{Deserialize, Serialize};

/// A user as returned by the list, create and update endpoints.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct User {
    pub id: i64,
    pub name: String,
    pub email: String,
}

/// A user as returned by the single-user endpoint.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct UserDetail {
    pub id: i64,
    pub name: String,
    pub email: String,
}

impl From<UserDetail> for User {
    fn from(detail: UserDetail) -> Self {
        Self {
            id: detail.id,
            name: detail.name,
            email: detail.email,
        }
    }
}

/// Request payload for creating or replacing a user. The id is never part of
/// the body: the server assigns it on create and the path carries it on
/// update.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct AddUserRequest {
    pub name: String,
    pub email: String,
}

impl AddUserRequest {
    pub fn new(name: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
        }
    }
}
