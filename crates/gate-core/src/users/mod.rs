//! User lookup.
//!
//! - `User`: the record returned by the lookup service
//! - `client.rs`: HTTP client for `GET {base_url}/users/{id}`

mod client;

pub use client::UsersClient;
use serde::{Deserialize, Serialize};

/// A user record as returned by the lookup service.
///
/// Extra fields in the response body are ignored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: u64,
    pub name: String,
}
