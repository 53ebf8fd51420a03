//! Session and Identity - what the remote service knows about the
//! current authentication

use chrono::{DateTime, Utc};
use serde::Deserialize;

/// A time-bounded proof of authentication issued by the remote service.
///
/// Read-only to the client; an expired session must be treated as absent.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Session {
    /// Server-assigned session id
    #[serde(rename = "$id")]
    pub id: String,
    /// Identity this session belongs to
    #[serde(rename = "userId")]
    pub user_id: String,
    /// Expiry timestamp; the session is valid only while `now < expire`
    pub expire: DateTime<Utc>,
    /// Opaque token authenticating subsequent requests.
    ///
    /// Only present in the response that created the session; empty on
    /// later reads.
    #[serde(default)]
    pub secret: String,
}

impl Session {
    /// Whether this session has expired as of `now`
    pub fn is_expired(&self, now: DateTime<Utc>) -> bool {
        self.expire <= now
    }
}

/// The minimal account record for an authenticated user.
///
/// Exists only while a session is valid; the extended profile lives in
/// the users collection as a [`super::UserProfile`].
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Identity {
    /// Server-assigned account id
    #[serde(rename = "$id")]
    pub id: String,
    /// Account email address
    pub email: String,
    /// Display name given at signup
    #[serde(default)]
    pub name: String,
    /// Whether the account's email address has been verified
    #[serde(rename = "emailVerification", default)]
    pub email_verified: bool,
}
