//! Administrative user identity and login payloads.

use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};

/// Role granted to an administrative user.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
#[derive(Serialize, Deserialize, Display, EnumString)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum UserRole {
    /// Full access to every resource, including other admin accounts.
    Admin,
    /// Manages scheduling, enrollment and the catalog.
    Manager,
    /// Day-to-day data entry.
    #[default]
    Staff,
}

impl UserRole {
    /// Returns whether this role may manage other administrative users.
    #[inline]
    pub fn is_admin(self) -> bool {
        matches!(self, UserRole::Admin)
    }

    /// Returns whether this role may change catalog and scheduling data.
    #[inline]
    pub fn can_manage(self) -> bool {
        matches!(self, UserRole::Admin | UserRole::Manager)
    }
}

/// Administrative user returned by the auth endpoints.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    /// Unique user identifier
    pub id: i64,
    /// Display name
    pub name: String,
    /// Login email address
    pub email: String,
    /// Granted role
    #[serde(default)]
    pub role: UserRole,
}

/// Credentials submitted to the login endpoint.
#[derive(Debug, Clone, Serialize)]
pub struct LoginCredentials {
    /// Login email address
    pub email: String,
    /// Account password
    pub password: String,
}

impl LoginCredentials {
    /// Creates login credentials.
    pub fn new(email: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            password: password.into(),
        }
    }
}

/// Payload carried by a successful login response.
///
/// The bearer token travels next to it on the envelope itself.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoginData {
    /// The authenticated user
    pub user: User,
}
