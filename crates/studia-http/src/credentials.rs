//! Persisted credential record.
//!
//! The durable form of a session is a (token, expiry, user) triple kept in
//! client-side storage. This module owns that triple: the three keys are
//! written together over a login flow and removed together, and every read
//! fails closed: missing, malformed or expired data is treated as "not
//! authenticated", never as an error.

use std::sync::Arc;

use jiff::{SignedDuration, Timestamp};
use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::storage::KeyValueStorage;

/// Tracing target for credential operations.
pub const TRACING_TARGET: &str = "studia_http::credentials";

/// Storage key holding the bearer token.
pub const TOKEN_KEY: &str = "auth_token";
/// Storage key holding the token expiry as stringified epoch milliseconds.
pub const TOKEN_EXPIRES_KEY: &str = "auth_token_expires";
/// Storage key holding the JSON-serialized user snapshot.
pub const USER_KEY: &str = "auth_user";

/// Fixed validity window for persisted tokens.
const TOKEN_TTL: SignedDuration = SignedDuration::from_hours(30 * 24);

/// Owner of the persisted (token, expiry, user) triple.
///
/// All access to the credential record goes through this store; nothing else
/// in the client touches the underlying storage keys. Clones share the same
/// backend.
#[derive(Debug, Clone)]
pub struct CredentialStore {
    storage: Arc<dyn KeyValueStorage>,
}

impl CredentialStore {
    /// Creates a credential store over the given storage backend.
    pub fn new(storage: Arc<dyn KeyValueStorage>) -> Self {
        Self { storage }
    }

    /// Persists a bearer token together with an absolute expiry 30 days
    /// from now.
    pub fn set_token(&self, token: &str) {
        let expires_at = Timestamp::now().as_millisecond() + TOKEN_TTL.as_millis() as i64;

        self.storage.set(TOKEN_KEY, token);
        self.storage.set(TOKEN_EXPIRES_KEY, &expires_at.to_string());

        tracing::debug!(
            target: TRACING_TARGET,
            expires_at,
            "persisted bearer token"
        );
    }

    /// Returns the persisted bearer token, if any.
    pub fn token(&self) -> Option<String> {
        self.storage.get(TOKEN_KEY)
    }

    /// Returns whether the persisted token should be considered expired.
    ///
    /// True when no expiry is persisted, when the stored expiry does not
    /// parse as an integer, or when the current time has reached it. Only a
    /// numeric future timestamp reads as valid.
    pub fn is_token_expired(&self) -> bool {
        let Some(raw) = self.storage.get(TOKEN_EXPIRES_KEY) else {
            return true;
        };
        let Ok(expires_at) = raw.trim().parse::<i64>() else {
            return true;
        };

        Timestamp::now().as_millisecond() >= expires_at
    }

    /// Persists a snapshot of the authenticated user as an opaque JSON blob.
    pub fn set_user<U: Serialize>(&self, user: &U) {
        match serde_json::to_string(user) {
            Ok(raw) => self.storage.set(USER_KEY, &raw),
            Err(error) => {
                tracing::warn!(
                    target: TRACING_TARGET,
                    error = %error,
                    "failed to serialize user snapshot; skipping write"
                );
            }
        }
    }

    /// Returns the persisted user snapshot, or `None` when nothing is
    /// stored or the stored JSON does not decode as `U`.
    pub fn user<U: DeserializeOwned>(&self) -> Option<U> {
        let raw = self.storage.get(USER_KEY)?;

        match serde_json::from_str(&raw) {
            Ok(user) => Some(user),
            Err(error) => {
                tracing::debug!(
                    target: TRACING_TARGET,
                    error = %error,
                    "stored user snapshot is not valid JSON; treating as absent"
                );
                None
            }
        }
    }

    /// Removes token, expiry and user snapshot together. Idempotent.
    pub fn remove(&self) {
        self.storage.remove(TOKEN_KEY);
        self.storage.remove(TOKEN_EXPIRES_KEY);
        self.storage.remove(USER_KEY);
    }
}
