//! Uniform API response envelope.
//!
//! Every call made through the HTTP client resolves to an [`Envelope`],
//! whatever the transport outcome. `status == true` means `data` may be
//! trusted; `status == false` means it must not be read (the client never
//! populates it on failure).

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Machine-readable error codes attached to failed envelopes.
pub mod error_code {
    /// Generic code for HTTP failures without a server-provided code.
    pub const REQUEST_FAILED: &str = "REQUEST_FAILED";
    /// Code for transport-level failures (connect, DNS, timeout) and
    /// undecodable response bodies.
    pub const NETWORK_ERROR: &str = "NETWORK_ERROR";
}

/// Field-level validation errors, keyed by field name.
pub type FieldErrors = BTreeMap<String, Vec<String>>;

/// The uniform shape every API call resolves to.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(bound(deserialize = "T: serde::Deserialize<'de>"))]
pub struct Envelope<T> {
    /// Whether the operation succeeded.
    pub status: bool,
    /// Human-readable outcome description. Empty when the wire carried none.
    #[serde(default)]
    pub message: String,
    /// Payload of a successful operation.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    /// Bearer token issued by authentication endpoints.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub token: Option<String>,
    /// Field-level validation errors.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub errors: Option<FieldErrors>,
    /// Machine-readable error code.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl<T> Envelope<T> {
    /// Creates a successful envelope carrying `data`.
    pub fn success(message: impl Into<String>, data: T) -> Self {
        Self {
            status: true,
            message: message.into(),
            data: Some(data),
            token: None,
            errors: None,
            error: None,
        }
    }

    /// Creates a failed envelope with a human-readable message.
    pub fn failure(message: impl Into<String>) -> Self {
        Self {
            status: false,
            message: message.into(),
            data: None,
            token: None,
            errors: None,
            error: None,
        }
    }

    /// Creates a failed envelope with a message and machine-readable code.
    pub fn failure_with_code(message: impl Into<String>, code: impl Into<String>) -> Self {
        Self {
            error: Some(code.into()),
            ..Self::failure(message)
        }
    }

    /// Attaches a bearer token.
    pub fn with_token(mut self, token: impl Into<String>) -> Self {
        self.token = Some(token.into());
        self
    }

    /// Attaches field-level validation errors.
    pub fn with_errors(mut self, errors: FieldErrors) -> Self {
        self.errors = Some(errors);
        self
    }

    /// Returns whether the operation succeeded.
    pub fn is_success(&self) -> bool {
        self.status
    }

    /// Consumes the envelope, returning its payload.
    pub fn into_data(self) -> Option<T> {
        self.data
    }

    /// Projects the payload through `f`, preserving everything else.
    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> Envelope<U> {
        Envelope {
            status: self.status,
            message: self.message,
            data: self.data.map(f),
            token: self.token,
            errors: self.errors,
            error: self.error,
        }
    }
}

/// Unit payload for operations whose `data` is absent or an empty object,
/// such as logouts and deletes.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Empty {}
