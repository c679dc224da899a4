#![forbid(unsafe_code)]
#![cfg_attr(docsrs, feature(doc_cfg))]
#![doc = include_str!("../README.md")]

mod client;
mod config;
mod credentials;
mod envelope;
pub mod error;
mod storage;

pub use crate::client::{HttpClient, TRACING_TARGET};
pub use crate::config::{DEFAULT_CONNECT_TIMEOUT, DEFAULT_TIMEOUT, HttpClientConfig};
pub use crate::credentials::{CredentialStore, TOKEN_EXPIRES_KEY, TOKEN_KEY, USER_KEY};
pub use crate::envelope::{Empty, Envelope, FieldErrors, error_code};
pub use crate::error::{Error, Result};
pub use crate::storage::{FileStorage, KeyValueStorage, MemoryStorage};
