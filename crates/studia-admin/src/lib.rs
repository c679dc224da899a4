#![forbid(unsafe_code)]
#![cfg_attr(docsrs, feature(doc_cfg))]
#![doc = include_str!("../README.md")]

mod client;
pub mod debounce;
pub mod filter;
pub mod model;
#[doc(hidden)]
pub mod prelude;
pub mod service;
pub mod session;

pub use crate::client::AdminClient;
pub use crate::session::{SessionPhase, SessionState, SessionStore};
pub use studia_http::{Empty, Envelope, Error, FieldErrors, Result, error_code};
