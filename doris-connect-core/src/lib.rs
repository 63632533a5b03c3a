//! Connection options for the Doris stream connector.
//!
//! This crate provides the validated option values that Doris sources and
//! sinks pass down to the HTTP and JDBC connection layer: frontend and
//! backend endpoints, credentials, table targeting, redirect policy and
//! charset encoding.
//!
//! # Security Guarantees
//! - Passwords are zeroed on drop and never logged or displayed
//! - JDBC URLs are redacted in all debug output
//!
//! # Architecture
//! - Options are values: built once through [`DorisOptionsBuilder`], then
//!   shared read-only; changes produce new values
//! - Validation is front-loaded into `build()`; accessors never fail

pub mod error;
pub mod logging;
pub mod options;
pub mod security;

// Re-export commonly used types
pub use error::{ConfigError, Result};
pub use options::{
    ConnectionOptions, DEFAULT_CHARSET_ENCODING, DorisOptions, DorisOptionsBuilder, TableTarget,
};
pub use security::Credentials;
