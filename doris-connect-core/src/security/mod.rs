//! Security utilities for credential protection.
//!
//! # Security Guarantees
//! - Credentials are stored in `Zeroizing` containers for automatic memory clearing
//! - Passwords are redacted from `Debug` output, logs and error messages
//!
//! # Module Structure
//! - `credentials`: Secure credential container with automatic memory zeroing

mod credentials;

pub use credentials::Credentials;
pub use crate::error::redact_jdbc_url;
