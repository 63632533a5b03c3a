//! Secure credential container with automatic memory zeroing.
//!
//! This module provides the `Credentials` struct which stores the Doris
//! username and password with automatic memory clearing on drop using
//! the `zeroize` crate.
//!
//! # Security
//! - Credentials are stored in `Zeroizing<T>` containers
//! - Memory is automatically cleared when credentials go out of scope
//! - Passwords are never exposed in debug output or logs

use std::fmt;
use std::hash::{Hash, Hasher};

use serde::{Deserialize, Serialize};
use zeroize::Zeroizing;

/// Credential container that automatically zeros memory on drop.
///
/// Both fields are optional: Doris accepts anonymous access on some
/// deployments, and an empty password is distinct from no password.
///
/// Equality and hashing compare the actual username and password values,
/// so two option sets that differ only in their password are not equal.
///
/// # Example
///
/// ```rust
/// use doris_connect_core::security::Credentials;
///
/// let creds = Credentials::new(Some("root".to_string()), Some("secret".to_string()));
/// assert_eq!(creds.username(), Some("root"));
/// assert!(creds.has_password());
/// assert!(!format!("{:?}", creds).contains("secret"));
/// ```
#[derive(Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Credentials {
    username: Option<Zeroizing<String>>,
    password: Option<Zeroizing<String>>,
}

impl Credentials {
    /// Creates new credentials with automatic memory zeroing.
    ///
    /// # Arguments
    /// * `username` - Optional database username
    /// * `password` - Optional database password
    pub fn new(username: Option<String>, password: Option<String>) -> Self {
        Self {
            username: username.map(Zeroizing::new),
            password: password.map(Zeroizing::new),
        }
    }

    /// Gets the username, if any.
    pub fn username(&self) -> Option<&str> {
        self.username.as_deref().map(String::as_str)
    }

    /// Gets the password, if any.
    ///
    /// Callers hand this to the connection layer only; it must not be logged.
    pub fn password(&self) -> Option<&str> {
        self.password.as_deref().map(String::as_str)
    }

    /// Checks if password is present without exposing it.
    pub fn has_password(&self) -> bool {
        self.password.is_some()
    }

    pub(crate) fn set_username(&mut self, username: String) {
        self.username = Some(Zeroizing::new(username));
    }

    pub(crate) fn set_password(&mut self, password: String) {
        self.password = Some(Zeroizing::new(password));
    }
}

impl PartialEq for Credentials {
    fn eq(&self, other: &Self) -> bool {
        self.username() == other.username() && self.password() == other.password()
    }
}

impl Eq for Credentials {}

impl Hash for Credentials {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.username().hash(state);
        self.password().hash(state);
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("username", &self.username())
            .field("password", &self.password.as_ref().map(|_| "REDACTED"))
            .finish()
    }
}
