//! Loading options from connector properties.
//!
//! Table definitions hand the connector a flat string map, for example the
//! `WITH (...)` clause of a `CREATE TABLE` statement. Every recognised key
//! is applied to a [`DorisOptionsBuilder`], which performs the usual
//! validation.

use std::collections::HashMap;

use super::builder::DorisOptionsBuilder;
use super::doris::DorisOptions;
use crate::error::{ConfigError, Result};

/// Frontend HTTP endpoints.
pub const FENODES: &str = "fenodes";
/// Backend HTTP endpoints.
pub const BENODES: &str = "benodes";
/// Target table, `db.tbl`.
pub const TABLE_IDENTIFIER: &str = "table.identifier";
/// User name.
pub const USERNAME: &str = "username";
/// Password; never echoed in errors.
pub const PASSWORD: &str = "password";
/// Frontend JDBC URL for lookup queries.
pub const JDBC_URL: &str = "jdbc-url";
/// Redirect policy, `true` or `false`.
pub const AUTO_REDIRECT: &str = "auto-redirect";
/// Charset for the HTTP client.
pub const CHARSET_ENCODING: &str = "charset-encoding";

impl DorisOptions {
    /// Builds options from a connector property map.
    ///
    /// Unknown keys are ignored. `auto-redirect` accepts `true` or `false`
    /// in any case.
    ///
    /// # Errors
    /// Returns [`ConfigError::InvalidValue`] for a malformed `auto-redirect`
    /// and [`ConfigError::MissingRequiredField`] when `fenodes` is absent.
    ///
    /// # Example
    /// ```rust
    /// use std::collections::HashMap;
    /// use doris_connect_core::DorisOptions;
    ///
    /// let properties = HashMap::from([
    ///     ("fenodes".to_string(), "127.0.0.1:8030".to_string()),
    ///     ("table.identifier".to_string(), "db.tbl".to_string()),
    /// ]);
    /// let options = DorisOptions::from_properties(&properties)?;
    /// assert_eq!(options.table_identifier(), Some("db.tbl"));
    /// # Ok::<(), doris_connect_core::ConfigError>(())
    /// ```
    pub fn from_properties(properties: &HashMap<String, String>) -> Result<Self> {
        let mut builder = DorisOptionsBuilder::new();

        for (key, value) in properties {
            builder = match key.as_str() {
                FENODES => builder.fenodes(value),
                BENODES => builder.benodes(value),
                TABLE_IDENTIFIER => builder.table_identifier(value),
                USERNAME => builder.username(value),
                PASSWORD => builder.password(value),
                JDBC_URL => builder.jdbc_url(value),
                AUTO_REDIRECT => builder.auto_redirect(parse_bool(key, value)?),
                CHARSET_ENCODING => builder.charset_encoding(value),
                _ => {
                    tracing::debug!(key = %key, "Ignoring unrecognised Doris property");
                    builder
                }
            };
        }

        builder.build()
    }
}

fn parse_bool(key: &str, value: &str) -> Result<bool> {
    if value.trim().eq_ignore_ascii_case("true") {
        Ok(true)
    } else if value.trim().eq_ignore_ascii_case("false") {
        Ok(false)
    } else {
        Err(ConfigError::invalid_value(key, value))
    }
}
