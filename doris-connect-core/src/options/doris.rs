//! Table-scoped Doris connector options.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::builder::DorisOptionsBuilder;
use super::connection::ConnectionOptions;
use super::table::TableTarget;
use crate::security::Credentials;

/// Charset used by the HTTP client when none is configured.
pub const DEFAULT_CHARSET_ENCODING: &str = "UTF-8";

/// Options handed from a Doris source or sink to the connection layer.
///
/// Values are only created through [`DorisOptions::builder`] (or the
/// property and serde paths, which go through the same builder), so the
/// frontend node list is always present.
///
/// Equality and hashing cover every field, including the password, which
/// makes options usable as a cache key for connector instances.
///
/// # Security
/// `Display` omits credentials entirely and `Debug` redacts the password.
///
/// # Example
/// ```rust
/// use doris_connect_core::DorisOptions;
///
/// let options = DorisOptions::builder()
///     .fenodes("127.0.0.1:8030")
///     .username("root")
///     .password("")
///     .table_identifier("db.tbl")
///     .build()?;
///
/// assert_eq!(options.fenodes(), "127.0.0.1:8030");
/// assert_eq!(options.table_identifier(), Some("db.tbl"));
/// assert_eq!(options.charset_encoding(), "UTF-8");
/// assert!(options.is_auto_redirect());
/// # Ok::<(), doris_connect_core::ConfigError>(())
/// ```
#[derive(Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "DorisOptionsBuilder", try_from = "DorisOptionsBuilder")]
pub struct DorisOptions {
    pub(crate) connection: ConnectionOptions,
    pub(crate) table: TableTarget,
    pub(crate) charset_encoding: String,
}

impl DorisOptions {
    /// Starts a new builder with default values.
    pub fn builder() -> DorisOptionsBuilder {
        DorisOptionsBuilder::new()
    }

    /// Returns a builder pre-filled with this value's fields.
    pub fn to_builder(&self) -> DorisOptionsBuilder {
        DorisOptionsBuilder::from(self.clone())
    }

    /// Connection parameters shared with the client layer.
    pub const fn connection(&self) -> &ConnectionOptions {
        &self.connection
    }

    /// Frontend node list, `host:port[,host:port...]`.
    pub fn fenodes(&self) -> &str {
        self.connection.fenodes()
    }

    /// Backend node list, when configured.
    pub fn benodes(&self) -> Option<&str> {
        self.connection.benodes()
    }

    /// Username, if any.
    pub fn username(&self) -> Option<&str> {
        self.connection.username()
    }

    /// Password, if any. Never log this value.
    pub fn password(&self) -> Option<&str> {
        self.connection.password()
    }

    /// Credential container.
    pub const fn credentials(&self) -> &Credentials {
        self.connection.credentials()
    }

    /// JDBC URL used for lookup queries.
    pub fn jdbc_url(&self) -> Option<&str> {
        self.connection.jdbc_url()
    }

    /// Whether writes may be redirected to another node.
    pub const fn is_auto_redirect(&self) -> bool {
        self.connection.is_auto_redirect()
    }

    /// Table identifier in single-table mode, `None` in multi-table mode.
    pub fn table_identifier(&self) -> Option<&str> {
        self.table.identifier()
    }

    /// Single-table or multi-table target.
    pub const fn table_target(&self) -> &TableTarget {
        &self.table
    }

    /// Returns true when tables are resolved per record.
    pub const fn is_multi_table(&self) -> bool {
        self.table.is_multi_table()
    }

    /// Charset used by the HTTP client.
    pub fn charset_encoding(&self) -> &str {
        &self.charset_encoding
    }

    /// Returns a copy targeting a single table.
    #[must_use]
    pub fn with_table_identifier(&self, table_identifier: impl Into<String>) -> Self {
        self.with_table_target(TableTarget::Single(table_identifier.into()))
    }

    /// Returns a copy with a different table target.
    #[must_use]
    pub fn with_table_target(&self, table: TableTarget) -> Self {
        Self {
            table,
            ..self.clone()
        }
    }

    /// Returns a copy with a different charset encoding.
    #[must_use]
    pub fn with_charset_encoding(&self, charset_encoding: impl Into<String>) -> Self {
        Self {
            charset_encoding: charset_encoding.into(),
            ..self.clone()
        }
    }

    /// Replaces the table identifier in place without re-validating.
    #[deprecated(note = "options are values; use `with_table_identifier`")]
    pub fn set_table_identifier(&mut self, table_identifier: impl Into<String>) {
        self.table = TableTarget::Single(table_identifier.into());
    }

    /// Replaces the charset encoding in place without re-validating.
    #[deprecated(note = "options are values; use `with_charset_encoding`")]
    pub fn set_charset_encoding(&mut self, charset_encoding: impl Into<String>) {
        self.charset_encoding = charset_encoding.into();
    }
}

impl fmt::Display for DorisOptions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "DorisOptions(fenodes={}, table={})",
            self.connection.fenodes, self.table
        )
        // Intentionally omit username and never include credentials
    }
}

impl fmt::Debug for DorisOptions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DorisOptions")
            .field("connection", &self.connection)
            .field("table", &self.table)
            .field("charset_encoding", &self.charset_encoding)
            .finish()
    }
}

impl TryFrom<DorisOptionsBuilder> for DorisOptions {
    type Error = crate::ConfigError;

    fn try_from(builder: DorisOptionsBuilder) -> Result<Self, Self::Error> {
        builder.build()
    }
}
