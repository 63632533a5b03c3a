//! Table targeting for Doris options.

use std::fmt;

/// Which table(s) a connector instance reads from or writes to.
///
/// Single-table connectors carry a fixed `db.tbl` identifier. Multi-table
/// connectors leave routing to the sink, which resolves the table for each
/// record.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub enum TableTarget {
    /// Fixed table identifier, usually `database.table`
    Single(String),
    /// Table resolved per record
    #[default]
    MultiTable,
}

impl TableTarget {
    /// Returns the table identifier for single-table mode.
    pub fn identifier(&self) -> Option<&str> {
        match self {
            Self::Single(identifier) => Some(identifier.as_str()),
            Self::MultiTable => None,
        }
    }

    /// Returns true when table routing happens per record.
    pub const fn is_multi_table(&self) -> bool {
        matches!(self, Self::MultiTable)
    }

    /// Splits a `database.table` identifier at the first dot.
    ///
    /// Returns `None` in multi-table mode or when the identifier has no dot.
    /// Neither half is validated.
    pub fn database_and_table(&self) -> Option<(&str, &str)> {
        self.identifier()?.split_once('.')
    }
}

impl From<Option<String>> for TableTarget {
    fn from(identifier: Option<String>) -> Self {
        identifier.map_or(Self::MultiTable, Self::Single)
    }
}

impl fmt::Display for TableTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Single(identifier) => f.write_str(identifier),
            Self::MultiTable => f.write_str("<multi-table>"),
        }
    }
}
