//! Doris connector options.
//!
//! This module contains the option types handed from sources and sinks to
//! the connection layer:
//! - `ConnectionOptions`: Frontend/backend endpoints, credentials, redirect policy
//! - `TableTarget`: Single-table or multi-table mode
//! - `DorisOptions`: Connection options plus table target and charset
//! - `DorisOptionsBuilder`: The only way to construct `DorisOptions`
//!
//! # Security
//! Passwords are held in `Zeroizing` containers and never appear in
//! `Debug`, `Display` or log output.

mod builder;
mod connection;
mod doris;
pub mod properties;
mod table;

pub use builder::DorisOptionsBuilder;
pub use connection::ConnectionOptions;
pub use doris::{DEFAULT_CHARSET_ENCODING, DorisOptions};
pub use table::TableTarget;
