//! ldapschema-std: Filesystem loader and CLI utilities
//!
//! Convenience layer over `ldapschema-core` for native use: reading schema
//! definitions out of LDIF files and checking them in bulk.

pub mod loader;

pub use ldapschema_core;
pub use loader::{check_file, check_values, parse_ldif, LoadError, Rejection, Report, SchemaValue};
