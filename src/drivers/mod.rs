//! Database driver implementations.
//!
//! Each driver module implements the core traits for one database engine:
//!
//! - `SchemaReader`: reads the engine's catalog into the schema graph
//! - `TypeMapper`: classifies the engine's native column types
//!
//! To add a dialect, implement both traits in a new module here and register
//! the pair (plus a driver package identifier) in a
//! [`DialectRegistry`](crate::core::registry::DialectRegistry).

pub mod mysql;
