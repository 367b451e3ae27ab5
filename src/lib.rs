//! # db-introspect
//!
//! Read-only introspection of a live relational database's catalog into an
//! in-memory schema graph, built as the front end of a code generator.
//!
//! The graph describes tables, columns, key classifications (primary,
//! unique, composite unique), nullability, default values, auto-increment
//! flags and foreign-key relationships. Native column types resolve lazily
//! to canonical, target-language-neutral categories through per-dialect type
//! mappers, with nullable columns collapsing to coarser nullable wrappers.
//!
//! Dialects are registered in an explicit, caller-owned
//! [`DialectRegistry`]; there is no global state. The graph is constructed
//! once per read and is immutable afterwards — schema drift requires a
//! fresh read.
//!
//! ## Example
//!
//! ```rust,no_run
//! use db_introspect::{DialectRegistry, MYSQL};
//!
//! #[tokio::main]
//! async fn main() -> db_introspect::Result<()> {
//!     let registry = DialectRegistry::with_builtins();
//!     let schema = registry
//!         .read_schema(MYSQL, "mysql://root:pw@localhost:3306/app_db")
//!         .await?;
//!
//!     for table in schema.tables() {
//!         for column in table.columns() {
//!             println!(
//!                 "{}.{}: {} -> {}",
//!                 table.name(),
//!                 column.name(),
//!                 column.native_type(),
//!                 column.canonical_type()
//!             );
//!         }
//!     }
//!     Ok(())
//! }
//! ```

pub mod core;
pub mod drivers;
pub mod error;

// Re-exports for convenient access
pub use crate::core::registry::DialectRegistry;
pub use crate::core::schema::{Column, ForeignTable, Schema, Table};
pub use crate::core::traits::{SchemaReader, TypeMapper};
pub use crate::core::types::CanonicalType;
pub use crate::drivers::mysql::{MysqlSchemaReader, MysqlTypeMapper, MYSQL, MYSQL_DRIVER_PKG};
pub use crate::error::{Result, SchemaError};
