//! Core traits implemented by each database dialect.
//!
//! - [`SchemaReader`]: reads a live catalog into a [`Schema`] graph
//! - [`TypeMapper`]: classifies native column types into canonical categories
//!
//! Dialects are selected by explicit lookup through a
//! [`DialectRegistry`](crate::core::registry::DialectRegistry) rather than
//! global registration side effects.

use async_trait::async_trait;

use crate::core::schema::Schema;
use crate::core::types::CanonicalType;
use crate::error::Result;

/// Reads a database catalog into a [`Schema`] graph.
///
/// One `read_schema` call owns exactly one connection, issues its catalog
/// queries sequentially and releases the connection on every exit path.
/// Implementations are shared behind `Arc` and must be stateless apart from
/// their type-mapper handle.
#[async_trait]
pub trait SchemaReader: Send + Sync {
    /// The dialect identifier this reader serves (e.g. "mysql").
    fn dialect(&self) -> &str;

    /// Introspect the catalog behind `conn_str` and build the schema graph.
    ///
    /// A schema with zero tables is a valid, non-error outcome.
    async fn read_schema(&self, conn_str: &str) -> Result<Schema>;

    /// Prepare (never execute) `sql` on a fresh connection and return the
    /// first error encountered. Syntax and semantics checking is delegated
    /// entirely to the database engine; no local parsing happens. The
    /// connection is released regardless of outcome.
    async fn check_statement(&self, conn_str: &str, sql: &str) -> Result<()>;
}

/// Maps a dialect's native column types to canonical categories.
///
/// `map_type` is a pure function: case-insensitive on the native type name,
/// deterministic and independent of call history. Nullable wrapping is not
/// the mapper's concern; [`Column::canonical_type`] applies
/// [`CanonicalType::into_nullable`] on top of the mapped category.
///
/// [`Column::canonical_type`]: crate::core::schema::Column::canonical_type
pub trait TypeMapper: Send + Sync {
    /// The dialect identifier this mapper serves.
    fn dialect(&self) -> &str;

    /// Map a native type string (modifiers included, e.g. `"decimal(10,5)"`)
    /// to its canonical category.
    fn map_type(&self, native_type: &str) -> CanonicalType;
}
