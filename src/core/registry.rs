//! Dialect registry for explicit dependency injection.
//!
//! The [`DialectRegistry`] is an owned value constructed by the caller and
//! passed to whatever consumes the schema graph, instead of a process-wide
//! registration map. This keeps initialization deterministic, lets tests run
//! against isolated registries and allows several configurations to coexist.
//!
//! Registration is expected to complete before any read or lookup begins;
//! afterwards the registry is shared immutably.

use std::collections::HashMap;
use std::sync::Arc;

use crate::core::schema::Schema;
use crate::core::traits::{SchemaReader, TypeMapper};
use crate::core::types::CanonicalType;
use crate::drivers::mysql::{self, MysqlSchemaReader, MysqlTypeMapper};
use crate::error::{Result, SchemaError};

/// The implementation triple registered per dialect.
struct DialectEntry {
    reader: Arc<dyn SchemaReader>,
    mapper: Arc<dyn TypeMapper>,
    driver_pkg: String,
}

/// Registry of schema readers and type mappers, keyed by dialect identifier.
#[derive(Default)]
pub struct DialectRegistry {
    entries: HashMap<String, DialectEntry>,
}

impl DialectRegistry {
    /// Create a new empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a registry with the built-in dialects registered.
    ///
    /// Currently that is MySQL/MariaDB.
    pub fn with_builtins() -> Self {
        let mut registry = Self::new();
        let mapper = Arc::new(MysqlTypeMapper::new());
        registry.register_dialect(
            mysql::MYSQL,
            Arc::new(MysqlSchemaReader::new(mapper.clone())),
            mapper,
            mysql::MYSQL_DRIVER_PKG,
        );
        registry
    }

    /// Associate a dialect identifier with its reader, type mapper and
    /// driver package identifier.
    pub fn register_dialect(
        &mut self,
        id: impl Into<String>,
        reader: Arc<dyn SchemaReader>,
        mapper: Arc<dyn TypeMapper>,
        driver_pkg: impl Into<String>,
    ) {
        self.entries.insert(
            id.into(),
            DialectEntry {
                reader,
                mapper,
                driver_pkg: driver_pkg.into(),
            },
        );
    }

    /// Read the schema behind `conn_str` with the dialect's registered
    /// reader.
    ///
    /// # Errors
    ///
    /// [`SchemaError::UnsupportedDialect`] if `id` is unregistered, plus
    /// whatever the reader itself reports.
    pub async fn read_schema(&self, id: &str, conn_str: &str) -> Result<Schema> {
        let entry = self.require(id)?;
        entry.reader.read_schema(conn_str).await
    }

    /// Map a native type string with the dialect's registered type mapper.
    ///
    /// A non-fatal lookup: `None` when `id` is unregistered.
    pub fn map_type(&self, id: &str, native_type: &str) -> Option<CanonicalType> {
        self.entries.get(id).map(|e| e.mapper.map_type(native_type))
    }

    /// The driver/package identifier registered for `id`, for downstream
    /// import generation. `None` when unregistered.
    pub fn driver_pkg(&self, id: &str) -> Option<&str> {
        self.entries.get(id).map(|e| e.driver_pkg.as_str())
    }

    /// Prepare (never execute) `sql` against the database `schema` was read
    /// from, returning the first error the engine reports.
    pub async fn check_statement(&self, schema: &Schema, sql: &str) -> Result<()> {
        let entry = self.require(schema.dialect())?;
        entry.reader.check_statement(schema.conn_str(), sql).await
    }

    /// Whether a dialect is registered.
    pub fn has_dialect(&self, id: &str) -> bool {
        self.entries.contains_key(id)
    }

    /// All registered dialect identifiers.
    pub fn dialect_names(&self) -> Vec<&str> {
        self.entries.keys().map(String::as_str).collect()
    }

    fn require(&self, id: &str) -> Result<&DialectEntry> {
        self.entries
            .get(id)
            .ok_or_else(|| SchemaError::UnsupportedDialect(id.to_string()))
    }
}

impl std::fmt::Debug for DialectRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DialectRegistry")
            .field("dialects", &self.entries.keys().collect::<Vec<_>>())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;

    struct MockReader;

    #[async_trait]
    impl SchemaReader for MockReader {
        fn dialect(&self) -> &str {
            "mock"
        }

        async fn read_schema(&self, conn_str: &str) -> Result<Schema> {
            Ok(Schema::new("mock", conn_str, "mockdb"))
        }

        async fn check_statement(&self, _conn_str: &str, _sql: &str) -> Result<()> {
            Ok(())
        }
    }

    struct MockMapper;

    impl TypeMapper for MockMapper {
        fn dialect(&self) -> &str {
            "mock"
        }

        fn map_type(&self, _native_type: &str) -> CanonicalType {
            CanonicalType::String
        }
    }

    fn mock_registry() -> DialectRegistry {
        let mut registry = DialectRegistry::new();
        registry.register_dialect(
            "mock",
            Arc::new(MockReader),
            Arc::new(MockMapper),
            "mock-driver",
        );
        registry
    }

    #[tokio::test]
    async fn test_read_schema_dispatches_to_registered_reader() {
        let registry = mock_registry();
        let schema = registry.read_schema("mock", "mock://h/db").await.unwrap();
        assert_eq!(schema.dialect(), "mock");
        assert_eq!(schema.name(), "mockdb");
    }

    #[tokio::test]
    async fn test_read_schema_unregistered_dialect_fails() {
        let registry = mock_registry();
        let err = registry.read_schema("nope", "x://h/db").await.unwrap_err();
        assert!(matches!(err, SchemaError::UnsupportedDialect(id) if id == "nope"));
    }

    #[test]
    fn test_map_type_is_non_fatal_when_unregistered() {
        let registry = mock_registry();
        assert_eq!(
            registry.map_type("mock", "anything"),
            Some(CanonicalType::String)
        );
        assert_eq!(registry.map_type("nope", "anything"), None);
    }

    #[test]
    fn test_driver_pkg_lookup() {
        let registry = mock_registry();
        assert_eq!(registry.driver_pkg("mock"), Some("mock-driver"));
        assert_eq!(registry.driver_pkg("nope"), None);
    }

    #[tokio::test]
    async fn test_check_statement_requires_registered_dialect() {
        let registry = mock_registry();

        let schema = Schema::new("mock", "mock://h/db", "mockdb");
        assert!(registry.check_statement(&schema, "select 1").await.is_ok());

        let foreign = Schema::new("other", "x://h/db", "db");
        let err = registry
            .check_statement(&foreign, "select 1")
            .await
            .unwrap_err();
        assert!(matches!(err, SchemaError::UnsupportedDialect(_)));
    }

    #[test]
    fn test_with_builtins_registers_mysql() {
        let registry = DialectRegistry::with_builtins();
        assert!(registry.has_dialect(mysql::MYSQL));
        assert_eq!(
            registry.driver_pkg(mysql::MYSQL),
            Some(mysql::MYSQL_DRIVER_PKG)
        );
        assert!(registry.dialect_names().contains(&mysql::MYSQL));
    }
}
