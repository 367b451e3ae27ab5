//! Error types for schema introspection.

use thiserror::Error;

/// Main error type for introspection operations.
///
/// Any error aborts the current read; no partial schema graph is ever
/// returned to the caller.
#[derive(Error, Debug)]
pub enum SchemaError {
    /// No reader registered for the requested dialect identifier.
    #[error("unsupported dialect '{0}'")]
    UnsupportedDialect(String),

    /// The connection string carries no usable database name.
    #[error("database name is empty in connection string")]
    EmptyDatabaseName,

    /// A catalog row is missing required fields, or key-constraint metadata
    /// references a table or column that does not exist in the schema.
    #[error("invalid column metadata in table '{table}': {detail}")]
    InvalidColumn { table: String, detail: String },

    /// Connection or query failure, passed through from the driver.
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),
}

impl SchemaError {
    /// Create an InvalidColumn error with context about where it occurred.
    pub(crate) fn invalid_column(table: impl Into<String>, detail: impl Into<String>) -> Self {
        SchemaError::InvalidColumn {
            table: table.into(),
            detail: detail.into(),
        }
    }
}

/// Result type alias for introspection operations.
pub type Result<T> = std::result::Result<T, SchemaError>;
