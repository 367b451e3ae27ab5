//! MySQL/MariaDB dialect: catalog reader and type mapper.

mod reader;
mod typemap;

pub use reader::MysqlSchemaReader;
pub use typemap::MysqlTypeMapper;

/// Dialect identifier for MySQL/MariaDB.
pub const MYSQL: &str = "mysql";

/// Driver package identifier handed to the downstream generator for import
/// generation.
pub const MYSQL_DRIVER_PKG: &str = "sqlx::mysql";
