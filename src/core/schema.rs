//! The schema object graph: [`Schema`], [`Table`], [`Column`] and
//! [`ForeignTable`].
//!
//! Ownership is a strict tree: a schema owns its tables, a table owns its
//! columns. Foreign-key references are name-keyed and non-owning; they
//! resolve on demand against the owning schema, so the graph has no cycles
//! and no embedded back-pointers.
//!
//! The graph is built once per read and is immutable afterwards; all
//! mutation is `pub(crate)` and confined to the reader that constructs it.

use std::fmt;
use std::sync::Arc;

use serde::Serialize;

use crate::core::traits::TypeMapper;
use crate::core::types::CanonicalType;

/// An introspected database schema.
///
/// Tables appear in discovery order. Table names are unique within a schema.
#[derive(Debug, Clone, Serialize)]
pub struct Schema {
    pub(crate) dialect: String,
    #[serde(skip)]
    pub(crate) conn_str: String,
    pub(crate) name: String,
    pub(crate) tables: Vec<Table>,
}

impl Schema {
    pub(crate) fn new(
        dialect: impl Into<String>,
        conn_str: impl Into<String>,
        name: impl Into<String>,
    ) -> Self {
        Self {
            dialect: dialect.into(),
            conn_str: conn_str.into(),
            name: name.into(),
            tables: Vec::new(),
        }
    }

    /// The dialect identifier this schema was read with.
    pub fn dialect(&self) -> &str {
        &self.dialect
    }

    /// The connection string this schema was read from.
    pub fn conn_str(&self) -> &str {
        &self.conn_str
    }

    /// The schema (database) name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// All tables, in discovery order.
    pub fn tables(&self) -> &[Table] {
        &self.tables
    }

    /// Look up a table by exact, case-sensitive name.
    pub fn get_table(&self, name: &str) -> Option<&Table> {
        self.tables.iter().find(|t| t.name == name)
    }

    pub(crate) fn get_table_mut(&mut self, name: &str) -> Option<&mut Table> {
        self.tables.iter_mut().find(|t| t.name == name)
    }

    pub(crate) fn push_table(&mut self, table: Table) {
        self.tables.push(table);
    }
}

/// A table and its columns, in catalog ordinal order.
///
/// Column names are unique within a table.
#[derive(Debug, Clone, Serialize)]
pub struct Table {
    pub(crate) name: String,
    pub(crate) columns: Vec<Column>,
}

impl Table {
    pub(crate) fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            columns: Vec::new(),
        }
    }

    /// The table name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// All columns, in ordinal order.
    pub fn columns(&self) -> &[Column] {
        &self.columns
    }

    /// Look up a column by exact, case-sensitive name.
    pub fn get_column(&self, name: &str) -> Option<&Column> {
        self.columns.iter().find(|c| c.name == name)
    }

    pub(crate) fn get_column_mut(&mut self, name: &str) -> Option<&mut Column> {
        self.columns.iter_mut().find(|c| c.name == name)
    }

    /// Partition columns into (primary key, rest), preserving ordinal order.
    pub fn primary_key_columns(&self) -> (Vec<&Column>, Vec<&Column>) {
        self.partition(|c| c.primary_key)
    }

    /// Partition columns into (single-column unique, rest), preserving
    /// ordinal order.
    pub fn unique_columns(&self) -> (Vec<&Column>, Vec<&Column>) {
        self.partition(|c| c.unique)
    }

    /// Partition columns into (composite-unique members, rest), preserving
    /// ordinal order.
    pub fn mul_unique_columns(&self) -> (Vec<&Column>, Vec<&Column>) {
        self.partition(|c| c.mul_unique)
    }

    fn partition(&self, pred: impl Fn(&Column) -> bool) -> (Vec<&Column>, Vec<&Column>) {
        self.columns.iter().partition(|c| pred(c))
    }
}

/// A single column and its catalog attributes.
///
/// The native type string is preserved verbatim, length and precision
/// modifiers included (e.g. `"decimal(10,5)"`). `primary_key` and
/// `mul_unique` are mutually exclusive: a column is either the primary key
/// or a member of a non-primary composite uniqueness constraint, never both.
#[derive(Clone, Serialize)]
pub struct Column {
    pub(crate) name: String,
    pub(crate) native_type: String,
    pub(crate) primary_key: bool,
    pub(crate) unique: bool,
    pub(crate) mul_unique: bool,
    pub(crate) nullable: bool,
    pub(crate) auto_increment: bool,
    pub(crate) default_value: Option<String>,
    pub(crate) foreign_table: Option<ForeignTable>,
    #[serde(skip)]
    pub(crate) mapper: Arc<dyn TypeMapper>,
}

impl Column {
    pub(crate) fn new(
        name: impl Into<String>,
        native_type: impl Into<String>,
        mapper: Arc<dyn TypeMapper>,
    ) -> Self {
        Self {
            name: name.into(),
            native_type: native_type.into(),
            primary_key: false,
            unique: false,
            mul_unique: false,
            nullable: false,
            auto_increment: false,
            default_value: None,
            foreign_table: None,
            mapper,
        }
    }

    /// The column name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The native type string as reported by the catalog, verbatim.
    pub fn native_type(&self) -> &str {
        &self.native_type
    }

    /// Whether this column is (part of) the primary key.
    pub fn is_primary_key(&self) -> bool {
        self.primary_key
    }

    /// Whether this column carries a single-column uniqueness constraint.
    pub fn is_unique(&self) -> bool {
        self.unique
    }

    /// Whether this column belongs to a non-primary uniqueness constraint
    /// spanning two or more columns.
    pub fn is_mul_unique(&self) -> bool {
        self.mul_unique
    }

    /// Whether the column accepts NULL.
    pub fn is_nullable(&self) -> bool {
        self.nullable
    }

    /// Whether the column auto-increments.
    pub fn is_auto_increment(&self) -> bool {
        self.auto_increment
    }

    /// The column's default value, if the catalog reports one.
    pub fn default_value(&self) -> Option<&str> {
        self.default_value.as_deref()
    }

    /// The foreign-key reference carried by this column, if any.
    pub fn foreign_table(&self) -> Option<&ForeignTable> {
        self.foreign_table.as_ref()
    }

    /// Resolve the canonical type for this column.
    ///
    /// The dialect's type mapper classifies the native type; nullable
    /// columns then collapse to the coarser nullable wrapper via
    /// [`CanonicalType::into_nullable`]. Pure and deterministic: the result
    /// depends only on the native type string and the nullable flag.
    pub fn canonical_type(&self) -> CanonicalType {
        let mapped = self.mapper.map_type(&self.native_type);
        if self.nullable {
            mapped.into_nullable()
        } else {
            mapped
        }
    }
}

impl fmt::Debug for Column {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Column")
            .field("name", &self.name)
            .field("native_type", &self.native_type)
            .field("primary_key", &self.primary_key)
            .field("unique", &self.unique)
            .field("mul_unique", &self.mul_unique)
            .field("nullable", &self.nullable)
            .field("auto_increment", &self.auto_increment)
            .field("default_value", &self.default_value)
            .field("foreign_table", &self.foreign_table)
            .field("dialect", &self.mapper.dialect())
            .finish()
    }
}

/// A name-keyed, non-owning reference to a table and column in the same
/// schema.
///
/// Resolution goes through [`Schema::get_table`] and [`Table::get_column`],
/// so a resolved reference is identity-equal to what those accessors return
/// for the same names.
#[derive(Debug, Clone, Serialize)]
pub struct ForeignTable {
    pub(crate) table: String,
    pub(crate) column: String,
}

impl ForeignTable {
    pub(crate) fn new(table: impl Into<String>, column: impl Into<String>) -> Self {
        Self {
            table: table.into(),
            column: column.into(),
        }
    }

    /// The referenced table name.
    pub fn table_name(&self) -> &str {
        &self.table
    }

    /// The referenced column name.
    pub fn column_name(&self) -> &str {
        &self.column
    }

    /// Resolve the referenced table within `schema`.
    pub fn table<'a>(&self, schema: &'a Schema) -> Option<&'a Table> {
        schema.get_table(&self.table)
    }

    /// Resolve the referenced column within `schema`.
    pub fn column<'a>(&self, schema: &'a Schema) -> Option<&'a Column> {
        self.table(schema)?.get_column(&self.column)
    }
}
