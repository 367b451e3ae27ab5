//! Core abstractions for dialect-agnostic schema introspection.
//!
//! - [`schema`]: the immutable schema object graph and its accessors
//! - [`types`]: canonical column type categories and nullable wrapping
//! - [`traits`]: the per-dialect [`SchemaReader`] and [`TypeMapper`] traits
//! - [`registry`]: the caller-owned dialect registry
//!
//! Dialect-specific behavior lives under [`crate::drivers`]; everything here
//! is implemented against the traits, so new dialects plug in without
//! touching core code.

pub mod registry;
pub mod schema;
pub mod traits;
pub mod types;

pub use registry::DialectRegistry;
pub use schema::{Column, ForeignTable, Schema, Table};
pub use traits::{SchemaReader, TypeMapper};
pub use types::CanonicalType;
