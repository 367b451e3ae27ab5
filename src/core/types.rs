//! Canonical column types for target-language-neutral code generation.
//!
//! Native column types resolve to a small set of canonical categories so the
//! downstream generator never has to understand dialect type names. Nullable
//! columns use a coarser set of wrapper categories, since most target
//! languages represent optional scalars with a handful of nullable
//! containers rather than one per integer width.

use serde::Serialize;

/// Canonical type category assigned to a native column type.
///
/// The plain variants are what a [`TypeMapper`](crate::core::traits::TypeMapper)
/// produces; the `Null*` variants are the wrappers substituted for nullable
/// columns via [`into_nullable`](CanonicalType::into_nullable).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum CanonicalType {
    /// 8-bit signed integer.
    Int8,
    /// 16-bit signed integer.
    Int16,
    /// 32-bit signed integer.
    Int32,
    /// Platform-native signed integer.
    Int,
    /// 64-bit signed integer.
    Int64,
    /// 8-bit unsigned integer.
    UInt8,
    /// 16-bit unsigned integer.
    UInt16,
    /// 32-bit unsigned integer.
    UInt32,
    /// Platform-native unsigned integer.
    UInt,
    /// 64-bit unsigned integer.
    UInt64,
    /// 32-bit floating point.
    Float32,
    /// 64-bit floating point.
    Float64,
    /// Byte sequence (blob/binary families).
    Bytes,
    /// Character string. Also covers temporal and decimal-with-precision
    /// types, which the generator treats as strings.
    String,
    /// Nullable wrapper for integers of width <= 32 bits.
    NullInt32,
    /// Nullable wrapper for wider and platform-native integers.
    NullInt64,
    /// Nullable wrapper for floating-point categories.
    NullFloat64,
    /// Nullable wrapper for every other category.
    NullString,
}

impl CanonicalType {
    /// Replace the category with its nullable wrapper.
    ///
    /// Integer categories of width <= 32 bits collapse to [`NullInt32`],
    /// wider and platform-native integers to [`NullInt64`], floats to
    /// [`NullFloat64`] and everything else to [`NullString`]. Wrappers map
    /// to themselves.
    ///
    /// [`NullInt32`]: CanonicalType::NullInt32
    /// [`NullInt64`]: CanonicalType::NullInt64
    /// [`NullFloat64`]: CanonicalType::NullFloat64
    /// [`NullString`]: CanonicalType::NullString
    pub fn into_nullable(self) -> CanonicalType {
        use CanonicalType::*;

        match self {
            Int8 | Int16 | Int32 | UInt8 | UInt16 | UInt32 => NullInt32,
            Int | Int64 | UInt | UInt64 => NullInt64,
            Float32 | Float64 => NullFloat64,
            Bytes | String => NullString,
            wrapped @ (NullInt32 | NullInt64 | NullFloat64 | NullString) => wrapped,
        }
    }

    /// Whether this category is one of the nullable wrappers.
    pub fn is_nullable_wrapper(&self) -> bool {
        matches!(
            self,
            CanonicalType::NullInt32
                | CanonicalType::NullInt64
                | CanonicalType::NullFloat64
                | CanonicalType::NullString
        )
    }
}

impl std::fmt::Display for CanonicalType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            CanonicalType::Int8 => "Int8",
            CanonicalType::Int16 => "Int16",
            CanonicalType::Int32 => "Int32",
            CanonicalType::Int => "Int",
            CanonicalType::Int64 => "Int64",
            CanonicalType::UInt8 => "UInt8",
            CanonicalType::UInt16 => "UInt16",
            CanonicalType::UInt32 => "UInt32",
            CanonicalType::UInt => "UInt",
            CanonicalType::UInt64 => "UInt64",
            CanonicalType::Float32 => "Float32",
            CanonicalType::Float64 => "Float64",
            CanonicalType::Bytes => "Bytes",
            CanonicalType::String => "String",
            CanonicalType::NullInt32 => "NullInt32",
            CanonicalType::NullInt64 => "NullInt64",
            CanonicalType::NullFloat64 => "NullFloat64",
            CanonicalType::NullString => "NullString",
        };
        write!(f, "{}", name)
    }
}
