//! Native MySQL type classification.

use crate::core::traits::TypeMapper;
use crate::core::types::CanonicalType;

/// Maps native MySQL column types to canonical categories.
///
/// Exact matches cover the integer widths and their unsigned variants, the
/// floating-point types and the text/blob/temporal families. Types that
/// carry modifiers fall through to prefix rules: the `binary` family
/// classifies as bytes, everything else as string. Decimal types with a
/// precision modifier (`decimal(10,5)`) land in the string category so the
/// generator never loses digits to a float conversion; only a bare
/// `decimal`/`double` is treated as 64-bit floating.
#[derive(Debug, Clone, Default)]
pub struct MysqlTypeMapper;

impl MysqlTypeMapper {
    pub fn new() -> Self {
        Self
    }
}

impl TypeMapper for MysqlTypeMapper {
    fn dialect(&self) -> &str {
        super::MYSQL
    }

    fn map_type(&self, native_type: &str) -> CanonicalType {
        let native = native_type.to_lowercase();
        match native.as_str() {
            "tinyint" => CanonicalType::Int8,
            "smallint" => CanonicalType::Int16,
            "mediumint" => CanonicalType::Int32,
            "int" | "integer" => CanonicalType::Int,
            "bigint" => CanonicalType::Int64,
            "tinyint unsigned" => CanonicalType::UInt8,
            "smallint unsigned" => CanonicalType::UInt16,
            "mediumint unsigned" => CanonicalType::UInt32,
            "int unsigned" | "integer unsigned" => CanonicalType::UInt,
            "bigint unsigned" => CanonicalType::UInt64,
            "float" => CanonicalType::Float32,
            "double" | "decimal" => CanonicalType::Float64,
            "tinyblob" | "blob" | "mediumblob" | "longblob" => CanonicalType::Bytes,
            "tinytext" | "text" | "mediumtext" | "longtext" => CanonicalType::String,
            "date" | "time" | "year" | "datetime" | "timestamp" => CanonicalType::String,
            _ => {
                if native.starts_with("binary") || native.starts_with("varbinary") {
                    CanonicalType::Bytes
                } else {
                    CanonicalType::String
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn map(native: &str) -> CanonicalType {
        MysqlTypeMapper::new().map_type(native)
    }

    #[test]
    fn test_integer_widths() {
        assert_eq!(map("tinyint"), CanonicalType::Int8);
        assert_eq!(map("smallint"), CanonicalType::Int16);
        assert_eq!(map("mediumint"), CanonicalType::Int32);
        assert_eq!(map("int"), CanonicalType::Int);
        assert_eq!(map("bigint"), CanonicalType::Int64);
    }

    #[test]
    fn test_unsigned_variants() {
        assert_eq!(map("tinyint unsigned"), CanonicalType::UInt8);
        assert_eq!(map("smallint unsigned"), CanonicalType::UInt16);
        assert_eq!(map("mediumint unsigned"), CanonicalType::UInt32);
        assert_eq!(map("int unsigned"), CanonicalType::UInt);
        assert_eq!(map("bigint unsigned"), CanonicalType::UInt64);
    }

    #[test]
    fn test_floating_point() {
        assert_eq!(map("float"), CanonicalType::Float32);
        assert_eq!(map("double"), CanonicalType::Float64);
        assert_eq!(map("decimal"), CanonicalType::Float64);
    }

    #[test]
    fn test_text_and_blob_families() {
        for t in ["tinytext", "text", "mediumtext", "longtext"] {
            assert_eq!(map(t), CanonicalType::String);
        }
        for t in ["tinyblob", "blob", "mediumblob", "longblob"] {
            assert_eq!(map(t), CanonicalType::Bytes);
        }
    }

    #[test]
    fn test_temporal_types_are_strings() {
        for t in ["date", "time", "year", "datetime", "timestamp"] {
            assert_eq!(map(t), CanonicalType::String);
        }
    }

    #[test]
    fn test_binary_prefix_rule() {
        assert_eq!(map("binary(255)"), CanonicalType::Bytes);
        assert_eq!(map("varbinary(16)"), CanonicalType::Bytes);
    }

    #[test]
    fn test_modified_types_default_to_string() {
        assert_eq!(map("decimal(10,5)"), CanonicalType::String);
        assert_eq!(map("char(10)"), CanonicalType::String);
        assert_eq!(map("varchar(20)"), CanonicalType::String);
        assert_eq!(map("enum('a','b')"), CanonicalType::String);
    }

    #[test]
    fn test_case_insensitive() {
        assert_eq!(map("TINYINT"), CanonicalType::Int8);
        assert_eq!(map("BigInt Unsigned"), CanonicalType::UInt64);
        assert_eq!(map("BINARY(8)"), CanonicalType::Bytes);
    }

    #[test]
    fn test_mapping_is_deterministic() {
        let mapper = MysqlTypeMapper::new();
        let first = mapper.map_type("decimal(10,5)");
        mapper.map_type("bigint");
        mapper.map_type("blob");
        assert_eq!(mapper.map_type("decimal(10,5)"), first);
    }

    #[test]
    fn test_nullable_wrapping_end_to_end() {
        assert_eq!(map("tinyint").into_nullable(), CanonicalType::NullInt32);
        assert_eq!(map("int").into_nullable(), CanonicalType::NullInt64);
        assert_eq!(map("bigint").into_nullable(), CanonicalType::NullInt64);
        assert_eq!(map("float").into_nullable(), CanonicalType::NullFloat64);
        assert_eq!(map("double").into_nullable(), CanonicalType::NullFloat64);
        assert_eq!(
            map("decimal(10,5)").into_nullable(),
            CanonicalType::NullString
        );
        assert_eq!(map("text").into_nullable(), CanonicalType::NullString);
        assert_eq!(map("blob").into_nullable(), CanonicalType::NullString);
        assert_eq!(map("datetime").into_nullable(), CanonicalType::NullString);
    }
}
