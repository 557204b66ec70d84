use serde::{Deserialize, Serialize};

use crate::error::SchemaError;

/// Coarse display category for a declared column type.
///
/// Used by the UI for icon and alignment choices only; it never feeds back
/// into query generation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColumnTypeCategory {
    Number,
    String,
    Datetime,
    Boolean,
    Binary,

    /// Nested or composite types: structs, maps, lists, JSON.
    Struct,

    /// Anything the classifier does not recognize.
    Other,
}

/// Maps a declared column type to a display category.
///
/// Implementations must be pure and deterministic: the same type string
/// always yields the same category. Errors from a fallible implementation
/// propagate unchanged through the tree builder.
pub trait TypeClassifier {
    fn classify(&self, type_name: &str) -> Result<ColumnTypeCategory, SchemaError>;
}

/// Classifier for DuckDB type names.
///
/// Total over its input: unrecognized types fall back to
/// [`ColumnTypeCategory::Other`] rather than erroring. Matching is
/// case-insensitive and tolerant of parameterized forms (`DECIMAL(18,3)`,
/// `VARCHAR(255)`, `STRUCT(a INTEGER)`) and array suffixes (`INTEGER[]`).
#[derive(Debug, Clone, Copy, Default)]
pub struct DuckDbTypeClassifier;

impl TypeClassifier for DuckDbTypeClassifier {
    fn classify(&self, type_name: &str) -> Result<ColumnTypeCategory, SchemaError> {
        Ok(classify_duckdb_type(type_name))
    }
}

fn classify_duckdb_type(type_name: &str) -> ColumnTypeCategory {
    let upper = type_name.trim().to_ascii_uppercase();

    // Array types render with the composite icon regardless of element type.
    if upper.ends_with("[]") {
        return ColumnTypeCategory::Struct;
    }

    // Drop the parameter list: "DECIMAL(18,3)" matches as "DECIMAL".
    let base = upper.split('(').next().unwrap_or(&upper).trim();

    match base {
        "TINYINT" | "SMALLINT" | "INTEGER" | "INT" | "INT2" | "INT4" | "INT8" | "BIGINT"
        | "HUGEINT" | "UTINYINT" | "USMALLINT" | "UINTEGER" | "UBIGINT" | "UHUGEINT"
        | "FLOAT" | "FLOAT4" | "FLOAT8" | "REAL" | "DOUBLE" | "DECIMAL" | "NUMERIC" => {
            ColumnTypeCategory::Number
        }

        "VARCHAR" | "CHAR" | "BPCHAR" | "TEXT" | "STRING" | "UUID" | "ENUM" => {
            ColumnTypeCategory::String
        }

        "DATE" | "TIME" | "TIME WITH TIME ZONE" | "TIMETZ" | "TIMESTAMP" | "TIMESTAMPTZ"
        | "TIMESTAMP WITH TIME ZONE" | "TIMESTAMP_S" | "TIMESTAMP_MS" | "TIMESTAMP_NS"
        | "DATETIME" | "INTERVAL" => ColumnTypeCategory::Datetime,

        "BOOLEAN" | "BOOL" | "LOGICAL" => ColumnTypeCategory::Boolean,

        "BLOB" | "BYTEA" | "BINARY" | "VARBINARY" | "BIT" => ColumnTypeCategory::Binary,

        "STRUCT" | "MAP" | "LIST" | "ARRAY" | "UNION" | "JSON" => ColumnTypeCategory::Struct,

        _ => ColumnTypeCategory::Other,
    }
}
