mod catalog;
mod classify;
mod error;

pub use catalog::{ColumnMeta, DEFAULT_DATABASE, TableMeta};
pub use classify::{ColumnTypeCategory, DuckDbTypeClassifier, TypeClassifier};
pub use error::SchemaError;
