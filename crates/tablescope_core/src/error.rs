use thiserror::Error;

#[derive(Debug, Error)]
pub enum SchemaError {
    #[error("Type classification failed for `{type_name}`: {reason}")]
    Classification { type_name: String, reason: String },
}
