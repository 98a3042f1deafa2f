use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ModelError {
    #[error("duplicate field name '{0}' in schema")]
    DuplicateField(String),
    #[error("record has {actual} values but the schema declares {expected} fields")]
    SchemaMismatch { expected: usize, actual: usize },
    #[error("unknown delimiter '{0}' (expected one of: tab, comma, pipe, semicolon, space)")]
    UnknownDelimiter(String),
}

pub type Result<T> = std::result::Result<T, ModelError>;
