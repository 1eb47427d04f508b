use thiserror::Error;
use tracing::{debug, error};

/// Errors raised while turning column buffers into values.
///
/// Every variant invalidates only the single requested value; none of them
/// imply anything about the state of the surrounding connection or chunk.
#[derive(Debug, Error)]
pub enum MarshalError {
    #[error("Null value cannot be converted to non-nullable type {target} (column {column})")]
    NullToNonNullable { column: usize, target: &'static str },

    #[error("Type mismatch: cannot convert {logical} to {target}")]
    TypeMismatch { logical: String, target: &'static str },

    #[error("Overflow: value {value} cannot be represented as {target}")]
    Overflow { value: String, target: &'static str },

    #[error("Type mismatch: unrecognized logical type tag {0}")]
    UnknownType(u8),

    #[error("Invalid type metadata: {0}")]
    InvalidTypeMetadata(String),

    #[error("Column index {index} out of range (column count {count})")]
    ColumnOutOfRange { index: usize, count: usize },

    #[error("Row index {index} out of range (row count {count})")]
    RowOutOfRange { index: usize, count: usize },

    #[error("Unknown column: {0}")]
    UnknownColumn(String),

    #[error("Duplicate column name: {0}")]
    DuplicateColumn(String),

    #[error("Corrupt column buffer: {0}")]
    CorruptBuffer(String),

    #[error("Invalid UTF-8 in text value: {0}")]
    Utf8(#[from] std::string::FromUtf8Error),
}

impl MarshalError {
    pub fn type_mismatch(logical: impl ToString, target: &'static str) -> Self {
        MarshalError::TypeMismatch {
            logical: logical.to_string(),
            target,
        }
    }

    pub fn overflow(value: impl ToString, target: &'static str) -> Self {
        MarshalError::Overflow {
            value: value.to_string(),
            target,
        }
    }

    pub fn corrupt(msg: impl Into<String>) -> Self {
        MarshalError::CorruptBuffer(msg.into())
    }

    pub fn log_error(&self) {
        match self {
            MarshalError::NullToNonNullable { column, target } => {
                error!("Null value requested as {} in column {}", target, column);
                debug!("Null conversion details: {:?}", self);
            }
            MarshalError::TypeMismatch { logical, target } => {
                error!("Type mismatch: {} -> {}", logical, target);
                debug!("Type mismatch details: {:?}", self);
            }
            MarshalError::Overflow { value, target } => {
                error!("Overflow converting {} to {}", value, target);
                debug!("Overflow details: {:?}", self);
            }
            MarshalError::UnknownType(tag) => {
                error!("Unrecognized logical type tag: {}", tag);
                debug!("Unknown type details: {:?}", self);
            }
            MarshalError::InvalidTypeMetadata(e) => {
                error!("Invalid type metadata: {}", e);
                debug!("Invalid type metadata details: {}", e);
            }
            MarshalError::ColumnOutOfRange { index, count } => {
                error!("Column index {} out of range ({} columns)", index, count);
                debug!("Column bounds details: {:?}", self);
            }
            MarshalError::RowOutOfRange { index, count } => {
                error!("Row index {} out of range ({} rows)", index, count);
                debug!("Row bounds details: {:?}", self);
            }
            MarshalError::UnknownColumn(name) => {
                error!("Unknown column: {}", name);
                debug!("Unknown column details: {}", name);
            }
            MarshalError::DuplicateColumn(name) => {
                error!("Duplicate column name: {}", name);
                debug!("Duplicate column details: {}", name);
            }
            MarshalError::CorruptBuffer(e) => {
                error!("Corrupt column buffer: {}", e);
                debug!("Corrupt buffer details: {}", e);
            }
            MarshalError::Utf8(e) => {
                error!("Invalid UTF-8 in text value: {}", e);
                debug!("UTF-8 error details: {:?}", e);
            }
        }
    }
}
