//! Error types for statement generation

use thiserror::Error;

/// Errors that can occur while generating a SQL statement
#[derive(Debug, Error)]
pub enum DialectError {
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("{operation} is not supported for {dialect}")]
    Unsupported { operation: String, dialect: String },
}

impl DialectError {
    pub fn invalid_argument(msg: impl Into<String>) -> Self {
        Self::InvalidArgument(msg.into())
    }

    pub fn unsupported(operation: impl Into<String>, dialect: impl Into<String>) -> Self {
        Self::Unsupported {
            operation: operation.into(),
            dialect: dialect.into(),
        }
    }
}

pub type Result<T> = std::result::Result<T, DialectError>;
