//! Application-level errors

use thiserror::Error;

use crate::domain::ColumnId;

/// Application errors: unreadable input, configuration and selector failures.
#[derive(Error, Debug)]
pub enum ApplicationError {
    #[error("invalid JSON in {context}")]
    Json {
        context: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("column {column} not found ({available} available)")]
    ColumnOutOfRange { column: ColumnId, available: usize },

    #[error("config error: {message}")]
    Config { message: String },

    #[error("selector failed: {message}")]
    Selector { message: String },

    #[error("operation failed: {context}")]
    OperationFailed {
        context: String,
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },
}

/// Result type for application layer operations.
pub type ApplicationResult<T> = Result<T, ApplicationError>;
