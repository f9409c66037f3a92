//! Application-level errors (wraps domain and store errors)

use thiserror::Error;

use crate::domain::DomainError;

/// Failure of a group or expense store.
///
/// Services propagate these unchanged; nothing is retried.
#[derive(Error, Debug)]
pub enum StoreError {
    #[error("store I/O failed: {context}")]
    Io {
        context: String,
        #[source]
        source: std::io::Error,
    },

    #[error("store data malformed: {context}")]
    Format {
        context: String,
        #[source]
        source: serde_json::Error,
    },
}

/// Result type for store operations.
pub type StoreResult<T> = Result<T, StoreError>;

/// Application errors wrap domain errors and add application-level context.
#[derive(Error, Debug)]
pub enum ApplicationError {
    #[error("{0}")]
    Domain(#[from] DomainError),

    #[error("{0}")]
    Store(#[from] StoreError),

    #[error("config error: {message}")]
    Config { message: String },
}

/// Result type for application layer operations.
pub type ApplicationResult<T> = Result<T, ApplicationError>;
