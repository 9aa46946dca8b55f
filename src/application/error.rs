//! Application-level errors (wraps domain errors)

use std::io;
use std::path::PathBuf;
use thiserror::Error;

use crate::domain::DomainError;

/// Application errors wrap domain errors and add application-level context.
#[derive(Error, Debug)]
pub enum ApplicationError {
    #[error("{0}")]
    Domain(#[from] DomainError),

    #[error("config error: {message}")]
    Config { message: String },

    #[error("operation failed: {context}: {source}")]
    OperationFailed {
        context: String,
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl ApplicationError {
    /// The I/O error kind behind a failed operation, if any.
    pub fn io_kind(&self) -> Option<io::ErrorKind> {
        match self {
            ApplicationError::OperationFailed { source, .. } => Some(source.kind()),
            _ => None,
        }
    }
}

/// Result type for application layer operations.
pub type ApplicationResult<T> = Result<T, ApplicationError>;
