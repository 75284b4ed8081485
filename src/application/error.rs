//! Application-level errors (wraps domain errors)

use std::path::PathBuf;
use thiserror::Error;

use crate::domain::DomainError;

/// Application errors wrap domain errors and add application-level context.
#[derive(Error, Debug)]
pub enum ApplicationError {
    #[error(transparent)]
    Domain(#[from] DomainError),

    #[error("can not read knowledge base {path}")]
    DatabaseRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("can not parse knowledge base {path}")]
    DatabaseParse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("can not write knowledge base {path}")]
    DatabaseWrite {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("can not encode knowledge base")]
    Encode(#[source] serde_json::Error),

    #[error("error when reading answer")]
    Input(#[source] std::io::Error),

    #[error("config error: {message}")]
    Config { message: String },
}

/// Result type for application layer operations.
pub type ApplicationResult<T> = Result<T, ApplicationError>;
