use std::time::Duration;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("Invalid catalog: {0}")]
    InvalidCatalog(String),

    #[error("Unknown category: {0}")]
    InvalidCategory(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Search cancelled")]
    Cancelled,

    #[error("Search timed out after {0:?}")]
    TimedOut(Duration),

    #[error("I/O error on {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse {path}: {message}")]
    Parse { path: String, message: String },
}

impl Error {
    /// True for failures of the search call itself, as opposed to "nothing matched".
    pub fn is_transport(&self) -> bool {
        matches!(self, Error::Cancelled | Error::TimedOut(_))
    }
}

pub type Result<T> = std::result::Result<T, Error>;
