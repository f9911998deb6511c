use thiserror::Error;

/// Application-wide error type
#[derive(Debug, Error)]
pub enum Error {
    #[error("Invalid connection target: {0}")]
    InvalidTarget(String),

    #[error("Not connected")]
    NotConnected,

    #[error("No database selected")]
    NoDatabaseSelected,

    #[error("No collection selected")]
    NoCollectionSelected,

    #[error("Document not found: {0}")]
    DocumentNotFound(String),

    #[error("Operation already in flight: {0}")]
    OperationInFlight(&'static str),

    #[error("Backend error: {0}")]
    Backend(String),
}

/// Convenience Result type using our Error
pub type Result<T> = std::result::Result<T, Error>;
