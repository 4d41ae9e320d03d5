#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("{0}")]
    Validate(#[from] validator::ValidationErrors),

    #[error("{0}")]
    Store(#[from] StoreError),

    #[error("{0}")]
    Transport(#[from] TransportError),

    #[error("{0}")]
    Server(String),

    #[error("{0}")]
    Unknown(#[from] anyhow::Error),
}

pub type Result<T> = std::result::Result<T, Error>;

/// Failures of a [`crate::KeyValueStore`] backend.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("storage is unavailable")]
    Unavailable,

    #[error("storage quota exceeded")]
    QuotaExceeded,

    #[error("storage backend error: {0}")]
    Backend(String),
}

/// Failures of a contact form transport.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum TransportError {
    #[error("transport timed out")]
    Timeout,

    #[error("transport returned status {0}")]
    Status(u16),

    #[error("network error: {0}")]
    Network(String),
}
