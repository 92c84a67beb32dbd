use thiserror::Error;

/// Errors surfaced by song store operations.
///
/// Every mutation is all-or-nothing: when any of these is returned, nothing
/// has been written to the backing file.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("Field '{field}' is required but was empty")]
    MissingField { field: &'static str },

    #[error("Song with id '{id}' already exists")]
    DuplicateId { id: String },

    #[error("Song with id '{id}' not found")]
    NotFound { id: String },

    #[error("Failed to read song store: {0}")]
    Read(#[source] std::io::Error),

    #[error("Failed to write song store: {0}")]
    Write(#[source] std::io::Error),

    #[error("Song store is not a valid JSON array: {0}")]
    Corrupt(#[source] serde_json::Error),
}
