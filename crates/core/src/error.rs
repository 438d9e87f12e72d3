/// Errors raised by note storage and validation.
///
/// `Validation` and `NotFound` are caller faults; the remaining variants are
/// infrastructure faults.
#[derive(Debug, thiserror::Error)]
pub enum NoteError {
    #[error("{0}")]
    Validation(String),
    #[error("note not found: {0}")]
    NotFound(String),
    #[error("failed to connect to database: {0}")]
    Connection(#[source] mongodb::error::Error),
    #[error("database operation failed: {0}")]
    Store(#[from] mongodb::error::Error),
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
}

pub type NoteResult<T> = std::result::Result<T, NoteError>;
