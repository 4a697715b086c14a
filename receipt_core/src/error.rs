use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    #[error("Receipt '{0}' not found")]
    NotFound(String),

    #[error("Duplicate receipt id: {0}")]
    DuplicateId(String),

    #[error("Invalid receipt {id}: {reason}")]
    InvalidReceipt { id: String, reason: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Malformed receipt data: {0}")]
    Json(#[from] serde_json::Error),
}

impl Error {
    /// True for a well-formed lookup that simply had no match.
    #[must_use]
    pub const fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound(_))
    }
}
