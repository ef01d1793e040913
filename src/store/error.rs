use reqwest::StatusCode;
use thiserror::Error;

/// Which record table a lookup was against, for error messages.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RecordKind {
    Vehicle,
    Article,
}

impl std::fmt::Display for RecordKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RecordKind::Vehicle => write!(f, "vehicle"),
            RecordKind::Article => write!(f, "article"),
        }
    }
}

/// Failures surfaced by the record, asset, and auth collaborators.
///
/// Nothing here is retried automatically; callers surface a message and
/// leave recovery to the user. Listing pages additionally degrade a `Fetch`
/// or `Backend` error to an empty collection.
#[derive(Debug, Error)]
pub enum StoreError {
    /// The backend was unreachable or the request could not be completed.
    #[error("record store request failed: {0}")]
    Fetch(#[from] reqwest::Error),

    /// The backend answered with an error status; the message is passed
    /// through verbatim.
    #[error("record store error ({status}): {message}")]
    Backend {
        status: StatusCode,
        message: String,
    },

    /// A single-record lookup by id matched nothing.
    #[error("{kind} {id} not found")]
    NotFound { kind: RecordKind, id: i64 },

    /// An image upload failed; the associated create/update is aborted.
    #[error("image upload failed: {0}")]
    Upload(String),
}

impl StoreError {
    pub fn is_not_found(&self) -> bool {
        matches!(self, StoreError::NotFound { .. })
    }
}
