use thiserror::Error;

/// Failures of review store operations.
#[derive(Debug, Error)]
pub enum ReviewError {
    /// Star rating outside 1..=5
    #[error("Invalid rating {0}: must be between 1 and 5 stars")]
    InvalidRatingValue(u8),
    /// Comment text blank after trimming
    #[error("Comment text cannot be empty")]
    EmptyCommentText,
    /// Durable storage could not be read or written
    #[error("Review storage unavailable: {0}")]
    StorageUnavailable(String),
    /// Stored data exists but cannot be parsed
    #[error("Review storage corrupt at {key}: {message}")]
    StorageCorrupt { key: String, message: String },
}

impl ReviewError {
    /// Validation errors leave storage untouched and can be fixed by the user
    pub fn is_validation(&self) -> bool {
        matches!(self, ReviewError::InvalidRatingValue(_) | ReviewError::EmptyCommentText)
    }
}

pub type ReviewResult<T> = Result<T, ReviewError>;
