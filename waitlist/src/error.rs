//! Waitlist-specific error types

use shared::SharedError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum WaitlistError {
    #[error("Record not found: {id}")]
    RecordNotFound { id: String },

    #[error("Waitlist data not loaded ({state})")]
    NotLoaded { state: String },

    #[error("Record source failed: {message}")]
    SourceError { message: String },

    #[error("Shared component error: {0}")]
    SharedError(#[from] SharedError),

    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),
}

impl WaitlistError {
    pub fn not_found(id: impl ToString) -> Self {
        WaitlistError::RecordNotFound { id: id.to_string() }
    }
}

pub type WaitlistResult<T> = Result<T, WaitlistError>;
