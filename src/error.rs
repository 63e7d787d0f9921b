//! Error types for the shelfctl client

use thiserror::Error;

/// Main application error type
#[derive(Error, Debug)]
pub enum AppError {
    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Transport error: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("Server returned status {0}")]
    Status(reqwest::StatusCode),

    #[error("Decode error: {0}")]
    Decode(#[from] serde_json::Error),
}

impl AppError {
    /// True for client-side validation failures, where no request was sent.
    pub fn is_validation(&self) -> bool {
        matches!(self, AppError::Validation(_))
    }
}

/// Result type alias for application operations
pub type AppResult<T> = Result<T, AppError>;
