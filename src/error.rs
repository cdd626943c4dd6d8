//! Error types for Elidune Shelf

use thiserror::Error;
use validator::ValidationError;

/// Outcome codes reported alongside user-facing messages
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u32)]
pub enum ErrorCode {
    Failure = 1,
    StorageFailure = 3,
    NoSuchItem = 5,
    BadValue = 18,
}

/// Main application error type
#[derive(Error, Debug)]
pub enum AppError {
    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Storage error: {0}")]
    Storage(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Business rule violation: {0}")]
    BusinessRule(String),
}

impl AppError {
    /// Code matching this error
    pub fn code(&self) -> ErrorCode {
        match self {
            AppError::Validation(_) | AppError::InvalidInput(_) => ErrorCode::BadValue,
            AppError::NotFound(_) => ErrorCode::NoSuchItem,
            AppError::Storage(_) | AppError::Serialization(_) => ErrorCode::StorageFailure,
            AppError::BusinessRule(_) => ErrorCode::Failure,
        }
    }

    /// Whether the console can report this error and carry on.
    /// Storage errors end the session.
    pub fn is_recoverable(&self) -> bool {
        matches!(
            self,
            AppError::Validation(_)
                | AppError::NotFound(_)
                | AppError::InvalidInput(_)
                | AppError::BusinessRule(_)
        )
    }

    /// Message shown to the user, without the category prefix
    pub fn user_message(&self) -> String {
        match self {
            AppError::Validation(msg)
            | AppError::NotFound(msg)
            | AppError::InvalidInput(msg)
            | AppError::BusinessRule(msg) => msg.clone(),
            other => other.to_string(),
        }
    }
}

impl From<ValidationError> for AppError {
    fn from(err: ValidationError) -> Self {
        let message = err
            .message
            .map(|m| m.into_owned())
            .unwrap_or_else(|| err.code.into_owned());
        AppError::Validation(message)
    }
}

/// Result type alias for application operations
pub type AppResult<T> = Result<T, AppError>;
