//! Mood errors returned by the mood handlers.

use crate::domain::foundation::{DomainError, ErrorCode};

#[derive(Debug, Clone, PartialEq)]
pub enum MoodError {
    /// Validation failed (e.g. an unknown feeling).
    ValidationFailed { field: String, message: String },
    /// Infrastructure error.
    Infrastructure(String),
}

impl MoodError {
    pub fn validation(field: impl Into<String>, message: impl Into<String>) -> Self {
        MoodError::ValidationFailed {
            field: field.into(),
            message: message.into(),
        }
    }
    pub fn code(&self) -> ErrorCode {
        match self {
            MoodError::ValidationFailed { .. } => ErrorCode::ValidationFailed,
            MoodError::Infrastructure(_) => ErrorCode::StorageError,
        }
    }
    pub fn message(&self) -> String {
        match self {
            MoodError::ValidationFailed { field, message } => {
                format!("Validation failed for '{}': {}", field, message)
            }
            MoodError::Infrastructure(msg) => format!("Error: {}", msg),
        }
    }
}

impl std::fmt::Display for MoodError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message())
    }
}

impl std::error::Error for MoodError {}

impl From<DomainError> for MoodError {
    fn from(err: DomainError) -> Self {
        match err.code {
            ErrorCode::ValidationFailed => MoodError::ValidationFailed {
                field: err
                    .details
                    .get("field")
                    .cloned()
                    .unwrap_or_else(|| "unknown".to_string()),
                message: err.message,
            },
            _ => MoodError::Infrastructure(err.to_string()),
        }
    }
}
