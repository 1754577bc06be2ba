//! Journal errors returned by the entry and draft handlers.

use crate::domain::foundation::{DomainError, DraftId, EntryId, ErrorCode};

#[derive(Debug, Clone, PartialEq)]
pub enum JournalError {
    /// Entry was not found.
    EntryNotFound(EntryId),
    /// Draft was not found.
    DraftNotFound(DraftId),
    /// The record belongs to someone else.
    Forbidden,
    /// Validation failed.
    ValidationFailed { field: String, message: String },
    /// Infrastructure error.
    Infrastructure(String),
}

impl JournalError {
    pub fn entry_not_found(id: EntryId) -> Self {
        JournalError::EntryNotFound(id)
    }
    pub fn draft_not_found(id: DraftId) -> Self {
        JournalError::DraftNotFound(id)
    }
    pub fn forbidden() -> Self {
        JournalError::Forbidden
    }
    pub fn infrastructure(message: impl Into<String>) -> Self {
        JournalError::Infrastructure(message.into())
    }
    pub fn code(&self) -> ErrorCode {
        match self {
            JournalError::EntryNotFound(_) => ErrorCode::EntryNotFound,
            JournalError::DraftNotFound(_) => ErrorCode::DraftNotFound,
            JournalError::Forbidden => ErrorCode::Forbidden,
            JournalError::ValidationFailed { .. } => ErrorCode::ValidationFailed,
            JournalError::Infrastructure(_) => ErrorCode::StorageError,
        }
    }
    pub fn message(&self) -> String {
        match self {
            JournalError::EntryNotFound(id) => format!("Entry not found: {}", id),
            JournalError::DraftNotFound(id) => format!("Draft not found: {}", id),
            JournalError::Forbidden => "Permission denied".to_string(),
            JournalError::ValidationFailed { field, message } => {
                format!("Validation failed for '{}': {}", field, message)
            }
            JournalError::Infrastructure(msg) => format!("Error: {}", msg),
        }
    }
}

impl std::fmt::Display for JournalError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message())
    }
}

impl std::error::Error for JournalError {}

impl From<DomainError> for JournalError {
    fn from(err: DomainError) -> Self {
        match err.code {
            ErrorCode::Forbidden => JournalError::Forbidden,
            ErrorCode::ValidationFailed => JournalError::ValidationFailed {
                field: err
                    .details
                    .get("field")
                    .cloned()
                    .unwrap_or_else(|| "unknown".to_string()),
                message: err.message,
            },
            _ => JournalError::Infrastructure(err.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn not_found_codes() {
        let entry = EntryId::new();
        assert_eq!(JournalError::entry_not_found(entry).code(), ErrorCode::EntryNotFound);
        assert_eq!(
            JournalError::draft_not_found(DraftId::new()).code(),
            ErrorCode::DraftNotFound
        );
        assert_eq!(
            JournalError::entry_not_found(entry).message(),
            format!("Entry not found: {}", entry)
        );
    }

    #[test]
    fn storage_error_is_infrastructure() {
        let err: JournalError = DomainError::storage("io").into();
        assert!(matches!(err, JournalError::Infrastructure(_)));
    }
}
