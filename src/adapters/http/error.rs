//! JSON error body shared by every endpoint, and the mapping from each
//! context's error enum to a status code.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};

use crate::domain::foundation::{ErrorCode, ValidationError};
use crate::domain::journal::JournalError;
use crate::domain::mood::MoodError;
use crate::domain::reflection::ReflectionError;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub code: String,
    pub message: String,
}

impl ErrorResponse {
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code: code.to_string(),
            message: message.into(),
        }
    }

    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::ValidationFailed, message)
    }
}

/// 400 with a `VALIDATION_FAILED` body.
pub fn bad_request(message: impl Into<String>) -> Response {
    (
        StatusCode::BAD_REQUEST,
        Json(ErrorResponse::bad_request(message)),
    )
        .into_response()
}

impl From<ValidationError> for ErrorResponse {
    fn from(err: ValidationError) -> Self {
        ErrorResponse::bad_request(err.to_string())
    }
}

pub fn handle_reflection_error(error: ReflectionError) -> Response {
    let status = match &error {
        ReflectionError::NotFound => StatusCode::NOT_FOUND,
        // A disabled control was pressed anyway
        ReflectionError::Wizard(_) => StatusCode::CONFLICT,
        ReflectionError::ValidationFailed { .. } => StatusCode::BAD_REQUEST,
        ReflectionError::Infrastructure(msg) => {
            tracing::error!("Reflection storage failure: {}", msg);
            StatusCode::INTERNAL_SERVER_ERROR
        }
    };
    (status, Json(ErrorResponse::new(error.code(), error.message()))).into_response()
}

pub fn handle_journal_error(error: JournalError) -> Response {
    let status = match &error {
        JournalError::EntryNotFound(_) | JournalError::DraftNotFound(_) => StatusCode::NOT_FOUND,
        JournalError::Forbidden => StatusCode::FORBIDDEN,
        JournalError::ValidationFailed { .. } => StatusCode::BAD_REQUEST,
        JournalError::Infrastructure(msg) => {
            tracing::error!("Journal storage failure: {}", msg);
            StatusCode::INTERNAL_SERVER_ERROR
        }
    };
    (status, Json(ErrorResponse::new(error.code(), error.message()))).into_response()
}

pub fn handle_mood_error(error: MoodError) -> Response {
    let status = match &error {
        MoodError::ValidationFailed { .. } => StatusCode::BAD_REQUEST,
        MoodError::Infrastructure(msg) => {
            tracing::error!("Mood storage failure: {}", msg);
            StatusCode::INTERNAL_SERVER_ERROR
        }
    };
    (status, Json(ErrorResponse::new(error.code(), error.message()))).into_response()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::foundation::EntryId;
    use crate::domain::reflection::WizardError;

    #[test]
    fn wizard_refusal_is_conflict() {
        let response = handle_reflection_error(WizardError::AtLastStep.into());
        assert_eq!(response.status(), StatusCode::CONFLICT);
    }

    #[test]
    fn missing_reflection_is_not_found() {
        let response = handle_reflection_error(ReflectionError::NotFound);
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[test]
    fn journal_errors_map_to_status() {
        assert_eq!(
            handle_journal_error(JournalError::EntryNotFound(EntryId::new())).status(),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            handle_journal_error(JournalError::Forbidden).status(),
            StatusCode::FORBIDDEN
        );
    }

    #[test]
    fn error_body_uses_domain_code() {
        let body = ErrorResponse::new(ErrorCode::AnswerRequired, "Step 1 needs an answer");
        let json = serde_json::to_value(&body).unwrap();
        assert_eq!(json["code"], "ANSWER_REQUIRED");
    }
}
