//! Reflection errors.
//!
//! `WizardError` covers disallowed wizard transitions. Every variant
//! corresponds to a control the UI would have disabled, and the wizard
//! leaves its state untouched when it returns one. `ReflectionError` is what
//! the reflection handlers return.

use thiserror::Error;

use crate::domain::foundation::{DomainError, ErrorCode};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum WizardError {
    #[error("The reflection wizard is not open")]
    NotOpen,

    #[error("Step {step} does not exist; there are {question_count} questions")]
    StepOutOfRange { step: usize, question_count: usize },

    #[error("Only the active step ({current}) can be edited, not step {step}")]
    StepNotActive { step: usize, current: usize },

    #[error("Step {step} needs an answer before moving on")]
    AnswerRequired { step: usize },

    #[error("Already at the last step")]
    AtLastStep,

    #[error("Already at the first step")]
    AtFirstStep,

    #[error("The path can only be chosen on the final step (currently on step {current})")]
    NotAtPathStep { current: usize },

    #[error("Cannot finish on step {current}; the path step is {final_step}")]
    NotFinished { current: usize, final_step: usize },
}

impl WizardError {
    pub fn code(&self) -> ErrorCode {
        match self {
            WizardError::NotOpen => ErrorCode::WizardClosed,
            WizardError::StepOutOfRange { .. } | WizardError::StepNotActive { .. } => {
                ErrorCode::StepNotEditable
            }
            WizardError::AnswerRequired { .. } => ErrorCode::AnswerRequired,
            WizardError::AtLastStep | WizardError::AtFirstStep | WizardError::NotFinished { .. } => {
                ErrorCode::InvalidStateTransition
            }
            WizardError::NotAtPathStep { .. } => ErrorCode::PathNotSelectable,
        }
    }
}

impl From<WizardError> for DomainError {
    fn from(err: WizardError) -> Self {
        DomainError::new(err.code(), err.to_string())
    }
}

/// Errors returned by the reflection command and query handlers.
#[derive(Debug, Clone, PartialEq)]
pub enum ReflectionError {
    /// The user has no wizard in flight.
    NotFound,
    /// The wizard refused the transition.
    Wizard(WizardError),
    /// Validation failed.
    ValidationFailed { field: String, message: String },
    /// Infrastructure error.
    Infrastructure(String),
}

impl ReflectionError {
    pub fn not_found() -> Self {
        ReflectionError::NotFound
    }
    pub fn validation(field: impl Into<String>, message: impl Into<String>) -> Self {
        ReflectionError::ValidationFailed {
            field: field.into(),
            message: message.into(),
        }
    }
    pub fn infrastructure(message: impl Into<String>) -> Self {
        ReflectionError::Infrastructure(message.into())
    }
    pub fn code(&self) -> ErrorCode {
        match self {
            ReflectionError::NotFound => ErrorCode::ReflectionNotFound,
            ReflectionError::Wizard(err) => err.code(),
            ReflectionError::ValidationFailed { .. } => ErrorCode::ValidationFailed,
            ReflectionError::Infrastructure(_) => ErrorCode::StorageError,
        }
    }
    pub fn message(&self) -> String {
        match self {
            ReflectionError::NotFound => "No reflection in progress".to_string(),
            ReflectionError::Wizard(err) => err.to_string(),
            ReflectionError::ValidationFailed { field, message } => {
                format!("Validation failed for '{}': {}", field, message)
            }
            ReflectionError::Infrastructure(msg) => format!("Error: {}", msg),
        }
    }
}

impl std::fmt::Display for ReflectionError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message())
    }
}

impl std::error::Error for ReflectionError {}

impl From<WizardError> for ReflectionError {
    fn from(err: WizardError) -> Self {
        ReflectionError::Wizard(err)
    }
}

impl From<DomainError> for ReflectionError {
    fn from(err: DomainError) -> Self {
        match err.code {
            ErrorCode::ReflectionNotFound => ReflectionError::NotFound,
            ErrorCode::ValidationFailed => ReflectionError::ValidationFailed {
                field: err
                    .details
                    .get("field")
                    .cloned()
                    .unwrap_or_else(|| "unknown".to_string()),
                message: err.message,
            },
            _ => ReflectionError::Infrastructure(err.to_string()),
        }
    }
}
