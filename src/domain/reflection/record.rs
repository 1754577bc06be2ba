//! Values handed out of the wizard when it closes.

use serde::{Deserialize, Serialize};

use super::ReflectionPath;

/// Immutable snapshot emitted by `complete()`.
///
/// `answers.len() == questions.len()`, index-aligned.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompletedSession {
    pub path: ReflectionPath,
    pub answers: Vec<String>,
    pub questions: Vec<String>,
}

impl CompletedSession {
    /// Answers that are non-empty after trimming.
    pub fn answered_count(&self) -> usize {
        count_answered(&self.answers)
    }
}

/// In-progress state captured when a cancel is diverted to "save draft".
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DraftSnapshot {
    pub path: ReflectionPath,
    pub answers: Vec<String>,
    pub questions: Vec<String>,
    /// Step the user was on when they cancelled.
    pub current_step: usize,
}

impl DraftSnapshot {
    pub fn answered_count(&self) -> usize {
        count_answered(&self.answers)
    }
}

/// Result of `cancel()`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CancelOutcome {
    /// Nothing worth keeping; the session is gone.
    Discarded,
    /// At least one answer had content; the caller should offer to save it.
    DraftRequested(DraftSnapshot),
}

pub(crate) fn count_answered(answers: &[String]) -> usize {
    answers.iter().filter(|a| !a.trim().is_empty()).count()
}
