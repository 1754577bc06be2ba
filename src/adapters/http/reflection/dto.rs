//! Request and response bodies for reflection endpoints.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::{DraftId, EntryId, ReflectionId, Timestamp};
use crate::domain::journal::JournalEntry;
use crate::domain::reflection::ReflectionPath;

/// Body of `PUT /reflection/answers/:step`.
#[derive(Debug, Clone, Deserialize)]
pub struct AnswerRequest {
    pub text: String,
}

/// Body of `PUT /reflection/path`. Parsed by hand so an unknown value
/// comes back as a validation error rather than a serde rejection.
#[derive(Debug, Clone, Deserialize)]
pub struct ChoosePathRequest {
    pub path: String,
}

/// Body of `POST /reflection/cancel`.
#[derive(Debug, Clone, Deserialize)]
pub struct CancelRequest {
    #[serde(default = "default_keep_draft")]
    pub keep_draft: bool,
}

impl Default for CancelRequest {
    fn default() -> Self {
        Self {
            keep_draft: default_keep_draft(),
        }
    }
}

fn default_keep_draft() -> bool {
    true
}

impl CancelRequest {
    /// Parses a cancel body. An empty body means the defaults; anything
    /// else has to be a valid request, whatever its content type.
    pub fn from_body(body: &[u8]) -> Result<Self, serde_json::Error> {
        if body.iter().all(u8::is_ascii_whitespace) {
            return Ok(Self::default());
        }
        serde_json::from_slice(body)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum CancelResponse {
    Discarded,
    DraftSaved { draft_id: DraftId, answered_count: usize },
}

/// A journal entry as returned right after completion.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EntryResponse {
    pub entry_id: EntryId,
    pub reflection_id: ReflectionId,
    pub created_at: Timestamp,
    pub path: ReflectionPath,
    pub questions: Vec<String>,
    pub answers: Vec<String>,
    pub answered_count: usize,
}

impl From<JournalEntry> for EntryResponse {
    fn from(entry: JournalEntry) -> Self {
        let answered_count = entry.answered_count();
        Self {
            entry_id: entry.id,
            reflection_id: entry.reflection_id,
            created_at: entry.created_at,
            path: entry.path,
            questions: entry.questions,
            answers: entry.answers,
            answered_count,
        }
    }
}
