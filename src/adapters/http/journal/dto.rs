//! Response bodies for journal and draft endpoints.

use serde::{Deserialize, Serialize};

use crate::application::handlers::DraftList;
use crate::domain::foundation::{DraftId, EntryId, Timestamp};
use crate::domain::journal::{Draft, JournalEntry};
use crate::domain::reflection::ReflectionPath;

/// One row of the journal list.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EntrySummaryResponse {
    pub entry_id: EntryId,
    pub created_at: Timestamp,
    pub path: ReflectionPath,
    pub answered_count: usize,
}

impl From<&JournalEntry> for EntrySummaryResponse {
    fn from(entry: &JournalEntry) -> Self {
        Self {
            entry_id: entry.id,
            created_at: entry.created_at,
            path: entry.path,
            answered_count: entry.answered_count(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecapItem {
    pub question: String,
    pub answer: String,
}

/// Read-only recap of one entry. Unanswered questions are left out.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EntryRecapResponse {
    pub entry_id: EntryId,
    pub created_at: Timestamp,
    pub path: ReflectionPath,
    pub path_label: String,
    pub items: Vec<RecapItem>,
}

impl From<&JournalEntry> for EntryRecapResponse {
    fn from(entry: &JournalEntry) -> Self {
        Self {
            entry_id: entry.id,
            created_at: entry.created_at,
            path: entry.path,
            path_label: entry.path.label().to_string(),
            items: entry
                .answered_pairs()
                .map(|(question, answer)| RecapItem {
                    question: question.to_string(),
                    answer: answer.to_string(),
                })
                .collect(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DraftSummaryResponse {
    pub draft_id: DraftId,
    pub created_at: Timestamp,
    pub stopped_at_step: usize,
    pub answered_count: usize,
    pub question_count: usize,
}

impl From<&Draft> for DraftSummaryResponse {
    fn from(draft: &Draft) -> Self {
        Self {
            draft_id: draft.id,
            created_at: draft.created_at,
            stopped_at_step: draft.stopped_at_step,
            answered_count: draft.answered_count(),
            question_count: draft.questions.len(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DraftListResponse {
    pub drafts: Vec<DraftSummaryResponse>,
    pub count: usize,
    pub label: String,
}

impl From<DraftList> for DraftListResponse {
    fn from(list: DraftList) -> Self {
        Self {
            drafts: list.drafts.iter().map(DraftSummaryResponse::from).collect(),
            count: list.count,
            label: list.label,
        }
    }
}
