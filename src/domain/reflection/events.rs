//! Reflection domain events.
//!
//! - `ReflectionOpened` - Wizard opened (or re-opened) for a user
//! - `ReflectionCompleted` - Path chosen and record handed off
//! - `ReflectionDraftSaved` - Cancelled with content, kept as a draft
//! - `ReflectionDiscarded` - Cancelled and thrown away

use serde::{Deserialize, Serialize};

use super::ReflectionPath;
use crate::domain::foundation::{
    domain_event, DraftId, EntryId, EventId, ReflectionId, Timestamp, UserId,
};

// ════════════════════════════════════════════════════════════════════════════
// ReflectionOpened
// ════════════════════════════════════════════════════════════════════════════

/// Published when the wizard is opened.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReflectionOpened {
    pub event_id: EventId,
    pub reflection_id: ReflectionId,
    pub user_id: UserId,
    /// Number of prompts in this reflection.
    pub question_count: usize,
    /// Whether "Next" requires a non-empty answer.
    pub strict: bool,
    pub opened_at: Timestamp,
}

domain_event!(
    ReflectionOpened,
    event_type = "reflection.opened.v1",
    schema_version = 1,
    aggregate_id = reflection_id,
    aggregate_type = "Reflection",
    occurred_at = opened_at,
    event_id = event_id
);

// ════════════════════════════════════════════════════════════════════════════
// ReflectionCompleted
// ════════════════════════════════════════════════════════════════════════════

/// Published when a reflection finishes and its journal entry is stored.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReflectionCompleted {
    pub event_id: EventId,
    pub reflection_id: ReflectionId,
    /// Journal entry created from the finished record.
    pub entry_id: EntryId,
    pub user_id: UserId,
    pub path: ReflectionPath,
    /// Answers non-empty after trimming.
    pub answered_count: usize,
    pub completed_at: Timestamp,
}

domain_event!(
    ReflectionCompleted,
    event_type = "reflection.completed.v1",
    schema_version = 1,
    aggregate_id = reflection_id,
    aggregate_type = "Reflection",
    occurred_at = completed_at,
    event_id = event_id
);

// ════════════════════════════════════════════════════════════════════════════
// ReflectionDraftSaved
// ════════════════════════════════════════════════════════════════════════════

/// Published when a cancelled reflection is kept as a draft.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReflectionDraftSaved {
    pub event_id: EventId,
    pub reflection_id: ReflectionId,
    pub draft_id: DraftId,
    pub user_id: UserId,
    pub answered_count: usize,
    pub saved_at: Timestamp,
}

domain_event!(
    ReflectionDraftSaved,
    event_type = "reflection.draft_saved.v1",
    schema_version = 1,
    aggregate_id = reflection_id,
    aggregate_type = "Reflection",
    occurred_at = saved_at,
    event_id = event_id
);

// ════════════════════════════════════════════════════════════════════════════
// ReflectionDiscarded
// ════════════════════════════════════════════════════════════════════════════

/// Published when a reflection is cancelled without keeping anything.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReflectionDiscarded {
    pub event_id: EventId,
    pub reflection_id: ReflectionId,
    pub user_id: UserId,
    /// Step the user was on when they left.
    pub abandoned_at_step: usize,
    pub discarded_at: Timestamp,
}

domain_event!(
    ReflectionDiscarded,
    event_type = "reflection.discarded.v1",
    schema_version = 1,
    aggregate_id = reflection_id,
    aggregate_type = "Reflection",
    occurred_at = discarded_at,
    event_id = event_id
);
