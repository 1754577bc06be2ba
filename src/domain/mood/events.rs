//! Mood domain events.

use serde::{Deserialize, Serialize};

use super::Feeling;
use crate::domain::foundation::{domain_event, EventId, Timestamp, UserId};

/// Published when a user checks in with a mood.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MoodUpdated {
    pub event_id: EventId,
    pub user_id: UserId,
    pub feeling: Feeling,
    /// Mood this one replaced, if any.
    pub previous: Option<Feeling>,
    pub updated_at: Timestamp,
}

domain_event!(
    MoodUpdated,
    event_type = "mood.updated.v1",
    schema_version = 1,
    aggregate_id = user_id,
    aggregate_type = "Mood",
    occurred_at = updated_at,
    event_id = event_id
);

/// Published when a user clears their mood.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MoodCleared {
    pub event_id: EventId,
    pub user_id: UserId,
    pub previous: Option<Feeling>,
    pub cleared_at: Timestamp,
}

domain_event!(
    MoodCleared,
    event_type = "mood.cleared.v1",
    schema_version = 1,
    aggregate_id = user_id,
    aggregate_type = "Mood",
    occurred_at = cleared_at,
    event_id = event_id
);
