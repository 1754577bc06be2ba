//! MoodCheckIn - the user's current mood, if any.

use serde::{Deserialize, Serialize};

use super::Feeling;
use crate::domain::foundation::{Timestamp, UserId};

/// `feeling` and `updated_at` are either both set or both empty.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoodCheckIn {
    user_id: UserId,
    feeling: Option<Feeling>,
    updated_at: Option<Timestamp>,
}

impl MoodCheckIn {
    /// A check-in with no mood recorded.
    pub fn empty(user_id: UserId) -> Self {
        Self {
            user_id,
            feeling: None,
            updated_at: None,
        }
    }

    pub fn set(&mut self, feeling: Feeling, at: Timestamp) {
        self.feeling = Some(feeling);
        self.updated_at = Some(at);
    }

    /// Forgets the mood. Returns the feeling that was cleared.
    pub fn clear(&mut self) -> Option<Feeling> {
        self.updated_at = None;
        self.feeling.take()
    }

    pub fn user_id(&self) -> &UserId {
        &self.user_id
    }

    pub fn feeling(&self) -> Option<Feeling> {
        self.feeling
    }

    pub fn updated_at(&self) -> Option<Timestamp> {
        self.updated_at
    }

    pub fn is_set(&self) -> bool {
        self.feeling.is_some()
    }
}
