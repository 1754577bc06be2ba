//! Draft - a cancelled reflection the user chose to keep.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::{DraftId, ReflectionId, Timestamp, UserId};
use crate::domain::reflection::{count_answered, DraftSnapshot, ReflectionPath};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Draft {
    pub id: DraftId,
    pub user_id: UserId,
    pub reflection_id: ReflectionId,
    pub created_at: Timestamp,
    pub path: ReflectionPath,
    pub questions: Vec<String>,
    pub answers: Vec<String>,
    /// Step the wizard was on when it was cancelled.
    pub stopped_at_step: usize,
}

impl Draft {
    pub fn from_snapshot(
        user_id: UserId,
        reflection_id: ReflectionId,
        snapshot: DraftSnapshot,
        created_at: Timestamp,
    ) -> Self {
        Self {
            id: DraftId::new(),
            user_id,
            reflection_id,
            created_at,
            path: snapshot.path,
            questions: snapshot.questions,
            answers: snapshot.answers,
            stopped_at_step: snapshot.current_step,
        }
    }

    pub fn answered_count(&self) -> usize {
        count_answered(&self.answers)
    }

    /// True when every prompt has an answer.
    pub fn is_complete(&self) -> bool {
        self.answered_count() == self.questions.len()
    }

    pub fn is_owned_by(&self, user_id: &UserId) -> bool {
        &self.user_id == user_id
    }
}

/// "1 draft saved" / "N drafts saved".
pub fn draft_count_label(count: usize) -> String {
    let noun = if count == 1 { "draft" } else { "drafts" };
    format!("{} {} saved", count, noun)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn snapshot(answers: &[&str]) -> DraftSnapshot {
        DraftSnapshot {
            path: ReflectionPath::Accept,
            answers: answers.iter().map(|a| a.to_string()).collect(),
            questions: (0..answers.len()).map(|i| format!("q{}", i)).collect(),
            current_step: 1,
        }
    }

    #[test]
    fn partial_draft_is_not_complete() {
        let draft = Draft::from_snapshot(
            UserId::new("user-1").unwrap(),
            ReflectionId::new(),
            snapshot(&["anxious, tense", "work piling up", "", ""]),
            Timestamp::now(),
        );

        assert_eq!(draft.answered_count(), 2);
        assert!(!draft.is_complete());
        assert_eq!(draft.stopped_at_step, 1);
    }

    #[test]
    fn fully_answered_draft_is_complete() {
        let draft = Draft::from_snapshot(
            UserId::new("user-1").unwrap(),
            ReflectionId::new(),
            snapshot(&["a", "b"]),
            Timestamp::now(),
        );
        assert!(draft.is_complete());
    }

    #[test]
    fn draft_label_pluralizes() {
        assert_eq!(draft_count_label(0), "0 drafts saved");
        assert_eq!(draft_count_label(1), "1 draft saved");
        assert_eq!(draft_count_label(2), "2 drafts saved");
    }
}
