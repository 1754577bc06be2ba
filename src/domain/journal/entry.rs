//! JournalEntry - a finished reflection kept in the user's history.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::{EntryId, ReflectionId, Timestamp, UserId};
use crate::domain::reflection::{count_answered, CompletedSession, ReflectionPath};

/// A completed reflection owned by one user.
///
/// `questions` and `answers` are index-aligned and never resized.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct JournalEntry {
    pub id: EntryId,
    pub user_id: UserId,
    /// Wizard run that produced this entry.
    pub reflection_id: ReflectionId,
    pub created_at: Timestamp,
    pub path: ReflectionPath,
    pub questions: Vec<String>,
    pub answers: Vec<String>,
}

impl JournalEntry {
    /// Files a finished wizard record under `user_id`.
    pub fn from_completed(
        user_id: UserId,
        reflection_id: ReflectionId,
        session: CompletedSession,
        created_at: Timestamp,
    ) -> Self {
        Self {
            id: EntryId::new(),
            user_id,
            reflection_id,
            created_at,
            path: session.path,
            questions: session.questions,
            answers: session.answers,
        }
    }

    /// Answers that are non-empty after trimming ("thoughts").
    pub fn answered_count(&self) -> usize {
        count_answered(&self.answers)
    }

    /// Question/answer pairs with an actual answer, in prompt order.
    pub fn answered_pairs(&self) -> impl Iterator<Item = (&str, &str)> {
        self.questions
            .iter()
            .zip(self.answers.iter())
            .filter(|(_, a)| !a.trim().is_empty())
            .map(|(q, a)| (q.as_str(), a.as_str()))
    }

    pub fn is_owned_by(&self, user_id: &UserId) -> bool {
        &self.user_id == user_id
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn session() -> CompletedSession {
        CompletedSession {
            path: ReflectionPath::Fight,
            answers: vec!["frustrated".into(), "".into(), "missed a deadline".into()],
            questions: vec!["feel?".into(), "mind?".into(), "happened?".into()],
        }
    }

    #[test]
    fn from_completed_copies_record() {
        let user = UserId::new("user-1").unwrap();
        let entry =
            JournalEntry::from_completed(user.clone(), ReflectionId::new(), session(), Timestamp::now());

        assert_eq!(entry.path, ReflectionPath::Fight);
        assert_eq!(entry.answers.len(), entry.questions.len());
        assert!(entry.is_owned_by(&user));
        assert_eq!(entry.answered_count(), 2);
    }

    #[test]
    fn answered_pairs_skip_blank_answers() {
        let entry = JournalEntry::from_completed(
            UserId::new("user-1").unwrap(),
            ReflectionId::new(),
            session(),
            Timestamp::now(),
        );

        let pairs: Vec<_> = entry.answered_pairs().collect();
        assert_eq!(
            pairs,
            vec![("feel?", "frustrated"), ("happened?", "missed a deadline")]
        );
    }
}
