//! ProgressStats - aggregate numbers over a user's journal.

use std::collections::HashSet;

use serde::Serialize;

use super::JournalEntry;
use crate::domain::reflection::ReflectionPath;

/// Read-only summary computed from completed entries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct ProgressStats {
    pub total_sessions: usize,
    /// Sum of answers that are non-empty after trimming.
    pub total_thoughts: usize,
    pub accept_count: usize,
    pub fight_count: usize,
    /// Distinct UTC calendar days with at least one entry.
    pub active_days: usize,
}

impl ProgressStats {
    pub fn from_entries<'a, I>(entries: I) -> Self
    where
        I: IntoIterator<Item = &'a JournalEntry>,
    {
        let mut stats = ProgressStats::default();
        let mut days = HashSet::new();

        for entry in entries {
            stats.total_sessions += 1;
            stats.total_thoughts += entry.answered_count();
            if entry.path == ReflectionPath::Accept {
                stats.accept_count += 1;
            }
            days.insert(entry.created_at.day());
        }

        stats.fight_count = stats.total_sessions - stats.accept_count;
        stats.active_days = days.len();
        stats
    }

    pub fn is_empty(&self) -> bool {
        self.total_sessions == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::foundation::{ReflectionId, Timestamp, UserId};
    use crate::domain::reflection::CompletedSession;
    use chrono::{DateTime, Utc};

    fn at(s: &str) -> Timestamp {
        Timestamp::from_datetime(DateTime::parse_from_rfc3339(s).unwrap().with_timezone(&Utc))
    }

    fn entry(path: ReflectionPath, answers: &[&str], created_at: Timestamp) -> JournalEntry {
        JournalEntry::from_completed(
            UserId::new("user-1").unwrap(),
            ReflectionId::new(),
            CompletedSession {
                path,
                answers: answers.iter().map(|a| a.to_string()).collect(),
                questions: answers.iter().map(|_| "q".to_string()).collect(),
            },
            created_at,
        )
    }

    #[test]
    fn empty_history_is_all_zero() {
        let stats = ProgressStats::from_entries(&Vec::<JournalEntry>::new());
        assert_eq!(stats, ProgressStats::default());
        assert!(stats.is_empty());
    }

    #[test]
    fn counts_paths_thoughts_and_days() {
        let entries = vec![
            entry(ReflectionPath::Accept, &["a", "b", " "], at("2025-03-01T08:00:00Z")),
            entry(ReflectionPath::Fight, &["a", "", ""], at("2025-03-01T22:00:00Z")),
            entry(ReflectionPath::Accept, &["a", "b", "c"], at("2025-03-03T12:00:00Z")),
        ];

        let stats = ProgressStats::from_entries(&entries);

        assert_eq!(stats.total_sessions, 3);
        assert_eq!(stats.total_thoughts, 6);
        assert_eq!(stats.accept_count, 2);
        assert_eq!(stats.fight_count, 1);
        assert_eq!(stats.active_days, 2);
    }
}
