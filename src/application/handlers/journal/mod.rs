//! Journal and draft query/command handlers.

mod delete_draft;
mod get_entry;
mod get_progress_stats;
mod list_drafts;
mod list_entries;

pub use delete_draft::{DeleteDraftCommand, DeleteDraftHandler};
pub use get_entry::{GetEntryHandler, GetEntryQuery};
pub use get_progress_stats::{GetProgressStatsHandler, GetProgressStatsQuery};
pub use list_drafts::{DraftList, ListDraftsHandler, ListDraftsQuery};
pub use list_entries::{ListEntriesHandler, ListEntriesQuery};

#[cfg(test)]
use crate::domain::{
    foundation::{ReflectionId, Timestamp, UserId},
    journal::{Draft, JournalEntry},
    reflection::{CompletedSession, DraftSnapshot, ReflectionPath},
};

/// Accept entry with two answered prompts, offset `hours_from_now` hours.
#[cfg(test)]
fn test_entry(user_id: UserId, hours_from_now: i64) -> JournalEntry {
    JournalEntry::from_completed(
        user_id,
        ReflectionId::new(),
        CompletedSession {
            path: ReflectionPath::Accept,
            answers: vec!["worried".into(), "deadline".into(), "".into()],
            questions: vec!["feel?".into(), "happened?".into(), "fact?".into()],
        },
        Timestamp::now().plus_hours(hours_from_now),
    )
}

#[cfg(test)]
fn test_draft(user_id: UserId) -> Draft {
    Draft::from_snapshot(
        user_id,
        ReflectionId::new(),
        DraftSnapshot {
            path: ReflectionPath::Accept,
            answers: vec!["tense".into(), "".into()],
            questions: vec!["feel?".into(), "happened?".into()],
            current_step: 1,
        },
        Timestamp::now(),
    )
}
