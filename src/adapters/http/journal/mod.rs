//! HTTP adapter for the journal, its progress stats and saved drafts.

mod dto;
mod handlers;
mod routes;

pub use dto::{DraftListResponse, EntryRecapResponse, EntrySummaryResponse, RecapItem};
pub use handlers::JournalHandlers;
pub use routes::{draft_routes, journal_routes};
