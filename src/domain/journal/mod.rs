//! Journal domain module.
//!
//! Finished reflections become [`JournalEntry`] values; cancelled ones the
//! user kept become [`Draft`] values. [`ProgressStats`] summarises a history.

mod draft;
mod entry;
mod errors;
mod stats;

pub use draft::{draft_count_label, Draft};
pub use entry::JournalEntry;
pub use errors::JournalError;
pub use stats::ProgressStats;
