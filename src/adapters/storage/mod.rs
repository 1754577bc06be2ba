//! Storage Adapters
//!
//! Implementations of the repository ports.
//!
//! ## Available Adapters
//!
//! - **FileJournalStore** - Entries, drafts and moods as YAML files on disk
//! - **InMemory\*** - Process-memory stores (wizards, development, tests)
//!
//! ## Usage
//!
//! ```ignore
//! use adapters::storage::{FileJournalStore, InMemoryWizardStore};
//!
//! // Persistent journal
//! let journal = Arc::new(FileJournalStore::new("./data/journal"));
//!
//! // Wizards are always transient
//! let wizards = Arc::new(InMemoryWizardStore::new());
//! ```

mod file_journal_store;
mod in_memory;

pub use file_journal_store::{FileJournalStore, FileStoreError};
pub use in_memory::{
    InMemoryDraftRepository, InMemoryJournalRepository, InMemoryMoodRepository,
    InMemoryWizardStore,
};
