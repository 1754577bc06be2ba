//! Journal repository port.
//!
//! Completed entries are append-only; there is no update or delete.

use async_trait::async_trait;

use crate::domain::foundation::{DomainError, EntryId, UserId};
use crate::domain::journal::JournalEntry;

#[async_trait]
pub trait JournalRepository: Send + Sync {
    /// Save a new entry.
    ///
    /// # Errors
    ///
    /// - `StorageError` on persistence failure
    async fn save(&self, entry: &JournalEntry) -> Result<(), DomainError>;

    /// Find an entry by ID. Returns `None` if not found.
    async fn find_by_id(&self, id: &EntryId) -> Result<Option<JournalEntry>, DomainError>;

    /// All entries owned by a user, newest first.
    async fn list_by_user(&self, user_id: &UserId) -> Result<Vec<JournalEntry>, DomainError>;
}
