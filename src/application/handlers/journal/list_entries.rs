//! ListEntriesHandler - Query handler for a user's journal history.

use std::sync::Arc;

use crate::domain::foundation::UserId;
use crate::domain::journal::{JournalEntry, JournalError};
use crate::ports::JournalRepository;

#[derive(Debug, Clone)]
pub struct ListEntriesQuery {
    pub user_id: UserId,
}

pub struct ListEntriesHandler {
    journal: Arc<dyn JournalRepository>,
}

impl ListEntriesHandler {
    pub fn new(journal: Arc<dyn JournalRepository>) -> Self {
        Self { journal }
    }

    /// Entries newest first.
    pub async fn handle(&self, query: ListEntriesQuery) -> Result<Vec<JournalEntry>, JournalError> {
        Ok(self.journal.list_by_user(&query.user_id).await?)
    }
}
