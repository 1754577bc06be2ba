//! GetEntryHandler - Query handler for one journal entry (the recap).

use std::sync::Arc;

use crate::domain::foundation::{EntryId, UserId};
use crate::domain::journal::{JournalEntry, JournalError};
use crate::ports::JournalRepository;

#[derive(Debug, Clone)]
pub struct GetEntryQuery {
    pub entry_id: EntryId,
    pub user_id: UserId,
}

pub struct GetEntryHandler {
    journal: Arc<dyn JournalRepository>,
}

impl GetEntryHandler {
    pub fn new(journal: Arc<dyn JournalRepository>) -> Self {
        Self { journal }
    }

    pub async fn handle(&self, query: GetEntryQuery) -> Result<JournalEntry, JournalError> {
        let entry = self
            .journal
            .find_by_id(&query.entry_id)
            .await?
            .ok_or_else(|| JournalError::entry_not_found(query.entry_id))?;

        if !entry.is_owned_by(&query.user_id) {
            return Err(JournalError::forbidden());
        }

        Ok(entry)
    }
}
