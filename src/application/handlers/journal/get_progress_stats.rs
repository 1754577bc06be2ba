//! GetProgressStatsHandler - Query handler for the progress screen.

use std::sync::Arc;

use crate::domain::foundation::UserId;
use crate::domain::journal::{JournalError, ProgressStats};
use crate::ports::JournalRepository;

#[derive(Debug, Clone)]
pub struct GetProgressStatsQuery {
    pub user_id: UserId,
}

pub struct GetProgressStatsHandler {
    journal: Arc<dyn JournalRepository>,
}

impl GetProgressStatsHandler {
    pub fn new(journal: Arc<dyn JournalRepository>) -> Self {
        Self { journal }
    }

    pub async fn handle(&self, query: GetProgressStatsQuery) -> Result<ProgressStats, JournalError> {
        let entries = self.journal.list_by_user(&query.user_id).await?;
        Ok(ProgressStats::from_entries(&entries))
    }
}
