//! ListDraftsHandler - Query handler for saved drafts.

use std::sync::Arc;

use serde::Serialize;

use crate::domain::foundation::UserId;
use crate::domain::journal::{draft_count_label, Draft, JournalError};
use crate::ports::DraftRepository;

#[derive(Debug, Clone)]
pub struct ListDraftsQuery {
    pub user_id: UserId,
}

#[derive(Debug, Clone, Serialize)]
pub struct DraftList {
    /// Newest first.
    pub drafts: Vec<Draft>,
    pub count: usize,
    /// "1 draft saved" / "N drafts saved".
    pub label: String,
}

pub struct ListDraftsHandler {
    drafts: Arc<dyn DraftRepository>,
}

impl ListDraftsHandler {
    pub fn new(drafts: Arc<dyn DraftRepository>) -> Self {
        Self { drafts }
    }

    pub async fn handle(&self, query: ListDraftsQuery) -> Result<DraftList, JournalError> {
        let drafts = self.drafts.list_by_user(&query.user_id).await?;
        let count = drafts.len();
        Ok(DraftList {
            drafts,
            count,
            label: draft_count_label(count),
        })
    }
}
