//! GetMoodHandler - Query handler for the current mood.

use std::sync::Arc;

use crate::domain::foundation::UserId;
use crate::domain::mood::{MoodCheckIn, MoodError};
use crate::ports::MoodRepository;

#[derive(Debug, Clone)]
pub struct GetMoodQuery {
    pub user_id: UserId,
}

pub struct GetMoodHandler {
    repository: Arc<dyn MoodRepository>,
}

impl GetMoodHandler {
    pub fn new(repository: Arc<dyn MoodRepository>) -> Self {
        Self { repository }
    }

    /// Users who never checked in get an empty check-in.
    pub async fn handle(&self, query: GetMoodQuery) -> Result<MoodCheckIn, MoodError> {
        Ok(self
            .repository
            .load(&query.user_id)
            .await?
            .unwrap_or_else(|| MoodCheckIn::empty(query.user_id)))
    }
}
