//! ClearMoodHandler - Command handler for forgetting the current mood.

use std::sync::Arc;

use crate::domain::foundation::{CommandMetadata, EventId, SerializableDomainEvent, Timestamp, UserId};
use crate::domain::mood::{MoodCheckIn, MoodCleared, MoodError};
use crate::ports::{EventPublisher, MoodRepository};

#[derive(Debug, Clone)]
pub struct ClearMoodCommand {
    pub user_id: UserId,
}

pub struct ClearMoodHandler {
    repository: Arc<dyn MoodRepository>,
    event_publisher: Arc<dyn EventPublisher>,
}

impl ClearMoodHandler {
    pub fn new(
        repository: Arc<dyn MoodRepository>,
        event_publisher: Arc<dyn EventPublisher>,
    ) -> Self {
        Self {
            repository,
            event_publisher,
        }
    }

    /// Clearing a mood that was never set succeeds without publishing.
    pub async fn handle(
        &self,
        cmd: ClearMoodCommand,
        metadata: CommandMetadata,
    ) -> Result<MoodCheckIn, MoodError> {
        let mut check_in = match self.repository.load(&cmd.user_id).await? {
            Some(check_in) if check_in.is_set() => check_in,
            _ => return Ok(MoodCheckIn::empty(cmd.user_id)),
        };

        let previous = check_in.clear();
        self.repository.save(&check_in).await?;

        let event = MoodCleared {
            event_id: EventId::new(),
            user_id: cmd.user_id,
            previous,
            cleared_at: Timestamp::now(),
        };
        self.event_publisher
            .publish(metadata.stamp(event.to_envelope()?))
            .await?;

        Ok(check_in)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::handlers::test_support::*;
    use crate::domain::mood::Feeling;

    #[tokio::test]
    async fn clears_a_set_mood() {
        let repo = Arc::new(MockMoodRepository::new());
        let mut check_in = MoodCheckIn::empty(test_user_id());
        check_in.set(Feeling::Sad, Timestamp::now());
        repo.save(&check_in).await.unwrap();
        let publisher = Arc::new(MockEventPublisher::new());

        let cleared = ClearMoodHandler::new(repo.clone(), publisher.clone())
            .handle(
                ClearMoodCommand {
                    user_id: test_user_id(),
                },
                test_metadata(),
            )
            .await
            .unwrap();

        assert!(!cleared.is_set());
        assert!(!repo.load(&test_user_id()).await.unwrap().unwrap().is_set());
        assert_eq!(publisher.event_types(), vec!["mood.cleared.v1"]);
    }

    #[tokio::test]
    async fn clearing_nothing_publishes_nothing() {
        let publisher = Arc::new(MockEventPublisher::new());

        ClearMoodHandler::new(Arc::new(MockMoodRepository::new()), publisher.clone())
            .handle(
                ClearMoodCommand {
                    user_id: test_user_id(),
                },
                test_metadata(),
            )
            .await
            .unwrap();

        assert!(publisher.published_events().is_empty());
    }
}
