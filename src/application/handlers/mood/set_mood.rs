//! SetMoodHandler - Command handler for a mood check-in.

use std::sync::Arc;

use crate::domain::foundation::{CommandMetadata, EventId, SerializableDomainEvent, Timestamp, UserId};
use crate::domain::mood::{Feeling, MoodCheckIn, MoodError, MoodUpdated};
use crate::ports::{EventPublisher, MoodRepository};

#[derive(Debug, Clone)]
pub struct SetMoodCommand {
    pub user_id: UserId,
    pub feeling: Feeling,
}

pub struct SetMoodHandler {
    repository: Arc<dyn MoodRepository>,
    event_publisher: Arc<dyn EventPublisher>,
}

impl SetMoodHandler {
    pub fn new(
        repository: Arc<dyn MoodRepository>,
        event_publisher: Arc<dyn EventPublisher>,
    ) -> Self {
        Self {
            repository,
            event_publisher,
        }
    }

    pub async fn handle(
        &self,
        cmd: SetMoodCommand,
        metadata: CommandMetadata,
    ) -> Result<MoodCheckIn, MoodError> {
        let mut check_in = self
            .repository
            .load(&cmd.user_id)
            .await?
            .unwrap_or_else(|| MoodCheckIn::empty(cmd.user_id.clone()));
        let previous = check_in.feeling();
        let now = Timestamp::now();

        check_in.set(cmd.feeling, now);
        self.repository.save(&check_in).await?;

        let event = MoodUpdated {
            event_id: EventId::new(),
            user_id: cmd.user_id,
            feeling: cmd.feeling,
            previous,
            updated_at: now,
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

    #[tokio::test]
    async fn replaces_previous_mood() {
        let repo = Arc::new(MockMoodRepository::new());
        let publisher = Arc::new(MockEventPublisher::new());
        let handler = SetMoodHandler::new(repo.clone(), publisher.clone());

        for feeling in [Feeling::Worried, Feeling::Calm] {
            handler
                .handle(
                    SetMoodCommand {
                        user_id: test_user_id(),
                        feeling,
                    },
                    test_metadata(),
                )
                .await
                .unwrap();
        }

        let stored = repo.load(&test_user_id()).await.unwrap().unwrap();
        assert_eq!(stored.feeling(), Some(Feeling::Calm));

        let events = publisher.published_events();
        assert_eq!(events.len(), 2);
        assert_eq!(events[1].payload["previous"], "Worried");
    }
}
