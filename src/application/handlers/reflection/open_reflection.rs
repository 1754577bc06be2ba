//! OpenReflectionHandler - Command handler for starting a reflection.

use std::sync::Arc;

use crate::domain::foundation::{CommandMetadata, EventId, SerializableDomainEvent, UserId};
use crate::domain::reflection::{
    PromptSet, ReflectionError, ReflectionOpened, ReflectionWizard, ValidationPolicy,
};
use crate::ports::{EventPublisher, WizardStore};

use super::ReflectionView;

/// Command to open (or restart) the user's reflection wizard.
#[derive(Debug, Clone)]
pub struct OpenReflectionCommand {
    pub user_id: UserId,
}

#[derive(Debug, Clone)]
pub struct OpenReflectionResult {
    pub view: ReflectionView,
    pub event: ReflectionOpened,
}

/// Handler for opening reflections.
///
/// Opening always starts from step 0 with empty answers, replacing any
/// wizard the user already had in flight.
pub struct OpenReflectionHandler {
    store: Arc<dyn WizardStore>,
    event_publisher: Arc<dyn EventPublisher>,
    prompts: PromptSet,
    policy: ValidationPolicy,
}

impl OpenReflectionHandler {
    pub fn new(
        store: Arc<dyn WizardStore>,
        event_publisher: Arc<dyn EventPublisher>,
        prompts: PromptSet,
        policy: ValidationPolicy,
    ) -> Self {
        Self {
            store,
            event_publisher,
            prompts,
            policy,
        }
    }

    pub async fn handle(
        &self,
        cmd: OpenReflectionCommand,
        metadata: CommandMetadata,
    ) -> Result<OpenReflectionResult, ReflectionError> {
        let mut wizard = ReflectionWizard::new(self.prompts.clone(), self.policy);
        let reflection_id = wizard.open();

        self.store.save(&cmd.user_id, &wizard).await?;

        let event = ReflectionOpened {
            event_id: EventId::new(),
            reflection_id,
            user_id: cmd.user_id,
            question_count: wizard.question_count(),
            strict: self.policy.is_strict(),
            opened_at: wizard.opened_at().unwrap_or_default(),
        };
        let envelope = metadata.stamp(event.to_envelope()?);
        self.event_publisher.publish(envelope).await?;

        Ok(OpenReflectionResult {
            view: ReflectionView::from_wizard(&wizard),
            event,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::handlers::test_support::*;
    use crate::domain::foundation::DomainEvent;

    fn handler(
        store: Arc<MockWizardStore>,
        publisher: Arc<MockEventPublisher>,
    ) -> OpenReflectionHandler {
        OpenReflectionHandler::new(
            store,
            publisher,
            PromptSet::standard(),
            ValidationPolicy::strict(),
        )
    }

    #[tokio::test]
    async fn opens_fresh_wizard_and_stores_it() {
        let store = Arc::new(MockWizardStore::new());
        let publisher = Arc::new(MockEventPublisher::new());
        let handler = handler(store.clone(), publisher.clone());

        let result = handler
            .handle(
                OpenReflectionCommand {
                    user_id: test_user_id(),
                },
                test_metadata(),
            )
            .await
            .unwrap();

        assert_eq!(result.view.current_step, 0);
        assert_eq!(result.view.question_count, 7);
        assert_eq!(result.event.event_type(), "reflection.opened.v1");

        let stored = store.get(&test_user_id()).unwrap();
        assert!(stored.is_open());
        assert_eq!(stored.id(), result.view.reflection_id);
    }

    #[tokio::test]
    async fn reopening_discards_previous_progress() {
        let mut existing = ReflectionWizard::new(PromptSet::standard(), ValidationPolicy::strict());
        existing.open();
        existing.set_answer(0, "anxious").unwrap();
        existing.advance().unwrap();
        let store = Arc::new(MockWizardStore::with_wizard(test_user_id(), existing.clone()));
        let publisher = Arc::new(MockEventPublisher::new());

        let result = handler(store.clone(), publisher)
            .handle(
                OpenReflectionCommand {
                    user_id: test_user_id(),
                },
                test_metadata(),
            )
            .await
            .unwrap();

        assert_ne!(result.view.reflection_id, existing.id());
        let stored = store.get(&test_user_id()).unwrap();
        assert_eq!(stored.current_step(), 0);
        assert!(!stored.has_content());
    }

    #[tokio::test]
    async fn publishes_stamped_event() {
        let store = Arc::new(MockWizardStore::new());
        let publisher = Arc::new(MockEventPublisher::new());

        handler(store, publisher.clone())
            .handle(
                OpenReflectionCommand {
                    user_id: test_user_id(),
                },
                test_metadata(),
            )
            .await
            .unwrap();

        let events = publisher.published_events();
        assert_eq!(events.len(), 1);
        assert_eq!(
            events[0].metadata.correlation_id.as_deref(),
            Some("test-correlation")
        );
        assert_eq!(events[0].metadata.user_id.as_deref(), Some("test-user-123"));
    }
}
