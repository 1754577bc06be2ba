//! CompleteReflectionHandler - Command handler for finishing a reflection.
//!
//! This is the consumer of the wizard's finished record: it takes the
//! wizard out of the store, files the record as a journal entry and
//! announces completion.

use std::sync::Arc;

use tracing::info;

use crate::domain::foundation::{
    CommandMetadata, EventId, SerializableDomainEvent, Timestamp, UserId,
};
use crate::domain::journal::JournalEntry;
use crate::domain::reflection::{ReflectionCompleted, ReflectionError};
use crate::ports::{EventPublisher, JournalRepository, WizardStore};

use super::{restore_wizard, take_wizard};

#[derive(Debug, Clone)]
pub struct CompleteReflectionCommand {
    pub user_id: UserId,
}

#[derive(Debug, Clone)]
pub struct CompleteReflectionResult {
    pub entry: JournalEntry,
    pub event: ReflectionCompleted,
}

pub struct CompleteReflectionHandler {
    store: Arc<dyn WizardStore>,
    journal: Arc<dyn JournalRepository>,
    event_publisher: Arc<dyn EventPublisher>,
}

impl CompleteReflectionHandler {
    pub fn new(
        store: Arc<dyn WizardStore>,
        journal: Arc<dyn JournalRepository>,
        event_publisher: Arc<dyn EventPublisher>,
    ) -> Self {
        Self {
            store,
            journal,
            event_publisher,
        }
    }

    pub async fn handle(
        &self,
        cmd: CompleteReflectionCommand,
        metadata: CommandMetadata,
    ) -> Result<CompleteReflectionResult, ReflectionError> {
        // 1. Take the wizard out, finishing a copy of it
        let (wizard, session) = take_wizard(self.store.as_ref(), &cmd.user_id, |mut wizard| {
            wizard.complete().map_err(ReflectionError::from)
        })
        .await?;
        let reflection_id = wizard.id();

        // 2. File the record; a failed save puts the wizard back on the
        //    path step
        let now = Timestamp::now();
        let entry = JournalEntry::from_completed(cmd.user_id.clone(), reflection_id, session, now);
        if let Err(err) = self.journal.save(&entry).await {
            restore_wizard(self.store.as_ref(), &cmd.user_id, wizard).await?;
            return Err(err.into());
        }

        // 3. Publish event
        let event = ReflectionCompleted {
            event_id: EventId::new(),
            reflection_id,
            entry_id: entry.id,
            user_id: cmd.user_id,
            path: entry.path,
            answered_count: entry.answered_count(),
            completed_at: now,
        };
        let envelope = metadata.stamp(event.to_envelope()?);
        self.event_publisher.publish(envelope).await?;

        info!(
            entry_id = %entry.id,
            path = %entry.path,
            answered = entry.answered_count(),
            "Reflection completed"
        );

        Ok(CompleteReflectionResult { entry, event })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::handlers::test_support::*;
    use crate::domain::foundation::ErrorCode;
    use crate::domain::reflection::{
        PromptSet, ReflectionPath, ReflectionWizard, ValidationPolicy, WizardError,
    };

    fn finished_wizard(path: ReflectionPath) -> ReflectionWizard {
        let mut wizard = ReflectionWizard::new(PromptSet::standard(), ValidationPolicy::strict());
        wizard.open();
        for step in 0..wizard.question_count() {
            wizard.set_answer(step, format!("thought {}", step)).unwrap();
            wizard.advance().unwrap();
        }
        wizard.set_path(path).unwrap();
        wizard
    }

    fn command() -> CompleteReflectionCommand {
        CompleteReflectionCommand {
            user_id: test_user_id(),
        }
    }

    #[tokio::test]
    async fn files_entry_and_drops_wizard() {
        let wizard = finished_wizard(ReflectionPath::Fight);
        let reflection_id = wizard.id();
        let store = Arc::new(MockWizardStore::with_wizard(test_user_id(), wizard));
        let journal = Arc::new(MockJournalRepository::new());
        let publisher = Arc::new(MockEventPublisher::new());
        let handler = CompleteReflectionHandler::new(store.clone(), journal.clone(), publisher.clone());

        let result = handler.handle(command(), test_metadata()).await.unwrap();

        assert_eq!(result.entry.path, ReflectionPath::Fight);
        assert_eq!(result.entry.answers.len(), 7);
        assert_eq!(result.entry.questions, PromptSet::standard().to_vec());
        assert_eq!(result.entry.reflection_id, reflection_id);
        assert_eq!(journal.entries().len(), 1);
        assert!(store.get(&test_user_id()).is_none());

        assert_eq!(publisher.event_types(), vec!["reflection.completed.v1"]);
        let payload = &publisher.published_events()[0].payload;
        assert_eq!(payload["path"], "fight");
        assert_eq!(payload["answered_count"], 7);
    }

    #[tokio::test]
    async fn refuses_before_path_step() {
        let mut wizard = ReflectionWizard::new(PromptSet::standard(), ValidationPolicy::strict());
        wizard.open();
        let store = Arc::new(MockWizardStore::with_wizard(test_user_id(), wizard));
        let journal = Arc::new(MockJournalRepository::new());
        let publisher = Arc::new(MockEventPublisher::new());
        let handler = CompleteReflectionHandler::new(store.clone(), journal.clone(), publisher.clone());

        let err = handler.handle(command(), test_metadata()).await.unwrap_err();

        assert_eq!(
            err,
            ReflectionError::Wizard(WizardError::NotFinished {
                current: 0,
                final_step: 7
            })
        );
        assert!(journal.entries().is_empty());
        assert!(publisher.published_events().is_empty());
        assert!(store.get(&test_user_id()).unwrap().is_open());
    }

    #[tokio::test]
    async fn storage_failure_keeps_wizard_on_path_step() {
        let store = Arc::new(MockWizardStore::with_wizard(
            test_user_id(),
            finished_wizard(ReflectionPath::Accept),
        ));
        let journal = Arc::new(MockJournalRepository::failing());
        let publisher = Arc::new(MockEventPublisher::new());
        let handler = CompleteReflectionHandler::new(store.clone(), journal, publisher.clone());

        let err = handler.handle(command(), test_metadata()).await.unwrap_err();

        assert_eq!(err.code(), ErrorCode::StorageError);
        let wizard = store.get(&test_user_id()).unwrap();
        assert!(wizard.can_complete());
        assert!(publisher.published_events().is_empty());
    }

    #[tokio::test]
    async fn concurrent_completes_file_a_single_entry() {
        let store = Arc::new(MockWizardStore::yielding(
            test_user_id(),
            finished_wizard(ReflectionPath::Accept),
        ));
        let journal = Arc::new(MockJournalRepository::new());
        let publisher = Arc::new(MockEventPublisher::new());
        let handler = CompleteReflectionHandler::new(store.clone(), journal.clone(), publisher.clone());

        let (a, b) = tokio::join!(
            handler.handle(command(), test_metadata()),
            handler.handle(command(), test_metadata())
        );

        let errors: Vec<_> = [a, b].into_iter().filter_map(Result::err).collect();
        assert_eq!(errors, vec![ReflectionError::NotFound]);
        assert_eq!(journal.entries().len(), 1);
        assert_eq!(publisher.event_types(), vec!["reflection.completed.v1"]);
        assert!(store.get(&test_user_id()).is_none());
    }
}
