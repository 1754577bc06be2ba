//! Hand-written port doubles shared by the handler tests.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Mutex;

use crate::domain::foundation::{
    CommandMetadata, DomainError, DraftId, EntryId, EventEnvelope, UserId,
};
use crate::domain::journal::{Draft, JournalEntry};
use crate::domain::mood::MoodCheckIn;
use crate::domain::reflection::ReflectionWizard;
use crate::ports::{
    DraftRepository, EventPublisher, JournalRepository, MoodRepository, WizardEdit, WizardStore,
};

pub fn test_user_id() -> UserId {
    UserId::new("test-user-123").unwrap()
}

pub fn other_user_id() -> UserId {
    UserId::new("someone-else").unwrap()
}

pub fn test_metadata() -> CommandMetadata {
    CommandMetadata::new(test_user_id()).with_correlation_id("test-correlation")
}

/// Wizard store double. A `yielding` store hands control back to the
/// executor before every call, so requests joined on one task interleave
/// the way concurrent requests do.
#[derive(Default)]
pub struct MockWizardStore {
    wizards: Mutex<HashMap<UserId, ReflectionWizard>>,
    yield_first: bool,
}

impl MockWizardStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_wizard(user_id: UserId, wizard: ReflectionWizard) -> Self {
        let store = Self::default();
        store.wizards.lock().unwrap().insert(user_id, wizard);
        store
    }

    pub fn yielding(user_id: UserId, wizard: ReflectionWizard) -> Self {
        Self {
            yield_first: true,
            ..Self::with_wizard(user_id, wizard)
        }
    }

    pub fn get(&self, user_id: &UserId) -> Option<ReflectionWizard> {
        self.wizards.lock().unwrap().get(user_id).cloned()
    }

    async fn pause(&self) {
        if self.yield_first {
            tokio::task::yield_now().await;
        }
    }
}

#[async_trait]
impl WizardStore for MockWizardStore {
    async fn load(&self, user_id: &UserId) -> Result<Option<ReflectionWizard>, DomainError> {
        self.pause().await;
        Ok(self.get(user_id))
    }

    async fn save(&self, user_id: &UserId, wizard: &ReflectionWizard) -> Result<(), DomainError> {
        self.pause().await;
        self.wizards
            .lock()
            .unwrap()
            .insert(user_id.clone(), wizard.clone());
        Ok(())
    }

    async fn modify(&self, user_id: &UserId, edit: WizardEdit<'_>) -> Result<(), DomainError> {
        self.pause().await;
        let mut wizards = self.wizards.lock().unwrap();
        let mut slot = wizards.remove(user_id);
        edit(&mut slot);
        if let Some(wizard) = slot {
            wizards.insert(user_id.clone(), wizard);
        }
        Ok(())
    }
}

#[derive(Default)]
pub struct MockJournalRepository {
    entries: Mutex<Vec<JournalEntry>>,
    fail_on_save: bool,
}

impl MockJournalRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_entries(entries: Vec<JournalEntry>) -> Self {
        Self {
            entries: Mutex::new(entries),
            fail_on_save: false,
        }
    }

    pub fn failing() -> Self {
        Self {
            entries: Mutex::new(Vec::new()),
            fail_on_save: true,
        }
    }

    pub fn entries(&self) -> Vec<JournalEntry> {
        self.entries.lock().unwrap().clone()
    }
}

#[async_trait]
impl JournalRepository for MockJournalRepository {
    async fn save(&self, entry: &JournalEntry) -> Result<(), DomainError> {
        if self.fail_on_save {
            return Err(DomainError::storage("simulated failure"));
        }
        self.entries.lock().unwrap().push(entry.clone());
        Ok(())
    }

    async fn find_by_id(&self, id: &EntryId) -> Result<Option<JournalEntry>, DomainError> {
        Ok(self.entries().into_iter().find(|e| &e.id == id))
    }

    async fn list_by_user(&self, user_id: &UserId) -> Result<Vec<JournalEntry>, DomainError> {
        let mut entries: Vec<_> = self
            .entries()
            .into_iter()
            .filter(|e| e.is_owned_by(user_id))
            .collect();
        entries.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(entries)
    }
}

#[derive(Default)]
pub struct MockDraftRepository {
    drafts: Mutex<Vec<Draft>>,
}

impl MockDraftRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_drafts(drafts: Vec<Draft>) -> Self {
        Self {
            drafts: Mutex::new(drafts),
        }
    }

    pub fn drafts(&self) -> Vec<Draft> {
        self.drafts.lock().unwrap().clone()
    }
}

#[async_trait]
impl DraftRepository for MockDraftRepository {
    async fn save(&self, draft: &Draft) -> Result<(), DomainError> {
        self.drafts.lock().unwrap().push(draft.clone());
        Ok(())
    }

    async fn find_by_id(&self, id: &DraftId) -> Result<Option<Draft>, DomainError> {
        Ok(self.drafts().into_iter().find(|d| &d.id == id))
    }

    async fn list_by_user(&self, user_id: &UserId) -> Result<Vec<Draft>, DomainError> {
        let mut drafts: Vec<_> = self
            .drafts()
            .into_iter()
            .filter(|d| d.is_owned_by(user_id))
            .collect();
        drafts.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(drafts)
    }

    async fn count_by_user(&self, user_id: &UserId) -> Result<usize, DomainError> {
        Ok(self.drafts().iter().filter(|d| d.is_owned_by(user_id)).count())
    }

    async fn delete(&self, id: &DraftId) -> Result<(), DomainError> {
        self.drafts.lock().unwrap().retain(|d| &d.id != id);
        Ok(())
    }
}

#[derive(Default)]
pub struct MockMoodRepository {
    moods: Mutex<HashMap<UserId, MoodCheckIn>>,
}

impl MockMoodRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl MoodRepository for MockMoodRepository {
    async fn load(&self, user_id: &UserId) -> Result<Option<MoodCheckIn>, DomainError> {
        Ok(self.moods.lock().unwrap().get(user_id).cloned())
    }

    async fn save(&self, check_in: &MoodCheckIn) -> Result<(), DomainError> {
        self.moods
            .lock()
            .unwrap()
            .insert(check_in.user_id().clone(), check_in.clone());
        Ok(())
    }
}

#[derive(Default)]
pub struct MockEventPublisher {
    published_events: Mutex<Vec<EventEnvelope>>,
}

impl MockEventPublisher {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn published_events(&self) -> Vec<EventEnvelope> {
        self.published_events.lock().unwrap().clone()
    }

    pub fn event_types(&self) -> Vec<String> {
        self.published_events()
            .into_iter()
            .map(|e| e.event_type)
            .collect()
    }
}

#[async_trait]
impl EventPublisher for MockEventPublisher {
    async fn publish(&self, event: EventEnvelope) -> Result<(), DomainError> {
        self.published_events.lock().unwrap().push(event);
        Ok(())
    }

    async fn publish_all(&self, events: Vec<EventEnvelope>) -> Result<(), DomainError> {
        for event in events {
            self.publish(event).await?;
        }
        Ok(())
    }
}
