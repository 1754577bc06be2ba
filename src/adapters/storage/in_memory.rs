//! In-Memory Storage Adapters
//!
//! Keep wizards, entries, drafts and moods in process memory. The wizard
//! store is always in memory; the others back the `memory` storage backend
//! and the tests.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::domain::foundation::{DomainError, DraftId, EntryId, ErrorCode, UserId};
use crate::domain::journal::{Draft, JournalEntry};
use crate::domain::mood::MoodCheckIn;
use crate::domain::reflection::ReflectionWizard;
use crate::ports::{DraftRepository, JournalRepository, MoodRepository, WizardEdit, WizardStore};

// ════════════════════════════════════════════════════════════════════════════
// Wizards
// ════════════════════════════════════════════════════════════════════════════

/// In-flight wizards keyed by user.
#[derive(Debug, Clone, Default)]
pub struct InMemoryWizardStore {
    wizards: Arc<RwLock<HashMap<UserId, ReflectionWizard>>>,
}

impl InMemoryWizardStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of users with a wizard in flight.
    pub async fn len(&self) -> usize {
        self.wizards.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.wizards.read().await.is_empty()
    }
}

#[async_trait]
impl WizardStore for InMemoryWizardStore {
    async fn load(&self, user_id: &UserId) -> Result<Option<ReflectionWizard>, DomainError> {
        Ok(self.wizards.read().await.get(user_id).cloned())
    }

    async fn save(&self, user_id: &UserId, wizard: &ReflectionWizard) -> Result<(), DomainError> {
        self.wizards
            .write()
            .await
            .insert(user_id.clone(), wizard.clone());
        Ok(())
    }

    async fn modify(&self, user_id: &UserId, edit: WizardEdit<'_>) -> Result<(), DomainError> {
        let mut wizards = self.wizards.write().await;
        let mut slot = wizards.remove(user_id);
        edit(&mut slot);
        if let Some(wizard) = slot {
            wizards.insert(user_id.clone(), wizard);
        }
        Ok(())
    }
}

// ════════════════════════════════════════════════════════════════════════════
// Journal entries
// ════════════════════════════════════════════════════════════════════════════

#[derive(Debug, Clone, Default)]
pub struct InMemoryJournalRepository {
    entries: Arc<RwLock<HashMap<EntryId, JournalEntry>>>,
}

impl InMemoryJournalRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn clear(&self) {
        self.entries.write().await.clear();
    }
}

#[async_trait]
impl JournalRepository for InMemoryJournalRepository {
    async fn save(&self, entry: &JournalEntry) -> Result<(), DomainError> {
        self.entries.write().await.insert(entry.id, entry.clone());
        Ok(())
    }

    async fn find_by_id(&self, id: &EntryId) -> Result<Option<JournalEntry>, DomainError> {
        Ok(self.entries.read().await.get(id).cloned())
    }

    async fn list_by_user(&self, user_id: &UserId) -> Result<Vec<JournalEntry>, DomainError> {
        let mut entries: Vec<JournalEntry> = self
            .entries
            .read()
            .await
            .values()
            .filter(|e| e.is_owned_by(user_id))
            .cloned()
            .collect();
        entries.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(entries)
    }
}

// ════════════════════════════════════════════════════════════════════════════
// Drafts
// ════════════════════════════════════════════════════════════════════════════

#[derive(Debug, Clone, Default)]
pub struct InMemoryDraftRepository {
    drafts: Arc<RwLock<HashMap<DraftId, Draft>>>,
}

impl InMemoryDraftRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl DraftRepository for InMemoryDraftRepository {
    async fn save(&self, draft: &Draft) -> Result<(), DomainError> {
        self.drafts.write().await.insert(draft.id, draft.clone());
        Ok(())
    }

    async fn find_by_id(&self, id: &DraftId) -> Result<Option<Draft>, DomainError> {
        Ok(self.drafts.read().await.get(id).cloned())
    }

    async fn list_by_user(&self, user_id: &UserId) -> Result<Vec<Draft>, DomainError> {
        let mut drafts: Vec<Draft> = self
            .drafts
            .read()
            .await
            .values()
            .filter(|d| d.is_owned_by(user_id))
            .cloned()
            .collect();
        drafts.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(drafts)
    }

    async fn count_by_user(&self, user_id: &UserId) -> Result<usize, DomainError> {
        Ok(self
            .drafts
            .read()
            .await
            .values()
            .filter(|d| d.is_owned_by(user_id))
            .count())
    }

    async fn delete(&self, id: &DraftId) -> Result<(), DomainError> {
        match self.drafts.write().await.remove(id) {
            Some(_) => Ok(()),
            None => Err(DomainError::new(
                ErrorCode::DraftNotFound,
                format!("Draft not found: {}", id),
            )),
        }
    }
}

// ════════════════════════════════════════════════════════════════════════════
// Moods
// ════════════════════════════════════════════════════════════════════════════

#[derive(Debug, Clone, Default)]
pub struct InMemoryMoodRepository {
    moods: Arc<RwLock<HashMap<UserId, MoodCheckIn>>>,
}

impl InMemoryMoodRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl MoodRepository for InMemoryMoodRepository {
    async fn load(&self, user_id: &UserId) -> Result<Option<MoodCheckIn>, DomainError> {
        Ok(self.moods.read().await.get(user_id).cloned())
    }

    async fn save(&self, check_in: &MoodCheckIn) -> Result<(), DomainError> {
        self.moods
            .write()
            .await
            .insert(check_in.user_id().clone(), check_in.clone());
        Ok(())
    }
}
