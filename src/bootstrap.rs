//! Wires adapters, handlers and the router from configuration.

use std::sync::Arc;
use std::time::Duration;

use axum::Router;
use tracing::info;

use crate::adapters::events::{InMemoryEventBus, TracingEventPublisher};
use crate::adapters::http::{router, ApiDependencies, ApiHandlers, RouterOptions};
use crate::adapters::storage::{
    FileJournalStore, InMemoryDraftRepository, InMemoryJournalRepository,
    InMemoryMoodRepository, InMemoryWizardStore,
};
use crate::config::{AppConfig, StorageBackend, ValidationError};
use crate::domain::reflection::PromptSet;
use crate::ports::{DraftRepository, JournalRepository, MoodRepository};

/// Builds the application router for `config`.
pub fn build_app(config: &AppConfig) -> Result<Router, ValidationError> {
    let (journal, drafts, moods) = repositories(config)?;

    let events = Arc::new(TracingEventPublisher::new(Arc::new(InMemoryEventBus::new())));

    let handlers = ApiHandlers::new(ApiDependencies {
        wizards: Arc::new(InMemoryWizardStore::new()),
        journal,
        drafts,
        moods,
        events,
        prompts: PromptSet::standard(),
        policy: config.wizard.policy(),
        offer_drafts: config.wizard.offer_drafts,
    });

    let options = RouterOptions {
        request_timeout: Duration::from_secs(config.server.request_timeout_secs),
        cors_origins: config.server.cors_origins_list(),
    };

    Ok(router(handlers, &options))
}

type Repositories = (
    Arc<dyn JournalRepository>,
    Arc<dyn DraftRepository>,
    Arc<dyn MoodRepository>,
);

fn repositories(config: &AppConfig) -> Result<Repositories, ValidationError> {
    match config.storage.backend {
        StorageBackend::Memory => {
            info!("Using in-memory journal storage");
            let journal: Arc<dyn JournalRepository> = Arc::new(InMemoryJournalRepository::new());
            let drafts: Arc<dyn DraftRepository> = Arc::new(InMemoryDraftRepository::new());
            let moods: Arc<dyn MoodRepository> = Arc::new(InMemoryMoodRepository::new());
            Ok((journal, drafts, moods))
        }
        StorageBackend::File => {
            let dir = config
                .storage
                .data_dir
                .clone()
                .ok_or(ValidationError::MissingDataDir)?;
            info!(data_dir = %dir.display(), "Using file journal storage");
            // One store serves all three ports
            let store = Arc::new(FileJournalStore::new(dir));
            let journal: Arc<dyn JournalRepository> = store.clone();
            let drafts: Arc<dyn DraftRepository> = store.clone();
            let moods: Arc<dyn MoodRepository> = store;
            Ok((journal, drafts, moods))
        }
    }
}
