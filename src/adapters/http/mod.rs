//! HTTP adapter - REST API over the application handlers.
//!
//! Each context has its own router; [`router`] nests them under `/api`
//! and adds tracing, CORS and a request timeout.

pub mod error;
pub mod journal;
pub mod mood;
pub mod reflection;
pub mod user;

use std::sync::Arc;
use std::time::Duration;

use axum::{routing::get, Json, Router};
use http::HeaderValue;
use serde_json::{json, Value};
use tower_http::cors::{Any, CorsLayer};
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;

use crate::application::handlers::{
    AdvanceStepHandler, AnswerPromptHandler, CancelReflectionHandler, ChoosePathHandler,
    ClearMoodHandler, CompleteReflectionHandler, DeleteDraftHandler, GetEntryHandler,
    GetMoodHandler, GetProgressStatsHandler, GetReflectionHandler, ListDraftsHandler,
    ListEntriesHandler, OpenReflectionHandler, RetreatStepHandler, SetMoodHandler,
};
use crate::domain::reflection::{PromptSet, ValidationPolicy};
use crate::ports::{DraftRepository, EventPublisher, JournalRepository, MoodRepository, WizardStore};

pub use error::ErrorResponse;
pub use journal::{draft_routes, journal_routes, JournalHandlers};
pub use mood::{mood_routes, MoodHandlers};
pub use reflection::{reflection_routes, ReflectionHandlers};
pub use user::RequireUser;

/// Adapters and settings the handlers are built from.
pub struct ApiDependencies {
    pub wizards: Arc<dyn WizardStore>,
    pub journal: Arc<dyn JournalRepository>,
    pub drafts: Arc<dyn DraftRepository>,
    pub moods: Arc<dyn MoodRepository>,
    pub events: Arc<dyn EventPublisher>,
    pub prompts: PromptSet,
    pub policy: ValidationPolicy,
    pub offer_drafts: bool,
}

/// Router state for every context.
#[derive(Clone)]
pub struct ApiHandlers {
    pub reflection: ReflectionHandlers,
    pub journal: JournalHandlers,
    pub mood: MoodHandlers,
}

impl ApiHandlers {
    pub fn new(deps: ApiDependencies) -> Self {
        let ApiDependencies {
            wizards,
            journal,
            drafts,
            moods,
            events,
            prompts,
            policy,
            offer_drafts,
        } = deps;

        let reflection = ReflectionHandlers {
            open: Arc::new(OpenReflectionHandler::new(
                wizards.clone(),
                events.clone(),
                prompts,
                policy,
            )),
            get: Arc::new(GetReflectionHandler::new(wizards.clone())),
            answer: Arc::new(AnswerPromptHandler::new(wizards.clone())),
            choose_path: Arc::new(ChoosePathHandler::new(wizards.clone())),
            advance: Arc::new(AdvanceStepHandler::new(wizards.clone())),
            retreat: Arc::new(RetreatStepHandler::new(wizards.clone())),
            complete: Arc::new(CompleteReflectionHandler::new(
                wizards.clone(),
                journal.clone(),
                events.clone(),
            )),
            cancel: Arc::new(CancelReflectionHandler::new(
                wizards,
                drafts.clone(),
                events.clone(),
                offer_drafts,
            )),
        };

        let journal = JournalHandlers {
            list_entries: Arc::new(ListEntriesHandler::new(journal.clone())),
            get_entry: Arc::new(GetEntryHandler::new(journal.clone())),
            stats: Arc::new(GetProgressStatsHandler::new(journal)),
            list_drafts: Arc::new(ListDraftsHandler::new(drafts.clone())),
            delete_draft: Arc::new(DeleteDraftHandler::new(drafts)),
        };

        let mood = MoodHandlers {
            get: Arc::new(GetMoodHandler::new(moods.clone())),
            set: Arc::new(SetMoodHandler::new(moods.clone(), events.clone())),
            clear: Arc::new(ClearMoodHandler::new(moods, events)),
        };

        Self {
            reflection,
            journal,
            mood,
        }
    }
}

/// Cross-cutting layers applied around the API.
#[derive(Debug, Clone)]
pub struct RouterOptions {
    pub request_timeout: Duration,
    /// Allowed CORS origins; empty allows any.
    pub cors_origins: Vec<String>,
}

impl Default for RouterOptions {
    fn default() -> Self {
        Self {
            request_timeout: Duration::from_secs(30),
            cors_origins: Vec::new(),
        }
    }
}

/// GET /health
async fn health() -> Json<Value> {
    Json(json!({ "status": "ok", "version": env!("CARGO_PKG_VERSION") }))
}

/// Full application router.
pub fn router(handlers: ApiHandlers, options: &RouterOptions) -> Router {
    let api = Router::new()
        .nest("/reflection", reflection_routes(handlers.reflection))
        .nest("/journal", journal_routes(handlers.journal.clone()))
        .nest("/drafts", draft_routes(handlers.journal))
        .nest("/mood", mood_routes(handlers.mood));

    Router::new()
        .route("/health", get(health))
        .nest("/api", api)
        .layer(TimeoutLayer::new(options.request_timeout))
        .layer(cors_layer(&options.cors_origins))
        .layer(TraceLayer::new_for_http())
}

fn cors_layer(origins: &[String]) -> CorsLayer {
    let parsed: Vec<HeaderValue> = origins
        .iter()
        .filter_map(|origin| match origin.parse::<HeaderValue>() {
            Ok(value) => Some(value),
            Err(_) => {
                tracing::warn!(%origin, "Ignoring unparseable CORS origin");
                None
            }
        })
        .collect();

    let layer = CorsLayer::new().allow_methods(Any).allow_headers(Any);
    if parsed.is_empty() {
        layer.allow_origin(Any)
    } else {
        layer.allow_origin(parsed)
    }
}
