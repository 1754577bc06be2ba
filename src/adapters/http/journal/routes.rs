//! HTTP routes for journal and draft endpoints.

use axum::{
    routing::{delete, get},
    Router,
};

use super::handlers::{
    delete_draft, get_entry, get_stats, list_drafts, list_entries, JournalHandlers,
};

/// Mounted at `/journal`.
pub fn journal_routes(handlers: JournalHandlers) -> Router {
    Router::new()
        .route("/entries", get(list_entries))
        .route("/entries/:id", get(get_entry))
        .route("/stats", get(get_stats))
        .with_state(handlers)
}

/// Mounted at `/drafts`.
pub fn draft_routes(handlers: JournalHandlers) -> Router {
    Router::new()
        .route("/", get(list_drafts))
        .route("/:id", delete(delete_draft))
        .with_state(handlers)
}
