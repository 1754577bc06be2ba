//! HTTP handlers for journal and draft endpoints.

use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};

use crate::adapters::http::error::handle_journal_error;
use crate::adapters::http::user::RequireUser;
use crate::application::handlers::{
    DeleteDraftCommand, DeleteDraftHandler, GetEntryHandler, GetEntryQuery,
    GetProgressStatsHandler, GetProgressStatsQuery, ListDraftsHandler, ListDraftsQuery,
    ListEntriesHandler, ListEntriesQuery,
};
use crate::domain::foundation::{DraftId, EntryId};

use super::dto::{DraftListResponse, EntryRecapResponse, EntrySummaryResponse};

#[derive(Clone)]
pub struct JournalHandlers {
    pub list_entries: Arc<ListEntriesHandler>,
    pub get_entry: Arc<GetEntryHandler>,
    pub stats: Arc<GetProgressStatsHandler>,
    pub list_drafts: Arc<ListDraftsHandler>,
    pub delete_draft: Arc<DeleteDraftHandler>,
}

/// GET /api/journal/entries - Newest first
pub async fn list_entries(
    State(handlers): State<JournalHandlers>,
    user: RequireUser,
) -> Response {
    let query = ListEntriesQuery {
        user_id: user.user_id,
    };
    match handlers.list_entries.handle(query).await {
        Ok(entries) => {
            let body: Vec<EntrySummaryResponse> =
                entries.iter().map(EntrySummaryResponse::from).collect();
            Json(body).into_response()
        }
        Err(e) => handle_journal_error(e),
    }
}

/// GET /api/journal/entries/:id - Recap of one entry
pub async fn get_entry(
    State(handlers): State<JournalHandlers>,
    user: RequireUser,
    Path(entry_id): Path<EntryId>,
) -> Response {
    let query = GetEntryQuery {
        entry_id,
        user_id: user.user_id,
    };
    match handlers.get_entry.handle(query).await {
        Ok(entry) => Json(EntryRecapResponse::from(&entry)).into_response(),
        Err(e) => handle_journal_error(e),
    }
}

/// GET /api/journal/stats - Progress dashboard numbers
pub async fn get_stats(State(handlers): State<JournalHandlers>, user: RequireUser) -> Response {
    let query = GetProgressStatsQuery {
        user_id: user.user_id,
    };
    match handlers.stats.handle(query).await {
        Ok(stats) => Json(stats).into_response(),
        Err(e) => handle_journal_error(e),
    }
}

/// GET /api/drafts
pub async fn list_drafts(State(handlers): State<JournalHandlers>, user: RequireUser) -> Response {
    let query = ListDraftsQuery {
        user_id: user.user_id,
    };
    match handlers.list_drafts.handle(query).await {
        Ok(list) => Json(DraftListResponse::from(list)).into_response(),
        Err(e) => handle_journal_error(e),
    }
}

/// DELETE /api/drafts/:id
pub async fn delete_draft(
    State(handlers): State<JournalHandlers>,
    user: RequireUser,
    Path(draft_id): Path<DraftId>,
) -> Response {
    let cmd = DeleteDraftCommand {
        draft_id,
        user_id: user.user_id.clone(),
    };
    match handlers.delete_draft.handle(cmd, user.metadata()).await {
        Ok(()) => StatusCode::NO_CONTENT.into_response(),
        Err(e) => handle_journal_error(e),
    }
}
