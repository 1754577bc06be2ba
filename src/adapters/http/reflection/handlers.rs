//! HTTP handlers for reflection endpoints.
//!
//! The wizard is per user, so no route carries a reflection id.

use std::sync::Arc;

use axum::{
    body::Bytes,
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};

use crate::adapters::http::error::{bad_request, handle_reflection_error};
use crate::adapters::http::user::RequireUser;
use crate::application::handlers::{
    AdvanceStepCommand, AdvanceStepHandler, AnswerPromptCommand, AnswerPromptHandler,
    CancelReflectionCommand, CancelReflectionHandler, CancelReflectionResult, ChoosePathCommand,
    ChoosePathHandler, CompleteReflectionCommand, CompleteReflectionHandler,
    GetReflectionHandler, GetReflectionQuery, OpenReflectionCommand, OpenReflectionHandler,
    RetreatStepCommand, RetreatStepHandler,
};
use crate::domain::reflection::ReflectionPath;

use super::dto::{AnswerRequest, CancelRequest, CancelResponse, ChoosePathRequest, EntryResponse};

// ════════════════════════════════════════════════════════════════════════════
// Handler state
// ════════════════════════════════════════════════════════════════════════════

#[derive(Clone)]
pub struct ReflectionHandlers {
    pub open: Arc<OpenReflectionHandler>,
    pub get: Arc<GetReflectionHandler>,
    pub answer: Arc<AnswerPromptHandler>,
    pub choose_path: Arc<ChoosePathHandler>,
    pub advance: Arc<AdvanceStepHandler>,
    pub retreat: Arc<RetreatStepHandler>,
    pub complete: Arc<CompleteReflectionHandler>,
    pub cancel: Arc<CancelReflectionHandler>,
}

// ════════════════════════════════════════════════════════════════════════════
// HTTP handlers
// ════════════════════════════════════════════════════════════════════════════

/// POST /api/reflection - Open a fresh wizard
pub async fn open_reflection(
    State(handlers): State<ReflectionHandlers>,
    user: RequireUser,
) -> Response {
    let cmd = OpenReflectionCommand {
        user_id: user.user_id.clone(),
    };
    match handlers.open.handle(cmd, user.metadata()).await {
        Ok(result) => (StatusCode::CREATED, Json(result.view)).into_response(),
        Err(e) => handle_reflection_error(e),
    }
}

/// GET /api/reflection - Current wizard state
pub async fn get_reflection(
    State(handlers): State<ReflectionHandlers>,
    user: RequireUser,
) -> Response {
    let query = GetReflectionQuery {
        user_id: user.user_id,
    };
    match handlers.get.handle(query).await {
        Ok(view) => Json(view).into_response(),
        Err(e) => handle_reflection_error(e),
    }
}

/// PUT /api/reflection/answers/:step - Replace one answer
pub async fn answer_prompt(
    State(handlers): State<ReflectionHandlers>,
    user: RequireUser,
    Path(step): Path<usize>,
    Json(req): Json<AnswerRequest>,
) -> Response {
    let cmd = AnswerPromptCommand {
        user_id: user.user_id.clone(),
        step,
        text: req.text,
    };
    match handlers.answer.handle(cmd, user.metadata()).await {
        Ok(view) => Json(view).into_response(),
        Err(e) => handle_reflection_error(e),
    }
}

/// PUT /api/reflection/path - Pick accept or fight
pub async fn choose_path(
    State(handlers): State<ReflectionHandlers>,
    user: RequireUser,
    Json(req): Json<ChoosePathRequest>,
) -> Response {
    let path: ReflectionPath = match req.path.parse() {
        Ok(path) => path,
        Err(e) => return bad_request(e.to_string()),
    };
    let cmd = ChoosePathCommand {
        user_id: user.user_id.clone(),
        path,
    };
    match handlers.choose_path.handle(cmd, user.metadata()).await {
        Ok(view) => Json(view).into_response(),
        Err(e) => handle_reflection_error(e),
    }
}

/// POST /api/reflection/advance - Next step
pub async fn advance_step(
    State(handlers): State<ReflectionHandlers>,
    user: RequireUser,
) -> Response {
    let cmd = AdvanceStepCommand {
        user_id: user.user_id.clone(),
    };
    match handlers.advance.handle(cmd, user.metadata()).await {
        Ok(view) => Json(view).into_response(),
        Err(e) => handle_reflection_error(e),
    }
}

/// POST /api/reflection/retreat - Previous step
pub async fn retreat_step(
    State(handlers): State<ReflectionHandlers>,
    user: RequireUser,
) -> Response {
    let cmd = RetreatStepCommand {
        user_id: user.user_id.clone(),
    };
    match handlers.retreat.handle(cmd, user.metadata()).await {
        Ok(view) => Json(view).into_response(),
        Err(e) => handle_reflection_error(e),
    }
}

/// POST /api/reflection/complete - File the journal entry
pub async fn complete_reflection(
    State(handlers): State<ReflectionHandlers>,
    user: RequireUser,
) -> Response {
    let cmd = CompleteReflectionCommand {
        user_id: user.user_id.clone(),
    };
    match handlers.complete.handle(cmd, user.metadata()).await {
        Ok(result) => {
            (StatusCode::CREATED, Json(EntryResponse::from(result.entry))).into_response()
        }
        Err(e) => handle_reflection_error(e),
    }
}

/// POST /api/reflection/cancel - Leave, optionally keeping a draft
///
/// An empty body keeps the draft. A non-empty body is read as JSON even
/// without a content type, and a malformed one is rejected.
pub async fn cancel_reflection(
    State(handlers): State<ReflectionHandlers>,
    user: RequireUser,
    body: Bytes,
) -> Response {
    let req = match CancelRequest::from_body(&body) {
        Ok(req) => req,
        Err(e) => return bad_request(format!("Invalid cancel request: {}", e)),
    };
    let cmd = CancelReflectionCommand {
        user_id: user.user_id.clone(),
        keep_draft: req.keep_draft,
    };
    match handlers.cancel.handle(cmd, user.metadata()).await {
        Ok(CancelReflectionResult::Discarded) => Json(CancelResponse::Discarded).into_response(),
        Ok(CancelReflectionResult::DraftSaved(draft)) => Json(CancelResponse::DraftSaved {
            draft_id: draft.id,
            answered_count: draft.answered_count(),
        })
        .into_response(),
        Err(e) => handle_reflection_error(e),
    }
}
