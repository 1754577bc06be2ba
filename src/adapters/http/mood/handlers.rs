//! HTTP handlers for mood endpoints.

use std::sync::Arc;

use axum::{
    extract::State,
    response::{IntoResponse, Response},
    Json,
};

use crate::adapters::http::error::{bad_request, handle_mood_error};
use crate::adapters::http::user::RequireUser;
use crate::application::handlers::{
    ClearMoodCommand, ClearMoodHandler, GetMoodHandler, GetMoodQuery, SetMoodCommand,
    SetMoodHandler,
};
use crate::domain::mood::Feeling;

use super::dto::{FeelingResponse, MoodResponse, SetMoodRequest};

#[derive(Clone)]
pub struct MoodHandlers {
    pub get: Arc<GetMoodHandler>,
    pub set: Arc<SetMoodHandler>,
    pub clear: Arc<ClearMoodHandler>,
}

/// GET /api/mood
pub async fn get_mood(State(handlers): State<MoodHandlers>, user: RequireUser) -> Response {
    let query = GetMoodQuery {
        user_id: user.user_id,
    };
    match handlers.get.handle(query).await {
        Ok(check_in) => Json(MoodResponse::from(&check_in)).into_response(),
        Err(e) => handle_mood_error(e),
    }
}

/// PUT /api/mood
pub async fn set_mood(
    State(handlers): State<MoodHandlers>,
    user: RequireUser,
    Json(req): Json<SetMoodRequest>,
) -> Response {
    let feeling: Feeling = match req.feeling.parse() {
        Ok(feeling) => feeling,
        Err(e) => return bad_request(e.to_string()),
    };
    let cmd = SetMoodCommand {
        user_id: user.user_id.clone(),
        feeling,
    };
    match handlers.set.handle(cmd, user.metadata()).await {
        Ok(check_in) => Json(MoodResponse::from(&check_in)).into_response(),
        Err(e) => handle_mood_error(e),
    }
}

/// DELETE /api/mood
pub async fn clear_mood(State(handlers): State<MoodHandlers>, user: RequireUser) -> Response {
    let cmd = ClearMoodCommand {
        user_id: user.user_id.clone(),
    };
    match handlers.clear.handle(cmd, user.metadata()).await {
        Ok(check_in) => Json(MoodResponse::from(&check_in)).into_response(),
        Err(e) => handle_mood_error(e),
    }
}

/// GET /api/mood/feelings - The picker, in spectrum order
pub async fn list_feelings() -> Json<Vec<FeelingResponse>> {
    Json(Feeling::SPECTRUM.into_iter().map(FeelingResponse::from).collect())
}
