//! HTTP routes for mood endpoints.

use axum::{routing::get, Router};

use super::handlers::{clear_mood, get_mood, list_feelings, set_mood, MoodHandlers};

/// Mounted at `/mood`.
pub fn mood_routes(handlers: MoodHandlers) -> Router {
    Router::new()
        .route("/", get(get_mood).put(set_mood).delete(clear_mood))
        .route("/feelings", get(list_feelings))
        .with_state(handlers)
}
