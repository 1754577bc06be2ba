//! HTTP routes for reflection endpoints.

use axum::{
    routing::{get, post, put},
    Router,
};

use super::handlers::{
    advance_step, answer_prompt, cancel_reflection, choose_path, complete_reflection,
    get_reflection, open_reflection, retreat_step, ReflectionHandlers,
};

/// Creates the reflection router, mounted at `/reflection`.
pub fn reflection_routes(handlers: ReflectionHandlers) -> Router {
    Router::new()
        .route("/", post(open_reflection).get(get_reflection))
        .route("/answers/:step", put(answer_prompt))
        .route("/path", put(choose_path))
        .route("/advance", post(advance_step))
        .route("/retreat", post(retreat_step))
        .route("/complete", post(complete_reflection))
        .route("/cancel", post(cancel_reflection))
        .with_state(handlers)
}
