//! HTTP adapter for mood check-ins.

mod dto;
mod handlers;
mod routes;

pub use dto::{FeelingResponse, MoodResponse, SetMoodRequest};
pub use handlers::MoodHandlers;
pub use routes::mood_routes;
