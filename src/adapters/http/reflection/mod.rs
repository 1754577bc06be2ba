//! HTTP adapter for the reflection wizard.

mod dto;
mod handlers;
mod routes;

pub use dto::{AnswerRequest, CancelRequest, CancelResponse, ChoosePathRequest, EntryResponse};
pub use handlers::ReflectionHandlers;
pub use routes::reflection_routes;
