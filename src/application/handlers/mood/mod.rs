//! Mood command and query handlers.

mod clear_mood;
mod get_mood;
mod set_mood;

pub use clear_mood::{ClearMoodCommand, ClearMoodHandler};
pub use get_mood::{GetMoodHandler, GetMoodQuery};
pub use set_mood::{SetMoodCommand, SetMoodHandler};
