//! Mood domain module.
//!
//! A single current-mood check-in per user, picked from the [`Feeling`]
//! spectrum.

mod check_in;
mod errors;
mod events;
mod feeling;

pub use check_in::MoodCheckIn;
pub use errors::MoodError;
pub use events::{MoodCleared, MoodUpdated};
pub use feeling::Feeling;
