//! Domain layer containing business logic and domain types.
//!
//! # Module Organization
//!
//! - `foundation` - Shared domain primitives (IDs, timestamps, errors, events)
//! - `reflection` - The reflection wizard and its events
//! - `journal` - Completed entries, drafts and progress statistics
//! - `mood` - Current mood check-in

pub mod foundation;
pub mod journal;
pub mod mood;
pub mod reflection;
