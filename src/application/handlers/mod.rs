//! Application handlers.
//!
//! Command and query handlers that orchestrate domain operations.

pub mod journal;
pub mod mood;
pub mod reflection;

#[cfg(test)]
pub(crate) mod test_support;

pub use journal::{
    DeleteDraftCommand, DeleteDraftHandler, DraftList, GetEntryHandler, GetEntryQuery,
    GetProgressStatsHandler, GetProgressStatsQuery, ListDraftsHandler, ListDraftsQuery,
    ListEntriesHandler, ListEntriesQuery,
};
pub use mood::{
    ClearMoodCommand, ClearMoodHandler, GetMoodHandler, GetMoodQuery, SetMoodCommand,
    SetMoodHandler,
};
pub use reflection::{
    AdvanceStepCommand, AdvanceStepHandler, AnswerPromptCommand, AnswerPromptHandler,
    CancelReflectionCommand, CancelReflectionHandler, CancelReflectionResult, ChoosePathCommand,
    ChoosePathHandler, CompleteReflectionCommand, CompleteReflectionHandler,
    CompleteReflectionResult, GetReflectionHandler, GetReflectionQuery, OpenReflectionCommand,
    OpenReflectionHandler, OpenReflectionResult, ReflectionView, RetreatStepCommand,
    RetreatStepHandler, StepView,
};
