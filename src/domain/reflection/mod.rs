//! Reflection domain module.
//!
//! The guided reflection wizard: a fixed list of prompts answered in order,
//! followed by an accept/fight choice. A finished wizard yields a
//! [`CompletedSession`]; a cancelled one with content yields a
//! [`DraftSnapshot`].
//!
//! # Events
//!
//! - `ReflectionOpened`
//! - `ReflectionCompleted`
//! - `ReflectionDraftSaved`
//! - `ReflectionDiscarded`

mod errors;
mod events;
mod path;
mod policy;
mod prompts;
mod record;
mod status;
mod step;
mod wizard;

pub use errors::{ReflectionError, WizardError};
pub use events::{
    ReflectionCompleted, ReflectionDiscarded, ReflectionDraftSaved, ReflectionOpened,
};
pub use path::ReflectionPath;
pub use policy::ValidationPolicy;
pub use prompts::{PromptSet, MAX_PROMPT_LENGTH, STANDARD_PROMPTS};
pub use record::{CancelOutcome, CompletedSession, DraftSnapshot};
pub(crate) use record::count_answered;
pub use status::WizardStatus;
pub use step::{WizardProgress, WizardStep};
pub use wizard::ReflectionWizard;
