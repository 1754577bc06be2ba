//! Reflection command and query handlers.
//!
//! The wizard lives in a `WizardStore` between requests. Each command
//! applies one wizard operation inside a single `WizardStore::modify` call,
//! so two requests for the same user never work from the same stale copy.
//! A refused operation is returned as an error and leaves the store as it
//! was.

mod advance_step;
mod answer_prompt;
mod cancel_reflection;
mod choose_path;
mod complete_reflection;
mod get_reflection;
mod open_reflection;
mod retreat_step;
mod view;

pub use advance_step::{AdvanceStepCommand, AdvanceStepHandler};
pub use answer_prompt::{AnswerPromptCommand, AnswerPromptHandler};
pub use cancel_reflection::{
    CancelReflectionCommand, CancelReflectionHandler, CancelReflectionResult,
};
pub use choose_path::{ChoosePathCommand, ChoosePathHandler};
pub use complete_reflection::{
    CompleteReflectionCommand, CompleteReflectionHandler, CompleteReflectionResult,
};
pub use get_reflection::{GetReflectionHandler, GetReflectionQuery};
pub use open_reflection::{OpenReflectionCommand, OpenReflectionHandler, OpenReflectionResult};
pub use retreat_step::{RetreatStepCommand, RetreatStepHandler};
pub use view::{ReflectionView, StepView};

use crate::domain::foundation::UserId;
use crate::domain::reflection::{ReflectionError, ReflectionWizard};
use crate::ports::WizardStore;

/// Loads the user's open wizard. A missing or closed wizard is `NotFound`.
async fn load_wizard(
    store: &dyn WizardStore,
    user_id: &UserId,
) -> Result<ReflectionWizard, ReflectionError> {
    store
        .load(user_id)
        .await?
        .filter(ReflectionWizard::is_open)
        .ok_or_else(ReflectionError::not_found)
}

/// Runs `op` on the user's open wizard while the store holds the slot.
/// The change is kept only when `op` succeeds.
async fn update_wizard<T, F>(
    store: &dyn WizardStore,
    user_id: &UserId,
    op: F,
) -> Result<T, ReflectionError>
where
    T: Send,
    F: FnOnce(&mut ReflectionWizard) -> Result<T, ReflectionError> + Send,
{
    let mut outcome = None;
    store
        .modify(
            user_id,
            Box::new(|slot: &mut Option<ReflectionWizard>| {
                outcome = Some(match slot.as_mut().filter(|w| w.is_open()) {
                    Some(wizard) => {
                        let mut next = wizard.clone();
                        let result = op(&mut next);
                        if result.is_ok() {
                            *wizard = next;
                        }
                        result
                    }
                    None => Err(ReflectionError::not_found()),
                });
            }),
        )
        .await?;
    outcome.unwrap_or_else(|| Err(ReflectionError::not_found()))
}

/// Takes the user's open wizard out of the store when `op` accepts a copy
/// of it. Only one caller can ever take a given wizard; the original is
/// handed back alongside `op`'s result so it can be restored.
async fn take_wizard<T, F>(
    store: &dyn WizardStore,
    user_id: &UserId,
    op: F,
) -> Result<(ReflectionWizard, T), ReflectionError>
where
    T: Send,
    F: FnOnce(ReflectionWizard) -> Result<T, ReflectionError> + Send,
{
    let mut outcome = None;
    store
        .modify(
            user_id,
            Box::new(|slot: &mut Option<ReflectionWizard>| {
                outcome = Some(match slot.take() {
                    Some(wizard) if wizard.is_open() => match op(wizard.clone()) {
                        Ok(value) => Ok((wizard, value)),
                        Err(err) => {
                            *slot = Some(wizard);
                            Err(err)
                        }
                    },
                    other => {
                        *slot = other;
                        Err(ReflectionError::not_found())
                    }
                });
            }),
        )
        .await?;
    outcome.unwrap_or_else(|| Err(ReflectionError::not_found()))
}

/// Puts a taken wizard back, unless the user has opened a new one since.
async fn restore_wizard(
    store: &dyn WizardStore,
    user_id: &UserId,
    wizard: ReflectionWizard,
) -> Result<(), ReflectionError> {
    store
        .modify(
            user_id,
            Box::new(move |slot: &mut Option<ReflectionWizard>| {
                if slot.is_none() {
                    *slot = Some(wizard);
                }
            }),
        )
        .await?;
    Ok(())
}
