//! Wizard store port.
//!
//! Holds the one reflection wizard each user may have in flight. The wizard
//! is transient: it lives here between requests and is taken out once it is
//! completed or cancelled.
//!
//! Concurrent requests for the same user must not interleave a read and a
//! write, so every change goes through [`WizardStore::modify`], which runs
//! the edit while the user's slot is locked.

use async_trait::async_trait;

use crate::domain::foundation::{DomainError, UserId};
use crate::domain::reflection::ReflectionWizard;

/// Edit applied to a user's wizard slot. `None` means no wizard; leaving
/// `None` behind removes the wizard.
pub type WizardEdit<'a> = Box<dyn FnOnce(&mut Option<ReflectionWizard>) + Send + 'a>;

#[async_trait]
pub trait WizardStore: Send + Sync {
    /// The user's wizard, if one is in flight.
    async fn load(&self, user_id: &UserId) -> Result<Option<ReflectionWizard>, DomainError>;

    /// Stores the wizard, replacing any previous one for the user.
    async fn save(&self, user_id: &UserId, wizard: &ReflectionWizard) -> Result<(), DomainError>;

    /// Runs `edit` on the user's slot atomically with respect to every
    /// other call for the same user.
    async fn modify(&self, user_id: &UserId, edit: WizardEdit<'_>) -> Result<(), DomainError>;
}
