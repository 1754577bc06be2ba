//! Draft repository port.

use async_trait::async_trait;

use crate::domain::foundation::{DomainError, DraftId, UserId};
use crate::domain::journal::Draft;

#[async_trait]
pub trait DraftRepository: Send + Sync {
    async fn save(&self, draft: &Draft) -> Result<(), DomainError>;

    /// Returns `None` if not found.
    async fn find_by_id(&self, id: &DraftId) -> Result<Option<Draft>, DomainError>;

    /// All drafts owned by a user, newest first.
    async fn list_by_user(&self, user_id: &UserId) -> Result<Vec<Draft>, DomainError>;

    async fn count_by_user(&self, user_id: &UserId) -> Result<usize, DomainError>;

    /// Delete a draft.
    ///
    /// # Errors
    ///
    /// - `DraftNotFound` if the draft doesn't exist
    /// - `StorageError` on persistence failure
    async fn delete(&self, id: &DraftId) -> Result<(), DomainError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn draft_repository_is_object_safe() {
        fn _accepts_dyn(_repo: &dyn DraftRepository) {}
    }
}
