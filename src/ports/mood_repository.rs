//! Mood repository port.

use async_trait::async_trait;

use crate::domain::foundation::{DomainError, UserId};
use crate::domain::mood::MoodCheckIn;

#[async_trait]
pub trait MoodRepository: Send + Sync {
    /// The user's check-in, or `None` if they never checked in.
    async fn load(&self, user_id: &UserId) -> Result<Option<MoodCheckIn>, DomainError>;

    async fn save(&self, check_in: &MoodCheckIn) -> Result<(), DomainError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mood_repository_is_object_safe() {
        fn _accepts_dyn(_repo: &dyn MoodRepository) {}
    }
}
