//! DeleteDraftHandler - Command handler for throwing a draft away.

use std::sync::Arc;

use tracing::info;

use crate::domain::foundation::{CommandMetadata, DraftId, UserId};
use crate::domain::journal::JournalError;
use crate::ports::DraftRepository;

#[derive(Debug, Clone)]
pub struct DeleteDraftCommand {
    pub draft_id: DraftId,
    pub user_id: UserId,
}

pub struct DeleteDraftHandler {
    drafts: Arc<dyn DraftRepository>,
}

impl DeleteDraftHandler {
    pub fn new(drafts: Arc<dyn DraftRepository>) -> Self {
        Self { drafts }
    }

    pub async fn handle(
        &self,
        cmd: DeleteDraftCommand,
        _metadata: CommandMetadata,
    ) -> Result<(), JournalError> {
        let draft = self
            .drafts
            .find_by_id(&cmd.draft_id)
            .await?
            .ok_or_else(|| JournalError::draft_not_found(cmd.draft_id))?;

        if !draft.is_owned_by(&cmd.user_id) {
            return Err(JournalError::forbidden());
        }

        self.drafts.delete(&cmd.draft_id).await?;
        info!(draft_id = %cmd.draft_id, "Draft deleted");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::handlers::journal::test_draft;
    use crate::application::handlers::test_support::*;

    #[tokio::test]
    async fn deletes_own_draft() {
        let draft = test_draft(test_user_id());
        let repo = Arc::new(MockDraftRepository::with_drafts(vec![draft.clone()]));

        DeleteDraftHandler::new(repo.clone())
            .handle(
                DeleteDraftCommand {
                    draft_id: draft.id,
                    user_id: test_user_id(),
                },
                test_metadata(),
            )
            .await
            .unwrap();

        assert!(repo.drafts().is_empty());
    }

    #[tokio::test]
    async fn cannot_delete_someone_elses_draft() {
        let draft = test_draft(other_user_id());
        let repo = Arc::new(MockDraftRepository::with_drafts(vec![draft.clone()]));

        let err = DeleteDraftHandler::new(repo.clone())
            .handle(
                DeleteDraftCommand {
                    draft_id: draft.id,
                    user_id: test_user_id(),
                },
                test_metadata(),
            )
            .await
            .unwrap_err();

        assert_eq!(err, JournalError::Forbidden);
        assert_eq!(repo.drafts().len(), 1);
    }

    #[tokio::test]
    async fn missing_draft_is_not_found() {
        let id = DraftId::new();
        let err = DeleteDraftHandler::new(Arc::new(MockDraftRepository::new()))
            .handle(
                DeleteDraftCommand {
                    draft_id: id,
                    user_id: test_user_id(),
                },
                test_metadata(),
            )
            .await
            .unwrap_err();

        assert_eq!(err, JournalError::DraftNotFound(id));
    }
}
