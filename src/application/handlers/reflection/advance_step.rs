//! AdvanceStepHandler - Command handler for "Next".

use std::sync::Arc;

use crate::domain::foundation::{CommandMetadata, UserId};
use crate::domain::reflection::ReflectionError;
use crate::ports::WizardStore;

use super::{update_wizard, ReflectionView};

#[derive(Debug, Clone)]
pub struct AdvanceStepCommand {
    pub user_id: UserId,
}

pub struct AdvanceStepHandler {
    store: Arc<dyn WizardStore>,
}

impl AdvanceStepHandler {
    pub fn new(store: Arc<dyn WizardStore>) -> Self {
        Self { store }
    }

    pub async fn handle(
        &self,
        cmd: AdvanceStepCommand,
        _metadata: CommandMetadata,
    ) -> Result<ReflectionView, ReflectionError> {
        update_wizard(self.store.as_ref(), &cmd.user_id, |wizard| {
            wizard.advance()?;
            Ok(ReflectionView::from_wizard(wizard))
        })
        .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::handlers::test_support::*;
    use crate::domain::reflection::{PromptSet, ReflectionWizard, ValidationPolicy, WizardError};

    fn command() -> AdvanceStepCommand {
        AdvanceStepCommand {
            user_id: test_user_id(),
        }
    }

    #[tokio::test]
    async fn advances_after_answer_then_blocks_on_empty_step() {
        let mut wizard = ReflectionWizard::new(PromptSet::standard(), ValidationPolicy::strict());
        wizard.open();
        wizard.set_answer(0, "anxious").unwrap();
        let store = Arc::new(MockWizardStore::with_wizard(test_user_id(), wizard));
        let handler = AdvanceStepHandler::new(store.clone());

        let view = handler.handle(command(), test_metadata()).await.unwrap();
        assert_eq!(view.current_step, 1);
        assert_eq!(view.progress_label, "Step 2 / 8");

        let err = handler.handle(command(), test_metadata()).await.unwrap_err();
        assert_eq!(err, ReflectionError::Wizard(WizardError::AnswerRequired { step: 1 }));
        assert_eq!(store.get(&test_user_id()).unwrap().current_step(), 1);
    }
}
