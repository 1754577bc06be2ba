//! RetreatStepHandler - Command handler for "Back".

use std::sync::Arc;

use crate::domain::foundation::{CommandMetadata, UserId};
use crate::domain::reflection::ReflectionError;
use crate::ports::WizardStore;

use super::{update_wizard, ReflectionView};

#[derive(Debug, Clone)]
pub struct RetreatStepCommand {
    pub user_id: UserId,
}

pub struct RetreatStepHandler {
    store: Arc<dyn WizardStore>,
}

impl RetreatStepHandler {
    pub fn new(store: Arc<dyn WizardStore>) -> Self {
        Self { store }
    }

    pub async fn handle(
        &self,
        cmd: RetreatStepCommand,
        _metadata: CommandMetadata,
    ) -> Result<ReflectionView, ReflectionError> {
        update_wizard(self.store.as_ref(), &cmd.user_id, |wizard| {
            wizard.retreat()?;
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

    #[tokio::test]
    async fn retreats_to_first_step_and_stops() {
        let mut wizard = ReflectionWizard::new(PromptSet::standard(), ValidationPolicy::strict());
        wizard.open();
        for step in 0..3 {
            wizard.set_answer(step, "x").unwrap();
            wizard.advance().unwrap();
        }
        let store = Arc::new(MockWizardStore::with_wizard(test_user_id(), wizard));
        let handler = RetreatStepHandler::new(store.clone());
        let command = RetreatStepCommand {
            user_id: test_user_id(),
        };

        for expected in [2, 1, 0] {
            let view = handler.handle(command.clone(), test_metadata()).await.unwrap();
            assert_eq!(view.current_step, expected);
        }

        let err = handler.handle(command, test_metadata()).await.unwrap_err();
        assert_eq!(err, ReflectionError::Wizard(WizardError::AtFirstStep));
        assert_eq!(store.get(&test_user_id()).unwrap().current_step(), 0);
    }
}
