//! AnswerPromptHandler - Command handler for editing an answer.

use std::sync::Arc;

use crate::domain::foundation::{CommandMetadata, UserId};
use crate::domain::reflection::ReflectionError;
use crate::ports::WizardStore;

use super::{update_wizard, ReflectionView};

/// Command to replace the answer at `step`.
#[derive(Debug, Clone)]
pub struct AnswerPromptCommand {
    pub user_id: UserId,
    pub step: usize,
    pub text: String,
}

pub struct AnswerPromptHandler {
    store: Arc<dyn WizardStore>,
}

impl AnswerPromptHandler {
    pub fn new(store: Arc<dyn WizardStore>) -> Self {
        Self { store }
    }

    pub async fn handle(
        &self,
        cmd: AnswerPromptCommand,
        _metadata: CommandMetadata,
    ) -> Result<ReflectionView, ReflectionError> {
        update_wizard(self.store.as_ref(), &cmd.user_id, |wizard| {
            wizard.set_answer(cmd.step, cmd.text)?;
            Ok(ReflectionView::from_wizard(wizard))
        })
        .await
    }
}
