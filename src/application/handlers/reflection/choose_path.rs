//! ChoosePathHandler - Command handler for the accept/fight choice.

use std::sync::Arc;

use crate::domain::foundation::{CommandMetadata, UserId};
use crate::domain::reflection::{ReflectionError, ReflectionPath};
use crate::ports::WizardStore;

use super::{update_wizard, ReflectionView};

#[derive(Debug, Clone)]
pub struct ChoosePathCommand {
    pub user_id: UserId,
    pub path: ReflectionPath,
}

pub struct ChoosePathHandler {
    store: Arc<dyn WizardStore>,
}

impl ChoosePathHandler {
    pub fn new(store: Arc<dyn WizardStore>) -> Self {
        Self { store }
    }

    pub async fn handle(
        &self,
        cmd: ChoosePathCommand,
        _metadata: CommandMetadata,
    ) -> Result<ReflectionView, ReflectionError> {
        update_wizard(self.store.as_ref(), &cmd.user_id, |wizard| {
            wizard.set_path(cmd.path)?;
            Ok(ReflectionView::from_wizard(wizard))
        })
        .await
    }
}
