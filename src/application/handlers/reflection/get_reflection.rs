//! GetReflectionHandler - Query handler for the wizard in flight.

use std::sync::Arc;

use crate::domain::foundation::UserId;
use crate::domain::reflection::ReflectionError;
use crate::ports::WizardStore;

use super::{load_wizard, ReflectionView};

#[derive(Debug, Clone)]
pub struct GetReflectionQuery {
    pub user_id: UserId,
}

pub struct GetReflectionHandler {
    store: Arc<dyn WizardStore>,
}

impl GetReflectionHandler {
    pub fn new(store: Arc<dyn WizardStore>) -> Self {
        Self { store }
    }

    pub async fn handle(&self, query: GetReflectionQuery) -> Result<ReflectionView, ReflectionError> {
        let wizard = load_wizard(self.store.as_ref(), &query.user_id).await?;
        Ok(ReflectionView::from_wizard(&wizard))
    }
}
