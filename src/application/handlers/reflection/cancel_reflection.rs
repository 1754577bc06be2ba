//! CancelReflectionHandler - Command handler for leaving a reflection.
//!
//! A wizard with any non-blank answer is kept as a draft when drafts are
//! enabled and the user asked to keep it. Everything else is discarded.

use std::sync::Arc;

use tracing::{debug, info};

use crate::domain::foundation::{
    CommandMetadata, EventId, SerializableDomainEvent, Timestamp, UserId,
};
use crate::domain::journal::Draft;
use crate::domain::reflection::{
    CancelOutcome, ReflectionDiscarded, ReflectionDraftSaved, ReflectionError,
};
use crate::ports::{DraftRepository, EventPublisher, WizardStore};

use super::{restore_wizard, take_wizard};

#[derive(Debug, Clone)]
pub struct CancelReflectionCommand {
    pub user_id: UserId,
    /// The user's answer to "save as draft?".
    pub keep_draft: bool,
}

#[derive(Debug, Clone)]
pub enum CancelReflectionResult {
    Discarded,
    DraftSaved(Draft),
}

pub struct CancelReflectionHandler {
    store: Arc<dyn WizardStore>,
    drafts: Arc<dyn DraftRepository>,
    event_publisher: Arc<dyn EventPublisher>,
    offer_drafts: bool,
}

impl CancelReflectionHandler {
    pub fn new(
        store: Arc<dyn WizardStore>,
        drafts: Arc<dyn DraftRepository>,
        event_publisher: Arc<dyn EventPublisher>,
        offer_drafts: bool,
    ) -> Self {
        Self {
            store,
            drafts,
            event_publisher,
            offer_drafts,
        }
    }

    pub async fn handle(
        &self,
        cmd: CancelReflectionCommand,
        metadata: CommandMetadata,
    ) -> Result<CancelReflectionResult, ReflectionError> {
        let (wizard, outcome) = take_wizard(self.store.as_ref(), &cmd.user_id, |mut wizard| {
            wizard.cancel().map_err(ReflectionError::from)
        })
        .await?;
        let reflection_id = wizard.id();
        let abandoned_at_step = wizard.current_step();
        let now = Timestamp::now();

        let snapshot = match outcome {
            CancelOutcome::DraftRequested(snapshot) if self.offer_drafts && cmd.keep_draft => {
                Some(snapshot)
            }
            _ => None,
        };

        let (result, envelope) = match snapshot {
            Some(snapshot) => {
                let draft = Draft::from_snapshot(cmd.user_id.clone(), reflection_id, snapshot, now);
                if let Err(err) = self.drafts.save(&draft).await {
                    restore_wizard(self.store.as_ref(), &cmd.user_id, wizard).await?;
                    return Err(err.into());
                }

                let event = ReflectionDraftSaved {
                    event_id: EventId::new(),
                    reflection_id,
                    draft_id: draft.id,
                    user_id: cmd.user_id.clone(),
                    answered_count: draft.answered_count(),
                    saved_at: now,
                };
                info!(draft_id = %draft.id, "Reflection kept as draft");
                (CancelReflectionResult::DraftSaved(draft), event.to_envelope()?)
            }
            None => {
                let event = ReflectionDiscarded {
                    event_id: EventId::new(),
                    reflection_id,
                    user_id: cmd.user_id.clone(),
                    abandoned_at_step,
                    discarded_at: now,
                };
                debug!(%reflection_id, abandoned_at_step, "Reflection discarded");
                (CancelReflectionResult::Discarded, event.to_envelope()?)
            }
        };

        self.event_publisher.publish(metadata.stamp(envelope)).await?;

        Ok(result)
    }
}
