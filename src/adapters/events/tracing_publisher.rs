//! Event publisher decorator that logs every envelope through `tracing`.

use async_trait::async_trait;
use std::sync::Arc;
use tracing::info;

use crate::domain::foundation::{DomainError, EventEnvelope};
use crate::ports::EventPublisher;

/// Logs each event at `info` and forwards it to the inner publisher.
pub struct TracingEventPublisher {
    inner: Arc<dyn EventPublisher>,
}

impl TracingEventPublisher {
    pub fn new(inner: Arc<dyn EventPublisher>) -> Self {
        Self { inner }
    }

    fn log(event: &EventEnvelope) {
        info!(
            event_id = %event.event_id,
            event_type = %event.event_type,
            aggregate_type = %event.aggregate_type,
            aggregate_id = %event.aggregate_id,
            correlation_id = event.metadata.correlation_id.as_deref().unwrap_or("-"),
            "Domain event published"
        );
    }
}

#[async_trait]
impl EventPublisher for TracingEventPublisher {
    async fn publish(&self, event: EventEnvelope) -> Result<(), DomainError> {
        Self::log(&event);
        self.inner.publish(event).await
    }

    async fn publish_all(&self, events: Vec<EventEnvelope>) -> Result<(), DomainError> {
        events.iter().for_each(Self::log);
        self.inner.publish_all(events).await
    }
}
