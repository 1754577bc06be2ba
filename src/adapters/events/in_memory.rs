//! In-memory event bus.
//!
//! Keeps published envelopes in process memory so tests and local runs
//! can inspect them. Only the most recent `capacity` events are kept.

use async_trait::async_trait;
use std::collections::VecDeque;
use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

use crate::domain::foundation::{DomainError, EventEnvelope};
use crate::ports::EventPublisher;

/// Default number of envelopes retained.
pub const DEFAULT_CAPACITY: usize = 1024;

/// In-memory event bus.
///
/// ```ignore
/// let bus = Arc::new(InMemoryEventBus::new());
/// bus.publish(envelope).await?;
/// assert!(bus.has_event("reflection.completed.v1"));
/// ```
#[derive(Debug)]
pub struct InMemoryEventBus {
    published: RwLock<VecDeque<EventEnvelope>>,
    capacity: usize,
}

impl InMemoryEventBus {
    pub fn new() -> Self {
        Self::with_capacity(DEFAULT_CAPACITY)
    }

    /// Bus that keeps at most `capacity` envelopes (at least one).
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            published: RwLock::new(VecDeque::new()),
            capacity: capacity.max(1),
        }
    }

    // Lock poisoning only means a writer panicked mid-push; the queue is
    // still structurally valid.
    fn read(&self) -> RwLockReadGuard<'_, VecDeque<EventEnvelope>> {
        self.published.read().unwrap_or_else(|e| e.into_inner())
    }

    fn write(&self) -> RwLockWriteGuard<'_, VecDeque<EventEnvelope>> {
        self.published.write().unwrap_or_else(|e| e.into_inner())
    }

    /// Returns retained events, oldest first.
    pub fn published_events(&self) -> Vec<EventEnvelope> {
        self.read().iter().cloned().collect()
    }

    pub fn events_of_type(&self, event_type: &str) -> Vec<EventEnvelope> {
        self.read()
            .iter()
            .filter(|e| e.event_type == event_type)
            .cloned()
            .collect()
    }

    pub fn events_for_aggregate(&self, aggregate_id: &str) -> Vec<EventEnvelope> {
        self.read()
            .iter()
            .filter(|e| e.aggregate_id == aggregate_id)
            .cloned()
            .collect()
    }

    pub fn clear(&self) {
        self.write().clear();
    }

    pub fn event_count(&self) -> usize {
        self.read().len()
    }

    pub fn has_event(&self, event_type: &str) -> bool {
        self.read().iter().any(|e| e.event_type == event_type)
    }
}

impl Default for InMemoryEventBus {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl EventPublisher for InMemoryEventBus {
    async fn publish(&self, event: EventEnvelope) -> Result<(), DomainError> {
        let mut published = self.write();
        if published.len() == self.capacity {
            published.pop_front();
        }
        published.push_back(event);
        Ok(())
    }

    async fn publish_all(&self, events: Vec<EventEnvelope>) -> Result<(), DomainError> {
        for event in events {
            self.publish(event).await?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::foundation::{EventId, EventMetadata, Timestamp};
    use serde_json::json;

    fn test_envelope(event_type: &str, aggregate_id: &str) -> EventEnvelope {
        EventEnvelope {
            event_id: EventId::new(),
            event_type: event_type.to_string(),
            schema_version: 1,
            aggregate_id: aggregate_id.to_string(),
            aggregate_type: "Test".to_string(),
            occurred_at: Timestamp::now(),
            payload: json!({}),
            metadata: EventMetadata::default(),
        }
    }

    #[tokio::test]
    async fn publish_stores_event() {
        let bus = InMemoryEventBus::new();

        bus.publish(test_envelope("reflection.opened.v1", "r-1")).await.unwrap();

        assert_eq!(bus.event_count(), 1);
        assert!(bus.has_event("reflection.opened.v1"));
    }

    #[tokio::test]
    async fn filters_by_type_and_aggregate() {
        let bus = InMemoryEventBus::new();

        bus.publish_all(vec![
            test_envelope("type.a", "agg-1"),
            test_envelope("type.b", "agg-2"),
            test_envelope("type.a", "agg-1"),
        ])
        .await
        .unwrap();

        assert_eq!(bus.events_of_type("type.a").len(), 2);
        assert_eq!(bus.events_for_aggregate("agg-2").len(), 1);
    }

    #[tokio::test]
    async fn oldest_events_are_dropped_at_capacity() {
        let bus = InMemoryEventBus::with_capacity(2);

        for id in ["1", "2", "3"] {
            bus.publish(test_envelope("t", id)).await.unwrap();
        }

        let ids: Vec<_> = bus
            .published_events()
            .into_iter()
            .map(|e| e.aggregate_id)
            .collect();
        assert_eq!(ids, vec!["2", "3"]);
    }

    #[tokio::test]
    async fn clear_empties_bus() {
        let bus = InMemoryEventBus::new();
        bus.publish(test_envelope("t", "1")).await.unwrap();

        bus.clear();

        assert_eq!(bus.event_count(), 0);
    }
}
