//! In-memory event publisher for tests and the demo binary.
//!
//! Captures envelopes instead of delivering them, so tests can assert
//! exactly what a handler published. The notification fan-out that
//! consumes these events in production lives outside this engine.

use std::sync::RwLock;

use async_trait::async_trait;

use crate::domain::foundation::{DomainError, EventEnvelope};
use crate::ports::EventPublisher;

/// Capturing `EventPublisher`.
///
/// # Panics
///
/// Methods panic if the internal lock is poisoned. Acceptable for test
/// and demo infrastructure; not a production publisher.
///
/// # Example
///
/// ```ignore
/// let publisher = Arc::new(InMemoryEventPublisher::new());
///
/// handler.handle(command).await?;
///
/// assert_eq!(publisher.event_count(), 1);
/// assert!(publisher.has_event("rewards.attendance_recorded.v1"));
/// ```
pub struct InMemoryEventPublisher {
    published: RwLock<Vec<EventEnvelope>>,
}

impl InMemoryEventPublisher {
    /// Creates an empty publisher.
    pub fn new() -> Self {
        Self {
            published: RwLock::new(Vec::new()),
        }
    }

    // === Test Helpers ===

    /// Returns all published envelopes in publication order.
    pub fn published_events(&self) -> Vec<EventEnvelope> {
        self.published
            .read()
            .expect("InMemoryEventPublisher: published lock poisoned")
            .clone()
    }

    /// Returns envelopes of a specific event type.
    pub fn events_of_type(&self, event_type: &str) -> Vec<EventEnvelope> {
        self.published_events()
            .into_iter()
            .filter(|e| e.event_type == event_type)
            .collect()
    }

    /// Returns envelopes for a specific aggregate.
    pub fn events_for_aggregate(&self, aggregate_id: &str) -> Vec<EventEnvelope> {
        self.published_events()
            .into_iter()
            .filter(|e| e.aggregate_id == aggregate_id)
            .collect()
    }

    /// Returns the count of published envelopes.
    pub fn event_count(&self) -> usize {
        self.published
            .read()
            .expect("InMemoryEventPublisher: published lock poisoned")
            .len()
    }

    /// Checks whether an event of the given type was published.
    pub fn has_event(&self, event_type: &str) -> bool {
        self.published
            .read()
            .expect("InMemoryEventPublisher: published lock poisoned")
            .iter()
            .any(|e| e.event_type == event_type)
    }

    /// Clears captured envelopes (for test isolation).
    pub fn clear(&self) {
        self.published
            .write()
            .expect("InMemoryEventPublisher: published write lock poisoned")
            .clear();
    }
}

impl Default for InMemoryEventPublisher {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl EventPublisher for InMemoryEventPublisher {
    async fn publish(&self, event: EventEnvelope) -> Result<(), DomainError> {
        self.published
            .write()
            .expect("InMemoryEventPublisher: published write lock poisoned")
            .push(event);
        Ok(())
    }

    async fn publish_all(&self, events: Vec<EventEnvelope>) -> Result<(), DomainError> {
        let mut published = self
            .published
            .write()
            .expect("InMemoryEventPublisher: published write lock poisoned");
        published.extend(events);
        Ok(())
    }
}
