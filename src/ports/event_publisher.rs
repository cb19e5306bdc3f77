//! EventPublisher port - Interface for publishing domain events.
//!
//! This port defines how the engine fans out ledger and lifecycle events
//! without knowing the transport. The notification system subscribes on
//! the other side of whatever adapter backs it.

use async_trait::async_trait;

use crate::domain::foundation::{DomainError, EventEnvelope};

/// Port for publishing domain events.
///
/// Implementations must ensure:
/// - Events are delivered at-least-once (subscribers may see duplicates
///   and deduplicate on the envelope's event id)
/// - `publish_all` is atomic where supported by the adapter
/// - Errors are propagated to the caller
///
/// # Example
///
/// ```ignore
/// let event = RewardEvent::AttendanceRecorded { /* ... */ };
/// publisher.publish(event.to_envelope()).await?;
/// ```
#[async_trait]
pub trait EventPublisher: Send + Sync {
    /// Publish a single event.
    ///
    /// The event arrives wrapped in an `EventEnvelope` containing:
    /// - Event ID for deduplication
    /// - Event type for routing
    /// - Aggregate context for correlation
    /// - Metadata for tracing
    async fn publish(&self, event: EventEnvelope) -> Result<(), DomainError>;

    /// Publish multiple events.
    ///
    /// All events are published or none are, where the adapter supports
    /// atomic publishing. Adapters that cannot publish atomically send
    /// sequentially with best-effort delivery.
    async fn publish_all(&self, events: Vec<EventEnvelope>) -> Result<(), DomainError>;
}
