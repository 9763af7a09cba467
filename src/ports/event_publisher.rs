//! EventPublisher port - the event sink for crisis events.
//!
//! The engine publishes envelopes without knowing the transport. Delivery
//! is fire-and-forget relative to the message-send path: a failure is the
//! adapter's to queue/retry and must never fail the policy decision.

use async_trait::async_trait;

use crate::domain::foundation::{DomainError, EventEnvelope};

/// Port for publishing crisis events.
///
/// Implementations must ensure:
/// - Events are delivered at-least-once (consumers may see duplicates)
/// - Errors are returned to the caller, which decides isolation
#[async_trait]
pub trait EventPublisher: Send + Sync {
    /// Publish a single event.
    async fn publish(&self, event: EventEnvelope) -> Result<(), DomainError>;

    /// Publish multiple events, sequentially with best-effort delivery.
    async fn publish_all(&self, events: Vec<EventEnvelope>) -> Result<(), DomainError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    // Compile-time check that the trait is object-safe.
    #[allow(dead_code)]
    fn assert_object_safe(_: &dyn EventPublisher) {}
}
