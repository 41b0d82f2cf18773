//! Event sink port.

use async_trait::async_trait;

use crate::events::DomainEvent;
use crate::result::AppResult;

/// Fire-and-forget outlet for domain events.
///
/// Implementations deliver events to the notification collaborator. A sink
/// failure must never fail the business operation that produced the event;
/// callers log and continue.
#[async_trait]
pub trait EventSink: Send + Sync {
    /// Deliver one event.
    async fn emit(&self, event: DomainEvent) -> AppResult<()>;
}
