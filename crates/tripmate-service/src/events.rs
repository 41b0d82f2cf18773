//! Event sink implementations.

use async_trait::async_trait;
use tracing::info;

use tripmate_core::events::DomainEvent;
use tripmate_core::result::AppResult;
use tripmate_core::traits::EventSink;

/// Sink that logs events through `tracing`.
///
/// Stands in for the notification collaborator when none is wired; the
/// server uses it so permission events are at least observable.
#[derive(Debug, Clone, Default)]
pub struct LoggingEventSink;

#[async_trait]
impl EventSink for LoggingEventSink {
    async fn emit(&self, event: DomainEvent) -> AppResult<()> {
        info!(
            event_id = %event.id,
            actor_id = ?event.actor_id,
            payload = ?event.payload,
            "Domain event"
        );
        Ok(())
    }
}
