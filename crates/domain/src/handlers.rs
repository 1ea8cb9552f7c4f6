//! Handlers reacting to domain events.

use async_trait::async_trait;

use crate::error::HandlerError;
use crate::event::ItemCreated;
use crate::publisher::EventHandler;

/// Writes a structured log line for every created item.
#[derive(Debug, Clone, Copy, Default)]
pub struct LogItemCreated;

#[async_trait]
impl EventHandler<ItemCreated> for LogItemCreated {
    fn name(&self) -> &'static str {
        "LogItemCreated"
    }

    async fn handle(&self, event: &ItemCreated) -> Result<(), HandlerError> {
        tracing::info!(item_id = %event.item_id, event_id = %event.id, "item created");
        Ok(())
    }
}
