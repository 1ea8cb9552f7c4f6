//! In-process publication of domain events.

use std::sync::Arc;

use async_trait::async_trait;

use crate::error::{HandlerError, PublishError};
use crate::event::{DomainEvent, EventKind, ItemCreated};

/// Handles one concrete kind of domain event.
#[async_trait]
pub trait EventHandler<E: Send + Sync>: Send + Sync {
    /// Returns the handler name, used in logs and error reports.
    fn name(&self) -> &'static str;

    /// Handles a single event.
    async fn handle(&self, event: &E) -> Result<(), HandlerError>;
}

/// Collects handlers per event kind before the publisher is frozen.
#[derive(Default)]
pub struct EventPublisherBuilder {
    item_created: Vec<Arc<dyn EventHandler<ItemCreated>>>,
}

impl EventPublisherBuilder {
    /// Registers a handler for `ItemCreated`. Handlers run in registration order.
    pub fn on_item_created(mut self, handler: impl EventHandler<ItemCreated> + 'static) -> Self {
        self.item_created.push(Arc::new(handler));
        self
    }

    pub fn build(self) -> EventPublisher {
        EventPublisher {
            item_created: self.item_created,
        }
    }
}

/// Dispatches domain events to the handlers registered for their variant.
///
/// Handlers for one event run sequentially, each awaited before the next.
/// The first failure stops dispatch of that event.
#[derive(Default)]
pub struct EventPublisher {
    item_created: Vec<Arc<dyn EventHandler<ItemCreated>>>,
}

impl EventPublisher {
    pub fn builder() -> EventPublisherBuilder {
        EventPublisherBuilder::default()
    }

    /// Returns the number of handlers registered for `kind`.
    pub fn handler_count(&self, kind: EventKind) -> usize {
        match kind {
            EventKind::ItemCreated => self.item_created.len(),
        }
    }

    /// Publishes one event to every handler registered for its variant.
    #[tracing::instrument(skip(self, event), fields(event_type = event.event_type(), event_id = %event.id()))]
    pub async fn publish(&self, event: &DomainEvent) -> Result<(), PublishError> {
        match event {
            DomainEvent::ItemCreated(e) => dispatch(&self.item_created, e, event).await?,
        }

        metrics::counter!("domain_events_published_total", "event_type" => event.event_type())
            .increment(1);
        Ok(())
    }
}

async fn dispatch<E: Send + Sync>(
    handlers: &[Arc<dyn EventHandler<E>>],
    payload: &E,
    event: &DomainEvent,
) -> Result<(), PublishError> {
    for handler in handlers {
        handler.handle(payload).await.map_err(|source| {
            tracing::warn!(handler = handler.name(), error = %source, "event handler failed");
            PublishError::Handler {
                handler: handler.name(),
                event_id: event.id(),
                source,
            }
        })?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use common::ItemId;
    use tokio::sync::Mutex;

    /// Appends `(tag, item_id)` to a shared log on every call.
    struct Recording {
        tag: &'static str,
        log: Arc<Mutex<Vec<(&'static str, ItemId)>>>,
    }

    #[async_trait]
    impl EventHandler<ItemCreated> for Recording {
        fn name(&self) -> &'static str {
            self.tag
        }

        async fn handle(&self, event: &ItemCreated) -> Result<(), HandlerError> {
            self.log.lock().await.push((self.tag, event.item_id));
            Ok(())
        }
    }

    struct Failing;

    #[async_trait]
    impl EventHandler<ItemCreated> for Failing {
        fn name(&self) -> &'static str {
            "failing"
        }

        async fn handle(&self, _event: &ItemCreated) -> Result<(), HandlerError> {
            Err(HandlerError::new("boom"))
        }
    }

    fn item_created() -> (ItemId, DomainEvent) {
        let item_id = ItemId::new();
        (item_id, ItemCreated::new(item_id).into())
    }

    #[tokio::test]
    async fn publish_without_handlers_succeeds() {
        let publisher = EventPublisher::builder().build();
        let (_, event) = item_created();

        assert_eq!(publisher.handler_count(EventKind::ItemCreated), 0);
        assert!(publisher.publish(&event).await.is_ok());
    }

    #[tokio::test]
    async fn handlers_run_in_registration_order() {
        let log = Arc::new(Mutex::new(Vec::new()));
        let publisher = EventPublisher::builder()
            .on_item_created(Recording {
                tag: "first",
                log: Arc::clone(&log),
            })
            .on_item_created(Recording {
                tag: "second",
                log: Arc::clone(&log),
            })
            .build();

        let (item_id, event) = item_created();
        publisher.publish(&event).await.unwrap();

        assert_eq!(
            *log.lock().await,
            vec![("first", item_id), ("second", item_id)]
        );
    }

    #[tokio::test]
    async fn failing_handler_stops_the_rest() {
        let log = Arc::new(Mutex::new(Vec::new()));
        let publisher = EventPublisher::builder()
            .on_item_created(Recording {
                tag: "before",
                log: Arc::clone(&log),
            })
            .on_item_created(Failing)
            .on_item_created(Recording {
                tag: "after",
                log: Arc::clone(&log),
            })
            .build();

        let (item_id, event) = item_created();
        let err = publisher.publish(&event).await.unwrap_err();

        let PublishError::Handler {
            handler, event_id, ..
        } = err;
        assert_eq!(handler, "failing");
        assert_eq!(event_id, event.id());
        assert_eq!(*log.lock().await, vec![("before", item_id)]);
    }
}
