//! Unit of work and the save path that publishes events after commit.

use std::sync::Arc;

use common::ItemId;
use domain::{DomainEvent, Entity, EventPublisher, Item};

use crate::{ItemStore, Result};

/// Entities handed to a single save.
///
/// Callers add entities explicitly; nothing is tracked implicitly.
#[derive(Debug, Default)]
pub struct UnitOfWork {
    items: Vec<Item>,
}

impl UnitOfWork {
    pub fn new() -> Self {
        Self::default()
    }

    /// Tracks an item for the next save.
    pub fn add(&mut self, item: Item) {
        self.items.push(item);
    }

    pub fn items(&self) -> &[Item] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Pending events of every tracked entity, in the order entities were
    /// added and then the order each entity raised them.
    pub fn pending_events(&self) -> Vec<DomainEvent> {
        self.items
            .iter()
            .flat_map(|item| item.pending_events().iter().cloned())
            .collect()
    }

    pub fn into_items(self) -> Vec<Item> {
        self.items
    }

    fn clear_events(&mut self) {
        for item in &mut self.items {
            item.clear_events();
        }
    }
}

/// Persistence context: an item store paired with the publisher that
/// receives events once a commit succeeds.
pub struct StoreContext<S: ItemStore> {
    store: S,
    publisher: Arc<EventPublisher>,
}

impl<S: ItemStore> StoreContext<S> {
    pub fn new(store: S, publisher: Arc<EventPublisher>) -> Self {
        Self { store, publisher }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn publisher(&self) -> &EventPublisher {
        &self.publisher
    }

    /// Commits the unit of work, then publishes the events it collected.
    ///
    /// If the commit fails nothing is published and the entities keep their
    /// pending events. Once the commit succeeds the buffers are cleared and
    /// events are published one at a time; the first publish failure stops
    /// the remaining events and is returned. Returns the number of rows
    /// changed.
    #[tracing::instrument(skip(self, uow), fields(entities = uow.len()))]
    pub async fn save(&self, uow: &mut UnitOfWork) -> Result<u64> {
        let events = uow.pending_events();

        let changed = self.store.commit(uow.items()).await?;
        uow.clear_events();
        metrics::counter!("store_commits_total").increment(1);
        tracing::debug!(changed, events = events.len(), "unit of work committed");

        for event in &events {
            self.publisher.publish(event).await?;
        }

        Ok(changed)
    }

    /// Looks up an item by identifier.
    pub async fn find_item(&self, id: ItemId) -> Result<Option<Item>> {
        self.store.find_by_id(id).await
    }
}
