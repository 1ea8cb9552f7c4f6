//! The item entity.

use common::ItemId;

use crate::entity::{Entity, EventBuffer};
use crate::event::ItemCreated;

/// A named resource.
///
/// New items are only built through [`Item::create`], which raises the
/// creation event. Items loaded from storage come back through
/// [`Item::restore`] with an empty event buffer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Item {
    id: ItemId,
    name: String,
    events: EventBuffer,
}

impl Item {
    /// Creates a new item and raises `ItemCreated` for it.
    ///
    /// The name is taken as-is; empty names and duplicates are allowed.
    pub fn create(name: impl Into<String>) -> Self {
        let id = ItemId::new();
        let mut item = Self::restore(id, name);
        item.raise_event(ItemCreated::new(id));
        item
    }

    /// Rebuilds an item from persisted state.
    pub fn restore(id: ItemId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            events: EventBuffer::new(),
        }
    }

    pub fn id(&self) -> ItemId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Replaces the item's name. No event is raised.
    pub fn rename(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }
}

impl Entity for Item {
    fn event_buffer(&self) -> &EventBuffer {
        &self.events
    }

    fn event_buffer_mut(&mut self) -> &mut EventBuffer {
        &mut self.events
    }
}
