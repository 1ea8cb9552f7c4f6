//! Domain events raised by entities.
//!
//! Events are transient: they live in an entity's `EventBuffer` until a save
//! collects them, and are dropped once published.

use common::{EventId, ItemId};
use serde::{Deserialize, Serialize};

/// Raised when a new item is created.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItemCreated {
    /// Identifier of this event occurrence.
    pub id: EventId,
    /// The item that was created.
    pub item_id: ItemId,
}

impl ItemCreated {
    /// Creates the event for `item_id` with a fresh event identifier.
    pub fn new(item_id: ItemId) -> Self {
        Self {
            id: EventId::new(),
            item_id,
        }
    }
}

/// Every concrete domain event, one variant per kind.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", content = "data")]
pub enum DomainEvent {
    ItemCreated(ItemCreated),
}

impl DomainEvent {
    /// Returns the identifier shared by all event shapes.
    pub fn id(&self) -> EventId {
        match self {
            DomainEvent::ItemCreated(e) => e.id,
        }
    }

    /// Returns the kind used to select handlers.
    pub fn kind(&self) -> EventKind {
        match self {
            DomainEvent::ItemCreated(_) => EventKind::ItemCreated,
        }
    }

    /// Returns the event type name used in logs and metrics labels.
    pub fn event_type(&self) -> &'static str {
        self.kind().as_str()
    }
}

impl From<ItemCreated> for DomainEvent {
    fn from(event: ItemCreated) -> Self {
        DomainEvent::ItemCreated(event)
    }
}

/// Discriminant of `DomainEvent`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EventKind {
    ItemCreated,
}

impl EventKind {
    /// Returns the stable name of this kind.
    pub fn as_str(&self) -> &'static str {
        match self {
            EventKind::ItemCreated => "ItemCreated",
        }
    }
}

impl std::fmt::Display for EventKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
