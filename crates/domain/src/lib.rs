//! Domain layer for the item service.
//!
//! This crate provides:
//! - `EventBuffer` and the `Entity` capability for collecting pending events
//! - The `Item` entity and its creation event
//! - `EventPublisher` with per-variant handler lists resolved at startup
//! - `LogItemCreated`, the observational handler for new items

pub mod entity;
pub mod error;
pub mod event;
pub mod handlers;
pub mod item;
pub mod publisher;

pub use common::{EventId, ItemId};
pub use entity::{Entity, EventBuffer};
pub use error::{HandlerError, PublishError};
pub use event::{DomainEvent, EventKind, ItemCreated};
pub use handlers::LogItemCreated;
pub use item::Item;
pub use publisher::{EventHandler, EventPublisher, EventPublisherBuilder};
