//! Identifier types shared by every crate in the item service.

pub mod types;

pub use types::{EventId, ItemId};
