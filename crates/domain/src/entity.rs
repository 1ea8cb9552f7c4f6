//! Pending-event capability shared by entities.

use crate::event::DomainEvent;

/// Ordered buffer of events an entity has raised but that have not been
/// published yet.
///
/// Insertion order is preserved and duplicates are kept.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EventBuffer {
    events: Vec<DomainEvent>,
}

impl EventBuffer {
    /// Creates an empty buffer.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends an event.
    pub fn raise(&mut self, event: impl Into<DomainEvent>) {
        self.events.push(event.into());
    }

    /// Returns the pending events in the order they were raised.
    pub fn events(&self) -> &[DomainEvent] {
        &self.events
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    /// Removes and returns every pending event, oldest first.
    pub fn drain(&mut self) -> Vec<DomainEvent> {
        std::mem::take(&mut self.events)
    }

    /// Discards every pending event.
    pub fn clear(&mut self) {
        self.events.clear();
    }
}

/// An object that accumulates domain events until a save publishes them.
///
/// Implementors embed an `EventBuffer` and expose it; the provided methods
/// do the rest.
pub trait Entity {
    fn event_buffer(&self) -> &EventBuffer;

    fn event_buffer_mut(&mut self) -> &mut EventBuffer;

    /// Events raised since the last successful save.
    fn pending_events(&self) -> &[DomainEvent] {
        self.event_buffer().events()
    }

    fn raise_event(&mut self, event: impl Into<DomainEvent>) {
        self.event_buffer_mut().raise(event);
    }

    fn clear_events(&mut self) {
        self.event_buffer_mut().clear();
    }

    fn take_events(&mut self) -> Vec<DomainEvent> {
        self.event_buffer_mut().drain()
    }
}
