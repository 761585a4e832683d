//! Session-scoped event catalog.
//!
//! Built-in events are fixed for the process lifetime. Submitted events are
//! appended behind them and disappear with the session.

use tracing::info;

use crate::domain::{Event, EventId};

use super::builtin::builtin_events;

/// Built-in events followed by events submitted this session
#[derive(Debug, Clone)]
pub struct EventCatalog {
    /// Fixed built-in list
    builtin: Vec<Event>,

    /// Events appended this session, in submission order
    submitted: Vec<Event>,
}

impl Default for EventCatalog {
    fn default() -> Self {
        Self::new()
    }
}

impl EventCatalog {
    /// Create a catalog seeded with the shipped built-in events
    pub fn new() -> Self {
        Self::with_builtin(builtin_events())
    }

    /// Create a catalog seeded with a custom built-in list
    pub fn with_builtin(builtin: Vec<Event>) -> Self {
        Self {
            builtin,
            submitted: Vec::new(),
        }
    }

    /// Built-in events concatenated with submitted ones
    pub fn load(&self) -> Vec<Event> {
        self.iter().cloned().collect()
    }

    /// Iterate in catalog order without cloning
    pub fn iter(&self) -> impl Iterator<Item = &Event> + '_ {
        self.builtin.iter().chain(self.submitted.iter())
    }

    /// Append an event, assigning `id = len + 1`.
    ///
    /// Performs no validation; callers are expected to have validated.
    pub fn append(&mut self, mut event: Event) -> &Event {
        event.id = EventId(self.len() as u32 + 1);
        info!(id = %event.id, title = %event.title, "Appended event to catalog");
        self.submitted.push(event);
        &self.submitted[self.submitted.len() - 1]
    }

    /// Get an event by ID
    pub fn get(&self, id: EventId) -> Option<&Event> {
        self.iter().find(|e| e.id == id)
    }

    /// Events submitted this session
    pub fn submitted(&self) -> &[Event] {
        &self.submitted
    }

    /// Get the number of events
    pub fn len(&self) -> usize {
        self.builtin.len() + self.submitted.len()
    }

    /// Check if the catalog is empty
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
