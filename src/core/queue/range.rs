//=========================================================================
// Event Range
//=========================================================================
//
// Owned, ordered snapshot of the events that were pending when it was
// collected. Multi-pass: iterate it as often as needed.
//
//=========================================================================

//=== Standard Library Imports ============================================

use std::ops::Index;
use std::slice;
use std::vec;

//=== Internal Dependencies ===============================================

use crate::core::event::Event;

//=== EventRange ==========================================================

/// Events drained by [`EventQueue::collect_pending`](super::EventQueue::collect_pending).
#[derive(Debug, Clone, PartialEq, Default)]
pub struct EventRange {
    events: Vec<Event>,
}

impl EventRange {
    pub(crate) fn from_vec(events: Vec<Event>) -> Self {
        Self { events }
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    pub fn iter(&self) -> slice::Iter<'_, Event> {
        self.events.iter()
    }

    pub fn get(&self, index: usize) -> Option<&Event> {
        self.events.get(index)
    }

    pub fn as_slice(&self) -> &[Event] {
        &self.events
    }

    /// Takes ownership of the events, leaving nothing behind.
    pub fn into_vec(self) -> Vec<Event> {
        self.events
    }
}

//--- Trait Implementations -----------------------------------------------

impl Index<usize> for EventRange {
    type Output = Event;

    fn index(&self, index: usize) -> &Event {
        &self.events[index]
    }
}

impl IntoIterator for EventRange {
    type Item = Event;
    type IntoIter = vec::IntoIter<Event>;

    fn into_iter(self) -> Self::IntoIter {
        self.events.into_iter()
    }
}

impl<'a> IntoIterator for &'a EventRange {
    type Item = &'a Event;
    type IntoIter = slice::Iter<'a, Event>;

    fn into_iter(self) -> Self::IntoIter {
        self.events.iter()
    }
}

//=========================================================================
// Unit Tests
//=========================================================================
