//=========================================================================
// Event View
//=========================================================================
//
// Single-pass cursor over the pending events.
//
// Each `next()` dequeues and decodes until it finds a supported record or
// observes the source empty. Nothing is buffered beyond the event being
// returned. The view holds the queue mutably, so a second view (or a
// collect) cannot run while it is alive.
//
//=========================================================================

//=== Standard Library Imports ============================================

use std::iter::FusedIterator;

//=== Internal Dependencies ===============================================

use super::EventQueue;
use crate::core::event::Event;
use crate::core::source::EventSource;

//=== EventView ===========================================================

/// Lazy iterator returned by [`EventQueue::iterate_pending`].
pub struct EventView<'q, S: EventSource> {
    queue: &'q mut EventQueue<S>,
    finished: bool,
}

impl<'q, S: EventSource> EventView<'q, S> {
    pub(crate) fn new(queue: &'q mut EventQueue<S>) -> Self {
        Self {
            queue,
            finished: false,
        }
    }
}

impl<S: EventSource> Iterator for EventView<'_, S> {
    type Item = Event;

    fn next(&mut self) -> Option<Event> {
        if self.finished {
            return None;
        }

        let next = self.queue.next_pending();
        self.finished = next.is_none();
        next
    }
}

/// Once the source was observed empty the view stays finished, even if
/// records arrive afterwards.
impl<S: EventSource> FusedIterator for EventView<'_, S> {}

//=========================================================================
// Unit Tests
//=========================================================================
