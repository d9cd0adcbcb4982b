//=========================================================================
// Event Record Source
//=========================================================================
//
// Seam between the event layer and whatever produces raw records.
//
// The queue only needs four primitives: a non-blocking dequeue, a blocking
// dequeue with and without a timeout, and a pending check. Range flushing
// is the one mutating extra.
//
// Architecture:
// ```text
//  producer ──records──► EventSource ──Dequeue──► EventQueue
//                         ├─ ChannelSource (crossbeam receiver)
//                         └─ test fakes
// ```
//
// "Closed" is permanent: once a source reports it, no further record will
// ever arrive, and blocking calls return immediately.
//
//=========================================================================

//=== Submodules ==========================================================

mod channel;

#[cfg(test)]
pub(crate) mod scripted;

//=== Standard Library Imports ============================================

use std::ops::RangeInclusive;
use std::time::Duration;

//=== Internal Dependencies ===============================================

use crate::core::raw::RawEvent;

//=== Public Exports ======================================================

pub use channel::{ChannelSource, RecordSender};

//=== Dequeue =============================================================

/// Outcome of a dequeue attempt.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Dequeue {
    /// One record, removed from the source.
    Record(RawEvent),

    /// Nothing pending (non-blocking call) or the wait ran out.
    Empty,

    /// The source shut down for good.
    Closed,
}

impl Dequeue {
    pub fn into_record(self) -> Option<RawEvent> {
        match self {
            Self::Record(raw) => Some(raw),
            Self::Empty | Self::Closed => None,
        }
    }

    pub fn is_closed(&self) -> bool {
        matches!(self, Self::Closed)
    }
}

//=== EventSource =========================================================

/// FIFO of raw records filled by a producer.
///
/// Implementations must hand records out in arrival order and remove each
/// record exactly once.
pub trait EventSource {
    /// Removes the next record if one is pending. Never blocks.
    fn try_dequeue(&mut self) -> Dequeue;

    /// Blocks until a record arrives or the source closes.
    ///
    /// Never returns [`Dequeue::Empty`].
    fn block_dequeue(&mut self) -> Dequeue;

    /// Blocks for at most `timeout`.
    ///
    /// May return [`Dequeue::Empty`] early (spurious wakeup); callers that
    /// need a floor on the wait must re-wait for the remaining time.
    fn block_dequeue_timeout(&mut self, timeout: Duration) -> Dequeue;

    /// `true` if a record is pending. Does not remove it.
    fn has_pending(&self) -> bool;

    /// Drops every pending record whose discriminant is in `kinds`, keeping
    /// the rest in order. Returns the number dropped.
    fn discard_kinds(&mut self, kinds: RangeInclusive<u32>) -> usize;
}

impl<S: EventSource + ?Sized> EventSource for &mut S {
    fn try_dequeue(&mut self) -> Dequeue {
        (**self).try_dequeue()
    }

    fn block_dequeue(&mut self) -> Dequeue {
        (**self).block_dequeue()
    }

    fn block_dequeue_timeout(&mut self, timeout: Duration) -> Dequeue {
        (**self).block_dequeue_timeout(timeout)
    }

    fn has_pending(&self) -> bool {
        (**self).has_pending()
    }

    fn discard_kinds(&mut self, kinds: RangeInclusive<u32>) -> usize {
        (**self).discard_kinds(kinds)
    }
}

//=========================================================================
// Unit Tests
//=========================================================================
