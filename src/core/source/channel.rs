//=========================================================================
// Channel Source
//=========================================================================
//
// Production event source over a crossbeam channel.
//
// Architecture:
//   RecordSender (producer threads) → Receiver<RawEvent> → stash → Dequeue
//
// The stash only fills during range flushing: the whole backlog is pulled
// out of the channel so matching records can be removed without
// reordering the rest. Dequeues always read the stash first.
//
// Disconnection (every sender dropped) is the permanent "closed" signal.
//
//=========================================================================

//=== Standard Library Imports ============================================

use std::collections::VecDeque;
use std::ops::RangeInclusive;
use std::time::Duration;

//=== External Crates =====================================================

use crossbeam_channel::{Receiver, RecvTimeoutError, Sender, TryRecvError};
use log::{debug, trace};

//=== Internal Dependencies ===============================================

use super::{Dequeue, EventSource};
use crate::core::raw::RawEvent;

//=== RecordSender ========================================================

/// Producer half handed to whatever generates raw records.
pub type RecordSender = Sender<RawEvent>;

//=== ChannelSource =======================================================

/// [`EventSource`] reading from a crossbeam receiver.
pub struct ChannelSource {
    receiver: Receiver<RawEvent>,
    stash: VecDeque<RawEvent>,
}

impl ChannelSource {
    //--- Construction -----------------------------------------------------

    pub fn new(receiver: Receiver<RawEvent>) -> Self {
        Self {
            receiver,
            stash: VecDeque::new(),
        }
    }

    /// Creates a bounded channel and its source.
    ///
    /// # Panics
    ///
    /// Panics if `capacity == 0` (a rendezvous channel would block every
    /// producer until the consumer polls).
    pub fn bounded(capacity: usize) -> (RecordSender, Self) {
        assert!(capacity > 0, "Channel capacity must be positive");
        let (sender, receiver) = crossbeam_channel::bounded(capacity);
        (sender, Self::new(receiver))
    }

    //--- Accessors --------------------------------------------------------

    /// Records currently pending (stash + channel).
    pub fn len(&self) -> usize {
        self.stash.len() + self.receiver.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    //--- Internal Helpers -------------------------------------------------

    /// Moves everything currently in the channel into the stash.
    fn stash_backlog(&mut self) {
        while let Ok(raw) = self.receiver.try_recv() {
            self.stash.push_back(raw);
        }
    }
}

//=== EventSource Implementation ==========================================

impl EventSource for ChannelSource {
    fn try_dequeue(&mut self) -> Dequeue {
        if let Some(raw) = self.stash.pop_front() {
            return Dequeue::Record(raw);
        }

        match self.receiver.try_recv() {
            Ok(raw) => Dequeue::Record(raw),
            Err(TryRecvError::Empty) => Dequeue::Empty,
            Err(TryRecvError::Disconnected) => Dequeue::Closed,
        }
    }

    fn block_dequeue(&mut self) -> Dequeue {
        if let Some(raw) = self.stash.pop_front() {
            return Dequeue::Record(raw);
        }

        match self.receiver.recv() {
            Ok(raw) => Dequeue::Record(raw),
            Err(_) => {
                debug!(target: "events::source", "Record channel disconnected");
                Dequeue::Closed
            }
        }
    }

    fn block_dequeue_timeout(&mut self, timeout: Duration) -> Dequeue {
        if let Some(raw) = self.stash.pop_front() {
            return Dequeue::Record(raw);
        }

        match self.receiver.recv_timeout(timeout) {
            Ok(raw) => Dequeue::Record(raw),
            Err(RecvTimeoutError::Timeout) => Dequeue::Empty,
            Err(RecvTimeoutError::Disconnected) => {
                debug!(target: "events::source", "Record channel disconnected");
                Dequeue::Closed
            }
        }
    }

    fn has_pending(&self) -> bool {
        !self.stash.is_empty() || !self.receiver.is_empty()
    }

    fn discard_kinds(&mut self, kinds: RangeInclusive<u32>) -> usize {
        self.stash_backlog();

        let before = self.stash.len();
        self.stash.retain(|raw| !kinds.contains(&raw.kind));
        let dropped = before - self.stash.len();

        trace!(
            target: "events::source",
            "Discarded {} records in 0x{:04X}..=0x{:04X} ({} kept)",
            dropped,
            kinds.start(),
            kinds.end(),
            self.stash.len()
        );
        dropped
    }
}

//=========================================================================
// Unit Tests
//=========================================================================
