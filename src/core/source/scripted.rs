//=========================================================================
// Scripted Source (test support)
//=========================================================================
//
// In-memory event source fed with a fixed record sequence.
//
// Timed waits are simulated with real sleeps so wall-clock properties can
// be checked:
// - each record takes `delay` to "arrive"; a wait shorter than that sleeps
//   for the full wait and reports empty, leaving the record queued
// - `spurious_wakeups` makes the next N timed waits return empty at once
// - every requested timeout is recorded
//
//=========================================================================

use std::collections::VecDeque;
use std::ops::RangeInclusive;
use std::thread;
use std::time::Duration;

use super::{Dequeue, EventSource};
use crate::core::raw::RawEvent;

#[derive(Debug, Default)]
pub(crate) struct ScriptedSource {
    records: VecDeque<RawEvent>,
    closed: bool,
    delay: Duration,
    spurious_wakeups: usize,
    requested: Vec<Duration>,
}

impl ScriptedSource {
    pub(crate) fn new(records: impl IntoIterator<Item = RawEvent>) -> Self {
        Self {
            records: records.into_iter().collect(),
            ..Self::default()
        }
    }

    /// Source that reports shutdown once its records run out.
    pub(crate) fn closing(records: impl IntoIterator<Item = RawEvent>) -> Self {
        Self {
            closed: true,
            ..Self::new(records)
        }
    }

    pub(crate) fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }

    pub(crate) fn with_spurious_wakeups(mut self, count: usize) -> Self {
        self.spurious_wakeups = count;
        self
    }

    pub(crate) fn push(&mut self, raw: RawEvent) {
        self.records.push_back(raw);
    }

    /// Timeouts passed to `block_dequeue_timeout`, in call order.
    pub(crate) fn requested_timeouts(&self) -> &[Duration] {
        &self.requested
    }

    fn empty_or_closed(&self) -> Dequeue {
        if self.closed {
            Dequeue::Closed
        } else {
            Dequeue::Empty
        }
    }
}

impl EventSource for ScriptedSource {
    fn try_dequeue(&mut self) -> Dequeue {
        match self.records.pop_front() {
            Some(raw) => Dequeue::Record(raw),
            None => self.empty_or_closed(),
        }
    }

    fn block_dequeue(&mut self) -> Dequeue {
        match self.records.pop_front() {
            Some(raw) => {
                thread::sleep(self.delay);
                Dequeue::Record(raw)
            }
            // Nothing will ever be pushed while the caller is blocked.
            None => Dequeue::Closed,
        }
    }

    fn block_dequeue_timeout(&mut self, timeout: Duration) -> Dequeue {
        self.requested.push(timeout);

        if self.spurious_wakeups > 0 {
            self.spurious_wakeups -= 1;
            return Dequeue::Empty;
        }

        if self.records.is_empty() {
            if self.closed {
                return Dequeue::Closed;
            }
            thread::sleep(timeout);
            return Dequeue::Empty;
        }

        if self.delay > timeout {
            thread::sleep(timeout);
            return Dequeue::Empty;
        }

        thread::sleep(self.delay);
        self.try_dequeue()
    }

    fn has_pending(&self) -> bool {
        !self.records.is_empty()
    }

    fn discard_kinds(&mut self, kinds: RangeInclusive<u32>) -> usize {
        let before = self.records.len();
        self.records.retain(|raw| !kinds.contains(&raw.kind));
        before - self.records.len()
    }
}
