//=========================================================================
// Blocking Waits
//=========================================================================
//
// Single-event retrieval that blocks the calling thread.
//
// State machine (both operations):
// ```text
//   Idle ──dequeue──► HaveRecord ──decode──► Done(Some(event))
//    ▲                    │
//    └── unsupported ◄────┘
//   Idle ──empty/closed/budget spent──► Done(None)
// ```
//
// `wait_one` only ends on a supported event or shutdown. `wait_one_timeout`
// budgets its retries according to the queue's `TimeoutPolicy`.
//
//=========================================================================

//=== Standard Library Imports ============================================

use std::time::{Duration, Instant};

//=== External Crates =====================================================

use log::debug;

//=== Internal Dependencies ===============================================

use super::{skip, EventQueue, TimeoutPolicy};
use crate::core::decoder::decode;
use crate::core::event::Event;
use crate::core::raw::RawEvent;
use crate::core::source::{Dequeue, EventSource};

//=== WaitState ===========================================================

enum WaitState {
    Idle,
    HaveRecord(RawEvent),
    Done(Option<Event>),
}

impl WaitState {
    /// Decodes a held record: the event ends the wait, an unsupported
    /// record sends it back to `Idle`.
    fn decode(raw: &RawEvent) -> Self {
        match decode(raw) {
            Ok(event) => Self::Done(Some(event)),
            Err(unsupported) => {
                skip(unsupported);
                Self::Idle
            }
        }
    }
}

//=== Blocking API ========================================================

impl<S: EventSource> EventQueue<S> {
    /// Blocks until a supported event arrives.
    ///
    /// Unsupported records are consumed and the wait continues. Returns
    /// `None` only once the source has shut down.
    pub fn wait_one(&mut self) -> Option<Event> {
        let mut state = WaitState::Idle;

        loop {
            state = match state {
                WaitState::Idle => match self.source.block_dequeue() {
                    Dequeue::Record(raw) => WaitState::HaveRecord(raw),
                    // Spurious wakeup.
                    Dequeue::Empty => WaitState::Idle,
                    Dequeue::Closed => {
                        debug!(target: "events::queue", "Wait ended: source closed");
                        WaitState::Done(None)
                    }
                },
                WaitState::HaveRecord(raw) => WaitState::decode(&raw),
                WaitState::Done(result) => return result,
            };
        }
    }

    /// Blocks for at most `timeout` waiting for a supported event.
    ///
    /// With the default [`TimeoutPolicy::Deadline`] the call never returns
    /// `None` before `timeout` has elapsed (unless the source closes), and
    /// retries after unsupported records only use what is left of the
    /// budget. A zero timeout makes exactly one non-blocking attempt.
    ///
    /// See [`TimeoutPolicy::ResetPerRetry`] for the alternative.
    pub fn wait_one_timeout(&mut self, timeout: Duration) -> Option<Event> {
        match self.config.timeout_policy {
            TimeoutPolicy::Deadline => match Instant::now().checked_add(timeout) {
                Some(deadline) => self.wait_until(deadline),
                // Deadline not representable: as good as forever.
                None => self.wait_one(),
            },
            TimeoutPolicy::ResetPerRetry => self.wait_reset_per_retry(timeout),
        }
    }

    //--- Internal Helpers -------------------------------------------------

    fn wait_until(&mut self, deadline: Instant) -> Option<Event> {
        let mut state = WaitState::Idle;
        let mut attempted = false;

        loop {
            state = match state {
                WaitState::Idle => {
                    let remaining = deadline.saturating_duration_since(Instant::now());

                    let outcome = if !remaining.is_zero() {
                        self.source.block_dequeue_timeout(remaining)
                    } else if !attempted {
                        self.source.try_dequeue()
                    } else {
                        debug!(target: "events::queue", "Wait ended: timeout");
                        return None;
                    };
                    attempted = true;

                    match outcome {
                        Dequeue::Record(raw) => WaitState::HaveRecord(raw),
                        // Early wake or budget spent; the next round decides.
                        Dequeue::Empty => WaitState::Idle,
                        Dequeue::Closed => {
                            debug!(target: "events::queue", "Wait ended: source closed");
                            WaitState::Done(None)
                        }
                    }
                }
                WaitState::HaveRecord(raw) => WaitState::decode(&raw),
                WaitState::Done(result) => return result,
            };
        }
    }

    fn wait_reset_per_retry(&mut self, timeout: Duration) -> Option<Event> {
        let mut state = WaitState::Idle;

        loop {
            state = match state {
                WaitState::Idle => match self.source.block_dequeue_timeout(timeout) {
                    Dequeue::Record(raw) => WaitState::HaveRecord(raw),
                    Dequeue::Empty | Dequeue::Closed => {
                        debug!(target: "events::queue", "Wait ended: no record");
                        WaitState::Done(None)
                    }
                },
                WaitState::HaveRecord(raw) => WaitState::decode(&raw),
                WaitState::Done(result) => return result,
            };
        }
    }
}

//=========================================================================
// Unit Tests
//=========================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::queue::{EventQueueBuilder, QueueConfig};
    use crate::core::raw::kind;
    use crate::core::source::scripted::ScriptedSource;

    fn unsupported(ts: u32) -> RawEvent {
        RawEvent::new(kind::JOYSTICK_BALL_MOTION, ts)
    }

    fn with_policy(source: ScriptedSource, policy: TimeoutPolicy) -> EventQueue<ScriptedSource> {
        let config = QueueConfig {
            timeout_policy: policy,
            ..QueueConfig::default()
        };
        EventQueue::with_config(source, config)
    }

    //=====================================================================
    // wait_one
    //=====================================================================

    #[test]
    fn wait_one_skips_unsupported_records() {
        let source = ScriptedSource::new([unsupported(1), unsupported(2), RawEvent::quit(3)]);
        let mut queue = EventQueue::new(source);

        let event = queue.wait_one();
        assert_eq!(event.map(|e| e.timestamp()), Some(3));
    }

    #[test_log::test]
    fn wait_one_returns_none_on_shutdown() {
        let mut queue = EventQueue::new(ScriptedSource::closing([unsupported(1)]));
        assert_eq!(queue.wait_one(), None);
    }

    #[test]
    fn wait_one_on_disconnected_channel_returns_none() {
        let (sender, mut queue) = EventQueueBuilder::new().build_channel();
        sender.send(RawEvent::quit(1)).unwrap();
        drop(sender);

        assert!(queue.wait_one().is_some_and(|e| e.is_quit()));
        assert_eq!(queue.wait_one(), None);
    }

    //=====================================================================
    // wait_one_timeout: Deadline
    //=====================================================================

    #[test]
    fn timeout_on_empty_queue_waits_at_least_the_duration() {
        let timeout = Duration::from_millis(30);
        let (_sender, mut queue) = EventQueueBuilder::new().build_channel();

        let start = Instant::now();
        assert_eq!(queue.wait_one_timeout(timeout), None);
        assert!(start.elapsed() >= timeout);
    }

    #[test]
    fn early_wakeups_do_not_shorten_the_wait() {
        let timeout = Duration::from_millis(30);
        let source = ScriptedSource::default().with_spurious_wakeups(3);
        let mut queue = EventQueue::new(source);

        let start = Instant::now();
        assert_eq!(queue.wait_one_timeout(timeout), None);
        assert!(start.elapsed() >= timeout);
        assert_eq!(queue.source().requested_timeouts().len(), 4);
    }

    #[test]
    fn deadline_bounds_retries_after_unsupported_records() {
        let timeout = Duration::from_millis(30);
        let mut records: Vec<RawEvent> = (0..8).map(unsupported).collect();
        records.push(RawEvent::quit(99));
        let source = ScriptedSource::new(records).with_delay(Duration::from_millis(10));
        let mut queue = with_policy(source, TimeoutPolicy::Deadline);

        // Reaching the quit record would take ~90ms of arrivals.
        assert_eq!(queue.wait_one_timeout(timeout), None);

        let requested = queue.source().requested_timeouts();
        assert!(requested.iter().all(|&t| t <= timeout));
        assert!(requested.windows(2).all(|w| w[1] <= w[0]));
    }

    #[test]
    fn deadline_returns_supported_event_within_budget() {
        let source = ScriptedSource::new([unsupported(1), RawEvent::quit(2)])
            .with_delay(Duration::from_millis(5));
        let mut queue = with_policy(source, TimeoutPolicy::Deadline);

        let event = queue.wait_one_timeout(Duration::from_millis(500));
        assert_eq!(event.map(|e| e.timestamp()), Some(2));
    }

    #[test]
    fn zero_timeout_is_one_non_blocking_attempt() {
        let mut queue = EventQueue::new(ScriptedSource::new([RawEvent::quit(1)]));
        assert!(queue.wait_one_timeout(Duration::ZERO).is_some());

        // Unsupported record consumed, nothing retried.
        queue.source_mut().push(unsupported(2));
        queue.source_mut().push(RawEvent::quit(3));
        assert_eq!(queue.wait_one_timeout(Duration::ZERO), None);
        assert!(queue.has_events());
        assert!(queue.source().requested_timeouts().is_empty());
    }

    #[test]
    fn timeout_on_closed_source_returns_immediately() {
        let mut queue = EventQueue::new(ScriptedSource::closing(Vec::<RawEvent>::new()));

        let start = Instant::now();
        assert_eq!(queue.wait_one_timeout(Duration::from_secs(10)), None);
        assert!(start.elapsed() < Duration::from_secs(5));
    }

    //=====================================================================
    // wait_one_timeout: ResetPerRetry
    //=====================================================================

    #[test]
    fn reset_policy_rewaits_full_duration_per_retry() {
        let timeout = Duration::from_millis(30);
        let mut records: Vec<RawEvent> = (0..8).map(unsupported).collect();
        records.push(RawEvent::quit(99));
        let source = ScriptedSource::new(records).with_delay(Duration::from_millis(10));
        let mut queue = with_policy(source, TimeoutPolicy::ResetPerRetry);

        let start = Instant::now();
        let event = queue.wait_one_timeout(timeout);

        // Overruns the nominal timeout, but gets through.
        assert_eq!(event.map(|e| e.timestamp()), Some(99));
        assert!(start.elapsed() > timeout);

        let requested = queue.source().requested_timeouts();
        assert_eq!(requested.len(), 9);
        assert!(requested.iter().all(|&t| t == timeout));
    }

    #[test]
    fn reset_policy_gives_up_on_empty_wake() {
        let source = ScriptedSource::default().with_spurious_wakeups(1);
        let mut queue = with_policy(source, TimeoutPolicy::ResetPerRetry);

        assert_eq!(queue.wait_one_timeout(Duration::from_millis(30)), None);
        assert_eq!(queue.source().requested_timeouts().len(), 1);
    }
}
