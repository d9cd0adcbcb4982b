//=========================================================================
// Event Queue
//
// Consumer facade over an event source: drains raw records, decodes them
// and hands typed events to the caller.
//
// Architecture:
// ```text
//  EventSource ──Dequeue──► decode() ──► collect_pending()  → EventRange (owned, multi-pass)
//                                   ├──► iterate_pending()  → EventView  (lazy, single-pass)
//                                   └──► wait_one[_timeout]() → Option<Event>
// ```
//
// All three paths share `next_pending` / `decode`, so they skip exactly
// the same unsupported records and yield the same sequence.
//
// Consumption rules:
// - Unsupported records are always removed from the source, then skipped
// - "Closed" and "empty" both end a drain; only waits tell them apart
// - One consumer at a time: every consuming call takes `&mut self`
//
//=========================================================================

//=== Submodules ==========================================================

mod config;
mod range;
mod view;
mod wait;

//=== Standard Library Imports ============================================

use std::ops::RangeInclusive;

//=== External Crates =====================================================

use log::trace;

//=== Internal Dependencies ===============================================

use crate::core::decoder::decode;
use crate::core::error::{CollectError, UnsupportedRecord};
use crate::core::event::Event;
use crate::core::source::{Dequeue, EventSource};

//=== Public Exports ======================================================

pub use config::{
    EventQueueBuilder, QueueConfig, TimeoutPolicy, DEFAULT_CHANNEL_CAPACITY,
    DEFAULT_RANGE_CAPACITY,
};
pub use range::EventRange;
pub use view::EventView;

//=== EventQueue ==========================================================

/// Typed view of an event source.
///
/// # Examples
///
/// ```
/// use aetheric_events::core::event::Event;
/// use aetheric_events::core::queue::EventQueueBuilder;
/// use aetheric_events::core::raw::{kind, RawEvent};
///
/// let (sender, mut queue) = EventQueueBuilder::new().build_channel();
/// sender.send(RawEvent::window(kind::WINDOW_MOVED, 1, 1, 100, 200)).unwrap();
/// sender.send(RawEvent::new(kind::JOYSTICK_BALL_MOTION, 2)).unwrap();
/// sender.send(RawEvent::quit(3)).unwrap();
///
/// for event in queue.iterate_pending() {
///     match event {
///         Event::Window(window) => assert!(window.position().is_some()),
///         Event::Quit(_) => break,
///         _ => {}
///     }
/// }
/// ```
pub struct EventQueue<S: EventSource> {
    source: S,
    config: QueueConfig,
}

impl<S: EventSource> EventQueue<S> {
    //--- Construction -----------------------------------------------------

    /// Wraps `source` with the default configuration.
    pub fn new(source: S) -> Self {
        Self::with_config(source, QueueConfig::default())
    }

    pub fn with_config(source: S, config: QueueConfig) -> Self {
        Self { source, config }
    }

    //--- Accessors --------------------------------------------------------

    pub fn config(&self) -> &QueueConfig {
        &self.config
    }

    pub fn source(&self) -> &S {
        &self.source
    }

    pub fn source_mut(&mut self) -> &mut S {
        &mut self.source
    }

    pub fn into_source(self) -> S {
        self.source
    }

    //--- Eager Collection -------------------------------------------------

    /// Drains every pending record into an owned range.
    ///
    /// Afterwards the source holds none of the records that were pending
    /// when the call started.
    pub fn collect_pending(&mut self) -> EventRange {
        let mut events = Vec::with_capacity(self.config.range_capacity);
        events.extend(self.iterate_pending());

        trace!(target: "events::queue", "Collected {} events", events.len());
        EventRange::from_vec(events)
    }

    /// Like [`collect_pending`](Self::collect_pending), but reports
    /// allocation failure instead of aborting.
    ///
    /// Room for the next event is reserved before each dequeue, so a failed
    /// reservation never loses a record. Events collected before the
    /// failure are dropped with the error.
    ///
    /// # Errors
    ///
    /// Returns [`CollectError::Allocation`] if the range cannot grow.
    pub fn try_collect_pending(&mut self) -> Result<EventRange, CollectError> {
        let mut events = Vec::new();
        events.try_reserve(self.config.range_capacity)?;

        loop {
            events.try_reserve(1)?;
            match self.next_pending() {
                Some(event) => events.push(event),
                None => break,
            }
        }

        trace!(target: "events::queue", "Collected {} events", events.len());
        Ok(EventRange::from_vec(events))
    }

    //--- Lazy Iteration ---------------------------------------------------

    /// Returns a single-pass iterator that dequeues on demand.
    pub fn iterate_pending(&mut self) -> EventView<'_, S> {
        EventView::new(self)
    }

    //--- Queue Maintenance ------------------------------------------------

    /// `true` if at least one record is pending. Consumes nothing.
    pub fn has_events(&self) -> bool {
        self.source.has_pending()
    }

    /// Discards every pending record without decoding it.
    ///
    /// Returns the number of records discarded.
    pub fn flush_events(&mut self) -> usize {
        let mut flushed = 0;
        while let Dequeue::Record(_) = self.source.try_dequeue() {
            flushed += 1;
        }

        trace!(target: "events::queue", "Flushed {} records", flushed);
        flushed
    }

    /// Discards pending records whose discriminant lies in `kinds`.
    ///
    /// The remaining records keep their relative order. Returns the
    /// number of records discarded.
    pub fn flush_events_range(&mut self, kinds: RangeInclusive<u32>) -> usize {
        self.source.discard_kinds(kinds)
    }

    //--- Internal Helpers -------------------------------------------------

    /// Next supported event, or `None` once the source is empty or closed.
    fn next_pending(&mut self) -> Option<Event> {
        loop {
            match self.source.try_dequeue() {
                Dequeue::Record(raw) => match decode(&raw) {
                    Ok(event) => return Some(event),
                    Err(unsupported) => skip(unsupported),
                },
                Dequeue::Empty | Dequeue::Closed => return None,
            }
        }
    }
}

/// Logs a record that was dequeued but will not be delivered.
fn skip(unsupported: UnsupportedRecord) {
    trace!(
        target: "events::queue",
        "Skipping unsupported record 0x{:04X}",
        unsupported.kind
    );
}

//=========================================================================
// Unit Tests
//=========================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::event::{
        get_display, get_position, get_size, ButtonState, Position, WindowEventKind,
    };
    use crate::core::raw::{kind, RawEvent, RawKeyboard};
    use crate::core::source::scripted::ScriptedSource;
    use crate::core::source::ChannelSource;

    fn key_down(ts: u32) -> RawEvent {
        RawEvent::key(
            kind::KEY_DOWN,
            ts,
            RawKeyboard {
                window_id: 1,
                scancode: 44,
                keycode: ' ' as u32,
                modifiers: 0,
                repeat: 0,
            },
        )
    }

    /// Supported and unsupported records interleaved.
    fn mixed_records() -> Vec<RawEvent> {
        vec![
            RawEvent::quit(1),
            RawEvent::new(kind::JOYSTICK_BALL_MOTION, 2),
            RawEvent::window(kind::WINDOW_RESIZED, 3, 1, 800, 600),
            key_down(4),
            RawEvent::new(0xFFFF, 5),
            RawEvent::new(kind::WINDOW_METAL_VIEW_RESIZED, 6),
            RawEvent::text_input(7, 1, "héllo"),
            RawEvent::joy_hat(8, 0, 0, 1),
            RawEvent::new(kind::LOW_MEMORY, 9),
        ]
    }

    //=====================================================================
    // Consumption Strategies
    //=====================================================================

    #[test_log::test]
    fn eager_and_lazy_paths_yield_the_same_sequence() {
        let mut eager = EventQueue::new(ScriptedSource::new(mixed_records()));
        let mut lazy = EventQueue::new(ScriptedSource::new(mixed_records()));

        let collected = eager.collect_pending().into_vec();
        let iterated: Vec<Event> = lazy.iterate_pending().collect();

        assert_eq!(collected, iterated);
        let stamps: Vec<u32> = collected.iter().map(Event::timestamp).collect();
        assert_eq!(stamps, vec![1, 3, 4, 7, 8]);
    }

    #[test]
    fn try_collect_matches_collect() {
        let mut infallible = EventQueue::new(ScriptedSource::new(mixed_records()));
        let mut fallible = EventQueue::new(ScriptedSource::new(mixed_records()));

        let expected = infallible.collect_pending();
        let actual = fallible.try_collect_pending().expect("allocation");
        assert_eq!(expected, actual);
    }

    #[test]
    fn second_collect_is_empty() {
        let mut queue = EventQueue::new(ScriptedSource::new(mixed_records()));

        assert_eq!(queue.collect_pending().len(), 5);
        assert!(queue.collect_pending().is_empty());
        assert!(!queue.has_events());
    }

    #[test]
    fn unsupported_record_between_two_supported_is_skipped() {
        let records = [
            RawEvent::quit(1),
            RawEvent::new(kind::JOYSTICK_BALL_MOTION, 2),
            key_down(3),
        ];

        let mut queue = EventQueue::new(ScriptedSource::new(records));
        let eager: Vec<u32> = queue.collect_pending().iter().map(Event::timestamp).collect();

        let mut queue = EventQueue::new(ScriptedSource::new(records));
        let lazy: Vec<u32> = queue.iterate_pending().map(|e| e.timestamp()).collect();

        assert_eq!(eager, vec![1, 3]);
        assert_eq!(lazy, vec![1, 3]);
    }

    #[test]
    fn closed_source_collects_what_is_left() {
        let mut queue = EventQueue::new(ScriptedSource::closing([RawEvent::quit(1)]));

        assert_eq!(queue.collect_pending().len(), 1);
        assert!(queue.collect_pending().is_empty());
    }

    #[test]
    fn zero_range_capacity_still_collects() {
        let config = QueueConfig {
            range_capacity: 0,
            ..QueueConfig::default()
        };
        let mut queue = EventQueue::with_config(ScriptedSource::new(mixed_records()), config);
        assert_eq!(queue.collect_pending().len(), 5);
    }

    //=====================================================================
    // Worked Scenario
    //=====================================================================

    #[test]
    fn moved_key_shown_scenario() {
        let records = [
            RawEvent::window(kind::WINDOW_MOVED, 1, 1, 100, 200),
            key_down(2),
            RawEvent::window(kind::WINDOW_SHOWN, 3, 1, 0, 0),
        ];
        let mut queue = EventQueue::new(ScriptedSource::new(records));
        let range = queue.collect_pending();

        assert_eq!(range.len(), 3);

        let Event::Window(moved) = &range[0] else {
            panic!("expected window event, got {:?}", range[0]);
        };
        assert_eq!(moved.kind, WindowEventKind::Moved);
        assert_eq!(get_position(moved), Some(Position { x: 100, y: 200 }));
        assert_eq!(get_size(moved), None);
        assert_eq!(get_display(moved), None);

        let Event::Key(key) = &range[1] else {
            panic!("expected key event, got {:?}", range[1]);
        };
        assert_eq!(key.state, ButtonState::Pressed);

        let Event::Window(shown) = &range[2] else {
            panic!("expected window event, got {:?}", range[2]);
        };
        assert_eq!(shown.kind, WindowEventKind::Shown);
        assert_eq!(get_position(shown), None);
    }

    //=====================================================================
    // Maintenance
    //=====================================================================

    #[test]
    fn flush_events_discards_everything() {
        let mut queue = EventQueue::new(ScriptedSource::new(mixed_records()));

        assert!(queue.has_events());
        assert_eq!(queue.flush_events(), 9);
        assert!(!queue.has_events());
        assert_eq!(queue.flush_events(), 0);
    }

    #[test]
    fn flush_events_range_keeps_other_records_in_order() {
        let mut queue = EventQueue::new(ScriptedSource::new(mixed_records()));

        let dropped = queue.flush_events_range(kind::WINDOW_FIRST..=kind::WINDOW_LAST);
        assert_eq!(dropped, 2);

        let stamps: Vec<u32> = queue.iterate_pending().map(|e| e.timestamp()).collect();
        assert_eq!(stamps, vec![1, 4, 7, 8]);
    }

    #[test]
    fn has_events_counts_unsupported_records() {
        let mut queue =
            EventQueue::new(ScriptedSource::new([RawEvent::new(kind::JOYSTICK_BALL_MOTION, 1)]));

        assert!(queue.has_events());
        assert!(queue.collect_pending().is_empty());
        assert!(!queue.has_events());
    }

    #[test]
    fn records_pushed_after_drain_are_collected_next_time() {
        let mut queue = EventQueue::new(ScriptedSource::new([RawEvent::quit(1)]));
        assert_eq!(queue.collect_pending().len(), 1);

        queue.source_mut().push(RawEvent::quit(2));
        let range = queue.collect_pending();
        assert_eq!(range.get(0).map(Event::timestamp), Some(2));
    }

    #[test]
    fn queue_over_borrowed_source_leaves_it_usable() {
        let (sender, mut source) = ChannelSource::bounded(8);
        sender.send(RawEvent::quit(1)).unwrap();
        sender.send(RawEvent::new(kind::JOYSTICK_BALL_MOTION, 2)).unwrap();
        sender.send(key_down(3)).unwrap();

        {
            let mut queue = EventQueue::new(&mut source);
            assert!(queue.has_events());
            let range = queue.collect_pending();
            assert_eq!(range.iter().map(Event::timestamp).collect::<Vec<_>>(), vec![1, 3]);
        }

        assert!(source.is_empty());
        sender.send(RawEvent::quit(4)).unwrap();
        let mut queue = EventQueue::new(&mut source);
        assert_eq!(queue.wait_one().map(|e| e.timestamp()), Some(4));
    }
}
