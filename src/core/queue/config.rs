//=========================================================================
// Queue Configuration
//=========================================================================
//
// Builder and resolved settings for an `EventQueue`.
//
// Architecture:
// ```text
//     EventQueueBuilder  ──build(source)──>  EventQueue<S>
//         │              ──build_channel()─> (RecordSender, EventQueue<ChannelSource>)
//         ├─ with_range_capacity()
//         ├─ with_channel_capacity()
//         └─ with_timeout_policy()
// ```
//
//=========================================================================

//=== External Dependencies ===============================================

use log::debug;

//=== Internal Dependencies ===============================================

use super::EventQueue;
use crate::core::source::{ChannelSource, EventSource, RecordSender};

//=== Defaults ============================================================

/// Initial capacity of an [`EventRange`](super::EventRange).
pub const DEFAULT_RANGE_CAPACITY: usize = 64;

/// Records the channel holds before producers start dropping.
pub const DEFAULT_CHANNEL_CAPACITY: usize = 65_535;

//=== TimeoutPolicy =======================================================

/// How `wait_one_timeout` budgets its retries after an unsupported record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum TimeoutPolicy {
    /// One deadline for the whole call. Each retry waits only for what is
    /// left, and an early empty wake waits again until the deadline.
    #[default]
    Deadline,

    /// Every retry waits the full duration again. A steady stream of
    /// unsupported records can hold the call well past the requested
    /// timeout. An empty wake ends the call.
    ResetPerRetry,
}

//=== QueueConfig =========================================================

/// Resolved queue settings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QueueConfig {
    pub range_capacity: usize,
    pub channel_capacity: usize,
    pub timeout_policy: TimeoutPolicy,
}

impl Default for QueueConfig {
    fn default() -> Self {
        Self {
            range_capacity: DEFAULT_RANGE_CAPACITY,
            channel_capacity: DEFAULT_CHANNEL_CAPACITY,
            timeout_policy: TimeoutPolicy::default(),
        }
    }
}

//=== EventQueueBuilder ===================================================

/// Builder for configuring and constructing an [`EventQueue`].
///
/// # Default Values
///
/// - **Range capacity**: 64 events
/// - **Channel capacity**: 65 535 records
/// - **Timeout policy**: [`TimeoutPolicy::Deadline`]
///
/// # Examples
///
/// ```
/// use aetheric_events::core::queue::{EventQueueBuilder, TimeoutPolicy};
/// use aetheric_events::core::raw::RawEvent;
///
/// let (sender, mut queue) = EventQueueBuilder::new()
///     .with_channel_capacity(256)
///     .with_timeout_policy(TimeoutPolicy::Deadline)
///     .build_channel();
///
/// sender.send(RawEvent::quit(0)).unwrap();
/// assert_eq!(queue.collect_pending().len(), 1);
/// ```
#[derive(Debug, Clone, Default)]
pub struct EventQueueBuilder {
    config: QueueConfig,
}

impl EventQueueBuilder {
    /// Creates a new builder with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the initial capacity reserved by `collect_pending`.
    ///
    /// Only a hint: ranges grow past it as needed. Zero is allowed and
    /// defers allocation to the first event.
    ///
    /// Default: 64
    pub fn with_range_capacity(mut self, capacity: usize) -> Self {
        self.config.range_capacity = capacity;
        self
    }

    /// Sets the record channel capacity used by [`build_channel`](Self::build_channel).
    ///
    /// Default: 65 535
    ///
    /// # Panics
    ///
    /// Panics if `capacity == 0`.
    pub fn with_channel_capacity(mut self, capacity: usize) -> Self {
        assert!(capacity > 0, "Channel capacity must be positive");
        self.config.channel_capacity = capacity;
        self
    }

    /// Sets the retry budget policy of `wait_one_timeout`.
    ///
    /// Default: [`TimeoutPolicy::Deadline`]
    pub fn with_timeout_policy(mut self, policy: TimeoutPolicy) -> Self {
        self.config.timeout_policy = policy;
        self
    }

    /// Builds a queue over an existing source.
    pub fn build<S: EventSource>(self, source: S) -> EventQueue<S> {
        debug!(
            target: "events::queue",
            "Building event queue (range: {}, policy: {:?})",
            self.config.range_capacity,
            self.config.timeout_policy
        );
        EventQueue::with_config(source, self.config)
    }

    /// Creates a bounded record channel and a queue draining it.
    pub fn build_channel(self) -> (RecordSender, EventQueue<ChannelSource>) {
        let (sender, source) = ChannelSource::bounded(self.config.channel_capacity);
        (sender, self.build(source))
    }
}

//=========================================================================
// Unit Tests
//=========================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_documented_values() {
        let config = QueueConfig::default();
        assert_eq!(config.range_capacity, 64);
        assert_eq!(config.channel_capacity, 65_535);
        assert_eq!(config.timeout_policy, TimeoutPolicy::Deadline);
    }

    #[test]
    fn builder_overrides_apply() {
        let (_tx, queue) = EventQueueBuilder::new()
            .with_range_capacity(8)
            .with_channel_capacity(16)
            .with_timeout_policy(TimeoutPolicy::ResetPerRetry)
            .build_channel();

        let config = queue.config();
        assert_eq!(config.range_capacity, 8);
        assert_eq!(config.channel_capacity, 16);
        assert_eq!(config.timeout_policy, TimeoutPolicy::ResetPerRetry);
    }

    #[test]
    #[should_panic(expected = "Channel capacity must be positive")]
    fn zero_channel_capacity_panics() {
        let _ = EventQueueBuilder::new().with_channel_capacity(0);
    }
}
