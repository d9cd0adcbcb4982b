//=========================================================================
// Core Event Layer
//
// Platform-independent half of the crate: raw records in, typed events
// out.
//
// Data flow:
// ```text
//  raw (RawEvent) ─► source (EventSource) ─► queue (EventQueue)
//                                              │ decoder::decode
//                                              ▼
//                                        event (Event)
// ```
//
// Nothing in `core` knows about windows or event loops; producers live
// in `platform` (or in the application) and only ever hand over
// `RawEvent`s.
//
//=========================================================================

//=== Submodules ==========================================================

pub mod decoder;
pub mod error;
pub mod event;
pub mod queue;
pub mod raw;
pub mod source;

//=== Public Exports ======================================================

pub use decoder::decode;
pub use error::{CollectError, UnsupportedRecord};
pub use event::Event;
pub use queue::{EventQueue, EventQueueBuilder, EventRange, EventView, TimeoutPolicy};
pub use raw::RawEvent;
pub use source::{ChannelSource, Dequeue, EventSource, RecordSender};
