//=========================================================================
// Prelude
//=========================================================================
//
// Convenience module that re-exports commonly used types and traits.
//
// Usage:
//   use aetheric_events::prelude::*;
//
//=========================================================================

//=== Public API ==========================================================

// Queue facade
pub use crate::core::queue::{EventQueue, EventQueueBuilder, EventRange, EventView, TimeoutPolicy};

// Typed events
pub use crate::core::event::{
    get_display, get_position, get_size, ButtonState, Event, KeyModifiers, MouseButton,
    WindowEvent, WindowEventKind, WindowId,
};

// Sources and raw records
pub use crate::core::raw::RawEvent;
pub use crate::core::source::{EventSource, RecordSender};

// Platform producer
pub use crate::platform::{Platform, PlatformError};
