//=========================================================================
// Aetheric Events — Library Root
//
// Typed event demultiplexing over a polling platform event queue.
//
// Responsibilities:
// - Decode fixed-layout raw event records into a closed `Event` enum
// - Offer two ways to drain pending events (owned range, lazy view)
// - Offer blocking waits with a bounded timeout budget
// - Produce raw records from a Winit window (`platform`)
//
// Typical usage:
// ```no_run
// use aetheric_events::prelude::*;
//
// let (sender, mut queue) = EventQueueBuilder::new().build_channel();
//
// std::thread::spawn(move || {
//     while let Some(event) = queue.wait_one() {
//         if let Event::Window(window) = &event {
//             if let Some(size) = get_size(window) {
//                 println!("{}x{}", size.width, size.height);
//             }
//         }
//     }
// });
//
// Platform::new(sender).run()?;
// ```
//
//=========================================================================

//--- Public Modules ------------------------------------------------------
//
// `core` is the platform-independent event layer: raw records, typed
// events, the decoder, event sources and the queue facade.
//
pub mod core;

// `platform` produces raw records from a Winit event loop. Optional for
// applications that feed the queue from elsewhere.
//
pub mod platform;

pub mod prelude;

//--- Public Exports ------------------------------------------------------

pub use crate::core::{Event, EventQueue, EventQueueBuilder, RawEvent};
