//=========================================================================
// Platform Subsystem
//
// Winit-driven producer of raw event records.
//
// Architecture:
// ```text
//  Main Thread:                     Consumer Thread:
//  ┌──────────────────────────┐    ┌──────────────────────┐
//  │  Winit Event Loop        │    │  EventQueue          │
//  │   ↓                      │    │   ├─ collect_pending │
//  │  RecordEncoder           │    │   ├─ iterate_pending │
//  │   ├─ Converts Winit      │    │   └─ wait_one[_timeout]
//  │   ├─ Tracks modifiers    │    │   ↓                  │
//  │   └─ Tracks buttons      │    │  Event (typed)       │
//  │   ↓                      │    └──────────────────────┘
//  │  RawEvent                │             ↑
//  │   ↓ (try_send)           │             │
//  │  Record Channel ─────────┼─────────────┘
//  └──────────────────────────┘    RawEvent
// ```
//
// Key Design Decisions:
// - **One record per platform event**: records are sent as they happen,
//   no frame batching; the consumer decides when to drain
// - **Never block the event loop**: a full channel drops the record with
//   a warning, like a platform queue overflow
// - **Close = close + quit**: a close request emits the window close
//   record followed by quit, then exits the loop
// - **Main thread requirement**: Winit mandates main thread on macOS/iOS,
//   so `run()` must be called from the main thread
//
//=========================================================================

//=== Submodules ==========================================================

mod record_encoder;

//=== External Crates =====================================================

use crossbeam_channel::TrySendError;
use log::*;
use winit::{
    application::ApplicationHandler,
    dpi::LogicalSize,
    event::{ElementState, Ime, WindowEvent},
    event_loop::{ActiveEventLoop, EventLoop},
    keyboard::Key,
    window::{Window, WindowAttributes},
};

//=== Internal Imports ====================================================

use crate::core::raw::{kind, RawEvent};
use crate::core::source::RecordSender;

//=== Public Exports ======================================================

pub use record_encoder::{RecordEncoder, PRIMARY_WINDOW_ID, SCANCODE_MASK};

//=== PlatformError =======================================================

/// Platform initialization and runtime errors.
///
/// These are typically fatal - if the event loop can't be created, no
/// records will ever be produced.
#[derive(Debug)]
pub enum PlatformError {
    /// Failed to create event loop (rare, indicates OS-level issue).
    EventLoopCreation(winit::error::EventLoopError),

    /// Event loop execution error (rare, indicates corruption).
    EventLoopExecution(winit::error::EventLoopError),
}

//--- Trait Implementations -----------------------------------------------

impl std::fmt::Display for PlatformError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EventLoopCreation(e) => write!(f, "Event loop creation failed: {}", e),
            Self::EventLoopExecution(e) => write!(f, "Event loop error: {}", e),
        }
    }
}

impl std::error::Error for PlatformError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::EventLoopCreation(e) | Self::EventLoopExecution(e) => Some(e),
        }
    }
}

//=== Platform ============================================================

/// Window owner and raw record producer.
///
/// # Lifecycle
///
/// 1. **Construction**: `Platform::new(sender)`
/// 2. **Execution**: `platform.run()` - runs the event loop on this thread
/// 3. **Event processing**: Winit calls `ApplicationHandler` methods, each
///    mapped event is encoded and sent
/// 4. **Shutdown**: close requested → close + quit records → loop exits.
///    Dropping the platform drops the sender, so consumers see the source
///    close once the remaining records are drained.
///
/// # Examples
///
/// ```no_run
/// use aetheric_events::core::queue::EventQueueBuilder;
/// use aetheric_events::platform::Platform;
///
/// let (sender, mut queue) = EventQueueBuilder::new().build_channel();
///
/// std::thread::spawn(move || {
///     while let Some(event) = queue.wait_one() {
///         println!("{}", event.name());
///     }
/// });
///
/// Platform::new(sender).run()?;
/// # Ok::<(), aetheric_events::platform::PlatformError>(())
/// ```
pub struct Platform {
    /// OS window handle (None until `resumed()` called).
    window: Option<Window>,

    /// Channel the records go out on.
    sender: RecordSender,

    encoder: RecordEncoder,

    /// Set between `Ime::Enabled` and `Ime::Disabled`.
    ime_active: bool,
}

impl Platform {
    //--- Construction -----------------------------------------------------

    /// Creates a platform sending to `sender`.
    ///
    /// Does not create window yet - that happens lazily in `resumed()`.
    pub fn new(sender: RecordSender) -> Self {
        info!(target: "platform", "Platform subsystem initialized");
        Self {
            window: None,
            sender,
            encoder: RecordEncoder::new(),
            ime_active: false,
        }
    }

    //--- Execution --------------------------------------------------------

    /// Runs the Winit event loop until the window is closed.
    ///
    /// # Errors
    ///
    /// Returns [`PlatformError`] if the event loop cannot be created or
    /// fails while running.
    ///
    /// # Panics
    ///
    /// Panics if called off the main thread (macOS/iOS Winit requirement).
    pub fn run(mut self) -> Result<(), PlatformError> {
        debug!(target: "platform", "Starting Winit event loop");

        let event_loop = EventLoop::new().map_err(PlatformError::EventLoopCreation)?;

        event_loop
            .run_app(&mut self)
            .map_err(PlatformError::EventLoopExecution)
    }

    //--- Internal Helpers -------------------------------------------------

    /// Sends one record without blocking.
    ///
    /// A full or disconnected channel drops the record and logs a warning;
    /// the event loop keeps running so the window can still be closed.
    fn dispatch(&self, raw: RawEvent) {
        match self.sender.try_send(raw) {
            Ok(()) => {
                trace!(target: "platform::input", "Sent record 0x{:04X}", raw.kind);
            }
            Err(TrySendError::Full(raw)) => {
                warn!(
                    target: "platform::input",
                    "Record channel full, dropping record 0x{:04X}",
                    raw.kind
                );
            }
            Err(TrySendError::Disconnected(raw)) => {
                warn!(
                    target: "platform::input",
                    "Channel disconnected, dropping record 0x{:04X}",
                    raw.kind
                );
            }
        }
    }

    /// Text a key press contributes.
    ///
    /// `None` while IME is active: text then comes from `Ime::Commit`
    /// only, so a keystroke reported on both paths is queued once.
    fn key_text<'t>(&self, state: ElementState, text: Option<&'t str>) -> Option<&'t str> {
        if self.ime_active || state != ElementState::Pressed {
            return None;
        }
        text.filter(|t| !t.is_empty())
    }

    fn dispatch_window(&self, window_kind: u32) {
        self.dispatch(self.encoder.encode_window(window_kind));
    }

    /// Maps one Winit window event to zero or more records.
    ///
    /// Returns `true` if the event loop should exit.
    fn handle_window_event(&mut self, event: &WindowEvent) -> bool {
        match event {
            WindowEvent::CloseRequested => {
                info!(target: "platform", "Window close requested");
                self.dispatch_window(kind::WINDOW_CLOSE_REQUESTED);
                self.dispatch(self.encoder.encode_quit());
                return true;
            }

            //--- Window State ---------------------------------------------
            WindowEvent::Moved(position) => {
                self.dispatch(self.encoder.encode_moved(*position));
            }
            WindowEvent::Resized(size) => {
                for raw in self.encoder.encode_resized(*size) {
                    self.dispatch(raw);
                }
            }
            WindowEvent::ScaleFactorChanged { scale_factor, .. } => {
                debug!(target: "platform", "Scale factor changed: {}", scale_factor);
                self.encoder.set_scale_factor(*scale_factor);
            }
            WindowEvent::Focused(true) => self.dispatch_window(kind::WINDOW_FOCUS_GAINED),
            WindowEvent::Focused(false) => self.dispatch_window(kind::WINDOW_FOCUS_LOST),
            WindowEvent::Occluded(true) => self.dispatch_window(kind::WINDOW_HIDDEN),
            WindowEvent::Occluded(false) => self.dispatch_window(kind::WINDOW_SHOWN),
            WindowEvent::CursorEntered { .. } => self.dispatch_window(kind::WINDOW_MOUSE_ENTER),
            WindowEvent::CursorLeft { .. } => self.dispatch_window(kind::WINDOW_MOUSE_LEAVE),
            WindowEvent::RedrawRequested => self.dispatch_window(kind::WINDOW_EXPOSED),

            //--- Keyboard & Text ------------------------------------------
            WindowEvent::ModifiersChanged(modifiers) => {
                trace!(target: "platform::input", "Modifiers changed: {:?}", modifiers);
                self.encoder.update_modifiers(modifiers.state());
            }
            WindowEvent::KeyboardInput { event: key_event, .. } => {
                let character = match &key_event.logical_key {
                    Key::Character(text) => text.chars().next(),
                    _ => None,
                };
                self.dispatch(self.encoder.encode_key(
                    key_event.physical_key,
                    character,
                    key_event.state,
                    key_event.repeat,
                ));

                if let Some(text) = self.key_text(key_event.state, key_event.text.as_deref()) {
                    self.dispatch(self.encoder.encode_text_input(text));
                }
            }
            WindowEvent::Ime(Ime::Enabled) => {
                debug!(target: "platform::input", "IME enabled");
                self.ime_active = true;
            }
            WindowEvent::Ime(Ime::Disabled) => {
                debug!(target: "platform::input", "IME disabled");
                self.ime_active = false;
            }
            WindowEvent::Ime(Ime::Commit(text)) => {
                self.dispatch(self.encoder.encode_text_input(text));
            }
            WindowEvent::Ime(Ime::Preedit(text, cursor)) => {
                self.dispatch(self.encoder.encode_text_editing(text, *cursor));
            }

            //--- Mouse ----------------------------------------------------
            WindowEvent::CursorMoved { position, .. } => {
                let raw = self.encoder.encode_cursor_moved(*position);
                self.dispatch(raw);
            }
            WindowEvent::MouseInput { state, button, .. } => {
                let raw = self.encoder.encode_mouse_button(*button, *state);
                self.dispatch(raw);
            }
            WindowEvent::MouseWheel { delta, .. } => {
                self.dispatch(self.encoder.encode_wheel(*delta));
            }

            _ => {
                // Ignore: touch, gestures, file drops, theme changes, etc.
            }
        }

        false
    }

    //--- Test Accessors ---------------------------------------------------

    #[cfg(test)]
    pub(crate) fn window(&self) -> Option<&Window> {
        self.window.as_ref()
    }
}

//=== Winit Integration ===================================================

impl ApplicationHandler for Platform {
    /// Called when app becomes active (startup or mobile resume).
    ///
    /// Creates the window if it doesn't exist yet. On mobile, this may be
    /// called multiple times (suspend/resume cycle).
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_some() {
            debug!(target: "platform", "Window already exists (mobile resume?)");
            return;
        }

        let attrs = WindowAttributes::default()
            .with_title("Aetheric Events")
            .with_inner_size(LogicalSize::new(800, 600));

        match event_loop.create_window(attrs) {
            Ok(window) => {
                info!(
                    target: "platform",
                    "Window created: {}x{} @ {}x DPI",
                    window.inner_size().width,
                    window.inner_size().height,
                    window.scale_factor()
                );
                window.set_ime_allowed(true);
                self.encoder.set_scale_factor(window.scale_factor());
                self.window = Some(window);
                self.dispatch_window(kind::WINDOW_SHOWN);
            }
            Err(e) => {
                error!(target: "platform", "Window creation failed: {}", e);
                self.dispatch(self.encoder.encode_quit());
                event_loop.exit();
            }
        }
    }

    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        _window_id: winit::window::WindowId,
        event: WindowEvent,
    ) {
        if self.handle_window_event(&event) {
            event_loop.exit();
        }
    }
}

//=========================================================================
// Unit Tests
//=========================================================================
