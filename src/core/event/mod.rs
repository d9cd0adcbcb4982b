//=========================================================================
// Typed Event Model
//
// Closed sum type over every event kind the decoder supports.
//
// Layout:
// ```text
//  Event
//   ├─ Quit
//   ├─ Window          (WindowEvent, payload fixed by kind)
//   ├─ Key             (down / up)
//   ├─ TextInput / TextEditing
//   ├─ MouseMotion / MouseButton / MouseWheel
//   └─ JoystickAxis / JoystickButton / JoystickHat
// ```
//
// Every event is an owned value: it copies what it needs out of the raw
// record and stays valid after the record is gone. Consumers are expected
// to match exhaustively; adding a kind is a breaking change on purpose.
//
//=========================================================================

//=== Submodules ==========================================================

pub mod input;
pub mod joystick;
pub mod text;
pub mod window;

//=== Public Exports ======================================================

pub use input::{
    ButtonState, KeyEvent, KeyModifiers, MouseButton, MouseButtonEvent, MouseButtonMask,
    MouseMotionEvent, MouseWheelDirection, MouseWheelEvent, TextEditingEvent, TextInputEvent,
};
pub use joystick::{HatPosition, JoystickAxisEvent, JoystickButtonEvent, JoystickHatEvent};
pub use text::{TextBuffer, TEXT_CAPACITY};
pub use window::{
    get_display, get_position, get_size, Display, PayloadShape, Position, Size, WindowEvent,
    WindowEventData, WindowEventKind, WindowId,
};

//=== QuitEvent ===========================================================

/// Application quit requested.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct QuitEvent {
    pub timestamp: u32,
}

//=== Event ===============================================================

/// A decoded platform event.
#[derive(Debug, Clone, PartialEq)]
pub enum Event {
    Quit(QuitEvent),
    Window(WindowEvent),
    Key(KeyEvent),
    TextInput(TextInputEvent),
    TextEditing(TextEditingEvent),
    MouseMotion(MouseMotionEvent),
    MouseButton(MouseButtonEvent),
    MouseWheel(MouseWheelEvent),
    JoystickAxis(JoystickAxisEvent),
    JoystickButton(JoystickButtonEvent),
    JoystickHat(JoystickHatEvent),
}

impl Event {
    /// Platform timestamp in milliseconds.
    pub fn timestamp(&self) -> u32 {
        match self {
            Self::Quit(e) => e.timestamp,
            Self::Window(e) => e.timestamp,
            Self::Key(e) => e.timestamp,
            Self::TextInput(e) => e.timestamp,
            Self::TextEditing(e) => e.timestamp,
            Self::MouseMotion(e) => e.timestamp,
            Self::MouseButton(e) => e.timestamp,
            Self::MouseWheel(e) => e.timestamp,
            Self::JoystickAxis(e) => e.timestamp,
            Self::JoystickButton(e) => e.timestamp,
            Self::JoystickHat(e) => e.timestamp,
        }
    }

    /// Window the event targets. `None` for quit and joystick events.
    pub fn window_id(&self) -> Option<WindowId> {
        match self {
            Self::Window(e) => Some(e.window_id),
            Self::Key(e) => Some(e.window_id),
            Self::TextInput(e) => Some(e.window_id),
            Self::TextEditing(e) => Some(e.window_id),
            Self::MouseMotion(e) => Some(e.window_id),
            Self::MouseButton(e) => Some(e.window_id),
            Self::MouseWheel(e) => Some(e.window_id),
            Self::Quit(_)
            | Self::JoystickAxis(_)
            | Self::JoystickButton(_)
            | Self::JoystickHat(_) => None,
        }
    }

    /// Short variant name, for logs.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Quit(_) => "Quit",
            Self::Window(_) => "Window",
            Self::Key(_) => "Key",
            Self::TextInput(_) => "TextInput",
            Self::TextEditing(_) => "TextEditing",
            Self::MouseMotion(_) => "MouseMotion",
            Self::MouseButton(_) => "MouseButton",
            Self::MouseWheel(_) => "MouseWheel",
            Self::JoystickAxis(_) => "JoystickAxis",
            Self::JoystickButton(_) => "JoystickButton",
            Self::JoystickHat(_) => "JoystickHat",
        }
    }

    pub fn is_quit(&self) -> bool {
        matches!(self, Self::Quit(_))
    }
}

//--- Conversions ---------------------------------------------------------

impl From<QuitEvent> for Event {
    fn from(e: QuitEvent) -> Self {
        Self::Quit(e)
    }
}

impl From<WindowEvent> for Event {
    fn from(e: WindowEvent) -> Self {
        Self::Window(e)
    }
}

impl From<KeyEvent> for Event {
    fn from(e: KeyEvent) -> Self {
        Self::Key(e)
    }
}

impl From<MouseButtonEvent> for Event {
    fn from(e: MouseButtonEvent) -> Self {
        Self::MouseButton(e)
    }
}

//=========================================================================
// Unit Tests
//=========================================================================
