//=========================================================================
// Decoder
//=========================================================================
//
// Pure translation from one raw record to one typed event.
//
// Architecture:
//   RawEvent → decode() → Ok(Event) | Err(UnsupportedRecord)
//
// Reads only the sub-record selected by the discriminant and copies
// everything it needs, so the returned event never borrows the record.
// Conversions of platform sub-enumerations are total (see `event::input`
// and `event::joystick` for the fallbacks). No logging, no side effects:
// what to do with unsupported records is the caller's decision.
//
//=========================================================================

//=== Internal Dependencies ===============================================

use crate::core::error::UnsupportedRecord;
use crate::core::event::{
    ButtonState, Event, HatPosition, JoystickAxisEvent, JoystickButtonEvent, JoystickHatEvent,
    KeyEvent, KeyModifiers, MouseButton, MouseButtonEvent, MouseButtonMask, MouseMotionEvent,
    MouseWheelDirection, MouseWheelEvent, QuitEvent, TextBuffer, TextEditingEvent,
    TextInputEvent, WindowEvent, WindowEventKind, WindowId,
};
use crate::core::raw::{kind, RawEvent};

//=== decode ==============================================================

/// Decodes one raw record.
///
/// # Errors
///
/// Returns [`UnsupportedRecord`] for every discriminant outside the
/// supported set, including platform kinds this layer deliberately does
/// not model (joystick ball, metal view resize, ...).
pub fn decode(raw: &RawEvent) -> Result<Event, UnsupportedRecord> {
    let ts = raw.timestamp;

    let event = match raw.kind {
        kind::QUIT => Event::Quit(QuitEvent { timestamp: ts }),

        //--- Keyboard -----------------------------------------------------
        kind::KEY_DOWN | kind::KEY_UP => Event::Key(KeyEvent {
            timestamp: ts,
            window_id: WindowId::new(raw.key.window_id),
            state: button_state(raw.kind == kind::KEY_DOWN),
            scancode: raw.key.scancode,
            keycode: raw.key.keycode,
            modifiers: KeyModifiers::from_raw(raw.key.modifiers),
            repeat: raw.key.repeat != 0,
        }),

        kind::TEXT_INPUT => Event::TextInput(TextInputEvent {
            timestamp: ts,
            window_id: WindowId::new(raw.text.window_id),
            text: TextBuffer::from_raw(&raw.text.text),
        }),

        kind::TEXT_EDITING => Event::TextEditing(TextEditingEvent {
            timestamp: ts,
            window_id: WindowId::new(raw.edit.window_id),
            text: TextBuffer::from_raw(&raw.edit.text),
            start: raw.edit.start,
            length: raw.edit.length,
        }),

        //--- Mouse --------------------------------------------------------
        kind::MOUSE_MOTION => Event::MouseMotion(MouseMotionEvent {
            timestamp: ts,
            window_id: WindowId::new(raw.motion.window_id),
            which: raw.motion.which,
            state: MouseButtonMask::from_raw(raw.motion.state),
            x: to_coord(raw.motion.x),
            y: to_coord(raw.motion.y),
            xrel: to_coord(raw.motion.xrel),
            yrel: to_coord(raw.motion.yrel),
        }),

        kind::MOUSE_BUTTON_DOWN | kind::MOUSE_BUTTON_UP => Event::MouseButton(MouseButtonEvent {
            timestamp: ts,
            window_id: WindowId::new(raw.button.window_id),
            which: raw.button.which,
            button: MouseButton::from_raw(raw.button.button),
            state: button_state(raw.kind == kind::MOUSE_BUTTON_DOWN),
            clicks: raw.button.clicks,
            x: to_coord(raw.button.x),
            y: to_coord(raw.button.y),
        }),

        kind::MOUSE_WHEEL => Event::MouseWheel(MouseWheelEvent {
            timestamp: ts,
            window_id: WindowId::new(raw.wheel.window_id),
            which: raw.wheel.which,
            x: to_coord(raw.wheel.x),
            y: to_coord(raw.wheel.y),
            precise_x: raw.wheel.x,
            precise_y: raw.wheel.y,
            direction: MouseWheelDirection::from_raw(raw.wheel.direction),
        }),

        //--- Joystick -----------------------------------------------------
        kind::JOYSTICK_AXIS_MOTION => Event::JoystickAxis(JoystickAxisEvent {
            timestamp: ts,
            which: raw.jaxis.which,
            axis: raw.jaxis.axis,
            value: raw.jaxis.value,
        }),

        kind::JOYSTICK_BUTTON_DOWN | kind::JOYSTICK_BUTTON_UP => {
            Event::JoystickButton(JoystickButtonEvent {
                timestamp: ts,
                which: raw.jbutton.which,
                button: raw.jbutton.button,
                state: button_state(raw.kind == kind::JOYSTICK_BUTTON_DOWN),
            })
        }

        kind::JOYSTICK_HAT_MOTION => Event::JoystickHat(JoystickHatEvent {
            timestamp: ts,
            which: raw.jhat.which,
            hat: raw.jhat.hat,
            position: HatPosition::from_raw(raw.jhat.value),
        }),

        //--- Window -------------------------------------------------------
        other => match window_kind(other) {
            Some(window_kind) => Event::Window(WindowEvent::new(
                ts,
                WindowId::new(raw.window.window_id),
                window_kind,
                raw.window.data1,
                raw.window.data2,
            )),
            None => return Err(UnsupportedRecord { kind: other }),
        },
    };

    Ok(event)
}

impl TryFrom<&RawEvent> for Event {
    type Error = UnsupportedRecord;

    fn try_from(raw: &RawEvent) -> Result<Self, Self::Error> {
        decode(raw)
    }
}

//=== Internal Helpers ====================================================

/// Maps a window discriminant to its kind. `None` for anything else,
/// including window kinds this layer does not model.
fn window_kind(raw_kind: u32) -> Option<WindowEventKind> {
    let kind = match raw_kind {
        kind::WINDOW_SHOWN => WindowEventKind::Shown,
        kind::WINDOW_HIDDEN => WindowEventKind::Hidden,
        kind::WINDOW_EXPOSED => WindowEventKind::Exposed,
        kind::WINDOW_MOVED => WindowEventKind::Moved,
        kind::WINDOW_RESIZED => WindowEventKind::Resized,
        kind::WINDOW_PIXEL_SIZE_CHANGED => WindowEventKind::PixelSizeChanged,
        kind::WINDOW_MINIMIZED => WindowEventKind::Minimized,
        kind::WINDOW_MAXIMIZED => WindowEventKind::Maximized,
        kind::WINDOW_RESTORED => WindowEventKind::Restored,
        kind::WINDOW_MOUSE_ENTER => WindowEventKind::Enter,
        kind::WINDOW_MOUSE_LEAVE => WindowEventKind::Leave,
        kind::WINDOW_FOCUS_GAINED => WindowEventKind::FocusGained,
        kind::WINDOW_FOCUS_LOST => WindowEventKind::FocusLost,
        kind::WINDOW_CLOSE_REQUESTED => WindowEventKind::Close,
        kind::WINDOW_HIT_TEST => WindowEventKind::HitTest,
        kind::WINDOW_ICCPROF_CHANGED => WindowEventKind::IccProfileChanged,
        kind::WINDOW_DISPLAY_CHANGED => WindowEventKind::DisplayChanged,
        _ => return None,
    };
    Some(kind)
}

fn button_state(pressed: bool) -> ButtonState {
    if pressed {
        ButtonState::Pressed
    } else {
        ButtonState::Released
    }
}

/// Float → integer coordinate. Saturates at the i32 range, NaN becomes 0.
fn to_coord(value: f32) -> i32 {
    value as i32
}

//=========================================================================
// Unit Tests
//=========================================================================
