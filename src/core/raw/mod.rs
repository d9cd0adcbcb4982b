//=========================================================================
// Raw Event Record
//
// The fixed-layout record produced by the platform event queue, before
// decoding.
//
// Layout:
// ```text
//  RawEvent
//   ├─ kind        discriminant (see `kind`)
//   ├─ timestamp   milliseconds
//   └─ one sub-record per subsystem
//       window │ key │ text │ edit │ motion │ button │ wheel
//       jaxis  │ jbutton │ jhat
// ```
//
// Only the sub-record selected by `kind` is meaningful. Every other
// sub-record holds its default and must not be read. Records are plain
// data (`Copy`) and live only for one drain cycle; the decoder copies
// whatever it needs out of them.
//
//=========================================================================

//=== Submodules ==========================================================

pub mod kind;

//=== Constants ===========================================================

/// Capacity of the platform's inline text buffer, in bytes.
pub const RAW_TEXT_CAPACITY: usize = 64;

//=== Sub-records =========================================================

/// Window sub-record. `data1`/`data2` meaning depends on the kind.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RawWindow {
    pub window_id: u32,
    pub data1: i32,
    pub data2: i32,
}

/// Keyboard sub-record.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RawKeyboard {
    pub window_id: u32,
    pub scancode: u32,
    pub keycode: u32,
    pub modifiers: u16,
    /// Non-zero for key repeat.
    pub repeat: u8,
}

/// Text buffer as the platform hands it over.
///
/// `len` is the length the producer *reports*. It is not trusted: it may
/// exceed the buffer, and the buffer may contain a NUL before `len`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RawText {
    pub bytes: [u8; RAW_TEXT_CAPACITY],
    pub len: u32,
}

impl RawText {
    /// Copies `text` into a raw buffer, cutting at the buffer capacity.
    ///
    /// The cut is byte-wise, exactly as a C producer would do it, so it
    /// may split a multi-byte character.
    pub fn copy_from(text: &str) -> Self {
        let mut raw = Self::default();
        let count = text.len().min(RAW_TEXT_CAPACITY);
        raw.bytes[..count].copy_from_slice(&text.as_bytes()[..count]);
        raw.len = count as u32;
        raw
    }
}

impl Default for RawText {
    fn default() -> Self {
        Self {
            bytes: [0; RAW_TEXT_CAPACITY],
            len: 0,
        }
    }
}

/// Committed text input sub-record.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RawTextInput {
    pub window_id: u32,
    pub text: RawText,
}

/// IME composition sub-record.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RawTextEditing {
    pub window_id: u32,
    pub text: RawText,
    pub start: i32,
    pub length: i32,
}

/// Mouse motion sub-record. Coordinates are floating point on the wire.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct RawMouseMotion {
    pub window_id: u32,
    pub which: u32,
    pub state: u32,
    pub x: f32,
    pub y: f32,
    pub xrel: f32,
    pub yrel: f32,
}

/// Mouse button sub-record.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct RawMouseButton {
    pub window_id: u32,
    pub which: u32,
    /// Button index, 1-based (1 = left, 2 = middle, 3 = right, 4/5 = extra).
    pub button: u8,
    pub clicks: u8,
    pub x: f32,
    pub y: f32,
}

/// Mouse wheel sub-record.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct RawMouseWheel {
    pub window_id: u32,
    pub which: u32,
    pub x: f32,
    pub y: f32,
    /// 0 = normal, 1 = flipped.
    pub direction: u32,
}

/// Joystick axis sub-record.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RawJoyAxis {
    pub which: u32,
    pub axis: u8,
    pub value: i16,
}

/// Joystick button sub-record.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RawJoyButton {
    pub which: u32,
    pub button: u8,
}

/// Joystick hat sub-record. `value` is the platform's hat bit pattern.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RawJoyHat {
    pub which: u32,
    pub hat: u8,
    pub value: u8,
}

//=== RawEvent ============================================================

/// One record from the platform event queue.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct RawEvent {
    pub kind: u32,
    pub timestamp: u32,
    pub window: RawWindow,
    pub key: RawKeyboard,
    pub text: RawTextInput,
    pub edit: RawTextEditing,
    pub motion: RawMouseMotion,
    pub button: RawMouseButton,
    pub wheel: RawMouseWheel,
    pub jaxis: RawJoyAxis,
    pub jbutton: RawJoyButton,
    pub jhat: RawJoyHat,
}

impl RawEvent {
    //--- Construction -----------------------------------------------------

    /// Creates a record with the given discriminant and no payload.
    pub fn new(kind: u32, timestamp: u32) -> Self {
        Self {
            kind,
            timestamp,
            ..Self::default()
        }
    }

    pub fn quit(timestamp: u32) -> Self {
        Self::new(kind::QUIT, timestamp)
    }

    /// Window record. `kind` must be one of the `WINDOW_*` discriminants.
    pub fn window(kind: u32, timestamp: u32, window_id: u32, data1: i32, data2: i32) -> Self {
        Self {
            window: RawWindow {
                window_id,
                data1,
                data2,
            },
            ..Self::new(kind, timestamp)
        }
    }

    /// Key record. `kind` is `KEY_DOWN` or `KEY_UP`.
    pub fn key(kind: u32, timestamp: u32, key: RawKeyboard) -> Self {
        Self {
            key,
            ..Self::new(kind, timestamp)
        }
    }

    pub fn text_input(timestamp: u32, window_id: u32, text: &str) -> Self {
        Self {
            text: RawTextInput {
                window_id,
                text: RawText::copy_from(text),
            },
            ..Self::new(kind::TEXT_INPUT, timestamp)
        }
    }

    pub fn text_editing(
        timestamp: u32,
        window_id: u32,
        text: &str,
        start: i32,
        length: i32,
    ) -> Self {
        Self {
            edit: RawTextEditing {
                window_id,
                text: RawText::copy_from(text),
                start,
                length,
            },
            ..Self::new(kind::TEXT_EDITING, timestamp)
        }
    }

    pub fn mouse_motion(timestamp: u32, motion: RawMouseMotion) -> Self {
        Self {
            motion,
            ..Self::new(kind::MOUSE_MOTION, timestamp)
        }
    }

    /// Mouse button record. `kind` is `MOUSE_BUTTON_DOWN` or `MOUSE_BUTTON_UP`.
    pub fn mouse_button(kind: u32, timestamp: u32, button: RawMouseButton) -> Self {
        Self {
            button,
            ..Self::new(kind, timestamp)
        }
    }

    pub fn mouse_wheel(timestamp: u32, wheel: RawMouseWheel) -> Self {
        Self {
            wheel,
            ..Self::new(kind::MOUSE_WHEEL, timestamp)
        }
    }

    pub fn joy_axis(timestamp: u32, which: u32, axis: u8, value: i16) -> Self {
        Self {
            jaxis: RawJoyAxis { which, axis, value },
            ..Self::new(kind::JOYSTICK_AXIS_MOTION, timestamp)
        }
    }

    /// Joystick button record. `kind` is `JOYSTICK_BUTTON_DOWN` or `_UP`.
    pub fn joy_button(kind: u32, timestamp: u32, which: u32, button: u8) -> Self {
        Self {
            jbutton: RawJoyButton { which, button },
            ..Self::new(kind, timestamp)
        }
    }

    pub fn joy_hat(timestamp: u32, which: u32, hat: u8, value: u8) -> Self {
        Self {
            jhat: RawJoyHat { which, hat, value },
            ..Self::new(kind::JOYSTICK_HAT_MOTION, timestamp)
        }
    }
}

//=========================================================================
// Unit Tests
//=========================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn raw_text_cuts_at_capacity() {
        let long = "x".repeat(RAW_TEXT_CAPACITY + 10);
        let raw = RawText::copy_from(&long);
        assert_eq!(raw.len as usize, RAW_TEXT_CAPACITY);
        assert!(raw.bytes.iter().all(|&b| b == b'x'));
    }

    #[test]
    fn raw_text_short_input_is_zero_padded() {
        let raw = RawText::copy_from("hi");
        assert_eq!(raw.len, 2);
        assert_eq!(&raw.bytes[..3], b"hi\0");
    }

    #[test]
    fn window_constructor_only_fills_window_sub_record() {
        let raw = RawEvent::window(kind::WINDOW_MOVED, 7, 3, 100, 200);
        assert_eq!(raw.kind, kind::WINDOW_MOVED);
        assert_eq!(raw.timestamp, 7);
        assert_eq!(raw.window, RawWindow { window_id: 3, data1: 100, data2: 200 });
        assert_eq!(raw.key, RawKeyboard::default());
    }

    #[test]
    fn window_block_bounds() {
        assert!(kind::is_window(kind::WINDOW_SHOWN));
        assert!(kind::is_window(kind::WINDOW_DISPLAY_CHANGED));
        assert!(!kind::is_window(kind::QUIT));
        assert!(!kind::is_window(kind::KEY_DOWN));
    }
}
