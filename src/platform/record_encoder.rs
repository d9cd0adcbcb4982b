//=========================================================================
// Record Encoder
//=========================================================================
//
// Converts Winit events into raw event records.
//
// Architecture:
//   Winit Events → RecordEncoder → RawEvent (platform record) → channel
//
// Stateful tracking:
// - Modifiers: cached from ModifiersChanged, stamped on every key record
// - Buttons: held-button mask, stamped on every motion record
// - Cursor: last position, for relative motion and button coordinates
// - Scale factor: physical → logical conversion
// - Clock: millisecond timestamps since the encoder was created
//
// Scancodes follow the USB HID usage table (as the platform queue does);
// keycodes are the lowercase character when there is one, otherwise the
// scancode with the scancode bit set.
//
//=========================================================================

//=== Standard Library Imports ============================================

use std::time::Instant;

//=== External Dependencies ===============================================

use winit::{
    dpi::{PhysicalPosition, PhysicalSize},
    event::{ElementState, MouseButton as WinitMouseButton, MouseScrollDelta},
    keyboard::{KeyCode as WinitKeyCode, ModifiersState, PhysicalKey},
};

//=== Internal Dependencies ===============================================

use crate::core::event::{KeyModifiers, MouseButtonMask};
use crate::core::raw::{
    kind, RawEvent, RawKeyboard, RawMouseButton, RawMouseMotion, RawMouseWheel,
};

//=== Constants ===========================================================

/// Window id stamped on every record (one window per platform).
pub const PRIMARY_WINDOW_ID: u32 = 1;

/// Set on keycodes that have no character.
pub const SCANCODE_MASK: u32 = 1 << 30;

/// Pixel scroll amount treated as one wheel step.
const PIXELS_PER_LINE: f32 = 20.0;

//=== RecordEncoder =======================================================

/// Builds raw records from Winit input with sticky modifier, button and
/// cursor state.
pub struct RecordEncoder {
    modifiers: KeyModifiers,
    buttons: MouseButtonMask,
    cursor: Option<(f32, f32)>,
    scale_factor: f64,
    epoch: Instant,
}

impl RecordEncoder {
    //--- Construction -----------------------------------------------------

    pub fn new() -> Self {
        Self {
            modifiers: KeyModifiers::empty(),
            buttons: MouseButtonMask::empty(),
            cursor: None,
            scale_factor: 1.0,
            epoch: Instant::now(),
        }
    }

    //--- State Management -------------------------------------------------

    /// Updates cached modifier state (applied to subsequent key records).
    pub fn update_modifiers(&mut self, state: ModifiersState) {
        self.modifiers = KeyModifiers::from(state);
    }

    pub fn modifiers(&self) -> KeyModifiers {
        self.modifiers
    }

    pub fn buttons(&self) -> MouseButtonMask {
        self.buttons
    }

    /// Sets the scale factor used for logical sizes and coordinates.
    ///
    /// Non-positive or non-finite factors are ignored.
    pub fn set_scale_factor(&mut self, scale_factor: f64) {
        if scale_factor.is_finite() && scale_factor > 0.0 {
            self.scale_factor = scale_factor;
        }
    }

    /// Milliseconds since the encoder was created, saturating.
    pub fn timestamp(&self) -> u32 {
        u32::try_from(self.epoch.elapsed().as_millis()).unwrap_or(u32::MAX)
    }

    //--- Application & Window ---------------------------------------------

    pub fn encode_quit(&self) -> RawEvent {
        RawEvent::quit(self.timestamp())
    }

    /// Window record without payload (shown, focus, close, ...).
    pub fn encode_window(&self, window_kind: u32) -> RawEvent {
        RawEvent::window(window_kind, self.timestamp(), PRIMARY_WINDOW_ID, 0, 0)
    }

    pub fn encode_moved(&self, position: PhysicalPosition<i32>) -> RawEvent {
        RawEvent::window(
            kind::WINDOW_MOVED,
            self.timestamp(),
            PRIMARY_WINDOW_ID,
            position.x,
            position.y,
        )
    }

    /// Logical resize followed by pixel resize.
    pub fn encode_resized(&self, size: PhysicalSize<u32>) -> [RawEvent; 2] {
        let ts = self.timestamp();
        let logical = size.to_logical::<f64>(self.scale_factor);

        [
            RawEvent::window(
                kind::WINDOW_RESIZED,
                ts,
                PRIMARY_WINDOW_ID,
                logical.width.round() as i32,
                logical.height.round() as i32,
            ),
            RawEvent::window(
                kind::WINDOW_PIXEL_SIZE_CHANGED,
                ts,
                PRIMARY_WINDOW_ID,
                clamp_dimension(size.width),
                clamp_dimension(size.height),
            ),
        ]
    }

    //--- Keyboard & Text --------------------------------------------------

    /// Key record. `character` is the unmodified symbol the key produces,
    /// if any.
    pub fn encode_key(
        &self,
        physical_key: PhysicalKey,
        character: Option<char>,
        state: ElementState,
        repeat: bool,
    ) -> RawEvent {
        let scancode = match physical_key {
            PhysicalKey::Code(code) => scancode(code),
            PhysicalKey::Unidentified(_) => 0,
        };
        let keycode = match character {
            Some(c) => c.to_ascii_lowercase() as u32,
            None => scancode | SCANCODE_MASK,
        };
        let record_kind = match state {
            ElementState::Pressed => kind::KEY_DOWN,
            ElementState::Released => kind::KEY_UP,
        };

        RawEvent::key(
            record_kind,
            self.timestamp(),
            RawKeyboard {
                window_id: PRIMARY_WINDOW_ID,
                scancode,
                keycode,
                modifiers: self.modifiers.bits(),
                repeat: u8::from(repeat),
            },
        )
    }

    pub fn encode_text_input(&self, text: &str) -> RawEvent {
        RawEvent::text_input(self.timestamp(), PRIMARY_WINDOW_ID, text)
    }

    /// IME composition. `cursor` is the selected byte range, if any.
    pub fn encode_text_editing(&self, text: &str, cursor: Option<(usize, usize)>) -> RawEvent {
        let (start, length) = match cursor {
            Some((begin, end)) => (clamp_offset(begin), clamp_offset(end.saturating_sub(begin))),
            None => (0, 0),
        };
        RawEvent::text_editing(self.timestamp(), PRIMARY_WINDOW_ID, text, start, length)
    }

    //--- Mouse ------------------------------------------------------------

    /// Motion record in logical coordinates. The first motion has no
    /// relative movement.
    pub fn encode_cursor_moved(&mut self, position: PhysicalPosition<f64>) -> RawEvent {
        let logical = position.to_logical::<f64>(self.scale_factor);
        let (x, y) = (logical.x as f32, logical.y as f32);
        let (xrel, yrel) = match self.cursor {
            Some((last_x, last_y)) => (x - last_x, y - last_y),
            None => (0.0, 0.0),
        };
        self.cursor = Some((x, y));

        RawEvent::mouse_motion(
            self.timestamp(),
            RawMouseMotion {
                window_id: PRIMARY_WINDOW_ID,
                which: 0,
                state: self.buttons.bits(),
                x,
                y,
                xrel,
                yrel,
            },
        )
    }

    /// Button record at the last known cursor position. Updates the held
    /// mask.
    pub fn encode_mouse_button(&mut self, button: WinitMouseButton, state: ElementState) -> RawEvent {
        let index = button_index(button);
        let bit = button_bit(index);

        let record_kind = match state {
            ElementState::Pressed => {
                self.buttons.insert(bit);
                kind::MOUSE_BUTTON_DOWN
            }
            ElementState::Released => {
                self.buttons.remove(bit);
                kind::MOUSE_BUTTON_UP
            }
        };
        let (x, y) = self.cursor.unwrap_or_default();

        RawEvent::mouse_button(
            record_kind,
            self.timestamp(),
            RawMouseButton {
                window_id: PRIMARY_WINDOW_ID,
                which: 0,
                button: index,
                clicks: 1,
                x,
                y,
            },
        )
    }

    pub fn encode_wheel(&self, delta: MouseScrollDelta) -> RawEvent {
        let (x, y) = match delta {
            MouseScrollDelta::LineDelta(x, y) => (x, y),
            MouseScrollDelta::PixelDelta(pixels) => {
                let logical = pixels.to_logical::<f64>(self.scale_factor);
                (
                    logical.x as f32 / PIXELS_PER_LINE,
                    logical.y as f32 / PIXELS_PER_LINE,
                )
            }
        };

        RawEvent::mouse_wheel(
            self.timestamp(),
            RawMouseWheel {
                window_id: PRIMARY_WINDOW_ID,
                which: 0,
                x,
                y,
                direction: 0,
            },
        )
    }
}

impl Default for RecordEncoder {
    fn default() -> Self {
        Self::new()
    }
}

//=== Internal Helpers ====================================================

fn clamp_dimension(value: u32) -> i32 {
    i32::try_from(value).unwrap_or(i32::MAX)
}

fn clamp_offset(value: usize) -> i32 {
    i32::try_from(value).unwrap_or(i32::MAX)
}

/// Platform button index (1 = left, 2 = middle, 3 = right, 4/5 = extra).
fn button_index(button: WinitMouseButton) -> u8 {
    match button {
        WinitMouseButton::Left => 1,
        WinitMouseButton::Middle => 2,
        WinitMouseButton::Right => 3,
        WinitMouseButton::Back => 4,
        WinitMouseButton::Forward => 5,
        WinitMouseButton::Other(n) => u8::try_from(n).unwrap_or(u8::MAX),
    }
}

/// Held-mask bit for a button index. Unknown indices have none.
fn button_bit(index: u8) -> MouseButtonMask {
    match index {
        1..=5 => MouseButtonMask::from_raw(1 << (index - 1)),
        _ => MouseButtonMask::empty(),
    }
}

//=========================================================================
// Winit Conversions
//=========================================================================

/// Converts Winit ModifiersState to platform modifier bits.
///
/// Winit does not say which side is held; the left bit is used.
impl From<ModifiersState> for KeyModifiers {
    fn from(state: ModifiersState) -> Self {
        let mut mods = KeyModifiers::empty();
        mods.set(KeyModifiers::LSHIFT, state.shift_key());
        mods.set(KeyModifiers::LCTRL, state.control_key());
        mods.set(KeyModifiers::LALT, state.alt_key());
        mods.set(KeyModifiers::LGUI, state.super_key());
        mods
    }
}

/// USB HID usage id of a physical key. Unmapped keys (F13-F24, media
/// keys, numpad) return 0.
fn scancode(code: WinitKeyCode) -> u32 {
    use WinitKeyCode::*;
    match code {
        //--- Letters ------------------------------------------------------
        KeyA => 4,
        KeyB => 5,
        KeyC => 6,
        KeyD => 7,
        KeyE => 8,
        KeyF => 9,
        KeyG => 10,
        KeyH => 11,
        KeyI => 12,
        KeyJ => 13,
        KeyK => 14,
        KeyL => 15,
        KeyM => 16,
        KeyN => 17,
        KeyO => 18,
        KeyP => 19,
        KeyQ => 20,
        KeyR => 21,
        KeyS => 22,
        KeyT => 23,
        KeyU => 24,
        KeyV => 25,
        KeyW => 26,
        KeyX => 27,
        KeyY => 28,
        KeyZ => 29,

        //--- Digits -------------------------------------------------------
        Digit1 => 30,
        Digit2 => 31,
        Digit3 => 32,
        Digit4 => 33,
        Digit5 => 34,
        Digit6 => 35,
        Digit7 => 36,
        Digit8 => 37,
        Digit9 => 38,
        Digit0 => 39,

        //--- Special ------------------------------------------------------
        Enter => 40,
        Escape => 41,
        Backspace => 42,
        Tab => 43,
        Space => 44,
        Delete => 76,

        //--- Arrows -------------------------------------------------------
        ArrowRight => 79,
        ArrowLeft => 80,
        ArrowDown => 81,
        ArrowUp => 82,

        //--- Modifiers ----------------------------------------------------
        ControlLeft => 224,
        ShiftLeft => 225,
        AltLeft => 226,
        SuperLeft => 227,
        ControlRight => 228,
        ShiftRight => 229,
        AltRight => 230,
        SuperRight => 231,

        _ => 0,
    }
}

//=========================================================================
// Tests
//=========================================================================
