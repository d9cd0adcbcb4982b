//=========================================================================
// Input Event Types
//
// Keyboard, text and mouse payloads of the typed event model.
//
// This module abstracts the platform's integer sub-enumerations (button
// indices, modifier bits, wheel direction) into closed, portable types.
// Every conversion from a raw value is total: unknown values fall back to
// a documented default instead of leaking through.
//
// Design:
// - Enums and flag sets are `Copy` and hashable
// - Events own their data (no borrowing from the raw record)
// - Text payloads are inline (`TextBuffer`), so events never allocate
//
//=========================================================================

//=== External Crates =====================================================

use bitflags::bitflags;

//=== Internal Dependencies ===============================================

use super::text::TextBuffer;
use super::window::WindowId;

//=== ButtonState =========================================================

/// Pressed / released state shared by keys, mouse and joystick buttons.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ButtonState {
    Pressed,
    Released,
}

impl ButtonState {
    pub fn is_pressed(self) -> bool {
        matches!(self, Self::Pressed)
    }
}

//=== KeyModifiers ========================================================

bitflags! {
    /// Modifier keys held while a key event was generated.
    ///
    /// Bit layout follows the platform's key modifier mask. Bits the
    /// platform may add later are dropped on conversion.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct KeyModifiers: u16 {
        const LSHIFT = 0x0001;
        const RSHIFT = 0x0002;
        const LCTRL = 0x0040;
        const RCTRL = 0x0080;
        const LALT = 0x0100;
        const RALT = 0x0200;
        const LGUI = 0x0400;
        const RGUI = 0x0800;
        const NUM = 0x1000;
        const CAPS = 0x2000;
        const MODE = 0x4000;
        const SCROLL = 0x8000;

        const SHIFT = Self::LSHIFT.bits() | Self::RSHIFT.bits();
        const CTRL = Self::LCTRL.bits() | Self::RCTRL.bits();
        const ALT = Self::LALT.bits() | Self::RALT.bits();
        const GUI = Self::LGUI.bits() | Self::RGUI.bits();
    }
}

impl KeyModifiers {
    /// Converts the raw modifier mask, discarding unknown bits.
    pub fn from_raw(raw: u16) -> Self {
        Self::from_bits_truncate(raw)
    }

    /// Either Shift key held.
    pub fn shift(self) -> bool {
        self.intersects(Self::SHIFT)
    }

    /// Either Ctrl key held.
    pub fn ctrl(self) -> bool {
        self.intersects(Self::CTRL)
    }

    /// Either Alt key held.
    pub fn alt(self) -> bool {
        self.intersects(Self::ALT)
    }
}

//=== Keyboard ============================================================

/// Key pressed or released.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct KeyEvent {
    pub timestamp: u32,
    pub window_id: WindowId,
    pub state: ButtonState,
    /// Physical key (platform scancode).
    pub scancode: u32,
    /// Layout-dependent key symbol (platform keycode).
    pub keycode: u32,
    pub modifiers: KeyModifiers,
    /// Generated by key repeat.
    pub repeat: bool,
}

/// Committed text (after IME composition or plain typing).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TextInputEvent {
    pub timestamp: u32,
    pub window_id: WindowId,
    pub text: TextBuffer,
}

/// In-progress IME composition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TextEditingEvent {
    pub timestamp: u32,
    pub window_id: WindowId,
    pub text: TextBuffer,
    /// Start of the selected range inside the composition.
    pub start: i32,
    /// Length of the selected range.
    pub length: i32,
}

//=== MouseButton =========================================================

/// Physical mouse button identifier.
///
/// Platform index mapping: 1 → `Left`, 2 → `Middle`, 3 → `Right`,
/// 4 → `X1`, 5 → `X2`. Any other index maps to `Left`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MouseButton {
    /// Primary button, also the fallback for unknown indices.
    Left,

    /// Middle button (wheel click).
    Middle,

    /// Secondary button.
    Right,

    /// First extra (side) button.
    X1,

    /// Second extra (side) button.
    X2,
}

impl MouseButton {
    pub fn from_raw(index: u8) -> Self {
        match index {
            1 => Self::Left,
            2 => Self::Middle,
            3 => Self::Right,
            4 => Self::X1,
            5 => Self::X2,
            _ => Self::Left,
        }
    }

    /// Platform button index.
    pub fn index(self) -> u8 {
        match self {
            Self::Left => 1,
            Self::Middle => 2,
            Self::Right => 3,
            Self::X1 => 4,
            Self::X2 => 5,
        }
    }

    /// Bit for this button in a [`MouseButtonMask`].
    pub fn mask(self) -> MouseButtonMask {
        match self {
            Self::Left => MouseButtonMask::LEFT,
            Self::Middle => MouseButtonMask::MIDDLE,
            Self::Right => MouseButtonMask::RIGHT,
            Self::X1 => MouseButtonMask::X1,
            Self::X2 => MouseButtonMask::X2,
        }
    }
}

bitflags! {
    /// Buttons held during a motion event.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct MouseButtonMask: u32 {
        const LEFT = 1 << 0;
        const MIDDLE = 1 << 1;
        const RIGHT = 1 << 2;
        const X1 = 1 << 3;
        const X2 = 1 << 4;
    }
}

impl MouseButtonMask {
    pub fn from_raw(raw: u32) -> Self {
        Self::from_bits_truncate(raw)
    }
}

//=== MouseWheelDirection =================================================

/// Whether the platform reports scroll amounts inverted ("natural" scrolling).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum MouseWheelDirection {
    /// Also the fallback for unknown raw values.
    #[default]
    Normal,
    Flipped,
}

impl MouseWheelDirection {
    pub fn from_raw(raw: u32) -> Self {
        match raw {
            1 => Self::Flipped,
            _ => Self::Normal,
        }
    }
}

//=== Mouse Events ========================================================

/// Cursor moved. Coordinates are window-relative.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct MouseMotionEvent {
    pub timestamp: u32,
    pub window_id: WindowId,
    /// Mouse instance id.
    pub which: u32,
    pub state: MouseButtonMask,
    pub x: i32,
    pub y: i32,
    pub xrel: i32,
    pub yrel: i32,
}

/// Mouse button pressed or released.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct MouseButtonEvent {
    pub timestamp: u32,
    pub window_id: WindowId,
    pub which: u32,
    pub button: MouseButton,
    pub state: ButtonState,
    /// 1 for single click, 2 for double click, ...
    pub clicks: u8,
    pub x: i32,
    pub y: i32,
}

/// Wheel scrolled.
///
/// `x`/`y` are whole steps (positive right / away from the user);
/// `precise_x`/`precise_y` keep the fractional amounts.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MouseWheelEvent {
    pub timestamp: u32,
    pub window_id: WindowId,
    pub which: u32,
    pub x: i32,
    pub y: i32,
    pub precise_x: f32,
    pub precise_y: f32,
    pub direction: MouseWheelDirection,
}

//=========================================================================
// Unit Tests
//=========================================================================

#[cfg(test)]
mod tests {
    use super::*;

    //=====================================================================
    // Sub-enumeration Totality
    //=====================================================================

    #[test]
    fn every_button_index_maps_to_a_button() {
        for raw in 0..=u8::MAX {
            let button = MouseButton::from_raw(raw);
            if (1..=5).contains(&raw) {
                assert_eq!(button.index(), raw);
            } else {
                assert_eq!(button, MouseButton::Left);
            }
        }
    }

    #[test]
    fn wheel_direction_falls_back_to_normal() {
        assert_eq!(MouseWheelDirection::from_raw(0), MouseWheelDirection::Normal);
        assert_eq!(MouseWheelDirection::from_raw(1), MouseWheelDirection::Flipped);
        assert_eq!(MouseWheelDirection::from_raw(7), MouseWheelDirection::Normal);
    }

    #[test]
    fn button_mask_drops_unknown_bits() {
        let mask = MouseButtonMask::from_raw(0b1_0000_0101 | 0x8000_0000);
        assert_eq!(mask, MouseButtonMask::LEFT | MouseButtonMask::RIGHT);
    }

    #[test]
    fn button_mask_matches_button() {
        assert_eq!(MouseButton::X2.mask(), MouseButtonMask::X2);
        assert_eq!(MouseButton::Middle.mask().bits(), 0b10);
    }

    //=====================================================================
    // Modifiers
    //=====================================================================

    #[test]
    fn modifiers_either_side_counts() {
        let left = KeyModifiers::from_raw(0x0001);
        let right = KeyModifiers::from_raw(0x0080);

        assert!(left.shift() && !left.ctrl() && !left.alt());
        assert!(right.ctrl() && !right.shift());
    }

    #[test]
    fn modifiers_keep_lock_bits() {
        let mods = KeyModifiers::from_raw(0x2000 | 0x1000);
        assert!(mods.contains(KeyModifiers::CAPS | KeyModifiers::NUM));
        assert!(!mods.shift());
    }

    #[test]
    fn modifiers_default_is_empty() {
        assert!(KeyModifiers::default().is_empty());
    }

    #[test]
    fn button_state_pressed() {
        assert!(ButtonState::Pressed.is_pressed());
        assert!(!ButtonState::Released.is_pressed());
    }
}
