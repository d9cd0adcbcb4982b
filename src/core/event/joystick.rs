//=========================================================================
// Joystick Events
//=========================================================================

//=== Internal Dependencies ===============================================

use super::input::ButtonState;

//=== HatPosition =========================================================

/// Position of a joystick hat (d-pad).
///
/// Raw values are the platform's bit pattern: up = 1, right = 2,
/// down = 4, left = 8, diagonals as the OR of two neighbours. Impossible
/// combinations (up+down, ...) map to `Centered`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum HatPosition {
    #[default]
    Centered,
    Up,
    Right,
    Down,
    Left,
    RightUp,
    RightDown,
    LeftUp,
    LeftDown,
}

impl HatPosition {
    pub fn from_raw(raw: u8) -> Self {
        match raw {
            0x01 => Self::Up,
            0x02 => Self::Right,
            0x04 => Self::Down,
            0x08 => Self::Left,
            0x03 => Self::RightUp,
            0x06 => Self::RightDown,
            0x09 => Self::LeftUp,
            0x0C => Self::LeftDown,
            _ => Self::Centered,
        }
    }
}

//=== Events ==============================================================

/// Axis moved. `value` spans -32768..=32767.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct JoystickAxisEvent {
    pub timestamp: u32,
    /// Joystick instance id.
    pub which: u32,
    pub axis: u8,
    pub value: i16,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct JoystickButtonEvent {
    pub timestamp: u32,
    pub which: u32,
    pub button: u8,
    pub state: ButtonState,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct JoystickHatEvent {
    pub timestamp: u32,
    pub which: u32,
    pub hat: u8,
    pub position: HatPosition,
}

//=========================================================================
// Unit Tests
//=========================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cardinal_and_diagonal_positions() {
        assert_eq!(HatPosition::from_raw(0), HatPosition::Centered);
        assert_eq!(HatPosition::from_raw(1), HatPosition::Up);
        assert_eq!(HatPosition::from_raw(1 | 2), HatPosition::RightUp);
        assert_eq!(HatPosition::from_raw(8 | 4), HatPosition::LeftDown);
    }

    #[test]
    fn impossible_combinations_are_centered() {
        assert_eq!(HatPosition::from_raw(1 | 4), HatPosition::Centered);
        assert_eq!(HatPosition::from_raw(0xF0), HatPosition::Centered);
    }
}
