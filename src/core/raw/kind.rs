//=========================================================================
// Raw Event Kinds
//=========================================================================
//
// Discriminant values carried in `RawEvent::kind`.
//
// The numbering is the platform's (SDL3 event type codes). The decoder
// supports the subset listed here; any other value is an unsupported
// record. A few known-but-unsupported codes are also named so tests and
// producers can refer to them.
//
//=========================================================================

//--- Application ---------------------------------------------------------

pub const QUIT: u32 = 0x100;
pub const TERMINATING: u32 = 0x101;
pub const LOW_MEMORY: u32 = 0x102;

//--- Window --------------------------------------------------------------

pub const WINDOW_SHOWN: u32 = 0x202;
pub const WINDOW_HIDDEN: u32 = 0x203;
pub const WINDOW_EXPOSED: u32 = 0x204;
pub const WINDOW_MOVED: u32 = 0x205;
pub const WINDOW_RESIZED: u32 = 0x206;
pub const WINDOW_PIXEL_SIZE_CHANGED: u32 = 0x207;
/// Known to the platform, not decoded.
pub const WINDOW_METAL_VIEW_RESIZED: u32 = 0x208;
pub const WINDOW_MINIMIZED: u32 = 0x209;
pub const WINDOW_MAXIMIZED: u32 = 0x20A;
pub const WINDOW_RESTORED: u32 = 0x20B;
pub const WINDOW_MOUSE_ENTER: u32 = 0x20C;
pub const WINDOW_MOUSE_LEAVE: u32 = 0x20D;
pub const WINDOW_FOCUS_GAINED: u32 = 0x20E;
pub const WINDOW_FOCUS_LOST: u32 = 0x20F;
pub const WINDOW_CLOSE_REQUESTED: u32 = 0x210;
pub const WINDOW_HIT_TEST: u32 = 0x211;
pub const WINDOW_ICCPROF_CHANGED: u32 = 0x212;
pub const WINDOW_DISPLAY_CHANGED: u32 = 0x213;
/// Known to the platform, not decoded.
pub const WINDOW_DISPLAY_SCALE_CHANGED: u32 = 0x214;

//--- Keyboard ------------------------------------------------------------

pub const KEY_DOWN: u32 = 0x300;
pub const KEY_UP: u32 = 0x301;
pub const TEXT_EDITING: u32 = 0x302;
pub const TEXT_INPUT: u32 = 0x303;

//--- Mouse ---------------------------------------------------------------

pub const MOUSE_MOTION: u32 = 0x400;
pub const MOUSE_BUTTON_DOWN: u32 = 0x401;
pub const MOUSE_BUTTON_UP: u32 = 0x402;
pub const MOUSE_WHEEL: u32 = 0x403;

//--- Joystick ------------------------------------------------------------

pub const JOYSTICK_AXIS_MOTION: u32 = 0x600;
/// Known to the platform, not decoded.
pub const JOYSTICK_BALL_MOTION: u32 = 0x601;
pub const JOYSTICK_HAT_MOTION: u32 = 0x602;
pub const JOYSTICK_BUTTON_DOWN: u32 = 0x603;
pub const JOYSTICK_BUTTON_UP: u32 = 0x604;

//--- Ranges --------------------------------------------------------------

/// First and last window discriminants (inclusive) known to the platform.
pub const WINDOW_FIRST: u32 = WINDOW_SHOWN;
pub const WINDOW_LAST: u32 = 0x21A;

/// Returns `true` if `kind` lies in the platform's window event block.
pub fn is_window(kind: u32) -> bool {
    (WINDOW_FIRST..=WINDOW_LAST).contains(&kind)
}
