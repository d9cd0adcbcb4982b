//=========================================================================
// Window Events
//=========================================================================
//
// Typed window events with a payload whose shape is fixed by the kind.
//
// Kind → payload table:
// ```text
//  Moved                         → Position { x, y }
//  Resized                       → Size { width, height }   (logical)
//  PixelSizeChanged              → Size { width, height }   (pixels)
//  DisplayChanged                → Display { index }
//  everything else               → None
// ```
//
// The payload is derived from the kind at construction and kept private,
// so a `WindowEvent` can never carry a payload its kind does not allow.
//
//=========================================================================

//=== WindowId ============================================================

/// Platform window identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, PartialOrd, Ord)]
pub struct WindowId(u32);

impl WindowId {
    pub const fn new(id: u32) -> Self {
        Self(id)
    }

    pub const fn value(self) -> u32 {
        self.0
    }
}

impl From<u32> for WindowId {
    fn from(id: u32) -> Self {
        Self(id)
    }
}

//=== WindowEventKind =====================================================

/// What happened to the window.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum WindowEventKind {
    Shown,
    Hidden,
    /// Window should be redrawn.
    Exposed,
    Moved,
    /// Logical size changed.
    Resized,
    /// Size in pixels changed.
    PixelSizeChanged,
    Minimized,
    Maximized,
    Restored,
    /// Mouse entered the window.
    Enter,
    /// Mouse left the window.
    Leave,
    FocusGained,
    FocusLost,
    /// The window manager asks for the window to close.
    Close,
    HitTest,
    IccProfileChanged,
    /// Window moved to another display.
    DisplayChanged,
}

impl WindowEventKind {
    /// Every kind, in declaration order.
    pub const ALL: [WindowEventKind; 17] = [
        Self::Shown,
        Self::Hidden,
        Self::Exposed,
        Self::Moved,
        Self::Resized,
        Self::PixelSizeChanged,
        Self::Minimized,
        Self::Maximized,
        Self::Restored,
        Self::Enter,
        Self::Leave,
        Self::FocusGained,
        Self::FocusLost,
        Self::Close,
        Self::HitTest,
        Self::IccProfileChanged,
        Self::DisplayChanged,
    ];

    /// Payload shape this kind carries.
    pub fn payload_shape(self) -> PayloadShape {
        match self {
            Self::Moved => PayloadShape::Position,
            Self::Resized | Self::PixelSizeChanged => PayloadShape::Size,
            Self::DisplayChanged => PayloadShape::Display,
            Self::Shown
            | Self::Hidden
            | Self::Exposed
            | Self::Minimized
            | Self::Maximized
            | Self::Restored
            | Self::Enter
            | Self::Leave
            | Self::FocusGained
            | Self::FocusLost
            | Self::Close
            | Self::HitTest
            | Self::IccProfileChanged => PayloadShape::None,
        }
    }
}

//=== Payload =============================================================

/// Payload discriminant, without the data.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PayloadShape {
    None,
    Position,
    Size,
    Display,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Position {
    pub x: i32,
    pub y: i32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Size {
    pub width: i32,
    pub height: i32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Display {
    pub index: i32,
}

/// Window event payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum WindowEventData {
    None,
    Position(Position),
    Size(Size),
    Display(Display),
}

impl WindowEventData {
    /// Interprets the platform's two data fields for `kind`.
    ///
    /// Fields the shape does not use are ignored (e.g. `data2` for a
    /// display change).
    pub fn for_kind(kind: WindowEventKind, data1: i32, data2: i32) -> Self {
        match kind.payload_shape() {
            PayloadShape::None => Self::None,
            PayloadShape::Position => Self::Position(Position { x: data1, y: data2 }),
            PayloadShape::Size => Self::Size(Size {
                width: data1,
                height: data2,
            }),
            PayloadShape::Display => Self::Display(Display { index: data1 }),
        }
    }

    pub fn shape(&self) -> PayloadShape {
        match self {
            Self::None => PayloadShape::None,
            Self::Position(_) => PayloadShape::Position,
            Self::Size(_) => PayloadShape::Size,
            Self::Display(_) => PayloadShape::Display,
        }
    }
}

//=== WindowEvent =========================================================

/// Window state change (move, resize, focus, close, ...).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct WindowEvent {
    pub timestamp: u32,
    pub window_id: WindowId,
    pub kind: WindowEventKind,
    data: WindowEventData,
}

impl WindowEvent {
    /// Builds an event, deriving the payload from `kind`.
    pub fn new(
        timestamp: u32,
        window_id: WindowId,
        kind: WindowEventKind,
        data1: i32,
        data2: i32,
    ) -> Self {
        Self {
            timestamp,
            window_id,
            kind,
            data: WindowEventData::for_kind(kind, data1, data2),
        }
    }

    pub fn data(&self) -> WindowEventData {
        self.data
    }

    /// See [`get_position`].
    pub fn position(&self) -> Option<Position> {
        get_position(self)
    }

    /// See [`get_size`].
    pub fn size(&self) -> Option<Size> {
        get_size(self)
    }

    /// See [`get_display`].
    pub fn display(&self) -> Option<Display> {
        get_display(self)
    }
}

//=== Payload Accessors ===================================================

/// Position of a `Moved` event; `None` for any other kind.
pub fn get_position(event: &WindowEvent) -> Option<Position> {
    match (event.kind, event.data) {
        (WindowEventKind::Moved, WindowEventData::Position(pos)) => Some(pos),
        _ => None,
    }
}

/// Size of a `Resized` or `PixelSizeChanged` event; `None` otherwise.
pub fn get_size(event: &WindowEvent) -> Option<Size> {
    match (event.kind, event.data) {
        (
            WindowEventKind::Resized | WindowEventKind::PixelSizeChanged,
            WindowEventData::Size(size),
        ) => Some(size),
        _ => None,
    }
}

/// Display of a `DisplayChanged` event; `None` otherwise.
pub fn get_display(event: &WindowEvent) -> Option<Display> {
    match (event.kind, event.data) {
        (WindowEventKind::DisplayChanged, WindowEventData::Display(display)) => Some(display),
        _ => None,
    }
}

//=========================================================================
// Unit Tests
//=========================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn event(kind: WindowEventKind) -> WindowEvent {
        WindowEvent::new(10, WindowId::new(1), kind, 640, 480)
    }

    //=====================================================================
    // Payload Exclusivity
    //=====================================================================

    /// Exactly one accessor answers for payload kinds, none for the rest.
    #[test]
    fn accessors_are_mutually_exclusive_for_every_kind() {
        for kind in WindowEventKind::ALL {
            let ev = event(kind);
            let answers = [
                ev.position().is_some(),
                ev.size().is_some(),
                ev.display().is_some(),
            ];
            let expected = match kind.payload_shape() {
                PayloadShape::None => [false, false, false],
                PayloadShape::Position => [true, false, false],
                PayloadShape::Size => [false, true, false],
                PayloadShape::Display => [false, false, true],
            };
            assert_eq!(answers, expected, "accessor mismatch for {:?}", kind);
            assert_eq!(ev.data().shape(), kind.payload_shape());
        }
    }

    #[test]
    fn moved_carries_position() {
        let ev = event(WindowEventKind::Moved);
        assert_eq!(get_position(&ev), Some(Position { x: 640, y: 480 }));
        assert_eq!(get_size(&ev), None);
        assert_eq!(get_display(&ev), None);
    }

    #[test]
    fn resized_and_pixel_size_carry_size() {
        for kind in [WindowEventKind::Resized, WindowEventKind::PixelSizeChanged] {
            let ev = event(kind);
            assert_eq!(get_size(&ev), Some(Size { width: 640, height: 480 }));
        }
    }

    #[test]
    fn display_changed_ignores_second_field() {
        let ev = WindowEvent::new(0, WindowId::new(1), WindowEventKind::DisplayChanged, 2, 999);
        assert_eq!(get_display(&ev), Some(Display { index: 2 }));
        assert_eq!(ev.data(), WindowEventData::Display(Display { index: 2 }));
    }

    #[test]
    fn no_payload_kinds_drop_coordinates() {
        let ev = event(WindowEventKind::Shown);
        assert_eq!(ev.data(), WindowEventData::None);
    }

    #[test]
    fn thirteen_kinds_have_no_payload() {
        let none = WindowEventKind::ALL
            .iter()
            .filter(|k| k.payload_shape() == PayloadShape::None)
            .count();
        assert_eq!(none, 13);
    }

    #[test]
    fn window_id_round_trips_value() {
        assert_eq!(WindowId::from(42).value(), 42);
    }
}
