use crate::core::data::point::PixelPoint;
use crate::core::navigation::zoom::ZoomDirection;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointerButton {
    Primary,
    Secondary,
    Middle,
    Other,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    Escape,
    Other,
}

/// Window-system input, already translated into viewport pixel space.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputEvent {
    Quit,
    KeyPressed(Key),
    PointerDown {
        button: PointerButton,
        position: PixelPoint,
    },
    PointerUp {
        button: PointerButton,
        position: PixelPoint,
    },
    PointerMoved {
        position: PixelPoint,
    },
    Scroll {
        direction: ZoomDirection,
        position: PixelPoint,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ControlFlow {
    Continue,
    Exit,
}
