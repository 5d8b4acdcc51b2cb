use log::trace;
use winit::dpi::PhysicalPosition;
use winit::event::{ElementState, MouseButton, MouseScrollDelta, WindowEvent};
use winit::keyboard::{KeyCode, PhysicalKey};

use crate::controllers::interactive::events::input::{InputEvent, Key, PointerButton};
use crate::core::data::point::PixelPoint;
use crate::core::navigation::zoom::ZoomDirection;

/// Converts winit window events into explorer input.
///
/// Wheel events carry no position, so the last cursor position seen is
/// stamped onto them.
#[derive(Debug, Default)]
pub struct InputTranslator {
    cursor: PixelPoint,
}

impl InputTranslator {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn cursor(&self) -> PixelPoint {
        self.cursor
    }

    pub fn translate<F>(&mut self, event: &WindowEvent, to_viewport: F) -> Option<InputEvent>
    where
        F: Fn(PhysicalPosition<f64>) -> PixelPoint,
    {
        let input = match event {
            WindowEvent::CloseRequested => InputEvent::Quit,
            WindowEvent::KeyboardInput { event, .. } if event.state == ElementState::Pressed => {
                match event.physical_key {
                    PhysicalKey::Code(KeyCode::Escape) => InputEvent::KeyPressed(Key::Escape),
                    _ => InputEvent::KeyPressed(Key::Other),
                }
            }
            WindowEvent::CursorMoved { position, .. } => {
                self.cursor = to_viewport(*position);

                InputEvent::PointerMoved {
                    position: self.cursor,
                }
            }
            WindowEvent::MouseInput { state, button, .. } => {
                let button = pointer_button(*button);

                match state {
                    ElementState::Pressed => InputEvent::PointerDown {
                        button,
                        position: self.cursor,
                    },
                    ElementState::Released => InputEvent::PointerUp {
                        button,
                        position: self.cursor,
                    },
                }
            }
            WindowEvent::MouseWheel { delta, .. } => {
                let direction = scroll_direction(*delta)?;

                InputEvent::Scroll {
                    direction,
                    position: self.cursor,
                }
            }
            _ => return None,
        };

        trace!("{:?}", input);

        Some(input)
    }
}

fn pointer_button(button: MouseButton) -> PointerButton {
    match button {
        MouseButton::Left => PointerButton::Primary,
        MouseButton::Right => PointerButton::Secondary,
        MouseButton::Middle => PointerButton::Middle,
        _ => PointerButton::Other,
    }
}

fn scroll_direction(delta: MouseScrollDelta) -> Option<ZoomDirection> {
    let y = match delta {
        MouseScrollDelta::LineDelta(_, y) => f64::from(y),
        MouseScrollDelta::PixelDelta(position) => position.y,
    };

    if y > 0.0 {
        Some(ZoomDirection::In)
    } else if y < 0.0 {
        Some(ZoomDirection::Out)
    } else {
        None
    }
}
