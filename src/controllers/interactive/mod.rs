//! Interactive exploration of the Mandelbrot set.
//!
//! The [`ViewController`] owns the current view and the drag gesture. It
//! consumes [`InputEvent`]s, renders every view change synchronously through
//! the frame renderer and hands the finished frame to a [`DisplaySurface`].

pub mod controller;
pub mod drag;
pub mod errors;
pub mod events;
pub mod explorer_config;
pub mod ports;

pub use controller::{MandelbrotController, ViewController};
pub use drag::DragState;
pub use errors::ViewControllerError;
pub use events::input::{ControlFlow, InputEvent, Key, PointerButton};
pub use explorer_config::{ExplorerConfig, ExplorerConfigError};
pub use ports::display_surface::DisplaySurface;
