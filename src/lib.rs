mod adapters;
mod controllers;
mod core;
#[cfg(feature = "gui")]
mod input;
mod presenters;

pub use crate::adapters::pixel_format::{copy_packed_to_rgba, packed_to_rgb_bytes};
pub use crate::controllers::cli::snapshot::render_snapshot;
pub use crate::controllers::interactive::{
    ControlFlow, DisplaySurface, DragState, ExplorerConfig, ExplorerConfigError, InputEvent, Key,
    MandelbrotController, PointerButton, ViewController, ViewControllerError,
};
pub use crate::core::actions::render_frame::frame_renderer::{
    FrameRenderer, FrameRendererError, FrameStats,
};
pub use crate::core::actions::render_frame::ports::{
    colour_map::ColourMap, fractal_algorithm::FractalAlgorithm,
};
pub use crate::core::actions::render_frame::render_frame_serial::render_frame_serial;
pub use crate::core::data::colour::{Colour, PackedColour};
pub use crate::core::data::complex::Complex;
pub use crate::core::data::frame_buffer::{FrameBuffer, FrameBufferError};
pub use crate::core::data::point::PixelPoint;
pub use crate::core::data::tile::Tile;
pub use crate::core::data::view_state::{ViewState, ViewStateError};
pub use crate::core::data::viewport::{Viewport, ViewportError};
pub use crate::core::fractals::mandelbrot::algorithm::{EscapeTime, MandelbrotAlgorithm};
pub use crate::core::fractals::mandelbrot::colour_map::SmoothRainbow;
pub use crate::core::fractals::mandelbrot::errors::MandelbrotError;
pub use crate::core::fractals::mandelbrot::mandelbrot_config::MandelbrotConfig;
pub use crate::core::navigation::limits::ZoomLimits;
pub use crate::core::navigation::zoom::{ZoomAnimation, ZoomDirection};
pub use crate::core::util::pixel_to_complex_coords::{complex_to_pixel_coords, pixel_to_complex_coords};
pub use crate::presenters::file::ppm::{PpmFilePresenter, write_ppm};

#[cfg(feature = "gui")]
pub use crate::input::gui::commands::run_gui::RunGuiCommand;
#[cfg(feature = "gui")]
pub use crate::presenters::pixels::presenter::PixelsPresenter;
