use std::error::Error;
use std::fmt;
use std::num::NonZeroUsize;

use log::info;

use crate::controllers::interactive::controller::{MandelbrotController, ViewController};
use crate::controllers::interactive::ports::display_surface::DisplaySurface;
use crate::core::actions::render_frame::frame_renderer::{FrameRenderer, FrameRendererError};
use crate::core::data::view_state::ViewState;
use crate::core::data::viewport::{Viewport, ViewportError};
use crate::core::fractals::mandelbrot::algorithm::MandelbrotAlgorithm;
use crate::core::fractals::mandelbrot::colour_map::SmoothRainbow;
use crate::core::fractals::mandelbrot::errors::MandelbrotError;
use crate::core::fractals::mandelbrot::mandelbrot_config::MandelbrotConfig;
use crate::core::navigation::limits::ZoomLimits;

pub const DEFAULT_WIDTH: u32 = 800;
pub const DEFAULT_HEIGHT: u32 = 600;
pub const DEFAULT_TITLE: &str = "Mandelbrot Explorer";

#[derive(Debug)]
pub enum ExplorerConfigError {
    Viewport(ViewportError),
    Mandelbrot(MandelbrotError),
    Renderer(FrameRendererError),
}

impl fmt::Display for ExplorerConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Viewport(err) => write!(f, "invalid viewport: {}", err),
            Self::Mandelbrot(err) => write!(f, "invalid fractal settings: {}", err),
            Self::Renderer(err) => write!(f, "{}", err),
        }
    }
}

impl Error for ExplorerConfigError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Viewport(err) => Some(err),
            Self::Mandelbrot(err) => Some(err),
            Self::Renderer(err) => Some(err),
        }
    }
}

impl From<ViewportError> for ExplorerConfigError {
    fn from(err: ViewportError) -> Self {
        Self::Viewport(err)
    }
}

impl From<MandelbrotError> for ExplorerConfigError {
    fn from(err: MandelbrotError) -> Self {
        Self::Mandelbrot(err)
    }
}

impl From<FrameRendererError> for ExplorerConfigError {
    fn from(err: FrameRendererError) -> Self {
        Self::Renderer(err)
    }
}

/// Startup settings; fixed for the lifetime of the explorer.
#[derive(Debug, Clone, PartialEq)]
pub struct ExplorerConfig {
    pub width: u32,
    pub height: u32,
    pub mandelbrot: MandelbrotConfig,
    /// `None` uses the available hardware parallelism.
    pub worker_count: Option<NonZeroUsize>,
    pub initial_view: ViewState,
    pub zoom_limits: ZoomLimits,
    pub title: String,
}

impl Default for ExplorerConfig {
    fn default() -> Self {
        Self {
            width: DEFAULT_WIDTH,
            height: DEFAULT_HEIGHT,
            mandelbrot: MandelbrotConfig::default(),
            worker_count: None,
            initial_view: ViewState::default(),
            zoom_limits: ZoomLimits::default(),
            title: DEFAULT_TITLE.to_string(),
        }
    }
}

impl ExplorerConfig {
    pub fn viewport(&self) -> Result<Viewport, ViewportError> {
        Viewport::new(self.width, self.height)
    }

    pub fn build_renderer(
        &self,
    ) -> Result<FrameRenderer<MandelbrotAlgorithm, SmoothRainbow>, ExplorerConfigError> {
        let viewport = self.viewport()?;
        let algorithm = self.mandelbrot.build_algorithm()?;

        info!(
            "building renderer: {}x{} viewport, {} max iterations, {} workers requested",
            viewport.width(),
            viewport.height(),
            algorithm.max_iterations(),
            self.worker_count
                .map_or_else(|| "auto".to_string(), |count| count.to_string())
        );

        let renderer = FrameRenderer::new(
            viewport,
            self.worker_count,
            algorithm,
            self.mandelbrot.build_colour_map(),
        )?;

        Ok(renderer)
    }

    pub fn build_controller<S: DisplaySurface>(
        &self,
        surface: S,
    ) -> Result<MandelbrotController<S>, ExplorerConfigError> {
        let renderer = self.build_renderer()?;

        Ok(ViewController::new(renderer, surface, self.initial_view).with_zoom_limits(self.zoom_limits))
    }
}
