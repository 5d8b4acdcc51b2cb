use log::{debug, info};

use crate::controllers::interactive::drag::DragState;
use crate::controllers::interactive::errors::ViewControllerError;
use crate::controllers::interactive::events::input::{ControlFlow, InputEvent, Key, PointerButton};
use crate::controllers::interactive::ports::display_surface::DisplaySurface;
use crate::core::actions::render_frame::frame_renderer::{FrameRenderer, FrameStats};
use crate::core::actions::render_frame::ports::{
    colour_map::ColourMap, fractal_algorithm::FractalAlgorithm,
};
use crate::core::data::point::PixelPoint;
use crate::core::data::view_state::ViewState;
use crate::core::fractals::mandelbrot::algorithm::MandelbrotAlgorithm;
use crate::core::fractals::mandelbrot::colour_map::SmoothRainbow;
use crate::core::navigation::limits::ZoomLimits;
use crate::core::navigation::pan::pan_view;
use crate::core::navigation::zoom::{ZoomAnimation, ZoomDirection};

pub type MandelbrotController<S> = ViewController<S, MandelbrotAlgorithm, SmoothRainbow>;

/// Owns the view and turns input into render passes.
///
/// Every change to the view renders synchronously and presents the result
/// before the next event is handled.
pub struct ViewController<S, Alg, CMap> {
    view: ViewState,
    drag: DragState,
    zoom_limits: ZoomLimits,
    renderer: FrameRenderer<Alg, CMap>,
    surface: S,
}

impl<S, Alg, CMap> ViewController<S, Alg, CMap>
where
    S: DisplaySurface,
    Alg: FractalAlgorithm + Sync,
    CMap: ColourMap<Alg::Output> + Sync,
{
    pub fn new(renderer: FrameRenderer<Alg, CMap>, surface: S, initial_view: ViewState) -> Self {
        Self {
            view: initial_view,
            drag: DragState::Idle,
            zoom_limits: ZoomLimits::default(),
            renderer,
            surface,
        }
    }

    #[must_use]
    pub fn with_zoom_limits(mut self, zoom_limits: ZoomLimits) -> Self {
        self.zoom_limits = zoom_limits;
        self
    }

    /// Renders and presents the initial view.
    pub fn start(&mut self) -> Result<FrameStats, ViewControllerError<S::Error>> {
        info!(
            "starting explorer: {}x{} viewport, {} render workers",
            self.renderer.viewport().width(),
            self.renderer.viewport().height(),
            self.renderer.worker_count()
        );

        self.render_and_present()
    }

    /// Presents the current front buffer again without rendering.
    pub fn refresh(&mut self) -> Result<(), ViewControllerError<S::Error>> {
        self.surface
            .present(self.renderer.front())
            .map_err(ViewControllerError::Surface)
    }

    pub fn handle_event(
        &mut self,
        event: InputEvent,
    ) -> Result<ControlFlow, ViewControllerError<S::Error>> {
        match event {
            InputEvent::Quit | InputEvent::KeyPressed(Key::Escape) => {
                info!("exit requested after {} frames", self.renderer.frames_rendered());
                return Ok(ControlFlow::Exit);
            }
            InputEvent::KeyPressed(Key::Other) => {}
            InputEvent::PointerDown {
                button: PointerButton::Primary,
                position,
            } => self.drag.begin(position),
            InputEvent::PointerUp {
                button: PointerButton::Primary,
                ..
            } => self.drag.end(),
            InputEvent::PointerDown { .. } | InputEvent::PointerUp { .. } => {}
            InputEvent::PointerMoved { position } => {
                self.drag_to(position)?;
            }
            InputEvent::Scroll {
                direction,
                position,
            } => {
                self.zoom_at(direction, position)?;
            }
        }

        Ok(ControlFlow::Continue)
    }

    /// Pans an active drag to `position`. Returns whether a frame was rendered.
    pub fn drag_to(&mut self, position: PixelPoint) -> Result<bool, ViewControllerError<S::Error>> {
        let Some((from, to)) = self.drag.advance(position) else {
            return Ok(false);
        };

        self.view = pan_view(self.view, self.renderer.viewport(), from, to);
        self.render_and_present()?;

        Ok(true)
    }

    /// Zooms one wheel notch around `position`, rendering every intermediate
    /// view. Returns the number of frames rendered.
    pub fn zoom_at(
        &mut self,
        direction: ZoomDirection,
        position: PixelPoint,
    ) -> Result<u32, ViewControllerError<S::Error>> {
        let animation = ZoomAnimation::new(
            self.view,
            self.renderer.viewport(),
            position,
            direction,
            self.zoom_limits,
        );

        debug!(
            "zoom {:?} at ({}, {}) from {} to {}",
            direction,
            position.x,
            position.y,
            self.view.zoom(),
            animation.target_zoom()
        );

        let mut steps = 0;

        for view in animation {
            self.view = view;
            self.render_and_present()?;
            steps += 1;
        }

        Ok(steps)
    }

    fn render_and_present(&mut self) -> Result<FrameStats, ViewControllerError<S::Error>> {
        let stats = self.renderer.render(self.view);

        debug!(
            "frame {} rendered in {:?} at ({}, {}) zoom {}",
            stats.frame,
            stats.render_duration,
            stats.view.center_x(),
            stats.view.center_y(),
            stats.view.zoom()
        );

        self.refresh()?;

        Ok(stats)
    }
}

impl<S, Alg, CMap> ViewController<S, Alg, CMap> {
    #[must_use]
    pub fn view(&self) -> ViewState {
        self.view
    }

    #[must_use]
    pub fn drag(&self) -> DragState {
        self.drag
    }

    #[must_use]
    pub fn zoom_limits(&self) -> ZoomLimits {
        self.zoom_limits
    }

    #[must_use]
    pub fn renderer(&self) -> &FrameRenderer<Alg, CMap> {
        &self.renderer
    }

    #[must_use]
    pub fn surface(&self) -> &S {
        &self.surface
    }

    pub fn surface_mut(&mut self) -> &mut S {
        &mut self.surface
    }
}
