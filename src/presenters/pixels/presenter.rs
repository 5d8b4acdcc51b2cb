use pixels::{Pixels, SurfaceTexture, TextureError};
use winit::dpi::PhysicalPosition;
use winit::window::Window;

use crate::adapters::pixel_format::copy_packed_to_rgba;
use crate::controllers::interactive::ports::display_surface::DisplaySurface;
use crate::core::data::frame_buffer::FrameBuffer;
use crate::core::data::point::PixelPoint;
use crate::core::data::viewport::Viewport;

/// Window-backed display surface. The pixel buffer is viewport-sized and
/// scaled onto the window surface by `pixels`.
pub struct PixelsPresenter {
    pixels: Pixels<'static>,
    viewport: Viewport,
}

impl PixelsPresenter {
    pub fn new(window: &'static Window, viewport: Viewport) -> Result<Self, pixels::Error> {
        let size = window.inner_size();
        let surface_texture = SurfaceTexture::new(size.width, size.height, window);
        let pixels = Pixels::new(viewport.width(), viewport.height(), surface_texture)?;

        Ok(Self { pixels, viewport })
    }

    #[must_use]
    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    /// Maps a physical window position onto the viewport.
    ///
    /// Positions outside the drawn area map to out-of-range pixels instead of
    /// being clamped, so a drag that leaves the window keeps its true delta.
    #[must_use]
    pub fn window_to_viewport(&self, position: PhysicalPosition<f64>) -> PixelPoint {
        match self
            .pixels
            .window_pos_to_pixel((position.x as f32, position.y as f32))
        {
            Ok((x, y)) => PixelPoint::new(x as i32, y as i32),
            Err((x, y)) => PixelPoint::new(x as i32, y as i32),
        }
    }

    pub fn resize_surface(&mut self, width: u32, height: u32) -> Result<(), TextureError> {
        self.pixels.resize_surface(width, height)
    }
}

impl DisplaySurface for PixelsPresenter {
    type Error = pixels::Error;

    fn present(&mut self, frame: &FrameBuffer) -> Result<(), pixels::Error> {
        debug_assert_eq!(frame.viewport(), self.viewport);

        copy_packed_to_rgba(frame.pixels(), self.pixels.frame_mut());
        self.pixels.render()
    }
}
