use crate::core::data::complex::Complex;
use crate::core::data::point::PixelPoint;
use crate::core::data::view_state::ViewState;
use crate::core::data::viewport::Viewport;

/// Pixels per unit of the complex plane at `zoom`.
///
/// Both axes use the viewport width, which keeps pixels square and ties the
/// zoom scale to the window width.
#[must_use]
pub fn plane_scale(viewport: Viewport, zoom: f64) -> f64 {
    zoom * f64::from(viewport.width()) / 4.0
}

#[must_use]
pub fn pixel_to_complex_coords(pixel: PixelPoint, viewport: Viewport, view: ViewState) -> Complex {
    let (half_width, half_height) = viewport.center();
    let scale = plane_scale(viewport, view.zoom());

    Complex {
        real: (f64::from(pixel.x) - half_width) / scale + view.center_x(),
        imag: (f64::from(pixel.y) - half_height) / scale + view.center_y(),
    }
}

/// Inverse of [`pixel_to_complex_coords`], rounded to the nearest pixel.
#[must_use]
pub fn complex_to_pixel_coords(point: Complex, viewport: Viewport, view: ViewState) -> PixelPoint {
    let (half_width, half_height) = viewport.center();
    let scale = plane_scale(viewport, view.zoom());

    PixelPoint {
        x: ((point.real - view.center_x()) * scale + half_width).round() as i32,
        y: ((point.imag - view.center_y()) * scale + half_height).round() as i32,
    }
}
