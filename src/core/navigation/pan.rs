use crate::core::data::point::PixelPoint;
use crate::core::data::view_state::ViewState;
use crate::core::data::viewport::Viewport;
use crate::core::util::pixel_to_complex_coords::plane_scale;

/// Moves the view so the plane point under `from` ends up under `to`.
#[must_use]
pub fn pan_view(view: ViewState, viewport: Viewport, from: PixelPoint, to: PixelPoint) -> ViewState {
    let (dx, dy) = from.delta_to(to);
    let scale = plane_scale(viewport, view.zoom());

    view.with_center(
        view.center_x() - f64::from(dx) / scale,
        view.center_y() - f64::from(dy) / scale,
    )
}
