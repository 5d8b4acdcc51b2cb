use crate::core::data::complex::Complex;
use crate::core::data::point::PixelPoint;
use crate::core::data::view_state::ViewState;
use crate::core::data::viewport::Viewport;
use crate::core::navigation::limits::ZoomLimits;
use crate::core::util::pixel_to_complex_coords::{plane_scale, pixel_to_complex_coords};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ZoomDirection {
    In,
    Out,
}

impl ZoomDirection {
    #[must_use]
    pub fn target_zoom(self, zoom: f64, factor: f64) -> f64 {
        match self {
            Self::In => zoom * factor,
            Self::Out => zoom / factor,
        }
    }
}

/// View at `zoom` positioned so that `anchor` sits under `cursor`.
#[must_use]
pub fn anchored_view(anchor: Complex, cursor: PixelPoint, viewport: Viewport, zoom: f64) -> ViewState {
    let (half_width, half_height) = viewport.center();
    let scale = plane_scale(viewport, zoom);

    ViewState::from_parts(
        anchor.real - (f64::from(cursor.x) - half_width) / scale,
        anchor.imag - (f64::from(cursor.y) - half_height) / scale,
        zoom,
    )
}

/// The intermediate views of one cursor-anchored zoom gesture.
///
/// Step `k` moves the zoom `k / max_steps` of the remaining way to the target,
/// so the last permitted step lands on it. Iteration stops once the zoom is
/// within `tolerance` of the target or `max_steps` views have been yielded.
#[derive(Debug, Clone)]
pub struct ZoomAnimation {
    viewport: Viewport,
    cursor: PixelPoint,
    anchor: Complex,
    zoom: f64,
    target: f64,
    step: u32,
    limits: ZoomLimits,
}

impl ZoomAnimation {
    #[must_use]
    pub fn new(
        view: ViewState,
        viewport: Viewport,
        cursor: PixelPoint,
        direction: ZoomDirection,
        limits: ZoomLimits,
    ) -> Self {
        Self {
            viewport,
            cursor,
            anchor: pixel_to_complex_coords(cursor, viewport, view),
            zoom: view.zoom(),
            target: direction.target_zoom(view.zoom(), limits.factor),
            step: 0,
            limits,
        }
    }

    /// Plane point held under the cursor for the whole gesture.
    #[must_use]
    pub fn anchor(&self) -> Complex {
        self.anchor
    }

    #[must_use]
    pub fn target_zoom(&self) -> f64 {
        self.target
    }

    #[must_use]
    pub fn steps_taken(&self) -> u32 {
        self.step
    }

    fn is_finished(&self) -> bool {
        self.step >= self.limits.max_steps || (self.zoom - self.target).abs() <= self.limits.tolerance
    }
}

impl Iterator for ZoomAnimation {
    type Item = ViewState;

    fn next(&mut self) -> Option<ViewState> {
        if self.is_finished() {
            return None;
        }

        self.step += 1;
        let fraction = f64::from(self.step) / f64::from(self.limits.max_steps);
        self.zoom += (self.target - self.zoom) * fraction;

        Some(anchored_view(self.anchor, self.cursor, self.viewport, self.zoom))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPSILON: f64 = 1e-9;

    fn assert_approx_eq(actual: f64, expected: f64) {
        assert!(
            (actual - expected).abs() <= EPSILON,
            "actual={} expected={}",
            actual,
            expected
        );
    }

    fn viewport() -> Viewport {
        Viewport::new(800, 600).unwrap()
    }

    fn animate(view: ViewState, cursor: PixelPoint, direction: ZoomDirection) -> Vec<ViewState> {
        ZoomAnimation::new(view, viewport(), cursor, direction, ZoomLimits::default()).collect()
    }

    #[test]
    fn test_target_zoom() {
        assert_approx_eq(ZoomDirection::In.target_zoom(2.0, 1.1), 2.2);
        assert_approx_eq(ZoomDirection::Out.target_zoom(2.2, 1.1), 2.0);
    }

    #[test]
    fn test_zoom_in_converges_within_step_cap() {
        let steps = animate(ViewState::default(), PixelPoint::new(400, 300), ZoomDirection::In);
        let last = steps.last().unwrap();

        assert!(!steps.is_empty());
        assert!(steps.len() <= 10);
        assert!((last.zoom() - 1.1).abs() <= 1e-4, "final zoom {}", last.zoom());
    }

    #[test]
    fn test_zoom_in_from_one_takes_nine_steps() {
        let steps = animate(ViewState::default(), PixelPoint::new(400, 300), ZoomDirection::In);

        assert_eq!(steps.len(), 9);
        assert_approx_eq(steps[0].zoom(), 1.01);
        assert_approx_eq(steps[8].zoom(), 1.099963712);
    }

    #[test]
    fn test_zoom_out_converges_within_step_cap() {
        let steps = animate(ViewState::default(), PixelPoint::new(10, 590), ZoomDirection::Out);
        let last = steps.last().unwrap();

        assert!(steps.len() <= 10);
        assert!((last.zoom() - 1.0 / 1.1).abs() <= 1e-4);
    }

    #[test]
    fn test_large_zoom_stops_at_step_cap_on_target() {
        let view = ViewState::new(-0.5, 0.0, 1000.0).unwrap();

        let steps = animate(view, PixelPoint::new(400, 300), ZoomDirection::In);

        assert_eq!(steps.len(), 10);
        assert_approx_eq(steps[9].zoom(), 1100.0);
    }

    #[test]
    fn test_zoom_is_monotonic() {
        let steps = animate(ViewState::default(), PixelPoint::new(400, 300), ZoomDirection::In);

        for pair in steps.windows(2) {
            assert!(pair[1].zoom() > pair[0].zoom());
        }
    }

    #[test]
    fn test_cursor_anchor_is_preserved_at_every_step() {
        let view = ViewState::new(-0.2, 0.4, 3.0).unwrap();
        let cursor = PixelPoint::new(613, 127);
        let anchor = pixel_to_complex_coords(cursor, viewport(), view);

        for direction in [ZoomDirection::In, ZoomDirection::Out] {
            for step in animate(view, cursor, direction) {
                let under_cursor = pixel_to_complex_coords(cursor, viewport(), step);

                assert_approx_eq(under_cursor.real, anchor.real);
                assert_approx_eq(under_cursor.imag, anchor.imag);
            }
        }
    }

    #[test]
    fn test_zoom_at_centre_keeps_center() {
        let view = ViewState::new(0.25, -0.1, 4.0).unwrap();

        for step in animate(view, PixelPoint::new(400, 300), ZoomDirection::In) {
            assert_approx_eq(step.center_x(), 0.25);
            assert_approx_eq(step.center_y(), -0.1);
        }
    }

    #[test]
    fn test_animation_is_fused_after_finishing() {
        let mut animation = ZoomAnimation::new(
            ViewState::default(),
            viewport(),
            PixelPoint::new(0, 0),
            ZoomDirection::In,
            ZoomLimits::default(),
        );

        while animation.next().is_some() {}

        assert_eq!(animation.next(), None);
        assert!(animation.steps_taken() <= 10);
    }

    #[test]
    fn test_anchored_view_places_anchor_under_cursor() {
        let anchor = Complex::new(-0.7, 0.2);
        let cursor = PixelPoint::new(42, 500);

        let view = anchored_view(anchor, cursor, viewport(), 12.5);
        let point = pixel_to_complex_coords(cursor, viewport(), view);

        assert_approx_eq(view.zoom(), 12.5);
        assert_approx_eq(point.real, -0.7);
        assert_approx_eq(point.imag, 0.2);
    }
}
