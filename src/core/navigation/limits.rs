pub const ZOOM_FACTOR: f64 = 1.1;
pub const ZOOM_MAX_STEPS: u32 = 10;
pub const ZOOM_TOLERANCE: f64 = 1e-4;

/// Tuning for one scroll-wheel zoom gesture.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ZoomLimits {
    /// Zoom multiplier per wheel notch.
    pub factor: f64,
    /// Upper bound on intermediate frames per notch.
    pub max_steps: u32,
    /// Absolute distance to the target zoom at which the gesture stops.
    pub tolerance: f64,
}

impl Default for ZoomLimits {
    fn default() -> Self {
        Self {
            factor: ZOOM_FACTOR,
            max_steps: ZOOM_MAX_STEPS,
            tolerance: ZOOM_TOLERANCE,
        }
    }
}
