use crate::core::data::complex::Complex;
use std::error::Error;
use std::fmt;

pub const DEFAULT_CENTER_X: f64 = -0.5;
pub const DEFAULT_CENTER_Y: f64 = 0.0;
pub const DEFAULT_ZOOM: f64 = 1.0;

#[derive(Debug, Copy, Clone, PartialEq)]
pub enum ViewStateError {
    InvalidZoom { zoom: f64 },
}

impl fmt::Display for ViewStateError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidZoom { zoom } => {
                write!(f, "zoom must be a positive finite number: {}", zoom)
            }
        }
    }
}

impl Error for ViewStateError {}

/// Pan/zoom parameters of the plane-to-pixel mapping.
///
/// `center_x`/`center_y` is the complex point shown at the viewport centre,
/// `zoom` is strictly positive (1.0 is the default scale).
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct ViewState {
    center_x: f64,
    center_y: f64,
    zoom: f64,
}

impl Default for ViewState {
    fn default() -> Self {
        Self {
            center_x: DEFAULT_CENTER_X,
            center_y: DEFAULT_CENTER_Y,
            zoom: DEFAULT_ZOOM,
        }
    }
}

impl ViewState {
    pub fn new(center_x: f64, center_y: f64, zoom: f64) -> Result<Self, ViewStateError> {
        if !(zoom.is_finite() && zoom > 0.0) {
            return Err(ViewStateError::InvalidZoom { zoom });
        }

        Ok(Self {
            center_x,
            center_y,
            zoom,
        })
    }

    /// Builds a view from parts the caller already knows to be valid
    /// (a zoom interpolated between two positive zooms).
    pub(crate) fn from_parts(center_x: f64, center_y: f64, zoom: f64) -> Self {
        debug_assert!(zoom > 0.0, "zoom must stay positive, got {}", zoom);

        Self {
            center_x,
            center_y,
            zoom,
        }
    }

    #[must_use]
    pub fn center_x(&self) -> f64 {
        self.center_x
    }

    #[must_use]
    pub fn center_y(&self) -> f64 {
        self.center_y
    }

    #[must_use]
    pub fn center(&self) -> Complex {
        Complex::new(self.center_x, self.center_y)
    }

    #[must_use]
    pub fn zoom(&self) -> f64 {
        self.zoom
    }

    #[must_use]
    pub fn with_center(&self, center_x: f64, center_y: f64) -> Self {
        Self {
            center_x,
            center_y,
            zoom: self.zoom,
        }
    }
}
