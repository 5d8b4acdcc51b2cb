use crate::core::data::point::PixelPoint;
use std::error::Error;
use std::fmt;

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum ViewportError {
    InvalidSize { width: u32, height: u32 },
}

impl fmt::Display for ViewportError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidSize { width, height } => {
                write!(f, "viewport size must be positive: {}x{}", width, height)
            }
        }
    }
}

impl Error for ViewportError {}

/// Fixed pixel dimensions of the rendered view.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct Viewport {
    width: u32,
    height: u32,
}

impl Viewport {
    pub fn new(width: u32, height: u32) -> Result<Self, ViewportError> {
        if width == 0 || height == 0 {
            return Err(ViewportError::InvalidSize { width, height });
        }

        Ok(Self { width, height })
    }

    #[must_use]
    pub fn width(&self) -> u32 {
        self.width
    }

    #[must_use]
    pub fn height(&self) -> u32 {
        self.height
    }

    #[must_use]
    pub fn pixel_count(&self) -> usize {
        self.width as usize * self.height as usize
    }

    /// Pixel-space coordinates of the viewport centre, `(W/2, H/2)`.
    #[must_use]
    pub fn center(&self) -> (f64, f64) {
        (f64::from(self.width) / 2.0, f64::from(self.height) / 2.0)
    }

    #[must_use]
    pub fn contains_point(&self, point: PixelPoint) -> bool {
        point.x >= 0
            && point.y >= 0
            && (point.x as i64) < i64::from(self.width)
            && (point.y as i64) < i64::from(self.height)
    }

    /// Row-major buffer index of `point`, if it lies inside the viewport.
    #[must_use]
    pub fn index_of(&self, point: PixelPoint) -> Option<usize> {
        if !self.contains_point(point) {
            return None;
        }

        Some(point.y as usize * self.width as usize + point.x as usize)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_viewport_new_valid() {
        let viewport = Viewport::new(800, 600).unwrap();

        assert_eq!(viewport.width(), 800);
        assert_eq!(viewport.height(), 600);
        assert_eq!(viewport.pixel_count(), 480_000);
    }

    #[test]
    fn test_single_pixel_viewport_is_valid() {
        assert!(Viewport::new(1, 1).is_ok());
    }

    #[test]
    fn test_viewport_dimensions_must_be_positive() {
        assert_eq!(
            Viewport::new(0, 10),
            Err(ViewportError::InvalidSize { width: 0, height: 10 })
        );
        assert_eq!(
            Viewport::new(10, 0),
            Err(ViewportError::InvalidSize { width: 10, height: 0 })
        );
    }

    #[test]
    fn test_center_is_half_extent() {
        let viewport = Viewport::new(801, 600).unwrap();

        assert_eq!(viewport.center(), (400.5, 300.0));
    }

    #[test]
    fn test_viewport_contains_point() {
        let viewport = Viewport::new(100, 50).unwrap();

        assert!(viewport.contains_point(PixelPoint::new(0, 0)));
        assert!(viewport.contains_point(PixelPoint::new(99, 49)));
        assert!(!viewport.contains_point(PixelPoint::new(100, 10)));
        assert!(!viewport.contains_point(PixelPoint::new(10, 50)));
        assert!(!viewport.contains_point(PixelPoint::new(-1, 10)));
    }

    #[test]
    fn test_index_of() {
        let viewport = Viewport::new(10, 5).unwrap();

        assert_eq!(viewport.index_of(PixelPoint::new(0, 0)), Some(0));
        assert_eq!(viewport.index_of(PixelPoint::new(3, 2)), Some(23));
        assert_eq!(viewport.index_of(PixelPoint::new(9, 4)), Some(49));
        assert_eq!(viewport.index_of(PixelPoint::new(10, 4)), None);
    }
}
