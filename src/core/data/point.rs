/// A position in viewport pixel space.
///
/// Signed so that pointer positions outside the window (a drag that leaves
/// the viewport) stay representable.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Default)]
pub struct PixelPoint {
    pub x: i32,
    pub y: i32,
}

impl PixelPoint {
    #[must_use]
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Pixel offset from `self` to `other`.
    #[must_use]
    pub fn delta_to(self, other: Self) -> (i32, i32) {
        (other.x - self.x, other.y - self.y)
    }
}
