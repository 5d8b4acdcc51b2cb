use crate::core::data::complex::Complex;

/// Per-point computation driven by the frame renderer.
pub trait FractalAlgorithm {
    type Output;

    fn compute(&self, point: Complex) -> Self::Output;
}
