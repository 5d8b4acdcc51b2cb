use crate::core::actions::render_frame::ports::fractal_algorithm::FractalAlgorithm;
use crate::core::data::complex::Complex;
use crate::core::fractals::mandelbrot::errors::MandelbrotError;

/// Escape radius squared; `|z| > 2` guarantees divergence.
const ESCAPE_RADIUS_SQUARED: f64 = 4.0;

/// Result of iterating one point.
///
/// `iterations == max_iterations` means the orbit stayed bounded.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct EscapeTime {
    pub iterations: u32,
    pub magnitude: f64,
}

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct MandelbrotAlgorithm {
    max_iterations: u32,
}

impl MandelbrotAlgorithm {
    pub fn new(max_iterations: u32) -> Result<Self, MandelbrotError> {
        if max_iterations == 0 {
            return Err(MandelbrotError::ZeroMaxIterations);
        }

        Ok(Self { max_iterations })
    }

    #[must_use]
    pub fn max_iterations(&self) -> u32 {
        self.max_iterations
    }
}

impl FractalAlgorithm for MandelbrotAlgorithm {
    type Output = EscapeTime;

    fn compute(&self, c: Complex) -> EscapeTime {
        let mut z = Complex::ZERO;
        let mut iterations = 0;

        while z.magnitude_squared() <= ESCAPE_RADIUS_SQUARED && iterations < self.max_iterations {
            z = z * z + c;
            iterations += 1;
        }

        EscapeTime {
            iterations,
            magnitude: z.magnitude(),
        }
    }
}
