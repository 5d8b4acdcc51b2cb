use crate::core::fractals::mandelbrot::{
    algorithm::MandelbrotAlgorithm, colour_map::SmoothRainbow, errors::MandelbrotError,
};

pub const DEFAULT_MAX_ITERATIONS: u32 = 1000;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MandelbrotConfig {
    pub max_iterations: u32,
}

impl Default for MandelbrotConfig {
    fn default() -> Self {
        Self {
            max_iterations: DEFAULT_MAX_ITERATIONS,
        }
    }
}

impl MandelbrotConfig {
    pub fn build_algorithm(&self) -> Result<MandelbrotAlgorithm, MandelbrotError> {
        MandelbrotAlgorithm::new(self.max_iterations)
    }

    /// The palette shares the iteration cap so interior points map to black.
    #[must_use]
    pub fn build_colour_map(&self) -> SmoothRainbow {
        SmoothRainbow::new(self.max_iterations)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_uses_thousand_iterations() {
        let config = MandelbrotConfig::default();

        assert_eq!(config.max_iterations, 1000);
        assert_eq!(config.build_algorithm().unwrap().max_iterations(), 1000);
        assert_eq!(config.build_colour_map().max_iterations(), 1000);
    }

    #[test]
    fn test_zero_iterations_fails_to_build() {
        let config = MandelbrotConfig { max_iterations: 0 };

        assert_eq!(
            config.build_algorithm(),
            Err(MandelbrotError::ZeroMaxIterations)
        );
    }
}
