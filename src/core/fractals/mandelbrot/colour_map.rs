use std::f64::consts::TAU;

use crate::core::actions::render_frame::ports::colour_map::ColourMap;
use crate::core::data::colour::Colour;
use crate::core::fractals::mandelbrot::algorithm::EscapeTime;

pub const INTERIOR_COLOUR: Colour = Colour::BLACK;

/// Palette value at hue 0, used where the smoothing term is undefined.
pub const BOUNDARY_COLOUR: Colour = Colour { r: 0, g: 220, b: 220 };

/// Smoothed iteration count covering one full trip around the palette.
const BAND_PERIOD: f64 = 32.0;

/// Continuous rainbow palette over the smoothed escape count.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct SmoothRainbow {
    max_iterations: u32,
}

impl SmoothRainbow {
    #[must_use]
    pub fn new(max_iterations: u32) -> Self {
        Self { max_iterations }
    }

    #[must_use]
    pub fn max_iterations(&self) -> u32 {
        self.max_iterations
    }
}

impl ColourMap<EscapeTime> for SmoothRainbow {
    fn map(&self, escape: EscapeTime) -> Colour {
        if escape.iterations >= self.max_iterations {
            return INTERIOR_COLOUR;
        }

        // log2(log2(|z|)) needs |z| > 1
        if escape.iterations <= 1 || escape.magnitude <= 1.0 {
            return BOUNDARY_COLOUR;
        }

        let smooth = f64::from(escape.iterations) + 1.0 - escape.magnitude.log2().log2();
        let hue = (smooth / BAND_PERIOD) % 1.0;

        rainbow(hue)
    }
}

fn rainbow(hue: f64) -> Colour {
    let channel = |phase: f64| ((TAU * (hue + phase)).sin().abs() * 255.0) as u8;

    Colour {
        r: channel(0.0),
        g: channel(1.0 / 3.0),
        b: channel(2.0 / 3.0),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn escape(iterations: u32, magnitude: f64) -> EscapeTime {
        EscapeTime {
            iterations,
            magnitude,
        }
    }

    #[test]
    fn test_map_returns_black_for_interior() {
        let mapper = SmoothRainbow::new(1000);

        assert_eq!(mapper.map(escape(1000, 0.3)), Colour::BLACK);
        assert_eq!(mapper.map(escape(1000, 2.0)), Colour::BLACK);
    }

    #[test]
    fn test_boundary_colour_is_palette_at_hue_zero() {
        assert_eq!(rainbow(0.0), BOUNDARY_COLOUR);
    }

    #[test]
    fn test_single_iteration_maps_to_boundary_colour() {
        let mapper = SmoothRainbow::new(1000);

        assert_eq!(mapper.map(escape(0, 0.0)), BOUNDARY_COLOUR);
        assert_eq!(mapper.map(escape(1, 14.1)), BOUNDARY_COLOUR);
    }

    #[test]
    fn test_undefined_smoothing_maps_to_boundary_colour() {
        let mapper = SmoothRainbow::new(1000);

        assert_eq!(mapper.map(escape(5, 1.0)), BOUNDARY_COLOUR);
        assert_eq!(mapper.map(escape(5, 0.5)), BOUNDARY_COLOUR);
    }

    #[test]
    fn test_map_smooth_values() {
        let mapper = SmoothRainbow::new(1000);

        // smooth = 10 + 1 - log2(log2(4)) = 10, hue = 0.3125
        assert_eq!(mapper.map(escape(10, 4.0)), Colour { r: 235, g: 202, b: 33 });
        // smooth = 40 + 1 - 2 = 39, hue wraps to 0.21875
        assert_eq!(mapper.map(escape(40, 16.0)), Colour { r: 250, g: 81, b: 168 });
        assert_eq!(mapper.map(escape(2, 6.0)), Colour { r: 80, g: 169, b: 249 });
    }

    #[test]
    fn test_hue_repeats_every_band_period() {
        let mapper = SmoothRainbow::new(1000);

        assert_eq!(mapper.map(escape(10, 4.0)), mapper.map(escape(42, 4.0)));
    }

    #[test]
    fn test_map_is_deterministic() {
        let mapper = SmoothRainbow::new(256);
        let value = escape(17, 3.7);

        assert_eq!(mapper.map(value), mapper.map(value));
    }

    #[test]
    fn test_escaped_colours_pack_with_empty_upper_byte() {
        let mapper = SmoothRainbow::new(1000);

        for iterations in 2..200 {
            let packed = mapper.map(escape(iterations, 2.5)).to_packed();

            assert_eq!(packed >> 24, 0);
        }
    }
}
