use crate::core::data::colour::{Colour, PackedColour};
use crate::core::data::point::PixelPoint;
use crate::core::data::tile::TileBuffer;
use crate::core::data::viewport::Viewport;
use std::error::Error;
use std::fmt;

#[derive(Debug, Clone, PartialEq)]
pub enum FrameBufferError {
    PixelOutsideBounds {
        pixel: PixelPoint,
        viewport: Viewport,
    },
    BoundsMismatch {
        viewport_size: usize,
        buffer_size: usize,
    },
}

impl fmt::Display for FrameBufferError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::BoundsMismatch {
                viewport_size,
                buffer_size,
            } => {
                write!(
                    f,
                    "viewport size {} does not match buffer size {}",
                    viewport_size, buffer_size
                )
            }
            Self::PixelOutsideBounds { pixel, viewport } => {
                write!(
                    f,
                    "pixel at x:{}, y:{} outside of {}x{} viewport",
                    pixel.x,
                    pixel.y,
                    viewport.width(),
                    viewport.height()
                )
            }
        }
    }
}

impl Error for FrameBufferError {}

/// Row-major packed colours for one full viewport.
#[derive(Debug, Clone, PartialEq)]
pub struct FrameBuffer {
    viewport: Viewport,
    pixels: Vec<PackedColour>,
}

impl FrameBuffer {
    /// A buffer filled with the interior colour, so it is complete before the first pass.
    #[must_use]
    pub fn new(viewport: Viewport) -> Self {
        Self {
            viewport,
            pixels: vec![Colour::BLACK.to_packed(); viewport.pixel_count()],
        }
    }

    pub fn from_data(
        viewport: Viewport,
        pixels: Vec<PackedColour>,
    ) -> Result<Self, FrameBufferError> {
        if viewport.pixel_count() != pixels.len() {
            return Err(FrameBufferError::BoundsMismatch {
                viewport_size: viewport.pixel_count(),
                buffer_size: pixels.len(),
            });
        }

        Ok(Self { viewport, pixels })
    }

    #[must_use]
    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    #[must_use]
    pub fn pixels(&self) -> &[PackedColour] {
        &self.pixels
    }

    #[must_use]
    pub fn pixel(&self, pixel: PixelPoint) -> Option<Colour> {
        self.viewport
            .index_of(pixel)
            .map(|index| Colour::from_packed(self.pixels[index]))
    }

    pub fn set_pixel(&mut self, pixel: PixelPoint, colour: Colour) -> Result<(), FrameBufferError> {
        let index = self
            .viewport
            .index_of(pixel)
            .ok_or(FrameBufferError::PixelOutsideBounds {
                pixel,
                viewport: self.viewport,
            })?;

        self.pixels[index] = colour.to_packed();
        Ok(())
    }

    /// Copies a finished tile into its rows of this buffer.
    ///
    /// # Panics
    /// Panics if the tile was laid out for a different viewport.
    pub fn copy_tile(&mut self, tile_buffer: &TileBuffer) {
        assert_eq!(
            tile_buffer.width(),
            self.viewport.width(),
            "tile width {} does not match viewport width {}",
            tile_buffer.width(),
            self.viewport.width()
        );

        let width = self.viewport.width() as usize;
        let tile = tile_buffer.tile();
        let start = tile.start_y() as usize * width;
        let end = tile.end_y() as usize * width;

        self.pixels[start..end].copy_from_slice(tile_buffer.pixels());
    }
}
