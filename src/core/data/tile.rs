use crate::core::data::colour::PackedColour;
use std::ops::Range;

/// A horizontal band of rows `[start_y, end_y)` rendered by one worker.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct Tile {
    index: usize,
    start_y: u32,
    end_y: u32,
}

impl Tile {
    #[must_use]
    pub fn new(index: usize, start_y: u32, end_y: u32) -> Self {
        debug_assert!(start_y <= end_y, "tile rows {}..{} are reversed", start_y, end_y);

        Self {
            index,
            start_y,
            end_y,
        }
    }

    #[must_use]
    pub fn index(&self) -> usize {
        self.index
    }

    #[must_use]
    pub fn start_y(&self) -> u32 {
        self.start_y
    }

    #[must_use]
    pub fn end_y(&self) -> u32 {
        self.end_y
    }

    #[must_use]
    pub fn rows(&self) -> Range<u32> {
        self.start_y..self.end_y
    }

    #[must_use]
    pub fn row_count(&self) -> u32 {
        self.end_y - self.start_y
    }
}

/// Private scratch region owned by one tile for the duration of a pass.
#[derive(Debug, Clone)]
pub struct TileBuffer {
    tile: Tile,
    width: u32,
    pixels: Vec<PackedColour>,
}

impl TileBuffer {
    #[must_use]
    pub fn new(tile: Tile, width: u32) -> Self {
        Self {
            tile,
            width,
            pixels: vec![0; tile.row_count() as usize * width as usize],
        }
    }

    #[must_use]
    pub fn tile(&self) -> Tile {
        self.tile
    }

    #[must_use]
    pub fn width(&self) -> u32 {
        self.width
    }

    #[must_use]
    pub fn pixels(&self) -> &[PackedColour] {
        &self.pixels
    }

    /// Mutable rows of the region, paired with their absolute `y`.
    pub fn rows_mut(&mut self) -> impl Iterator<Item = (u32, &mut [PackedColour])> {
        let width = self.width as usize;

        self.tile.rows().zip(self.pixels.chunks_exact_mut(width))
    }
}
