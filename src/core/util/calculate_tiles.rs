use crate::core::data::tile::Tile;
use crate::core::data::viewport::Viewport;
use std::num::NonZeroUsize;

/// Number of tiles used for `workers`: never more than one per row.
#[must_use]
pub fn calculate_tile_count(workers: NonZeroUsize, viewport: Viewport) -> usize {
    workers.get().min(viewport.height() as usize)
}

/// Splits the viewport rows into contiguous bands of `⌊H/T⌋` rows.
///
/// The last band absorbs the remainder, so the bands cover `[0, H)` exactly once.
#[must_use]
pub fn calculate_tiles(workers: NonZeroUsize, viewport: Viewport) -> Vec<Tile> {
    let height = viewport.height();
    let tile_count = calculate_tile_count(workers, viewport) as u32;
    let tile_height = height / tile_count;

    (0..tile_count)
        .map(|index| {
            let start_y = index * tile_height;

            let end_y = if index == tile_count - 1 {
                height // Last tile takes any remainder rows
            } else {
                start_y + tile_height
            };

            Tile::new(index as usize, start_y, end_y)
        })
        .collect()
}
