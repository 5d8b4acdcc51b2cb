use crate::core::data::viewport::Viewport;
use crate::core::util::calculate_tiles::calculate_tile_count;
use std::num::NonZeroUsize;

#[must_use]
pub fn available_workers() -> NonZeroUsize {
    std::thread::available_parallelism().unwrap_or(NonZeroUsize::MIN)
}

/// Worker count for a render pass: the requested count, or the hardware
/// parallelism, capped at one worker per row.
#[must_use]
pub fn calculate_worker_count(requested: Option<NonZeroUsize>, viewport: Viewport) -> NonZeroUsize {
    let workers = requested.unwrap_or_else(available_workers);

    NonZeroUsize::new(calculate_tile_count(workers, viewport)).unwrap_or(NonZeroUsize::MIN)
}
