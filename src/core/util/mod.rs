pub mod calculate_tiles;
pub mod calculate_worker_count;
pub mod pixel_to_complex_coords;
