pub mod colour;
pub mod complex;
pub mod frame_buffer;
pub mod point;
pub mod tile;
pub mod view_state;
pub mod viewport;
