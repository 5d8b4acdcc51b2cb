use std::error::Error;

use crate::core::data::frame_buffer::FrameBuffer;

/// Destination for finished frames.
pub trait DisplaySurface {
    type Error: Error + 'static;

    fn present(&mut self, frame: &FrameBuffer) -> Result<(), Self::Error>;
}
