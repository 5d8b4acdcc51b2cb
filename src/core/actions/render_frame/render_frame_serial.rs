use crate::core::actions::render_frame::ports::{
    colour_map::ColourMap, fractal_algorithm::FractalAlgorithm,
};
use crate::core::actions::render_frame::render_tile::render_tile;
use crate::core::data::frame_buffer::FrameBuffer;
use crate::core::data::tile::{Tile, TileBuffer};
use crate::core::data::view_state::ViewState;
use crate::core::data::viewport::Viewport;

/// Single-threaded render of a whole frame, used as the reference output.
#[must_use]
pub fn render_frame_serial<Alg, CMap>(
    viewport: Viewport,
    view: ViewState,
    algorithm: &Alg,
    colour_map: &CMap,
) -> FrameBuffer
where
    Alg: FractalAlgorithm,
    CMap: ColourMap<Alg::Output>,
{
    let mut tile_buffer = TileBuffer::new(Tile::new(0, 0, viewport.height()), viewport.width());

    render_tile(&mut tile_buffer, viewport, view, algorithm, colour_map);

    let mut frame = FrameBuffer::new(viewport);
    frame.copy_tile(&tile_buffer);

    frame
}
