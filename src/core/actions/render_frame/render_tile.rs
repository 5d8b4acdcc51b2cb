use crate::core::actions::render_frame::ports::{
    colour_map::ColourMap, fractal_algorithm::FractalAlgorithm,
};
use crate::core::data::point::PixelPoint;
use crate::core::data::tile::TileBuffer;
use crate::core::data::view_state::ViewState;
use crate::core::data::viewport::Viewport;
use crate::core::util::pixel_to_complex_coords::pixel_to_complex_coords;

/// Fills every pixel of `tile_buffer` for `view`. Writes nothing outside the buffer.
pub fn render_tile<Alg, CMap>(
    tile_buffer: &mut TileBuffer,
    viewport: Viewport,
    view: ViewState,
    algorithm: &Alg,
    colour_map: &CMap,
) where
    Alg: FractalAlgorithm,
    CMap: ColourMap<Alg::Output>,
{
    for (y, row) in tile_buffer.rows_mut() {
        for (x, pixel) in row.iter_mut().enumerate() {
            let point = pixel_to_complex_coords(PixelPoint::new(x as i32, y as i32), viewport, view);

            *pixel = colour_map.map(algorithm.compute(point)).to_packed();
        }
    }
}
