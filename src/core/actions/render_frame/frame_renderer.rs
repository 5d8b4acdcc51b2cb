use rayon::prelude::*;
use rayon::{ThreadPool, ThreadPoolBuildError, ThreadPoolBuilder};
use std::error::Error;
use std::fmt;
use std::num::NonZeroUsize;
use std::time::{Duration, Instant};

use crate::core::actions::render_frame::ports::{
    colour_map::ColourMap, fractal_algorithm::FractalAlgorithm,
};
use crate::core::actions::render_frame::render_tile::render_tile;
use crate::core::data::frame_buffer::FrameBuffer;
use crate::core::data::tile::{Tile, TileBuffer};
use crate::core::data::view_state::ViewState;
use crate::core::data::viewport::Viewport;
use crate::core::util::calculate_tiles::calculate_tiles;
use crate::core::util::calculate_worker_count::calculate_worker_count;

#[derive(Debug)]
pub enum FrameRendererError {
    ThreadPool(ThreadPoolBuildError),
}

impl fmt::Display for FrameRendererError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ThreadPool(err) => write!(f, "failed to build render thread pool: {}", err),
        }
    }
}

impl Error for FrameRendererError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::ThreadPool(err) => Some(err),
        }
    }
}

impl From<ThreadPoolBuildError> for FrameRendererError {
    fn from(err: ThreadPoolBuildError) -> Self {
        Self::ThreadPool(err)
    }
}

#[derive(Debug, Copy, Clone, PartialEq)]
pub struct FrameStats {
    pub frame: u64,
    pub render_duration: Duration,
    pub view: ViewState,
}

/// Double-buffered parallel renderer.
///
/// Rows are split into one tile per worker. Each worker renders into its own
/// scratch buffer; the calling thread then merges the scratch buffers into the
/// work frame and swaps it to the front. All buffers are allocated here and
/// reused for every frame.
pub struct FrameRenderer<Alg, CMap> {
    viewport: Viewport,
    algorithm: Alg,
    colour_map: CMap,
    pool: ThreadPool,
    tile_buffers: Vec<TileBuffer>,
    front: FrameBuffer,
    work: FrameBuffer,
    frames_rendered: u64,
}

impl<Alg, CMap> FrameRenderer<Alg, CMap>
where
    Alg: FractalAlgorithm + Sync,
    CMap: ColourMap<Alg::Output> + Sync,
{
    pub fn new(
        viewport: Viewport,
        worker_count: Option<NonZeroUsize>,
        algorithm: Alg,
        colour_map: CMap,
    ) -> Result<Self, FrameRendererError> {
        let workers = calculate_worker_count(worker_count, viewport);

        let pool = ThreadPoolBuilder::new()
            .num_threads(workers.get())
            .thread_name(|index| format!("frame-worker-{}", index))
            .build()?;

        let tile_buffers = calculate_tiles(workers, viewport)
            .into_iter()
            .map(|tile| TileBuffer::new(tile, viewport.width()))
            .collect();

        Ok(Self {
            viewport,
            algorithm,
            colour_map,
            pool,
            tile_buffers,
            front: FrameBuffer::new(viewport),
            work: FrameBuffer::new(viewport),
            frames_rendered: 0,
        })
    }

    /// Renders one complete frame for `view` and makes it the front buffer.
    ///
    /// Blocks until every tile has finished.
    pub fn render(&mut self, view: ViewState) -> FrameStats {
        let start = Instant::now();

        let viewport = self.viewport;
        let algorithm = &self.algorithm;
        let colour_map = &self.colour_map;
        let tile_buffers = &mut self.tile_buffers;

        self.pool.install(|| {
            tile_buffers.par_iter_mut().for_each(|tile_buffer| {
                render_tile(tile_buffer, viewport, view, algorithm, colour_map);
            });
        });

        for tile_buffer in &self.tile_buffers {
            self.work.copy_tile(tile_buffer);
        }

        std::mem::swap(&mut self.front, &mut self.work);
        self.frames_rendered += 1;

        FrameStats {
            frame: self.frames_rendered,
            render_duration: start.elapsed(),
            view,
        }
    }
}

impl<Alg, CMap> FrameRenderer<Alg, CMap> {
    /// Latest completed frame; all black before the first render.
    #[must_use]
    pub fn front(&self) -> &FrameBuffer {
        &self.front
    }

    #[must_use]
    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    #[must_use]
    pub fn worker_count(&self) -> usize {
        self.pool.current_num_threads()
    }

    pub fn tiles(&self) -> impl Iterator<Item = Tile> + '_ {
        self.tile_buffers.iter().map(TileBuffer::tile)
    }

    #[must_use]
    pub fn frames_rendered(&self) -> u64 {
        self.frames_rendered
    }

    #[must_use]
    pub fn algorithm(&self) -> &Alg {
        &self.algorithm
    }

    #[must_use]
    pub fn colour_map(&self) -> &CMap {
        &self.colour_map
    }
}
