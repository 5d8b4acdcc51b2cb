use std::path::Path;

use crate::controllers::interactive::explorer_config::ExplorerConfig;
use crate::core::actions::render_frame::frame_renderer::FrameStats;
use crate::presenters::file::ppm::PpmFilePresenter;

/// Renders the configured initial view once and writes it to `path` as PPM.
pub fn render_snapshot(
    config: &ExplorerConfig,
    path: impl AsRef<Path>,
) -> Result<FrameStats, Box<dyn std::error::Error>> {
    let presenter = PpmFilePresenter::new(path.as_ref());
    let mut controller = config.build_controller(presenter)?;

    let stats = controller.start()?;

    log::info!(
        "rendered {}x{} snapshot with {} iterations in {:?}",
        config.width,
        config.height,
        config.mandelbrot.max_iterations,
        stats.render_duration
    );

    Ok(stats)
}
