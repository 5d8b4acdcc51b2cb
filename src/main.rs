use mandelbrot_explorer::{ExplorerConfig, render_snapshot};

const DEFAULT_SNAPSHOT_PATH: &str = "output/mandelbrot.ppm";

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    let path = std::env::args()
        .nth(1)
        .unwrap_or_else(|| DEFAULT_SNAPSHOT_PATH.to_string());

    render_snapshot(&ExplorerConfig::default(), path)?;

    Ok(())
}
