use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};

use log::info;

use crate::adapters::pixel_format::packed_to_rgb_bytes;
use crate::controllers::interactive::ports::display_surface::DisplaySurface;
use crate::core::data::frame_buffer::FrameBuffer;

/// Writes `frame` as a binary (P6) PPM image.
pub fn write_ppm<W: Write>(writer: &mut W, frame: &FrameBuffer) -> io::Result<()> {
    let viewport = frame.viewport();

    // PPM header: P6 means binary RGB, then width, height and max_colour
    writeln!(writer, "P6")?;
    writeln!(writer, "{} {}", viewport.width(), viewport.height())?;
    writeln!(writer, "255")?;
    writer.write_all(&packed_to_rgb_bytes(frame.pixels()))?;

    Ok(())
}

/// Display surface that saves each presented frame to one file, overwriting it.
#[derive(Debug, Clone)]
pub struct PpmFilePresenter {
    path: PathBuf,
}

impl PpmFilePresenter {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl DisplaySurface for PpmFilePresenter {
    type Error = io::Error;

    fn present(&mut self, frame: &FrameBuffer) -> io::Result<()> {
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let mut file = BufWriter::new(std::fs::File::create(&self.path)?);
        write_ppm(&mut file, frame)?;
        file.flush()?;

        info!("wrote {}", self.path.display());

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::data::colour::Colour;
    use crate::core::data::point::PixelPoint;
    use crate::core::data::viewport::Viewport;

    fn two_by_one_frame() -> FrameBuffer {
        let mut frame = FrameBuffer::new(Viewport::new(2, 1).unwrap());
        frame
            .set_pixel(PixelPoint::new(1, 0), Colour { r: 1, g: 2, b: 3 })
            .unwrap();
        frame
    }

    #[test]
    fn test_write_ppm_header_and_body() {
        let mut out = Vec::new();

        write_ppm(&mut out, &two_by_one_frame()).unwrap();

        let mut expected = b"P6\n2 1\n255\n".to_vec();
        expected.extend_from_slice(&[0, 0, 0, 1, 2, 3]);
        assert_eq!(out, expected);
    }

    #[test]
    fn test_present_creates_parent_directories() {
        let dir = std::env::temp_dir().join(format!("ppm_presenter_test_{}", std::process::id()));
        let path = dir.join("nested").join("frame.ppm");
        let mut presenter = PpmFilePresenter::new(&path);

        presenter.present(&two_by_one_frame()).unwrap();

        let bytes = std::fs::read(presenter.path()).unwrap();
        assert!(bytes.starts_with(b"P6\n2 1\n255\n"));
        assert_eq!(bytes.len(), 11 + 6);

        std::fs::remove_dir_all(dir).unwrap();
    }
}
