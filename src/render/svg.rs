//! SVG rasterization backend
//!
//! Parses the vector source with `usvg` and renders it into a pixmap with
//! `resvg`, scaled so the artwork fills the requested square regardless of
//! the SVG's own view box.

use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use image::RgbaImage;
use log::debug;
use resvg::usvg;
use tiny_skia::{Pixmap, Transform};

use crate::error::{Error, Result};
use crate::render::pixmap_to_image;
use crate::IconSource;

/// Base-image producer backed by an SVG file on disk.
pub struct SvgSource {
    path: PathBuf,
}

impl SvgSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// The vector source this producer reads.
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl IconSource for SvgSource {
    fn produce_base_image(&self, size: u32) -> Result<RgbaImage> {
        if !self.path.exists() {
            return Err(Error::SourceNotFound(self.path.clone()));
        }
        let data = fs::read(&self.path)?;

        // Load system fonts so <text> elements in the source render.
        let mut opt = usvg::Options::default();
        Arc::make_mut(&mut opt.fontdb).load_system_fonts();

        let tree = usvg::Tree::from_data(&data, &opt).map_err(|e| {
            Error::Render(format!("failed to parse {}: {e}", self.path.display()))
        })?;

        let mut pixmap = Pixmap::new(size, size)
            .ok_or_else(|| Error::Render(format!("failed to allocate {size}x{size} pixmap")))?;

        let scale_x = size as f32 / tree.size().width();
        let scale_y = size as f32 / tree.size().height();
        debug!(
            "rasterizing {} at {size}x{size} (scale {scale_x:.3}x{scale_y:.3})",
            self.path.display()
        );
        resvg::render(
            &tree,
            Transform::from_scale(scale_x, scale_y),
            &mut pixmap.as_mut(),
        );

        Ok(pixmap_to_image(&pixmap))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const RED_SQUARE: &str = r##"<svg xmlns="http://www.w3.org/2000/svg" width="100" height="100"><rect width="100" height="100" fill="#ff0000"/></svg>"##;

    fn scratch_svg(name: &str, contents: &str) -> PathBuf {
        let path = std::env::temp_dir().join(format!("iconsmith-{}-{}.svg", name, std::process::id()));
        fs::write(&path, contents).expect("write scratch svg");
        path
    }

    #[test]
    fn missing_source_is_reported_before_rendering() {
        let source = SvgSource::new("definitely/not/here.svg");
        match source.produce_base_image(64) {
            Err(Error::SourceNotFound(p)) => {
                assert_eq!(p, PathBuf::from("definitely/not/here.svg"))
            }
            other => panic!("expected SourceNotFound, got {other:?}"),
        }
    }

    #[test]
    fn rasterizes_at_requested_resolution() {
        let path = scratch_svg("red", RED_SQUARE);
        let img = SvgSource::new(&path).produce_base_image(64).unwrap();
        let _ = fs::remove_file(&path);

        assert_eq!(img.dimensions(), (64, 64));
        // The rect covers the whole view box, so every pixel is opaque red.
        assert_eq!(img.get_pixel(32, 32).0, [255, 0, 0, 255]);
    }

    #[test]
    fn malformed_source_is_a_render_error() {
        let path = scratch_svg("broken", "<svg this is not xml");
        let result = SvgSource::new(&path).produce_base_image(64);
        let _ = fs::remove_file(&path);

        assert!(matches!(result, Err(Error::Render(_))));
    }
}
