//! Base-image acquisition backends
//!
//! Both backends draw into a `tiny-skia` [`Pixmap`] and hand the pipeline a
//! plain RGBA buffer. The pixmap stores premultiplied alpha, so the
//! conversion demultiplies per pixel before the `image` crate ever sees the
//! data.

pub mod sparkle;
#[cfg(feature = "svg")]
pub mod svg;

use image::{Rgba, RgbaImage};
use tiny_skia::Pixmap;

/// Convert a rendered pixmap into a straight-alpha RGBA buffer.
pub(crate) fn pixmap_to_image(pixmap: &Pixmap) -> RgbaImage {
    let mut img = RgbaImage::new(pixmap.width(), pixmap.height());
    for (src, dst) in pixmap.pixels().iter().zip(img.pixels_mut()) {
        let c = src.demultiply();
        *dst = Rgba([c.red(), c.green(), c.blue(), c.alpha()]);
    }
    img
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn conversion_preserves_dimensions() {
        let pixmap = Pixmap::new(33, 17).unwrap();
        let img = pixmap_to_image(&pixmap);
        assert_eq!(img.dimensions(), (33, 17));
    }

    #[test]
    fn empty_pixmap_is_fully_transparent() {
        let pixmap = Pixmap::new(8, 8).unwrap();
        let img = pixmap_to_image(&pixmap);
        assert!(img.pixels().all(|p| p.0 == [0, 0, 0, 0]));
    }
}
