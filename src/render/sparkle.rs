//! Procedural sparkle mark
//!
//! Draws the project mark from scratch: an 8-point star, a white center
//! highlight, and four gold accent dots. Everything is sized as a fraction of
//! the canvas, so the same routine serves any square resolution.

use image::RgbaImage;
use log::debug;
use tiny_skia::{FillRule, Paint, PathBuilder, Pixmap, Transform};

use crate::error::{Error, Result};
use crate::render::pixmap_to_image;
use crate::IconSource;

/// Long-point radius of the star, as a fraction of the canvas edge.
pub const STAR_RADIUS_FRAC: f32 = 0.35;
/// Short points sit at half the long radius.
pub const STAR_INNER_SCALE: f32 = 0.5;

const HIGHLIGHT_RADIUS_FRAC: f32 = 0.12;
const SPARKLE_RING_FRAC: f32 = 0.25;
const DOT_RADIUS_FRAC: f32 = 0.06;

const EMERALD: [u8; 3] = [16, 185, 129];
const GOLD: [u8; 3] = [251, 191, 36];
const WHITE: [u8; 3] = [255, 255, 255];

/// Angles (degrees) of the four accent dots around the center.
const DOT_ANGLES_DEG: [f32; 4] = [45.0, 135.0, 225.0, 315.0];

/// Vertices of the 8-point star for a `size` x `size` canvas.
///
/// Vertex `i` sits at angle `-90 + 45*i` degrees from the canvas center, at
/// the long radius for even `i` and the short radius for odd `i`.
pub fn star_points(size: u32) -> [(f32, f32); 8] {
    let center = size as f32 / 2.0;
    let long = size as f32 * STAR_RADIUS_FRAC;
    let mut points = [(0.0f32, 0.0f32); 8];
    for (i, point) in points.iter_mut().enumerate() {
        let angle = (i as f32 * 45.0 - 90.0).to_radians();
        let radius = if i % 2 == 0 {
            long
        } else {
            long * STAR_INNER_SCALE
        };
        *point = (
            center + radius * angle.cos(),
            center + radius * angle.sin(),
        );
    }
    points
}

fn circle(cx: f32, cy: f32, radius: f32) -> Result<tiny_skia::Path> {
    PathBuilder::from_circle(cx, cy, radius)
        .ok_or_else(|| Error::Render(format!("degenerate circle at ({cx}, {cy}) r={radius}")))
}

/// Base-image producer that needs no input file.
///
/// Deterministic: the same `size` always yields the same pixels, which is
/// what makes repeated runs byte-for-byte identical.
pub struct SparkleSource;

impl IconSource for SparkleSource {
    fn produce_base_image(&self, size: u32) -> Result<RgbaImage> {
        debug!("drawing sparkle mark at {size}x{size}");

        let mut pixmap = Pixmap::new(size, size)
            .ok_or_else(|| Error::Render(format!("failed to allocate {size}x{size} pixmap")))?;

        let mut paint = Paint::default();
        paint.anti_alias = true;

        // Main star
        let points = star_points(size);
        let mut pb = PathBuilder::new();
        pb.move_to(points[0].0, points[0].1);
        for &(x, y) in &points[1..] {
            pb.line_to(x, y);
        }
        pb.close();
        let star = pb
            .finish()
            .ok_or_else(|| Error::Render("star outline produced an empty path".into()))?;
        paint.set_color_rgba8(EMERALD[0], EMERALD[1], EMERALD[2], 255);
        pixmap.fill_path(&star, &paint, FillRule::Winding, Transform::identity(), None);

        // White highlight in the center
        let center = size as f32 / 2.0;
        let highlight = circle(center, center, size as f32 * HIGHLIGHT_RADIUS_FRAC)?;
        paint.set_color_rgba8(WHITE[0], WHITE[1], WHITE[2], 255);
        pixmap.fill_path(
            &highlight,
            &paint,
            FillRule::Winding,
            Transform::identity(),
            None,
        );

        // Gold accent dots on a ring around the star
        let ring = size as f32 * SPARKLE_RING_FRAC;
        let dot = size as f32 * DOT_RADIUS_FRAC;
        paint.set_color_rgba8(GOLD[0], GOLD[1], GOLD[2], 255);
        for deg in DOT_ANGLES_DEG {
            let rad = deg.to_radians();
            let path = circle(center + ring * rad.cos(), center + ring * rad.sin(), dot)?;
            pixmap.fill_path(&path, &paint, FillRule::Winding, Transform::identity(), None);
        }

        Ok(pixmap_to_image(&pixmap))
    }
}
