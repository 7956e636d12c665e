//! Iconsmith
//!
//! A small favicon/PWA icon generator. A single 512x512 base image is
//! produced once per run, then resampled into every entry of a fixed size
//! table and written to disk as `.ico` or `.png`.
//!
//! # Features
//!
//! - **SVG backend** (default): rasterizes a vector source with `resvg`
//! - **Procedural backend**: draws the sparkle mark with `tiny-skia`, no
//!   input file required
//!
//! # Example
//!
//! ```no_run
//! use std::path::Path;
//! use iconsmith::{generate, sparkle_source, DEFAULT_SIZES};
//!
//! # fn main() -> iconsmith::Result<()> {
//! let source = sparkle_source();
//! let written = generate(&source, Path::new("public"), &DEFAULT_SIZES)?;
//! assert_eq!(written.len(), 4);
//! # Ok(())
//! # }
//! ```

use image::RgbaImage;

pub mod error;
pub use error::{Error, Result};

pub mod pipeline;
pub mod render;
pub mod report;

pub use pipeline::{generate, GeneratedIcon, SizeEntry};

/// Native resolution (square) the base image is produced at.
///
/// Every derived size in [`DEFAULT_SIZES`] is at most this large, so the
/// derivation loop only ever shrinks.
pub const BASE_SIZE: u32 = 512;

/// The standard favicon + PWA output set.
///
/// Paths are relative to the output directory passed to
/// [`generate`](pipeline::generate). The table is data, not behavior: tests
/// substitute their own tables to exercise the pipeline against scratch
/// directories.
pub const DEFAULT_SIZES: [SizeEntry; 4] = [
    SizeEntry::new("favicon.ico", 64, 64),
    SizeEntry::new("icons/apple-touch-icon.png", 180, 180),
    SizeEntry::new("icons/icon-192x192.png", 192, 192),
    SizeEntry::new("icons/icon-512x512.png", 512, 512),
];

/// Core trait for base-image producers
///
/// The pipeline is generic over how the 512x512 base raster comes to exist:
/// rasterized from an SVG ([`render::svg::SvgSource`]) or drawn procedurally
/// ([`render::sparkle::SparkleSource`]). The buffer is read-only after
/// production; the derivation loop only resamples copies of it.
pub trait IconSource {
    /// Produce the base raster at `size` x `size` pixels.
    fn produce_base_image(&self, size: u32) -> Result<RgbaImage>;
}

/// Create a source that rasterizes the SVG file at `path`.
#[cfg(feature = "svg")]
pub fn svg_source(path: impl Into<std::path::PathBuf>) -> render::svg::SvgSource {
    render::svg::SvgSource::new(path)
}

/// Create the procedural sparkle source (no input file needed).
pub fn sparkle_source() -> render::sparkle::SparkleSource {
    render::sparkle::SparkleSource
}
