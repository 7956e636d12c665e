//! Multi-size derivation loop
//!
//! Takes the base image once, then walks the size table in order: resample
//! with Lanczos3, pick the container from the file extension, write, stat.
//! Any failure aborts the run; files written by earlier entries are left in
//! place.

use std::fs::{self, File};
use std::io::BufWriter;
use std::path::{Path, PathBuf};

use ico::{IconDir, IconDirEntry, IconImage, ResourceType};
use image::codecs::png::{CompressionType, FilterType as PngFilter, PngEncoder};
use image::imageops::{self, FilterType};
use image::{ExtendedColorType, ImageEncoder, RgbaImage};
use log::{debug, info};

use crate::error::{Error, Result};
use crate::report;
use crate::IconSource;

/// One row of the output table: relative path plus target dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SizeEntry {
    /// Output path, relative to the directory passed to [`generate`].
    pub path: &'static str,
    pub width: u32,
    pub height: u32,
}

impl SizeEntry {
    pub const fn new(path: &'static str, width: u32, height: u32) -> Self {
        Self {
            path,
            width,
            height,
        }
    }
}

/// Record of one output file after it hit the disk.
#[derive(Debug, Clone)]
pub struct GeneratedIcon {
    /// Table-relative name, used for reporting.
    pub name: String,
    /// Full path the file was written to.
    pub path: PathBuf,
    pub width: u32,
    pub height: u32,
    /// On-disk size, read back after the write.
    pub bytes: u64,
}

enum OutputFormat {
    Ico,
    Png,
}

impl OutputFormat {
    fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|e| e.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("ico") => Self::Ico,
            _ => Self::Png,
        }
    }
}

/// Produce the base image from `source` and derive every entry of `table`
/// under `out_dir`.
///
/// Entries are processed in table order, each exactly once. Re-running
/// overwrites prior output in place. The returned records are in table order
/// and feed the closing summary.
pub fn generate(
    source: &dyn IconSource,
    out_dir: &Path,
    table: &[SizeEntry],
) -> Result<Vec<GeneratedIcon>> {
    let base = source.produce_base_image(crate::BASE_SIZE)?;
    info!(
        "base image ready at {}x{}, deriving {} outputs",
        base.width(),
        base.height(),
        table.len()
    );

    let mut written = Vec::with_capacity(table.len());
    for entry in table {
        let icon = derive_one(&base, out_dir, entry)?;
        println!("{}", report::file_line(&icon));
        written.push(icon);
    }
    Ok(written)
}

fn derive_one(base: &RgbaImage, out_dir: &Path, entry: &SizeEntry) -> Result<GeneratedIcon> {
    let out_path = out_dir.join(entry.path);
    if let Some(parent) = out_path.parent() {
        fs::create_dir_all(parent)?;
    }

    // Entries matching the base's native resolution pass through untouched.
    let derived;
    let pixels = if (entry.width, entry.height) == base.dimensions() {
        base
    } else {
        debug!("resampling to {}x{} (Lanczos3)", entry.width, entry.height);
        derived = imageops::resize(base, entry.width, entry.height, FilterType::Lanczos3);
        &derived
    };

    match OutputFormat::from_path(&out_path) {
        OutputFormat::Ico => write_ico(pixels, &out_path)?,
        OutputFormat::Png => write_png(pixels, &out_path)?,
    }

    let bytes = fs::metadata(&out_path)?.len();
    Ok(GeneratedIcon {
        name: entry.path.to_string(),
        path: out_path,
        width: entry.width,
        height: entry.height,
        bytes,
    })
}

/// PNG with size optimization: best compression, adaptive filtering.
fn write_png(img: &RgbaImage, path: &Path) -> Result<()> {
    let file = File::create(path)?;
    let encoder = PngEncoder::new_with_quality(
        BufWriter::new(file),
        CompressionType::Best,
        PngFilter::Adaptive,
    );
    encoder
        .write_image(
            img.as_raw(),
            img.width(),
            img.height(),
            ExtendedColorType::Rgba8,
        )
        .map_err(|e| Error::Encode {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })
}

/// Single-size ICO container holding the derived image.
fn write_ico(img: &RgbaImage, path: &Path) -> Result<()> {
    let icon = IconImage::from_rgba_data(img.width(), img.height(), img.as_raw().clone());
    let entry = IconDirEntry::encode(&icon).map_err(|e| Error::Encode {
        path: path.to_path_buf(),
        reason: e.to_string(),
    })?;

    let mut dir = IconDir::new(ResourceType::Icon);
    dir.add_entry(entry);

    let file = File::create(path)?;
    dir.write(BufWriter::new(file))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extension_selects_container() {
        assert!(matches!(
            OutputFormat::from_path(Path::new("favicon.ico")),
            OutputFormat::Ico
        ));
        assert!(matches!(
            OutputFormat::from_path(Path::new("FAVICON.ICO")),
            OutputFormat::Ico
        ));
        assert!(matches!(
            OutputFormat::from_path(Path::new("icons/icon-192x192.png")),
            OutputFormat::Png
        ));
        // No extension falls back to the raster format.
        assert!(matches!(
            OutputFormat::from_path(Path::new("icon")),
            OutputFormat::Png
        ));
    }

    #[test]
    fn size_entry_is_plain_data() {
        let entry = SizeEntry::new("a/b.png", 10, 20);
        assert_eq!(entry.path, "a/b.png");
        assert_eq!((entry.width, entry.height), (10, 20));
    }
}
