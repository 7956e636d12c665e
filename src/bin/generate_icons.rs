//! Generate the favicon/PWA icon set by rasterizing `public/favicon.svg`.
//!
//! Parameterless; paths are fixed relative to the working directory. Exits
//! non-zero without writing anything if the SVG source is missing.

use std::path::Path;

use anyhow::Context;
use iconsmith::{generate, report, svg_source, DEFAULT_SIZES};

fn run() -> anyhow::Result<()> {
    println!("Generating favicon and icons from SVG...");

    let source = svg_source("public/favicon.svg");
    let written = generate(&source, Path::new("public"), &DEFAULT_SIZES)
        .context("icon generation failed")?;

    report::print_summary(&written);
    Ok(())
}

fn main() {
    env_logger::init();
    if let Err(e) = run() {
        eprintln!("Error: {e:#}");
        std::process::exit(1);
    }
}
