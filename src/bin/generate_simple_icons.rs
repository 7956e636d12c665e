//! Generate the favicon/PWA icon set by drawing the sparkle mark.
//!
//! Needs no input file: the base image is drawn procedurally, then resampled
//! into the standard output set under `public/`.

use std::path::Path;

use anyhow::Context;
use iconsmith::{generate, report, sparkle_source, DEFAULT_SIZES};

fn run() -> anyhow::Result<()> {
    println!("Generating favicon and icons...");

    let source = sparkle_source();
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
