//! Error types for the icon pipeline

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for pipeline operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while producing the icon set
#[derive(Error, Debug)]
pub enum Error {
    /// The vector source file does not exist
    #[error("Source image not found: {}", .0.display())]
    SourceNotFound(PathBuf),

    /// Failed to parse or rasterize the base image
    #[error("Rendering failed: {0}")]
    Render(String),

    /// Failed to encode a derived image into its output format
    #[error("Encoding failed for {}: {reason}", path.display())]
    Encode {
        /// Output file the encoder was producing
        path: PathBuf,
        /// Underlying encoder message
        reason: String,
    },

    /// Filesystem error while creating directories or writing output
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
