//! Error types for the jewelry try-on library.

use thiserror::Error;

/// Main error type for the library
#[derive(Error, Debug)]
pub enum Error {
    /// Image decoding or encoding failed
    #[error("Image error: {0}")]
    Image(#[from] image::ImageError),

    /// File I/O operation failed
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Invalid input parameters provided
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Jewelry asset could not be loaded or is unusable
    #[error("Asset error: {0}")]
    Asset(String),

    /// Landmark tracker failure
    #[error("Tracking error: {0}")]
    Tracking(String),

    /// Smoother construction or processing error
    #[error("Smoothing error: {0}")]
    Smoothing(String),

    /// Snapshot export failed
    #[error("Export error: {0}")]
    Export(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),
}

/// Convenience type alias for Results with our Error type
pub type Result<T> = std::result::Result<T, Error>;
