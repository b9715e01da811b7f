//! Error types shared by the core crate.

use thiserror::Error;

/// Errors produced while building or decoding rasters.
#[derive(Error, Debug)]
pub enum Error {
    #[error("invalid raster dimensions: {rows} x {cols} does not match {len} values")]
    InvalidDimensions {
        rows: usize,
        cols: usize,
        len: usize,
    },

    #[error("index ({row}, {col}) out of bounds for {rows} x {cols} raster")]
    OutOfBounds {
        row: usize,
        col: usize,
        rows: usize,
        cols: usize,
    },

    #[error("PNG decode failed: {0}")]
    Png(#[from] image::ImageError),

    #[error("TIFF decode failed: {0}")]
    Tiff(#[from] tiff::TiffError),

    #[error("unsupported sample format: {0}")]
    UnsupportedSampleFormat(&'static str),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

/// Result alias for core operations.
pub type Result<T> = std::result::Result<T, Error>;
