//! Error types for raster fetching.

use thiserror::Error;

/// Errors produced while probing or downloading rasters.
#[derive(Error, Debug)]
pub enum FetchError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("no raster published at {url}")]
    Missing { url: String },

    #[error("HTTP {status} fetching {url}")]
    Status {
        status: reqwest::StatusCode,
        url: String,
    },

    #[error("decode failed for {url}: {source}")]
    Decode {
        url: String,
        source: cropatlas_core::Error,
    },

    #[error("runtime error: {0}")]
    Runtime(String),
}

/// Result alias for fetch operations.
pub type Result<T> = std::result::Result<T, FetchError>;
