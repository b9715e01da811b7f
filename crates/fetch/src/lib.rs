//! # Cropatlas Fetch
//!
//! HTTP access to the published raster archive: an existence probe
//! (HEAD), a download with retry/backoff, and PNG decode into a
//! [`GrayRaster`](cropatlas_core::GrayRaster).
//!
//! The async [`RasterClient`] is the primary API; [`blocking`] wraps it in
//! a current-thread Tokio runtime for callers running on plain threads
//! (the GUI loader, the CLI).

mod client;
mod error;

#[cfg(not(target_arch = "wasm32"))]
pub mod blocking;

pub use client::{ClientOptions, RasterClient};
pub use error::{FetchError, Result};
