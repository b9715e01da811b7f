//! Blocking (synchronous) API for native platforms.
//!
//! Wraps the async [`RasterClient`] in a current-thread Tokio runtime so
//! callers on plain `std::thread`s don't need to manage an async runtime.

use cropatlas_core::{GrayRaster, LatLonBounds};

use crate::client::{ClientOptions, RasterClient};
use crate::error::{FetchError, Result};

/// Blocking wrapper around [`RasterClient`].
pub struct RasterClientBlocking {
    rt: tokio::runtime::Runtime,
    inner: RasterClient,
}

impl RasterClientBlocking {
    pub fn new(options: ClientOptions) -> Result<Self> {
        let rt = tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()
            .map_err(|e| FetchError::Runtime(e.to_string()))?;

        let inner = RasterClient::new(options)?;
        Ok(Self { rt, inner })
    }

    /// HEAD probe (blocking).
    pub fn exists(&self, url: &str) -> Result<bool> {
        self.rt.block_on(self.inner.exists(url))
    }

    /// Download a raster body (blocking).
    pub fn fetch_bytes(&self, url: &str) -> Result<Vec<u8>> {
        self.rt.block_on(self.inner.fetch_bytes(url))
    }

    /// Probe, download and decode (blocking).
    pub fn fetch_gray(&self, url: &str, bounds: LatLonBounds) -> Result<GrayRaster> {
        self.rt.block_on(self.inner.fetch_gray(url, bounds))
    }
}

/// One-shot convenience: fetch a published PNG with default options.
pub fn fetch_gray(url: &str, bounds: LatLonBounds) -> Result<GrayRaster> {
    RasterClientBlocking::new(ClientOptions::default())?.fetch_gray(url, bounds)
}
