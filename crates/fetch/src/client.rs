//! HTTP client with existence probe and retry logic.

use std::time::Duration;

use reqwest::{Client, StatusCode};
use tracing::debug;

use cropatlas_core::io::decode_png;
use cropatlas_core::{GrayRaster, LatLonBounds};

use crate::error::{FetchError, Result};

/// Client configuration.
#[derive(Debug, Clone)]
pub struct ClientOptions {
    /// Per-request timeout.
    pub timeout: Duration,
    /// Retries on timeout/connect failures, with exponential backoff.
    pub max_retries: u32,
}

impl Default for ClientOptions {
    fn default() -> Self {
        Self {
            timeout: Duration::from_secs(30),
            max_retries: 2,
        }
    }
}

/// HTTP client for fetching published rasters.
pub struct RasterClient {
    client: Client,
    max_retries: u32,
}

impl RasterClient {
    pub fn new(options: ClientOptions) -> Result<Self> {
        let client = Client::builder().timeout(options.timeout).build()?;
        Ok(Self {
            client,
            max_retries: options.max_retries,
        })
    }

    /// HEAD probe: does the archive publish this raster?
    ///
    /// 404 means "not published" and is not an error; any other
    /// non-success status is.
    pub async fn exists(&self, url: &str) -> Result<bool> {
        let resp = self.execute_with_retry(self.client.head(url)).await?;
        let status = resp.status();

        if status == StatusCode::NOT_FOUND {
            return Ok(false);
        }
        if !status.is_success() {
            return Err(FetchError::Status {
                status,
                url: url.to_string(),
            });
        }
        Ok(true)
    }

    /// Download a raster body.
    pub async fn fetch_bytes(&self, url: &str) -> Result<Vec<u8>> {
        let resp = self.execute_with_retry(self.client.get(url)).await?;
        let status = resp.status();

        if !status.is_success() {
            return Err(FetchError::Status {
                status,
                url: url.to_string(),
            });
        }

        let bytes = resp.bytes().await?;
        debug!(url, len = bytes.len(), "downloaded raster");
        Ok(bytes.to_vec())
    }

    /// Probe, download and decode a published PNG into a raster anchored
    /// at `bounds`.
    pub async fn fetch_gray(&self, url: &str, bounds: LatLonBounds) -> Result<GrayRaster> {
        if !self.exists(url).await? {
            return Err(FetchError::Missing {
                url: url.to_string(),
            });
        }

        let bytes = self.fetch_bytes(url).await?;
        let raster = decode_png(&bytes).map_err(|source| FetchError::Decode {
            url: url.to_string(),
            source,
        })?;

        Ok(raster.with_bounds(bounds))
    }

    /// Execute a request, retrying timeout/connect failures with
    /// exponential backoff. Other transport errors fail immediately.
    async fn execute_with_retry(
        &self,
        request: reqwest::RequestBuilder,
    ) -> std::result::Result<reqwest::Response, reqwest::Error> {
        let mut last_err = None;

        for attempt in 0..=self.max_retries {
            if attempt > 0 {
                let backoff_ms = 100u64 * 2u64.pow(attempt - 1);
                debug!(attempt, backoff_ms, "retrying request");
                #[cfg(not(target_arch = "wasm32"))]
                std::thread::sleep(Duration::from_millis(backoff_ms));
            }

            match request.try_clone() {
                Some(cloned) => match cloned.send().await {
                    Ok(resp) => return Ok(resp),
                    Err(e) if e.is_timeout() || e.is_connect() => {
                        last_err = Some(e);
                        continue;
                    }
                    Err(e) => return Err(e),
                },
                // Non-cloneable request: single attempt.
                None => return request.send().await,
            }
        }

        Err(last_err.expect("at least one attempt was made"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_options() {
        let opts = ClientOptions::default();
        assert_eq!(opts.timeout, Duration::from_secs(30));
        assert_eq!(opts.max_retries, 2);
    }

    #[test]
    fn error_messages_name_the_url() {
        let err = FetchError::Missing {
            url: "http://x/a.png".into(),
        };
        assert_eq!(err.to_string(), "no raster published at http://x/a.png");

        let err = FetchError::Status {
            status: StatusCode::INTERNAL_SERVER_ERROR,
            url: "http://x/a.png".into(),
        };
        assert!(err.to_string().contains("500"));
        assert!(err.to_string().contains("http://x/a.png"));
    }
}
