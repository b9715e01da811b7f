//! Background raster loading.
//!
//! Each load runs on its own `std::thread` and reports back over the
//! crossbeam channel. The thread re-checks the panel's generation counter
//! between the probe, download and decode steps; once superseded it
//! abandons silently: no message, no UI update.

use std::sync::atomic::AtomicU64;
use std::sync::Arc;

use crossbeam_channel::Sender;
use tracing::{debug, error};

use cropatlas_core::io::decode_png;
use cropatlas_core::LatLonBounds;
use cropatlas_fetch::blocking::RasterClientBlocking;
use cropatlas_fetch::ClientOptions;

use crate::controller::superseded;
use crate::state::{AppMessage, LogEntry, PanelKind};

/// Fetch one panel's raster in a background thread.
pub fn dispatch_fetch(
    panel: PanelKind,
    url: String,
    bounds: LatLonBounds,
    generation: u64,
    watch: Arc<AtomicU64>,
    tx: Sender<AppMessage>,
) {
    std::thread::spawn(move || {
        let _ = tx.send(AppMessage::Log(LogEntry::info(format!(
            "{}: loading {}",
            panel, url
        ))));

        let client = match RasterClientBlocking::new(ClientOptions::default()) {
            Ok(c) => c,
            Err(e) => {
                send_failure(&tx, panel, generation, "HTTP client", e);
                return;
            }
        };

        // Existence probe.
        match client.exists(&url) {
            Ok(true) => {}
            Ok(false) => {
                send_failure(
                    &tx,
                    panel,
                    generation,
                    "Missing raster",
                    format!("no raster published at {}", url),
                );
                return;
            }
            Err(e) => {
                send_failure(&tx, panel, generation, "Existence check", e);
                return;
            }
        }

        if superseded(&watch, generation) {
            debug!(%panel, generation, "superseded after probe, abandoning");
            return;
        }

        // Download.
        let bytes = match client.fetch_bytes(&url) {
            Ok(b) => b,
            Err(e) => {
                send_failure(&tx, panel, generation, "Download", e);
                return;
            }
        };

        if superseded(&watch, generation) {
            debug!(%panel, generation, "superseded after download, abandoning");
            return;
        }

        // Decode.
        let raster = match decode_png(&bytes) {
            Ok(r) => r.with_bounds(bounds),
            Err(e) => {
                error!(%panel, url, error = %e, "raster decode failed");
                send_failure(&tx, panel, generation, "Decode", e);
                return;
            }
        };

        if superseded(&watch, generation) {
            debug!(%panel, generation, "superseded after decode, abandoning");
            return;
        }

        let _ = tx.send(AppMessage::OverlayLoaded {
            panel,
            generation,
            raster,
        });
    });
}

fn send_failure(
    tx: &Sender<AppMessage>,
    panel: PanelKind,
    generation: u64,
    context: &str,
    err: impl std::fmt::Display,
) {
    let _ = tx.send(AppMessage::LoadFailed {
        panel,
        generation,
        context: context.to_string(),
        message: err.to_string(),
    });
}
