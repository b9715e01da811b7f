//! Local file loading with native file dialogs (rfd).

use crossbeam_channel::Sender;

use cropatlas_core::io::read_geotiff;

use crate::state::{AppMessage, LogEntry, PanelKind};

/// Open a file dialog and load a single-band GeoTIFF into the baseline
/// panel in a background thread.
///
/// `generation` is the identity captured from the baseline controller
/// before spawning, so the result obeys the same replacement rules as a
/// remote load.
pub fn open_geotiff(generation: u64, tx: Sender<AppMessage>) {
    std::thread::spawn(move || {
        let path = rfd::FileDialog::new()
            .add_filter("GeoTIFF", &["tif", "tiff"])
            .add_filter("All files", &["*"])
            .set_title("Open GeoTIFF")
            .pick_file();

        let Some(path) = path else {
            return;
        };

        let _ = tx.send(AppMessage::Log(LogEntry::info(format!(
            "Loading {}...",
            path.display()
        ))));

        match read_geotiff(&path) {
            Ok(raster) => {
                let _ = tx.send(AppMessage::Log(LogEntry::success(format!(
                    "Loaded {} ({}x{})",
                    path.file_name().unwrap_or_default().to_string_lossy(),
                    raster.cols(),
                    raster.rows(),
                ))));
                let _ = tx.send(AppMessage::OverlayLoaded {
                    panel: PanelKind::Baseline,
                    generation,
                    raster,
                });
            }
            Err(e) => {
                let _ = tx.send(AppMessage::LoadFailed {
                    panel: PanelKind::Baseline,
                    generation,
                    context: "File open".to_string(),
                    message: format!("failed to read {}: {}", path.display(), e),
                });
            }
        }
    });
}
