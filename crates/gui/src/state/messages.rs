//! Application messages for loader-to-UI communication.

use cropatlas_core::GrayRaster;

use super::PanelKind;

/// Messages sent from background loader threads to the main UI loop.
///
/// Overlay messages carry the generation captured when the load started;
/// the UI applies them only if that generation is still current for the
/// panel.
pub enum AppMessage {
    /// A raster finished downloading and decoding.
    OverlayLoaded {
        panel: PanelKind,
        generation: u64,
        raster: GrayRaster,
    },
    /// A load step failed (probe, download or decode).
    LoadFailed {
        panel: PanelKind,
        generation: u64,
        context: String,
        message: String,
    },
    /// A log message for the console.
    Log(LogEntry),
}

/// Log level for console messages.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogLevel {
    Info,
    Warning,
    Error,
    Success,
}

/// A log entry for the console panel.
#[derive(Debug, Clone)]
pub struct LogEntry {
    pub level: LogLevel,
    pub message: String,
    pub timestamp: std::time::SystemTime,
}

impl LogEntry {
    fn new(level: LogLevel, msg: impl Into<String>) -> Self {
        Self {
            level,
            message: msg.into(),
            timestamp: std::time::SystemTime::now(),
        }
    }

    pub fn info(msg: impl Into<String>) -> Self {
        Self::new(LogLevel::Info, msg)
    }

    pub fn warning(msg: impl Into<String>) -> Self {
        Self::new(LogLevel::Warning, msg)
    }

    pub fn error(msg: impl Into<String>) -> Self {
        Self::new(LogLevel::Error, msg)
    }

    pub fn success(msg: impl Into<String>) -> Self {
        Self::new(LogLevel::Success, msg)
    }
}
