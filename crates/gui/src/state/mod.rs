pub mod messages;

pub use messages::{AppMessage, LogEntry, LogLevel};

use cropatlas_colormap::Ramp;
use cropatlas_core::{LatLonBounds, Selection};

/// Geographic extent the published rasters are anchored to.
///
/// The archive covers Africa; every overlay shares this box.
pub const OVERLAY_BOUNDS: LatLonBounds = LatLonBounds::new(-20.0, -35.0, 55.0, 38.0);

/// The three map panels of the comparator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PanelKind {
    /// Historical baseline suitability.
    Baseline,
    /// Projected suitability for the selected scenario.
    Scenario,
    /// Scenario minus baseline.
    Difference,
}

impl PanelKind {
    pub const ALL: &[PanelKind] = &[Self::Baseline, Self::Scenario, Self::Difference];

    /// Panel title shown in the dock tab.
    pub fn title(&self) -> &'static str {
        match self {
            Self::Baseline => "Baseline 1991-2020",
            Self::Scenario => "Scenario",
            Self::Difference => "Change",
        }
    }

    /// Color ramp this panel renders with.
    pub fn ramp(&self) -> Ramp {
        match self {
            Self::Baseline | Self::Scenario => Ramp::Suitability,
            Self::Difference => Ramp::Difference,
        }
    }

    /// URL of this panel's raster for the given selection.
    pub fn url(&self, selection: &Selection, base: &str) -> String {
        match self {
            Self::Baseline => selection.baseline_url(base),
            Self::Scenario => selection.suitability_url(base),
            Self::Difference => selection.difference_url(base),
        }
    }
}

impl std::fmt::Display for PanelKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.title())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn panel_ramps() {
        assert_eq!(PanelKind::Baseline.ramp(), Ramp::Suitability);
        assert_eq!(PanelKind::Scenario.ramp(), Ramp::Suitability);
        assert_eq!(PanelKind::Difference.ramp(), Ramp::Difference);
    }

    #[test]
    fn panel_urls_differ() {
        let sel = Selection::default();
        let urls: Vec<String> = PanelKind::ALL
            .iter()
            .map(|k| k.url(&sel, "http://x"))
            .collect();
        assert_eq!(urls.len(), 3);
        assert_ne!(urls[0], urls[1]);
        assert_ne!(urls[1], urls[2]);
    }
}
