//! Dock layout: three map panels across the top, scenario controls on the
//! right, console along the bottom.

use egui_dock::{DockState, NodeIndex};

use crate::state::PanelKind;

/// Panel identifiers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PanelId {
    Map(PanelKind),
    Controls,
    Console,
}

impl std::fmt::Display for PanelId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PanelId::Map(kind) => write!(f, "{}", kind.title()),
            PanelId::Controls => write!(f, "Scenario"),
            PanelId::Console => write!(f, "Console"),
        }
    }
}

/// Create the initial dock layout.
///
/// ```text
/// ┌──────────┬──────────┬──────────┬───────────┐
/// │ Baseline │ Scenario │  Change  │ Scenario   │
/// │   map    │   map    │   map    │ controls   │
/// ├──────────┴──────────┴──────────┴───────────┤
/// │                  Console                    │
/// └─────────────────────────────────────────────┘
/// ```
pub fn create_dock_state() -> DockState<PanelId> {
    let mut dock_state = DockState::new(vec![PanelId::Map(PanelKind::Baseline)]);

    // Maps above, console below, 78% / 22%.
    let [top, _console] = dock_state.main_surface_mut().split_below(
        NodeIndex::root(),
        0.78,
        vec![PanelId::Console],
    );

    // Controls column on the right.
    let [maps, _controls] =
        dock_state
            .main_surface_mut()
            .split_right(top, 0.8, vec![PanelId::Controls]);

    // Three maps of equal width.
    let [_baseline, rest] = dock_state.main_surface_mut().split_right(
        maps,
        1.0 / 3.0,
        vec![PanelId::Map(PanelKind::Scenario)],
    );
    let [_scenario, _difference] = dock_state.main_surface_mut().split_right(
        rest,
        0.5,
        vec![PanelId::Map(PanelKind::Difference)],
    );

    dock_state
}
