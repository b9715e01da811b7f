//! Main application: AtlasApp implements eframe::App.

use crossbeam_channel::{Receiver, Sender};
use egui_dock::{DockArea, DockState, Style, TabViewer};
use tracing::debug;

use cropatlas_colormap::grayscale_to_rgba;
use cropatlas_core::Selection;

use crate::dock::{create_dock_state, PanelId};
use crate::io::open_geotiff;
use crate::loader::dispatch_fetch;
use crate::menu::{show_menu_bar, MenuAction};
use crate::panels::console::show_console;
use crate::panels::controls::{show_controls, ControlsAction};
use crate::panels::map_panel::{show_map_panel, MapPanel, OverlayTexture};
use crate::state::{AppMessage, LogEntry, PanelKind, OVERLAY_BOUNDS};

/// The main application state.
pub struct AtlasApp {
    /// Dock state for panel layout.
    dock_state: DockState<PanelId>,

    /// Message channels for loader thread communication.
    tx: Sender<AppMessage>,
    rx: Receiver<AppMessage>,

    /// Root URL of the raster archive.
    data_url: String,

    /// Current scenario selection.
    selection: Selection,

    /// The three map panels (baseline, scenario, difference).
    panels: Vec<MapPanel>,

    /// Console log entries.
    logs: Vec<LogEntry>,

    /// Pending error alert (context, message).
    alert: Option<(String, String)>,

    /// Show about dialog.
    show_about: bool,
}

impl AtlasApp {
    pub fn new(cc: &eframe::CreationContext<'_>, data_url: String) -> Self {
        let mut visuals = egui::Visuals::dark();
        visuals.window_shadow = egui::epaint::Shadow::NONE;
        cc.egui_ctx.set_visuals(visuals);

        let (tx, rx) = crossbeam_channel::unbounded();

        let mut app = Self {
            dock_state: create_dock_state(),
            tx,
            rx,
            data_url,
            selection: Selection::default(),
            panels: PanelKind::ALL.iter().map(|&k| MapPanel::new(k)).collect(),
            logs: Vec::new(),
            alert: None,
            show_about: false,
        };

        app.logs.push(LogEntry::info("Cropatlas viewer started"));
        app.logs
            .push(LogEntry::info(format!("Data root: {}", app.data_url)));

        app
    }

    fn panel_mut(&mut self, kind: PanelKind) -> &mut MapPanel {
        self.panels
            .iter_mut()
            .find(|p| p.kind == kind)
            .expect("panel exists for every kind")
    }

    /// Process pending messages from loader threads.
    ///
    /// Every overlay message carries the generation captured when its load
    /// started; anything superseded is dropped here without touching the
    /// UI: no error, no overlay change.
    fn process_messages(&mut self, ctx: &egui::Context) {
        while let Ok(msg) = self.rx.try_recv() {
            match msg {
                AppMessage::OverlayLoaded {
                    panel: kind,
                    generation,
                    raster,
                } => {
                    let panel = self.panel_mut(kind);
                    if !panel.controller.is_current(generation) {
                        debug!(%kind, generation, "discarding stale overlay");
                        continue;
                    }
                    panel.loading = false;

                    let rgba = grayscale_to_rgba(&raster, kind.ramp());
                    let image = egui::ColorImage::from_rgba_unmultiplied(
                        [raster.cols(), raster.rows()],
                        &rgba,
                    );
                    let texture = ctx.load_texture(
                        format!("overlay-{}", kind.title()),
                        image,
                        egui::TextureOptions::NEAREST,
                    );

                    let bounds = raster.bounds();
                    let applied = panel
                        .controller
                        .try_apply(generation, OverlayTexture { texture, bounds });
                    if applied {
                        panel.fit_to(bounds);
                    }
                    if applied {
                        self.logs.push(LogEntry::success(format!(
                            "{}: overlay attached ({}x{})",
                            kind,
                            raster.cols(),
                            raster.rows(),
                        )));
                    }
                }

                AppMessage::LoadFailed {
                    panel: kind,
                    generation,
                    context,
                    message,
                } => {
                    let panel = self.panel_mut(kind);
                    if !panel.controller.is_current(generation) {
                        debug!(%kind, generation, "discarding stale failure");
                        continue;
                    }
                    panel.loading = false;
                    self.logs
                        .push(LogEntry::error(format!("{}: {}: {}", kind, context, message)));
                    // Previous overlay stays in place; just tell the user.
                    self.alert = Some((context, message));
                }

                AppMessage::Log(entry) => {
                    self.logs.push(entry);
                }
            }
        }
    }

    /// Load all three panels for the current selection.
    fn load_maps(&mut self) {
        self.logs.push(LogEntry::info(format!(
            "Loading scenario: {}",
            self.selection.describe()
        )));

        let selection = self.selection;
        let data_url = self.data_url.clone();
        for panel in &mut self.panels {
            let url = panel.kind.url(&selection, &data_url);
            let generation = panel.controller.begin();
            panel.loading = true;
            dispatch_fetch(
                panel.kind,
                url,
                OVERLAY_BOUNDS,
                generation,
                panel.controller.watch(),
                self.tx.clone(),
            );
        }
    }

    /// Drop every overlay; in-flight loads are superseded by the bump.
    fn clean_maps(&mut self) {
        for panel in &mut self.panels {
            panel.controller.clear();
            panel.loading = false;
        }
        self.logs.push(LogEntry::info("Overlays cleared"));
    }
}

impl eframe::App for AtlasApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.process_messages(ctx);

        if self.panels.iter().any(|p| p.loading) {
            ctx.request_repaint();
        }

        egui::TopBottomPanel::top("menu_bar").show(ctx, |ui| {
            match show_menu_bar(ui) {
                MenuAction::OpenGeoTiff => {
                    let tx = self.tx.clone();
                    let generation = self.panel_mut(PanelKind::Baseline).controller.begin();
                    open_geotiff(generation, tx);
                }
                MenuAction::Exit => {
                    ctx.send_viewport_cmd(egui::ViewportCommand::Close);
                }
                MenuAction::About => {
                    self.show_about = true;
                }
                MenuAction::None => {}
            }
        });

        if self.show_about {
            egui::Window::new("About Cropatlas")
                .collapsible(false)
                .resizable(false)
                .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
                .show(ctx, |ui| {
                    ui.heading("Cropatlas");
                    ui.label("Crop suitability under climate scenarios");
                    ui.label(format!("Version {}", env!("CARGO_PKG_VERSION")));
                    ui.separator();
                    if ui.button("Close").clicked() {
                        self.show_about = false;
                    }
                });
        }

        // Blocking error alert; the maps stay interactive underneath and a
        // later selection change retries implicitly.
        if let Some((context, message)) = self.alert.clone() {
            egui::Window::new("Load failed")
                .collapsible(false)
                .resizable(false)
                .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
                .show(ctx, |ui| {
                    ui.strong(context);
                    ui.label(message);
                    ui.separator();
                    if ui.button("OK").clicked() {
                        self.alert = None;
                    }
                });
        }

        let mut tab_viewer = AtlasTabViewer {
            panels: &mut self.panels,
            selection: &mut self.selection,
            logs: &self.logs,
            data_url: &self.data_url,
            controls_action: ControlsAction::None,
            ctx,
        };

        DockArea::new(&mut self.dock_state)
            .style(Style::from_egui(ctx.style().as_ref()))
            .show(ctx, &mut tab_viewer);

        let action = tab_viewer.controls_action;
        drop(tab_viewer);

        match action {
            ControlsAction::Load => self.load_maps(),
            ControlsAction::Clean => self.clean_maps(),
            ControlsAction::None => {}
        }
    }
}

/// TabViewer implementation for egui_dock.
struct AtlasTabViewer<'a> {
    panels: &'a mut [MapPanel],
    selection: &'a mut Selection,
    logs: &'a [LogEntry],
    data_url: &'a str,
    controls_action: ControlsAction,
    ctx: &'a egui::Context,
}

impl<'a> TabViewer for AtlasTabViewer<'a> {
    type Tab = PanelId;

    fn title(&mut self, tab: &mut Self::Tab) -> egui::WidgetText {
        tab.to_string().into()
    }

    fn ui(&mut self, ui: &mut egui::Ui, tab: &mut Self::Tab) {
        match tab {
            PanelId::Map(kind) => {
                if let Some(panel) = self.panels.iter_mut().find(|p| p.kind == *kind) {
                    show_map_panel(ui, panel, self.ctx);
                }
            }
            PanelId::Controls => {
                let action = show_controls(ui, self.selection, self.data_url);
                if action != ControlsAction::None {
                    self.controls_action = action;
                }
            }
            PanelId::Console => {
                show_console(ui, self.logs);
            }
        }
    }

    fn closeable(&mut self, _tab: &mut Self::Tab) -> bool {
        false
    }
}
