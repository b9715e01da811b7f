//! A single map panel: OpenStreetMap basemap, raster overlay, legend.

use egui::{Color32, Rect, TextureHandle, Ui};
use walkers::sources::OpenStreetMap;
use walkers::{HttpTiles, Map, MapMemory, Plugin, Position, Projector};

use cropatlas_colormap::{evaluate, Ramp};
use cropatlas_core::LatLonBounds;

use crate::controller::OverlayController;
use crate::state::{PanelKind, OVERLAY_BOUNDS};

/// Initial zoom: whole-continent view.
const HOME_ZOOM: f64 = 4.0;

/// An attached overlay: colorized texture plus its geographic anchor.
pub struct OverlayTexture {
    pub texture: TextureHandle,
    pub bounds: LatLonBounds,
}

/// Basemap state that survives between frames.
pub struct BasemapState {
    tiles: HttpTiles,
    memory: MapMemory,
    center: Position,
}

impl BasemapState {
    fn new(ctx: &egui::Context, lon: f64, lat: f64) -> Self {
        let mut memory = MapMemory::default();
        let _ = memory.set_zoom(HOME_ZOOM);
        Self {
            tiles: HttpTiles::new(OpenStreetMap, ctx.clone()),
            memory,
            center: Position::from_lon_lat(lon, lat),
        }
    }
}

/// One of the three comparator panels, owning its overlay and view.
pub struct MapPanel {
    pub kind: PanelKind,
    pub controller: OverlayController<OverlayTexture>,
    /// Lazy; tile fetching needs an egui context.
    basemap: Option<BasemapState>,
    pub opacity: f32,
    pub loading: bool,
}

impl MapPanel {
    pub fn new(kind: PanelKind) -> Self {
        Self {
            kind,
            controller: OverlayController::default(),
            basemap: None,
            opacity: 1.0,
            loading: false,
        }
    }

    /// Re-center the view on the given box and drop any user pan, so a
    /// freshly attached overlay is in frame.
    pub fn fit_to(&mut self, bounds: LatLonBounds) {
        if let Some(basemap) = &mut self.basemap {
            let (lon, lat) = bounds.center();
            basemap.center = Position::from_lon_lat(lon, lat);
            basemap.memory = MapMemory::default();
            let _ = basemap.memory.set_zoom(HOME_ZOOM);
        }
    }
}

/// Plugin that draws the overlay texture across its projected bounds.
struct RasterOverlay<'a> {
    texture: &'a TextureHandle,
    bounds: LatLonBounds,
    opacity: f32,
}

impl<'a> Plugin for RasterOverlay<'a> {
    fn run(
        self: Box<Self>,
        ui: &mut Ui,
        _response: &egui::Response,
        projector: &Projector,
    ) {
        let nw = projector.project(Position::from_lon_lat(self.bounds.west, self.bounds.north));
        let se = projector.project(Position::from_lon_lat(self.bounds.east, self.bounds.south));

        let screen_rect = Rect::from_min_max(egui::pos2(nw.x, nw.y), egui::pos2(se.x, se.y));

        let tint = Color32::from_white_alpha((self.opacity * 255.0) as u8);
        ui.painter().image(
            self.texture.id(),
            screen_rect,
            Rect::from_min_max(egui::pos2(0.0, 0.0), egui::pos2(1.0, 1.0)),
            tint,
        );
    }
}

/// Render one map panel.
pub fn show_map_panel(ui: &mut Ui, panel: &mut MapPanel, ctx: &egui::Context) {
    ui.horizontal(|ui| {
        ui.strong(panel.kind.title());
        if panel.loading {
            ui.spinner();
        }
        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            ui.add(
                egui::Slider::new(&mut panel.opacity, 0.0..=1.0)
                    .show_value(false)
                    .custom_formatter(|v, _| format!("{:.0}%", v * 100.0)),
            );
            ui.label("Opacity");
        });
    });

    let basemap = panel.basemap.get_or_insert_with(|| {
        let (lon, lat) = OVERLAY_BOUNDS.center();
        BasemapState::new(ctx, lon, lat)
    });

    let map_rect = ui.available_rect_before_wrap();

    let mut map = Map::new(Some(&mut basemap.tiles), &mut basemap.memory, basemap.center);
    if let Some(overlay) = panel.controller.overlay() {
        map = map.with_plugin(RasterOverlay {
            texture: &overlay.texture,
            bounds: overlay.bounds,
            opacity: panel.opacity,
        });
    }
    ui.add(map);

    if panel.controller.has_overlay() {
        draw_legend(ui, &map_rect, panel.kind.ramp());
    }
}

/// Color-bar legend in the bottom-right corner of the map.
fn draw_legend(ui: &Ui, map_rect: &Rect, ramp: Ramp) {
    let bar_w = 160.0_f32;
    let bar_h = 12.0_f32;
    let pad = 8.0_f32;

    let bar_min = egui::pos2(
        map_rect.right() - bar_w - pad - 8.0,
        map_rect.bottom() - bar_h - 30.0,
    );
    let bar_rect = Rect::from_min_size(bar_min, egui::vec2(bar_w, bar_h));
    let bg_rect = bar_rect.expand2(egui::vec2(pad, pad + 14.0));

    let painter = ui.painter();
    painter.rect_filled(bg_rect, 4.0, Color32::from_black_alpha(150));

    painter.text(
        egui::pos2(bar_rect.left(), bg_rect.top() + 2.0),
        egui::Align2::LEFT_TOP,
        ramp.name(),
        egui::FontId::proportional(11.0),
        Color32::WHITE,
    );

    // Gradient bar sampled across the ramp's domain.
    let (min, max) = ramp.domain();
    let steps = 64;
    let step_w = bar_rect.width() / steps as f32;
    for i in 0..steps {
        let v = min + (max - min) * i as f64 / (steps - 1) as f64;
        let c = evaluate(ramp, v);
        let x = bar_rect.left() + i as f32 * step_w;
        painter.rect_filled(
            Rect::from_min_size(
                egui::pos2(x, bar_rect.top()),
                egui::vec2(step_w + 1.0, bar_rect.height()),
            ),
            0.0,
            Color32::from_rgb(c.r, c.g, c.b),
        );
    }

    // Tick labels at the endpoints and midpoint.
    for (t, v) in [(0.0_f32, min), (0.5, (min + max) / 2.0), (1.0, max)] {
        painter.text(
            egui::pos2(
                bar_rect.left() + bar_rect.width() * t,
                bar_rect.bottom() + 2.0,
            ),
            egui::Align2::CENTER_TOP,
            format!("{:.0}", v),
            egui::FontId::proportional(10.0),
            Color32::LIGHT_GRAY,
        );
    }
}
