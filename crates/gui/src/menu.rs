//! Menu bar: File and Help.

use egui::Ui;

/// Actions triggered by menu items.
pub enum MenuAction {
    /// Open a local GeoTIFF into the baseline panel.
    OpenGeoTiff,
    Exit,
    About,
    None,
}

/// Show the main menu bar. Returns the action triggered (if any).
pub fn show_menu_bar(ui: &mut Ui) -> MenuAction {
    let mut action = MenuAction::None;

    egui::menu::bar(ui, |ui| {
        ui.menu_button("File", |ui| {
            if ui.button("Open GeoTIFF...").clicked() {
                action = MenuAction::OpenGeoTiff;
                ui.close_menu();
            }
            ui.separator();
            if ui.button("Exit").clicked() {
                action = MenuAction::Exit;
                ui.close_menu();
            }
        });

        ui.menu_button("Help", |ui| {
            if ui.button("About").clicked() {
                action = MenuAction::About;
                ui.close_menu();
            }
        });
    });

    action
}
