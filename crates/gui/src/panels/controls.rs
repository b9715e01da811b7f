//! Scenario selector panel: form controls plus the load/clean triggers.

use egui::Ui;

use cropatlas_core::{ClimateModel, Crop, Period, Selection, Solution, Ssp};

/// Actions returned from the controls panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ControlsAction {
    /// Load all three panels for the current selection.
    Load,
    /// Remove every overlay.
    Clean,
    None,
}

/// Show the scenario selectors. Mutates `selection` in place and returns
/// the triggered action, if any.
pub fn show_controls(ui: &mut Ui, selection: &mut Selection, data_url: &str) -> ControlsAction {
    let mut action = ControlsAction::None;

    ui.heading("Scenario");
    ui.separator();

    egui::Grid::new("scenario_grid")
        .num_columns(2)
        .spacing([8.0, 6.0])
        .show(ui, |ui| {
            ui.label("Crop");
            egui::ComboBox::from_id_salt("crop")
                .selected_text(selection.crop.label())
                .show_ui(ui, |ui| {
                    for &crop in Crop::ALL {
                        ui.selectable_value(&mut selection.crop, crop, crop.label());
                    }
                });
            ui.end_row();

            ui.label("Period");
            egui::ComboBox::from_id_salt("period")
                .selected_text(selection.period.label())
                .show_ui(ui, |ui| {
                    for &period in Period::ALL {
                        ui.selectable_value(&mut selection.period, period, period.label());
                    }
                });
            ui.end_row();

            ui.label("Climate model");
            egui::ComboBox::from_id_salt("model")
                .selected_text(selection.model.label())
                .show_ui(ui, |ui| {
                    for &model in ClimateModel::ALL {
                        ui.selectable_value(&mut selection.model, model, model.label());
                    }
                });
            ui.end_row();
        });

    ui.add_space(4.0);
    ui.label("Emissions scenario");
    for &ssp in Ssp::ALL {
        ui.radio_value(&mut selection.ssp, ssp, ssp.label());
    }

    ui.add_space(4.0);
    ui.label("Water supply");
    ui.horizontal(|ui| {
        for &solution in Solution::ALL {
            ui.radio_value(&mut selection.solution, solution, solution.label());
        }
    });

    ui.add_space(8.0);
    ui.separator();

    if ui
        .add_sized([ui.available_width(), 28.0], egui::Button::new("Load maps"))
        .clicked()
    {
        action = ControlsAction::Load;
    }
    if ui
        .add_sized([ui.available_width(), 22.0], egui::Button::new("Clean"))
        .clicked()
    {
        action = ControlsAction::Clean;
    }

    ui.add_space(8.0);
    ui.small(format!("Data root: {}", data_url));

    action
}
