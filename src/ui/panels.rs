use eframe::egui::{self, Ui};

use crate::state::ViewerState;

// ---------------------------------------------------------------------------
// Top bar
// ---------------------------------------------------------------------------

/// Render the top bar: run summary and the histogram window toggle.
pub fn top_bar(ui: &mut Ui, state: &mut ViewerState) {
    egui::menu::bar(ui, |ui: &mut Ui| {
        ui.label(state.status.as_str());

        ui.separator();

        if ui
            .selectable_label(state.show_histogram, "Histogram window")
            .clicked()
        {
            state.toggle_histogram();
        }
    });
}
