use eframe::egui::{self, Color32, RichText, Ui};

use crate::state::ChartView;

// ---------------------------------------------------------------------------
// Top bar
// ---------------------------------------------------------------------------

/// Render the title row and the run caption above the chart.
pub fn top_bar(ui: &mut Ui, view: &ChartView) {
    ui.horizontal(|ui: &mut Ui| {
        ui.label(RichText::new(view.position_label()).strong());
        ui.separator();
        ui.heading(&view.chart.title);
    });
    ui.horizontal(|ui: &mut Ui| {
        ui.label(&view.caption);
        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui: &mut Ui| {
            ui.label(RichText::new(view.continue_hint()).color(Color32::GRAY));
        });
    });
}
