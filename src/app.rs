use anyhow::Result;
use eframe::egui;

use crate::config::WINDOW_SIZE;
use crate::state::ChartView;
use crate::ui::{panels, plot};

// ---------------------------------------------------------------------------
// eframe App implementation
// ---------------------------------------------------------------------------

pub struct ChartApp {
    pub view: ChartView,
}

impl eframe::App for ChartApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // ---- Top panel: position, title, caption ----
        egui::TopBottomPanel::top("top_bar").show(ctx, |ui| {
            panels::top_bar(ui, &self.view);
        });

        // ---- Central panel: plot ----
        egui::CentralPanel::default().show(ctx, |ui| {
            plot::chart_plot(ui, &self.view.chart);
        });
    }
}

/// Open a native window for one chart and block until the user closes it.
pub fn show_chart(view: ChartView) -> Result<()> {
    let title = view.chart.title.clone();
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title(title.clone())
            .with_inner_size(WINDOW_SIZE)
            .with_min_inner_size([400.0, 300.0]),
        run_and_return: true,
        ..Default::default()
    };

    eframe::run_native(&title, options, Box::new(move |_cc| Ok(Box::new(ChartApp { view }))))
        .map_err(|e| anyhow::anyhow!("chart window '{title}' failed: {e}"))
}
