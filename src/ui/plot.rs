use std::ops::RangeInclusive;

use eframe::egui::Ui;
use egui_plot::{Bar, BarChart, GridMark, Legend, Line, MarkerShape, Plot, PlotPoints, Points};

use crate::analysis::{Chart, ChartData};
use crate::color::{generate_palette, SINGLE_SERIES};

const MARKER_RADIUS: f32 = 3.5;

// ---------------------------------------------------------------------------
// Chart plot (central panel)
// ---------------------------------------------------------------------------

/// Render `chart` into the central panel.
pub fn chart_plot(ui: &mut Ui, chart: &Chart) {
    let plot = Plot::new("chart_plot")
        .x_axis_label(chart.x_label)
        .y_axis_label(chart.y_label)
        .allow_boxed_zoom(true)
        .allow_drag(true)
        .allow_scroll(true)
        .allow_zoom(true);

    match &chart.data {
        ChartData::RegionTrend(series) => {
            let palette = generate_palette(series.len());
            plot.legend(Legend::default()).show(ui, |plot_ui| {
                for (s, color) in series.iter().zip(palette) {
                    let points: Vec<(f64, Option<f64>)> =
                        s.points.iter().map(|&(year, mean)| (year as f64, mean)).collect();
                    // Line and markers share the name so the legend shows one entry.
                    for segment in segments(&points) {
                        plot_ui.line(
                            Line::new(PlotPoints::from(segment.clone()))
                                .name(&s.region)
                                .color(color)
                                .width(1.5),
                        );
                        plot_ui.points(
                            Points::new(PlotPoints::from(segment))
                                .name(&s.region)
                                .color(color)
                                .shape(MarkerShape::Circle)
                                .radius(MARKER_RADIUS),
                        );
                    }
                }
            });
        }
        ChartData::PrecipitationScatter(points) => {
            plot.show(ui, |plot_ui| {
                plot_ui.points(
                    Points::new(PlotPoints::from(points.clone()))
                        .color(SINGLE_SERIES)
                        .shape(MarkerShape::Circle)
                        .radius(MARKER_RADIUS),
                );
            });
        }
        ChartData::IrrigationBars(bins) => {
            let labels: Vec<&'static str> = bins.iter().map(|b| b.label).collect();
            // Empty bins keep their slot but get no bar.
            let bars: Vec<Bar> = bins
                .iter()
                .enumerate()
                .filter_map(|(i, b)| Some(Bar::new(i as f64, b.mean?).name(b.label).width(0.8)))
                .collect();
            let slots = labels.len() as f64;
            plot.include_x(-0.5)
                .include_x(slots - 0.5)
                .include_y(0.0)
                .x_axis_formatter(move |mark: GridMark, _range: &RangeInclusive<f64>| {
                    category_label(&labels, mark.value)
                })
                .show(ui, |plot_ui| {
                    plot_ui.bar_chart(BarChart::new(bars).color(SINGLE_SERIES));
                });
        }
        ChartData::EmissionsLine(bins) => {
            let points: Vec<(f64, Option<f64>)> =
                bins.iter().map(|b| (b.midpoint(), b.mean)).collect();
            plot.show(ui, |plot_ui| {
                for segment in segments(&points) {
                    plot_ui.line(
                        Line::new(PlotPoints::from(segment.clone()))
                            .color(SINGLE_SERIES)
                            .width(1.5),
                    );
                    plot_ui.points(
                        Points::new(PlotPoints::from(segment))
                            .color(SINGLE_SERIES)
                            .shape(MarkerShape::Circle)
                            .radius(MARKER_RADIUS),
                    );
                }
            });
        }
    }
}

// -- helpers --

/// Split a series at missing values so the line breaks instead of bridging
/// the gap.
pub fn segments(points: &[(f64, Option<f64>)]) -> Vec<Vec<[f64; 2]>> {
    let mut out: Vec<Vec<[f64; 2]>> = Vec::new();
    let mut current: Vec<[f64; 2]> = Vec::new();
    for &(x, y) in points {
        match y {
            Some(y) => current.push([x, y]),
            None if !current.is_empty() => out.push(std::mem::take(&mut current)),
            None => {}
        }
    }
    if !current.is_empty() {
        out.push(current);
    }
    out
}

/// Axis text for a categorical x axis: the label at integer positions,
/// nothing in between.
fn category_label(labels: &[&str], value: f64) -> String {
    let rounded = value.round();
    if (value - rounded).abs() > 1e-6 || rounded < 0.0 {
        return String::new();
    }
    labels
        .get(rounded as usize)
        .map(|l| l.to_string())
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn segments_break_at_missing_values() {
        let points = [
            (1.0, Some(1.0)),
            (2.0, Some(2.0)),
            (3.0, None),
            (4.0, None),
            (5.0, Some(5.0)),
        ];
        assert_eq!(
            segments(&points),
            vec![vec![[1.0, 1.0], [2.0, 2.0]], vec![[5.0, 5.0]]]
        );
        assert!(segments(&[(1.0, None)]).is_empty());
    }

    #[test]
    fn category_labels_only_on_slots() {
        let labels = ["0-20", "20-40"];
        assert_eq!(category_label(&labels, 0.0), "0-20");
        assert_eq!(category_label(&labels, 1.0), "20-40");
        assert_eq!(category_label(&labels, 0.5), "");
        assert_eq!(category_label(&labels, 2.0), "");
        assert_eq!(category_label(&labels, -1.0), "");
    }
}
