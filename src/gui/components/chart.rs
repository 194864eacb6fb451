// src/gui/components/chart.rs
//
// Draws the LineChart the chart presenter left in the view. X is the label
// index (oldest left); gaps in a series are separate lines sharing one legend
// entry. The legend is drawn above the plot so it can carry its own text
// color; tick and grid colors apply to the plot alone.

use eframe::egui::{self, Color32, RichText};
use egui_plot::{GridMark, Line, Plot, PlotPoint, PlotPoints};

use crate::{
    gui::app::App,
    present::chart::{hex_rgb, LineChart, Series},
};

fn color(hex: &str) -> Color32 {
    let [r, g, b] = hex_rgb(hex).unwrap_or([0x88, 0x88, 0x88]);
    Color32::from_rgb(r, g, b)
}

fn lines(series: &Series) -> Vec<Line<'static>> {
    let c = color(series.border_color);
    series
        .runs()
        .into_iter()
        .map(|run| {
            let pts: PlotPoints<'static> = run.into_iter().map(|(i, v)| [i as f64, v]).collect();
            Line::new(series.label.clone(), pts).color(c).width(2.0)
        })
        .collect()
}

const LEGEND_ROW: f32 = 22.0;

/// One legend entry: label, swatch (series) color, text color.
fn legend_entries(chart: &LineChart) -> Vec<(&str, Color32, Color32)> {
    let text = color(chart.options.legend_color);
    chart
        .series()
        .into_iter()
        .map(|s| (s.label.as_str(), color(s.border_color), text))
        .collect()
}

fn draw_legend(ui: &mut egui::Ui, chart: &LineChart) {
    ui.horizontal(|ui| {
        for (label, swatch, text) in legend_entries(chart) {
            let (rect, _) = ui.allocate_exact_size(egui::vec2(16.0, 3.0), egui::Sense::hover());
            ui.painter().rect_filled(rect, 0.0, swatch);
            ui.label(RichText::new(label).color(text));
            ui.add_space(12.0);
        }
    });
}

pub fn draw(ui: &mut egui::Ui, app: &App, height: f32) {
    let Some(chart) = &app.view.chart else {
        ui.allocate_space(egui::vec2(ui.available_width(), height));
        return;
    };

    let labels = chart.labels.clone();
    let hover_labels = chart.labels.clone();
    let opts = &chart.options;

    draw_legend(ui, chart);
    let height = (height - LEGEND_ROW).max(0.0);

    ui.scope(|ui| {
        ui.visuals_mut().override_text_color = Some(color(opts.tick_color));
        ui.visuals_mut().widgets.noninteractive.bg_stroke.color = color(opts.grid_color);

        let mut plot = Plot::new("performance_chart")
            .allow_scroll(false)
            .x_axis_formatter(move |mark: GridMark, _range| {
                let v = mark.value;
                if v.fract() != 0.0 || v < 0.0 {
                    return s!();
                }
                labels.get(v as usize).cloned().unwrap_or_default()
            })
            .label_formatter(move |name, value: &PlotPoint| {
                let ix = value.x.round();
                let date = if ix >= 0.0 {
                    hover_labels.get(ix as usize).map(String::as_str).unwrap_or("")
                } else {
                    ""
                };
                if name.is_empty() {
                    format!("{date}\n{:.2}", value.y)
                } else {
                    format!("{name}\n{date}\n{:.2}", value.y)
                }
            });

        // responsive: fill the width; no fixed aspect
        plot = plot.height(height).width(ui.available_width());
        if opts.maintain_aspect_ratio {
            plot = plot.data_aspect(1.0);
        }

        let mut items = lines(&chart.predicted);
        items.extend(lines(&chart.actual));

        plot.show(ui, |plot_ui| {
            for line in items {
                plot_ui.line(line);
            }
        });
    });
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        config::consts::{LEGEND_COLOR, TICK_COLOR},
        pipeline::normalize,
        present::chart::build_chart,
        record::PredictionRecord,
    };

    #[test]
    fn legend_text_uses_legend_color() {
        let chart = build_chart(&normalize(vec![PredictionRecord::new("2024-01-01", "1")]));
        let entries = legend_entries(&chart);

        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].0, "Predicted");
        assert_eq!(entries[1].0, "Actual");
        for (_, _, text) in &entries {
            assert_eq!(*text, color(LEGEND_COLOR));
            assert_ne!(*text, color(TICK_COLOR));
        }
        assert_eq!(entries[0].1, Color32::from_rgb(0xf7, 0x93, 0x1a));
    }
}
