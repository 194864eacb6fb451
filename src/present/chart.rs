// src/present/chart.rs
//
// Predicted vs actual close as two series over target dates, oldest first.
// The description is renderer-neutral; the GUI turns it into egui_plot lines.

use serde::Serialize;

use crate::{
    config::consts::*,
    pipeline::Dataset,
    render::{Region, RenderTarget},
};

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Series {
    pub label: String,
    /// One point per label. `None` is a gap, never zero.
    pub points: Vec<Option<f64>>,
    pub border_color: &'static str,
    pub tension: f32,
}

impl Series {
    fn new(label: &str, points: Vec<Option<f64>>, border_color: &'static str) -> Self {
        Self { label: s!(label), points, border_color, tension: LINE_TENSION }
    }

    /// Maximal runs of consecutive finite points as `(index, value)` pairs.
    /// A renderer draws each run as one line so gaps stay visible.
    pub fn runs(&self) -> Vec<Vec<(usize, f64)>> {
        let mut out = Vec::new();
        let mut cur: Vec<(usize, f64)> = Vec::new();
        for (i, p) in self.points.iter().enumerate() {
            match p {
                Some(v) if v.is_finite() => cur.push((i, *v)),
                _ => {
                    if !cur.is_empty() {
                        out.push(std::mem::take(&mut cur));
                    }
                }
            }
        }
        if !cur.is_empty() {
            out.push(cur);
        }
        out
    }
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct ChartOptions {
    pub responsive: bool,
    pub maintain_aspect_ratio: bool,
    pub grid_color: &'static str,
    pub tick_color: &'static str,
    pub legend_color: &'static str,
}

impl Default for ChartOptions {
    fn default() -> Self {
        Self {
            responsive: true,
            maintain_aspect_ratio: false,
            grid_color: GRID_COLOR,
            tick_color: TICK_COLOR,
            legend_color: LEGEND_COLOR,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct LineChart {
    pub labels: Vec<String>,
    pub predicted: Series,
    pub actual: Series,
    pub options: ChartOptions,
}

impl LineChart {
    pub fn series(&self) -> [&Series; 2] {
        [&self.predicted, &self.actual]
    }
}

/// Build the chart description from the descending dataset. Works on a
/// reversed view; the dataset itself is not reordered.
pub fn build_chart(data: &Dataset) -> LineChart {
    let chronological = data.chronological();

    let labels = chronological.iter().map(|r| s!(r.target_date())).collect();
    let predicted = chronological.iter().map(|r| Some(r.predicted())).collect();
    let actual = chronological.iter().map(|r| r.actual()).collect();

    LineChart {
        labels,
        predicted: Series::new("Predicted", predicted, PREDICTED_COLOR),
        actual: Series::new("Actual", actual, ACTUAL_COLOR),
        options: ChartOptions::default(),
    }
}

pub fn render_performance_chart<T: RenderTarget + ?Sized>(data: &Dataset, target: &mut T) {
    if !target.accepts(Region::Chart) {
        return;
    }
    target.draw_chart(build_chart(data));
}

/// `"#f7931a"` → `[0xf7, 0x93, 0x1a]`.
pub fn hex_rgb(hex: &str) -> Option<[u8; 3]> {
    let h = hex.strip_prefix('#')?;
    if h.len() != 6 || !h.is_ascii() {
        return None;
    }
    let byte = |i: usize| u8::from_str_radix(&h[i..i + 2], 16).ok();
    Some([byte(0)?, byte(2)?, byte(4)?])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn runs_split_on_gaps_and_nan() {
        let s = Series::new(
            "Actual",
            vec![Some(1.0), None, Some(2.0), Some(3.0), Some(f64::NAN), Some(4.0)],
            ACTUAL_COLOR,
        );
        let runs = s.runs();
        assert_eq!(runs, vec![
            vec![(0, 1.0)],
            vec![(2, 2.0), (3, 3.0)],
            vec![(5, 4.0)],
        ]);
    }

    #[test]
    fn hex_colors() {
        assert_eq!(hex_rgb(PREDICTED_COLOR), Some([0xf7, 0x93, 0x1a]));
        assert_eq!(hex_rgb("#30363d"), Some([0x30, 0x36, 0x3d]));
        assert_eq!(hex_rgb("30363d"), None);
        assert_eq!(hex_rgb("#zz0000"), None);
    }
}
