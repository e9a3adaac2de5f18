// File: crates/chart-core/src/series.rs
// Summary: Series model for line and bar data, plus horizontal reference lines.

use skia_safe as skia;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SeriesType {
    Line,
    Bar, // (x, y) bars from baseline (0.0)
}

/// Point marker drawn at each vertex of a line series.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Marker {
    None,
    Circle,
    Square,
}

#[derive(Clone, Debug)]
pub struct Series {
    pub series_type: SeriesType,
    pub data_xy: Vec<(f64, f64)>,
    /// Legend label; unnamed series are left out of the legend.
    pub name: Option<String>,
    /// Explicit color; `None` takes the next color from the theme cycle.
    pub color: Option<skia::Color>,
    /// Bar width in x-axis units.
    pub bar_width: f64,
    /// Horizontal shift in x-axis units, used to place grouped bars side by side.
    pub x_offset: f64,
    pub marker: Marker,
    pub marker_size: f32,
    pub stroke_width: f32,
}

impl Series {
    pub fn with_data(series_type: SeriesType, data: Vec<(f64, f64)>) -> Self {
        Self {
            series_type,
            data_xy: data,
            name: None,
            color: None,
            bar_width: 0.8,
            x_offset: 0.0,
            marker: Marker::None,
            marker_size: 8.0,
            stroke_width: 2.0,
        }
    }

    /// Bars at positions 0..n, one per value, in input order.
    pub fn bars_at_indices(values: &[f64]) -> Self {
        let data = values.iter().enumerate().map(|(i, &v)| (i as f64, v)).collect();
        Self::with_data(SeriesType::Bar, data)
    }

    pub fn named(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn with_color(mut self, color: skia::Color) -> Self {
        self.color = Some(color);
        self
    }

    pub fn with_bar_width(mut self, width: f64) -> Self {
        self.bar_width = width;
        self
    }

    pub fn with_x_offset(mut self, offset: f64) -> Self {
        self.x_offset = offset;
        self
    }

    pub fn with_marker(mut self, marker: Marker, size: f32) -> Self {
        self.marker = marker;
        self.marker_size = size;
        self
    }

    pub fn with_stroke_width(mut self, width: f32) -> Self {
        self.stroke_width = width;
        self
    }

    /// Data points as actually placed on the x axis (offset applied).
    pub fn placed_points(&self) -> impl Iterator<Item = (f64, f64)> + '_ {
        self.data_xy.iter().map(move |&(x, y)| (x + self.x_offset, y))
    }
}

/// Horizontal line spanning the full x range at `y`.
#[derive(Clone, Debug)]
pub struct ReferenceLine {
    pub y: f64,
    pub color: skia::Color,
    pub dashed: bool,
    pub name: Option<String>,
}

impl ReferenceLine {
    pub fn new(y: f64, color: skia::Color) -> Self {
        Self { y, color, dashed: false, name: None }
    }

    pub fn dashed(mut self) -> Self {
        self.dashed = true;
        self
    }

    pub fn named(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }
}
