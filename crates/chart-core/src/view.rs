// File: crates/chart-core/src/view.rs
// View state: visible data ranges and autoscale helpers.

use crate::series::SeriesType;
use crate::Chart;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ViewState {
    pub x_min: f64,
    pub x_max: f64,
    pub y_min: f64,
    pub y_max: f64,
}

impl ViewState {
    /// Data extents of every series and reference line, padded by `margin` (fraction of span).
    ///
    /// Bars contribute their full width and their baseline at 0, so bar charts
    /// always start from zero.
    pub fn from_chart(chart: &Chart, margin: f64) -> Self {
        let mut x_min = f64::INFINITY;
        let mut x_max = f64::NEG_INFINITY;
        let mut y_min = f64::INFINITY;
        let mut y_max = f64::NEG_INFINITY;
        let mut has_bars = false;
        for s in &chart.series {
            let half = match s.series_type {
                SeriesType::Bar => s.bar_width * 0.5,
                SeriesType::Line => 0.0,
            };
            for (x, y) in s.placed_points() {
                if !x.is_finite() || !y.is_finite() { continue; }
                x_min = x_min.min(x - half);
                x_max = x_max.max(x + half);
                y_min = y_min.min(y);
                y_max = y_max.max(y);
            }
            if s.series_type == SeriesType::Bar && !s.data_xy.is_empty() {
                has_bars = true;
            }
        }
        for r in &chart.references {
            y_min = y_min.min(r.y);
            y_max = y_max.max(r.y);
        }
        if has_bars {
            y_min = y_min.min(0.0);
            y_max = y_max.max(0.0);
        }
        if !x_min.is_finite() || !x_max.is_finite() {
            x_min = 0.0;
            x_max = 1.0;
        }
        if !y_min.is_finite() || !y_max.is_finite() {
            y_min = 0.0;
            y_max = 1.0;
        }
        (x_min, x_max) = widen_degenerate(x_min, x_max);
        (y_min, y_max) = if has_bars && y_max == 0.0 && y_min == 0.0 {
            (0.0, 1.0)
        } else {
            widen_degenerate(y_min, y_max)
        };
        let xm = padding(x_min, x_max, margin);
        let ym = padding(y_min, y_max, margin);
        // Bars sit on the axis: no padding below a zero baseline.
        let y_lo = if has_bars && y_min >= 0.0 { y_min } else { pad(y_min, -ym) };
        Self { x_min: pad(x_min, -xm), x_max: pad(x_max, xm), y_min: y_lo, y_max: pad(y_max, ym) }
    }

    /// Copy ranges onto the chart axes. Categorical x axes keep their slot layout.
    pub fn apply_to_chart(&self, chart: &mut Chart) {
        if !chart.x_axis.is_categorical() {
            chart.x_axis.min = self.x_min;
            chart.x_axis.max = self.x_max;
        }
        chart.y_axis.min = self.y_min;
        chart.y_axis.max = self.y_max;
    }
}

/// Give a zero-width range a span proportional to its magnitude (unit span at zero).
fn widen_degenerate(lo: f64, hi: f64) -> (f64, f64) {
    if hi > lo {
        return (lo, hi);
    }
    let half = if lo == 0.0 { 0.5 } else { lo.abs() * 0.05 };
    (pad(lo, -half), pad(hi, half))
}

/// `margin` of the span, or nothing when the span itself overflows.
fn padding(lo: f64, hi: f64, margin: f64) -> f64 {
    let span = hi - lo;
    if span.is_finite() { span * margin } else { 0.0 }
}

/// `v + d`, keeping `v` when the sum leaves the finite range.
fn pad(v: f64, d: f64) -> f64 {
    let p = v + d;
    if p.is_finite() { p } else { v }
}
