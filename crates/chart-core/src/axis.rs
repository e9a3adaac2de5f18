// File: crates/chart-core/src/axis.rs
// Summary: Axis model with labels, ranges, and optional category tick labels.

use crate::grid::{format_tick, nice_step, nice_ticks};

#[derive(Clone, Debug)]
pub struct Axis {
    pub label: String,
    pub min: f64,
    pub max: f64,
    /// When non-empty, ticks sit on integer positions 0..n labelled by these names.
    pub categories: Vec<String>,
    /// Tick label rotation in degrees, counter-clockwise. Rotated labels are right-aligned to the tick.
    pub tick_rotation: f32,
    /// Draw grid lines across the plot at each tick of this axis.
    pub grid: bool,
}

impl Axis {
    pub fn new(label: impl Into<String>, min: f64, max: f64) -> Self {
        Self { label: label.into(), min, max, categories: Vec::new(), tick_rotation: 0.0, grid: false }
    }

    /// Categorical axis: one slot per name, centred on integer positions.
    pub fn categorical<I, S>(label: impl Into<String>, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let categories: Vec<String> = names.into_iter().map(Into::into).collect();
        let n = categories.len() as f64;
        let mut a = Self::new(label, -0.5, (n - 0.5).max(0.5));
        a.categories = categories;
        a
    }

    pub fn with_tick_rotation(mut self, degrees: f32) -> Self {
        self.tick_rotation = degrees;
        self
    }

    pub fn with_grid(mut self, grid: bool) -> Self {
        self.grid = grid;
        self
    }

    pub fn is_categorical(&self) -> bool { !self.categories.is_empty() }

    /// Tick positions and their labels, in axis order.
    pub fn ticks(&self) -> Vec<(f64, String)> {
        if self.is_categorical() {
            return self
                .categories
                .iter()
                .enumerate()
                .map(|(i, name)| (i as f64, name.clone()))
                .collect();
        }
        let step = nice_step(self.min, self.max, 6);
        nice_ticks(self.min, self.max, 6)
            .into_iter()
            .map(|v| (v, format_tick(v, step)))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn categorical_ticks_keep_input_order() {
        let a = Axis::categorical("Graph", ["small", "large", "medium"]);
        let labels: Vec<_> = a.ticks().into_iter().map(|(_, l)| l).collect();
        assert_eq!(labels, vec!["small", "large", "medium"]);
        assert_eq!(a.min, -0.5);
        assert_eq!(a.max, 2.5);
    }

    #[test]
    fn empty_categorical_axis_has_a_span() {
        let a = Axis::categorical("Graph", Vec::<String>::new());
        assert!(a.max > a.min);
    }

    #[test]
    fn numeric_ticks_are_labelled() {
        let a = Axis::new("Y", 0.0, 100.0);
        let ticks = a.ticks();
        assert!(ticks.iter().any(|(v, l)| *v == 0.0 && l == "0"));
        assert!(ticks.iter().any(|(v, l)| *v == 100.0 && l == "100"));
    }
}
