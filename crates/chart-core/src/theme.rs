// File: crates/chart-core/src/theme.rs
// Summary: Theming for chart rendering colors, plus a named-color palette.

use skia_safe as skia;

/// Named colors used by report charts.
pub mod palette {
    use skia_safe::Color;

    pub const SKY_BLUE: Color = Color::new(0xFF87CEEB);
    pub const LIGHT_CORAL: Color = Color::new(0xFFF08080);
    pub const LIGHT_GREEN: Color = Color::new(0xFF90EE90);
    pub const ORANGE: Color = Color::new(0xFFFFA500);
    pub const STEEL_BLUE: Color = Color::new(0xFF4682B4);
    pub const RED: Color = Color::new(0xFFFF0000);
    pub const TAB_BLUE: Color = Color::new(0xFF1F77B4);
    pub const TAB_ORANGE: Color = Color::new(0xFFFF7F0E);
    pub const TAB_GREEN: Color = Color::new(0xFF2CA02C);
    pub const TAB_RED: Color = Color::new(0xFFD62728);
}

#[derive(Clone, Copy, Debug)]
pub struct Theme {
    pub background: skia::Color,
    pub grid: skia::Color,
    pub axis_line: skia::Color,
    pub axis_label: skia::Color,
    pub tick: skia::Color,
    pub title: skia::Color,
    pub legend_fill: skia::Color,
    pub legend_border: skia::Color,
    /// Colors handed out to series without an explicit color, in order.
    pub series_cycle: [skia::Color; 4],
}

impl Theme {
    pub fn light() -> Self {
        Self {
            background: skia::Color::from_argb(255, 255, 255, 255),
            grid: skia::Color::from_argb(77, 176, 176, 176), // ~0.3 alpha
            axis_line: skia::Color::from_argb(255, 30, 30, 30),
            axis_label: skia::Color::from_argb(255, 20, 20, 30),
            tick: skia::Color::from_argb(255, 40, 40, 50),
            title: skia::Color::from_argb(255, 10, 10, 10),
            legend_fill: skia::Color::from_argb(204, 255, 255, 255),
            legend_border: skia::Color::from_argb(255, 204, 204, 204),
            series_cycle: [palette::TAB_BLUE, palette::TAB_ORANGE, palette::TAB_GREEN, palette::TAB_RED],
        }
    }

    /// Color for the `index`-th series lacking an explicit color.
    pub fn cycle_color(&self, index: usize) -> skia::Color {
        self.series_cycle[index % self.series_cycle.len()]
    }
}

impl Default for Theme {
    fn default() -> Self { Self::light() }
}
