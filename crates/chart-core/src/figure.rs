// File: crates/chart-core/src/figure.rs
// Summary: Multi-panel figure; lays charts out on a rows x cols grid of one raster surface.

use anyhow::Result;

use crate::chart::{encode_png, raster_surface, write_png, Chart, RenderOptions};
use crate::geometry::RectI32;
use crate::text::TextShaper;

pub struct Figure {
    pub rows: usize,
    pub cols: usize,
    /// Panels in row-major order; at most `rows * cols` are drawn.
    pub panels: Vec<Chart>,
}

impl Figure {
    pub fn new(rows: usize, cols: usize) -> Self {
        Self { rows: rows.max(1), cols: cols.max(1), panels: Vec::new() }
    }

    pub fn add_panel(&mut self, chart: Chart) {
        self.panels.push(chart);
    }

    pub fn capacity(&self) -> usize { self.rows * self.cols }

    /// Render all panels into one PNG byte buffer. `opts` gives the full figure size;
    /// `opts.insets` apply inside each panel.
    pub fn render_to_png_bytes(&self, opts: &RenderOptions) -> Result<Vec<u8>> {
        if self.panels.len() > self.capacity() {
            log::warn!(
                "figure has {} panels but only {} cells; extra panels are dropped",
                self.panels.len(),
                self.capacity()
            );
        }
        let mut surface = raster_surface(opts)?;
        let shaper = TextShaper::new();
        let cells = RectI32::from_ltwh(0, 0, opts.width, opts.height).grid_cells(self.rows, self.cols);
        let canvas = surface.canvas();
        for (chart, cell) in self.panels.iter().zip(cells) {
            chart.render_into(canvas, cell, opts, &shaper);
        }
        encode_png(&mut surface)
    }

    pub fn render_to_png(&self, opts: &RenderOptions, output_png_path: impl AsRef<std::path::Path>) -> Result<()> {
        let bytes = self.render_to_png_bytes(opts)?;
        write_png(output_png_path.as_ref(), &bytes)
    }
}
