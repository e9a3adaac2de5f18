// File: crates/mst-report/src/config.rs
// Summary: Report configuration: input location, output directory, render sizes.

use std::path::PathBuf;

use chart_core::types::Insets;
use chart_core::RenderOptions;

/// Results file written by the benchmark.
pub const DEFAULT_INPUT: &str = "output.json";

#[derive(Clone, Debug)]
pub struct ReportConfig {
    pub input: PathBuf,
    /// Charts are written here under their fixed file names.
    pub output_dir: PathBuf,
    /// Options for the four single-panel charts.
    pub single: RenderOptions,
    /// Options for the 2x2 comparison matrix (full figure size, per-panel insets).
    pub matrix: RenderOptions,
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            input: PathBuf::from(DEFAULT_INPUT),
            output_dir: PathBuf::from("."),
            single: RenderOptions::default().with_size(1500, 900),
            matrix: RenderOptions {
                insets: Insets::new(100, 30, 60, 140),
                ..RenderOptions::default().with_size(2100, 1800)
            },
        }
    }
}

impl ReportConfig {
    /// Default config reading `input` and writing into `output_dir`.
    pub fn with_paths(input: impl Into<PathBuf>, output_dir: impl Into<PathBuf>) -> Self {
        Self { input: input.into(), output_dir: output_dir.into(), ..Self::default() }
    }

    pub fn output_path(&self, file_name: &str) -> PathBuf {
        self.output_dir.join(file_name)
    }

    /// Turn off text rendering in every chart.
    pub fn without_labels(mut self) -> Self {
        self.single.draw_labels = false;
        self.matrix.draw_labels = false;
        self
    }
}
