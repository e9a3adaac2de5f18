// File: crates/mst-report/src/lib.rs
// Summary: Report library; loads MST benchmark results and renders comparison charts.

pub mod charts;
pub mod config;
pub mod error;
pub mod loader;
pub mod model;
pub mod report;
pub mod summary;

pub use charts::{performance_ratios, ChartKind};
pub use config::ReportConfig;
pub use error::{ReportError, Result};
pub use loader::load_results;
pub use model::{Algorithm, AlgorithmMetrics, GraphResult, Metric, ResultSet};
