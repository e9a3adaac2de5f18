// File: crates/mst-report/src/charts.rs
// Summary: The five report charts. Each has a builder returning the chart model and a
// `plot_*` function that renders it to its fixed file name.

use std::path::PathBuf;

use chart_core::{palette, Axis, Chart, Color, Figure, Marker, ReferenceLine, RenderOptions, Series, SeriesType};

use crate::config::ReportConfig;
use crate::error::{ReportError, Result};
use crate::model::{Algorithm, Metric, ResultSet};

pub const EXECUTION_TIME_FILE: &str = "execution_time_comparison.png";
pub const OPERATIONS_FILE: &str = "operations_comparison.png";
pub const SCALABILITY_FILE: &str = "scalability_analysis.png";
pub const COST_FILE: &str = "mst_cost.png";
pub const MATRIX_FILE: &str = "comparison_matrix.png";

/// Headroom above the tallest bar or point, as a fraction of the data span.
const Y_MARGIN: f64 = 0.05;
const TICK_ROTATION: f32 = 45.0;

/// The report's charts, in generation order.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ChartKind {
    ExecutionTime,
    Operations,
    Scalability,
    Cost,
    Matrix,
}

impl ChartKind {
    pub const ALL: [ChartKind; 5] = [
        ChartKind::ExecutionTime,
        ChartKind::Operations,
        ChartKind::Scalability,
        ChartKind::Cost,
        ChartKind::Matrix,
    ];

    pub fn file_name(self) -> &'static str {
        match self {
            ChartKind::ExecutionTime => EXECUTION_TIME_FILE,
            ChartKind::Operations => OPERATIONS_FILE,
            ChartKind::Scalability => SCALABILITY_FILE,
            ChartKind::Cost => COST_FILE,
            ChartKind::Matrix => MATRIX_FILE,
        }
    }

    /// Build and write this chart; returns the written path.
    pub fn generate(self, data: &ResultSet, cfg: &ReportConfig) -> Result<PathBuf> {
        match self {
            ChartKind::ExecutionTime => plot_execution_time(data, cfg),
            ChartKind::Operations => plot_operations(data, cfg),
            ChartKind::Scalability => plot_scalability(data, cfg),
            ChartKind::Cost => plot_cost_comparison(data, cfg),
            ChartKind::Matrix => plot_comparison_matrix(data, cfg),
        }
    }
}

/// Colors and geometry for a Prim/Kruskal bar pair.
struct BarPair {
    prim: Color,
    kruskal: Color,
    width: f64,
}

const TIME_BARS: BarPair = BarPair { prim: palette::SKY_BLUE, kruskal: palette::LIGHT_CORAL, width: 0.35 };
const OPS_BARS: BarPair = BarPair { prim: palette::LIGHT_GREEN, kruskal: palette::ORANGE, width: 0.35 };

impl BarPair {
    /// Same colors, different bar width (matrix panels use wider bars).
    const fn widened(&self, width: f64) -> BarPair {
        BarPair { prim: self.prim, kruskal: self.kruskal, width }
    }
}

/// Kruskal time over Prim time per graph; 1.0 where Prim's time is not positive.
pub fn performance_ratios(prim_times: &[f64], kruskal_times: &[f64]) -> Vec<f64> {
    prim_times
        .iter()
        .zip(kruskal_times)
        .map(|(&p, &k)| if p > 0.0 { k / p } else { 1.0 })
        .collect()
}

fn grouped_bars(
    title: &str,
    x_label: &str,
    y_label: &str,
    names: Vec<String>,
    prim: &[f64],
    kruskal: &[f64],
    style: &BarPair,
) -> Chart {
    let mut chart = Chart::new().with_title(title);
    chart.x_axis = Axis::categorical(x_label, names).with_tick_rotation(TICK_ROTATION);
    chart.y_axis = Axis::new(y_label, 0.0, 1.0).with_grid(true);
    let half = style.width / 2.0;
    chart.add_series(
        Series::bars_at_indices(prim)
            .named(Algorithm::Prim.label())
            .with_color(style.prim)
            .with_bar_width(style.width)
            .with_x_offset(-half),
    );
    chart.add_series(
        Series::bars_at_indices(kruskal)
            .named(Algorithm::Kruskal.label())
            .with_color(style.kruskal)
            .with_bar_width(style.width)
            .with_x_offset(half),
    );
    chart.show_legend = true;
    chart.autoscale_axes(Y_MARGIN);
    chart
}

fn single_bars(title: &str, x_label: &str, y_label: &str, names: Vec<String>, values: &[f64]) -> Chart {
    let mut chart = Chart::new().with_title(title);
    chart.x_axis = Axis::categorical(x_label, names).with_tick_rotation(TICK_ROTATION);
    chart.y_axis = Axis::new(y_label, 0.0, 1.0).with_grid(true);
    chart.add_series(Series::bars_at_indices(values).with_color(palette::STEEL_BLUE));
    chart.autoscale_axes(Y_MARGIN);
    chart
}

fn metric_pair(data: &ResultSet, metric: Metric) -> Result<(Vec<f64>, Vec<f64>)> {
    Ok((data.metric(Algorithm::Prim, metric)?, data.metric(Algorithm::Kruskal, metric)?))
}

pub fn execution_time_chart(data: &ResultSet) -> Result<Chart> {
    let names = data.graph_names()?;
    let (prim, kruskal) = metric_pair(data, Metric::ExecutionTime)?;
    Ok(grouped_bars(
        "Comparison of Execution Time: Prim vs Kruskal",
        "Graph Size",
        "Execution Time (ms)",
        names,
        &prim,
        &kruskal,
        &TIME_BARS,
    ))
}

pub fn operations_chart(data: &ResultSet) -> Result<Chart> {
    let names = data.graph_names()?;
    let (prim, kruskal) = metric_pair(data, Metric::Operations)?;
    Ok(grouped_bars(
        "Comparison of Operations: Prim vs Kruskal",
        "Graph Size",
        "Number of Operations",
        names,
        &prim,
        &kruskal,
        &OPS_BARS,
    ))
}

pub fn scalability_chart(data: &ResultSet) -> Result<Chart> {
    let vertices = data.vertex_counts()?;
    let (prim, kruskal) = metric_pair(data, Metric::ExecutionTime)?;

    let mut chart = Chart::new().with_title("Scalability Analysis: Execution Time vs Graph Size");
    chart.x_axis = Axis::new("Number of Vertices", 0.0, 1.0).with_grid(true);
    chart.y_axis = Axis::new("Execution Time (ms)", 0.0, 1.0).with_grid(true);
    for (algorithm, times, marker) in [
        (Algorithm::Prim, prim, Marker::Circle),
        (Algorithm::Kruskal, kruskal, Marker::Square),
    ] {
        let points = vertices.iter().copied().zip(times).collect();
        chart.add_series(
            Series::with_data(SeriesType::Line, points)
                .named(algorithm.label())
                .with_marker(marker, 10.0)
                .with_stroke_width(2.0),
        );
    }
    chart.show_legend = true;
    chart.autoscale_axes(Y_MARGIN);
    Ok(chart)
}

pub fn cost_chart(data: &ResultSet) -> Result<Chart> {
    let names = data.graph_names()?;
    // MST weight is the same for both algorithms, so only Prim's is plotted
    let costs = data.metric(Algorithm::Prim, Metric::TotalCost)?;
    Ok(single_bars("Minimum Spanning Tree Total Cost", "Graph", "MST Total Cost", names, &costs))
}

/// The four panels of the comparison matrix, row-major.
pub fn comparison_matrix_panels(data: &ResultSet) -> Result<Vec<Chart>> {
    let names = data.graph_names()?;
    let (prim_times, kruskal_times) = metric_pair(data, Metric::ExecutionTime)?;
    let (prim_ops, kruskal_ops) = metric_pair(data, Metric::Operations)?;
    let costs = data.metric(Algorithm::Prim, Metric::TotalCost)?;

    let time = grouped_bars(
        "Execution Time",
        "Graph",
        "Time (ms)",
        names.clone(),
        &prim_times,
        &kruskal_times,
        &TIME_BARS.widened(0.4),
    );
    let ops = grouped_bars(
        "Operation Count",
        "Graph",
        "Operations",
        names.clone(),
        &prim_ops,
        &kruskal_ops,
        &OPS_BARS.widened(0.4),
    );
    let cost = single_bars("MST Total Cost", "Graph", "MST Cost", names.clone(), &costs);
    let ratio = ratio_chart(names, &performance_ratios(&prim_times, &kruskal_times));

    let mut panels = vec![time, ops, cost, ratio];
    // Panels draw grid lines on both axes
    for panel in &mut panels {
        panel.x_axis.grid = true;
    }
    Ok(panels)
}

fn ratio_chart(names: Vec<String>, ratios: &[f64]) -> Chart {
    let mut chart = Chart::new().with_title("Performance Ratio");
    chart.x_axis = Axis::categorical("Graph", names).with_tick_rotation(TICK_ROTATION);
    chart.y_axis = Axis::new("Time Ratio (Kruskal/Prim)", 0.0, 1.0).with_grid(true);
    let points = ratios.iter().enumerate().map(|(i, &r)| (i as f64, r)).collect();
    chart.add_series(
        Series::with_data(SeriesType::Line, points)
            .with_marker(Marker::Circle, 10.0)
            .with_stroke_width(2.0),
    );
    chart.add_reference(ReferenceLine::new(1.0, palette::RED).dashed().named("Equal Performance"));
    chart.show_legend = true;
    chart.autoscale_axes(Y_MARGIN);
    chart
}

fn render_chart(chart: &Chart, opts: &RenderOptions, cfg: &ReportConfig, file: &str) -> Result<PathBuf> {
    let path = cfg.output_path(file);
    chart
        .render_to_png(opts, &path)
        .map_err(|source| ReportError::Render { file: file.to_string(), source })?;
    Ok(path)
}

pub fn plot_execution_time(data: &ResultSet, cfg: &ReportConfig) -> Result<PathBuf> {
    render_chart(&execution_time_chart(data)?, &cfg.single, cfg, EXECUTION_TIME_FILE)
}

pub fn plot_operations(data: &ResultSet, cfg: &ReportConfig) -> Result<PathBuf> {
    render_chart(&operations_chart(data)?, &cfg.single, cfg, OPERATIONS_FILE)
}

pub fn plot_scalability(data: &ResultSet, cfg: &ReportConfig) -> Result<PathBuf> {
    render_chart(&scalability_chart(data)?, &cfg.single, cfg, SCALABILITY_FILE)
}

pub fn plot_cost_comparison(data: &ResultSet, cfg: &ReportConfig) -> Result<PathBuf> {
    render_chart(&cost_chart(data)?, &cfg.single, cfg, COST_FILE)
}

pub fn plot_comparison_matrix(data: &ResultSet, cfg: &ReportConfig) -> Result<PathBuf> {
    let mut figure = Figure::new(2, 2);
    for panel in comparison_matrix_panels(data)? {
        figure.add_panel(panel);
    }
    let path = cfg.output_path(MATRIX_FILE);
    figure
        .render_to_png(&cfg.matrix, &path)
        .map_err(|source| ReportError::Render { file: MATRIX_FILE.to_string(), source })?;
    Ok(path)
}
