// File: crates/chart-core/tests/smoke.rs
// Purpose: Basic end-to-end render smoke tests writing PNGs.

use chart_core::{Axis, Chart, Figure, Marker, RenderOptions, Series, SeriesType};

fn line_chart() -> Chart {
    let mut chart = Chart::new().with_title("Smoke");
    chart.x_axis = Axis::new("X", 0.0, 4.0);
    chart.y_axis = Axis::new("Y", 0.0, 4.0);
    chart.add_series(
        Series::with_data(SeriesType::Line, vec![(0.0, 0.0), (1.0, 2.0), (2.0, 1.0), (3.0, 3.5), (4.0, 2.5)])
            .named("line")
            .with_marker(Marker::Circle, 8.0),
    );
    chart.show_legend = true;
    chart
}

#[test]
fn render_smoke_png() {
    let chart = line_chart();
    let opts = RenderOptions::default();
    let out = std::path::PathBuf::from("target/test_out/smoke.png");
    std::fs::create_dir_all(out.parent().unwrap()).unwrap();

    chart.render_to_png(&opts, &out).expect("render should succeed");
    let meta = std::fs::metadata(&out).expect("output exists");
    assert!(meta.len() > 0, "png should be non-empty");

    // Also verify in-memory API works
    let bytes = chart.render_to_png_bytes(&opts).expect("render bytes");
    assert!(bytes.starts_with(&[137, 80, 78, 71]), "should be PNG header");
}

#[test]
fn render_grouped_bars_with_rotated_labels() {
    let mut chart = Chart::new().with_title("Bars");
    chart.x_axis = Axis::categorical("Graph", ["small", "medium", "large"]).with_tick_rotation(45.0);
    chart.y_axis = chart.y_axis.clone().with_grid(true);
    chart.add_series(Series::bars_at_indices(&[1.0, 2.0, 3.0]).named("a").with_bar_width(0.35).with_x_offset(-0.175));
    chart.add_series(Series::bars_at_indices(&[2.0, 1.0, 4.0]).named("b").with_bar_width(0.35).with_x_offset(0.175));
    chart.show_legend = true;
    chart.autoscale_axes(0.05);

    let bytes = chart.render_to_png_bytes(&RenderOptions::default()).expect("render bars");
    assert!(bytes.starts_with(&[137, 80, 78, 71]));
}

#[test]
fn render_figure_into_nested_directory() {
    let mut fig = Figure::new(2, 2);
    for _ in 0..4 {
        fig.add_panel(line_chart());
    }
    let out = std::path::PathBuf::from("target/test_out/nested/figure.png");
    let _ = std::fs::remove_file(&out);
    let opts = RenderOptions::default().with_size(800, 600);
    fig.render_to_png(&opts, &out).expect("render figure");
    assert!(std::fs::metadata(&out).expect("figure exists").len() > 0);
}

#[test]
fn empty_chart_still_renders() {
    let mut chart = Chart::new();
    chart.x_axis = Axis::categorical("Graph", Vec::<String>::new());
    chart.autoscale_axes(0.05);
    let bytes = chart.render_to_png_bytes(&RenderOptions::default()).expect("render empty");
    assert!(!bytes.is_empty());
}
