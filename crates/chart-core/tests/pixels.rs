// File: crates/chart-core/tests/pixels.rs
// Purpose: Decode rendered PNGs and check size and a few pixels.

use chart_core::{Axis, Chart, Figure, RenderOptions, Series, Theme};

fn opts() -> RenderOptions {
    let mut opts = RenderOptions::default().with_size(400, 300);
    opts.draw_labels = false; // avoid font variance
    opts
}

#[test]
fn png_has_requested_dimensions_and_opaque_background() {
    let mut chart = Chart::new();
    chart.x_axis = Axis::new("X", 0.0, 4.0);
    chart.y_axis = Axis::new("Y", 0.0, 4.0);
    let bytes = chart.render_to_png_bytes(&opts()).expect("render");
    let img = image::load_from_memory(&bytes).expect("decode").to_rgba8();
    assert_eq!(img.width(), 400);
    assert_eq!(img.height(), 300);
    // Top-left corner is background: white and opaque for the light theme
    assert_eq!(img.get_pixel(0, 0).0, [255, 255, 255, 255]);
}

#[test]
fn theme_background_is_painted() {
    let chart = Chart::new();
    let mut o = opts();
    o.theme = Theme { background: skia_safe::Color::from_rgb(18, 18, 20), ..Theme::light() };
    let bytes = chart.render_to_png_bytes(&o).expect("render");
    let img = image::load_from_memory(&bytes).expect("decode").to_rgba8();
    assert_eq!(img.get_pixel(1, 1).0, [18, 18, 20, 255]);
}

#[test]
fn bar_fills_its_slot_with_series_color() {
    let mut chart = Chart::new();
    chart.x_axis = Axis::categorical("G", ["only"]);
    chart.y_axis = Axis::new("Y", 0.0, 10.0);
    chart.add_series(Series::bars_at_indices(&[10.0]).with_bar_width(0.8).with_color(skia_safe::Color::from_rgb(0, 0, 255)));

    let o = opts();
    let bytes = chart.render_to_png_bytes(&o).expect("render");
    let img = image::load_from_memory(&bytes).expect("decode").to_rgba8();

    // Centre of the plot area lies inside the full-height bar
    let cx = (o.insets.left + (400 - o.insets.left - o.insets.right) / 2) as u32;
    let cy = (o.insets.top + (300 - o.insets.top - o.insets.bottom) / 2) as u32;
    assert_eq!(img.get_pixel(cx, cy).0, [0, 0, 255, 255]);
}

#[test]
fn figure_matches_requested_size() {
    let mut fig = Figure::new(2, 2);
    fig.add_panel(Chart::new());
    let bytes = fig.render_to_png_bytes(&opts().with_size(640, 480)).expect("render figure");
    let img = image::load_from_memory(&bytes).expect("decode").to_rgba8();
    assert_eq!((img.width(), img.height()), (640, 480));
}
