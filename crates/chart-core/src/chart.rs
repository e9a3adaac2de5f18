// File: crates/chart-core/src/chart.rs
// Summary: Chart struct and headless PNG rendering pipeline using Skia CPU raster surfaces.

use anyhow::Result;
use skia_safe as skia;

use crate::geometry::RectI32;
use crate::scale::LinearScale;
use crate::series::{Marker, ReferenceLine, Series, SeriesType};
use crate::text::{Align, TextShaper};
use crate::theme::Theme;
use crate::types::{Insets, WIDTH, HEIGHT};
use crate::view::ViewState;
use crate::Axis;

const TITLE_SIZE: f32 = 24.0;
const LABEL_SIZE: f32 = 18.0;
const TICK_SIZE: f32 = 15.0;
const LEGEND_SIZE: f32 = 16.0;
const TICK_LEN: f32 = 6.0;

#[derive(Clone, Debug)]
pub struct RenderOptions {
    pub width: i32,
    pub height: i32,
    /// Margins around each plot area (per panel when rendering a figure).
    pub insets: Insets,
    pub theme: Theme,
    /// Disable to skip all text (deterministic output regardless of installed fonts).
    pub draw_labels: bool,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            width: WIDTH,
            height: HEIGHT,
            insets: Insets::default(),
            theme: Theme::light(),
            draw_labels: true,
        }
    }
}

impl RenderOptions {
    pub fn with_size(mut self, width: i32, height: i32) -> Self {
        self.width = width;
        self.height = height;
        self
    }
}

#[derive(Clone, Debug)]
pub struct Chart {
    pub title: Option<String>,
    pub series: Vec<Series>,
    pub references: Vec<ReferenceLine>,
    pub x_axis: Axis,
    pub y_axis: Axis,
    pub show_legend: bool,
}

impl Default for Chart {
    fn default() -> Self { Self::new() }
}

impl Chart {
    pub fn new() -> Self {
        Self {
            title: None,
            series: Vec::new(),
            references: Vec::new(),
            x_axis: Axis::new("X", 0.0, 10.0),
            y_axis: Axis::new("Y", 0.0, 100.0),
            show_legend: false,
        }
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn add_series(&mut self, series: Series) {
        self.series.push(series);
    }

    pub fn add_reference(&mut self, line: ReferenceLine) {
        self.references.push(line);
    }

    /// Fit axis ranges to the data, padding by `margin` (fraction of span).
    pub fn autoscale_axes(&mut self, margin: f64) {
        ViewState::from_chart(self, margin).apply_to_chart(self);
    }

    /// Render the chart into a PNG byte buffer.
    pub fn render_to_png_bytes(&self, opts: &RenderOptions) -> Result<Vec<u8>> {
        let mut surface = raster_surface(opts)?;
        let shaper = TextShaper::new();
        let bounds = RectI32::from_ltwh(0, 0, opts.width, opts.height);
        self.render_into(surface.canvas(), bounds, opts, &shaper);
        encode_png(&mut surface)
    }

    /// Render the chart to a PNG at `output_png_path` using a CPU raster surface.
    pub fn render_to_png(
        &self,
        opts: &RenderOptions,
        output_png_path: impl AsRef<std::path::Path>,
    ) -> Result<()> {
        let bytes = self.render_to_png_bytes(opts)?;
        write_png(output_png_path.as_ref(), &bytes)
    }

    /// Draw the whole chart (title, axes, series, legend) inside `bounds`.
    pub fn render_into(&self, canvas: &skia::Canvas, bounds: RectI32, opts: &RenderOptions, shaper: &TextShaper) {
        let theme = &opts.theme;
        let mut bg = skia::Paint::default();
        bg.set_color(theme.background);
        canvas.draw_rect(bounds.to_skia(), &bg);

        let plot = bounds.inset(&opts.insets);
        let sx = LinearScale::horizontal(&plot, &self.x_axis);
        let sy = LinearScale::vertical(&plot, &self.y_axis);

        draw_grid(canvas, &plot, &self.x_axis, &self.y_axis, &sx, &sy, theme);

        canvas.save();
        canvas.clip_rect(plot.to_skia(), skia::ClipOp::Intersect, true);
        let colors = self.series_colors(theme);
        for (s, &color) in self.series.iter().zip(&colors) {
            match s.series_type {
                SeriesType::Bar => draw_bar_series(canvas, &sx, &sy, s, color),
                SeriesType::Line => draw_line_series(canvas, &sx, &sy, s, color),
            }
        }
        for r in &self.references {
            draw_reference(canvas, &plot, &sy, r);
        }
        canvas.restore();

        draw_axes(canvas, &plot, &self.x_axis, &self.y_axis, &sx, &sy, theme);

        if opts.draw_labels {
            draw_tick_labels(canvas, shaper, &plot, &self.x_axis, &self.y_axis, &sx, &sy, theme);
            draw_axis_labels(canvas, shaper, &bounds, &plot, &self.x_axis, &self.y_axis, theme);
            if let Some(title) = &self.title {
                let cx = (plot.left + plot.right) as f32 * 0.5;
                let y = bounds.top as f32 + opts.insets.top as f32 * 0.5 + TITLE_SIZE * 0.4;
                shaper.draw_styled(canvas, title, (cx, y), TITLE_SIZE, theme.title, Align::Center, true);
            }
        }

        if self.show_legend {
            let entries = self.legend_entries(&colors);
            draw_legend(canvas, shaper, &plot, &entries, theme, opts.draw_labels);
        }
    }

    /// Resolved color per series: explicit color, else the next theme cycle color.
    fn series_colors(&self, theme: &Theme) -> Vec<skia::Color> {
        let mut next = 0usize;
        self.series
            .iter()
            .map(|s| match s.color {
                Some(c) => c,
                None => {
                    let c = theme.cycle_color(next);
                    next += 1;
                    c
                }
            })
            .collect()
    }

    fn legend_entries(&self, colors: &[skia::Color]) -> Vec<LegendEntry> {
        let mut out = Vec::new();
        for (s, &color) in self.series.iter().zip(colors) {
            if let Some(name) = &s.name {
                let swatch = match s.series_type {
                    SeriesType::Bar => Swatch::Box,
                    SeriesType::Line => Swatch::Line { marker: s.marker, dashed: false },
                };
                out.push(LegendEntry { label: name.clone(), color, swatch });
            }
        }
        for r in &self.references {
            if let Some(name) = &r.name {
                out.push(LegendEntry {
                    label: name.clone(),
                    color: r.color,
                    swatch: Swatch::Line { marker: Marker::None, dashed: r.dashed },
                });
            }
        }
        out
    }
}

// ---- helpers ----------------------------------------------------------------

pub(crate) fn raster_surface(opts: &RenderOptions) -> Result<skia::Surface> {
    let mut surface = skia::surfaces::raster_n32_premul((opts.width, opts.height))
        .ok_or_else(|| anyhow::anyhow!("failed to create raster surface {}x{}", opts.width, opts.height))?;
    surface.canvas().clear(opts.theme.background);
    Ok(surface)
}

pub(crate) fn encode_png(surface: &mut skia::Surface) -> Result<Vec<u8>> {
    // Snapshot and encode PNG
    let image = surface.image_snapshot();
    #[allow(deprecated)]
    let data = image
        .encode_to_data(skia::EncodedImageFormat::PNG)
        .ok_or_else(|| anyhow::anyhow!("encode PNG failed"))?;
    Ok(data.as_bytes().to_vec())
}

pub(crate) fn write_png(path: &std::path::Path, bytes: &[u8]) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)?;
        }
    }
    std::fs::write(path, bytes)?;
    log::debug!("wrote {} ({} bytes)", path.display(), bytes.len());
    Ok(())
}

fn dash_effect() -> Option<skia::PathEffect> {
    skia::PathEffect::dash(&[12.0, 6.0], 0.0)
}

fn draw_grid(
    canvas: &skia::Canvas,
    plot: &RectI32,
    x: &Axis,
    y: &Axis,
    sx: &LinearScale,
    sy: &LinearScale,
    theme: &Theme,
) {
    let mut paint = skia::Paint::default();
    paint.set_color(theme.grid);
    paint.set_anti_alias(true);
    paint.set_stroke_width(1.0);

    let (l, t, r, b) = (plot.left as f32, plot.top as f32, plot.right as f32, plot.bottom as f32);
    if x.grid {
        for (v, _) in x.ticks() {
            let px = sx.to_px(v);
            if px >= l && px <= r {
                canvas.draw_line((px, t), (px, b), &paint);
            }
        }
    }
    if y.grid {
        for (v, _) in y.ticks() {
            let py = sy.to_px(v);
            if py >= t && py <= b {
                canvas.draw_line((l, py), (r, py), &paint);
            }
        }
    }
}

fn draw_axes(
    canvas: &skia::Canvas,
    plot: &RectI32,
    x: &Axis,
    y: &Axis,
    sx: &LinearScale,
    sy: &LinearScale,
    theme: &Theme,
) {
    let mut axis_paint = skia::Paint::default();
    axis_paint.set_color(theme.axis_line);
    axis_paint.set_anti_alias(true);
    axis_paint.set_style(skia::paint::Style::Stroke);
    axis_paint.set_stroke_width(1.5);

    // Frame around the plot area
    canvas.draw_rect(plot.to_skia(), &axis_paint);

    let (l, t, r, b) = (plot.left as f32, plot.top as f32, plot.right as f32, plot.bottom as f32);
    for (v, _) in x.ticks() {
        let px = sx.to_px(v);
        if px >= l && px <= r {
            canvas.draw_line((px, b), (px, b + TICK_LEN), &axis_paint);
        }
    }
    for (v, _) in y.ticks() {
        let py = sy.to_px(v);
        if py >= t && py <= b {
            canvas.draw_line((l - TICK_LEN, py), (l, py), &axis_paint);
        }
    }
}

#[allow(clippy::too_many_arguments)]
fn draw_tick_labels(
    canvas: &skia::Canvas,
    shaper: &TextShaper,
    plot: &RectI32,
    x: &Axis,
    y: &Axis,
    sx: &LinearScale,
    sy: &LinearScale,
    theme: &Theme,
) {
    let (l, t, r, b) = (plot.left as f32, plot.top as f32, plot.right as f32, plot.bottom as f32);
    for (v, label) in x.ticks() {
        let px = sx.to_px(v);
        if px < l - 0.5 || px > r + 0.5 { continue; }
        if x.tick_rotation.abs() > f32::EPSILON {
            let anchor = (px, b + TICK_LEN + TICK_SIZE * 0.9);
            shaper.draw_rotated(canvas, &label, anchor, TICK_SIZE, theme.tick, Align::Right, x.tick_rotation);
        } else {
            shaper.draw(canvas, &label, (px, b + TICK_LEN + TICK_SIZE * 1.2), TICK_SIZE, theme.tick, Align::Center);
        }
    }
    for (v, label) in y.ticks() {
        let py = sy.to_px(v);
        if py < t - 0.5 || py > b + 0.5 { continue; }
        shaper.draw(canvas, &label, (l - TICK_LEN - 4.0, py + TICK_SIZE * 0.35), TICK_SIZE, theme.tick, Align::Right);
    }
}

fn draw_axis_labels(
    canvas: &skia::Canvas,
    shaper: &TextShaper,
    bounds: &RectI32,
    plot: &RectI32,
    x: &Axis,
    y: &Axis,
    theme: &Theme,
) {
    let cx = (plot.left + plot.right) as f32 * 0.5;
    let cy = (plot.top + plot.bottom) as f32 * 0.5;
    shaper.draw(canvas, &x.label, (cx, bounds.bottom as f32 - LABEL_SIZE * 0.8), LABEL_SIZE, theme.axis_label, Align::Center);
    shaper.draw_rotated(
        canvas,
        &y.label,
        (bounds.left as f32 + LABEL_SIZE * 1.4, cy),
        LABEL_SIZE,
        theme.axis_label,
        Align::Center,
        90.0,
    );
}

fn draw_bar_series(canvas: &skia::Canvas, sx: &LinearScale, sy: &LinearScale, series: &Series, color: skia::Color) {
    let mut body = skia::Paint::default();
    body.set_anti_alias(true);
    body.set_style(skia::paint::Style::Fill);
    body.set_color(color);

    let half = series.bar_width * 0.5;
    let base = sy.to_px(0.0);
    for (x, y) in series.placed_points() {
        if !x.is_finite() || !y.is_finite() { continue; }
        let left = sx.to_px(x - half);
        let right = sx.to_px(x + half);
        let top = sy.to_px(y);
        let rect = skia::Rect::from_ltrb(left, top.min(base), right, top.max(base));
        canvas.draw_rect(rect, &body);
    }
}

fn draw_line_series(canvas: &skia::Canvas, sx: &LinearScale, sy: &LinearScale, series: &Series, color: skia::Color) {
    let pts: Vec<(f32, f32)> = series
        .placed_points()
        .filter(|(x, y)| x.is_finite() && y.is_finite())
        .map(|(x, y)| (sx.to_px(x), sy.to_px(y)))
        .collect();
    if pts.is_empty() {
        return;
    }

    if pts.len() >= 2 {
        let mut path = skia::Path::new();
        path.move_to(pts[0]);
        for &p in pts.iter().skip(1) {
            path.line_to(p);
        }

        let mut stroke = skia::Paint::default();
        stroke.set_anti_alias(true);
        stroke.set_style(skia::paint::Style::Stroke);
        stroke.set_stroke_width(series.stroke_width);
        stroke.set_color(color);
        canvas.draw_path(&path, &stroke);
    }

    for &p in &pts {
        draw_marker(canvas, p, series.marker, series.marker_size, color);
    }
}

fn draw_marker(canvas: &skia::Canvas, (x, y): (f32, f32), marker: Marker, size: f32, color: skia::Color) {
    let mut fill = skia::Paint::default();
    fill.set_anti_alias(true);
    fill.set_style(skia::paint::Style::Fill);
    fill.set_color(color);
    let half = size * 0.5;
    match marker {
        Marker::None => {}
        Marker::Circle => {
            canvas.draw_circle((x, y), half, &fill);
        }
        Marker::Square => {
            canvas.draw_rect(skia::Rect::from_ltrb(x - half, y - half, x + half, y + half), &fill);
        }
    }
}

fn draw_reference(canvas: &skia::Canvas, plot: &RectI32, sy: &LinearScale, line: &ReferenceLine) {
    let mut stroke = skia::Paint::default();
    stroke.set_anti_alias(true);
    stroke.set_style(skia::paint::Style::Stroke);
    stroke.set_stroke_width(1.5);
    stroke.set_color(line.color);
    if line.dashed {
        stroke.set_path_effect(dash_effect());
    }
    let y = sy.to_px(line.y);
    canvas.draw_line((plot.left as f32, y), (plot.right as f32, y), &stroke);
}

#[derive(Clone, Copy, Debug)]
enum Swatch {
    Box,
    Line { marker: Marker, dashed: bool },
}

#[derive(Clone, Debug)]
struct LegendEntry {
    label: String,
    color: skia::Color,
    swatch: Swatch,
}

fn draw_legend(
    canvas: &skia::Canvas,
    shaper: &TextShaper,
    plot: &RectI32,
    entries: &[LegendEntry],
    theme: &Theme,
    draw_labels: bool,
) {
    if entries.is_empty() {
        return;
    }
    let row_h = LEGEND_SIZE * 1.6;
    let swatch_w = 36.0f32;
    let pad = 10.0f32;
    let text_w = if draw_labels {
        entries
            .iter()
            .map(|e| shaper.measure_width(&e.label, LEGEND_SIZE))
            .fold(0.0f32, f32::max)
    } else {
        0.0
    };
    let w = pad * 3.0 + swatch_w + text_w;
    let h = pad * 2.0 + row_h * entries.len() as f32;
    let left = plot.left as f32 + 12.0;
    let top = plot.top as f32 + 12.0;

    let frame = skia::Rect::from_xywh(left, top, w, h);
    let mut fill = skia::Paint::default();
    fill.set_color(theme.legend_fill);
    canvas.draw_round_rect(frame, 4.0, 4.0, &fill);
    let mut border = skia::Paint::default();
    border.set_anti_alias(true);
    border.set_style(skia::paint::Style::Stroke);
    border.set_color(theme.legend_border);
    canvas.draw_round_rect(frame, 4.0, 4.0, &border);

    for (i, e) in entries.iter().enumerate() {
        let cy = top + pad + row_h * (i as f32 + 0.5);
        let sx0 = left + pad;
        let sx1 = sx0 + swatch_w;
        match e.swatch {
            Swatch::Box => {
                let mut p = skia::Paint::default();
                p.set_color(e.color);
                let r = skia::Rect::from_ltrb(sx0 + 6.0, cy - LEGEND_SIZE * 0.4, sx1 - 6.0, cy + LEGEND_SIZE * 0.4);
                canvas.draw_rect(r, &p);
            }
            Swatch::Line { marker, dashed } => {
                let mut p = skia::Paint::default();
                p.set_anti_alias(true);
                p.set_style(skia::paint::Style::Stroke);
                p.set_stroke_width(2.0);
                p.set_color(e.color);
                if dashed {
                    p.set_path_effect(dash_effect());
                }
                canvas.draw_line((sx0, cy), (sx1, cy), &p);
                draw_marker(canvas, ((sx0 + sx1) * 0.5, cy), marker, 8.0, e.color);
            }
        }
        if draw_labels {
            shaper.draw(canvas, &e.label, (sx1 + pad, cy + LEGEND_SIZE * 0.35), LEGEND_SIZE, theme.axis_label, Align::Left);
        }
    }
}
