// File: crates/chart-core/src/scale.rs
// Summary: Linear value-to-pixel transforms for the X and Y axes.

use crate::geometry::RectI32;
use crate::Axis;

/// Maps the value range [v0, v1] onto the pixel range [px0, px1].
/// Either range may be descending (Y grows downwards on screen).
#[derive(Clone, Copy, Debug)]
pub struct LinearScale {
    pub px0: f32,
    pub px1: f32,
    pub v0: f64,
    pub v1: f64,
}

impl LinearScale {
    pub fn new(px0: f32, px1: f32, v0: f64, v1: f64) -> Self {
        let mut s = Self { px0, px1, v0, v1 };
        if s.v1 == s.v0 { s.v1 = s.v0 + 1.0; }
        s
    }

    /// Horizontal scale across `plot` for `axis`.
    pub fn horizontal(plot: &RectI32, axis: &Axis) -> Self {
        Self::new(plot.left as f32, plot.right as f32, axis.min, axis.max)
    }

    /// Vertical scale across `plot` for `axis`, larger values upwards.
    pub fn vertical(plot: &RectI32, axis: &Axis) -> Self {
        Self::new(plot.bottom as f32, plot.top as f32, axis.min, axis.max)
    }

    #[inline]
    pub fn to_px(&self, v: f64) -> f32 {
        self.px0 + ((v - self.v0) / (self.v1 - self.v0)) as f32 * (self.px1 - self.px0)
    }
}
