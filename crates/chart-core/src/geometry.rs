// File: crates/chart-core/src/geometry.rs
// Summary: Lightweight geometry helpers for pixel math and figure cell layout.

use crate::types::Insets;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RectI32 {
    pub left: i32,
    pub top: i32,
    pub right: i32,
    pub bottom: i32,
}

impl RectI32 {
    pub const fn from_ltrb(left: i32, top: i32, right: i32, bottom: i32) -> Self {
        Self { left, top, right, bottom }
    }
    pub const fn from_ltwh(left: i32, top: i32, width: i32, height: i32) -> Self {
        Self { left, top, right: left + width, bottom: top + height }
    }
    pub const fn width(&self) -> i32 { self.right - self.left }
    pub const fn height(&self) -> i32 { self.bottom - self.top }

    /// Shrink by `insets`. Never inverts: a too-small rect collapses to a 1px strip.
    pub fn inset(&self, insets: &Insets) -> Self {
        let left = self.left + insets.left as i32;
        let top = self.top + insets.top as i32;
        let right = (self.right - insets.right as i32).max(left + 1);
        let bottom = (self.bottom - insets.bottom as i32).max(top + 1);
        Self { left, top, right, bottom }
    }

    /// Split into a `rows` x `cols` grid, row-major.
    pub fn grid_cells(&self, rows: usize, cols: usize) -> Vec<RectI32> {
        let rows = rows.max(1);
        let cols = cols.max(1);
        let cw = self.width() / cols as i32;
        let ch = self.height() / rows as i32;
        let mut out = Vec::with_capacity(rows * cols);
        for r in 0..rows {
            for c in 0..cols {
                out.push(Self::from_ltwh(self.left + c as i32 * cw, self.top + r as i32 * ch, cw, ch));
            }
        }
        out
    }

    pub fn to_skia(&self) -> skia_safe::Rect {
        skia_safe::Rect::from_ltrb(self.left as f32, self.top as f32, self.right as f32, self.bottom as f32)
    }
}
