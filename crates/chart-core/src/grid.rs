// File: crates/chart-core/src/grid.rs
// Summary: Simple grid/tick layout helpers.

/// Upper bound on ticks per axis; ranges that would need more get none.
const MAX_TICKS: i64 = 1_000;

/// Pick a 1/2/5 x 10^k step giving roughly `target` intervals over [min, max].
pub fn nice_step(min: f64, max: f64, target: usize) -> f64 {
    let span = (max - min).abs();
    if !span.is_finite() || span == 0.0 { return 1.0; }
    let raw = span / target.max(1) as f64;
    let mag = 10f64.powf(raw.log10().floor());
    let norm = raw / mag;
    let nice = if norm <= 1.0 { 1.0 } else if norm <= 2.0 { 2.0 } else if norm <= 5.0 { 5.0 } else { 10.0 };
    nice * mag
}

/// Tick positions on multiples of `nice_step` that fall inside [min, max].
/// Empty when the range is not finite.
pub fn nice_ticks(min: f64, max: f64, target: usize) -> Vec<f64> {
    let step = nice_step(min, max, target);
    let (lo, hi) = if min <= max { (min, max) } else { (max, min) };
    if !lo.is_finite() || !hi.is_finite() || !step.is_finite() || step <= 0.0 {
        return Vec::new();
    }
    let first = (lo / step).ceil();
    let last = (hi / step).floor();
    if !first.is_finite() || !last.is_finite() || last - first > MAX_TICKS as f64 {
        return Vec::new();
    }
    let (first, last) = (first as i64, last as i64);
    (first..=last)
        .map(|k| k as f64 * step)
        // snap -0.0 and float noise like 0.30000000000000004
        .map(|v| if v.abs() < step * 1e-9 { 0.0 } else { v })
        .collect()
}

/// Format a tick value with just enough decimals for `step`.
pub fn format_tick(value: f64, step: f64) -> String {
    let decimals = if step >= 1.0 { 0 } else { (-step.log10()).ceil().max(0.0) as usize };
    format!("{:.*}", decimals, value)
}
