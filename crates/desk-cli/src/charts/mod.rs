//! Text chart primitives for dashboards.
//!
//! Every renderer returns a `String`, never panics, and renders
//! [`NO_DATA`] for empty input. Non-finite values are treated as zero.

pub mod bar;
pub mod donut;
pub mod gauge;
pub mod heatmap;
pub mod line;
pub mod radar;
pub mod scatter;

use desk_core::enums::Color;

use crate::output::table::paint;

pub const NO_DATA: &str = "(no data)";

#[derive(Clone, Copy, Debug)]
pub struct ChartOptions {
    /// Columns available for the plot area (labels excluded).
    pub width: usize,
    pub color: bool,
}

impl Default for ChartOptions {
    fn default() -> Self {
        Self {
            width: 40,
            color: false,
        }
    }
}

impl ChartOptions {
    pub(crate) fn paint(self, text: &str, color: Color) -> String {
        if self.color {
            paint(text, color)
        } else {
            text.to_string()
        }
    }
}

pub(crate) fn finite(value: f64) -> f64 {
    if value.is_finite() { value } else { 0.0 }
}

/// Map `value` in `0..=max` onto `0..=cells`, rounding to nearest.
pub(crate) fn scale(value: f64, max: f64, cells: usize) -> usize {
    let value = finite(value).max(0.0);
    if max <= 0.0 || !max.is_finite() {
        return 0;
    }
    #[allow(clippy::cast_precision_loss, clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    let scaled = ((value / max).min(1.0) * cells as f64).round() as usize;
    scaled.min(cells)
}

/// Compact number formatting: integers without decimals, others with one.
pub(crate) fn fmt_value(value: f64) -> String {
    let value = finite(value);
    if (value.fract()).abs() < f64::EPSILON {
        format!("{value:.0}")
    } else {
        format!("{value:.1}")
    }
}

pub(crate) fn label_width<'a>(labels: impl Iterator<Item = &'a str>) -> usize {
    labels.map(|l| l.chars().count()).max().unwrap_or(0).min(24)
}

pub(crate) fn pad_label(label: &str, width: usize) -> String {
    let mut out: String = label.chars().take(width).collect();
    let len = out.chars().count();
    out.push_str(&" ".repeat(width - len));
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scale_clamps_and_rounds() {
        assert_eq!(scale(5.0, 10.0, 10), 5);
        assert_eq!(scale(20.0, 10.0, 10), 10);
        assert_eq!(scale(-3.0, 10.0, 10), 0);
        assert_eq!(scale(1.0, 0.0, 10), 0);
        assert_eq!(scale(f64::NAN, 10.0, 10), 0);
    }

    #[test]
    fn values_format_compactly() {
        assert_eq!(fmt_value(12.0), "12");
        assert_eq!(fmt_value(91.46), "91.5");
        assert_eq!(fmt_value(f64::INFINITY), "0");
    }
}
