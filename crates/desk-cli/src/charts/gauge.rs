//! Bounded progress gauge with threshold coloring.

use desk_core::enums::Color;

use super::{ChartOptions, NO_DATA, fmt_value, scale};

/// Bands of a gauge: below `warn` is red, below `good` yellow, else green.
#[derive(Clone, Copy, Debug)]
pub struct Thresholds {
    pub warn: f64,
    pub good: f64,
}

impl Thresholds {
    fn color(self, value: f64) -> Color {
        if value < self.warn {
            Color::Red
        } else if value < self.good {
            Color::Yellow
        } else {
            Color::Green
        }
    }
}

/// `[██████░░░░] 62.5%` style gauge for `value` within `0..=max`.
#[must_use]
pub fn render(value: Option<f64>, max: f64, thresholds: Thresholds, opts: ChartOptions) -> String {
    let Some(value) = value.filter(|v| v.is_finite()) else {
        return NO_DATA.to_string();
    };
    let clamped = value.clamp(0.0, max.max(0.0));
    let filled = scale(clamped, max, opts.width);
    let bar = format!(
        "{}{}",
        "█".repeat(filled),
        "░".repeat(opts.width.saturating_sub(filled))
    );
    let pct = if max > 0.0 { clamped / max * 100.0 } else { 0.0 };
    format!(
        "[{}] {}%",
        opts.paint(&bar, thresholds.color(pct)),
        fmt_value(pct)
    )
}
