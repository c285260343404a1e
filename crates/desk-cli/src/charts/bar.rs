//! Horizontal bar charts.

use super::{ChartOptions, NO_DATA, fmt_value, label_width, pad_label, scale};
use crate::output::table::tag_color;

/// One labelled bar per item, scaled to the largest value.
#[must_use]
pub fn render(items: &[(String, f64)], opts: ChartOptions) -> String {
    if items.is_empty() {
        return NO_DATA.to_string();
    }
    let max = items.iter().map(|(_, v)| *v).fold(0.0_f64, f64::max);
    let lw = label_width(items.iter().map(|(l, _)| l.as_str()));
    items
        .iter()
        .map(|(label, value)| {
            let cells = scale(*value, max, opts.width);
            let mut bar = "█".repeat(cells);
            if cells == 0 && *value > 0.0 {
                bar.push('▏');
            }
            let bar = match tag_color(label) {
                Some(color) => opts.paint(&bar, color),
                None => bar,
            };
            format!("{} {bar} {}", pad_label(label, lw), fmt_value(*value))
        })
        .collect::<Vec<_>>()
        .join("\n")
}
