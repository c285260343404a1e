//! Donut charts, drawn as one proportional segmented bar plus a legend.

use desk_core::enums::Color;

use super::{ChartOptions, NO_DATA, finite, fmt_value, label_width, pad_label};
use crate::output::table::tag_color;

const PALETTE: [Color; 6] = [
    Color::Blue,
    Color::Green,
    Color::Yellow,
    Color::Magenta,
    Color::Cyan,
    Color::Red,
];
const GLYPHS: [char; 6] = ['█', '▓', '▒', '░', '▚', '▞'];

/// Segments proportional to each value's share of the total.
#[must_use]
pub fn render(segments: &[(String, f64)], opts: ChartOptions) -> String {
    let segments: Vec<(&str, f64)> = segments
        .iter()
        .map(|(l, v)| (l.as_str(), finite(*v).max(0.0)))
        .filter(|(_, v)| *v > 0.0)
        .collect();
    let total: f64 = segments.iter().map(|(_, v)| v).sum();
    if segments.is_empty() || total <= 0.0 {
        return NO_DATA.to_string();
    }

    let widths = apportion(&segments, total, opts.width.max(segments.len()));
    let mut ring = String::new();
    let mut legend = Vec::with_capacity(segments.len());
    let lw = label_width(segments.iter().map(|(l, _)| *l));

    for (idx, ((label, value), cells)) in segments.iter().zip(widths).enumerate() {
        let color = tag_color(label).unwrap_or(PALETTE[idx % PALETTE.len()]);
        let glyph = if opts.color { '█' } else { GLYPHS[idx % GLYPHS.len()] };
        ring.push_str(&opts.paint(&glyph.to_string().repeat(cells), color));
        legend.push(format!(
            "{} {} {:>5.1}%  {}",
            opts.paint(&glyph.to_string(), color),
            pad_label(label, lw),
            value / total * 100.0,
            fmt_value(*value)
        ));
    }

    format!("{ring}\n{}", legend.join("\n"))
}

/// Largest-remainder split of `width` cells; every segment gets at least one.
fn apportion(segments: &[(&str, f64)], total: f64, width: usize) -> Vec<usize> {
    #[allow(clippy::cast_precision_loss)]
    let exact: Vec<f64> = segments
        .iter()
        .map(|(_, v)| v / total * width as f64)
        .collect();
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    let mut cells: Vec<usize> = exact.iter().map(|e| (e.floor() as usize).max(1)).collect();

    let mut order: Vec<usize> = (0..segments.len()).collect();
    order.sort_by(|a, b| {
        let ra = exact[*a] - exact[*a].floor();
        let rb = exact[*b] - exact[*b].floor();
        rb.total_cmp(&ra)
    });

    let mut assigned: usize = cells.iter().sum();
    for idx in order.iter().cycle().take(segments.len() * 2) {
        if assigned >= width {
            break;
        }
        cells[*idx] += 1;
        assigned += 1;
    }
    // Minimum-one rounding can overshoot; take back from the widest.
    while assigned > width {
        let Some((widest, _)) = cells.iter().enumerate().max_by_key(|(_, c)| **c) else {
            break;
        };
        if cells[widest] <= 1 {
            break;
        }
        cells[widest] -= 1;
        assigned -= 1;
    }
    cells
}

#[cfg(test)]
mod tests {
    use super::*;

    fn opts() -> ChartOptions {
        ChartOptions {
            width: 20,
            color: false,
        }
    }

    #[test]
    fn ring_fills_width_and_legend_lists_shares() {
        let out = render(
            &[("OPEN".into(), 3.0), ("CLOSED".into(), 1.0)],
            opts(),
        );
        let lines: Vec<&str> = out.lines().collect();
        assert_eq!(lines[0].chars().count(), 20);
        assert_eq!(lines[0].chars().filter(|c| *c == '█').count(), 15);
        assert!(lines[1].contains("OPEN") && lines[1].contains("75.0%"));
        assert!(lines[2].contains("CLOSED") && lines[2].contains("25.0%"));
    }

    #[test]
    fn tiny_share_still_gets_a_cell() {
        let out = render(&[("big".into(), 1000.0), ("small".into(), 1.0)], opts());
        let ring = out.lines().next().unwrap_or_default();
        assert_eq!(ring.chars().count(), 20);
        assert!(ring.contains('▓'));
    }

    #[test]
    fn zero_total_is_no_data() {
        assert_eq!(render(&[("a".into(), 0.0)], opts()), NO_DATA);
        assert_eq!(render(&[], opts()), NO_DATA);
    }
}
