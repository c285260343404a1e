//! Scatter plots on a character grid.

use desk_core::dashboard::ScatterPoint;

use super::{ChartOptions, NO_DATA, finite, fmt_value, scale};

/// Plot `points` on a `width` x `height` grid. Overlapping points darken.
#[must_use]
pub fn render(
    points: &[ScatterPoint],
    height: usize,
    x_label: &str,
    y_label: &str,
    opts: ChartOptions,
) -> String {
    let points: Vec<(f64, f64)> = points
        .iter()
        .map(|p| (finite(p.x), finite(p.y)))
        .collect();
    if points.is_empty() || opts.width == 0 || height == 0 {
        return NO_DATA.to_string();
    }

    let max_x = points.iter().map(|(x, _)| *x).fold(0.0_f64, f64::max);
    let max_y = points.iter().map(|(_, y)| *y).fold(0.0_f64, f64::max);

    let mut hits = vec![vec![0_u32; opts.width]; height];
    for (x, y) in &points {
        let col = scale(*x, max_x, opts.width - 1);
        let row = scale(*y, max_y, height - 1);
        hits[height - 1 - row][col] += 1;
    }

    let y_top = fmt_value(max_y);
    let gutter = y_top.len().max(1);
    let mut lines = Vec::with_capacity(height + 2);
    for (idx, row) in hits.iter().enumerate() {
        let axis = if idx == 0 {
            y_top.clone()
        } else if idx == height - 1 {
            "0".to_string()
        } else {
            String::new()
        };
        let cells: String = row
            .iter()
            .map(|hits| match hits {
                0 => ' ',
                1 => '•',
                2..=3 => '●',
                _ => '◉',
            })
            .collect();
        lines.push(format!("{axis:>gutter$} │{}", cells.trim_end()));
    }
    lines.push(format!("{} └{}", " ".repeat(gutter), "─".repeat(opts.width)));
    lines.push(format!(
        "{} 0{}{}   x: {x_label}, y: {y_label}",
        " ".repeat(gutter),
        " ".repeat(opts.width.saturating_sub(fmt_value(max_x).len() + 1)),
        fmt_value(max_x)
    ));
    lines.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pt(x: f64, y: f64) -> ScatterPoint {
        ScatterPoint { x, y, label: None }
    }

    fn opts() -> ChartOptions {
        ChartOptions {
            width: 10,
            color: false,
        }
    }

    #[test]
    fn extremes_land_in_corners() {
        let out = render(&[pt(0.0, 0.0), pt(10.0, 10.0)], 5, "hours", "days", opts());
        let lines: Vec<&str> = out.lines().collect();
        assert!(lines[0].ends_with('•'), "top-right point: {:?}", lines[0]);
        assert!(lines[4].ends_with("│•"), "bottom-left point: {:?}", lines[4]);
        assert!(lines[6].contains("x: hours, y: days"));
    }

    #[test]
    fn overlapping_points_darken() {
        let out = render(&[pt(1.0, 1.0), pt(1.0, 1.0)], 3, "x", "y", opts());
        assert!(out.contains('●'));
    }

    #[test]
    fn empty_or_degenerate_input() {
        assert_eq!(render(&[], 5, "x", "y", opts()), NO_DATA);
        assert_eq!(render(&[pt(1.0, 1.0)], 0, "x", "y", opts()), NO_DATA);
        let zero = render(&[pt(0.0, 0.0)], 3, "x", "y", opts());
        assert!(zero.contains('•'));
    }
}
