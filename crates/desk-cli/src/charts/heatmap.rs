//! Shade-grid heatmaps.

use desk_core::dashboard::HeatmapCell;

use super::{ChartOptions, NO_DATA, finite, fmt_value, label_width, pad_label, scale};

const SHADES: [char; 5] = [' ', '░', '▒', '▓', '█'];

/// Rows and columns in first-seen order; each cell two characters wide.
#[must_use]
pub fn render(cells: &[HeatmapCell], _opts: ChartOptions) -> String {
    if cells.is_empty() {
        return NO_DATA.to_string();
    }

    let mut rows: Vec<&str> = Vec::new();
    let mut columns: Vec<&str> = Vec::new();
    for cell in cells {
        if !rows.contains(&cell.row.as_str()) {
            rows.push(&cell.row);
        }
        if !columns.contains(&cell.column.as_str()) {
            columns.push(&cell.column);
        }
    }

    let max = cells.iter().map(|c| finite(c.value)).fold(0.0_f64, f64::max);
    let value_at = |row: &str, column: &str| -> f64 {
        cells
            .iter()
            .filter(|c| c.row == row && c.column == column)
            .map(|c| finite(c.value))
            .sum()
    };

    let lw = label_width(rows.iter().copied());
    let mut lines = Vec::with_capacity(rows.len() + 2);
    let header: String = columns
        .iter()
        .map(|c| c.chars().next().unwrap_or(' '))
        .map(|c| format!("{c} "))
        .collect();
    lines.push(format!("{} {}", " ".repeat(lw), header.trim_end()));

    for row in &rows {
        let shades: String = columns
            .iter()
            .map(|column| {
                let shade = SHADES[scale(value_at(row, column), max, SHADES.len() - 1)];
                format!("{shade}{shade}")
            })
            .collect();
        lines.push(format!("{} {shades}", pad_label(row, lw)));
    }
    lines.push(format!(
        "{} {} 0 … {}",
        " ".repeat(lw),
        SHADES[1..].iter().collect::<String>(),
        fmt_value(max)
    ));
    lines.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cell(row: &str, column: &str, value: f64) -> HeatmapCell {
        HeatmapCell {
            row: row.into(),
            column: column.into(),
            value,
        }
    }

    #[test]
    fn hottest_cell_is_full_block() {
        let out = render(
            &[cell("Mon", "09", 1.0), cell("Mon", "10", 8.0), cell("Tue", "09", 0.0)],
            ChartOptions::default(),
        );
        let lines: Vec<&str> = out.lines().collect();
        assert_eq!(lines.len(), 4);
        assert!(lines[1].starts_with("Mon"));
        assert!(lines[1].contains("██"));
        assert!(lines[2].starts_with("Tue"));
        assert!(!lines[2].contains('█'));
        assert!(lines[3].ends_with("0 … 8"));
    }

    #[test]
    fn empty_is_no_data() {
        assert_eq!(render(&[], ChartOptions::default()), NO_DATA);
    }

    #[test]
    fn all_zero_renders_blank_grid() {
        let out = render(&[cell("Mon", "09", 0.0)], ChartOptions::default());
        assert!(out.lines().nth(1).is_some_and(|l| l.trim() == "Mon"));
    }
}
