//! Line charts as sparklines, one row per series.

use super::{ChartOptions, NO_DATA, finite, fmt_value, label_width, pad_label};

const TICKS: [char; 8] = ['▁', '▂', '▃', '▄', '▅', '▆', '▇', '█'];

pub struct Series<'a> {
    pub name: &'a str,
    pub values: Vec<f64>,
}

/// Sparkline of `values`, resampled to at most `width` points.
#[must_use]
pub fn sparkline(values: &[f64], width: usize) -> String {
    if values.is_empty() || width == 0 {
        return String::new();
    }
    let points = resample(values, width);
    let (min, max) = points
        .iter()
        .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), v| {
            (lo.min(*v), hi.max(*v))
        });
    let span = max - min;
    points
        .iter()
        .map(|v| {
            if span <= 0.0 {
                return if max > 0.0 { TICKS[3] } else { TICKS[0] };
            }
            #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
            let idx = (((v - min) / span) * 7.0).round() as usize;
            TICKS[idx.min(7)]
        })
        .collect()
}

/// Several series sharing an x axis, each with its own min..max annotation.
#[must_use]
pub fn render(series: &[Series<'_>], opts: ChartOptions) -> String {
    let series: Vec<&Series<'_>> = series.iter().filter(|s| !s.values.is_empty()).collect();
    if series.is_empty() {
        return NO_DATA.to_string();
    }
    let lw = label_width(series.iter().map(|s| s.name));
    series
        .iter()
        .map(|s| {
            let values: Vec<f64> = s.values.iter().copied().map(finite).collect();
            let min = values.iter().copied().fold(f64::INFINITY, f64::min);
            let max = values.iter().copied().fold(f64::NEG_INFINITY, f64::max);
            format!(
                "{} {} {}..{}",
                pad_label(s.name, lw),
                sparkline(&values, opts.width),
                fmt_value(min),
                fmt_value(max)
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Average adjacent points down to `width` buckets.
fn resample(values: &[f64], width: usize) -> Vec<f64> {
    let values: Vec<f64> = values.iter().copied().map(finite).collect();
    if values.len() <= width {
        return values;
    }
    (0..width)
        .map(|bucket| {
            let start = bucket * values.len() / width;
            let end = ((bucket + 1) * values.len() / width).max(start + 1);
            let slice = &values[start..end];
            #[allow(clippy::cast_precision_loss)]
            let len = slice.len() as f64;
            slice.iter().sum::<f64>() / len
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sparkline_spans_lowest_to_highest_tick() {
        let line = sparkline(&[0.0, 5.0, 10.0], 10);
        assert_eq!(line, "▁▅█");
    }

    #[test]
    fn flat_series_renders_mid_ticks() {
        assert_eq!(sparkline(&[3.0, 3.0], 10), "▄▄");
        assert_eq!(sparkline(&[0.0, 0.0], 10), "▁▁");
    }

    #[test]
    fn long_series_is_resampled_to_width() {
        let values: Vec<f64> = (0..100).map(f64::from).collect();
        assert_eq!(sparkline(&values, 20).chars().count(), 20);
    }

    #[test]
    fn empty_input_renders_no_data() {
        assert_eq!(render(&[], ChartOptions::default()), NO_DATA);
        let empty = Series {
            name: "created",
            values: vec![],
        };
        assert_eq!(render(&[empty], ChartOptions::default()), NO_DATA);
    }

    #[test]
    fn series_rows_are_labelled() {
        let out = render(
            &[
                Series {
                    name: "created",
                    values: vec![1.0, 4.0],
                },
                Series {
                    name: "resolved",
                    values: vec![0.0, 2.0],
                },
            ],
            ChartOptions::default(),
        );
        let lines: Vec<&str> = out.lines().collect();
        assert!(lines[0].starts_with("created "));
        assert!(lines[0].ends_with("1..4"));
        assert!(lines[1].starts_with("resolved"));
    }
}
