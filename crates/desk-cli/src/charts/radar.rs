//! Radar charts, flattened to one normalized bar per axis.

use desk_core::dashboard::RadarAxis;

use super::{ChartOptions, NO_DATA, finite, fmt_value, label_width, pad_label, scale};

/// Each axis is scaled against its own `max`, or the largest value when unset.
#[must_use]
pub fn render(axes: &[RadarAxis], opts: ChartOptions) -> String {
    if axes.is_empty() {
        return NO_DATA.to_string();
    }
    let shared_max = axes.iter().map(|a| finite(a.value)).fold(0.0_f64, f64::max);
    let lw = label_width(axes.iter().map(|a| a.axis.as_str()));
    axes.iter()
        .map(|axis| {
            let max = axis.max.map_or(shared_max, finite);
            let filled = scale(axis.value, max, opts.width);
            format!(
                "{} ┤{}{} {}/{}",
                pad_label(&axis.axis, lw),
                "■".repeat(filled),
                "·".repeat(opts.width - filled),
                fmt_value(axis.value),
                fmt_value(max)
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn axis(name: &str, value: f64, max: Option<f64>) -> RadarAxis {
        RadarAxis {
            axis: name.into(),
            value,
            max,
        }
    }

    #[test]
    fn axes_normalize_against_their_own_max() {
        let out = render(
            &[axis("speed", 5.0, Some(10.0)), axis("quality", 4.0, Some(4.0))],
            ChartOptions {
                width: 10,
                color: false,
            },
        );
        let lines: Vec<&str> = out.lines().collect();
        assert_eq!(lines[0], "speed   ┤■■■■■····· 5/10");
        assert_eq!(lines[1], "quality ┤■■■■■■■■■■ 4/4");
    }

    #[test]
    fn missing_max_uses_largest_value() {
        let out = render(
            &[axis("a", 2.0, None), axis("b", 8.0, None)],
            ChartOptions {
                width: 4,
                color: false,
            },
        );
        assert!(out.lines().next().is_some_and(|l| l.contains("■···")));
    }

    #[test]
    fn empty_is_no_data() {
        assert_eq!(render(&[], ChartOptions::default()), NO_DATA);
    }
}
