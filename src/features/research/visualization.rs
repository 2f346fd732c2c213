//! Terminal renderings of the research datasets.

use super::datasets::{ChartKind, Dataset};

const FULL_BLOCK: char = '█';
const LIGHT_SHADE: char = '░';
const BAR_CHARS: [char; 8] = [' ', '▁', '▂', '▃', '▄', '▅', '▆', '▇'];

/// Render a horizontal bar chart scaled to `scale_max`.
///
/// Labels are padded by character count, so Cyrillic labels line up.
#[must_use]
#[allow(
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss,
    clippy::cast_precision_loss
)]
pub fn render_bar_chart(
    data: &[(&str, u32)],
    scale_max: u32,
    bar_width: usize,
    suffix: &str,
) -> String {
    if data.is_empty() {
        return String::new();
    }

    let label_width = data
        .iter()
        .map(|(label, _)| label.chars().count())
        .max()
        .unwrap_or(0);
    let scale_max = scale_max.max(1);

    data.iter()
        .map(|(label, value)| {
            let filled = ((f64::from(*value) / f64::from(scale_max)) * bar_width as f64)
                .round()
                .min(bar_width as f64) as usize;
            let bar: String = std::iter::repeat(FULL_BLOCK)
                .take(filled)
                .chain(std::iter::repeat(LIGHT_SHADE).take(bar_width - filled))
                .collect();
            format!("{label:<label_width$} │{bar} {value}{suffix}")
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Render a sparkline.
#[must_use]
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub fn render_sparkline(values: &[u32]) -> String {
    let max_value = values.iter().copied().max().unwrap_or(1).max(1);

    values
        .iter()
        .map(|&v| {
            if v == 0 {
                BAR_CHARS[0]
            } else {
                let level = (f64::from(v) / f64::from(max_value) * 7.0).round() as usize;
                BAR_CHARS[level.clamp(1, 7)]
            }
        })
        .collect()
}

/// Render a dataset in the style its chart type calls for.
#[must_use]
pub fn render_dataset(dataset: &Dataset, bar_width: usize) -> String {
    let rule = "─".repeat(dataset.title.chars().count().max(20));
    let mut lines = vec![dataset.title.to_string(), rule];

    let suffix = if dataset.is_percent() { "%" } else { "/100" };
    let scale_max = match dataset.kind {
        ChartKind::Doughnut => dataset.total(),
        ChartKind::Bar | ChartKind::Line | ChartKind::Radar => 100,
    };

    if dataset.kind == ChartKind::Line {
        let values: Vec<u32> = dataset.points.iter().map(|(_, v)| *v).collect();
        lines.push(format!("{}  {}", dataset.series, render_sparkline(&values)));
    }
    lines.push(render_bar_chart(dataset.points, scale_max, bar_width, suffix));

    lines.join("\n")
}
