use colored::Colorize;

use crate::features::assessment::{BurnoutResult, ManipulationResult};
use crate::features::breathing::Technique;
use crate::features::journal::{Boundaries, DefensePlan, EmotionEntry};
use crate::features::research::{render_dataset, Dataset};

const RULE_WIDTH: usize = 40;
const CHART_WIDTH: usize = 30;

fn rule() -> String {
    "─".repeat(RULE_WIDTH)
}

#[allow(clippy::cast_precision_loss)]
fn seconds(millis: u64) -> String {
    if millis % 1000 == 0 {
        format!("{}s", millis / 1000)
    } else {
        format!("{:.1}s", millis as f64 / 1000.0)
    }
}

fn cycle_millis(technique: &Technique) -> u64 {
    technique.phases.iter().map(|p| p.duration_millis).sum()
}

/// Format the technique table
pub fn format_techniques_pretty(techniques: &[Technique]) -> String {
    let mut lines = vec![format!("Breathing techniques ({})", techniques.len()), rule()];

    for technique in techniques {
        lines.push(format!(
            "{}  {}  {}",
            technique.key.cyan().bold(),
            technique.name.bold(),
            format!("cycle {}", seconds(cycle_millis(technique))).dimmed()
        ));
        for phase in &technique.phases {
            lines.push(format!(
                "    {:<8} {:>5}  {}",
                phase.action.as_str().dimmed(),
                seconds(phase.duration_millis),
                phase.label
            ));
        }
    }

    lines.join("\n")
}

/// Format a checklist result
pub fn format_checklist_pretty(result: &ManipulationResult) -> String {
    let color = result.kind.color();
    let lines = [
        result.headline().bold().to_string(),
        rule(),
        format!("{} {}", result.kind.icon().color(color), result.message.color(color)),
    ];
    lines.join("\n")
}

/// Format a burnout result
pub fn format_burnout_pretty(result: &BurnoutResult) -> String {
    let color = result.risk.kind().color();
    let mut lines = vec![
        format!(
            "{} {}",
            result.summary().color(color).bold(),
            format!("{}%", result.percentage).dimmed()
        ),
        rule(),
        "Рекомендации:".bold().to_string(),
    ];
    lines.extend(result.recommendations.iter().map(|r| format!("  • {r}")));
    lines.join("\n")
}

/// Format diary entries, newest first
pub fn format_diary_pretty(entries: &[EmotionEntry]) -> String {
    if entries.is_empty() {
        return "Пока нет сохраненных записей.".dimmed().to_string();
    }

    let mut lines = vec![format!("Дневник эмоций ({})", entries.len()), rule()];
    for entry in entries {
        let mut header = entry.timestamp.dimmed().to_string();
        if !entry.emotions.is_empty() {
            header.push_str(&format!("  {}", entry.emotions.join(", ").cyan()));
        }
        lines.push(header);
        lines.push(format!("  {}", entry.text));
    }
    lines.join("\n")
}

/// Format saved boundaries
pub fn format_boundaries_pretty(boundaries: Option<&Boundaries>) -> String {
    let Some(boundaries) = boundaries.filter(|b| !b.is_empty()) else {
        return "Сохраненные границы не найдены.".dimmed().to_string();
    };

    let mut lines = vec!["Мои границы".bold().to_string(), rule()];
    for (label, text) in boundaries.entries() {
        lines.push(format!("{}: {}", label.bold(), text));
    }
    lines.join("\n")
}

/// Format the defense plan
pub fn format_plan_pretty(plan: Option<&DefensePlan>) -> String {
    let Some(plan) = plan else {
        return "План самообороны еще не составлен.".dimmed().to_string();
    };

    let mut lines = vec!["План самообороны".bold().to_string(), rule()];
    let fields = [
        ("Триггеры", &plan.triggers),
        ("Автоматические ответы", &plan.auto_responses),
        ("Поддержка", &plan.support),
    ];
    for (label, text) in fields {
        let value = if text.is_empty() {
            "—".dimmed().to_string()
        } else {
            text.clone()
        };
        lines.push(format!("{}: {}", label.bold(), value));
    }
    if let Some(notice) = plan.loaded_notice() {
        lines.push(String::new());
        lines.push(notice.render());
    }
    lines.join("\n")
}

/// Format research datasets as terminal charts
pub fn format_datasets_pretty(datasets: &[&Dataset]) -> String {
    datasets
        .iter()
        .map(|d| render_dataset(d, CHART_WIDTH))
        .collect::<Vec<_>>()
        .join("\n\n")
}
