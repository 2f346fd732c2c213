//! JSON output formatting for psysafe.

use serde::Serialize;
use serde_json::json;

use crate::error::PsySafeError;
use crate::features::breathing::Technique;
use crate::features::journal::EmotionEntry;
use crate::features::research::Dataset;

/// Serialize any value as pretty JSON
///
/// # Errors
///
/// Returns `PsySafeError::Parse` if JSON serialization fails.
pub fn to_json<T: Serialize + ?Sized>(value: &T) -> Result<String, PsySafeError> {
    Ok(serde_json::to_string_pretty(value)?)
}

/// Format the technique table as JSON, with cycle lengths in milliseconds
///
/// # Errors
///
/// Returns `PsySafeError::Parse` if JSON serialization fails.
pub fn format_techniques_json(techniques: &[Technique]) -> Result<String, PsySafeError> {
    let items: Vec<_> = techniques
        .iter()
        .map(|t| {
            json!({
                "key": t.key,
                "name": t.name,
                "cycle_millis": t.cycle_duration().as_millis(),
                "phases": t.phases,
            })
        })
        .collect();

    to_json(&json!({
        "count": items.len(),
        "items": items
    }))
}

/// Format diary entries as JSON
///
/// # Errors
///
/// Returns `PsySafeError::Parse` if JSON serialization fails.
pub fn format_diary_json(entries: &[EmotionEntry]) -> Result<String, PsySafeError> {
    to_json(&json!({
        "count": entries.len(),
        "items": entries
    }))
}

/// Format research datasets as JSON
///
/// # Errors
///
/// Returns `PsySafeError::Parse` if JSON serialization fails.
pub fn format_datasets_json(datasets: &[&Dataset]) -> Result<String, PsySafeError> {
    let items: Vec<_> = datasets
        .iter()
        .map(|d| {
            let points: Vec<_> = d
                .points
                .iter()
                .map(|(label, value)| json!({ "label": label, "value": value }))
                .collect();
            json!({
                "key": d.key,
                "title": d.title,
                "series": d.series,
                "kind": d.kind,
                "points": points,
            })
        })
        .collect();

    to_json(&json!({
        "count": items.len(),
        "items": items
    }))
}
