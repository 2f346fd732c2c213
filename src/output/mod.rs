//! Output formatting for psysafe.
//!
//! Every command result can be printed as colored text or as JSON.

mod json;
mod notification;
mod pretty;

use crate::cli::args::OutputFormat;
use crate::error::PsySafeError;
use crate::features::assessment::{BurnoutResult, ManipulationResult};
use crate::features::breathing::Technique;
use crate::features::journal::{Boundaries, DefensePlan, EmotionEntry};
use crate::features::research::Dataset;

pub use json::*;
pub use notification::{Notification, NotificationKind};
pub use pretty::*;

/// Format a notification based on output format
///
/// # Errors
///
/// Returns `PsySafeError::Parse` if JSON serialization fails.
pub fn format_notification(
    notification: &Notification,
    format: OutputFormat,
) -> Result<String, PsySafeError> {
    match format {
        OutputFormat::Pretty => Ok(notification.render()),
        OutputFormat::Json => to_json(notification),
    }
}

/// Format the technique table based on output format
///
/// # Errors
///
/// Returns `PsySafeError::Parse` if JSON serialization fails.
pub fn format_techniques(
    techniques: &[Technique],
    format: OutputFormat,
) -> Result<String, PsySafeError> {
    match format {
        OutputFormat::Pretty => Ok(format_techniques_pretty(techniques)),
        OutputFormat::Json => format_techniques_json(techniques),
    }
}

/// Format a checklist result based on output format
///
/// # Errors
///
/// Returns `PsySafeError::Parse` if JSON serialization fails.
pub fn format_checklist(
    result: &ManipulationResult,
    format: OutputFormat,
) -> Result<String, PsySafeError> {
    match format {
        OutputFormat::Pretty => Ok(format_checklist_pretty(result)),
        OutputFormat::Json => to_json(result),
    }
}

/// Format a burnout result based on output format
///
/// # Errors
///
/// Returns `PsySafeError::Parse` if JSON serialization fails.
pub fn format_burnout(
    result: &BurnoutResult,
    format: OutputFormat,
) -> Result<String, PsySafeError> {
    match format {
        OutputFormat::Pretty => Ok(format_burnout_pretty(result)),
        OutputFormat::Json => to_json(result),
    }
}

/// Format diary entries based on output format
///
/// # Errors
///
/// Returns `PsySafeError::Parse` if JSON serialization fails.
pub fn format_diary(
    entries: &[EmotionEntry],
    format: OutputFormat,
) -> Result<String, PsySafeError> {
    match format {
        OutputFormat::Pretty => Ok(format_diary_pretty(entries)),
        OutputFormat::Json => format_diary_json(entries),
    }
}

/// Format saved boundaries based on output format
///
/// # Errors
///
/// Returns `PsySafeError::Parse` if JSON serialization fails.
pub fn format_boundaries(
    boundaries: Option<&Boundaries>,
    format: OutputFormat,
) -> Result<String, PsySafeError> {
    match format {
        OutputFormat::Pretty => Ok(format_boundaries_pretty(boundaries)),
        OutputFormat::Json => to_json(&boundaries),
    }
}

/// Format the defense plan based on output format
///
/// # Errors
///
/// Returns `PsySafeError::Parse` if JSON serialization fails.
pub fn format_plan(
    plan: Option<&DefensePlan>,
    format: OutputFormat,
) -> Result<String, PsySafeError> {
    match format {
        OutputFormat::Pretty => Ok(format_plan_pretty(plan)),
        OutputFormat::Json => to_json(&plan),
    }
}

/// Format research datasets based on output format
///
/// # Errors
///
/// Returns `PsySafeError::Parse` if JSON serialization fails.
pub fn format_datasets(
    datasets: &[&Dataset],
    format: OutputFormat,
) -> Result<String, PsySafeError> {
    match format {
        OutputFormat::Pretty => Ok(format_datasets_pretty(datasets)),
        OutputFormat::Json => format_datasets_json(datasets),
    }
}
