//! Self-test commands.

use crate::cli::args::OutputFormat;
use crate::error::PsySafeError;
use crate::features::assessment::{score_burnout, score_checklist};
use crate::output::{format_burnout, format_checklist};

/// Execute the checklist command.
///
/// # Errors
///
/// Returns `PsySafeError::Validation` for item numbers outside 1-6.
pub fn checklist(items: &[u8], format: OutputFormat) -> Result<String, PsySafeError> {
    let result = score_checklist(items)?;
    format_checklist(&result, format)
}

/// Execute the burnout command.
///
/// # Errors
///
/// Returns `PsySafeError::Validation` if the ratings are malformed.
pub fn burnout(levels: &[u8], format: OutputFormat) -> Result<String, PsySafeError> {
    let result = score_burnout(levels)?;
    format_burnout(&result, format)
}
