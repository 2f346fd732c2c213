//! Research figures command.

use crate::cli::args::OutputFormat;
use crate::error::PsySafeError;
use crate::features::research::{find, ALL};
use crate::output::format_datasets;

/// Execute the research command. Without a name every dataset is shown.
///
/// # Errors
///
/// Returns `PsySafeError::NotFound` for an unknown dataset name.
pub fn research(dataset: Option<&str>, format: OutputFormat) -> Result<String, PsySafeError> {
    match dataset {
        Some(key) => {
            let found = find(key).ok_or_else(|| {
                let known: Vec<_> = ALL.iter().map(|d| d.key).collect();
                PsySafeError::NotFound(format!("dataset '{key}' (known: {})", known.join(", ")))
            })?;
            format_datasets(&[found], format)
        }
        None => format_datasets(&ALL, format),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_dataset() {
        let out = research(Some("stress"), OutputFormat::Json).unwrap();
        let value: serde_json::Value = serde_json::from_str(&out).unwrap();
        assert_eq!(value["count"], 1);
        assert_eq!(value["items"][0]["points"].as_array().unwrap().len(), 12);
    }

    #[test]
    fn test_unknown_dataset() {
        let err = research(Some("weather"), OutputFormat::Pretty).unwrap_err();
        assert!(matches!(err, PsySafeError::NotFound(_)));
        assert!(err.to_string().contains("effectiveness"));
    }

    #[test]
    fn test_all_datasets_pretty() {
        let out = research(None, OutputFormat::Pretty).unwrap();
        assert!(out.contains("18-25"));
        assert!(out.contains('%'));
    }
}
