//! Error types for psysafe.

use thiserror::Error;

/// Errors that can occur anywhere in psysafe.
#[derive(Debug, Error)]
pub enum PsySafeError {
    /// Configuration could not be read, parsed or written.
    #[error("Configuration error: {0}")]
    Config(String),

    /// The local database rejected an operation.
    #[error("Database error: {0}")]
    Database(String),

    /// Filesystem or terminal I/O failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// A requested record does not exist.
    #[error("Not found: {0}")]
    NotFound(String),

    /// Stored or supplied data could not be parsed.
    #[error("Parse error: {0}")]
    Parse(String),

    /// User input was rejected.
    #[error("{0}")]
    Validation(String),

    /// No breathing technique is registered under this key.
    #[error("Unknown breathing technique: '{0}' (try: square, 478, belly)")]
    UnknownTechnique(String),

    /// The terminal UI could not be driven.
    #[error("Terminal error: {0}")]
    Terminal(String),
}

impl From<serde_json::Error> for PsySafeError {
    fn from(err: serde_json::Error) -> Self {
        Self::Parse(err.to_string())
    }
}

impl From<rusqlite::Error> for PsySafeError {
    fn from(err: rusqlite::Error) -> Self {
        Self::Database(err.to_string())
    }
}

impl PsySafeError {
    /// Check whether this error came from user input rather than the environment.
    #[must_use]
    pub const fn is_user_error(&self) -> bool {
        matches!(self, Self::Validation(_) | Self::UnknownTechnique(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unknown_technique_message() {
        let err = PsySafeError::UnknownTechnique("box".to_string());
        assert!(err.to_string().contains("'box'"));
        assert!(err.is_user_error());
    }

    #[test]
    fn test_json_error_maps_to_parse() {
        let err: PsySafeError = serde_json::from_str::<Vec<String>>("{")
            .map_err(PsySafeError::from)
            .unwrap_err();
        assert!(matches!(err, PsySafeError::Parse(_)));
        assert!(!err.is_user_error());
    }
}
