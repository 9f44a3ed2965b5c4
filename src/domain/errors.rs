//! Domain error types
//!
//! Every fallible library operation reports a [`ClinicError`]. Malformed input
//! rows and key lookups that miss are not errors: rows are counted as skipped
//! by the loader and lookups return `Option`/`bool`.

use thiserror::Error;

/// Main ClinicFlow error type
#[derive(Debug, Error)]
pub enum ClinicError {
    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// File could not be opened, read or written
    #[error("I/O error: {0}")]
    Io(String),

    /// A value could not be parsed (layout names, statuses given on the command line)
    #[error("Parse error: {0}")]
    Parse(String),

    /// Validation errors
    #[error("Validation error: {0}")]
    Validation(String),

    /// Export and document rendering errors
    #[error("Export error: {0}")]
    Export(String),

    /// Serialization/deserialization errors
    #[error("Serialization error: {0}")]
    Serialization(String),

    /// Generic errors with context
    #[error("{0}")]
    Other(String),
}

impl ClinicError {
    /// Prefixes the message with `context`, keeping the error category.
    pub fn with_prefix(self, context: impl std::fmt::Display) -> Self {
        match self {
            Self::Configuration(m) => Self::Configuration(format!("{context}: {m}")),
            Self::Io(m) => Self::Io(format!("{context}: {m}")),
            Self::Parse(m) => Self::Parse(format!("{context}: {m}")),
            Self::Validation(m) => Self::Validation(format!("{context}: {m}")),
            Self::Export(m) => Self::Export(format!("{context}: {m}")),
            Self::Serialization(m) => Self::Serialization(format!("{context}: {m}")),
            Self::Other(m) => Self::Other(format!("{context}: {m}")),
        }
    }

    /// True for failures opening, reading or writing a file
    pub fn is_io(&self) -> bool {
        matches!(self, Self::Io(_))
    }
}

impl From<std::io::Error> for ClinicError {
    fn from(err: std::io::Error) -> Self {
        ClinicError::Io(err.to_string())
    }
}

impl From<serde_json::Error> for ClinicError {
    fn from(err: serde_json::Error) -> Self {
        ClinicError::Serialization(err.to_string())
    }
}

impl From<toml::de::Error> for ClinicError {
    fn from(err: toml::de::Error) -> Self {
        ClinicError::Configuration(format!("TOML parse error: {err}"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clinic_error_display() {
        let err = ClinicError::Configuration("Invalid config".to_string());
        assert_eq!(err.to_string(), "Configuration error: Invalid config");
    }

    #[test]
    fn test_io_error_conversion() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "File not found");
        let err: ClinicError = io_err.into();
        assert!(err.is_io());
    }

    #[test]
    fn test_serde_json_error_conversion() {
        let json_err = serde_json::from_str::<serde_json::Value>("invalid json").unwrap_err();
        let err: ClinicError = json_err.into();
        assert!(matches!(err, ClinicError::Serialization(_)));
    }

    #[test]
    fn test_toml_error_conversion() {
        let toml_err = toml::from_str::<toml::Value>("invalid = toml = syntax").unwrap_err();
        let err: ClinicError = toml_err.into();
        assert!(matches!(err, ClinicError::Configuration(_)));
        assert!(err.to_string().contains("TOML parse error"));
    }

    #[test]
    fn test_with_prefix_keeps_category() {
        let err = ClinicError::Io("permission denied".to_string()).with_prefix("data/patients.csv");
        assert!(err.is_io());
        assert_eq!(err.to_string(), "I/O error: data/patients.csv: permission denied");
    }

    #[test]
    fn test_clinic_error_implements_std_error() {
        let err = ClinicError::Validation("Test error".to_string());
        let _: &dyn std::error::Error = &err;
    }
}
