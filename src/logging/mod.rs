//! Logging and observability
//!
//! This module provides structured logging with support for:
//! - Console output filtered by level
//! - JSON-formatted local log files with rotation
//! - Macros for the events every bulk operation reports
//!
//! # Example
//!
//! ```no_run
//! use clinicflow::logging::init_logging;
//! use clinicflow::config::LoggingConfig;
//!
//! let config = LoggingConfig::default();
//! let _guard = init_logging("info", &config).expect("Failed to initialize logging");
//!
//! tracing::info!("Application started");
//! tracing::error!(error = "Something went wrong", "Error occurred");
//! ```

pub mod structured;

pub use structured::{init_logging, LoggingGuard};

/// Log the completion of a bulk load
///
/// # Example
///
/// ```no_run
/// use clinicflow::log_load_complete;
///
/// log_load_complete!("prescription", "data/prescriptions.csv", 42, 1);
/// ```
#[macro_export]
macro_rules! log_load_complete {
    ($kind:expr, $source:expr, $loaded:expr, $skipped:expr) => {
        tracing::info!(
            kind = %$kind,
            source = %$source,
            loaded = $loaded,
            skipped = $skipped,
            "Load completed"
        );
    };
}

/// Log a row the mapper rejected
///
/// ```no_run
/// use clinicflow::log_row_skipped;
///
/// log_row_skipped!("referral", 7, 3);
/// ```
#[macro_export]
macro_rules! log_row_skipped {
    ($kind:expr, $line:expr, $columns:expr) => {
        tracing::debug!(
            kind = %$kind,
            line = $line,
            columns = $columns,
            "Skipping malformed row"
        );
    };
}

/// Log the completion of a bulk write
///
/// # Example
///
/// ```no_run
/// use clinicflow::log_write_complete;
///
/// log_write_complete!("patient", "out/patients.csv", 12);
/// ```
#[macro_export]
macro_rules! log_write_complete {
    ($kind:expr, $target:expr, $count:expr) => {
        tracing::info!(
            kind = %$kind,
            target = %$target,
            count = $count,
            "Write completed"
        );
    };
}

/// Log an error with context
///
/// # Example
///
/// ```no_run
/// use clinicflow::log_error_with_context;
/// use clinicflow::domain::ClinicError;
///
/// let error = ClinicError::Configuration("Invalid config".to_string());
/// log_error_with_context!(&error, "Failed to load configuration");
/// ```
#[macro_export]
macro_rules! log_error_with_context {
    ($error:expr, $context:expr) => {
        tracing::error!(
            error = %$error,
            context = $context,
            "Error occurred"
        );
    };
}

#[cfg(test)]
mod tests {
    use crate::domain::ClinicError;

    #[test]
    fn test_macros_expand() {
        let error = ClinicError::Io("disk full".to_string());
        log_load_complete!("patient", "patients.csv", 3usize, 0usize);
        log_row_skipped!("patient", 4usize, 2usize);
        log_write_complete!("patient", "out.csv", 3usize);
        log_error_with_context!(&error, "writing patients");
    }
}
