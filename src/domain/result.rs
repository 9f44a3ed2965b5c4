//! Result type alias for ClinicFlow

use super::errors::ClinicError;

/// Result type alias using [`ClinicError`]
///
/// # Examples
///
/// ```
/// use clinicflow::domain::result::Result;
/// use clinicflow::domain::errors::ClinicError;
///
/// fn failing_function() -> Result<()> {
///     Err(ClinicError::Validation("Invalid input".to_string()))
/// }
/// ```
pub type Result<T> = std::result::Result<T, ClinicError>;
