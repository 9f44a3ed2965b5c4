//! Error context extension trait
//!
//! Adds `.context()` / `.with_context()` to results whose error converts into
//! [`ClinicError`]. Unlike `anyhow::Context` the error category is kept, so an
//! I/O failure stays an I/O failure after the path is attached.
//!
//! ```rust
//! use clinicflow::domain::Result;
//! use clinicflow::domain::context::ResultExt;
//!
//! fn read_file(path: &str) -> Result<String> {
//!     std::fs::read_to_string(path).with_context(|| format!("Failed to read {path}"))
//! }
//! ```

use crate::domain::errors::ClinicError;
use crate::domain::result::Result;

/// Extension trait for adding context to `Result` types
pub trait ResultExt<T> {
    /// Add context to an error (eagerly evaluated)
    fn context<C>(self, context: C) -> Result<T>
    where
        C: std::fmt::Display;

    /// Add context to an error, computing it only on failure
    fn with_context<C, F>(self, f: F) -> Result<T>
    where
        C: std::fmt::Display,
        F: FnOnce() -> C;
}

impl<T, E> ResultExt<T> for std::result::Result<T, E>
where
    E: Into<ClinicError>,
{
    fn context<C>(self, context: C) -> Result<T>
    where
        C: std::fmt::Display,
    {
        self.map_err(|e| e.into().with_prefix(context))
    }

    fn with_context<C, F>(self, f: F) -> Result<T>
    where
        C: std::fmt::Display,
        F: FnOnce() -> C,
    {
        self.map_err(|e| e.into().with_prefix(f()))
    }
}
