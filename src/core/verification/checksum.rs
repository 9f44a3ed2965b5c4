//! Checksums of written files

use crate::domain::{Result, ResultExt};
use sha2::{Digest, Sha256};
use std::path::Path;

/// Calculate SHA-256 checksum of raw bytes
///
/// Returns a hex-encoded string (64 characters).
///
/// ```
/// use clinicflow::core::verification::checksum::calculate_checksum_bytes;
///
/// let checksum = calculate_checksum_bytes(b"header\nrow\n");
/// assert_eq!(checksum.len(), 64);
/// ```
pub fn calculate_checksum_bytes(data: &[u8]) -> String {
    let mut hasher = Sha256::new();
    hasher.update(data);
    let result = hasher.finalize();
    format!("{result:x}")
}

/// Calculate SHA-256 checksum of a file's contents
pub fn calculate_file_checksum(path: impl AsRef<Path>) -> Result<String> {
    let path = path.as_ref();
    let bytes = std::fs::read(path).with_context(|| format!("Failed to read {}", path.display()))?;
    Ok(calculate_checksum_bytes(&bytes))
}
