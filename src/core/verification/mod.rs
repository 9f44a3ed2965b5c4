//! Post-write verification
//!
//! Written files are read back through their layout, compared record by
//! record with the source, and fingerprinted with SHA-256.

pub mod checksum;
pub mod report;
pub mod verify;

pub use report::{VerificationFailure, VerificationReport};
pub use verify::Verifier;
