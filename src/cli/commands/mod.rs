//! CLI command implementations
//!
//! Every command returns its process exit code: 0 success, 2 configuration
//! error, 3 data or verification failure, 5 fatal.

pub mod document;
pub mod export;
pub mod import;
pub mod init;
pub mod refer;
pub mod validate;
pub mod verify;

use crate::config::{load_config, ClinicConfig};
use crate::domain::EntityKind;

/// Configuration error exit code
pub const EXIT_CONFIG: i32 = 2;

/// Data or verification failure exit code
pub const EXIT_DATA: i32 = 3;

/// Loads the configuration, printing the failure if there is one
pub(crate) fn load_config_or_report(config_path: &str) -> Option<ClinicConfig> {
    match load_config(config_path) {
        Ok(config) => Some(config),
        Err(e) => {
            tracing::error!(error = %e, config_path, "Failed to load configuration");
            println!("❌ Failed to load configuration file");
            println!("   Error: {e}");
            None
        }
    }
}

/// The requested kind, or every kind when none is given
pub(crate) fn selected_kinds(kind: Option<EntityKind>) -> Vec<EntityKind> {
    kind.map_or_else(|| EntityKind::ALL.to_vec(), |k| vec![k])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_selected_kinds() {
        assert_eq!(selected_kinds(None).len(), 5);
        assert_eq!(selected_kinds(Some(EntityKind::Referral)), vec![EntityKind::Referral]);
    }

    #[test]
    fn test_missing_config_reported() {
        assert!(load_config_or_report("does-not-exist.toml").is_none());
    }
}
