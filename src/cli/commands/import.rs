//! Import command implementation
//!
//! Loads the configured source files and reports what each produced.

use crate::core::Clinic;
use crate::domain::EntityKind;
use clap::Args;

/// Arguments for the import command
#[derive(Args, Debug)]
pub struct ImportArgs {
    /// Load only this entity kind
    #[arg(short, long)]
    pub kind: Option<EntityKind>,

    /// Print the load summaries as JSON
    #[arg(long)]
    pub json: bool,
}

impl ImportArgs {
    /// Execute the import command
    pub fn execute(&self, config_path: &str) -> anyhow::Result<i32> {
        let Some(config) = super::load_config_or_report(config_path) else {
            return Ok(super::EXIT_CONFIG);
        };

        let mut clinic = Clinic::from_config(&config);
        let mut summaries = Vec::new();
        let mut failed = false;

        for kind in super::selected_kinds(self.kind) {
            let path = config.data.path_for(kind);
            match clinic.load_kind(kind, &path, config.data.layout_for(kind)) {
                Ok(summary) => summaries.push(summary),
                Err(e) => {
                    crate::log_error_with_context!(&e, "import");
                    if !self.json {
                        println!("❌ {}: {}", kind.plural(), e);
                    }
                    failed = true;
                }
            }
        }

        if self.json {
            println!("{}", serde_json::to_string_pretty(&summaries)?);
        } else {
            println!("📥 Import Summary");
            for summary in &summaries {
                println!("  {summary}");
            }
            let loaded: usize = summaries.iter().map(|s| s.loaded).sum();
            let skipped: usize = summaries.iter().map(|s| s.skipped).sum();
            println!();
            println!("  Total: {loaded} loaded, {skipped} skipped");
        }

        Ok(if failed { super::EXIT_DATA } else { 0 })
    }
}

