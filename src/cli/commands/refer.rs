//! Refer command implementation
//!
//! Loads the configured referrals, submits a new referral, then writes the
//! queue file, the updated referrals CSV and the referral letter.

use super::export::export_file_name;
use crate::core::export::write_referral_letter;
use crate::core::Clinic;
use crate::domain::{EntityKind, Referral, UrgencyLevel};
use clap::Args;

/// Arguments for the refer command
#[derive(Args, Debug)]
pub struct ReferArgs {
    /// Referral id
    #[arg(long)]
    pub id: String,

    /// Patient being referred
    #[arg(long)]
    pub patient: String,

    /// Referring GP id
    #[arg(long)]
    pub from: String,

    /// Specialist id
    #[arg(long)]
    pub to: String,

    /// Reason for referral
    #[arg(long)]
    pub reason: String,

    /// Routine, Urgent or Emergency
    #[arg(long, default_value = "Routine")]
    pub urgency: UrgencyLevel,

    /// Clinical summary for the letter
    #[arg(long)]
    pub summary: Option<String>,
}

impl ReferArgs {
    fn referral(&self) -> Referral {
        let referral = Referral::new(&self.id, &self.patient, &self.from, &self.to, &self.reason)
            .with_urgency(self.urgency);
        match &self.summary {
            Some(summary) if !summary.trim().is_empty() => referral.with_clinical_summary(summary),
            _ => referral,
        }
    }

    /// Execute the refer command
    pub fn execute(&self, config_path: &str) -> anyhow::Result<i32> {
        let Some(config) = super::load_config_or_report(config_path) else {
            return Ok(super::EXIT_CONFIG);
        };

        let mut clinic = Clinic::from_config(&config);
        let source = config.data.path_for(EntityKind::Referral);
        if source.exists() {
            clinic.load_kind(
                EntityKind::Referral,
                &source,
                config.data.layout_for(EntityKind::Referral),
            )?;
        } else {
            tracing::warn!(path = %source.display(), "No referrals file, starting empty");
        }

        if clinic.referrals.contains(&self.id) {
            tracing::warn!(referral_id = %self.id, "Referral id already present in referrals file");
        }

        let referral = self.referral();
        if !clinic.submit_referral(referral.clone()) {
            println!("❌ Referral refused: the referral id is blank");
            return Ok(super::EXIT_DATA);
        }

        let engine = clinic.referral_engine();
        let queue_path = config.export.referral_queue_path();
        engine.persist(&queue_path, config.export.referral_queue_layout)?;

        let csv_path = config.export.output_path(&export_file_name(EntityKind::Referral));
        clinic.save_kind(EntityKind::Referral, &csv_path)?;

        let letter_path = config
            .export
            .output_path(&format!("{}_referral_letter.txt", referral.referral_id()));
        write_referral_letter(&referral, &letter_path)?;

        println!("✅ Referral {} submitted ({})", referral.referral_id(), referral.urgency_level);
        println!("   Queue: {}", queue_path.display());
        println!("   Referrals: {}", csv_path.display());
        println!("   Letter: {}", letter_path.display());
        Ok(0)
    }
}
