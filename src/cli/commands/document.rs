//! Document command implementation
//!
//! Renders a referral letter or prescription slip for a loaded record.

use crate::core::export::{
    render_prescription_slip, render_referral_letter, write_prescription_slip,
    write_referral_letter,
};
use crate::core::Clinic;
use crate::domain::{EntityKind, Prescription, Referral, Result};
use clap::{Args, Subcommand};
use std::path::Path;

/// Arguments for the document command
#[derive(Args, Debug)]
pub struct DocumentArgs {
    #[command(subcommand)]
    pub document: DocumentKind,

    /// Print the document instead of writing it to the output directory
    #[arg(long, global = true)]
    pub stdout: bool,
}

#[derive(Subcommand, Debug)]
pub enum DocumentKind {
    /// Referral letter for a referral id
    Letter { id: String },

    /// Prescription slip for a prescription id
    Slip { id: String },
}

impl DocumentKind {
    fn entity(&self) -> EntityKind {
        match self {
            DocumentKind::Letter { .. } => EntityKind::Referral,
            DocumentKind::Slip { .. } => EntityKind::Prescription,
        }
    }

    fn id(&self) -> &str {
        match self {
            DocumentKind::Letter { id } | DocumentKind::Slip { id } => id,
        }
    }

    /// Output file name for this document
    pub fn file_name(&self) -> String {
        match self {
            DocumentKind::Letter { id } => format!("{id}_referral_letter.txt"),
            DocumentKind::Slip { id } => format!("{id}_prescription_slip.txt"),
        }
    }
}

/// The record a document is rendered from
enum Source {
    Referral(Referral),
    Prescription(Prescription),
}

impl Source {
    fn render(&self) -> String {
        match self {
            Source::Referral(r) => render_referral_letter(r),
            Source::Prescription(p) => render_prescription_slip(p),
        }
    }

    fn write_to(&self, path: &Path) -> Result<()> {
        match self {
            Source::Referral(r) => write_referral_letter(r, path),
            Source::Prescription(p) => write_prescription_slip(p, path),
        }
    }
}

impl DocumentArgs {
    /// Execute the document command
    pub fn execute(&self, config_path: &str) -> anyhow::Result<i32> {
        let Some(config) = super::load_config_or_report(config_path) else {
            return Ok(super::EXIT_CONFIG);
        };

        let kind = self.document.entity();
        let mut clinic = Clinic::from_config(&config);
        clinic.load_kind(kind, config.data.path_for(kind), config.data.layout_for(kind))?;

        let id = self.document.id();
        let source = match &self.document {
            DocumentKind::Letter { .. } => clinic.referrals.get_by_key(id).map(Source::Referral),
            DocumentKind::Slip { .. } => {
                clinic.prescriptions.get_by_key(id).map(Source::Prescription)
            }
        };
        let Some(source) = source else {
            println!("❌ No {kind} with id {id}");
            return Ok(super::EXIT_DATA);
        };

        if self.stdout {
            println!("{}", source.render());
            return Ok(0);
        }

        let path = config.export.output_path(&self.document.file_name());
        source.write_to(&path)?;
        println!("✅ Written {}", path.display());
        Ok(0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_document_file_names() {
        let letter = DocumentKind::Letter { id: "REF1".to_string() };
        let slip = DocumentKind::Slip { id: "RX1".to_string() };
        assert_eq!(letter.file_name(), "REF1_referral_letter.txt");
        assert_eq!(slip.file_name(), "RX1_prescription_slip.txt");
        assert_eq!(letter.entity(), EntityKind::Referral);
        assert_eq!(slip.id(), "RX1");
    }

    fn write_config(dir: &TempDir) -> String {
        let data = dir.path().join("data");
        fs::create_dir_all(&data).unwrap();
        fs::write(
            data.join("prescriptions.csv"),
            "prescriptionId,patientId,medication,dosage\nRX1,P1,Amoxicillin,500mg\n",
        )
        .unwrap();

        let config_path = dir.path().join("clinicflow.toml");
        let toml = format!(
            "[data]\ndirectory = '{}'\n\n[export]\noutput_directory = '{}'\n",
            data.display(),
            dir.path().join("out").join("docs").display()
        );
        fs::write(&config_path, toml).unwrap();
        config_path.to_string_lossy().to_string()
    }

    #[test]
    fn test_slip_written_into_nested_output_directory() {
        let dir = TempDir::new().unwrap();
        let config_path = write_config(&dir);
        let args = DocumentArgs {
            document: DocumentKind::Slip { id: "RX1".to_string() },
            stdout: false,
        };

        assert_eq!(args.execute(&config_path).unwrap(), 0);
        let slip = dir.path().join("out/docs/RX1_prescription_slip.txt");
        let text = fs::read_to_string(slip).unwrap();
        assert!(text.contains("Drug:    Amoxicillin"));
    }

    #[test]
    fn test_unknown_id_is_data_failure() {
        let dir = TempDir::new().unwrap();
        let config_path = write_config(&dir);
        let args = DocumentArgs {
            document: DocumentKind::Slip { id: "RX9".to_string() },
            stdout: false,
        };
        assert_eq!(args.execute(&config_path).unwrap(), super::super::EXIT_DATA);
    }
}
