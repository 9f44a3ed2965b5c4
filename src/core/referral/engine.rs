//! The referral queue
//!
//! One engine is shared by everything in a process that admits referrals;
//! [`crate::core::Clinic`] owns it and hands out `Arc` clones. The queue is
//! independent of the referral [`RecordStore`](crate::core::store::RecordStore):
//! admitting a referral here does not add it there, or the reverse.
//!
//! Status transitions are not policed. Any status may be set at any time,
//! including moving a completed referral back to pending.

use crate::domain::{ClinicError, Record, Referral, Result, ResultExt};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;
use std::str::FromStr;
use std::sync::{Mutex, MutexGuard, PoisonError};

/// Called once per admission, after the referral is visible in the queue
pub trait AdmissionHook: Send + Sync {
    /// `position` is the referral's zero-based index in the queue
    fn on_admitted(&self, referral: &Referral, position: usize);
}

/// Records the admission against the patient's health record
///
/// There is no health record system behind this yet; the update is a log
/// event.
#[derive(Debug, Default, Clone, Copy)]
pub struct RecordUpdateHook;

impl AdmissionHook for RecordUpdateHook {
    fn on_admitted(&self, referral: &Referral, position: usize) {
        tracing::info!(
            referral_id = %referral.referral_id(),
            patient_id = %referral.patient_id,
            urgency = %referral.urgency_level,
            position,
            "Health record updated for patient"
        );
    }
}

/// Block format used by [`ReferralEngine::persist`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum QueueLayout {
    /// `ID`, `Patient` and `Status` lines
    Compact,
    /// Every referral field, one per line
    #[default]
    Extended,
}

impl fmt::Display for QueueLayout {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            QueueLayout::Compact => f.write_str("compact"),
            QueueLayout::Extended => f.write_str("extended"),
        }
    }
}

impl FromStr for QueueLayout {
    type Err = ClinicError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "compact" => Ok(QueueLayout::Compact),
            "extended" => Ok(QueueLayout::Extended),
            _ => Err(ClinicError::Parse(format!(
                "Invalid queue layout '{s}'. Expected one of: compact, extended"
            ))),
        }
    }
}

pub struct ReferralEngine {
    queue: Mutex<Vec<Referral>>,
    hooks: Vec<Box<dyn AdmissionHook>>,
}

impl Default for ReferralEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for ReferralEngine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ReferralEngine")
            .field("queued", &self.len())
            .field("hooks", &self.hooks.len())
            .finish()
    }
}

impl ReferralEngine {
    /// Engine with the [`RecordUpdateHook`] installed
    pub fn new() -> Self {
        Self::with_hooks(vec![Box::new(RecordUpdateHook)])
    }

    pub fn with_hooks(hooks: Vec<Box<dyn AdmissionHook>>) -> Self {
        Self {
            queue: Mutex::new(Vec::new()),
            hooks,
        }
    }

    // A panicking hook runs outside the lock, so a poisoned queue still
    // holds a consistent Vec.
    fn lock(&self) -> MutexGuard<'_, Vec<Referral>> {
        self.queue.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Appends `referral` to the queue, then runs every admission hook
    ///
    /// A referral with a blank id is refused and no hook runs.
    pub fn submit(&self, referral: Referral) -> bool {
        if referral.key().trim().is_empty() {
            tracing::warn!(patient_id = %referral.patient_id, "Refused referral with blank id");
            return false;
        }

        let (admitted, position) = {
            let mut queue = self.lock();
            queue.push(referral.clone());
            (referral, queue.len() - 1)
        };

        for hook in &self.hooks {
            hook.on_admitted(&admitted, position);
        }
        true
    }

    /// Copy of the queue in admission order
    pub fn snapshot(&self) -> Vec<Referral> {
        self.lock().clone()
    }

    pub fn len(&self) -> usize {
        self.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }

    /// Writes the whole queue to `path`, replacing whatever was there
    ///
    /// Returns the number of referrals written.
    pub fn persist(&self, path: impl AsRef<Path>, layout: QueueLayout) -> Result<usize> {
        let path = path.as_ref();
        let referrals = self.snapshot();

        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create {}", parent.display()))?;
        }
        let file =
            File::create(path).with_context(|| format!("Failed to create {}", path.display()))?;
        let mut out = BufWriter::new(file);
        write_queue(&mut out, &referrals, layout)
            .and_then(|_| Ok(out.flush()?))
            .with_context(|| format!("Failed to write {}", path.display()))?;

        tracing::info!(
            path = %path.display(),
            count = referrals.len(),
            layout = %layout,
            "Referral queue persisted"
        );
        Ok(referrals.len())
    }
}

/// Writes one block per referral, each followed by a blank line
pub fn write_queue<W: Write>(out: &mut W, referrals: &[Referral], layout: QueueLayout) -> Result<()> {
    for r in referrals {
        writeln!(out, "ID: {}", r.referral_id())?;
        writeln!(out, "Patient: {}", r.patient_id)?;
        if layout == QueueLayout::Extended {
            writeln!(out, "From GP: {}", r.from_gp_id)?;
            writeln!(out, "To Specialist: {}", r.to_specialist_id)?;
            writeln!(out, "Reason: {}", r.reason)?;
        }
        writeln!(out, "Status: {}", r.status)?;
        if layout == QueueLayout::Extended {
            writeln!(out, "Urgency: {}", r.urgency_level)?;
            writeln!(out, "Referral Date: {}", r.referral_date())?;
        }
        writeln!(out)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::UrgencyLevel;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    fn referral(id: &str, patient: &str) -> Referral {
        Referral::new(id, patient, "GP1", "S1", "Assessment")
    }

    #[test]
    fn test_submit_preserves_order() {
        let engine = ReferralEngine::new();
        assert!(engine.submit(referral("R1", "P1")));
        assert!(engine.submit(referral("R2", "P2")));

        let ids: Vec<String> = engine
            .snapshot()
            .iter()
            .map(|r| r.referral_id().to_string())
            .collect();
        assert_eq!(ids, vec!["R1", "R2"]);
    }

    #[test]
    fn test_blank_id_refused() {
        let engine = ReferralEngine::new();
        assert!(!engine.submit(referral(" ", "P1")));
        assert!(engine.is_empty());
    }

    #[test]
    fn test_snapshot_is_a_copy() {
        let engine = ReferralEngine::new();
        engine.submit(referral("R1", "P1"));
        let mut copy = engine.snapshot();
        copy.clear();
        assert_eq!(engine.len(), 1);
    }

    struct SeesQueue {
        engine: Arc<std::sync::OnceLock<Arc<ReferralEngine>>>,
        seen: Arc<AtomicUsize>,
    }

    impl AdmissionHook for SeesQueue {
        fn on_admitted(&self, referral: &Referral, position: usize) {
            let engine = self.engine.get().unwrap();
            let queue = engine.snapshot();
            assert_eq!(queue[position].referral_id(), referral.referral_id());
            self.seen.fetch_add(1, Ordering::SeqCst);
        }
    }

    #[test]
    fn test_hook_runs_after_referral_is_visible() {
        let cell = Arc::new(std::sync::OnceLock::new());
        let seen = Arc::new(AtomicUsize::new(0));
        let engine = Arc::new(ReferralEngine::with_hooks(vec![Box::new(SeesQueue {
            engine: cell.clone(),
            seen: seen.clone(),
        })]));
        cell.set(engine.clone()).unwrap();

        engine.submit(referral("R1", "P1"));
        engine.submit(referral("R2", "P1"));
        assert_eq!(seen.load(Ordering::SeqCst), 2);
    }

    #[test]
    fn test_compact_layout() {
        let mut buf = Vec::new();
        write_queue(&mut buf, &[referral("R1", "P1")], QueueLayout::Compact).unwrap();
        assert_eq!(String::from_utf8(buf).unwrap(), "ID: R1\nPatient: P1\nStatus: Pending\n\n");
    }

    #[test]
    fn test_extended_layout() {
        let r = referral("R1", "P1").with_urgency(UrgencyLevel::Emergency);
        let mut buf = Vec::new();
        write_queue(&mut buf, std::slice::from_ref(&r), QueueLayout::Extended).unwrap();
        let text = String::from_utf8(buf).unwrap();

        let expected = format!(
            "ID: R1\nPatient: P1\nFrom GP: GP1\nTo Specialist: S1\nReason: Assessment\n\
             Status: Pending\nUrgency: Emergency\nReferral Date: {}\n\n",
            r.referral_date()
        );
        assert_eq!(text, expected);
    }

    #[test]
    fn test_persist_truncates() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("queue.txt");
        std::fs::write(&path, "stale content that is much longer than the new queue\n".repeat(20)).unwrap();

        let engine = ReferralEngine::new();
        engine.submit(referral("R1", "P1"));
        assert_eq!(engine.persist(&path, QueueLayout::Compact).unwrap(), 1);

        let text = std::fs::read_to_string(&path).unwrap();
        assert!(!text.contains("stale"));
        assert!(text.starts_with("ID: R1\n"));
    }

    #[test]
    fn test_queue_layout_parse() {
        assert_eq!("Compact".parse::<QueueLayout>().unwrap(), QueueLayout::Compact);
        assert_eq!(QueueLayout::default(), QueueLayout::Extended);
        assert!("csv".parse::<QueueLayout>().is_err());
    }
}
