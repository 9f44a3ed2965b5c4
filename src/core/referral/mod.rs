//! Referral workflow: the process-wide admission queue

pub mod engine;

pub use engine::{write_queue, AdmissionHook, QueueLayout, RecordUpdateHook, ReferralEngine};
