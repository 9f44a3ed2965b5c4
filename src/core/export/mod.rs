//! Export: delimited files and rendered documents
//!
//! - [`BulkWriter`] writes records in a canonical layout
//! - [`documents`] renders the referral letter and prescription slip

pub mod documents;
pub mod writer;

pub use documents::{
    render_prescription_slip, render_referral_letter, write_prescription_slip,
    write_referral_letter,
};
pub use writer::BulkWriter;
