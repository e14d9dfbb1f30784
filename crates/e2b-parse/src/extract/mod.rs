//! Per-subtree extractors, one module per E2B(R2) structure.

mod drug;
mod patient;
mod reaction;
mod report;

pub use drug::extract_drugs;
pub use patient::extract_patient;
pub use reaction::extract_reactions;
pub use report::extract_safety_report;
