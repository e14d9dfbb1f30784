pub mod codes;
pub mod records;
pub mod report;

pub use records::{CaseRecord, DrugRecord, ReactionRecord};
pub use report::{Drug, Patient, Reaction, SafetyReport};
