use serde::{Deserialize, Serialize};

/// One parsed `<safetyreport>` subtree.
///
/// Every scalar is optional: real-world regulatory transmissions are sparse
/// and a missing element is normal, not an error. Coded fields
/// (`report_type`, `patient.sex`, `drugs[].characterization`,
/// `reactions[].outcome`) hold the translated label, or the raw code verbatim
/// when the code is outside the translation table.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SafetyReport {
    pub safety_report_id: Option<String>,
    pub safety_report_version: Option<String>,
    pub transmission_date: Option<String>,
    pub report_type: Option<String>,
    pub serious: Option<String>,
    pub seriousness_death: Option<String>,
    pub seriousness_life_threatening: Option<String>,
    pub seriousness_hospitalization: Option<String>,
    pub seriousness_disability: Option<String>,
    pub seriousness_congenital: Option<String>,
    pub seriousness_other: Option<String>,
    pub receive_date: Option<String>,
    pub receipt_date: Option<String>,
    pub sender_type: Option<String>,
    pub sender_organization: Option<String>,
    pub receiver_type: Option<String>,
    pub receiver_organization: Option<String>,
    pub case_narrative: Option<String>,
    pub reporter_country: Option<String>,
    pub qualification: Option<String>,
    pub patient: Patient,
    pub drugs: Vec<Drug>,
    pub reactions: Vec<Reaction>,
}

/// Patient demographics, one-to-one with its owning [`SafetyReport`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Patient {
    /// `patientidentification`, falling back to `patientonsetage` when the
    /// source carries no explicit identifier. The fallback is semantically
    /// odd (age is not a stable identifier) but matches the source system.
    pub identifier: Option<String>,
    pub age: Option<String>,
    pub age_unit: Option<String>,
    pub birth_date: Option<String>,
    pub sex: Option<String>,
    pub weight: Option<String>,
    pub height: Option<String>,
    /// All `medicalhistoryepisode` texts in document order, empties dropped,
    /// joined with `"; "`. `None` when no non-empty episode exists.
    pub medical_history: Option<String>,
    pub death_date: Option<String>,
    pub autopsy: Option<String>,
}

/// One `<drug>` element, ordered within its case by document order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Drug {
    pub characterization: Option<String>,
    pub medicinal_product: Option<String>,
    pub generic_name: Option<String>,
    /// `obtaindrugcountry`. The source system binds this path to a brand
    /// slot; kept under its own name for audit fidelity.
    pub obtain_drug_country: Option<String>,
    pub batch_number: Option<String>,
    pub authorization_number: Option<String>,
    pub authorization_country: Option<String>,
    pub authorization_holder: Option<String>,
    pub dosage_text: Option<String>,
    pub dosage_form: Option<String>,
    pub route_of_admin: Option<String>,
    pub indication: Option<String>,
    pub start_date: Option<String>,
    pub end_date: Option<String>,
    pub action_taken: Option<String>,
    pub recurrence: Option<String>,
}

/// One `<reaction>` element, ordered within its case by document order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Reaction {
    /// Preferred term: `primarysourcereaction` first, `reactionmeddrapt`
    /// when the primary-source text is absent or empty.
    pub meddra_pt: Option<String>,
    /// `reactionmeddraversionpt`, the binding the source system uses.
    pub meddra_pt_code: Option<String>,
    pub meddra_llt: Option<String>,
    pub meddra_llt_code: Option<String>,
    pub start_date: Option<String>,
    pub end_date: Option<String>,
    pub duration: Option<String>,
    pub outcome: Option<String>,
}
