//! Flat output records for tabular storage.
//!
//! The parse objects in [`crate::report`] mirror the XML nesting; the types
//! here are the relational projection the storage layer loads. Serialized
//! field names are the storage column names (SCREAMING_SNAKE_CASE), and each
//! record type carries its column order plus a `row()` projection so writers
//! have a single serialization point instead of per-format field lists.

use serde::{Deserialize, Serialize};

fn cell(value: &Option<String>) -> String {
    value.clone().unwrap_or_default()
}

/// One row of the Case table. Patient fields are inlined: the patient is
/// one-to-one with its case and is not emitted as a separate record.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub struct CaseRecord {
    /// Primary key. Never empty: a synthetic `CASE_<timestamp>` identifier
    /// is generated when the source omits `safetyreportid`.
    pub case_id: String,
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
    pub patient_id: Option<String>,
    pub patient_age: Option<String>,
    pub patient_age_unit: Option<String>,
    pub patient_birth_date: Option<String>,
    pub patient_sex: Option<String>,
    pub patient_weight: Option<String>,
    pub patient_height: Option<String>,
    pub patient_medical_history: Option<String>,
    pub patient_death_date: Option<String>,
    pub patient_autopsy: Option<String>,
    /// RFC 3339 timestamp stamped at assembly time.
    pub ingestion_timestamp: String,
}

impl CaseRecord {
    pub const COLUMNS: &[&str] = &[
        "CASE_ID",
        "SAFETY_REPORT_VERSION",
        "TRANSMISSION_DATE",
        "REPORT_TYPE",
        "SERIOUS",
        "SERIOUSNESS_DEATH",
        "SERIOUSNESS_LIFE_THREATENING",
        "SERIOUSNESS_HOSPITALIZATION",
        "SERIOUSNESS_DISABILITY",
        "SERIOUSNESS_CONGENITAL",
        "SERIOUSNESS_OTHER",
        "RECEIVE_DATE",
        "RECEIPT_DATE",
        "SENDER_TYPE",
        "SENDER_ORGANIZATION",
        "RECEIVER_TYPE",
        "RECEIVER_ORGANIZATION",
        "CASE_NARRATIVE",
        "REPORTER_COUNTRY",
        "QUALIFICATION",
        "PATIENT_ID",
        "PATIENT_AGE",
        "PATIENT_AGE_UNIT",
        "PATIENT_BIRTH_DATE",
        "PATIENT_SEX",
        "PATIENT_WEIGHT",
        "PATIENT_HEIGHT",
        "PATIENT_MEDICAL_HISTORY",
        "PATIENT_DEATH_DATE",
        "PATIENT_AUTOPSY",
        "INGESTION_TIMESTAMP",
    ];

    /// Cell values in [`Self::COLUMNS`] order; absent fields become empty
    /// strings.
    pub fn row(&self) -> Vec<String> {
        vec![
            self.case_id.clone(),
            cell(&self.safety_report_version),
            cell(&self.transmission_date),
            cell(&self.report_type),
            cell(&self.serious),
            cell(&self.seriousness_death),
            cell(&self.seriousness_life_threatening),
            cell(&self.seriousness_hospitalization),
            cell(&self.seriousness_disability),
            cell(&self.seriousness_congenital),
            cell(&self.seriousness_other),
            cell(&self.receive_date),
            cell(&self.receipt_date),
            cell(&self.sender_type),
            cell(&self.sender_organization),
            cell(&self.receiver_type),
            cell(&self.receiver_organization),
            cell(&self.case_narrative),
            cell(&self.reporter_country),
            cell(&self.qualification),
            cell(&self.patient_id),
            cell(&self.patient_age),
            cell(&self.patient_age_unit),
            cell(&self.patient_birth_date),
            cell(&self.patient_sex),
            cell(&self.patient_weight),
            cell(&self.patient_height),
            cell(&self.patient_medical_history),
            cell(&self.patient_death_date),
            cell(&self.patient_autopsy),
            self.ingestion_timestamp.clone(),
        ]
    }
}

/// One row of the Drug table, keyed by (`CASE_ID`, `DRUG_SEQ`).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub struct DrugRecord {
    pub case_id: String,
    /// 1-based position within the owning case, dense, document order.
    /// Assigned at assembly; not derived from any identifier in the XML.
    pub drug_seq: u32,
    pub drug_characterization: Option<String>,
    pub medicinal_product: Option<String>,
    pub generic_name: Option<String>,
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

impl DrugRecord {
    pub const COLUMNS: &[&str] = &[
        "CASE_ID",
        "DRUG_SEQ",
        "DRUG_CHARACTERIZATION",
        "MEDICINAL_PRODUCT",
        "GENERIC_NAME",
        "BATCH_NUMBER",
        "AUTHORIZATION_NUMBER",
        "AUTHORIZATION_COUNTRY",
        "AUTHORIZATION_HOLDER",
        "DOSAGE_TEXT",
        "DOSAGE_FORM",
        "ROUTE_OF_ADMIN",
        "INDICATION",
        "START_DATE",
        "END_DATE",
        "ACTION_TAKEN",
        "RECURRENCE",
    ];

    pub fn row(&self) -> Vec<String> {
        vec![
            self.case_id.clone(),
            self.drug_seq.to_string(),
            cell(&self.drug_characterization),
            cell(&self.medicinal_product),
            cell(&self.generic_name),
            cell(&self.batch_number),
            cell(&self.authorization_number),
            cell(&self.authorization_country),
            cell(&self.authorization_holder),
            cell(&self.dosage_text),
            cell(&self.dosage_form),
            cell(&self.route_of_admin),
            cell(&self.indication),
            cell(&self.start_date),
            cell(&self.end_date),
            cell(&self.action_taken),
            cell(&self.recurrence),
        ]
    }
}

/// One row of the Reaction table, keyed by (`CASE_ID`, `REACTION_SEQ`).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub struct ReactionRecord {
    pub case_id: String,
    /// 1-based position within the owning case, dense, document order.
    pub reaction_seq: u32,
    pub meddra_pt: Option<String>,
    pub meddra_pt_code: Option<String>,
    pub meddra_llt: Option<String>,
    pub meddra_llt_code: Option<String>,
    pub start_date: Option<String>,
    pub end_date: Option<String>,
    pub duration: Option<String>,
    pub outcome: Option<String>,
}

impl ReactionRecord {
    pub const COLUMNS: &[&str] = &[
        "CASE_ID",
        "REACTION_SEQ",
        "MEDDRA_PT",
        "MEDDRA_PT_CODE",
        "MEDDRA_LLT",
        "MEDDRA_LLT_CODE",
        "START_DATE",
        "END_DATE",
        "DURATION",
        "OUTCOME",
    ];

    pub fn row(&self) -> Vec<String> {
        vec![
            self.case_id.clone(),
            self.reaction_seq.to_string(),
            cell(&self.meddra_pt),
            cell(&self.meddra_pt_code),
            cell(&self.meddra_llt),
            cell(&self.meddra_llt_code),
            cell(&self.start_date),
            cell(&self.end_date),
            cell(&self.duration),
            cell(&self.outcome),
        ]
    }
}
