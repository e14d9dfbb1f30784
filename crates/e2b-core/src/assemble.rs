//! Flattening of parsed safety reports into the three storage tables.

use tracing::debug;

use e2b_model::{CaseRecord, DrugRecord, ReactionRecord, SafetyReport};

use crate::clock::{IngestClock, synthetic_case_id};

/// The three flat record sets a parse call produces, each in document order.
/// Drugs and reactions reference their case by `case_id` plus a dense
/// 1-based sequence number assigned here.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParsedTables {
    pub cases: Vec<CaseRecord>,
    pub drugs: Vec<DrugRecord>,
    pub reactions: Vec<ReactionRecord>,
}

impl ParsedTables {
    pub fn is_empty(&self) -> bool {
        self.cases.is_empty() && self.drugs.is_empty() && self.reactions.is_empty()
    }
}

/// Flatten parsed reports into Case, Drug and Reaction records.
///
/// Each case gets its ingestion timestamp from the injected clock; a report
/// without `safetyreportid` gets a synthetic identifier from the same clock.
/// Sequence numbers restart at 1 for every case and follow document order;
/// they are never derived from anything in the source XML.
pub fn assemble(reports: &[SafetyReport], clock: &dyn IngestClock) -> ParsedTables {
    let mut tables = ParsedTables::default();

    for report in reports {
        let case_id = report
            .safety_report_id
            .clone()
            .unwrap_or_else(|| synthetic_case_id(clock));

        tables.cases.push(case_record(report, &case_id, clock));

        for (idx, drug) in report.drugs.iter().enumerate() {
            tables.drugs.push(DrugRecord {
                case_id: case_id.clone(),
                drug_seq: idx as u32 + 1,
                drug_characterization: drug.characterization.clone(),
                medicinal_product: drug.medicinal_product.clone(),
                generic_name: drug.generic_name.clone(),
                batch_number: drug.batch_number.clone(),
                authorization_number: drug.authorization_number.clone(),
                authorization_country: drug.authorization_country.clone(),
                authorization_holder: drug.authorization_holder.clone(),
                dosage_text: drug.dosage_text.clone(),
                dosage_form: drug.dosage_form.clone(),
                route_of_admin: drug.route_of_admin.clone(),
                indication: drug.indication.clone(),
                start_date: drug.start_date.clone(),
                end_date: drug.end_date.clone(),
                action_taken: drug.action_taken.clone(),
                recurrence: drug.recurrence.clone(),
            });
        }

        for (idx, reaction) in report.reactions.iter().enumerate() {
            tables.reactions.push(ReactionRecord {
                case_id: case_id.clone(),
                reaction_seq: idx as u32 + 1,
                meddra_pt: reaction.meddra_pt.clone(),
                meddra_pt_code: reaction.meddra_pt_code.clone(),
                meddra_llt: reaction.meddra_llt.clone(),
                meddra_llt_code: reaction.meddra_llt_code.clone(),
                start_date: reaction.start_date.clone(),
                end_date: reaction.end_date.clone(),
                duration: reaction.duration.clone(),
                outcome: reaction.outcome.clone(),
            });
        }

        debug!(
            case_id = %case_id,
            drugs = report.drugs.len(),
            reactions = report.reactions.len(),
            "assembled case"
        );
    }

    tables
}

fn case_record(report: &SafetyReport, case_id: &str, clock: &dyn IngestClock) -> CaseRecord {
    let patient = &report.patient;
    CaseRecord {
        case_id: case_id.to_string(),
        safety_report_version: report.safety_report_version.clone(),
        transmission_date: report.transmission_date.clone(),
        report_type: report.report_type.clone(),
        serious: report.serious.clone(),
        seriousness_death: report.seriousness_death.clone(),
        seriousness_life_threatening: report.seriousness_life_threatening.clone(),
        seriousness_hospitalization: report.seriousness_hospitalization.clone(),
        seriousness_disability: report.seriousness_disability.clone(),
        seriousness_congenital: report.seriousness_congenital.clone(),
        seriousness_other: report.seriousness_other.clone(),
        receive_date: report.receive_date.clone(),
        receipt_date: report.receipt_date.clone(),
        sender_type: report.sender_type.clone(),
        sender_organization: report.sender_organization.clone(),
        receiver_type: report.receiver_type.clone(),
        receiver_organization: report.receiver_organization.clone(),
        case_narrative: report.case_narrative.clone(),
        reporter_country: report.reporter_country.clone(),
        qualification: report.qualification.clone(),
        patient_id: patient.identifier.clone(),
        patient_age: patient.age.clone(),
        patient_age_unit: patient.age_unit.clone(),
        patient_birth_date: patient.birth_date.clone(),
        patient_sex: patient.sex.clone(),
        patient_weight: patient.weight.clone(),
        patient_height: patient.height.clone(),
        patient_medical_history: patient.medical_history.clone(),
        patient_death_date: patient.death_date.clone(),
        patient_autopsy: patient.autopsy.clone(),
        ingestion_timestamp: clock.now().to_rfc3339(),
    }
}
