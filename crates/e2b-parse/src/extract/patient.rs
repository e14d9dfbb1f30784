use e2b_model::Patient;
use e2b_model::codes::translate_sex;

use crate::dom::XmlElement;

/// Extract patient demographics from a `<patient>` subtree.
pub fn extract_patient(patient: &XmlElement) -> Patient {
    Patient {
        // Source quirk: reports without an explicit patient identification
        // reuse the onset age as a pseudo-identifier. Retained as observed.
        identifier: patient
            .text_of("patientidentification")
            .or_else(|| patient.text_of("patientonsetage")),
        age: patient.text_of("patientonsetage"),
        age_unit: patient.text_of("patientonsetageunit"),
        birth_date: patient.text_of("patientbirthdate"),
        sex: translate_sex(patient.text_of("patientsex")),
        weight: patient.text_of("patientweight"),
        height: patient.text_of("patientheight"),
        medical_history: medical_history(patient),
        death_date: patient.text_of("patientdeathdate"),
        autopsy: patient.text_of("patientautopsyyesno"),
    }
}

/// Join all non-empty history episode texts with `"; "`, document order.
/// Zero non-empty episodes means the field is absent, not an empty string.
fn medical_history(patient: &XmlElement) -> Option<String> {
    let parts: Vec<&str> = patient
        .descendants("medicalhistoryepisode")
        .into_iter()
        .filter_map(|episode| episode.text_at("patientmedicalhistorytext"))
        .collect();
    if parts.is_empty() {
        None
    } else {
        Some(parts.join("; "))
    }
}
