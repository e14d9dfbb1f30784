use e2b_model::{Patient, SafetyReport};
use e2b_model::codes::translate_report_type;

use crate::dom::XmlElement;
use crate::extract::{extract_drugs, extract_patient, extract_reactions};

/// Extract one `<safetyreport>` subtree into a [`SafetyReport`].
///
/// Every read tolerates absence; a report that parses as XML but carries no
/// usable fields still yields a record with absent values rather than
/// aborting the batch. A missing `<patient>` subtree leaves the patient at
/// its default and the drug/reaction lists empty.
pub fn extract_safety_report(report: &XmlElement) -> SafetyReport {
    let (patient, drugs, reactions) = match report.find_first(".//patient") {
        Some(subtree) => (
            extract_patient(subtree),
            extract_drugs(subtree),
            extract_reactions(subtree),
        ),
        None => (Patient::default(), Vec::new(), Vec::new()),
    };

    SafetyReport {
        safety_report_id: report.text_of("safetyreportid"),
        safety_report_version: report.text_of("safetyreportversion"),
        transmission_date: report.text_of("transmissiondate"),
        report_type: translate_report_type(report.text_of("reporttype")),
        serious: report.text_of("serious"),
        seriousness_death: report.text_of("seriousnessdeath"),
        seriousness_life_threatening: report.text_of("seriousnesslifethreatening"),
        seriousness_hospitalization: report.text_of("seriousnesshospitalization"),
        seriousness_disability: report.text_of("seriousnessdisabling"),
        seriousness_congenital: report.text_of("seriousnesscongenitalanomali"),
        seriousness_other: report.text_of("seriousnessother"),
        receive_date: report.text_of("receivedate"),
        receipt_date: report.text_of("receiptdate"),
        sender_type: report.text_of(".//sender/sendertype"),
        sender_organization: report.text_of(".//sender/senderorganization"),
        receiver_type: report.text_of(".//receiver/receivertype"),
        receiver_organization: report.text_of(".//receiver/receiverorganization"),
        case_narrative: report.text_of(".//narrativeincludeclinical"),
        reporter_country: report.text_of(".//primarysource/reportercountry"),
        qualification: report.text_of(".//primarysource/qualification"),
        patient,
        drugs,
        reactions,
    }
}
