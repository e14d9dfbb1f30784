//! Extraction tests over realistic E2B(R2) report subtrees.

use e2b_parse::parse_reports;

const FULL_REPORT: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<ichicsr lang="en">
  <ichicsrmessageheader>
    <messagetype>ichicsr</messagetype>
  </ichicsrmessageheader>
  <safetyreport>
    <safetyreportid>GB-EXAMPLE-2024-001</safetyreportid>
    <safetyreportversion>2</safetyreportversion>
    <transmissiondate>20240115</transmissiondate>
    <reporttype>1</reporttype>
    <serious>1</serious>
    <seriousnessdeath>2</seriousnessdeath>
    <seriousnesslifethreatening>1</seriousnesslifethreatening>
    <seriousnesshospitalization>1</seriousnesshospitalization>
    <seriousnessdisabling>2</seriousnessdisabling>
    <seriousnesscongenitalanomali>2</seriousnesscongenitalanomali>
    <seriousnessother>2</seriousnessother>
    <receivedate>20240110</receivedate>
    <receiptdate>20240112</receiptdate>
    <primarysource>
      <reportercountry>GB</reportercountry>
      <qualification>1</qualification>
    </primarysource>
    <sender>
      <sendertype>2</sendertype>
      <senderorganization>Example Pharma Ltd</senderorganization>
    </sender>
    <receiver>
      <receivertype>2</receivertype>
      <receiverorganization>MHRA</receiverorganization>
    </receiver>
    <patient>
      <patientidentification>PT-001</patientidentification>
      <patientonsetage>64</patientonsetage>
      <patientonsetageunit>801</patientonsetageunit>
      <patientbirthdate>19600302</patientbirthdate>
      <patientsex>2</patientsex>
      <patientweight>72</patientweight>
      <patientheight>168</patientheight>
      <medicalhistoryepisode>
        <patientmedicalhistorytext>Asthma</patientmedicalhistorytext>
      </medicalhistoryepisode>
      <medicalhistoryepisode>
        <patientmedicalhistorytext></patientmedicalhistorytext>
      </medicalhistoryepisode>
      <medicalhistoryepisode>
        <patientmedicalhistorytext>Hypertension</patientmedicalhistorytext>
      </medicalhistoryepisode>
      <drug>
        <drugcharacterization>1</drugcharacterization>
        <medicinalproduct>ASPIRIN</medicinalproduct>
        <activesubstancename>acetylsalicylic acid</activesubstancename>
        <drugbatchnumb>B1234</drugbatchnumb>
        <drugauthorizationnumb>PL 12345/0001</drugauthorizationnumb>
        <drugauthorizationcountry>GB</drugauthorizationcountry>
        <drugauthorizationholder>Example Pharma Ltd</drugauthorizationholder>
        <drugstructuredosagenumb>75</drugstructuredosagenumb>
        <drugdosageform>Tablet</drugdosageform>
        <drugadministrationroute>048</drugadministrationroute>
        <drugindication>Thromboprophylaxis</drugindication>
        <drugstartdate>20231201</drugstartdate>
        <drugenddate>20240105</drugenddate>
        <actiondrug>1</actiondrug>
        <drugrecurreadministration>3</drugrecurreadministration>
      </drug>
      <drug>
        <drugcharacterization>2</drugcharacterization>
        <medicinalproduct>RAMIPRIL</medicinalproduct>
      </drug>
      <reaction>
        <primarysourcereaction>Stomach bleed</primarysourcereaction>
        <reactionmeddrapt>Gastrointestinal haemorrhage</reactionmeddrapt>
        <reactionmeddraversionpt>26.1</reactionmeddraversionpt>
        <reactionmeddrallt>Gastric haemorrhage</reactionmeddrallt>
        <reactionmeddraversionllt>26.1</reactionmeddraversionllt>
        <reactionstartdate>20240105</reactionstartdate>
        <reactionenddate>20240109</reactionenddate>
        <reactionduration>4</reactionduration>
        <reactionoutcome>1</reactionoutcome>
      </reaction>
      <reaction>
        <reactionmeddrapt>Nausea</reactionmeddrapt>
        <reactionoutcome>6</reactionoutcome>
      </reaction>
    </patient>
    <narrativeincludeclinical>A 64 year old female developed a stomach bleed while on aspirin.</narrativeincludeclinical>
  </safetyreport>
</ichicsr>
"#;

#[test]
fn extracts_report_scalars_and_translates_report_type() {
    let reports = parse_reports(FULL_REPORT).expect("parse");
    assert_eq!(reports.len(), 1);
    let report = &reports[0];
    assert_eq!(report.safety_report_id.as_deref(), Some("GB-EXAMPLE-2024-001"));
    assert_eq!(report.safety_report_version.as_deref(), Some("2"));
    assert_eq!(report.report_type.as_deref(), Some("Spontaneous"));
    assert_eq!(report.serious.as_deref(), Some("1"));
    assert_eq!(report.seriousness_death.as_deref(), Some("2"));
    assert_eq!(report.seriousness_life_threatening.as_deref(), Some("1"));
    assert_eq!(report.sender_type.as_deref(), Some("2"));
    assert_eq!(report.sender_organization.as_deref(), Some("Example Pharma Ltd"));
    assert_eq!(report.receiver_organization.as_deref(), Some("MHRA"));
    assert_eq!(report.reporter_country.as_deref(), Some("GB"));
    assert_eq!(report.qualification.as_deref(), Some("1"));
    assert!(
        report
            .case_narrative
            .as_deref()
            .is_some_and(|narrative| narrative.starts_with("A 64 year old female"))
    );
}

#[test]
fn extracts_patient_with_history_join_and_sex_label() {
    let reports = parse_reports(FULL_REPORT).expect("parse");
    let patient = &reports[0].patient;
    assert_eq!(patient.identifier.as_deref(), Some("PT-001"));
    assert_eq!(patient.age.as_deref(), Some("64"));
    assert_eq!(patient.age_unit.as_deref(), Some("801"));
    assert_eq!(patient.sex.as_deref(), Some("Female"));
    assert_eq!(patient.weight.as_deref(), Some("72"));
    assert_eq!(patient.height.as_deref(), Some("168"));
    // Empty episode dropped, the rest joined in document order.
    assert_eq!(
        patient.medical_history.as_deref(),
        Some("Asthma; Hypertension")
    );
}

#[test]
fn extracts_drugs_in_document_order_with_characterization_labels() {
    let reports = parse_reports(FULL_REPORT).expect("parse");
    let drugs = &reports[0].drugs;
    assert_eq!(drugs.len(), 2);
    assert_eq!(drugs[0].characterization.as_deref(), Some("Suspect"));
    assert_eq!(drugs[0].medicinal_product.as_deref(), Some("ASPIRIN"));
    assert_eq!(drugs[0].generic_name.as_deref(), Some("acetylsalicylic acid"));
    assert_eq!(drugs[0].batch_number.as_deref(), Some("B1234"));
    assert_eq!(drugs[0].authorization_number.as_deref(), Some("PL 12345/0001"));
    assert_eq!(drugs[0].dosage_text.as_deref(), Some("75"));
    assert_eq!(drugs[0].route_of_admin.as_deref(), Some("048"));
    assert_eq!(drugs[0].action_taken.as_deref(), Some("1"));
    assert_eq!(drugs[0].recurrence.as_deref(), Some("3"));
    assert_eq!(drugs[1].characterization.as_deref(), Some("Concomitant"));
    assert_eq!(drugs[1].medicinal_product.as_deref(), Some("RAMIPRIL"));
    assert_eq!(drugs[1].batch_number, None);
}

#[test]
fn primary_source_reaction_wins_over_meddra_pt() {
    let reports = parse_reports(FULL_REPORT).expect("parse");
    let reactions = &reports[0].reactions;
    assert_eq!(reactions.len(), 2);
    assert_eq!(reactions[0].meddra_pt.as_deref(), Some("Stomach bleed"));
    assert_eq!(reactions[0].meddra_pt_code.as_deref(), Some("26.1"));
    assert_eq!(reactions[0].outcome.as_deref(), Some("Recovered/Resolved"));
    // No primarysourcereaction: falls back to the coded term.
    assert_eq!(reactions[1].meddra_pt.as_deref(), Some("Nausea"));
    assert_eq!(reactions[1].outcome.as_deref(), Some("Unknown"));
}

#[test]
fn zero_reports_is_an_empty_batch() {
    let reports = parse_reports("<ichicsr><ichicsrmessageheader/></ichicsr>").expect("parse");
    assert!(reports.is_empty());
}

#[test]
fn bare_safetyreport_root_is_one_report() {
    let reports =
        parse_reports("<safetyreport><safetyreportid>X</safetyreportid></safetyreport>")
            .expect("parse");
    assert_eq!(reports.len(), 1);
    assert_eq!(reports[0].safety_report_id.as_deref(), Some("X"));
}

#[test]
fn missing_patient_yields_default_patient_and_no_children() {
    let xml = "<ichicsr><safetyreport><safetyreportid>NOPAT</safetyreportid></safetyreport></ichicsr>";
    let reports = parse_reports(xml).expect("parse");
    assert_eq!(reports.len(), 1);
    assert_eq!(reports[0].patient, e2b_model::Patient::default());
    assert!(reports[0].drugs.is_empty());
    assert!(reports[0].reactions.is_empty());
}

#[test]
fn sparse_report_keeps_absent_fields_absent() {
    let xml = "<ichicsr><safetyreport><reporttype>9</reporttype></safetyreport></ichicsr>";
    let reports = parse_reports(xml).expect("parse");
    let report = &reports[0];
    assert_eq!(report.safety_report_id, None);
    // Unknown report type passes through verbatim.
    assert_eq!(report.report_type.as_deref(), Some("9"));
    assert_eq!(report.case_narrative, None);
}

#[test]
fn unknown_sex_code_passes_through() {
    let xml = "<ichicsr><safetyreport><patient><patientsex>0</patientsex></patient></safetyreport></ichicsr>";
    let reports = parse_reports(xml).expect("parse");
    assert_eq!(reports[0].patient.sex.as_deref(), Some("0"));
}

#[test]
fn patient_identifier_falls_back_to_onset_age() {
    let xml = "<ichicsr><safetyreport><patient><patientonsetage>45</patientonsetage></patient></safetyreport></ichicsr>";
    let reports = parse_reports(xml).expect("parse");
    assert_eq!(reports[0].patient.identifier.as_deref(), Some("45"));
    assert_eq!(reports[0].patient.age.as_deref(), Some("45"));
}

#[test]
fn multiple_reports_keep_document_order() {
    let xml = "<ichicsr>\
        <safetyreport><safetyreportid>A</safetyreportid></safetyreport>\
        <safetyreport><safetyreportid>B</safetyreportid></safetyreport>\
        <safetyreport><safetyreportid>C</safetyreportid></safetyreport>\
        </ichicsr>";
    let reports = parse_reports(xml).expect("parse");
    let ids: Vec<_> = reports
        .iter()
        .map(|report| report.safety_report_id.as_deref().unwrap_or_default())
        .collect();
    assert_eq!(ids, vec!["A", "B", "C"]);
}

#[test]
fn malformed_xml_is_fatal_with_no_partial_result() {
    assert!(parse_reports("<ichicsr><safetyreport></ichicsr>").is_err());
    assert!(parse_reports("not xml at all").is_err());
}
