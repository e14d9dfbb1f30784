//! End-to-end parse + assembly tests.

use chrono::{TimeZone, Utc};
use e2b_core::{FixedClock, parse_document};

fn fixed_clock() -> FixedClock {
    FixedClock(Utc.with_ymd_and_hms(2024, 1, 15, 10, 30, 0).unwrap())
}

const CASE001: &str = "<ichicsr><safetyreport>\
    <safetyreportid>CASE001</safetyreportid>\
    <reporttype>1</reporttype>\
    <patient>\
        <patientsex>2</patientsex>\
        <drug>\
            <drugcharacterization>1</drugcharacterization>\
            <medicinalproduct>Aspirin</medicinalproduct>\
        </drug>\
        <reaction>\
            <reactionmeddrapt>Gastrointestinal haemorrhage</reactionmeddrapt>\
            <reactionoutcome>5</reactionoutcome>\
        </reaction>\
    </patient>\
    </safetyreport></ichicsr>";

#[test]
fn end_to_end_single_case() {
    let clock = fixed_clock();
    let tables = parse_document(CASE001, &clock).expect("parse");

    assert_eq!(tables.cases.len(), 1);
    let case = &tables.cases[0];
    assert_eq!(case.case_id, "CASE001");
    assert_eq!(case.report_type.as_deref(), Some("Spontaneous"));
    assert_eq!(case.patient_sex.as_deref(), Some("Female"));
    assert_eq!(case.ingestion_timestamp, clock.0.to_rfc3339());

    assert_eq!(tables.drugs.len(), 1);
    let drug = &tables.drugs[0];
    assert_eq!(drug.case_id, "CASE001");
    assert_eq!(drug.drug_seq, 1);
    assert_eq!(drug.drug_characterization.as_deref(), Some("Suspect"));
    assert_eq!(drug.medicinal_product.as_deref(), Some("Aspirin"));

    assert_eq!(tables.reactions.len(), 1);
    let reaction = &tables.reactions[0];
    assert_eq!(reaction.case_id, "CASE001");
    assert_eq!(reaction.reaction_seq, 1);
    assert_eq!(reaction.outcome.as_deref(), Some("Fatal"));
}

#[test]
fn missing_id_gets_synthetic_case_identifier() {
    let xml = "<ichicsr><safetyreport><reporttype>1</reporttype></safetyreport></ichicsr>";
    let tables = parse_document(xml, &fixed_clock()).expect("parse");
    assert_eq!(tables.cases.len(), 1);
    assert_eq!(tables.cases[0].case_id, "CASE_20240115103000");
    let digits = tables.cases[0].case_id.strip_prefix("CASE_").unwrap();
    assert_eq!(digits.len(), 14);
    assert!(digits.chars().all(|c| c.is_ascii_digit()));
}

#[test]
fn empty_document_yields_three_empty_tables() {
    let tables =
        parse_document("<ichicsr><ichicsrmessageheader/></ichicsr>", &fixed_clock())
            .expect("parse");
    assert!(tables.is_empty());
    assert!(tables.cases.is_empty());
    assert!(tables.drugs.is_empty());
    assert!(tables.reactions.is_empty());
}

#[test]
fn sequence_numbers_are_dense_and_restart_per_case() {
    let xml = "<ichicsr>\
        <safetyreport><safetyreportid>A</safetyreportid><patient>\
            <drug><medicinalproduct>D1</medicinalproduct></drug>\
            <drug><medicinalproduct>D2</medicinalproduct></drug>\
            <drug><medicinalproduct>D3</medicinalproduct></drug>\
            <reaction><reactionmeddrapt>R1</reactionmeddrapt></reaction>\
        </patient></safetyreport>\
        <safetyreport><safetyreportid>B</safetyreportid><patient>\
            <drug><medicinalproduct>D4</medicinalproduct></drug>\
            <reaction><reactionmeddrapt>R2</reactionmeddrapt></reaction>\
            <reaction><reactionmeddrapt>R3</reactionmeddrapt></reaction>\
        </patient></safetyreport>\
        </ichicsr>";
    let tables = parse_document(xml, &fixed_clock()).expect("parse");

    let drug_keys: Vec<_> = tables
        .drugs
        .iter()
        .map(|drug| (drug.case_id.as_str(), drug.drug_seq))
        .collect();
    assert_eq!(drug_keys, vec![("A", 1), ("A", 2), ("A", 3), ("B", 1)]);

    let reaction_keys: Vec<_> = tables
        .reactions
        .iter()
        .map(|reaction| (reaction.case_id.as_str(), reaction.reaction_seq))
        .collect();
    assert_eq!(reaction_keys, vec![("A", 1), ("B", 1), ("B", 2)]);
}

#[test]
fn parsing_twice_with_the_same_clock_is_identical() {
    let clock = fixed_clock();
    let first = parse_document(CASE001, &clock).expect("parse");
    let second = parse_document(CASE001, &clock).expect("parse");
    assert_eq!(first, second);
}

#[test]
fn malformed_xml_produces_no_tables() {
    let clock = fixed_clock();
    assert!(parse_document("<ichicsr><safetyreport>", &clock).is_err());
}
