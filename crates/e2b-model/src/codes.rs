//! Controlled-vocabulary code translation for E2B(R2) coded fields.
//!
//! Each table is total over the closed set of codes the standard defines for
//! the field; a code outside the table passes through verbatim so unrecognized
//! values survive ingestion for audit instead of being nulled out.

/// E2B(R2) A.1.4 `reporttype` codes.
pub const REPORT_TYPE: &[(&str, &str)] = &[
    ("1", "Spontaneous"),
    ("2", "Report from Study"),
    ("3", "Other"),
    ("4", "Not available"),
];

/// E2B(R2) B.1.5 `patientsex` codes.
///
/// Codes `0` and `9` (Unknown / Not Specified) appear in real transmissions
/// but are not part of this table; they pass through as raw codes.
pub const SEX: &[(&str, &str)] = &[("1", "Male"), ("2", "Female")];

/// E2B(R2) B.4.k.1 `drugcharacterization` codes.
pub const DRUG_CHARACTERIZATION: &[(&str, &str)] = &[
    ("1", "Suspect"),
    ("2", "Concomitant"),
    ("3", "Interacting"),
];

/// E2B(R2) B.2.i.8 `reactionoutcome` codes.
pub const REACTION_OUTCOME: &[(&str, &str)] = &[
    ("1", "Recovered/Resolved"),
    ("2", "Recovering/Resolving"),
    ("3", "Not Recovered/Not Resolved"),
    ("4", "Recovered with Sequelae"),
    ("5", "Fatal"),
    ("6", "Unknown"),
];

fn lookup(table: &'static [(&'static str, &'static str)], code: &str) -> Option<&'static str> {
    table
        .iter()
        .find(|(key, _)| *key == code)
        .map(|(_, label)| *label)
}

/// Translate a code through a table, falling back to the raw code when
/// unmapped. `None` stays `None`.
fn translate(
    table: &'static [(&'static str, &'static str)],
    code: Option<String>,
) -> Option<String> {
    code.map(|code| match lookup(table, &code) {
        Some(label) => label.to_string(),
        None => code,
    })
}

pub fn translate_report_type(code: Option<String>) -> Option<String> {
    translate(REPORT_TYPE, code)
}

pub fn translate_sex(code: Option<String>) -> Option<String> {
    translate(SEX, code)
}

pub fn translate_drug_characterization(code: Option<String>) -> Option<String> {
    translate(DRUG_CHARACTERIZATION, code)
}

pub fn translate_reaction_outcome(code: Option<String>) -> Option<String> {
    translate(REACTION_OUTCOME, code)
}
