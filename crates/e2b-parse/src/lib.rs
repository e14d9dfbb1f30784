pub mod dom;
pub mod error;
pub mod extract;

use tracing::{debug, info};

use e2b_model::SafetyReport;

pub use dom::{XmlElement, parse_tree};
pub use error::{ParseError, Result};
pub use extract::{extract_drugs, extract_patient, extract_reactions, extract_safety_report};

/// Parse E2B(R2) XML text into its safety reports, document order.
///
/// `<safetyreport>` elements are located at any depth, so an outer batch
/// wrapper (`<ichicsr>` or otherwise) is transparent. A well-formed document
/// with zero reports yields an empty vector; XML that is not well-formed is
/// a fatal [`ParseError`] with no partial result.
pub fn parse_reports(xml: &str) -> Result<Vec<SafetyReport>> {
    let root = parse_tree(xml)?;

    let mut subtrees: Vec<&XmlElement> = Vec::new();
    if root.name == "safetyreport" {
        subtrees.push(&root);
    }
    subtrees.extend(root.descendants("safetyreport"));

    let reports: Vec<SafetyReport> = subtrees
        .into_iter()
        .map(|subtree| {
            let report = extract_safety_report(subtree);
            debug!(
                safety_report_id = report.safety_report_id.as_deref().unwrap_or("<none>"),
                drugs = report.drugs.len(),
                reactions = report.reactions.len(),
                "extracted safety report"
            );
            report
        })
        .collect();

    info!(reports = reports.len(), "parsed E2B(R2) document");
    Ok(reports)
}
