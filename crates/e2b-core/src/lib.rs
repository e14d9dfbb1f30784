pub mod assemble;
pub mod clock;

pub use assemble::{ParsedTables, assemble};
pub use clock::{FixedClock, IngestClock, SystemClock};
pub use e2b_parse::{ParseError, Result, parse_reports};

/// Parse an E2B(R2) document into the three flat record sets.
///
/// The single entry point over the whole pipeline: XML text in, Case/Drug/
/// Reaction tables out. Pure apart from the injected clock; performs no I/O
/// and keeps no state between calls, so independent callers may run it
/// concurrently. Malformed XML aborts with no partial output; a well-formed
/// document with zero `<safetyreport>` elements yields three empty tables.
pub fn parse_document(xml: &str, clock: &dyn IngestClock) -> Result<ParsedTables> {
    let reports = e2b_parse::parse_reports(xml)?;
    Ok(assemble(&reports, clock))
}
