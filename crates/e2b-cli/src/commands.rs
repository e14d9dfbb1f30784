use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use tracing::{info, info_span};

use e2b_cli::output::{write_csv_tables, write_json_tables};
use e2b_core::{SystemClock, assemble, parse_reports};
use e2b_model::SafetyReport;

use crate::cli::{ParseArgs, TableFormatArg};
use crate::summary::print_codes;
use crate::types::ParseOutcome;

pub fn run_parse(args: &ParseArgs) -> Result<ParseOutcome> {
    let span = info_span!("parse", file = %args.xml_file.display());
    let _guard = span.enter();

    let xml = fs::read_to_string(&args.xml_file)
        .with_context(|| format!("read {}", args.xml_file.display()))?;
    let reports = parse_reports(&xml)
        .with_context(|| format!("parse {}", args.xml_file.display()))?;
    let case_children = per_report_counts(&reports);
    let tables = assemble(&reports, &SystemClock);
    info!(
        cases = tables.cases.len(),
        drugs = tables.drugs.len(),
        reactions = tables.reactions.len(),
        "parsed document"
    );

    let output_dir = args
        .output_dir
        .clone()
        .unwrap_or_else(|| default_output_dir(&args.xml_file));

    let mut written = Vec::new();
    if !args.dry_run {
        fs::create_dir_all(&output_dir)
            .with_context(|| format!("create output directory {}", output_dir.display()))?;
        if matches!(args.format, TableFormatArg::Csv | TableFormatArg::Both) {
            written.extend(write_csv_tables(&tables, &output_dir)?);
        }
        if matches!(args.format, TableFormatArg::Json | TableFormatArg::Both) {
            written.extend(write_json_tables(&tables, &output_dir)?);
        }
        info!(files = written.len(), "wrote output tables");
    }

    Ok(ParseOutcome {
        input: args.xml_file.clone(),
        output_dir,
        dry_run: args.dry_run,
        tables,
        case_children,
        written,
    })
}

/// Child-record counts per report, in report order. Taken from the reports
/// rather than the flat tables: id-less reports can share a synthetic case
/// id, and a `case_id` filter over the tables would merge their counts.
fn per_report_counts(reports: &[SafetyReport]) -> Vec<(usize, usize)> {
    reports
        .iter()
        .map(|report| (report.drugs.len(), report.reactions.len()))
        .collect()
}

pub fn run_codes() {
    print_codes();
}

fn default_output_dir(xml_file: &Path) -> PathBuf {
    let stem = xml_file
        .file_stem()
        .map_or_else(|| "e2b".to_string(), |stem| stem.to_string_lossy().into_owned());
    let parent = xml_file.parent().unwrap_or_else(|| Path::new("."));
    parent.join(format!("{stem}_output"))
}
