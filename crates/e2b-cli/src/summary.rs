use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::UTF8_FULL_CONDENSED;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use e2b_model::codes::{DRUG_CHARACTERIZATION, REACTION_OUTCOME, REPORT_TYPE, SEX};

use crate::types::ParseOutcome;

pub fn print_summary(outcome: &ParseOutcome) {
    println!("Input: {}", outcome.input.display());
    if outcome.dry_run {
        println!("Output: (dry run, nothing written)");
    } else {
        println!("Output: {}", outcome.output_dir.display());
    }

    let tables = &outcome.tables;
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Table"),
        header_cell("Records"),
        header_cell("File(s)"),
    ]);
    apply_table_style(&mut table);
    align_column(&mut table, 1, CellAlignment::Right);
    table.add_row(vec![
        Cell::new("Cases"),
        Cell::new(tables.cases.len()),
        Cell::new(written_for(outcome, "cases")),
    ]);
    table.add_row(vec![
        Cell::new("Drugs"),
        Cell::new(tables.drugs.len()),
        Cell::new(written_for(outcome, "drugs")),
    ]);
    table.add_row(vec![
        Cell::new("Reactions"),
        Cell::new(tables.reactions.len()),
        Cell::new(written_for(outcome, "reactions")),
    ]);
    println!("{table}");

    print_case_table(outcome);
}

/// One row per case: identifier, report type, child-record counts and the
/// overall seriousness flag. Mirrors what an assessor scans first.
fn print_case_table(outcome: &ParseOutcome) {
    let tables = &outcome.tables;
    if tables.cases.is_empty() {
        return;
    }
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Case ID"),
        header_cell("Report Type"),
        header_cell("Serious"),
        header_cell("Drugs"),
        header_cell("Reactions"),
    ]);
    apply_table_style(&mut table);
    align_column(&mut table, 3, CellAlignment::Right);
    align_column(&mut table, 4, CellAlignment::Right);
    for (case, &(drugs, reactions)) in tables.cases.iter().zip(&outcome.case_children) {
        table.add_row(vec![
            Cell::new(&case.case_id),
            Cell::new(case.report_type.as_deref().unwrap_or("-")),
            serious_cell(case.serious.as_deref()),
            Cell::new(drugs),
            Cell::new(reactions),
        ]);
    }
    println!("{table}");
}

/// Print the four controlled-vocabulary translation tables.
pub fn print_codes() {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Vocabulary"),
        header_cell("Code"),
        header_cell("Label"),
    ]);
    apply_table_style(&mut table);
    align_column(&mut table, 1, CellAlignment::Center);
    let vocabularies: &[(&str, &[(&str, &str)])] = &[
        ("Report type", REPORT_TYPE),
        ("Patient sex", SEX),
        ("Drug characterization", DRUG_CHARACTERIZATION),
        ("Reaction outcome", REACTION_OUTCOME),
    ];
    for (name, entries) in vocabularies {
        for (code, label) in *entries {
            table.add_row(vec![*name, *code, *label]);
        }
    }
    println!("{table}");
    println!("Codes outside these tables pass through unchanged.");
}

fn written_for(outcome: &ParseOutcome, stem: &str) -> String {
    let names: Vec<String> = outcome
        .written
        .iter()
        .filter_map(|path| path.file_name().map(|name| name.to_string_lossy().into_owned()))
        .filter(|name| name.starts_with(stem))
        .collect();
    if names.is_empty() {
        "-".to_string()
    } else {
        names.join(", ")
    }
}

fn serious_cell(flag: Option<&str>) -> Cell {
    match flag {
        Some("1") => Cell::new("yes").fg(Color::Red).add_attribute(Attribute::Bold),
        Some("2") => Cell::new("no"),
        Some(other) => Cell::new(other),
        None => Cell::new("-"),
    }
}

fn header_cell(text: &str) -> Cell {
    Cell::new(text).add_attribute(Attribute::Bold)
}

fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(120);
}

fn align_column(table: &mut Table, index: usize, alignment: CellAlignment) {
    if let Some(column) = table.column_mut(index) {
        column.set_cell_alignment(alignment);
    }
}
