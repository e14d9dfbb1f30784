//! Table writers: project assembled records into CSV and JSON files.
//!
//! One file per record set (`cases`, `drugs`, `reactions`). CSV columns come
//! from each record type's `COLUMNS`/`row()` projection so the written
//! header always matches the storage schema; JSON uses the serde column
//! names, which are the same identifiers.

use std::fs::File;
use std::io::BufWriter;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::Serialize;

use e2b_core::ParsedTables;
use e2b_model::{CaseRecord, DrugRecord, ReactionRecord};

/// Write `cases.csv`, `drugs.csv` and `reactions.csv` under `dir`.
/// Returns the written paths.
pub fn write_csv_tables(tables: &ParsedTables, dir: &Path) -> Result<Vec<PathBuf>> {
    let cases = dir.join("cases.csv");
    write_csv(&cases, CaseRecord::COLUMNS, tables.cases.iter().map(CaseRecord::row))?;
    let drugs = dir.join("drugs.csv");
    write_csv(&drugs, DrugRecord::COLUMNS, tables.drugs.iter().map(DrugRecord::row))?;
    let reactions = dir.join("reactions.csv");
    write_csv(
        &reactions,
        ReactionRecord::COLUMNS,
        tables.reactions.iter().map(ReactionRecord::row),
    )?;
    Ok(vec![cases, drugs, reactions])
}

/// Write `cases.json`, `drugs.json` and `reactions.json` under `dir`.
/// Returns the written paths.
pub fn write_json_tables(tables: &ParsedTables, dir: &Path) -> Result<Vec<PathBuf>> {
    let cases = dir.join("cases.json");
    write_json(&cases, &tables.cases)?;
    let drugs = dir.join("drugs.json");
    write_json(&drugs, &tables.drugs)?;
    let reactions = dir.join("reactions.json");
    write_json(&reactions, &tables.reactions)?;
    Ok(vec![cases, drugs, reactions])
}

fn write_csv<I>(path: &Path, columns: &[&str], rows: I) -> Result<()>
where
    I: Iterator<Item = Vec<String>>,
{
    let mut writer = csv::Writer::from_path(path)
        .with_context(|| format!("create {}", path.display()))?;
    writer
        .write_record(columns)
        .with_context(|| format!("write header to {}", path.display()))?;
    for row in rows {
        writer
            .write_record(&row)
            .with_context(|| format!("write row to {}", path.display()))?;
    }
    writer
        .flush()
        .with_context(|| format!("flush {}", path.display()))?;
    Ok(())
}

fn write_json<T: Serialize>(path: &Path, records: &[T]) -> Result<()> {
    let file = File::create(path).with_context(|| format!("create {}", path.display()))?;
    serde_json::to_writer_pretty(BufWriter::new(file), records)
        .with_context(|| format!("write {}", path.display()))?;
    Ok(())
}
