use std::path::PathBuf;

use e2b_core::ParsedTables;

/// Result of one `parse` invocation, consumed by the summary printer.
pub struct ParseOutcome {
    pub input: PathBuf,
    pub output_dir: PathBuf,
    pub dry_run: bool,
    pub tables: ParsedTables,
    /// `(drugs, reactions)` per case, aligned with `tables.cases`. Counted
    /// from each report before flattening, so two reports that ended up with
    /// the same synthetic case id keep separate counts.
    pub case_children: Vec<(usize, usize)>,
    pub written: Vec<PathBuf>,
}
