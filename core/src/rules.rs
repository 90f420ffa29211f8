use crate::csv::{self, CsvTable};

/// List entries for the rules sheet. The header row is always discarded,
/// blank rows are dropped, and each surviving row is rejoined with the
/// delimiter so the entry text reads exactly like the source line minus
/// quotes: fields are never rendered individually on this sheet.
pub fn rule_entries(table: &CsvTable) -> Vec<String> {
    table
        .iter()
        .skip(1)
        .filter(|row| !csv::is_blank_row(row))
        .map(|row| row.join(","))
        .collect()
}
