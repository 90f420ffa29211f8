use crate::csv::{self, CsvRow, CsvTable};

/// One grid entry from the momaiz sheet: an image reference and a caption.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MomaizItem {
    pub image: String,
    pub name: String,
}

/// Grid entries for the momaiz sheet. Tables of at most one row (header
/// only, or an empty response) yield an empty grid. Otherwise the header is
/// dropped, blank rows are dropped, and each row splits at its first
/// delimiter: field 0 is the image reference, the rest rejoin as the name,
/// both trimmed. Names may therefore contain delimiters.
pub fn momaiz_items(table: &CsvTable) -> Vec<MomaizItem> {
    if table.len() <= 1 {
        return Vec::new();
    }
    table
        .iter()
        .skip(1)
        .filter(|row| !csv::is_blank_row(row))
        .map(split_first)
        .collect()
}

fn split_first(row: &CsvRow) -> MomaizItem {
    let image = row
        .first()
        .map(|field| field.trim().to_string())
        .unwrap_or_default();
    let name = if row.len() > 1 {
        row[1..].join(",").trim().to_string()
    } else {
        String::new()
    };
    MomaizItem { image, name }
}
