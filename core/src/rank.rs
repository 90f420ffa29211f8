use crate::csv::{self, CsvRow, CsvTable};

/// Shaped rank sheet, ready for table rendering.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RankModel {
    /// Nothing renderable: the response held no non-blank row.
    Empty,
    Table { header: CsvRow, body: Vec<CsvRow> },
}

/// The first row is the header verbatim, whatever it contains; remaining
/// rows are body rows with the all-blank ones dropped. Ragged rows keep
/// their own field counts. The dialect never parses to zero rows, so an
/// empty response arrives here as one blank row and shapes to `Empty`.
pub fn rank_model(table: &CsvTable) -> RankModel {
    if table.iter().all(|row| csv::is_blank_row(row)) {
        return RankModel::Empty;
    }
    let header = table.first().cloned().unwrap_or_default();
    let body = table
        .iter()
        .skip(1)
        .filter(|row| !csv::is_blank_row(row))
        .cloned()
        .collect();
    RankModel::Table { header, body }
}

#[cfg(test)]
mod tests {
    use super::{RankModel, rank_model};
    use crate::csv::parse;

    #[test]
    fn empty_response_shapes_to_empty() {
        assert_eq!(rank_model(&parse("")), RankModel::Empty);
    }

    #[test]
    fn all_blank_rows_shape_to_empty() {
        assert_eq!(rank_model(&parse("\n \n")), RankModel::Empty);
    }

    #[test]
    fn header_is_kept_verbatim_and_blank_body_rows_drop() {
        let model = rank_model(&parse("Name,Score\n"));
        assert_eq!(
            model,
            RankModel::Table {
                header: vec!["Name".to_string(), "Score".to_string()],
                body: Vec::new(),
            }
        );
    }

    #[test]
    fn ragged_body_rows_keep_their_field_counts() {
        let model = rank_model(&parse("A,B,C\n1,2\nx,y,z,w\n"));
        let RankModel::Table { header, body } = model else {
            panic!("expected a table");
        };
        assert_eq!(header.len(), 3);
        assert_eq!(
            body,
            vec![
                vec!["1".to_string(), "2".to_string()],
                vec![
                    "x".to_string(),
                    "y".to_string(),
                    "z".to_string(),
                    "w".to_string()
                ],
            ]
        );
    }
}
