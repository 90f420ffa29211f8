/// One parsed line, split on the comma delimiter.
pub type CsvRow = Vec<String>;

/// All rows of one sheet response, in response order.
pub type CsvTable = Vec<CsvRow>;

/// Parse the sheet export dialect: lines split on `\n`, every double quote
/// deleted, fields split on `,`. Quoting is stripped rather than honored, so
/// a delimiter or line break inside a quoted cell still splits. Never fails;
/// malformed input degrades to empty or partial rows. Empty input parses to
/// one row holding one empty field.
pub fn parse(text: &str) -> CsvTable {
    text.split('\n')
        .map(|line| {
            line.replace('"', "")
                .split(',')
                .map(|field| field.to_string())
                .collect()
        })
        .collect()
}

/// A row is blank when all of its fields concatenate to whitespace. The
/// parser keeps blank rows (including the trailing one a final newline
/// produces); shaping filters them with this predicate.
pub fn is_blank_row(row: &[String]) -> bool {
    row.concat().trim().is_empty()
}

#[cfg(test)]
mod tests {
    use super::{is_blank_row, parse};

    #[test]
    fn one_row_per_line_break() {
        assert_eq!(parse("a,b\n1,2\nx").len(), 3);
        assert_eq!(parse("single").len(), 1);
    }

    #[test]
    fn trailing_newline_yields_a_single_empty_field_row() {
        let table = parse("a,b\n1,2\n");
        assert_eq!(
            table,
            vec![
                vec!["a".to_string(), "b".to_string()],
                vec!["1".to_string(), "2".to_string()],
                vec![String::new()],
            ]
        );
    }

    #[test]
    fn strips_every_quote_character() {
        let table = parse("\"a\",\"b\"\nsay \"\"hi\"\"");
        assert!(table.iter().flatten().all(|field| !field.contains('"')));
        assert_eq!(table[0], vec!["a".to_string(), "b".to_string()]);
        assert_eq!(table[1], vec!["say hi".to_string()]);
    }

    #[test]
    fn quoted_delimiters_still_split() {
        let table = parse("\"a,b\"");
        assert_eq!(table, vec![vec!["a".to_string(), "b".to_string()]]);
    }

    #[test]
    fn empty_input_is_one_blank_row() {
        assert_eq!(parse(""), vec![vec![String::new()]]);
    }

    #[test]
    fn blank_means_all_fields_empty_after_trim() {
        assert!(is_blank_row(&[String::new()]));
        assert!(is_blank_row(&[" ".to_string(), String::new()]));
        assert!(!is_blank_row(&["a".to_string()]));
        assert!(!is_blank_row(&[String::new(), "x".to_string()]));
    }
}
