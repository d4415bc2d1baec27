//! Tokenizing delimited row/column payloads

/// Default separator between rows of a payload
pub const DEFAULT_ROW_DELIMITER: &str = "|";

/// Default separator between cells of a row
pub const DEFAULT_COLUMN_DELIMITER: &str = ",";

/// Row and column separators of a payload
///
/// Delimiters are literal strings, never patterns.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Delimiters {
    /// Separator between rows
    pub row: String,
    /// Separator between cells of a row
    pub column: String,
}

impl Delimiters {
    /// Build delimiters from raw inputs, falling back to the defaults for
    /// empty strings
    pub fn from_raw(row: &str, column: &str) -> Self {
        Self {
            row: non_empty_or(row, DEFAULT_ROW_DELIMITER),
            column: non_empty_or(column, DEFAULT_COLUMN_DELIMITER),
        }
    }
}

impl Default for Delimiters {
    fn default() -> Self {
        Self {
            row: DEFAULT_ROW_DELIMITER.to_string(),
            column: DEFAULT_COLUMN_DELIMITER.to_string(),
        }
    }
}

fn non_empty_or(raw: &str, default: &str) -> String {
    if raw.is_empty() {
        default.to_string()
    } else {
        raw.to_string()
    }
}

/// Number of rows and the widest row of a payload
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DataShape {
    pub rows: usize,
    pub columns: usize,
}

/// A payload split into rows of trimmed tokens
///
/// Rows may have different lengths; each row's own token count decides how
/// many cells it touches.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DataTable {
    rows: Vec<Vec<String>>,
}

impl DataTable {
    /// Split `payload` on the row delimiter, then each row on the column
    /// delimiter.
    ///
    /// Trailing empty rows and trailing empty cells are dropped; empty cells
    /// in the middle of a row are kept.
    pub fn parse(payload: &str, delimiters: &Delimiters) -> Self {
        let mut rows: Vec<Vec<String>> = payload
            .split(delimiters.row.as_str())
            .map(|line| split_cells(line, &delimiters.column))
            .collect();
        while rows.last().is_some_and(|row| row.is_empty()) {
            rows.pop();
        }
        Self { rows }
    }

    /// Build a table from already split rows
    pub fn from_rows(rows: Vec<Vec<String>>) -> Self {
        Self { rows }
    }

    /// Rows of tokens
    pub fn rows(&self) -> &[Vec<String>] {
        &self.rows
    }

    /// Row count and widest row
    pub fn shape(&self) -> DataShape {
        DataShape {
            rows: self.rows.len(),
            columns: self.rows.iter().map(Vec::len).max().unwrap_or(0),
        }
    }

    /// Check if there is nothing to write
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

/// Split one row into trimmed tokens, dropping trailing empty ones
pub fn split_cells(line: &str, column_delimiter: &str) -> Vec<String> {
    let mut cells: Vec<String> = line
        .split(column_delimiter)
        .map(|cell| cell.trim().to_string())
        .collect();
    while cells.last().is_some_and(|cell| cell.is_empty()) {
        cells.pop();
    }
    cells
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn row(cells: &[&str]) -> Vec<String> {
        cells.iter().map(|c| c.to_string()).collect()
    }

    #[test]
    fn test_parse_rows_and_columns() {
        let table = DataTable::parse("1,2,3,4;5,6,7,8", &Delimiters::from_raw(";", ","));
        assert_eq!(
            table.rows(),
            &[row(&["1", "2", "3", "4"]), row(&["5", "6", "7", "8"])]
        );
        assert_eq!(table.shape(), DataShape { rows: 2, columns: 4 });
    }

    #[test]
    fn test_tokens_are_trimmed() {
        let cells = split_cells("unu, doi , trei", ",");
        assert_eq!(cells, row(&["unu", "doi", "trei"]));
    }

    #[test]
    fn test_ragged_rows() {
        let table = DataTable::parse("ana,are,7.2,mere|radu,n-are", &Delimiters::default());
        assert_eq!(table.shape(), DataShape { rows: 2, columns: 4 });
        assert_eq!(table.rows()[1], row(&["radu", "n-are"]));
    }

    #[test]
    fn test_trailing_empties_dropped() {
        let table = DataTable::parse("a,,b,|c|", &Delimiters::default());
        assert_eq!(table.rows(), &[row(&["a", "", "b"]), row(&["c"])]);
    }

    #[test]
    fn test_multi_char_delimiter_is_literal() {
        let table = DataTable::parse("a.b||c.d", &Delimiters::from_raw("||", "."));
        assert_eq!(table.rows(), &[row(&["a", "b"]), row(&["c", "d"])]);
    }

    #[test]
    fn test_blank_delimiters_fall_back() {
        assert_eq!(Delimiters::from_raw("", ""), Delimiters::default());
        assert_eq!(Delimiters::from_raw(" ", "").row, " ");
    }
}
