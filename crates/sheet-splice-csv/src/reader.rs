//! CSV reader

use std::fs::File;
use std::io::Read;
use std::path::Path;

use crate::error::{CsvError, CsvResult};
use crate::options::CsvReadOptions;
use sheet_splice_core::{CellValue, ScalarInput, Worksheet, MAX_COLS, MAX_ROWS};

/// CSV file reader
pub struct CsvReader;

impl CsvReader {
    /// Read CSV file into a worksheet
    pub fn read_file<P: AsRef<Path>>(path: P, options: &CsvReadOptions) -> CsvResult<Worksheet> {
        let file = File::open(path)?;
        Self::read(file, options)
    }

    /// Read CSV from a reader into a worksheet
    ///
    /// Every record becomes one row; empty fields leave their cell blank.
    pub fn read<R: Read>(reader: R, options: &CsvReadOptions) -> CsvResult<Worksheet> {
        let mut csv_reader = csv::ReaderBuilder::new()
            .delimiter(options.delimiter)
            .quote(options.quote)
            .has_headers(false)
            .flexible(true)
            .from_reader(reader);

        let mut worksheet = Worksheet::new(options.sheet_name.clone());

        for (row_idx, result) in csv_reader.records().enumerate() {
            let record = result?;
            let row = u32::try_from(row_idx)
                .ok()
                .filter(|r| *r < MAX_ROWS)
                .ok_or_else(|| CsvError::Overflow {
                    row: row_idx,
                    message: format!("more than {} rows", MAX_ROWS),
                })?;

            for (col_idx, field) in record.iter().enumerate() {
                if field.is_empty() {
                    continue;
                }
                let col = u16::try_from(col_idx)
                    .ok()
                    .filter(|c| *c < MAX_COLS)
                    .ok_or_else(|| CsvError::Overflow {
                        row: row_idx,
                        message: format!("more than {} columns", MAX_COLS),
                    })?;

                let value = if options.auto_detect_types {
                    CellValue::from(ScalarInput::parse(field))
                } else {
                    CellValue::string(field)
                };

                worksheet.set_cell_value_at(row, col, value)?;
            }
        }

        Ok(worksheet)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_read_keeps_positions() {
        let data = "a,1,7.2\n,,x\n\"\"\nlast\n";
        let ws = CsvReader::read(data.as_bytes(), &CsvReadOptions::default()).unwrap();

        assert_eq!(ws.name(), "Sheet1");
        assert_eq!(ws.get_value_at(0, 0), CellValue::string("a"));
        assert_eq!(ws.get_value_at(0, 1), CellValue::Number(1.0));
        assert_eq!(ws.get_value_at(0, 2), CellValue::Number(7.2));
        assert!(ws.get_value_at(1, 0).is_empty());
        assert_eq!(ws.get_value_at(1, 2), CellValue::string("x"));
        // Blank row in the middle is preserved as an empty row
        assert_eq!(ws.get_value_at(3, 0), CellValue::string("last"));
        assert_eq!(ws.last_row_index(), Some(3));
    }

    #[test]
    fn test_read_without_type_detection() {
        let options = CsvReadOptions {
            auto_detect_types: false,
            sheet_name: "raw".to_string(),
            ..Default::default()
        };
        let ws = CsvReader::read("1,2\n".as_bytes(), &options).unwrap();

        assert_eq!(ws.name(), "raw");
        assert_eq!(ws.get_value_at(0, 0), CellValue::string("1"));
    }
}
