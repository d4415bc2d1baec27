//! CSV writer

use std::fs::File;
use std::io::Write;
use std::path::Path;

use crate::error::CsvResult;
use crate::options::{CsvWriteOptions, LineTerminator};
use sheet_splice_core::Worksheet;

/// CSV file writer
pub struct CsvWriter;

impl CsvWriter {
    /// Write a worksheet to a CSV file
    pub fn write_file<P: AsRef<Path>>(
        worksheet: &Worksheet,
        path: P,
        options: &CsvWriteOptions,
    ) -> CsvResult<()> {
        let file = File::create(path)?;
        Self::write(worksheet, file, options)
    }

    /// Write a worksheet to a writer
    ///
    /// Output always starts at row 0, column 0 and spans the used extent.
    pub fn write<W: Write>(
        worksheet: &Worksheet,
        writer: W,
        options: &CsvWriteOptions,
    ) -> CsvResult<()> {
        let terminator = match options.line_terminator {
            LineTerminator::LF => csv::Terminator::Any(b'\n'),
            LineTerminator::CRLF => csv::Terminator::CRLF,
        };

        let mut csv_writer = csv::WriterBuilder::new()
            .delimiter(options.delimiter)
            .quote(options.quote)
            .terminator(terminator)
            .flexible(true)
            .from_writer(writer);

        if let (Some(last_row), Some(last_col)) =
            (worksheet.last_row_index(), worksheet.last_column_index())
        {
            for row in 0..=last_row {
                let record: Vec<String> = (0..=last_col)
                    .map(|col| worksheet.get_value_at(row, col).to_string())
                    .collect();
                csv_writer.write_record(&record)?;
            }
        }

        csv_writer.flush()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{CsvReadOptions, CsvReader};
    use pretty_assertions::assert_eq;
    use sheet_splice_core::CellValue;

    #[test]
    fn test_write_starts_at_origin() {
        let mut ws = Worksheet::new("Sheet1");
        ws.set_cell_value_at(1, 1, 5.0).unwrap();
        ws.set_cell_value_at(2, 0, "a,b").unwrap();

        let mut buf = Vec::new();
        CsvWriter::write(&ws, &mut buf, &CsvWriteOptions::default()).unwrap();

        assert_eq!(String::from_utf8(buf).unwrap(), ",\n,5\n\"a,b\",\n");
    }

    #[test]
    fn test_file_round_trip_keeps_blank_rows() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("sheet.csv");

        let mut ws = Worksheet::new("Sheet1");
        ws.set_cell_value_at(0, 0, 1.0).unwrap();
        ws.set_cell_value_at(3, 0, "tail").unwrap();

        CsvWriter::write_file(&ws, &path, &CsvWriteOptions::default()).unwrap();
        let back = CsvReader::read_file(&path, &CsvReadOptions::default()).unwrap();

        assert_eq!(back.get_value_at(0, 0), CellValue::Number(1.0));
        assert!(back.get_value_at(1, 0).is_empty());
        assert_eq!(back.get_value_at(3, 0), CellValue::string("tail"));
        assert_eq!(back.last_row_index(), Some(3));
    }
}
