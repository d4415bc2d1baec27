//! Reading a block of cells as delimited text

use std::path::PathBuf;

use sheet_splice_core::Worksheet;

use crate::error::Result;
use crate::outcome::Outcome;
use crate::payload::Delimiters;
use crate::range::RangeSpec;
use crate::resolve::{IndexResolver, SheetBounds};
use crate::store::WorkbookStore;

use super::{open_workbook, parse_flag, parse_index, required, worksheet};

/// Raw inputs of the get cell action
#[derive(Debug, Clone, Default)]
pub struct GetCellInput {
    pub file_path: String,
    pub worksheet_name: String,
    /// Blank means yes
    pub has_header: String,
    /// Index of the first row, header included; blank means 0
    pub first_row_index: String,
    pub row_index: String,
    pub column_index: String,
    pub row_delimiter: String,
    pub column_delimiter: String,
}

#[derive(Debug, Clone)]
pub struct GetCellRequest {
    pub file_path: PathBuf,
    pub worksheet_name: String,
    pub has_header: bool,
    pub first_row_index: u32,
    pub row_index: String,
    pub column_index: String,
    pub delimiters: Delimiters,
}

impl GetCellRequest {
    pub fn parse(input: &GetCellInput) -> Result<Self> {
        let file_path = required(&input.file_path, super::FILE_PATH_REQUIRED)?;
        let worksheet_name = required(&input.worksheet_name, super::WORKSHEET_NAME_REQUIRED)?;
        Ok(Self {
            file_path: PathBuf::from(file_path),
            worksheet_name: worksheet_name.to_string(),
            has_header: parse_flag(&input.has_header, "has_header", true)?,
            first_row_index: parse_index(&input.first_row_index, "first_row_index", 0)?,
            row_index: input.row_index.clone(),
            column_index: input.column_index.clone(),
            delimiters: Delimiters::from_raw(&input.row_delimiter, &input.column_delimiter),
        })
    }

    /// First row holding data rather than the header
    pub fn first_data_row(&self) -> u32 {
        self.first_row_index.saturating_add(u32::from(self.has_header))
    }
}

/// Read the selected cells of a worksheet.
///
/// `returnResult` holds the rows joined by the row delimiter and their cells
/// joined by the column delimiter. Extra outputs: `header` (when the sheet
/// has one), `rowsCount` and `columnsCount`.
pub fn get_cell<S: WorkbookStore + ?Sized>(store: &S, input: &GetCellInput) -> Outcome {
    match run(store, input) {
        Ok(outcome) => outcome,
        Err(err) => {
            log::warn!("get cell failed: {}", err);
            Outcome::failure(&err)
        }
    }
}

fn run<S: WorkbookStore + ?Sized>(store: &S, input: &GetCellInput) -> Result<Outcome> {
    let request = GetCellRequest::parse(input)?;
    let workbook = open_workbook(store, &request.file_path, &request.worksheet_name)?;
    let sheet = worksheet(&workbook, &request.worksheet_name)?;

    let bounds = SheetBounds::of(sheet);
    let rows = IndexResolver::existing_rows(&request.row_index, request.first_data_row(), bounds)?;
    let columns = IndexResolver::existing_columns(&request.column_index, bounds)?;

    let column_delimiter = request.delimiters.column.as_str();
    let result = rows
        .iter()
        .map(|row| row_text(sheet, row, &columns, column_delimiter))
        .collect::<Vec<_>>()
        .join(&request.delimiters.row);

    let mut outcome = Outcome::success(result)
        .with_output("rowsCount", rows.len())
        .with_output("columnsCount", columns.len());
    if request.has_header {
        outcome = outcome.with_output(
            "header",
            row_text(sheet, request.first_row_index, &columns, column_delimiter),
        );
    }
    log::info!(
        "read {} row(s) from worksheet {}",
        rows.len(),
        request.worksheet_name
    );
    Ok(outcome)
}

fn row_text(sheet: &Worksheet, row: u32, columns: &RangeSpec, delimiter: &str) -> String {
    columns
        .iter()
        .map(|col| match u16::try_from(col) {
            Ok(col) => sheet.get_value_at(row, col).to_string(),
            Err(_) => String::new(),
        })
        .collect::<Vec<_>>()
        .join(delimiter)
}
