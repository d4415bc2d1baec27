//! Adding delimited rows to an existing worksheet

use std::fmt;
use std::path::PathBuf;

use crate::error::{Error, Result};
use crate::outcome::Outcome;
use crate::payload::{split_cells, DataTable, Delimiters};
use crate::resolve::{IndexResolver, SheetBounds};
use crate::shift::{ShiftOptions, ShiftScheduler};
use crate::store::WorkbookStore;
use crate::writer::{GridWriter, WriteMode};

use super::{missing_sheet, open_workbook, parse_flag, required};

const DATA_REQUIRED: &str = "Data that should be added or modified in the document is not given.";

/// Raw inputs of the add data action
#[derive(Debug, Clone, Default)]
pub struct AddDataInput {
    pub file_path: String,
    pub worksheet_name: String,
    /// Header cells for row 0, split by the column delimiter
    pub header_data: String,
    pub row_data: String,
    /// Target rows; blank appends after the last used row
    pub row_index: String,
    /// Target columns; blank means `0..` the widest payload row
    pub column_index: String,
    pub row_delimiter: String,
    pub column_delimiter: String,
    /// `true`/`yes` writes over existing rows, anything blank inserts
    pub overwrite_data: String,
}

/// Validated add data inputs
#[derive(Debug, Clone)]
pub struct AddDataRequest {
    pub file_path: PathBuf,
    pub worksheet_name: String,
    pub header: Vec<String>,
    pub data: DataTable,
    pub row_index: String,
    pub column_index: String,
    pub mode: WriteMode,
}

impl AddDataRequest {
    /// Check required inputs in order and tokenize the payloads
    pub fn parse(input: &AddDataInput) -> Result<Self> {
        let file_path = required(&input.file_path, super::FILE_PATH_REQUIRED)?;
        let worksheet_name = required(&input.worksheet_name, super::WORKSHEET_NAME_REQUIRED)?;
        required(&input.row_data, DATA_REQUIRED)?;

        let delimiters = Delimiters::from_raw(&input.row_delimiter, &input.column_delimiter);
        let data = DataTable::parse(&input.row_data, &delimiters);
        if data.is_empty() {
            return Err(Error::validation(DATA_REQUIRED));
        }
        let overwrite = parse_flag(&input.overwrite_data, "overwrite_data", false)?;

        Ok(Self {
            file_path: PathBuf::from(file_path),
            worksheet_name: worksheet_name.to_string(),
            header: split_cells(&input.header_data, &delimiters.column),
            data,
            row_index: input.row_index.clone(),
            column_index: input.column_index.clone(),
            mode: WriteMode::from_overwrite(overwrite),
        })
    }

    /// Check if a header row will be written
    pub fn has_header(&self) -> bool {
        !self.header.is_empty()
    }
}

/// Where an add data call was when it stopped
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    Validating,
    Resolving,
    Shifting,
    Writing,
    Saving,
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Stage::Validating => "validating",
            Stage::Resolving => "resolving",
            Stage::Shifting => "shifting",
            Stage::Writing => "writing",
            Stage::Saving => "saving",
        };
        f.write_str(name)
    }
}

/// Add rows to a worksheet with the default shift flags
pub fn add_data<S: WorkbookStore + ?Sized>(store: &S, input: &AddDataInput) -> Outcome {
    add_data_with_options(store, input, ShiftOptions::default())
}

/// Add rows to a worksheet.
///
/// In insert mode blank rows are opened at every target row before writing,
/// so existing rows move down instead of being replaced. A failure after
/// shifting started leaves the opened rows in the in-memory workbook; the
/// store is only written once every stage succeeded.
pub fn add_data_with_options<S: WorkbookStore + ?Sized>(
    store: &S,
    input: &AddDataInput,
    options: ShiftOptions,
) -> Outcome {
    let mut stage = Stage::Validating;
    match run(store, input, options, &mut stage) {
        Ok(outcome) => outcome,
        Err(err) => {
            log::warn!("add data failed while {}: {}", stage, err);
            Outcome::failure(&err)
        }
    }
}

fn run<S: WorkbookStore + ?Sized>(
    store: &S,
    input: &AddDataInput,
    options: ShiftOptions,
    stage: &mut Stage,
) -> Result<Outcome> {
    let request = AddDataRequest::parse(input)?;
    let mut workbook = open_workbook(store, &request.file_path, &request.worksheet_name)?;

    let rows_written = {
        let sheet = workbook
            .worksheet_by_name_mut(&request.worksheet_name)
            .ok_or_else(|| missing_sheet(&request.worksheet_name))?;

        *stage = Stage::Resolving;
        let bounds = SheetBounds::of(&*sheet);
        let shape = request.data.shape();
        // an empty sheet keeps row 0 for the header it is about to get
        let placement = if request.has_header() && bounds.is_empty() {
            bounds.with_header_row()
        } else {
            bounds
        };
        let rows = IndexResolver::rows(
            &request.row_index,
            placement,
            shape,
            request.has_header(),
            request.mode == WriteMode::Insert,
        )?;
        let columns = IndexResolver::columns(&request.column_index, shape)?;
        GridWriter::check_fits(&request.data, &rows, &columns)?;

        if request.mode == WriteMode::Insert {
            *stage = Stage::Shifting;
            let plan = ShiftScheduler::plan(&rows, bounds.last_row, options);
            ShiftScheduler::execute(&plan, sheet)?;
        }

        *stage = Stage::Writing;
        GridWriter::write(sheet, &request.data, &rows, &columns, request.mode)?;
        // Header goes last so data aimed at row 0 cannot replace it.
        if request.has_header() {
            GridWriter::write_header(sheet, &request.header)?;
        }
        shape.rows
    };

    *stage = Stage::Saving;
    store.save(&workbook, &request.file_path)?;

    log::info!(
        "{} row(s) written to worksheet {} in {}",
        rows_written,
        request.worksheet_name,
        request.file_path.display()
    );
    Ok(Outcome::success(format!(
        "{} row(s) written to worksheet {}.",
        rows_written, request.worksheet_name
    )))
}
