//! Spreadsheet actions
//!
//! Each action takes raw string inputs, parses them once into a typed
//! request and always returns an [`Outcome`](crate::Outcome); errors never
//! escape an action.

mod add_data;
mod find_rows;
mod get_cell;

pub use add_data::{add_data, add_data_with_options, AddDataInput, AddDataRequest, Stage};
pub use find_rows::{
    row_index_by_condition, CompareOp, RowIndexByConditionInput, RowIndexByConditionRequest,
};
pub use get_cell::{get_cell, GetCellInput, GetCellRequest};

use std::path::Path;

use sheet_splice_core::{Workbook, Worksheet};

use crate::error::{Error, Result};
use crate::store::WorkbookStore;

pub(crate) const FILE_PATH_REQUIRED: &str = "The file path is required.";
pub(crate) const WORKSHEET_NAME_REQUIRED: &str = "The worksheet name is required.";

/// Trimmed `raw`, or a validation error with `message` when blank
pub(crate) fn required<'a>(raw: &'a str, message: &str) -> Result<&'a str> {
    let value = raw.trim();
    if value.is_empty() {
        Err(Error::validation(message))
    } else {
        Ok(value)
    }
}

/// Parse a yes/no style flag; blank means `default`
pub(crate) fn parse_flag(raw: &str, name: &str, default: bool) -> Result<bool> {
    let value = raw.trim();
    if value.is_empty() {
        return Ok(default);
    }
    if value.eq_ignore_ascii_case("true") || value.eq_ignore_ascii_case("yes") {
        Ok(true)
    } else if value.eq_ignore_ascii_case("false") || value.eq_ignore_ascii_case("no") {
        Ok(false)
    } else {
        Err(Error::validation(format!(
            "Invalid value '{}' for {}. Valid values: true, false, yes, no.",
            value, name
        )))
    }
}

/// Parse a non-negative index; blank means `default`
pub(crate) fn parse_index(raw: &str, name: &str, default: u32) -> Result<u32> {
    let value = raw.trim();
    if value.is_empty() {
        return Ok(default);
    }
    value.parse::<u32>().map_err(|_| {
        Error::validation(format!(
            "Invalid value '{}' for {}. Expecting a non-negative integer.",
            value, name
        ))
    })
}

/// Validation error for a sheet the workbook does not have
pub(crate) fn missing_sheet(name: &str) -> Error {
    Error::validation(format!("Worksheet {} does not exist.", name))
}

/// Open the workbook at `path` and check that it holds `sheet`
pub(crate) fn open_workbook<S: WorkbookStore + ?Sized>(
    store: &S,
    path: &Path,
    sheet: &str,
) -> Result<Workbook> {
    store.check_path(path)?;
    let workbook = store.open(path)?;
    if workbook.contains_sheet(sheet) {
        Ok(workbook)
    } else {
        Err(missing_sheet(sheet))
    }
}

/// Look up a worksheet that [`open_workbook`] already checked
pub(crate) fn worksheet<'a>(workbook: &'a Workbook, name: &str) -> Result<&'a Worksheet> {
    workbook.worksheet_by_name(name).ok_or_else(|| missing_sheet(name))
}
