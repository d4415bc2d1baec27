//! Finding rows whose cell in one column satisfies a condition

use std::cmp::Ordering;
use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;

use sheet_splice_core::{CellValue, ScalarInput, MAX_COLS};

use crate::error::{Error, Result};
use crate::outcome::Outcome;
use crate::store::WorkbookStore;

use super::{open_workbook, parse_flag, parse_index, required, worksheet};

/// Comparison applied to each cell
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CompareOp {
    Eq,
    Ne,
    Lt,
    Le,
    Gt,
    Ge,
}

impl CompareOp {
    /// Only `==` and `!=` work on text
    pub fn is_ordering(self) -> bool {
        !matches!(self, CompareOp::Eq | CompareOp::Ne)
    }

    fn accepts(self, ordering: Ordering) -> bool {
        match self {
            CompareOp::Eq => ordering == Ordering::Equal,
            CompareOp::Ne => ordering != Ordering::Equal,
            CompareOp::Lt => ordering == Ordering::Less,
            CompareOp::Le => ordering != Ordering::Greater,
            CompareOp::Gt => ordering == Ordering::Greater,
            CompareOp::Ge => ordering != Ordering::Less,
        }
    }
}

impl FromStr for CompareOp {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim() {
            "" | "==" => Ok(CompareOp::Eq),
            "!=" => Ok(CompareOp::Ne),
            "<" => Ok(CompareOp::Lt),
            "<=" => Ok(CompareOp::Le),
            ">" => Ok(CompareOp::Gt),
            ">=" => Ok(CompareOp::Ge),
            other => Err(Error::validation(format!(
                "Invalid operator '{}'. Valid values: ==, !=, <, <=, >, >=.",
                other
            ))),
        }
    }
}

impl fmt::Display for CompareOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let op = match self {
            CompareOp::Eq => "==",
            CompareOp::Ne => "!=",
            CompareOp::Lt => "<",
            CompareOp::Le => "<=",
            CompareOp::Gt => ">",
            CompareOp::Ge => ">=",
        };
        f.write_str(op)
    }
}

/// Raw inputs of the row index by condition action
#[derive(Debug, Clone, Default)]
pub struct RowIndexByConditionInput {
    pub file_path: String,
    pub worksheet_name: String,
    pub has_header: String,
    pub first_row_index: String,
    pub column_index_to_query: String,
    pub operator: String,
    /// Blank matches empty cells
    pub value: String,
}

#[derive(Debug, Clone)]
pub struct RowIndexByConditionRequest {
    pub file_path: PathBuf,
    pub worksheet_name: String,
    pub has_header: bool,
    pub first_row_index: u32,
    pub column: u16,
    pub operator: CompareOp,
    pub value: ScalarInput,
}

impl RowIndexByConditionRequest {
    pub fn parse(input: &RowIndexByConditionInput) -> Result<Self> {
        let file_path = required(&input.file_path, super::FILE_PATH_REQUIRED)?;
        let worksheet_name = required(&input.worksheet_name, super::WORKSHEET_NAME_REQUIRED)?;
        let column = required(
            &input.column_index_to_query,
            "The column index to query is required.",
        )?;
        let column = parse_index(column, "column_index_to_query", 0)?;
        let column = u16::try_from(column)
            .ok()
            .filter(|col| *col < MAX_COLS)
            .ok_or_else(|| {
                Error::validation(format!(
                    "Invalid value '{}' for column_index_to_query. Expecting a column index below {}.",
                    column, MAX_COLS
                ))
            })?;

        let operator: CompareOp = input.operator.parse()?;
        let value = ScalarInput::parse(input.value.trim());
        if operator.is_ordering() && !value.is_numeric() {
            return Err(Error::validation(format!(
                "The operator {} requires a numeric value.",
                operator
            )));
        }

        Ok(Self {
            file_path: PathBuf::from(file_path),
            worksheet_name: worksheet_name.to_string(),
            has_header: parse_flag(&input.has_header, "has_header", true)?,
            first_row_index: parse_index(&input.first_row_index, "first_row_index", 0)?,
            column,
            operator,
            value,
        })
    }

    pub fn first_data_row(&self) -> u32 {
        self.first_row_index.saturating_add(u32::from(self.has_header))
    }

    /// Check a cell against the condition
    pub fn matches(&self, cell: &CellValue) -> bool {
        match (cell, self.value.as_number()) {
            (CellValue::Number(n), Some(value)) => n
                .partial_cmp(&value)
                .is_some_and(|ordering| self.operator.accepts(ordering)),
            _ if self.operator.is_ordering() => false,
            _ => {
                let text = cell.to_string();
                let wanted = match &self.value {
                    ScalarInput::Text(text) => text.clone(),
                    other => CellValue::from(other.clone()).to_string(),
                };
                self.operator.accepts(text.cmp(&wanted))
            }
        }
    }
}

/// Indices of the data rows whose cell in the queried column satisfies the
/// condition, joined by `,`. Extra output: `rowsCount`.
pub fn row_index_by_condition<S: WorkbookStore + ?Sized>(
    store: &S,
    input: &RowIndexByConditionInput,
) -> Outcome {
    match run(store, input) {
        Ok(outcome) => outcome,
        Err(err) => {
            log::warn!("row lookup failed: {}", err);
            Outcome::failure(&err)
        }
    }
}

fn run<S: WorkbookStore + ?Sized>(store: &S, input: &RowIndexByConditionInput) -> Result<Outcome> {
    let request = RowIndexByConditionRequest::parse(input)?;
    let workbook = open_workbook(store, &request.file_path, &request.worksheet_name)?;
    let sheet = worksheet(&workbook, &request.worksheet_name)?;

    let first = request.first_data_row();
    let found: Vec<u32> = match sheet.last_row_index() {
        Some(last) if last >= first => (first..=last)
            .filter(|row| request.matches(&sheet.get_value_at(*row, request.column)))
            .collect(),
        _ => Vec::new(),
    };

    log::info!(
        "{} row(s) of worksheet {} match column {} {} {:?}",
        found.len(),
        request.worksheet_name,
        request.column,
        request.operator,
        request.value
    );
    let result = found
        .iter()
        .map(u32::to_string)
        .collect::<Vec<_>>()
        .join(",");
    Ok(Outcome::success(result).with_output("rowsCount", found.len()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn request(operator: &str, value: &str) -> RowIndexByConditionRequest {
        RowIndexByConditionRequest::parse(&RowIndexByConditionInput {
            file_path: "a.csv".to_string(),
            worksheet_name: "a".to_string(),
            column_index_to_query: "0".to_string(),
            operator: operator.to_string(),
            value: value.to_string(),
            ..Default::default()
        })
        .unwrap()
    }

    #[test]
    fn test_operator_parsing() {
        assert_eq!("".parse::<CompareOp>().unwrap(), CompareOp::Eq);
        assert_eq!(" >= ".parse::<CompareOp>().unwrap(), CompareOp::Ge);
        assert!("=~".parse::<CompareOp>().is_err());
        assert_eq!(CompareOp::Le.to_string(), "<=");
    }

    #[test]
    fn test_numeric_comparison() {
        let lt = request("<", "10");
        assert!(lt.matches(&CellValue::Number(9.5)));
        assert!(!lt.matches(&CellValue::Number(10.0)));
        assert!(!lt.matches(&CellValue::string("abc")));
        assert!(!lt.matches(&CellValue::Empty));

        let eq = request("==", "7.0");
        assert!(eq.matches(&CellValue::Number(7.0)));
    }

    #[test]
    fn test_text_comparison() {
        let eq = request("==", "abc");
        assert!(eq.matches(&CellValue::string("abc")));
        assert!(!eq.matches(&CellValue::string("ABC")));
        assert!(!eq.matches(&CellValue::Number(1.0)));

        let ne = request("!=", "abc");
        assert!(ne.matches(&CellValue::Empty));
    }

    #[test]
    fn test_blank_value_matches_empty_cells() {
        let eq = request("", "");
        assert!(eq.matches(&CellValue::Empty));
        assert!(!eq.matches(&CellValue::Number(0.0)));
    }

    #[test]
    fn test_number_value_against_text_cell() {
        let eq = request("==", "5");
        assert!(eq.matches(&CellValue::string("5")));
    }

    #[test]
    fn test_ordering_needs_numeric_value() {
        let err = RowIndexByConditionRequest::parse(&RowIndexByConditionInput {
            file_path: "a.csv".to_string(),
            worksheet_name: "a".to_string(),
            column_index_to_query: "0".to_string(),
            operator: ">".to_string(),
            value: "abc".to_string(),
            ..Default::default()
        })
        .unwrap_err();
        assert_eq!(err.to_string(), "The operator > requires a numeric value.");
    }

    #[test]
    fn test_column_required() {
        let err = RowIndexByConditionRequest::parse(&RowIndexByConditionInput {
            file_path: "a.csv".to_string(),
            worksheet_name: "a".to_string(),
            ..Default::default()
        })
        .unwrap_err();
        assert_eq!(err.to_string(), "The column index to query is required.");
    }
}
