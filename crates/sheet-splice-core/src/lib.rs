//! # sheet-splice-core
//!
//! Core data structures for the sheet-splice library.
//!
//! This crate provides the grid model the splice engine writes into:
//! - [`CellValue`] - Represents cell values (numbers, strings, booleans)
//! - [`ScalarInput`] - Integer/decimal/text coercion of raw tokens
//! - [`Workbook`], [`Worksheet`] - The document structures
//!
//! ## Example
//!
//! ```rust
//! use sheet_splice_core::{CellValue, Workbook};
//!
//! let mut workbook = Workbook::new();
//! let sheet = workbook.worksheet_mut(0).unwrap();
//!
//! // Rows and columns are 0-based
//! sheet.set_cell_value_at(0, 0, "Hello").unwrap();
//! sheet.set_cell_value_at(1, 0, 42.0).unwrap();
//!
//! // Open a blank row at the top, pushing existing rows down
//! sheet.shift_rows_down(0, 1, 1, false, true).unwrap();
//! assert_eq!(sheet.get_value_at(2, 0), CellValue::Number(42.0));
//! ```

pub mod cell;
pub mod error;
pub mod workbook;
pub mod worksheet;

// Re-exports for convenience
pub use cell::{CellStorage, CellValue, ScalarInput, SharedString};
pub use error::{Error, Result};
pub use workbook::Workbook;
pub use worksheet::Worksheet;

/// Maximum number of rows in a worksheet (Excel limit)
pub const MAX_ROWS: u32 = 1_048_576;

/// Maximum number of columns in a worksheet (Excel limit)
pub const MAX_COLS: u16 = 16_384;

/// Maximum length of a sheet name
pub const MAX_SHEET_NAME_LEN: usize = 31;
