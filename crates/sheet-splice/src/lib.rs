//! # sheet-splice
//!
//! Write delimited rows into existing worksheets.
//!
//! The engine resolves user range specifications (`"1,2,5:8"`) into target
//! rows and columns, opens blank rows where data is inserted using the
//! grid's contiguous shift primitive, and writes tokenized payloads with
//! integer → decimal → text coercion.
//!
//! ## Pieces
//!
//! - [`RangeSpec`] - sorted, deduplicated indices parsed from a range string
//! - [`IndexResolver`] - explicit indices or append targets for a payload
//! - [`ShiftScheduler`] - one shift per run of consecutive target rows
//! - [`GridWriter`] - cell writes at the resolved indices
//! - [`actions`] - add data, get cell and row index by condition, each
//!   returning an [`Outcome`]
//!
//! ## Example
//!
//! ```rust
//! use sheet_splice::prelude::*;
//!
//! let mut workbook = Workbook::empty();
//! workbook.add_worksheet_with_name("data").unwrap();
//! workbook.worksheet_mut(0).unwrap().set_cell_value_at(0, 0, 1.0).unwrap();
//!
//! let store = MemoryStore::new();
//! store.insert("book", workbook);
//!
//! let outcome = add_data(&store, &AddDataInput {
//!     file_path: "book".to_string(),
//!     worksheet_name: "data".to_string(),
//!     row_data: "9|8".to_string(),
//!     row_index: "0:1".to_string(),
//!     ..Default::default()
//! });
//! assert!(outcome.is_success());
//!
//! let sheet = store.get("book").unwrap().worksheet(0).unwrap().clone();
//! assert_eq!(sheet.get_value_at(0, 0), CellValue::Number(9.0));
//! assert_eq!(sheet.get_value_at(1, 0), CellValue::Number(8.0));
//! assert_eq!(sheet.get_value_at(2, 0), CellValue::Number(1.0));
//! ```

pub mod actions;
pub mod error;
pub mod grid;
pub mod outcome;
pub mod payload;
pub mod prelude;
pub mod range;
pub mod resolve;
pub mod shift;
pub mod store;
pub mod writer;

pub use actions::{
    add_data, add_data_with_options, get_cell, row_index_by_condition, AddDataInput,
    GetCellInput, RowIndexByConditionInput,
};
pub use error::{Axis, Error, Result};
pub use grid::SheetGrid;
pub use outcome::{Outcome, ReturnCode};
pub use payload::{DataShape, DataTable, Delimiters};
pub use range::RangeSpec;
pub use resolve::{IndexResolver, SheetBounds};
pub use shift::{ShiftOp, ShiftOptions, ShiftPlan, ShiftScheduler};
pub use store::{CsvStore, MemoryStore, WorkbookStore};
pub use writer::{GridWriter, WriteMode};

// Re-export core types
pub use sheet_splice_core::{CellValue, ScalarInput, Workbook, Worksheet, MAX_COLS, MAX_ROWS};

// Re-export I/O types
pub use sheet_splice_csv::{CsvError, CsvReadOptions, CsvWriteOptions};
