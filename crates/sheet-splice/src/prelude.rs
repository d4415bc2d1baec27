//! Prelude module - common imports for sheet-splice users
//!
//! ```rust
//! use sheet_splice::prelude::*;
//! ```

// Actions
pub use crate::{
    add_data, get_cell, row_index_by_condition, AddDataInput, GetCellInput, RowIndexByConditionInput,
};

// Storage and results
pub use crate::{CsvStore, MemoryStore, Outcome, WorkbookStore};

// Main types
pub use crate::{CellValue, Workbook, Worksheet};

// Engine types
pub use crate::{RangeSpec, ShiftOptions};

// Error types
pub use crate::{Error, Result};
