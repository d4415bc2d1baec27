//! Cell-related types and utilities
//!
//! This module contains:
//! - [`CellValue`] - The value stored in a cell
//! - [`ScalarInput`] - A raw token coerced to integer, decimal or text
//! - [`CellStorage`] - Sparse row-major storage backing a worksheet

mod coerce;
mod storage;
mod value;

pub use coerce::ScalarInput;
pub use storage::CellStorage;
pub use value::{CellValue, SharedString};
