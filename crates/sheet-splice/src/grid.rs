//! The worksheet capability the engine works against

use sheet_splice_core::{CellValue, Worksheet};

/// Mutable grid of rows × cells, addressed by 0-based indices
///
/// The engine never touches a worksheet except through this trait, so plans
/// can be replayed against recording fakes.
pub trait SheetGrid {
    /// Last row holding data, `None` when the sheet is empty
    fn last_row_index(&self) -> Option<u32>;

    /// Right-most column holding data, `None` when the sheet is empty
    fn last_column_index(&self) -> Option<u16>;

    /// Read a cell ([`CellValue::Empty`] when blank)
    fn cell(&self, row: u32, col: u16) -> CellValue;

    /// Write or overwrite a cell
    fn set_cell(&mut self, row: u32, col: u16, value: CellValue) -> sheet_splice_core::Result<()>;

    /// Shift the contiguous block `first..=last` down by `amount` rows
    fn shift_rows_down(
        &mut self,
        first: u32,
        last: u32,
        amount: u32,
        copy_row_height: bool,
        reset_row_height: bool,
    ) -> sheet_splice_core::Result<()>;

    /// Check whether a row holds no data
    fn is_row_blank(&self, row: u32) -> bool {
        match self.last_column_index() {
            Some(last) => (0..=last).all(|col| self.cell(row, col).is_empty()),
            None => true,
        }
    }
}

impl SheetGrid for Worksheet {
    fn last_row_index(&self) -> Option<u32> {
        Worksheet::last_row_index(self)
    }

    fn last_column_index(&self) -> Option<u16> {
        Worksheet::last_column_index(self)
    }

    fn cell(&self, row: u32, col: u16) -> CellValue {
        self.get_value_at(row, col)
    }

    fn set_cell(&mut self, row: u32, col: u16, value: CellValue) -> sheet_splice_core::Result<()> {
        self.set_cell_value_at(row, col, value)
    }

    fn shift_rows_down(
        &mut self,
        first: u32,
        last: u32,
        amount: u32,
        copy_row_height: bool,
        reset_row_height: bool,
    ) -> sheet_splice_core::Result<()> {
        Worksheet::shift_rows_down(self, first, last, amount, copy_row_height, reset_row_height)
    }

    fn is_row_blank(&self, row: u32) -> bool {
        self.row_cells(row).next().is_none()
    }
}
