//! Worksheet type

use crate::cell::{CellStorage, CellValue};
use crate::error::{Error, Result};
use crate::{MAX_COLS, MAX_ROWS};

/// A worksheet (single sheet in a workbook)
#[derive(Debug, Clone)]
pub struct Worksheet {
    /// Sheet name
    name: String,
    /// Cell storage
    cells: CellStorage,
}

impl Worksheet {
    /// Create a new worksheet with the given name
    pub fn new<S: Into<String>>(name: S) -> Self {
        Self {
            name: name.into(),
            cells: CellStorage::new(),
        }
    }

    /// Get the sheet name
    pub fn name(&self) -> &str {
        &self.name
    }

    // === Cell Access ===

    /// Get a cell value by row and column indices
    pub fn cell_at(&self, row: u32, col: u16) -> Option<&CellValue> {
        self.cells.get(row, col)
    }

    /// Get cell value by indices ([`CellValue::Empty`] when absent)
    pub fn get_value_at(&self, row: u32, col: u16) -> CellValue {
        self.cells.get(row, col).cloned().unwrap_or(CellValue::Empty)
    }

    // === Cell Modification ===

    /// Set a cell value by row and column indices
    pub fn set_cell_value_at<V: Into<CellValue>>(
        &mut self,
        row: u32,
        col: u16,
        value: V,
    ) -> Result<()> {
        self.validate_cell_position(row, col)?;
        self.cells.set(row, col, value.into());
        Ok(())
    }

    /// Clear a cell by indices
    pub fn clear_cell_at(&mut self, row: u32, col: u16) {
        self.cells.remove(row, col);
    }

    // === Row Operations ===

    /// Index of the last row holding data, `None` for an empty sheet
    pub fn last_row_index(&self) -> Option<u32> {
        self.cells.last_row()
    }

    /// Index of the right-most used column, `None` for an empty sheet
    pub fn last_column_index(&self) -> Option<u16> {
        self.cells.last_col()
    }

    /// Shift the rows `first..=last` down by `amount`.
    ///
    /// This is the only structural edit the grid supports: one contiguous
    /// block per call. See [`CellStorage::shift_rows_down`].
    pub fn shift_rows_down(
        &mut self,
        first: u32,
        last: u32,
        amount: u32,
        copy_row_height: bool,
        reset_row_height: bool,
    ) -> Result<()> {
        self.cells
            .shift_rows_down(first, last, amount, copy_row_height, reset_row_height)
    }

    /// Get row height
    pub fn row_height(&self, row: u32) -> f64 {
        self.cells.row_height(row)
    }

    /// Set row height
    pub fn set_row_height(&mut self, row: u32, height: f64) {
        self.cells.set_row_height(row, height);
    }

    /// Iterate over the cells of one row
    pub fn row_cells(&self, row: u32) -> impl Iterator<Item = (u16, &CellValue)> {
        self.cells.iter_row(row)
    }

    // === Internal ===

    /// Validate cell position
    fn validate_cell_position(&self, row: u32, col: u16) -> Result<()> {
        if row >= MAX_ROWS {
            return Err(Error::RowOutOfBounds(row, MAX_ROWS - 1));
        }
        if col >= MAX_COLS {
            return Err(Error::ColumnOutOfBounds(col, MAX_COLS - 1));
        }
        Ok(())
    }

    /// Get the number of non-empty cells
    pub fn cell_count(&self) -> usize {
        self.cells.cell_count()
    }

    /// Check if the worksheet is empty
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Iterate over all non-empty cells
    pub fn iter_cells(&self) -> impl Iterator<Item = (u32, u16, &CellValue)> {
        self.cells.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_worksheet() {
        let ws = Worksheet::new("Test");
        assert_eq!(ws.name(), "Test");
        assert!(ws.is_empty());
        assert_eq!(ws.last_row_index(), None);
    }

    #[test]
    fn test_set_cell_values() {
        let mut ws = Worksheet::new("Test");

        ws.set_cell_value_at(0, 0, "Hello").unwrap();
        ws.set_cell_value_at(0, 1, 42.0).unwrap();
        ws.set_cell_value_at(0, 2, true).unwrap();

        assert_eq!(ws.get_value_at(0, 0).as_string(), Some("Hello"));
        assert_eq!(ws.get_value_at(0, 1).as_number(), Some(42.0));
        assert_eq!(ws.get_value_at(0, 2).as_bool(), Some(true));
        assert!(ws.get_value_at(9, 9).is_empty());
    }

    #[test]
    fn test_out_of_bounds() {
        let mut ws = Worksheet::new("Test");

        assert!(matches!(
            ws.set_cell_value_at(MAX_ROWS, 0, 1.0),
            Err(Error::RowOutOfBounds(..))
        ));
        assert!(matches!(
            ws.set_cell_value_at(0, MAX_COLS, 1.0),
            Err(Error::ColumnOutOfBounds(..))
        ));
    }

    #[test]
    fn test_used_extent() {
        let mut ws = Worksheet::new("Test");

        ws.set_cell_value_at(5, 3, "A").unwrap();
        ws.set_cell_value_at(10, 7, "B").unwrap();

        assert_eq!(ws.last_row_index(), Some(10));
        assert_eq!(ws.last_column_index(), Some(7));

        ws.clear_cell_at(10, 7);
        assert_eq!(ws.last_row_index(), Some(5));
    }

    #[test]
    fn test_shift_rows_down() {
        let mut ws = Worksheet::new("Test");
        for row in 0..3 {
            ws.set_cell_value_at(row, 0, i64::from(row)).unwrap();
        }

        ws.shift_rows_down(0, 2, 1, false, true).unwrap();

        assert!(ws.cell_at(0, 0).is_none());
        assert_eq!(ws.get_value_at(1, 0).as_number(), Some(0.0));
        assert_eq!(ws.get_value_at(3, 0).as_number(), Some(2.0));
    }

    #[test]
    fn test_row_dimensions() {
        let mut ws = Worksheet::new("Test");

        assert!((ws.row_height(0) - 15.0).abs() < 0.001);
        ws.set_row_height(5, 30.0);
        assert!((ws.row_height(5) - 30.0).abs() < 0.001);
    }
}
