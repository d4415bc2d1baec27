//! Cell storage implementation
//!
//! This module provides sparse storage for spreadsheet cells.
//! Only non-empty cells are stored, using a row-based BTreeMap structure.

use std::collections::BTreeMap;

use super::CellValue;
use crate::error::{Error, Result};
use crate::MAX_ROWS;

/// Sparse row-based storage for worksheet cells
///
/// Structure: `BTreeMap<row_index, BTreeMap<col_index, CellValue>>`
///
/// Row keys are kept ordered so the last used row and contiguous row blocks
/// can be found without scanning the whole grid.
#[derive(Debug, Clone)]
pub struct CellStorage {
    /// Row index → column map
    rows: BTreeMap<u32, BTreeMap<u16, CellValue>>,

    /// Default row height in points (default: 15.0)
    default_row_height: f64,

    /// Custom row heights
    row_heights: BTreeMap<u32, f64>,
}

impl CellStorage {
    /// Create a new empty cell storage
    pub fn new() -> Self {
        Self {
            rows: BTreeMap::new(),
            default_row_height: 15.0,
            row_heights: BTreeMap::new(),
        }
    }

    /// Get a cell value
    pub fn get(&self, row: u32, col: u16) -> Option<&CellValue> {
        self.rows.get(&row).and_then(|r| r.get(&col))
    }

    /// Set a cell value
    ///
    /// Setting [`CellValue::Empty`] removes the cell.
    pub fn set(&mut self, row: u32, col: u16, value: CellValue) {
        if value.is_empty() {
            self.remove(row, col);
        } else {
            self.rows.entry(row).or_default().insert(col, value);
        }
    }

    /// Remove a cell
    pub fn remove(&mut self, row: u32, col: u16) -> Option<CellValue> {
        let result = self.rows.get_mut(&row).and_then(|r| r.remove(&col));

        // Clean up empty rows
        if self.rows.get(&row).is_some_and(|r| r.is_empty()) {
            self.rows.remove(&row);
        }

        result
    }

    /// Get the number of non-empty cells
    pub fn cell_count(&self) -> usize {
        self.rows.values().map(|r| r.len()).sum()
    }

    /// Check if storage is empty
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Index of the last row holding at least one cell
    pub fn last_row(&self) -> Option<u32> {
        self.rows.keys().next_back().copied()
    }

    /// Index of the right-most column used by any row
    pub fn last_col(&self) -> Option<u16> {
        self.rows
            .values()
            .filter_map(|cols| cols.keys().next_back().copied())
            .max()
    }

    /// Iterate over all cells in row order
    pub fn iter(&self) -> impl Iterator<Item = (u32, u16, &CellValue)> {
        self.rows
            .iter()
            .flat_map(|(&row, cols)| cols.iter().map(move |(&col, value)| (row, col, value)))
    }

    /// Iterate over cells in a specific row
    pub fn iter_row(&self, row: u32) -> impl Iterator<Item = (u16, &CellValue)> {
        self.rows
            .get(&row)
            .into_iter()
            .flat_map(|cols| cols.iter().map(|(&col, value)| (col, value)))
    }

    /// Iterate over row indices that have data
    pub fn row_indices(&self) -> impl Iterator<Item = u32> + '_ {
        self.rows.keys().copied()
    }

    /// Get default row height
    pub fn default_row_height(&self) -> f64 {
        self.default_row_height
    }

    /// Get row height (returns default if not customized)
    pub fn row_height(&self, row: u32) -> f64 {
        self.row_heights
            .get(&row)
            .copied()
            .unwrap_or(self.default_row_height)
    }

    /// Set custom row height
    pub fn set_row_height(&mut self, row: u32, height: f64) {
        if (height - self.default_row_height).abs() < 0.001 {
            self.row_heights.remove(&row);
        } else {
            self.row_heights.insert(row, height);
        }
    }

    /// Move every stored row in `first..=last` down by `amount` rows.
    ///
    /// Destination rows are overwritten. Rows below `last` that are not
    /// overwritten stay where they are. When nothing is stored at or below
    /// `first` the call is a no-op and succeeds even at the end of the sheet.
    /// With `copy_row_height` the moved rows keep their custom heights; with
    /// `reset_row_height` the source rows fall back to the default height.
    pub fn shift_rows_down(
        &mut self,
        first: u32,
        last: u32,
        amount: u32,
        copy_row_height: bool,
        reset_row_height: bool,
    ) -> Result<()> {
        if first > last {
            return Err(Error::InvalidShift {
                first,
                last,
                amount,
                reason: "first row is after last row",
            });
        }
        if amount == 0 || self.is_clear_from(first) {
            return Ok(());
        }
        if u64::from(last) + u64::from(amount) >= u64::from(MAX_ROWS) {
            return Err(Error::InvalidShift {
                first,
                last,
                amount,
                reason: "rows would move past the end of the sheet",
            });
        }

        let dest_end = last + amount;

        // Cut the grid into [..first), [first..=last] and (last..]
        let mut block = self.rows.split_off(&first);
        let below = block.split_off(&(last + 1));
        for (row, cols) in below {
            if row > dest_end {
                self.rows.insert(row, cols);
            }
        }
        for (row, cols) in block {
            self.rows.insert(row + amount, cols);
        }

        let moved_heights: Vec<(u32, f64)> = self
            .row_heights
            .range(first..=last)
            .map(|(&row, &height)| (row, height))
            .collect();
        if reset_row_height {
            for (row, _) in &moved_heights {
                self.row_heights.remove(row);
            }
        }
        if copy_row_height {
            for (row, height) in moved_heights {
                self.row_heights.insert(row + amount, height);
            }
        }

        Ok(())
    }

    /// Check that no cell or custom height is stored at `row` or below
    fn is_clear_from(&self, row: u32) -> bool {
        self.rows.range(row..).next().is_none() && self.row_heights.range(row..).next().is_none()
    }
}

impl Default for CellStorage {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn filled(rows: u32, cols: u16) -> CellStorage {
        let mut storage = CellStorage::new();
        for row in 0..rows {
            for col in 0..cols {
                storage.set(row, col, CellValue::Number(f64::from(row)));
            }
        }
        storage
    }

    #[test]
    fn test_basic_operations() {
        let mut storage = CellStorage::new();

        storage.set(0, 0, CellValue::Number(42.0));
        assert_eq!(storage.get(0, 0).and_then(|v| v.as_number()), Some(42.0));

        // Get non-existent
        assert!(storage.get(1, 1).is_none());
    }

    #[test]
    fn test_empty_cells_not_stored() {
        let mut storage = CellStorage::new();

        storage.set(0, 0, CellValue::Number(42.0));
        assert_eq!(storage.cell_count(), 1);

        // Setting empty removes the cell
        storage.set(0, 0, CellValue::Empty);
        assert_eq!(storage.cell_count(), 0);
        assert!(storage.is_empty());
    }

    #[test]
    fn test_last_row_and_col() {
        let mut storage = CellStorage::new();
        assert_eq!(storage.last_row(), None);
        assert_eq!(storage.last_col(), None);

        storage.set(5, 3, CellValue::Number(1.0));
        storage.set(2, 7, CellValue::Number(2.0));

        assert_eq!(storage.last_row(), Some(5));
        assert_eq!(storage.last_col(), Some(7));
    }

    #[test]
    fn test_shift_opens_gap() {
        let mut storage = filled(5, 2);

        storage.shift_rows_down(1, 4, 2, false, true).unwrap();

        assert_eq!(storage.get(0, 0), Some(&CellValue::Number(0.0)));
        assert!(storage.get(1, 0).is_none());
        assert!(storage.get(2, 0).is_none());
        assert_eq!(storage.get(3, 0), Some(&CellValue::Number(1.0)));
        assert_eq!(storage.get(6, 1), Some(&CellValue::Number(4.0)));
        assert_eq!(storage.last_row(), Some(6));
    }

    #[test]
    fn test_shift_overwrites_destination() {
        let mut storage = filled(2, 1);
        storage.set(3, 4, CellValue::string("stale"));

        // Row 1 lands on row 3; the old row 3 is replaced wholesale
        storage.shift_rows_down(1, 1, 2, false, true).unwrap();

        assert_eq!(storage.get(3, 0), Some(&CellValue::Number(1.0)));
        assert!(storage.get(3, 4).is_none());
    }

    #[test]
    fn test_shift_keeps_rows_below_block() {
        let mut storage = filled(6, 1);

        storage.shift_rows_down(0, 1, 1, false, true).unwrap();

        let rows: Vec<u32> = storage.row_indices().collect();
        // old 0,1 → 1,2; old 2 overwritten; 3,4,5 untouched
        assert_eq!(rows, vec![1, 2, 3, 4, 5]);
        assert_eq!(storage.get(2, 0), Some(&CellValue::Number(1.0)));
        assert_eq!(storage.get(3, 0), Some(&CellValue::Number(3.0)));
    }

    #[test]
    fn test_shift_row_heights() {
        let mut storage = filled(3, 1);
        storage.set_row_height(1, 30.0);

        storage.shift_rows_down(1, 2, 1, true, true).unwrap();
        assert_eq!(storage.row_height(1), 15.0);
        assert_eq!(storage.row_height(2), 30.0);

        storage.shift_rows_down(2, 3, 1, false, true).unwrap();
        assert_eq!(storage.row_height(2), 15.0);
        assert_eq!(storage.row_height(3), 15.0);
    }

    #[test]
    fn test_shift_rejects_bad_ranges() {
        let mut storage = filled(2, 1);

        assert!(matches!(
            storage.shift_rows_down(3, 1, 1, false, true),
            Err(Error::InvalidShift { .. })
        ));
        assert!(storage
            .shift_rows_down(0, MAX_ROWS - 1, 1, false, true)
            .is_err());
        // untouched after rejection
        assert_eq!(storage.cell_count(), 2);
    }

    #[test]
    fn test_shift_data_off_the_end_is_rejected() {
        let mut storage = CellStorage::new();
        storage.set(MAX_ROWS - 1, 0, CellValue::Number(1.0));

        assert!(matches!(
            storage.shift_rows_down(MAX_ROWS - 1, MAX_ROWS - 1, 1, false, true),
            Err(Error::InvalidShift { .. })
        ));
        assert_eq!(storage.last_row(), Some(MAX_ROWS - 1));
    }

    #[test]
    fn test_shift_empty_tail_at_end_of_sheet_is_noop() {
        let mut storage = filled(1, 1);

        storage
            .shift_rows_down(MAX_ROWS - 1, MAX_ROWS - 1, 1, false, true)
            .unwrap();

        assert_eq!(storage.cell_count(), 1);
        assert_eq!(storage.get(0, 0), Some(&CellValue::Number(0.0)));
    }

    #[test]
    fn test_shift_custom_height_blocks_noop_at_end() {
        let mut storage = CellStorage::new();
        storage.set_row_height(MAX_ROWS - 1, 30.0);

        assert!(storage
            .shift_rows_down(MAX_ROWS - 1, MAX_ROWS - 1, 1, true, true)
            .is_err());
        assert_eq!(storage.row_height(MAX_ROWS - 1), 30.0);
    }

    #[test]
    fn test_shift_on_empty_storage_is_noop() {
        let mut storage = CellStorage::new();
        storage.shift_rows_down(0, 0, 8, false, true).unwrap();
        assert!(storage.is_empty());
    }

    #[test]
    fn test_iteration() {
        let mut storage = CellStorage::new();

        storage.set(0, 0, CellValue::Number(1.0));
        storage.set(0, 1, CellValue::Number(2.0));
        storage.set(1, 0, CellValue::Number(3.0));

        let cells: Vec<_> = storage.iter().collect();
        assert_eq!(cells.len(), 3);

        // Should be in row order
        assert_eq!(cells[0].0, 0);
        assert_eq!(cells[1].0, 0);
        assert_eq!(cells[2].0, 1);
    }
}
