//! Writing tokenized payloads into the grid

use sheet_splice_core::{CellValue, ScalarInput};

use crate::error::{Axis, Error, Result};
use crate::grid::SheetGrid;
use crate::payload::DataTable;
use crate::range::RangeSpec;

/// How data lands on the target rows
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WriteMode {
    /// Write straight onto existing rows, replacing touched cells only
    Overwrite,
    /// Write into rows previously opened by the shift scheduler
    Insert,
}

impl WriteMode {
    /// `true` → [`WriteMode::Overwrite`]
    pub fn from_overwrite(overwrite: bool) -> Self {
        if overwrite {
            WriteMode::Overwrite
        } else {
            WriteMode::Insert
        }
    }
}

/// Writes payload tokens at resolved row/column indices
pub struct GridWriter;

impl GridWriter {
    /// Check that every payload row and cell has a target index.
    pub fn check_fits(table: &DataTable, rows: &RangeSpec, columns: &RangeSpec) -> Result<()> {
        let shape = table.shape();
        if shape.rows > rows.len() {
            return Err(Error::IndexOutOfRange {
                axis: Axis::Row,
                count: shape.rows,
                available: rows.len(),
            });
        }
        if shape.columns > columns.len() {
            return Err(Error::IndexOutOfRange {
                axis: Axis::Column,
                count: shape.columns,
                available: columns.len(),
            });
        }
        Ok(())
    }

    /// Write the i-th payload row to `rows[i]` and its j-th token to
    /// `columns[j]`.
    ///
    /// Tokens are coerced integer → decimal → text. Cells outside the
    /// payload are left alone. Nothing is written when the payload does not
    /// fit the indices. Returns the number of cells written.
    pub fn write<G: SheetGrid + ?Sized>(
        grid: &mut G,
        table: &DataTable,
        rows: &RangeSpec,
        columns: &RangeSpec,
        mode: WriteMode,
    ) -> Result<usize> {
        Self::check_fits(table, rows, columns)?;

        let mut written = 0;
        for (data_row, target_row) in table.rows().iter().zip(rows.iter()) {
            if mode == WriteMode::Insert && !grid.is_row_blank(target_row) {
                log::warn!("inserting into row {} which already holds data", target_row);
            }
            for (token, target_col) in data_row.iter().zip(columns.iter()) {
                let col = column_index(columns, target_col)?;
                grid.set_cell(target_row, col, CellValue::from(ScalarInput::parse(token)))?;
                written += 1;
            }
        }
        Ok(written)
    }

    /// Write header tokens to row 0, starting at column 0.
    pub fn write_header<G: SheetGrid + ?Sized>(grid: &mut G, header: &[String]) -> Result<()> {
        for (col, token) in header.iter().enumerate() {
            let col = u16::try_from(col).map_err(|_| Error::IndexOutOfRange {
                axis: Axis::Column,
                count: header.len(),
                available: usize::from(u16::MAX),
            })?;
            grid.set_cell(0, col, CellValue::from(ScalarInput::parse(token)))?;
        }
        Ok(())
    }
}

fn column_index(columns: &RangeSpec, col: u32) -> Result<u16> {
    u16::try_from(col).map_err(|_| {
        Error::invalid_range(
            &columns.to_spec_string(),
            format!("column {} does not fit in a worksheet", col),
        )
    })
}
