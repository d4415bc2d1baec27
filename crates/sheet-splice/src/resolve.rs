//! Turning range specifications into concrete target indices

use sheet_splice_core::MAX_COLS;

use crate::error::{Error, Result};
use crate::grid::SheetGrid;
use crate::payload::DataShape;
use crate::range::RangeSpec;

/// Extent of the sheet as seen before any edit
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SheetBounds {
    /// Last used row, `None` for an empty sheet
    pub last_row: Option<u32>,
    /// Last used column, `None` for an empty sheet
    pub last_column: Option<u16>,
}

impl SheetBounds {
    /// Read the bounds of a grid
    pub fn of<G: SheetGrid + ?Sized>(grid: &G) -> Self {
        Self {
            last_row: grid.last_row_index(),
            last_column: grid.last_column_index(),
        }
    }

    /// Bounds of a sheet whose last used row is `last_row`
    pub fn with_last_row(last_row: Option<u32>) -> Self {
        Self {
            last_row,
            last_column: None,
        }
    }

    /// Check if the sheet holds no data
    pub fn is_empty(&self) -> bool {
        self.last_row.is_none()
    }

    /// First row after the used area
    pub fn next_free_row(&self) -> u32 {
        self.last_row.map_or(0, |row| row + 1)
    }

    /// The same bounds with row 0 counted as used, for a sheet about to
    /// receive its header row
    pub fn with_header_row(self) -> Self {
        Self {
            last_row: Some(self.last_row.unwrap_or(0)),
            ..self
        }
    }
}

/// Resolves user range specifications into target row/column indices
pub struct IndexResolver;

impl IndexResolver {
    /// Target rows for writing a payload of `shape`.
    ///
    /// An explicit `spec` always wins, whatever the sheet size. An empty
    /// `spec` appends: `shape.rows` consecutive rows right after the last used
    /// row. When resolving for the shift pass of a payload with a header,
    /// explicit indices move down one row to make room for the header; append
    /// targets never do.
    pub fn rows(
        spec: &str,
        bounds: SheetBounds,
        shape: DataShape,
        has_header: bool,
        for_shift: bool,
    ) -> Result<RangeSpec> {
        let parsed = RangeSpec::parse(spec)?;
        let resolved = if parsed.is_empty() {
            RangeSpec::contiguous(bounds.next_free_row(), shape.rows)
        } else if has_header && for_shift {
            parsed.offset(1)
        } else {
            parsed
        };
        log::debug!("resolved rows '{}' -> {:?}", spec, resolved.as_slice());
        Ok(resolved)
    }

    /// Target columns for writing a payload of `shape`.
    ///
    /// An empty `spec` means `0..shape.columns`; explicit indices are used
    /// verbatim.
    pub fn columns(spec: &str, shape: DataShape) -> Result<RangeSpec> {
        let parsed = RangeSpec::parse(spec)?;
        let resolved = if parsed.is_empty() {
            RangeSpec::contiguous(0, shape.columns)
        } else {
            parsed
        };
        check_columns(spec, &resolved)?;
        log::debug!("resolved columns '{}' -> {:?}", spec, resolved.as_slice());
        Ok(resolved)
    }

    /// Rows to read from an existing sheet.
    ///
    /// An empty `spec` means every row from `first_data_row` to the last used
    /// row; explicit indices before `first_data_row` are dropped.
    pub fn existing_rows(spec: &str, first_data_row: u32, bounds: SheetBounds) -> Result<RangeSpec> {
        let parsed = RangeSpec::parse(spec)?;
        if parsed.is_empty() {
            return Ok(match bounds.last_row {
                Some(last) if last >= first_data_row => {
                    RangeSpec::from_indices(first_data_row..=last)
                }
                _ => RangeSpec::default(),
            });
        }
        Ok(RangeSpec::from_indices(
            parsed.iter().filter(|row| *row >= first_data_row),
        ))
    }

    /// Columns to read from an existing sheet; an empty `spec` means every
    /// column up to the last used one.
    pub fn existing_columns(spec: &str, bounds: SheetBounds) -> Result<RangeSpec> {
        let parsed = RangeSpec::parse(spec)?;
        let resolved = if parsed.is_empty() {
            match bounds.last_column {
                Some(last) => RangeSpec::from_indices(0..=u32::from(last)),
                None => RangeSpec::default(),
            }
        } else {
            parsed
        };
        check_columns(spec, &resolved)?;
        Ok(resolved)
    }
}

fn check_columns(spec: &str, columns: &RangeSpec) -> Result<()> {
    match columns.as_slice().last() {
        Some(&last) if last >= u32::from(MAX_COLS) => Err(Error::invalid_range(
            spec,
            format!("column {} exceeds the sheet limit of {}", last, MAX_COLS - 1),
        )),
        _ => Ok(()),
    }
}
