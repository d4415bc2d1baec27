//! Opening blank rows at scattered indices with a contiguous-only shift
//!
//! The grid can only push one contiguous block of rows down per call. To
//! open blank rows at an arbitrary sorted set of target indices, the targets
//! are grouped into maximal runs of consecutive indices and each run costs
//! exactly one shift. Runs are processed top to bottom: a shift at one run
//! moves every later row (including the rows around later runs) down, so
//! the targets, which are final row positions, stay valid as-is.
//!
//! Each run therefore shifts from its own first index, not from that index
//! plus the rows inserted so far. The count of inserted rows only extends
//! the last row of the shifted block, which has grown by that much.

use crate::error::{Error, Result};
use crate::grid::SheetGrid;
use crate::range::RangeSpec;

/// Flags passed to every shift primitive call
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ShiftOptions {
    /// Carry custom row heights along with the moved rows
    pub copy_row_height: bool,
    /// Reset the height of vacated rows to the default
    pub reset_row_height: bool,
}

impl Default for ShiftOptions {
    fn default() -> Self {
        Self {
            copy_row_height: false,
            reset_row_height: true,
        }
    }
}

/// One call to the grid's shift primitive
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ShiftOp {
    pub first_row: u32,
    pub last_row: u32,
    /// Number of blank rows opened at `first_row`
    pub amount: u32,
    pub copy_row_height: bool,
    pub reset_row_height: bool,
}

/// Ordered shift operations, computed up front and executed in order
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ShiftPlan {
    ops: Vec<ShiftOp>,
}

impl ShiftPlan {
    /// Operations in execution order
    pub fn ops(&self) -> &[ShiftOp] {
        &self.ops
    }

    /// Number of primitive calls
    pub fn len(&self) -> usize {
        self.ops.len()
    }

    /// Check if nothing needs shifting
    pub fn is_empty(&self) -> bool {
        self.ops.is_empty()
    }

    /// Total rows opened by the plan
    pub fn rows_inserted(&self) -> u32 {
        self.ops.iter().map(|op| op.amount).sum()
    }
}

/// Plans and executes row shifts
pub struct ShiftScheduler;

impl ShiftScheduler {
    /// Plan the shifts that open a blank row at every index of `targets`.
    ///
    /// `current_last_row` is the last used row before any shift (`None` for
    /// an empty sheet). One operation is emitted per run of consecutive
    /// targets. A run at or below the data still gets its operation; the
    /// grid treats it as a no-op move that simply reserves the rows.
    pub fn plan(targets: &RangeSpec, current_last_row: Option<u32>, options: ShiftOptions) -> ShiftPlan {
        let mut inserted: u32 = 0;
        let mut ops = Vec::new();

        for (first_row, amount) in targets.runs() {
            let tail = current_last_row.map(|row| row.saturating_add(inserted));
            let last_row = tail.map_or(first_row, |tail| tail.max(first_row));
            ops.push(ShiftOp {
                first_row,
                last_row,
                amount,
                copy_row_height: options.copy_row_height,
                reset_row_height: options.reset_row_height,
            });
            inserted = inserted.saturating_add(amount);
        }

        ShiftPlan { ops }
    }

    /// Apply a plan to a grid, strictly in plan order.
    ///
    /// The first rejected operation aborts the run; operations already
    /// applied are not rolled back.
    pub fn execute<G: SheetGrid + ?Sized>(plan: &ShiftPlan, grid: &mut G) -> Result<()> {
        for (step, op) in plan.ops().iter().enumerate() {
            log::debug!(
                "shift {}/{}: rows {}..={} down by {}",
                step + 1,
                plan.len(),
                op.first_row,
                op.last_row,
                op.amount
            );
            grid.shift_rows_down(
                op.first_row,
                op.last_row,
                op.amount,
                op.copy_row_height,
                op.reset_row_height,
            )
            .map_err(Error::ShiftFailure)?;
        }
        Ok(())
    }
}
