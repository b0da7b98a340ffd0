//! Dimension and bounds validation for the SMTX store
//!
//! This module provides pure validation functions with no I/O
//! dependencies. All checks are mathematical constraints on matrix
//! shapes and coordinates.

use crate::{Result, SmtxError};

/// Validate declared matrix dimensions
///
/// Dimensions arrive from the text header as signed integers; both
/// must be strictly positive. Returns the dimensions as `usize` on
/// success.
pub fn check_dimensions(rows: i64, cols: i64) -> Result<(usize, usize)> {
    if rows <= 0 || cols <= 0 {
        return Err(SmtxError::InvalidDimensions { rows, cols });
    }
    Ok((rows as usize, cols as usize))
}

/// Validate a coordinate against a matrix shape
///
/// Used by `get`/`set` to reject out-of-bounds access.
pub fn check_position(row: usize, col: usize, rows: usize, cols: usize) -> Result<()> {
    if row >= rows || col >= cols {
        return Err(SmtxError::PositionOutOfBounds {
            row,
            col,
            rows,
            cols,
        });
    }
    Ok(())
}

/// Check whether a signed coordinate pair falls inside a matrix shape
///
/// Parsed entry coordinates may be negative; the parser drops
/// out-of-range entries instead of failing, so this is a plain
/// predicate rather than a `Result`.
pub fn position_in_bounds(row: i64, col: i64, rows: usize, cols: usize) -> bool {
    row >= 0 && col >= 0 && (row as usize) < rows && (col as usize) < cols
}
