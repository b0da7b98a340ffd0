//! Coordinate-keyed sparse matrix store
//!
//! Only non-zero entries are stored; an absent coordinate reads as
//! zero. Writing a zero removes the coordinate, so the map never
//! carries explicit zeros and the serialized form never contains them.

use hashbrown::HashMap;

use crate::validation::{check_dimensions, check_position};
use crate::Result;

/// Sparse integer matrix backed by a (row, col) → value map
///
/// # Examples
///
/// ```
/// use smtx_core::SparseMatrix;
///
/// let mut matrix = SparseMatrix::new(100, 100)?;
/// matrix.set(0, 0, 7)?;
/// matrix.set(0, 50, -3)?;
/// assert_eq!(matrix.get(0, 0)?, 7);
/// assert_eq!(matrix.get(0, 1)?, 0); // unset entries are implicitly zero
/// assert_eq!(matrix.nnz(), 2);
/// # Ok::<(), smtx_core::SmtxError>(())
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SparseMatrix {
    rows: usize,
    cols: usize,
    entries: HashMap<(usize, usize), i64>,
}

impl SparseMatrix {
    /// Create an empty matrix with the given dimensions
    ///
    /// Fails with a validation error if either dimension is zero.
    pub fn new(rows: usize, cols: usize) -> Result<Self> {
        check_dimensions(rows as i64, cols as i64)?;
        Ok(Self {
            rows,
            cols,
            entries: HashMap::new(),
        })
    }

    /// Get the value at a position, zero if no entry is stored
    ///
    /// Fails with a bounds error if the position is outside the
    /// declared dimensions.
    pub fn get(&self, row: usize, col: usize) -> Result<i64> {
        check_position(row, col, self.rows, self.cols)?;
        Ok(self.entries.get(&(row, col)).copied().unwrap_or(0))
    }

    /// Set the value at a position
    ///
    /// A non-zero value inserts or overwrites the entry; zero removes
    /// it (no-op when absent). Fails with a bounds error if the
    /// position is outside the declared dimensions.
    pub fn set(&mut self, row: usize, col: usize, value: i64) -> Result<()> {
        check_position(row, col, self.rows, self.cols)?;
        if value != 0 {
            self.entries.insert((row, col), value);
        } else {
            self.entries.remove(&(row, col));
        }
        Ok(())
    }

    /// Number of rows
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Number of columns
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Matrix dimensions as (rows, cols)
    pub fn dimensions(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }

    /// Number of non-zero entries stored
    pub fn nnz(&self) -> usize {
        self.entries.len()
    }

    /// Iterate over stored entries as (&(row, col), &value)
    ///
    /// Iteration order is unspecified; callers that need a
    /// deterministic order use [`sorted_entries`](Self::sorted_entries).
    pub fn iter(&self) -> impl Iterator<Item = (&(usize, usize), &i64)> {
        self.entries.iter()
    }

    /// Stored entries as (row, col, value) sorted ascending by (row, col)
    ///
    /// The canonical serialization order. Sorting is explicit; the
    /// underlying map's iteration order is never relied on.
    pub fn sorted_entries(&self) -> Vec<(usize, usize, i64)> {
        let mut entries: Vec<(usize, usize, i64)> = self
            .entries
            .iter()
            .map(|(&(row, col), &value)| (row, col, value))
            .collect();
        entries.sort_unstable_by_key(|&(row, col, _)| (row, col));
        entries
    }
}
