//! Arithmetic over sparse matrix stores
//!
//! All three operations leave their inputs untouched and return a
//! freshly allocated result. Entries that net to zero vanish through
//! the store's zero-deletion rule, so results never carry explicit
//! zeros.

use hashbrown::HashMap;

use crate::{Result, SmtxError, SparseMatrix};

impl SparseMatrix {
    /// Elementwise sum of two equal-shaped matrices
    ///
    /// Fails with a validation error if the shapes differ.
    pub fn add(&self, other: &Self) -> Result<Self> {
        self.combine(other, "addition", 1)
    }

    /// Elementwise difference of two equal-shaped matrices
    ///
    /// Fails with a validation error if the shapes differ.
    pub fn subtract(&self, other: &Self) -> Result<Self> {
        self.combine(other, "subtraction", -1)
    }

    fn combine(&self, other: &Self, op: &'static str, sign: i64) -> Result<Self> {
        if self.dimensions() != other.dimensions() {
            return Err(SmtxError::DimensionMismatch {
                op,
                lhs: self.dimensions(),
                rhs: other.dimensions(),
            });
        }

        let mut result = Self::new(self.rows(), self.cols())?;

        for (&(row, col), &value) in self.iter() {
            result.set(row, col, value)?;
        }
        for (&(row, col), &value) in other.iter() {
            let current = result.get(row, col)?;
            result.set(row, col, current + sign * value)?;
        }

        Ok(result)
    }

    /// Matrix product, requires `self.cols() == other.rows()`
    ///
    /// Builds a row-keyed index of `other` once in O(nnz), then
    /// accumulates products only where both operands have non-zero
    /// entries. Cost is proportional to nnz(self) times the fan-out of
    /// the shared inner index, never to the dense rows x cols x inner
    /// product.
    pub fn multiply(&self, other: &Self) -> Result<Self> {
        if self.cols() != other.rows() {
            return Err(SmtxError::DimensionMismatch {
                op: "multiplication",
                lhs: self.dimensions(),
                rhs: other.dimensions(),
            });
        }

        let mut result = Self::new(self.rows(), other.cols())?;

        // Index of the right operand keyed by row: row -> (col -> value)
        let mut other_rows: HashMap<usize, HashMap<usize, i64>> = HashMap::new();
        for (&(row, col), &value) in other.iter() {
            other_rows.entry(row).or_default().insert(col, value);
        }

        for (&(i, k), &a_ik) in self.iter() {
            if let Some(row) = other_rows.get(&k) {
                for (&j, &b_kj) in row {
                    let current = result.get(i, j)?;
                    result.set(i, j, current + a_ik * b_kj)?;
                }
            }
        }

        Ok(result)
    }
}
