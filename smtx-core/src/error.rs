//! Error types for SMTX operations

use core::fmt;

/// Errors that can occur during SMTX operations
#[derive(Debug)]
pub enum SmtxError {
    /// Matrix dimensions are zero or negative
    InvalidDimensions {
        /// Declared row count
        rows: i64,
        /// Declared column count
        cols: i64,
    },
    /// Operand shapes are incompatible for the requested operation
    DimensionMismatch {
        /// Operation name for the error message
        op: &'static str,
        /// Left operand shape as (rows, cols)
        lhs: (usize, usize),
        /// Right operand shape as (rows, cols)
        rhs: (usize, usize),
    },
    /// Coordinate access outside the declared dimensions
    PositionOutOfBounds {
        /// Requested row
        row: usize,
        /// Requested column
        col: usize,
        /// Matrix row count
        rows: usize,
        /// Matrix column count
        cols: usize,
    },
    /// The `rows=`/`cols=` header lines are missing or malformed
    MissingHeader,
    /// A header dimension is not a parseable integer
    InvalidDimensionValue {
        /// 1-based line number of the offending header line
        line: usize,
    },
    /// An entry line does not match `(row, col, value)`
    MalformedEntry {
        /// 1-based line number of the offending entry line
        line: usize,
        /// Short description of the deviation
        reason: &'static str,
    },
    /// Underlying I/O failure while reading or writing a matrix file
    Io(std::io::Error),
}

/// Coarse error categories, one per failure class
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    /// Dimension validation failures
    Validation,
    /// Text format violations
    Format,
    /// Coordinate bounds violations
    Bounds,
    /// I/O failures
    Io,
}

impl SmtxError {
    /// Get the category this error belongs to
    pub fn category(&self) -> ErrorCategory {
        match self {
            SmtxError::InvalidDimensions { .. } | SmtxError::DimensionMismatch { .. } => {
                ErrorCategory::Validation
            }
            SmtxError::MissingHeader
            | SmtxError::InvalidDimensionValue { .. }
            | SmtxError::MalformedEntry { .. } => ErrorCategory::Format,
            SmtxError::PositionOutOfBounds { .. } => ErrorCategory::Bounds,
            SmtxError::Io(_) => ErrorCategory::Io,
        }
    }
}

impl fmt::Display for SmtxError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SmtxError::InvalidDimensions { rows, cols } => {
                write!(f, "matrix dimensions must be positive (got {rows}x{cols})")
            }
            SmtxError::DimensionMismatch { op, lhs, rhs } => {
                write!(
                    f,
                    "matrix dimensions incompatible for {op}: {}x{} vs {}x{}",
                    lhs.0, lhs.1, rhs.0, rhs.1
                )
            }
            SmtxError::PositionOutOfBounds {
                row,
                col,
                rows,
                cols,
            } => {
                write!(
                    f,
                    "position ({row}, {col}) is out of bounds for a {rows}x{cols} matrix"
                )
            }
            SmtxError::MissingHeader => {
                write!(f, "file format is incorrect: expected 'rows=' and 'cols=' header lines")
            }
            SmtxError::InvalidDimensionValue { line } => {
                write!(f, "line {line}: matrix dimension must be an integer")
            }
            SmtxError::MalformedEntry { line, reason } => {
                write!(f, "line {line}: {reason}")
            }
            SmtxError::Io(err) => write!(f, "i/o error: {err}"),
        }
    }
}

impl std::error::Error for SmtxError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            SmtxError::Io(err) => Some(err),
            _ => None,
        }
    }
}

impl From<std::io::Error> for SmtxError {
    fn from(err: std::io::Error) -> Self {
        SmtxError::Io(err)
    }
}

/// Result type for SMTX operations
pub type Result<T> = core::result::Result<T, SmtxError>;
