//! SMTX - Sparse Matrix Text Format
//!
//! This library stores rectangular matrices with sparse integer
//! entries in a compact coordinate map, reads and writes them in a
//! line-oriented text format, and combines them with addition,
//! subtraction, and multiplication without materializing a dense
//! array.
//!
//! ## Architecture
//!
//! SMTX follows a clean definition/implementation separation:
//!
//! - **smtx-core**: Store, validation, errors, and arithmetic (no I/O)
//! - **smtx**: Text format reader/writer and the CLI driver
//!
//! ## Quick Start
//!
//! ```rust
//! use smtx::{parse_matrix, write_matrix};
//!
//! let a = parse_matrix("rows=2\ncols=2\n(0, 0, 1)\n(1, 1, 2)\n".as_bytes())?;
//! let b = parse_matrix("rows=2\ncols=2\n(0, 0, 3)\n(0, 1, 4)\n".as_bytes())?;
//!
//! let sum = a.add(&b)?;
//! let mut out = Vec::new();
//! write_matrix(&mut out, &sum)?;
//! assert_eq!(out, b"rows=2\ncols=2\n(0, 0, 4)\n(0, 1, 4)\n(1, 1, 2)\n");
//! # Ok::<(), smtx::SmtxError>(())
//! ```
//!
//! ## Format
//!
//! ```text
//! rows=<positive integer>
//! cols=<positive integer>
//! (row, col, value)
//! ...
//! ```
//!
//! Input entries may appear in any order; output is always sorted
//! ascending by (row, col).

// Re-export core store, arithmetic, and error handling
pub use smtx_core::{
    // Store and arithmetic
    SparseMatrix,
    // Error handling
    ErrorCategory, Result, SmtxError,
    // Validation utilities
    check_dimensions, check_position, position_in_bounds,
};

// Implementation modules
pub mod reader;
pub mod writer;

// Public exports
pub use reader::{parse_matrix, read_matrix};
pub use writer::{save_matrix, write_matrix};
