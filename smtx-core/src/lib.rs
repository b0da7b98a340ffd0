//! SMTX Core - Sparse Matrix Store and Arithmetic
//!
//! This crate provides the coordinate-keyed sparse matrix store, its
//! validation rules, and the arithmetic operations over it. It
//! performs no I/O; the text format reader/writer and the CLI driver
//! live in the `smtx` crate.

pub mod error;
pub mod matrix;
pub mod ops;
pub mod validation;

pub use error::{ErrorCategory, Result, SmtxError};
pub use matrix::SparseMatrix;
pub use validation::{check_dimensions, check_position, position_in_bounds};
