//! Text format serializer for sparse matrix files
//!
//! Writes the canonical form: header lines followed by one
//! `(row, col, value)` line per stored entry, sorted ascending by
//! (row, col). The store never holds zeros, so no zero line is ever
//! written.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use smtx_core::{Result, SparseMatrix};

/// Serialize a sparse matrix to any writer
pub fn write_matrix<W: Write>(mut writer: W, matrix: &SparseMatrix) -> Result<()> {
    writeln!(writer, "rows={}", matrix.rows())?;
    writeln!(writer, "cols={}", matrix.cols())?;
    for (row, col, value) in matrix.sorted_entries() {
        writeln!(writer, "({row}, {col}, {value})")?;
    }
    Ok(())
}

/// Serialize a sparse matrix to a file on disk
///
/// The parent directory must already exist; creating it is the
/// caller's responsibility.
pub fn save_matrix<P: AsRef<Path>>(path: P, matrix: &SparseMatrix) -> Result<()> {
    let file = File::create(path)?;
    let mut writer = BufWriter::new(file);
    write_matrix(&mut writer, matrix)?;
    writer.flush()?;
    Ok(())
}
