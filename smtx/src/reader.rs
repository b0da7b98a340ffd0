//! Text format parser for sparse matrix files
//!
//! The format is line oriented: a `rows=`/`cols=` header followed by
//! one `(row, col, value)` triple per line. Lines are trimmed and
//! blank lines are skipped before interpretation, so error line
//! numbers refer to 1-based positions in the filtered line sequence.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use smtx_core::{check_dimensions, position_in_bounds, Result, SmtxError, SparseMatrix};

/// Read a sparse matrix from a file on disk
///
/// Opening failures surface as I/O errors; everything else follows
/// [`parse_matrix`].
pub fn read_matrix<P: AsRef<Path>>(path: P) -> Result<SparseMatrix> {
    let file = File::open(path)?;
    parse_matrix(BufReader::new(file))
}

/// Parse a sparse matrix from any buffered text source
///
/// Entries may appear in any order. An entry whose coordinates fall
/// outside the declared dimensions is dropped rather than rejected,
/// and a coordinate appearing more than once keeps the last value.
pub fn parse_matrix<R: BufRead>(reader: R) -> Result<SparseMatrix> {
    let mut lines = Vec::new();
    for line in reader.lines() {
        let line = line?;
        let trimmed = line.trim();
        if !trimmed.is_empty() {
            lines.push(trimmed.to_owned());
        }
    }

    if lines.len() < 2 {
        return Err(SmtxError::MissingHeader);
    }

    let rows = parse_dimension(&lines[0], "rows=", 1)?;
    let cols = parse_dimension(&lines[1], "cols=", 2)?;
    let (rows, cols) = check_dimensions(rows, cols)?;
    let mut matrix = SparseMatrix::new(rows, cols)?;

    for (index, line) in lines.iter().enumerate().skip(2) {
        let (row, col, value) = parse_entry(line, index + 1)?;
        if !position_in_bounds(row, col, rows, cols) {
            // Out-of-range entries are dropped, not rejected
            continue;
        }
        matrix.set(row as usize, col as usize, value)?;
    }

    Ok(matrix)
}

fn parse_dimension(line: &str, prefix: &'static str, line_number: usize) -> Result<i64> {
    let rest = line.strip_prefix(prefix).ok_or(SmtxError::MissingHeader)?;
    rest.trim()
        .parse::<i64>()
        .map_err(|_| SmtxError::InvalidDimensionValue { line: line_number })
}

fn parse_entry(line: &str, line_number: usize) -> Result<(i64, i64, i64)> {
    let inner = line
        .strip_prefix('(')
        .and_then(|rest| rest.strip_suffix(')'))
        .ok_or(SmtxError::MalformedEntry {
            line: line_number,
            reason: "entries must be in the format (row, col, value)",
        })?;

    let fields: Vec<&str> = inner.split(',').collect();
    if fields.len() != 3 {
        return Err(SmtxError::MalformedEntry {
            line: line_number,
            reason: "need exactly 3 values in parentheses",
        });
    }

    let mut parsed = [0i64; 3];
    for (slot, field) in parsed.iter_mut().zip(&fields) {
        *slot = field.trim().parse::<i64>().map_err(|_| SmtxError::MalformedEntry {
            line: line_number,
            reason: "row, col and value must be integers",
        })?;
    }

    Ok((parsed[0], parsed[1], parsed[2]))
}

#[cfg(test)]
mod tests {
    use super::*;
    use smtx_core::ErrorCategory;

    fn parse(input: &str) -> Result<SparseMatrix> {
        parse_matrix(input.as_bytes())
    }

    #[test]
    fn test_parse_basic_file() {
        let matrix = parse("rows=2\ncols=2\n(0, 0, 1)\n(1, 1, 2)\n").unwrap();

        assert_eq!(matrix.dimensions(), (2, 2));
        assert_eq!(matrix.sorted_entries(), vec![(0, 0, 1), (1, 1, 2)]);
    }

    #[test]
    fn test_blank_lines_and_whitespace_tolerated() {
        let input = "\n  rows=3\n\ncols=3  \n\n ( 0 ,  1 , -5 ) \n\n(2,2,7)\n\n";
        let matrix = parse(input).unwrap();

        assert_eq!(matrix.dimensions(), (3, 3));
        assert_eq!(matrix.sorted_entries(), vec![(0, 1, -5), (2, 2, 7)]);
    }

    #[test]
    fn test_header_only_is_valid() {
        let matrix = parse("rows=4\ncols=5\n").unwrap();
        assert_eq!(matrix.dimensions(), (4, 5));
        assert_eq!(matrix.nnz(), 0);
    }

    #[test]
    fn test_out_of_range_entries_are_dropped() {
        let matrix = parse("rows=2\ncols=2\n(5, 5, 9)\n").unwrap();
        assert_eq!(matrix.nnz(), 0);

        // Negative coordinates are dropped the same way
        let matrix = parse("rows=2\ncols=2\n(-1, 0, 9)\n(0, 0, 3)\n").unwrap();
        assert_eq!(matrix.sorted_entries(), vec![(0, 0, 3)]);
    }

    #[test]
    fn test_duplicate_coordinates_last_write_wins() {
        let matrix = parse("rows=2\ncols=2\n(0, 0, 1)\n(0, 0, 8)\n").unwrap();
        assert_eq!(matrix.sorted_entries(), vec![(0, 0, 8)]);
    }

    #[test]
    fn test_explicit_zero_entries_are_not_stored() {
        let matrix = parse("rows=2\ncols=2\n(0, 0, 5)\n(0, 0, 0)\n(1, 1, 0)\n").unwrap();
        assert_eq!(matrix.nnz(), 0);
    }

    #[test]
    fn test_wrong_field_count_cites_line() {
        let err = parse("rows=2\ncols=2\n(1,2)\n").unwrap_err();
        assert_eq!(err.category(), ErrorCategory::Format);
        assert_eq!(err.to_string(), "line 3: need exactly 3 values in parentheses");

        let err = parse("rows=2\ncols=2\n(0, 0, 1)\n(1, 2, 3, 4)\n").unwrap_err();
        assert_eq!(err.to_string(), "line 4: need exactly 3 values in parentheses");
    }

    #[test]
    fn test_missing_parentheses_rejected() {
        let err = parse("rows=2\ncols=2\n0, 0, 1\n").unwrap_err();
        assert_eq!(
            err.to_string(),
            "line 3: entries must be in the format (row, col, value)"
        );

        assert!(parse("rows=2\ncols=2\n(0, 0, 1\n").is_err());
        assert!(parse("rows=2\ncols=2\n(0, 0, 1) x\n").is_err());
    }

    #[test]
    fn test_non_integer_field_rejected() {
        let err = parse("rows=2\ncols=2\n(0, a, 1)\n").unwrap_err();
        assert_eq!(err.to_string(), "line 3: row, col and value must be integers");

        assert!(parse("rows=2\ncols=2\n(0, 1, 1.5)\n").is_err());
        assert!(parse("rows=2\ncols=2\n(, 1, 2)\n").is_err());
    }

    #[test]
    fn test_missing_or_malformed_header() {
        assert!(matches!(parse("").unwrap_err(), SmtxError::MissingHeader));
        assert!(matches!(parse("rows=2\n").unwrap_err(), SmtxError::MissingHeader));
        assert!(matches!(
            parse("cols=2\nrows=2\n").unwrap_err(),
            SmtxError::MissingHeader
        ));
        assert!(matches!(
            parse("rows=2\nwidth=2\n").unwrap_err(),
            SmtxError::MissingHeader
        ));
    }

    #[test]
    fn test_non_integer_dimension() {
        let err = parse("rows=abc\ncols=2\n").unwrap_err();
        assert_eq!(err.to_string(), "line 1: matrix dimension must be an integer");

        let err = parse("rows=2\ncols=\n").unwrap_err();
        assert_eq!(err.to_string(), "line 2: matrix dimension must be an integer");
    }

    #[test]
    fn test_non_positive_dimensions() {
        let err = parse("rows=0\ncols=2\n").unwrap_err();
        assert_eq!(err.category(), ErrorCategory::Validation);

        assert!(parse("rows=2\ncols=-3\n").is_err());
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let err = read_matrix("/nonexistent/matrix.txt").unwrap_err();
        assert_eq!(err.category(), ErrorCategory::Io);
    }
}
