//! Dimension checks performed before any row operation

use crate::{LdpcError, Result};

/// Check that a stream of row lengths describes a non-empty rectangle
///
/// Returns the common row length.
pub fn validate_row_lengths(mut lengths: impl Iterator<Item = usize>) -> Result<usize> {
    let expected = lengths.next().ok_or(LdpcError::EmptyMatrix)?;
    if expected == 0 {
        return Err(LdpcError::EmptyMatrix);
    }
    for (i, found) in lengths.enumerate() {
        if found != expected {
            return Err(LdpcError::RaggedRow {
                row: i + 1,
                expected,
                found,
            });
        }
    }
    Ok(expected)
}

/// Validate a `rows`×`cols` parity-check shape
///
/// Returns the number of information bits `k = cols - rows`.
pub const fn validate_parity_shape(rows: usize, cols: usize) -> Result<usize> {
    if rows == 0 || cols == 0 {
        return Err(LdpcError::EmptyMatrix);
    }
    if rows > cols {
        return Err(LdpcError::TooManyRows { rows, cols });
    }
    Ok(cols - rows)
}
