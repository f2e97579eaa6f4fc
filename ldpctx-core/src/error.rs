//! Error types for LDPCTX operations

/// Errors that can occur while deriving an encoder from a parity-check matrix
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LdpcError {
    /// Matrix has no rows or no columns
    EmptyMatrix,
    /// A row does not have the same length as the first row
    RaggedRow {
        row: usize,
        expected: usize,
        found: usize,
    },
    /// More parity constraints than codeword bits
    TooManyRows { rows: usize, cols: usize },
    /// The block that must become the identity is not square
    NonSquareBlock { rows: usize, cols: usize },
    /// Operand dimensions do not line up
    DimensionMismatch { left: usize, right: usize },
    /// No pivot row carries a one in the pivot column
    RankDeficiency { row: usize, column: usize },
    /// Identity block was not confirmed before building the generator
    Precondition { row: usize },
    /// Unexpected character in a bit-row listing (1-based line and column)
    InvalidDigit { line: usize, column: usize },
    /// Malformed alist content (1-based line)
    InvalidAlist { line: usize },
    /// Index outside the declared matrix dimensions
    IndexOutOfBounds { index: usize, bound: usize },
}

/// Coarse grouping of [`LdpcError`] variants
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    /// Inconsistent dimensions, rejected before any row operation
    Shape,
    /// Elimination could not find a pivot
    Rank,
    /// Caller ordering bug
    Precondition,
    /// Textual matrix input could not be read
    Parse,
}

impl LdpcError {
    /// Category of this error
    pub const fn category(&self) -> ErrorCategory {
        match self {
            LdpcError::EmptyMatrix
            | LdpcError::RaggedRow { .. }
            | LdpcError::TooManyRows { .. }
            | LdpcError::NonSquareBlock { .. }
            | LdpcError::DimensionMismatch { .. } => ErrorCategory::Shape,
            LdpcError::RankDeficiency { .. } => ErrorCategory::Rank,
            LdpcError::Precondition { .. } => ErrorCategory::Precondition,
            LdpcError::InvalidDigit { .. }
            | LdpcError::InvalidAlist { .. }
            | LdpcError::IndexOutOfBounds { .. } => ErrorCategory::Parse,
        }
    }
}

impl core::fmt::Display for LdpcError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            LdpcError::EmptyMatrix => write!(f, "matrix has no rows or no columns"),
            LdpcError::RaggedRow {
                row,
                expected,
                found,
            } => write!(f, "row {row} has {found} columns, expected {expected}"),
            LdpcError::TooManyRows { rows, cols } => write!(
                f,
                "parity-check matrix has more rows than columns ({rows}x{cols})"
            ),
            LdpcError::NonSquareBlock { rows, cols } => {
                write!(f, "identity block is not square ({rows}x{cols})")
            }
            LdpcError::DimensionMismatch { left, right } => {
                write!(f, "dimension mismatch: {left} vs {right}")
            }
            LdpcError::RankDeficiency { row, column } => write!(
                f,
                "no pivot for row {row} in column {column}: matrix lacks full rank on its trailing columns"
            ),
            LdpcError::Precondition { row } => write!(
                f,
                "identity block not confirmed (row {row} is not a basis row)"
            ),
            LdpcError::InvalidDigit { line, column } => {
                write!(f, "invalid bit at line {line}, column {column}")
            }
            LdpcError::InvalidAlist { line } => write!(f, "malformed alist at line {line}"),
            LdpcError::IndexOutOfBounds { index, bound } => {
                write!(f, "index {index} out of bounds (limit {bound})")
            }
        }
    }
}

/// Result type for LDPCTX operations
pub type Result<T> = core::result::Result<T, LdpcError>;

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::string::ToString;

    #[test]
    fn test_categories() {
        assert_eq!(LdpcError::EmptyMatrix.category(), ErrorCategory::Shape);
        assert_eq!(
            LdpcError::RankDeficiency { row: 1, column: 4 }.category(),
            ErrorCategory::Rank
        );
        assert_eq!(
            LdpcError::Precondition { row: 0 }.category(),
            ErrorCategory::Precondition
        );
        assert_eq!(
            LdpcError::InvalidAlist { line: 3 }.category(),
            ErrorCategory::Parse
        );
    }

    #[test]
    fn test_display_carries_indices() {
        let msg = LdpcError::RankDeficiency { row: 2, column: 5 }.to_string();
        assert!(msg.contains("row 2"));
        assert!(msg.contains("column 5"));
    }
}
