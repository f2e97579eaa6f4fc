//! Core matrix abstraction traits
//!
//! These traits give format-agnostic access to binary matrices so that
//! loaders and renderers do not depend on the dense storage layout.

use alloc::vec::Vec;

/// Read access to a matrix over GF(2)
pub trait BinaryMatrix {
    /// Get the bit at the specified position
    ///
    /// Returns `None` if the position is out of bounds.
    fn get_element(&self, row: usize, col: usize) -> Option<bool>;

    /// Get matrix dimensions as (rows, cols)
    fn dimensions(&self) -> (usize, usize);

    /// Number of set bits
    fn weight(&self) -> usize;
}

/// Extension trait for row/column support queries
pub trait MatrixOperations: BinaryMatrix {
    /// Column indices holding a one in `row_index`, in ascending order
    fn row_support(&self, row_index: usize) -> Vec<usize>;

    /// Row indices holding a one in `col_index`, in ascending order
    fn col_support(&self, col_index: usize) -> Vec<usize>;
}
