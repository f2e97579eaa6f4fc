//! Input validation and pure parsers
//!
//! Nothing in this module touches the filesystem; the std crate hands it
//! strings and slices it has already read.

pub mod parsing;
pub mod shape;

pub use parsing::{parse_alist, parse_bit_rows};
pub use shape::{validate_parity_shape, validate_row_lengths};
