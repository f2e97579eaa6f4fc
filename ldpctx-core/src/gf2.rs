//! Dense binary matrices and GF(2) primitives
//!
//! Addition over GF(2) is XOR and multiplication is AND. Matrices are stored
//! row-major as one `bool` per entry, which keeps row slices directly
//! addressable for the row operations elimination needs.

use alloc::vec::Vec;
use core::fmt;

use crate::traits::{BinaryMatrix, MatrixOperations};
use crate::validation::shape::validate_row_lengths;
use crate::{LdpcError, Result};

/// Dense row-major matrix over GF(2)
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "RawMatrix"))]
pub struct Gf2Matrix {
    nrows: usize,
    ncols: usize,
    bits: Vec<bool>,
}

/// Unchecked wire form of [`Gf2Matrix`]
#[cfg(feature = "serde")]
#[derive(serde::Deserialize)]
struct RawMatrix {
    nrows: usize,
    ncols: usize,
    bits: Vec<bool>,
}

#[cfg(feature = "serde")]
impl TryFrom<RawMatrix> for Gf2Matrix {
    type Error = LdpcError;

    fn try_from(raw: RawMatrix) -> Result<Self> {
        let expected = raw
            .nrows
            .checked_mul(raw.ncols)
            .ok_or(LdpcError::DimensionMismatch {
                left: raw.nrows,
                right: raw.ncols,
            })?;
        if raw.bits.len() != expected {
            return Err(LdpcError::DimensionMismatch {
                left: raw.bits.len(),
                right: expected,
            });
        }
        Ok(Self {
            nrows: raw.nrows,
            ncols: raw.ncols,
            bits: raw.bits,
        })
    }
}

impl Gf2Matrix {
    /// All-zero matrix
    pub fn zeros(nrows: usize, ncols: usize) -> Self {
        Self {
            nrows,
            ncols,
            bits: alloc::vec![false; nrows * ncols],
        }
    }

    /// `n`×`n` identity
    pub fn identity(n: usize) -> Self {
        Self::from_fn(n, n, |r, c| r == c)
    }

    /// Build a matrix entry by entry
    pub fn from_fn(nrows: usize, ncols: usize, mut f: impl FnMut(usize, usize) -> bool) -> Self {
        let mut bits = Vec::with_capacity(nrows * ncols);
        for r in 0..nrows {
            for c in 0..ncols {
                bits.push(f(r, c));
            }
        }
        Self { nrows, ncols, bits }
    }

    /// Build from boolean rows, rejecting empty and ragged input
    pub fn from_rows<R: AsRef<[bool]>>(rows: &[R]) -> Result<Self> {
        let ncols = validate_row_lengths(rows.iter().map(|r| r.as_ref().len()))?;
        let mut bits = Vec::with_capacity(rows.len() * ncols);
        for row in rows {
            bits.extend_from_slice(row.as_ref());
        }
        Ok(Self {
            nrows: rows.len(),
            ncols,
            bits,
        })
    }

    /// Build from rows of 0/1 integers; any non-zero value counts as one
    pub fn from_bits<R: AsRef<[u8]>>(rows: &[R]) -> Result<Self> {
        let ncols = validate_row_lengths(rows.iter().map(|r| r.as_ref().len()))?;
        let bits = rows
            .iter()
            .flat_map(|r| r.as_ref().iter().map(|&b| b != 0))
            .collect();
        Ok(Self {
            nrows: rows.len(),
            ncols,
            bits,
        })
    }

    pub fn nrows(&self) -> usize {
        self.nrows
    }

    pub fn ncols(&self) -> usize {
        self.ncols
    }

    /// Entry at (`row`, `col`)
    ///
    /// # Panics
    /// Panics if the position is out of bounds.
    #[inline]
    pub fn get(&self, row: usize, col: usize) -> bool {
        assert!(row < self.nrows && col < self.ncols);
        self.bits[row * self.ncols + col]
    }

    #[inline]
    pub fn set(&mut self, row: usize, col: usize, value: bool) {
        assert!(row < self.nrows && col < self.ncols);
        self.bits[row * self.ncols + col] = value;
    }

    /// Row slice
    #[inline]
    pub fn row(&self, row: usize) -> &[bool] {
        let start = row * self.ncols;
        &self.bits[start..start + self.ncols]
    }

    /// Iterate over row slices
    pub fn rows(&self) -> impl Iterator<Item = &[bool]> + '_ {
        (0..self.nrows).map(move |r| self.row(r))
    }

    /// Copy out as nested vectors
    pub fn to_rows(&self) -> Vec<Vec<bool>> {
        self.rows().map(<[bool]>::to_vec).collect()
    }

    pub fn swap_rows(&mut self, a: usize, b: usize) {
        if a == b {
            return;
        }
        let ncols = self.ncols;
        let (lo, hi) = if a < b { (a, b) } else { (b, a) };
        let (head, tail) = self.bits.split_at_mut(hi * ncols);
        head[lo * ncols..(lo + 1) * ncols].swap_with_slice(&mut tail[..ncols]);
    }

    /// `row[target] ^= row[source]`
    pub fn xor_row_into(&mut self, target: usize, source: usize) {
        assert_ne!(target, source, "xor of a row into itself clears it");
        let ncols = self.ncols;
        for c in 0..ncols {
            let bit = self.bits[source * ncols + c];
            self.bits[target * ncols + c] ^= bit;
        }
    }

    pub fn transpose(&self) -> Self {
        Self::from_fn(self.ncols, self.nrows, |r, c| self.get(c, r))
    }

    /// Copy of columns `start..end`
    pub fn column_block(&self, start: usize, end: usize) -> Self {
        assert!(start <= end && end <= self.ncols);
        Self::from_fn(self.nrows, end - start, |r, c| self.get(r, start + c))
    }

    /// `[self | right]`
    pub fn hconcat(&self, right: &Self) -> Result<Self> {
        if self.nrows != right.nrows {
            return Err(LdpcError::DimensionMismatch {
                left: self.nrows,
                right: right.nrows,
            });
        }
        let ncols = self.ncols + right.ncols;
        Ok(Self::from_fn(self.nrows, ncols, |r, c| {
            if c < self.ncols {
                self.get(r, c)
            } else {
                right.get(r, c - self.ncols)
            }
        }))
    }

    /// True when every entry is zero
    pub fn is_zero(&self) -> bool {
        !self.bits.iter().any(|&b| b)
    }
}

impl BinaryMatrix for Gf2Matrix {
    fn get_element(&self, row: usize, col: usize) -> Option<bool> {
        (row < self.nrows && col < self.ncols).then(|| self.get(row, col))
    }

    fn dimensions(&self) -> (usize, usize) {
        (self.nrows, self.ncols)
    }

    fn weight(&self) -> usize {
        self.bits.iter().filter(|&&b| b).count()
    }
}

impl MatrixOperations for Gf2Matrix {
    fn row_support(&self, row_index: usize) -> Vec<usize> {
        self.row(row_index)
            .iter()
            .enumerate()
            .filter_map(|(c, &b)| b.then_some(c))
            .collect()
    }

    fn col_support(&self, col_index: usize) -> Vec<usize> {
        (0..self.nrows)
            .filter(|&r| self.get(r, col_index))
            .collect()
    }
}

impl fmt::Display for Gf2Matrix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, row) in self.rows().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            for &bit in row {
                f.write_str(if bit { "1" } else { "0" })?;
            }
        }
        Ok(())
    }
}

/// First row that differs from the standard basis row, if any
///
/// Non-square matrices report the first row past the square part.
pub fn first_non_basis_row(m: &Gf2Matrix) -> Option<usize> {
    if m.nrows != m.ncols {
        return Some(m.nrows.min(m.ncols));
    }
    (0..m.nrows).find(|&r| m.row(r).iter().enumerate().any(|(c, &b)| b != (r == c)))
}

/// True iff `m` is square with ones on the diagonal and zeros elsewhere
pub fn is_identity(m: &Gf2Matrix) -> bool {
    first_non_basis_row(m).is_none()
}

/// Elementwise XOR of two rows
pub fn xor_rows(a: &[bool], b: &[bool]) -> Vec<bool> {
    debug_assert_eq!(a.len(), b.len());
    a.iter().zip(b).map(|(&x, &y)| x ^ y).collect()
}

/// Inner product over GF(2)
pub fn dot(a: &[bool], b: &[bool]) -> bool {
    debug_assert_eq!(a.len(), b.len());
    a.iter().zip(b).fold(false, |acc, (&x, &y)| acc ^ (x & y))
}

/// `a · bᵗ` over GF(2)
pub fn mul_transpose(a: &Gf2Matrix, b: &Gf2Matrix) -> Result<Gf2Matrix> {
    if a.ncols != b.ncols {
        return Err(LdpcError::DimensionMismatch {
            left: a.ncols,
            right: b.ncols,
        });
    }
    Ok(Gf2Matrix::from_fn(a.nrows, b.nrows, |r, c| {
        dot(a.row(r), b.row(c))
    }))
}
