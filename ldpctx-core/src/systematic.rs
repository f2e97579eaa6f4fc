//! Reduction of a parity-check matrix to systematic form `[P | I]`
//!
//! The trailing `p` columns of `H` are driven to the identity with pivoted
//! Gaussian elimination over GF(2). The caller's matrix is never touched;
//! elimination runs on a private copy.

use crate::gf2::{first_non_basis_row, is_identity, Gf2Matrix};
use crate::traits::{NoopObserver, ReductionObserver};
use crate::validation::shape::validate_parity_shape;
use crate::{LdpcError, Result};

/// Row-equivalent split `[P | I]` of a parity-check matrix
///
/// `P` is `p`×`k` and `I` is `p`×`p`. Splits produced by [`systematic_form`]
/// always carry the identity in `I`; splits assembled with
/// [`SystematicSplit::new`] may not, and are refused by the generator builder.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SystematicSplit {
    parity: Gf2Matrix,
    identity: Gf2Matrix,
}

impl SystematicSplit {
    /// Assemble a split from its blocks without reducing anything
    pub fn new(parity: Gf2Matrix, identity: Gf2Matrix) -> Result<Self> {
        if identity.nrows() != identity.ncols() {
            return Err(LdpcError::NonSquareBlock {
                rows: identity.nrows(),
                cols: identity.ncols(),
            });
        }
        if parity.nrows() != identity.nrows() {
            return Err(LdpcError::DimensionMismatch {
                left: parity.nrows(),
                right: identity.nrows(),
            });
        }
        Ok(Self { parity, identity })
    }

    /// The `P` block (`p`×`k`)
    pub fn parity(&self) -> &Gf2Matrix {
        &self.parity
    }

    /// The trailing square block
    pub fn identity(&self) -> &Gf2Matrix {
        &self.identity
    }

    /// Number of information bits `k`
    pub fn info_bits(&self) -> usize {
        self.parity.ncols()
    }

    /// Number of parity bits `p`
    pub fn parity_bits(&self) -> usize {
        self.identity.nrows()
    }

    /// Codeword length `n = k + p`
    pub fn code_length(&self) -> usize {
        self.info_bits() + self.parity_bits()
    }

    /// Whether the trailing block is the identity
    pub fn is_confirmed(&self) -> bool {
        is_identity(&self.identity)
    }

    /// Offending row of an unconfirmed split
    pub(crate) fn check_confirmed(&self) -> Result<()> {
        match first_non_basis_row(&self.identity) {
            None => Ok(()),
            Some(row) => Err(LdpcError::Precondition { row }),
        }
    }

    /// Reassemble `[P | I]`
    pub fn to_parity_check(&self) -> Gf2Matrix {
        // equal row counts are checked in `new`
        let mut out = Gf2Matrix::zeros(self.parity_bits(), self.code_length());
        let k = self.info_bits();
        for r in 0..self.parity_bits() {
            for c in 0..k {
                out.set(r, c, self.parity.get(r, c));
            }
            for c in 0..self.parity_bits() {
                out.set(r, k + c, self.identity.get(r, c));
            }
        }
        out
    }

    pub fn into_parts(self) -> (Gf2Matrix, Gf2Matrix) {
        (self.parity, self.identity)
    }
}

/// Reduce `h` to systematic form
pub fn systematic_form(h: &Gf2Matrix) -> Result<SystematicSplit> {
    systematic_form_with(h, &mut NoopObserver)
}

/// Reduce `h` to systematic form, reporting progress to `observer`
///
/// Fails with [`LdpcError::RankDeficiency`] when some pivot column has no
/// usable one at or below the pivot row. No partial result is returned.
pub fn systematic_form_with<O: ReductionObserver + ?Sized>(
    h: &Gf2Matrix,
    observer: &mut O,
) -> Result<SystematicSplit> {
    let p = h.nrows();
    let n = h.ncols();
    let k = validate_parity_shape(p, n)?;

    let trailing = h.column_block(k, n);
    if is_identity(&trailing) {
        observer.already_systematic(p, n);
        return SystematicSplit::new(h.column_block(0, k), trailing);
    }

    let mut work = h.clone();
    let mut swaps = 0;
    let mut row_ops = 0;

    for i in 0..p {
        let col = k + i;

        if !work.get(i, col) {
            let pivot = (i + 1..p)
                .find(|&j| work.get(j, col))
                .ok_or(LdpcError::RankDeficiency { row: i, column: col })?;
            work.swap_rows(i, pivot);
            observer.pivot_swapped(i, pivot);
            swaps += 1;
        }

        let mut eliminated = 0;
        for j in 0..p {
            if j != i && work.get(j, col) {
                work.xor_row_into(j, i);
                eliminated += 1;
            }
        }
        observer.column_cleared(i, col, eliminated);
        row_ops += eliminated;
    }

    observer.reduced(swaps, row_ops);
    let split = SystematicSplit::new(work.column_block(0, k), work.column_block(k, n))?;
    debug_assert!(split.is_confirmed());
    Ok(split)
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec;
    use alloc::vec::Vec;

    #[derive(Default)]
    struct Recorder {
        fast_path: bool,
        swaps: Vec<(usize, usize)>,
        cleared: Vec<(usize, usize)>,
    }

    impl ReductionObserver for Recorder {
        fn already_systematic(&mut self, _rows: usize, _cols: usize) {
            self.fast_path = true;
        }

        fn pivot_swapped(&mut self, pivot: usize, with: usize) {
            self.swaps.push((pivot, with));
        }

        fn column_cleared(&mut self, pivot: usize, _column: usize, eliminated: usize) {
            self.cleared.push((pivot, eliminated));
        }
    }

    #[test]
    fn test_reduces_non_systematic_matrix() {
        let h = Gf2Matrix::from_bits(&[
            [1u8, 1, 0, 1, 0, 0],
            [0, 1, 1, 0, 1, 0],
            [1, 0, 1, 0, 0, 1],
        ])
        .unwrap();
        // trailing block is the identity here; permute rows so it is not
        let mut shuffled = h.clone();
        shuffled.swap_rows(0, 2);

        let mut rec = Recorder::default();
        let split = systematic_form_with(&shuffled, &mut rec).unwrap();
        assert!(!rec.fast_path);
        assert_eq!(rec.swaps, vec![(0, 2)]);
        assert!(split.is_confirmed());
        assert_eq!(split.parity(), &h.column_block(0, 3));
    }

    #[test]
    fn test_fast_path_keeps_blocks() {
        let h = Gf2Matrix::from_bits(&[[1u8, 0, 1, 0], [1, 1, 0, 1]]).unwrap();
        let mut rec = Recorder::default();
        let split = systematic_form_with(&h, &mut rec).unwrap();
        assert!(rec.fast_path);
        assert!(rec.swaps.is_empty() && rec.cleared.is_empty());
        assert_eq!(
            split.parity(),
            &Gf2Matrix::from_bits(&[[1u8, 0], [1, 1]]).unwrap()
        );
        assert_eq!(split.identity(), &Gf2Matrix::identity(2));
        assert_eq!(split.to_parity_check(), h);
    }

    #[test]
    fn test_elimination_clears_columns() {
        // trailing block [[1,1],[0,1]] needs one row operation
        let h = Gf2Matrix::from_bits(&[[1u8, 0, 1, 1], [0, 1, 0, 1]]).unwrap();
        let mut rec = Recorder::default();
        let split = systematic_form_with(&h, &mut rec).unwrap();
        assert_eq!(rec.cleared, vec![(0, 0), (1, 1)]);
        assert_eq!(
            split.parity(),
            &Gf2Matrix::from_bits(&[[1u8, 1], [0, 1]]).unwrap()
        );
        assert!(split.is_confirmed());
    }

    #[test]
    fn test_rank_deficiency() {
        // column k+1 = 3 is zero in every row
        let h = Gf2Matrix::from_bits(&[[1u8, 1, 1, 0], [0, 1, 0, 0]]).unwrap();
        assert_eq!(
            systematic_form(&h),
            Err(LdpcError::RankDeficiency { row: 1, column: 3 })
        );

        // dependent rows
        let h = Gf2Matrix::from_bits(&[[1u8, 1, 1], [1, 1, 1]]).unwrap();
        assert_eq!(
            systematic_form(&h),
            Err(LdpcError::RankDeficiency { row: 1, column: 2 })
        );
    }

    #[test]
    fn test_shape_rejected_before_reduction() {
        let tall = Gf2Matrix::from_bits(&[[1u8], [1]]).unwrap();
        assert_eq!(
            systematic_form(&tall),
            Err(LdpcError::TooManyRows { rows: 2, cols: 1 })
        );
    }

    #[test]
    fn test_split_new_validates() {
        assert_eq!(
            SystematicSplit::new(Gf2Matrix::zeros(2, 3), Gf2Matrix::zeros(2, 3)),
            Err(LdpcError::NonSquareBlock { rows: 2, cols: 3 })
        );
        assert_eq!(
            SystematicSplit::new(Gf2Matrix::zeros(3, 3), Gf2Matrix::identity(2)),
            Err(LdpcError::DimensionMismatch { left: 3, right: 2 })
        );
    }
}
