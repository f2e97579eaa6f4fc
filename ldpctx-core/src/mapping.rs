//! Encoder logic synthesis
//!
//! An [`EncoderMapping`] is the abstract form of a systematic encoder: which
//! information bits are XORed into each parity output. Rendering it into a
//! hardware description is left to the caller.
//!
//! Output ordering follows the generated hardware: parity bits occupy outputs
//! `0..n-k` and information bits are wired straight through to `n-k..n`.

use alloc::vec::Vec;

use crate::gf2::{first_non_basis_row, Gf2Matrix};
use crate::traits::MatrixOperations;
use crate::{LdpcError, Result};

/// Source of one encoder output bit
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputSource<'a> {
    /// Direct wire from an information bit
    Wire(usize),
    /// XOR of the listed information bits (never empty)
    Xor(&'a [usize]),
    /// Constant zero: no information bit contributes
    Zero,
}

/// Per-parity-output sets of contributing information bits
///
/// Serialized as `{"k": .., "n": .., "parity": [[..], ..]}`. Deserialization
/// goes through [`EncoderMapping::from_parts`].
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "RawMapping"))]
pub struct EncoderMapping {
    #[cfg_attr(feature = "serde", serde(rename = "k"))]
    info_bits: usize,
    #[cfg_attr(feature = "serde", serde(rename = "n"))]
    code_length: usize,
    parity: Vec<Vec<usize>>,
}

/// Unchecked wire form of [`EncoderMapping`]
#[cfg(feature = "serde")]
#[derive(serde::Deserialize)]
struct RawMapping {
    k: usize,
    n: usize,
    parity: Vec<Vec<usize>>,
}

#[cfg(feature = "serde")]
impl TryFrom<RawMapping> for EncoderMapping {
    type Error = LdpcError;

    fn try_from(raw: RawMapping) -> Result<Self> {
        Self::from_parts(raw.k, raw.n, raw.parity)
    }
}

impl EncoderMapping {
    /// Derive the mapping from the trailing columns of `g`
    ///
    /// `g` must be `k`×`n` with `I_k` in its leading columns.
    pub fn from_generator(g: &Gf2Matrix) -> Result<Self> {
        let k = g.nrows();
        let n = g.ncols();
        if k > n {
            return Err(LdpcError::TooManyRows { rows: k, cols: n });
        }
        if let Some(row) = first_non_basis_row(&g.column_block(0, k)) {
            return Err(LdpcError::Precondition { row });
        }

        let parity = (k..n).map(|c| g.col_support(c)).collect();
        Ok(Self {
            info_bits: k,
            code_length: n,
            parity,
        })
    }

    /// Build a mapping from explicit parity sets
    ///
    /// Sets are sorted; every index must be below `k` and appear once.
    pub fn from_parts(k: usize, n: usize, mut parity: Vec<Vec<usize>>) -> Result<Self> {
        if k > n {
            return Err(LdpcError::TooManyRows { rows: k, cols: n });
        }
        if parity.len() != n - k {
            return Err(LdpcError::DimensionMismatch {
                left: parity.len(),
                right: n - k,
            });
        }
        for set in &mut parity {
            if let Some(&index) = set.iter().find(|&&i| i >= k) {
                return Err(LdpcError::IndexOutOfBounds { index, bound: k });
            }
            let len = set.len();
            set.sort_unstable();
            set.dedup();
            if set.len() != len {
                return Err(LdpcError::DimensionMismatch {
                    left: len,
                    right: set.len(),
                });
            }
        }
        Ok(Self {
            info_bits: k,
            code_length: n,
            parity,
        })
    }

    /// Number of encoder inputs `k`
    pub fn info_bits(&self) -> usize {
        self.info_bits
    }

    /// Number of encoder outputs `n`
    pub fn code_length(&self) -> usize {
        self.code_length
    }

    pub fn parity_bits(&self) -> usize {
        self.code_length - self.info_bits
    }

    /// Contributing information bits for each parity output, in order
    pub fn parity_sets(&self) -> &[Vec<usize>] {
        &self.parity
    }

    /// What drives output `position`
    ///
    /// # Panics
    /// Panics if `position >= n`.
    pub fn output(&self, position: usize) -> OutputSource<'_> {
        assert!(position < self.code_length);
        let p = self.parity_bits();
        if position >= p {
            return OutputSource::Wire(position - p);
        }
        match self.parity[position].as_slice() {
            [] => OutputSource::Zero,
            set => OutputSource::Xor(set),
        }
    }

    /// All outputs in position order
    pub fn outputs(&self) -> impl Iterator<Item = (usize, OutputSource<'_>)> + '_ {
        (0..self.code_length).map(move |i| (i, self.output(i)))
    }

    /// Rebuild `G`: identity block plus set membership in the trailing columns
    pub fn to_generator(&self) -> Gf2Matrix {
        let k = self.info_bits;
        let mut g = Gf2Matrix::zeros(k, self.code_length);
        for i in 0..k {
            g.set(i, i, true);
        }
        for (offset, set) in self.parity.iter().enumerate() {
            for &r in set {
                g.set(r, k + offset, true);
            }
        }
        g
    }

    /// Reference encoder producing outputs in hardware order
    pub fn encode(&self, message: &[bool]) -> Result<Vec<bool>> {
        if message.len() != self.info_bits {
            return Err(LdpcError::DimensionMismatch {
                left: message.len(),
                right: self.info_bits,
            });
        }
        Ok(self
            .outputs()
            .map(|(_, source)| match source {
                OutputSource::Wire(i) => message[i],
                OutputSource::Xor(set) => set.iter().fold(false, |acc, &i| acc ^ message[i]),
                OutputSource::Zero => false,
            })
            .collect())
    }
}

/// Derive the encoder mapping for generator matrix `g`
pub fn synthesize(g: &Gf2Matrix) -> Result<EncoderMapping> {
    EncoderMapping::from_generator(g)
}
