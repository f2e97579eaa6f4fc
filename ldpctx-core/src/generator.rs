//! Generator matrix construction `G = [I_k | Pᵗ]`

use crate::gf2::{mul_transpose, Gf2Matrix};
use crate::systematic::{systematic_form, SystematicSplit};
use crate::Result;

/// Build `G` from a confirmed systematic split
///
/// Fails with [`LdpcError::Precondition`](crate::LdpcError::Precondition)
/// when the split's trailing block is not the identity, which means the
/// reducer was skipped.
pub fn generator_matrix(split: &SystematicSplit) -> Result<Gf2Matrix> {
    split.check_confirmed()?;

    let k = split.info_bits();
    let parity = split.parity();
    Ok(Gf2Matrix::from_fn(k, split.code_length(), |r, c| {
        if c < k {
            r == c
        } else {
            parity.get(c - k, r)
        }
    }))
}

/// Reduce `h` and build its generator matrix in one step
pub fn derive_generator(h: &Gf2Matrix) -> Result<Gf2Matrix> {
    generator_matrix(&systematic_form(h)?)
}

/// Check `h · gᵗ = 0` over GF(2)
pub fn is_orthogonal(h: &Gf2Matrix, g: &Gf2Matrix) -> Result<bool> {
    Ok(mul_transpose(h, g)?.is_zero())
}
