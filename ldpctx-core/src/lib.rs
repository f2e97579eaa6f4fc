#![no_std]

//! LDPCTX Core - systematic encoder derivation over GF(2)
//!
//! This crate turns a parity-check matrix `H = [A | B]` into the systematic
//! split `[P | I]`, the generator matrix `G = [I_k | Pᵗ]` and the abstract
//! encoder mapping consumed by hardware renderers. Everything here is pure:
//! no I/O, no logging, no global state.
//!
//! ```
//! use ldpctx_core::{derive_generator, EncoderMapping, Gf2Matrix};
//!
//! let h = Gf2Matrix::from_bits(&[[1u8, 0, 1, 0], [1, 1, 0, 1]]).unwrap();
//! let g = derive_generator(&h).unwrap();
//! let mapping = EncoderMapping::from_generator(&g).unwrap();
//! assert_eq!(mapping.parity_sets(), &[vec![0], vec![0, 1]]);
//! ```

extern crate alloc;

pub mod error;
pub mod generator;
pub mod gf2;
pub mod mapping;
pub mod systematic;
pub mod traits;
pub mod validation;

pub use error::*;
pub use generator::{derive_generator, generator_matrix, is_orthogonal};
pub use gf2::{dot, is_identity, mul_transpose, xor_rows, Gf2Matrix};
pub use mapping::{synthesize, EncoderMapping, OutputSource};
pub use systematic::{systematic_form, systematic_form_with, SystematicSplit};
pub use traits::*;
pub use validation::{parse_alist, parse_bit_rows, validate_parity_shape};
