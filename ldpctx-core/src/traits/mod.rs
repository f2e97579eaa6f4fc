//! Abstract interfaces for LDPCTX
//!
//! Traits here are pure interfaces; the dense [`Gf2Matrix`](crate::Gf2Matrix)
//! is the only implementation in this crate.

pub mod matrix;
pub mod observer;

pub use matrix::{BinaryMatrix, MatrixOperations};
pub use observer::{NoopObserver, ReductionObserver};
