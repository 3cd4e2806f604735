//! # pisano-arith — raw arithmetic engines
//!
//! The two engines beneath the pisano embedding family:
//! - [`cyclic`]: a fixed-bit-width ALU whose addition carries the overflow
//!   bit back into the low end ("end-around carry"), making every operation
//!   congruent to arithmetic modulo `2^S - 1`;
//! - [`matrix`]: square-matrix modular multiplication and fast
//!   exponentiation by repeated squaring.
//!
//! Everything here is pure and deterministic for fixed construction
//! parameters: same inputs, same outputs, no hidden state. External period
//! search harnesses rely on exactly that.
//!
//! This is NOT a production-ready cryptographic implementation; several
//! cyclic identities are validated empirically rather than proven (see the
//! per-function notes).

#![forbid(unsafe_code)]

pub mod cyclic;
pub mod matrix;

pub use cyclic::{CyclicAlu, CyclicError};
pub use matrix::{Matrix, MatrixError};
