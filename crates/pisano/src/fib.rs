//! Fibonacci matrix-power embedding: `E(x) = F1^x mod M` with
//! `F1 = [[0,1],[1,1]]`.
//!
//! `combine` is the matrix product mod `M` and `scale` is fast matrix
//! exponentiation. All points are powers of the single generator, so they
//! commute and the homomorphic laws follow from exponent arithmetic. The
//! one-wayness assumption is that the Pisano period of `M` (the period of
//! the Fibonacci sequence mod `M`) is hard to compute for composite or
//! unstructured `M`; with the period unknown, neither `x` nor the inverse
//! of `combine` is recoverable from public points.

use num_bigint::BigUint;
use num_traits::{One, Zero};
use pisano_arith::Matrix;

use crate::digest::{derive_scalar, SIG_DOMAIN};
use crate::embedding::{Embedding, EmbeddingError, EmbeddingScheme};

/// Structural parameters of the Fibonacci space: just the modulus.
#[derive(Clone, Debug)]
pub struct FibEmbedding {
    modulus: BigUint,
}

/// A 2x2 matrix point of the Fibonacci space.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FibPoint {
    modulus: BigUint,
    mat: Matrix,
}

impl FibEmbedding {
    pub fn new(modulus: BigUint) -> Result<Self, EmbeddingError> {
        if modulus < BigUint::from(2u32) {
            return Err(EmbeddingError::InvalidParams("modulus must be at least 2"));
        }
        Ok(Self { modulus })
    }

    pub fn modulus(&self) -> &BigUint {
        &self.modulus
    }

    /// The Fibonacci generator matrix `[[0,1],[1,1]]`.
    pub fn generator() -> Matrix {
        let rows = vec![
            vec![BigUint::zero(), BigUint::one()],
            vec![BigUint::one(), BigUint::one()],
        ];
        match Matrix::from_rows(rows) {
            Ok(m) => m,
            // Two rows of two entries each; construction cannot fail.
            Err(_) => unreachable!("generator is square"),
        }
    }
}

impl EmbeddingScheme for FibEmbedding {
    type Point = FibPoint;

    fn encode(&self, x: &BigUint) -> FibPoint {
        FibPoint {
            modulus: self.modulus.clone(),
            mat: Self::generator().pow_mod_uint(x, &self.modulus),
        }
    }

    /// `f(h) = scale(encode(t), t)` for the derived scalar `t`, i.e.
    /// `F1^(t^2)` — the squared-exponent mitigation; see [`crate::digest`].
    fn digest_point(&self, h: &BigUint) -> FibPoint {
        let t = derive_scalar(SIG_DOMAIN, h);
        self.encode(&t).scale(&t)
    }
}

impl Embedding for FibPoint {
    fn family(&self) -> &'static str {
        "fib"
    }

    fn combine(&self, other: &Self) -> Result<Self, EmbeddingError> {
        if self.modulus != other.modulus {
            return Err(EmbeddingError::ParameterMismatch("modulus"));
        }
        let mat = self
            .mat
            .mul_mod(&other.mat, &self.modulus)
            .map_err(|_| EmbeddingError::ParameterMismatch("matrix dimension"))?;
        Ok(FibPoint {
            modulus: self.modulus.clone(),
            mat,
        })
    }

    fn scale(&self, n: &BigUint) -> Self {
        FibPoint {
            modulus: self.modulus.clone(),
            mat: self.mat.pow_mod_uint(n, &self.modulus),
        }
    }

    fn equals(&self, other: &Self) -> Result<bool, EmbeddingError> {
        if self.modulus != other.modulus {
            return Err(EmbeddingError::ParameterMismatch("modulus"));
        }
        Ok(self.mat == other.mat)
    }
}
