//! Discrete-exponentiation embedding: `E(x) = (VS * G^x) mod M`.
//!
//! `combine` is modular multiplication and `scale` is modular
//! exponentiation, so the homomorphic laws hold unconditionally. The
//! one-wayness is the usual discrete-log assumption for the chosen modulus;
//! the `VS` "variation shift" selects another coset of the same subgroup
//! without changing the period.

use num_bigint::BigUint;
use num_traits::{One, Zero};

use crate::digest::{derive_scalar, SIG_DOMAIN};
use crate::embedding::{Embedding, EmbeddingError, EmbeddingScheme};

/// Structural parameters of the exponentiation space.
#[derive(Clone, Debug)]
pub struct ExpEmbedding {
    modulus: BigUint,
    generator: BigUint,
    shift: BigUint,
}

/// A residue of the exponentiation space. Carries its modulus so that
/// points from differently parameterized spaces cannot be silently mixed.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ExpPoint {
    modulus: BigUint,
    residue: BigUint,
}

impl ExpEmbedding {
    pub fn new(modulus: BigUint, generator: BigUint) -> Result<Self, EmbeddingError> {
        Self::with_shift(modulus, generator, BigUint::one())
    }

    /// Full-parameter constructor including the variation shift `VS`.
    pub fn with_shift(
        modulus: BigUint,
        generator: BigUint,
        shift: BigUint,
    ) -> Result<Self, EmbeddingError> {
        if modulus < BigUint::from(2u32) {
            return Err(EmbeddingError::InvalidParams("modulus must be at least 2"));
        }
        if generator.is_zero() || shift.is_zero() {
            return Err(EmbeddingError::InvalidParams(
                "generator and shift must be nonzero",
            ));
        }
        Ok(Self {
            modulus,
            generator,
            shift,
        })
    }

    /// The reference instance (`M = 32^2 = 1024`, `G = 11`, `VS = 1`).
    ///
    /// Example-only: its period is well calculable, so it demonstrates the
    /// protocol mechanics but offers no one-wayness.
    pub fn demo_params() -> Self {
        Self {
            modulus: BigUint::from(1024u32),
            generator: BigUint::from(11u32),
            shift: BigUint::one(),
        }
    }

    pub fn modulus(&self) -> &BigUint {
        &self.modulus
    }

    /// A point placed directly at residue `n`, bypassing `encode`.
    ///
    /// Raw points generally lie outside the subgroup generated by `G`; the
    /// digest derivation depends on that (see [`crate::digest`]).
    pub fn from_raw(&self, n: &BigUint) -> ExpPoint {
        ExpPoint {
            modulus: self.modulus.clone(),
            residue: n % &self.modulus,
        }
    }
}

impl EmbeddingScheme for ExpEmbedding {
    type Point = ExpPoint;

    fn encode(&self, x: &BigUint) -> ExpPoint {
        let residue = (&self.shift * self.generator.modpow(x, &self.modulus)) % &self.modulus;
        ExpPoint {
            modulus: self.modulus.clone(),
            residue,
        }
    }

    fn digest_point(&self, h: &BigUint) -> ExpPoint {
        self.from_raw(&derive_scalar(SIG_DOMAIN, h))
    }
}

impl ExpPoint {
    /// The underlying residue in `[0, M)`.
    pub fn residue(&self) -> &BigUint {
        &self.residue
    }
}

impl Embedding for ExpPoint {
    fn family(&self) -> &'static str {
        "exp"
    }

    fn combine(&self, other: &Self) -> Result<Self, EmbeddingError> {
        if self.modulus != other.modulus {
            return Err(EmbeddingError::ParameterMismatch("modulus"));
        }
        Ok(ExpPoint {
            modulus: self.modulus.clone(),
            residue: (&self.residue * &other.residue) % &self.modulus,
        })
    }

    fn scale(&self, n: &BigUint) -> Self {
        ExpPoint {
            modulus: self.modulus.clone(),
            residue: self.residue.modpow(n, &self.modulus),
        }
    }

    fn equals(&self, other: &Self) -> Result<bool, EmbeddingError> {
        if self.modulus != other.modulus {
            return Err(EmbeddingError::ParameterMismatch("modulus"));
        }
        Ok(self.residue == other.residue)
    }
}
