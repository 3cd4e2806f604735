//! Cyclic-squaring embedding over the end-around-carry space:
//! `E(x) = cmul(x, x)` at a fixed bit width `S`.
//!
//! `combine` is `cmul` and `scale` is `cpow`. Unlike the other two spaces,
//! its algebra is empirically validated only: `cmul` is congruent to
//! multiplication mod `2^S - 1`, but no closed form is known for the period
//! of `cpow`, and the distributivity of `scale` over `combine` rests on
//! sampled evidence — there remain unexplained asymmetries in this space
//! (reorderings that "should" agree but only some do), so treat it as the
//! research probe it is.

use num_bigint::BigUint;
use pisano_arith::CyclicAlu;

use crate::digest::{derive_scalar, SIG_DOMAIN};
use crate::embedding::{Embedding, EmbeddingError, EmbeddingScheme};

/// The cyclic-squaring space at a fixed bit width.
#[derive(Clone, Debug)]
pub struct CycSqrEmbedding {
    alu: CyclicAlu,
}

/// A residue of the cyclic-squaring space.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CycPoint {
    alu: CyclicAlu,
    residue: BigUint,
}

impl CycSqrEmbedding {
    pub fn new(bits: u64) -> Result<Self, EmbeddingError> {
        let alu = CyclicAlu::new(bits)
            .map_err(|_| EmbeddingError::InvalidParams("bit width must be at least 1"))?;
        Ok(Self { alu })
    }

    /// The reference instance at the original's width, `S = 32`.
    pub fn demo_params() -> Self {
        Self {
            alu: CyclicAlu::new(32).unwrap_or_else(|_| unreachable!("32 is a valid width")),
        }
    }

    pub fn bits(&self) -> u64 {
        self.alu.bits()
    }

    /// A point placed directly at residue `n`, bypassing `encode`.
    pub fn from_raw(&self, n: &BigUint) -> CycPoint {
        CycPoint {
            alu: self.alu.clone(),
            residue: n % self.alu.modulus(),
        }
    }
}

impl EmbeddingScheme for CycSqrEmbedding {
    type Point = CycPoint;

    /// The square of `x` in the end-around-carry space.
    fn encode(&self, x: &BigUint) -> CycPoint {
        CycPoint {
            alu: self.alu.clone(),
            residue: self.alu.cmul(x, x),
        }
    }

    fn digest_point(&self, h: &BigUint) -> CycPoint {
        self.from_raw(&derive_scalar(SIG_DOMAIN, h))
    }
}

impl CycPoint {
    /// The underlying residue in `[0, 2^S)`.
    pub fn residue(&self) -> &BigUint {
        &self.residue
    }
}

impl Embedding for CycPoint {
    fn family(&self) -> &'static str {
        "cyc"
    }

    fn combine(&self, other: &Self) -> Result<Self, EmbeddingError> {
        if self.alu != other.alu {
            return Err(EmbeddingError::ParameterMismatch("bit width"));
        }
        Ok(CycPoint {
            alu: self.alu.clone(),
            residue: self.alu.cmul(&self.residue, &other.residue),
        })
    }

    fn scale(&self, n: &BigUint) -> Self {
        CycPoint {
            alu: self.alu.clone(),
            residue: self.alu.cpow(&self.residue, n),
        }
    }

    fn equals(&self, other: &Self) -> Result<bool, EmbeddingError> {
        if self.alu != other.alu {
            return Err(EmbeddingError::ParameterMismatch("bit width"));
        }
        Ok(self.residue == other.residue)
    }
}
