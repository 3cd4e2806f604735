//! The embedding capability contract and the runtime-dispatched wrapper.
//!
//! An embedding is a bounded one-way space: `encode(x)` is easy, recovering
//! `x` is assumed infeasible, and the space carries a commutative,
//! associative `combine` plus a scalar multiply that distributes over it.
//! That one-wayness rests on the period of the space being unknown or hard
//! to compute — it is a security assumption the implementations document,
//! not an invariant they can enforce.
//!
//! Protocols are generic over [`EmbeddingScheme`] (static dispatch). The
//! [`AnyScheme`]/[`AnyPoint`] enums additionally make family mixing a
//! runtime-observable [`EmbeddingError::TypeMismatch`] instead of a silent
//! wrong answer, for callers that select the space dynamically.

use num_bigint::BigUint;
use thiserror::Error;

use crate::cyc::{CycPoint, CycSqrEmbedding};
use crate::exp::{ExpEmbedding, ExpPoint};
use crate::fib::{FibEmbedding, FibPoint};

#[derive(Debug, Error)]
pub enum EmbeddingError {
    #[error("cannot mix embedded values from different families: {0} vs {1}")]
    TypeMismatch(&'static str, &'static str),
    #[error("embedded values disagree on {0}; they come from differently parameterized spaces")]
    ParameterMismatch(&'static str),
    #[error("invalid embedding parameters: {0}")]
    InvalidParams(&'static str),
}

/// An embedded value with the homomorphic operations the protocols need.
pub trait Embedding: Clone {
    /// Family tag, used in mismatch diagnostics.
    fn family(&self) -> &'static str;

    /// Homomorphic combine. Commutative and associative at the embedding
    /// level even where the underlying raw operation is not literally
    /// addition.
    fn combine(&self, other: &Self) -> Result<Self, EmbeddingError>;

    /// Scalar multiply; distributes over [`Embedding::combine`]:
    /// `scale(combine(a, b), n) == combine(scale(a, n), scale(b, n))`.
    fn scale(&self, n: &BigUint) -> Self;

    /// Decidable equality of embedded values.
    fn equals(&self, other: &Self) -> Result<bool, EmbeddingError>;
}

/// Constructor side of an embedding space: fixed structural parameters plus
/// the two ways of entering the space.
pub trait EmbeddingScheme {
    type Point: Embedding;

    /// The one-way encoding `E(x)`.
    fn encode(&self, x: &BigUint) -> Self::Point;

    /// Forgery-resistant derivation of a message digest into the space; see
    /// [`crate::digest`] for the derivation and its security argument.
    fn digest_point(&self, h: &BigUint) -> Self::Point;
}

/// Runtime-selected embedding scheme.
#[derive(Clone, Debug)]
pub enum AnyScheme {
    Exp(ExpEmbedding),
    Fib(FibEmbedding),
    Cyc(CycSqrEmbedding),
}

/// Point of a runtime-selected scheme. Cross-family operations fail with
/// [`EmbeddingError::TypeMismatch`] rather than comparing unlike values.
#[derive(Clone, Debug)]
pub enum AnyPoint {
    Exp(ExpPoint),
    Fib(FibPoint),
    Cyc(CycPoint),
}

impl EmbeddingScheme for AnyScheme {
    type Point = AnyPoint;

    fn encode(&self, x: &BigUint) -> AnyPoint {
        match self {
            AnyScheme::Exp(s) => AnyPoint::Exp(s.encode(x)),
            AnyScheme::Fib(s) => AnyPoint::Fib(s.encode(x)),
            AnyScheme::Cyc(s) => AnyPoint::Cyc(s.encode(x)),
        }
    }

    fn digest_point(&self, h: &BigUint) -> AnyPoint {
        match self {
            AnyScheme::Exp(s) => AnyPoint::Exp(s.digest_point(h)),
            AnyScheme::Fib(s) => AnyPoint::Fib(s.digest_point(h)),
            AnyScheme::Cyc(s) => AnyPoint::Cyc(s.digest_point(h)),
        }
    }
}

impl Embedding for AnyPoint {
    fn family(&self) -> &'static str {
        match self {
            AnyPoint::Exp(p) => p.family(),
            AnyPoint::Fib(p) => p.family(),
            AnyPoint::Cyc(p) => p.family(),
        }
    }

    fn combine(&self, other: &Self) -> Result<Self, EmbeddingError> {
        match (self, other) {
            (AnyPoint::Exp(a), AnyPoint::Exp(b)) => Ok(AnyPoint::Exp(a.combine(b)?)),
            (AnyPoint::Fib(a), AnyPoint::Fib(b)) => Ok(AnyPoint::Fib(a.combine(b)?)),
            (AnyPoint::Cyc(a), AnyPoint::Cyc(b)) => Ok(AnyPoint::Cyc(a.combine(b)?)),
            (a, b) => Err(EmbeddingError::TypeMismatch(a.family(), b.family())),
        }
    }

    fn scale(&self, n: &BigUint) -> Self {
        match self {
            AnyPoint::Exp(p) => AnyPoint::Exp(p.scale(n)),
            AnyPoint::Fib(p) => AnyPoint::Fib(p.scale(n)),
            AnyPoint::Cyc(p) => AnyPoint::Cyc(p.scale(n)),
        }
    }

    fn equals(&self, other: &Self) -> Result<bool, EmbeddingError> {
        match (self, other) {
            (AnyPoint::Exp(a), AnyPoint::Exp(b)) => a.equals(b),
            (AnyPoint::Fib(a), AnyPoint::Fib(b)) => a.equals(b),
            (AnyPoint::Cyc(a), AnyPoint::Cyc(b)) => a.equals(b),
            (a, b) => Err(EmbeddingError::TypeMismatch(a.family(), b.family())),
        }
    }
}
