//! Greater-than proof over an additive embedding.
//!
//! A prover holding both raw integers `a > b` publishes
//! `Ep = encode(a - b)`; anyone holding the public points `Ea = encode(a)`
//! and `Eb = encode(b)` checks `Ea == combine(Eb, Ep)`. Producing a valid
//! `Ep` from the public points alone would require subtracting in the
//! embedded space, assumed infeasible — which is the entire mechanism: if
//! `a <= b` no proof can be produced, so a verified proof attests `a > b`
//! without revealing either value. Verification only attests consistency of
//! the claimed difference; it never re-derives `a` or `b`.

use num_bigint::BigUint;
use thiserror::Error;

use crate::embedding::{Embedding, EmbeddingError, EmbeddingScheme};

#[derive(Debug, Error)]
pub enum ComparisonError {
    #[error("comparison proof requires a > b (got a = {a}, b = {b})")]
    NotGreater { a: BigUint, b: BigUint },
    #[error(transparent)]
    Embedding(#[from] EmbeddingError),
}

/// Produce the proof `encode(a - b)`; only a party knowing both raw values
/// can call this meaningfully.
pub fn prove<S: EmbeddingScheme>(
    scheme: &S,
    a: &BigUint,
    b: &BigUint,
) -> Result<S::Point, ComparisonError> {
    if a <= b {
        return Err(ComparisonError::NotGreater {
            a: a.clone(),
            b: b.clone(),
        });
    }
    Ok(scheme.encode(&(a - b)))
}

/// Check `ea == combine(eb, proof)`.
pub fn verify<P: Embedding>(proof: &P, ea: &P, eb: &P) -> Result<bool, ComparisonError> {
    Ok(eb.combine(proof)?.equals(ea)?)
}
