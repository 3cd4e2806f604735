//! Signature protocol, generic over the embedding contract.
//!
//! With `f(h)` the digest derivation of the scheme and `KEY_MUL` a small
//! fixed public constant:
//!
//! - private key: `Ek = encode(k)` (the secret scalar already expressed as
//!   an embedded quantity);
//! - public key: `Epk = scale(Ek, KEY_MUL)`;
//! - signature:  `Es = combine(Ek, f(h))`;
//! - accept iff `scale(Es, KEY_MUL) == combine(Epk, scale(f(h), KEY_MUL))`.
//!
//! Correctness needs only that `scale` distributes over `combine` and that
//! `combine` commutes. Unforgeability needs the space's one-wayness: the
//! verifier equation exposes `Ek` only under `scale` and `combine`, whose
//! inverses are assumed infeasible. Verification returns `Ok(false)` for
//! well-formed values that do not check out; mixing embedding families or
//! parameters surfaces the underlying error instead of a silent `false`.

use num_bigint::BigUint;
use thiserror::Error;

#[cfg(feature = "parallel")]
use rayon::prelude::*;

use crate::embedding::{Embedding, EmbeddingError, EmbeddingScheme};

/// Public key multiplier. Small and public; recovering the private point
/// from `scale(Ek, KEY_MUL)` still requires inverting `scale`.
pub const KEY_MUL: u32 = 2;

#[derive(Debug, Error)]
pub enum SignatureError {
    #[error(transparent)]
    Embedding(#[from] EmbeddingError),
}

/// A signer's key material. The private point never needs to leave the
/// signer's process; the public point is free to share.
pub struct KeyPair<S: EmbeddingScheme> {
    private: S::Point,
    public: S::Point,
}

impl<S: EmbeddingScheme> KeyPair<S> {
    pub fn private(&self) -> &S::Point {
        &self.private
    }

    pub fn public(&self) -> &S::Point {
        &self.public
    }
}

impl<S: EmbeddingScheme> Clone for KeyPair<S> {
    fn clone(&self) -> Self {
        Self {
            private: self.private.clone(),
            public: self.public.clone(),
        }
    }
}

/// Derive a key pair from a secret scalar.
pub fn keygen<S: EmbeddingScheme>(scheme: &S, secret: &BigUint) -> KeyPair<S> {
    let private = scheme.encode(secret);
    let public = private.scale(&BigUint::from(KEY_MUL));
    KeyPair { private, public }
}

/// Sign a message digest `h` with the embedded private key.
pub fn sign<S: EmbeddingScheme>(
    scheme: &S,
    h: &BigUint,
    private: &S::Point,
) -> Result<S::Point, SignatureError> {
    Ok(private.combine(&scheme.digest_point(h))?)
}

/// Check a signature against the claimed public key.
pub fn verify<S: EmbeddingScheme>(
    scheme: &S,
    h: &BigUint,
    signature: &S::Point,
    public: &S::Point,
) -> Result<bool, SignatureError> {
    let key_mul = BigUint::from(KEY_MUL);
    let fh = scheme.digest_point(h);
    let lhs = signature.scale(&key_mul);
    let rhs = public.combine(&fh.scale(&key_mul))?;
    Ok(lhs.equals(&rhs)?)
}

/// Verify many independent `(h, signature, public)` triples.
///
/// Each verification is pure and self-contained, so with the `parallel`
/// feature the batch fans out across threads; the output order matches the
/// input order either way.
pub fn verify_batch<S>(
    scheme: &S,
    batch: &[(BigUint, S::Point, S::Point)],
) -> Result<Vec<bool>, SignatureError>
where
    S: EmbeddingScheme + Sync,
    S::Point: Send + Sync,
{
    #[cfg(feature = "parallel")]
    {
        batch
            .par_iter()
            .map(|(h, sig, public)| verify(scheme, h, sig, public))
            .collect()
    }
    #[cfg(not(feature = "parallel"))]
    {
        batch
            .iter()
            .map(|(h, sig, public)| verify(scheme, h, sig, public))
            .collect()
    }
}
