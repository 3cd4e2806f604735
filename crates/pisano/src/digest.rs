//! Domain-separated digest-to-scalar derivation for the signature protocol.
//!
//! The naive `f(h) = encode(h)` derivation is forgeable: from one valid
//! signature on `h1`, an attacker computes `encode(h2 - h1)` for a chosen
//! `h2 > h1` and combines it in (`E(k) + E(h2) = Es1 + E(d)`). The scheme
//! here closes that in two steps:
//!
//! 1. the digest is re-hashed through SHA-256 under a fixed domain tag, so
//!    an attacker has no control over algebraic relations between derived
//!    scalars;
//! 2. each space maps the derived scalar in through a non-additive route —
//!    the exponent-style spaces embed it raw (a point outside the image of
//!    `encode`, so its embedding-space difference from another digest point
//!    is not `encode(d)` for any computable `d`, and extracting it would
//!    take a division in the space, assumed infeasible), and the Fibonacci
//!    space uses `scale(encode(t), t)` (exponent `t^2`, not linear in the
//!    digest).

use num_bigint::BigUint;
use sha2::{Digest, Sha256};

/// Domain tag for signature digest derivation.
pub const SIG_DOMAIN: &[u8] = b"PISANO_SIG_V1";

/// Hash `h` into a 256-bit scalar under `domain`.
///
/// The preimage is `domain || len(bytes) as u64 LE || bytes` with `bytes`
/// the little-endian magnitude of `h`, so distinct domains and distinct
/// integers can never collide on the preimage.
pub fn derive_scalar(domain: &[u8], h: &BigUint) -> BigUint {
    let bytes = h.to_bytes_le();
    let mut hasher = Sha256::new();
    hasher.update(domain);
    hasher.update((bytes.len() as u64).to_le_bytes());
    hasher.update(&bytes);
    BigUint::from_bytes_le(&hasher.finalize())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deterministic_and_domain_separated() {
        let h = BigUint::from(324_235_324_349_912u64);
        let a = derive_scalar(SIG_DOMAIN, &h);
        let b = derive_scalar(SIG_DOMAIN, &h);
        assert_eq!(a, b);
        let c = derive_scalar(b"PISANO_OTHER_V1", &h);
        assert_ne!(a, c);
    }

    #[test]
    fn test_nearby_digests_diverge() {
        let h = BigUint::from(1_123_568_764_323u64);
        let a = derive_scalar(SIG_DOMAIN, &h);
        let b = derive_scalar(SIG_DOMAIN, &(h + 1u32));
        assert_ne!(a, b);
    }
}
