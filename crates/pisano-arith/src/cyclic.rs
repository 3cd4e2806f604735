//! Fixed-width arithmetic with end-around carry.
//!
//! [`CyclicAlu`] works on integers reduced to `[0, 2^S)` for a bit width `S`
//! fixed at construction. Addition discards the overflow bit and adds it back
//! into the low end, which makes every derived operation congruent to
//! arithmetic modulo `2^S - 1` — NOT modulo `2^S`. Callers must not assume
//! standard modular semantics; in particular the additive identity is
//! `2^S - 1`, and `0` and `2^S - 1` represent the same congruence class.
//!
//! Caveats carried over from the reference semantics:
//! - [`CyclicAlu::csub`] is empirically validated, not formally proven;
//! - the periodicity of [`CyclicAlu::cpow`] has no known closed form (it is
//!   explicitly not the Euler/Carmichael period of ordinary modular
//!   exponentiation) — an open research question, not a defect;
//! - long-division over this representation never worked and is not offered;
//!   [`CyclicAlu::cdiv`] only handles divisors invertible modulo `2^S - 1`.

use num_bigint::{BigInt, BigUint};
use num_traits::{One, Zero};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CyclicError {
    #[error("bit width must be at least 1")]
    InvalidWidth,
    #[error("divisor {0} is not invertible modulo 2^{1} - 1; cyclic division is unsupported for it")]
    NonInvertibleDivisor(BigUint, u64),
}

/// Arithmetic unit for a fixed bit width `S`.
///
/// All operations trim their operands into `[0, 2^S)` on entry and return
/// values in the same range.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CyclicAlu {
    bits: u64,
    /// `2^S`.
    modulus: BigUint,
}

impl CyclicAlu {
    pub fn new(bits: u64) -> Result<Self, CyclicError> {
        if bits == 0 {
            return Err(CyclicError::InvalidWidth);
        }
        Ok(Self {
            bits,
            modulus: BigUint::one() << bits,
        })
    }

    pub fn bits(&self) -> u64 {
        self.bits
    }

    /// `2^S`, the representation bound (one past the largest value).
    pub fn modulus(&self) -> &BigUint {
        &self.modulus
    }

    /// The end-around-carry additive identity, `2^S - 1`.
    ///
    /// Empirically `cadd(a, csub(0, a)) == 2^S - 1` for every `a` in range,
    /// and `cadd(a, 2^S - 1) == a` for every nonzero `a`.
    pub fn additive_identity(&self) -> BigUint {
        &self.modulus - 1u32
    }

    /// Addition with end-around carry.
    ///
    /// Computes `raw = a + b`; the overflow bit `raw >> S` (0 or 1 for
    /// trimmed operands) is added back before reducing to the width. The
    /// result is congruent to `a + b (mod 2^S - 1)`.
    pub fn cadd(&self, a: &BigUint, b: &BigUint) -> BigUint {
        let raw = (a % &self.modulus) + (b % &self.modulus);
        let carry = &raw >> self.bits;
        (raw + carry) % &self.modulus
    }

    /// One's-complement-style subtraction: `cadd(a, 2^S - b - 1)`.
    ///
    /// Not proven to be the exact inverse of [`CyclicAlu::cadd`], but holds
    /// on every sampled input so far.
    pub fn csub(&self, a: &BigUint, b: &BigUint) -> BigUint {
        let complement = &self.modulus - (b % &self.modulus) - 1u32;
        self.cadd(a, &complement)
    }

    /// Binary long multiplication built from [`CyclicAlu::cadd`].
    ///
    /// Iterates the bits of `a` high-to-low, doubling the accumulator and
    /// conditionally accumulating `b`. Congruent to `a * b (mod 2^S - 1)`
    /// and commutative over that congruence.
    pub fn cmul(&self, a: &BigUint, b: &BigUint) -> BigUint {
        let a = a % &self.modulus;
        let b = b % &self.modulus;
        let mut res = BigUint::zero();
        for i in (0..a.bits()).rev() {
            res = self.cadd(&res, &res);
            if a.bit(i) {
                res = self.cadd(&res, &b);
            }
        }
        res
    }

    /// Square-and-multiply exponentiation over [`CyclicAlu::cmul`].
    ///
    /// `cpow(a, 0) == 1`. The period of `e -> cpow(a, e)` is unknown in
    /// general; do not substitute the Euler/Carmichael period of ordinary
    /// modular exponentiation.
    pub fn cpow(&self, a: &BigUint, e: &BigUint) -> BigUint {
        let a = a % &self.modulus;
        let mut res = BigUint::one();
        for i in (0..e.bits()).rev() {
            res = self.cmul(&res, &res);
            if e.bit(i) {
                res = self.cmul(&res, &a);
            }
        }
        res
    }

    /// Division by multiplication with the modular inverse of `b` modulo
    /// `2^S - 1`.
    ///
    /// Only defined when `gcd(b mod 2^S - 1, 2^S - 1) == 1`; anything else
    /// (including `b == 0` and `b == 2^S - 1`, both congruent to zero) fails
    /// with [`CyclicError::NonInvertibleDivisor`] rather than producing a
    /// plausible-looking wrong value. A long-division variant over the
    /// end-around-carry representation is known not to work and is
    /// deliberately not offered.
    pub fn cdiv(&self, a: &BigUint, b: &BigUint) -> Result<BigUint, CyclicError> {
        let n = self.additive_identity();
        let b = b % &self.modulus;
        let residue = &b % &n;
        let inv = mod_inverse(&residue, &n)
            .ok_or_else(|| CyclicError::NonInvertibleDivisor(b, self.bits))?;
        Ok(self.cmul(a, &inv))
    }
}

/// Modular inverse by extended Euclid; `None` when `gcd(a, n) != 1`.
fn mod_inverse(a: &BigUint, n: &BigUint) -> Option<BigUint> {
    if n <= &BigUint::one() {
        return None;
    }
    let n_int = BigInt::from(n.clone());
    let mut t = BigInt::zero();
    let mut new_t = BigInt::one();
    let mut r = n_int.clone();
    let mut new_r = BigInt::from(a.clone());
    while !new_r.is_zero() {
        let q = &r / &new_r;
        let next_t = &t - &q * &new_t;
        t = std::mem::replace(&mut new_t, next_t);
        let next_r = &r - &q * &new_r;
        r = std::mem::replace(&mut new_r, next_r);
    }
    if !r.is_one() {
        return None;
    }
    ((t % &n_int + &n_int) % &n_int).to_biguint()
}
