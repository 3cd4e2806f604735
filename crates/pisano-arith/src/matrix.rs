//! Square-matrix modular multiplication and fast exponentiation.
//!
//! Entries are arbitrary-precision (`BigUint`); every product reduces each
//! accumulated term modulo `m` immediately, so intermediate values never grow
//! past `m^2` regardless of matrix dimension or modulus size.

use num_bigint::{BigInt, BigUint, Sign};
use num_traits::{One, Zero};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum MatrixError {
    #[error("matrix must be square: got {0} rows of width {1}")]
    NotSquare(usize, usize),
    #[error("dimension mismatch: {0}x{0} vs {1}x{1}")]
    DimensionMismatch(usize, usize),
    #[error("matrix exponent must be non-negative")]
    NegativeExponent,
    #[error("modulus must be at least 2")]
    BadModulus,
}

/// Dense square matrix over `BigUint`, row-major. Equality is entrywise.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Matrix {
    dim: usize,
    entries: Vec<BigUint>,
}

impl Matrix {
    /// Build from rows, rejecting non-square input.
    pub fn from_rows(rows: Vec<Vec<BigUint>>) -> Result<Self, MatrixError> {
        let dim = rows.len();
        let mut entries = Vec::with_capacity(dim * dim);
        for row in rows {
            if row.len() != dim {
                return Err(MatrixError::NotSquare(dim, row.len()));
            }
            entries.extend(row);
        }
        Ok(Self { dim, entries })
    }

    /// The n-by-n identity matrix.
    pub fn identity(dim: usize) -> Self {
        let mut entries = vec![BigUint::zero(); dim * dim];
        for i in 0..dim {
            entries[i * dim + i] = BigUint::one();
        }
        Self { dim, entries }
    }

    pub fn dim(&self) -> usize {
        self.dim
    }

    pub fn entry(&self, row: usize, col: usize) -> &BigUint {
        &self.entries[row * self.dim + col]
    }

    /// Matrix product with per-term reduction modulo `m`.
    pub fn mul_mod(&self, other: &Matrix, m: &BigUint) -> Result<Matrix, MatrixError> {
        if self.dim != other.dim {
            return Err(MatrixError::DimensionMismatch(self.dim, other.dim));
        }
        check_modulus(m)?;
        Ok(self.mul_mod_unchecked(other, m))
    }

    /// Product of two matrices already known to share a dimension.
    fn mul_mod_unchecked(&self, other: &Matrix, m: &BigUint) -> Matrix {
        let dim = self.dim;
        let mut entries = vec![BigUint::zero(); dim * dim];
        for i in 0..dim {
            for j in 0..dim {
                let mut acc = BigUint::zero();
                for k in 0..dim {
                    acc = (acc + self.entry(i, k) * other.entry(k, j)) % m;
                }
                entries[i * dim + j] = acc;
            }
        }
        Matrix { dim, entries }
    }

    /// `self^n mod m` by repeated squaring; `O(log n)` multiplications.
    ///
    /// `n == 0` yields the identity for any base. Negative `n` is
    /// unsupported and fails with [`MatrixError::NegativeExponent`].
    pub fn pow_mod(&self, n: &BigInt, m: &BigUint) -> Result<Matrix, MatrixError> {
        if n.sign() == Sign::Minus {
            return Err(MatrixError::NegativeExponent);
        }
        check_modulus(m)?;
        Ok(self.pow_mod_uint(n.magnitude(), m))
    }

    /// Unsigned-exponent variant of [`Matrix::pow_mod`], for callers whose
    /// exponent is non-negative by construction.
    pub fn pow_mod_uint(&self, n: &BigUint, m: &BigUint) -> Matrix {
        let mut result = Matrix::identity(self.dim);
        let mut base = self.reduced(m);
        let mut n = n.clone();
        while !n.is_zero() {
            if n.bit(0) {
                result = result.mul_mod_unchecked(&base, m);
            }
            base = base.mul_mod_unchecked(&base, m);
            n >>= 1u32;
        }
        result
    }

    /// Every entry reduced modulo `m`.
    pub fn reduced(&self, m: &BigUint) -> Matrix {
        Matrix {
            dim: self.dim,
            entries: self.entries.iter().map(|e| e % m).collect(),
        }
    }
}

fn check_modulus(m: &BigUint) -> Result<(), MatrixError> {
    if m < &BigUint::from(2u32) {
        return Err(MatrixError::BadModulus);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn mat(rows: &[&[u64]]) -> Matrix {
        Matrix::from_rows(
            rows.iter()
                .map(|r| r.iter().map(|&e| BigUint::from(e)).collect())
                .collect(),
        )
        .unwrap()
    }

    fn fib_generator() -> Matrix {
        mat(&[&[0, 1], &[1, 1]])
    }

    #[test]
    fn test_from_rows_rejects_ragged_input() {
        let rows = vec![
            vec![BigUint::from(1u32), BigUint::from(2u32)],
            vec![BigUint::from(3u32)],
        ];
        assert!(matches!(
            Matrix::from_rows(rows),
            Err(MatrixError::NotSquare(2, 1))
        ));
    }

    #[test]
    fn test_mul_mod_dimension_mismatch() {
        let a = mat(&[&[1]]);
        let b = fib_generator();
        let m = BigUint::from(97u32);
        assert!(matches!(
            a.mul_mod(&b, &m),
            Err(MatrixError::DimensionMismatch(1, 2))
        ));
    }

    #[test]
    fn test_pow_zero_is_identity() {
        let a = fib_generator();
        let m = BigUint::from(1000u32);
        let p = a.pow_mod(&BigInt::from(0), &m).unwrap();
        assert_eq!(p, Matrix::identity(2));
    }

    #[test]
    fn test_negative_exponent_rejected() {
        let a = fib_generator();
        let m = BigUint::from(1000u32);
        assert!(matches!(
            a.pow_mod(&BigInt::from(-3), &m),
            Err(MatrixError::NegativeExponent)
        ));
    }

    #[test]
    fn test_fibonacci_entries() {
        // F1^n mod m carries F(n) in the top-right entry.
        let a = fib_generator();
        let m = BigUint::from(100_000u32);
        let p = a.pow_mod_uint(&BigUint::from(10u32), &m);
        assert_eq!(p.entry(0, 1), &BigUint::from(55u32));
        assert_eq!(p.entry(1, 1), &BigUint::from(89u32));
    }

    #[test]
    fn test_pow_is_exponent_additive() {
        let a = mat(&[&[2, 3], &[5, 7]]);
        let m = BigUint::from(1009u32);
        for n1 in 0u32..8 {
            for n2 in 0u32..8 {
                let lhs = a.pow_mod_uint(&BigUint::from(n1 + n2), &m);
                let rhs = a
                    .pow_mod_uint(&BigUint::from(n1), &m)
                    .mul_mod(&a.pow_mod_uint(&BigUint::from(n2), &m), &m)
                    .unwrap();
                assert_eq!(lhs, rhs, "n1 = {n1}, n2 = {n2}");
            }
        }
    }

    #[test]
    fn test_bad_modulus_rejected() {
        let a = fib_generator();
        assert!(matches!(
            a.mul_mod(&a, &BigUint::from(1u32)),
            Err(MatrixError::BadModulus)
        ));
    }
}
