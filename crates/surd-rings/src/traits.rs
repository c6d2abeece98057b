//! Algebraic structure traits.
//!
//! These are the capabilities generic algorithms ask of their coefficients.
//! Polynomials, resultants and Sturm sequences are written once against
//! them and reused over integers, rationals, polynomials and algebraic
//! numbers.

use std::cmp::Ordering;
use std::fmt::{Debug, Display};
use std::ops::{Add, Mul, Neg, Sub};

use surd_integers::{ArithError, ArithResult};

/// A ring is a set with addition and multiplication operations.
///
/// # Laws
///
/// - Addition is associative and commutative with identity `zero()`
/// - Multiplication is associative with identity `one()`
/// - Multiplication distributes over addition
/// - Every element has an additive inverse (`neg`)
pub trait Ring:
    Clone
    + Eq
    + Debug
    + Display
    + Add<Output = Self>
    + Sub<Output = Self>
    + Mul<Output = Self>
    + Neg<Output = Self>
{
    /// The additive identity.
    fn zero() -> Self;

    /// The multiplicative identity.
    fn one() -> Self;

    /// Returns true if this is the additive identity.
    fn is_zero(&self) -> bool;

    /// Returns true if this is the multiplicative identity.
    fn is_one(&self) -> bool;

    /// Embeds an integer.
    fn from_int(n: i64) -> Self {
        Self::one().mul_by_scalar(n)
    }

    /// Computes self + self + ... (n times), by doubling.
    fn mul_by_scalar(&self, n: i64) -> Self {
        let mut result = Self::zero();
        let mut addend = self.clone();
        let mut k = n.unsigned_abs();

        while k > 0 {
            if k & 1 == 1 {
                result = result + addend.clone();
            }
            k >>= 1;
            if k > 0 {
                addend = addend.clone() + addend;
            }
        }

        if n < 0 {
            -result
        } else {
            result
        }
    }

    /// Computes self^n for non-negative n.
    fn pow(&self, n: u32) -> Self {
        if n == 0 {
            return Self::one();
        }

        let mut result = Self::one();
        let mut base = self.clone();
        let mut exp = n;

        while exp > 0 {
            if exp & 1 == 1 {
                result = result * base.clone();
            }
            exp >>= 1;
            if exp > 0 {
                base = base.clone() * base;
            }
        }

        result
    }
}

/// Raises `base` to a signed exponent.
///
/// # Errors
///
/// Returns [`ArithError::NegativeExponent`] when `exponent < 0`; rings in
/// general have no inverses to fall back on.
pub fn power<R: Ring>(base: &R, exponent: i64) -> ArithResult<R> {
    let n = u32::try_from(exponent).map_err(|_| {
        if exponent < 0 {
            ArithError::NegativeExponent(exponent)
        } else {
            ArithError::internal("exponent too large")
        }
    })?;
    Ok(base.pow(n))
}

/// A commutative ring where multiplication is commutative.
///
/// Every ring in this library is commutative.
pub trait CommutativeRing: Ring {}

/// An integral domain is a commutative ring with no zero divisors.
///
/// If a * b = 0, then a = 0 or b = 0. Cancellation makes exact division
/// well defined.
pub trait IntegralDomain: CommutativeRing {
    /// Divides `self` by `other` when the quotient lies in the ring.
    ///
    /// # Errors
    ///
    /// Returns [`ArithError::DivisionByZero`] for a zero divisor and
    /// [`ArithError::NotDivisible`] when no exact quotient exists.
    fn exact_div(&self, other: &Self) -> ArithResult<Self>;
}

/// A Euclidean domain supports division with remainder.
///
/// For any a, b with b ≠ 0, there exist q, r such that:
/// - a = b*q + r
/// - Either r = 0 or φ(r) < φ(b) for some Euclidean function φ
pub trait EuclideanDomain: IntegralDomain {
    /// Computes the quotient and remainder of division.
    ///
    /// # Errors
    ///
    /// Returns [`ArithError::DivisionByZero`] if `other` is zero.
    fn div_rem(&self, other: &Self) -> ArithResult<(Self, Self)>;

    /// Computes the quotient of division.
    ///
    /// # Errors
    ///
    /// Returns [`ArithError::DivisionByZero`] if `other` is zero.
    fn quo(&self, other: &Self) -> ArithResult<Self> {
        Ok(self.div_rem(other)?.0)
    }

    /// Computes the remainder of division.
    ///
    /// # Errors
    ///
    /// Returns [`ArithError::DivisionByZero`] if `other` is zero.
    fn rem(&self, other: &Self) -> ArithResult<Self> {
        Ok(self.div_rem(other)?.1)
    }

    /// Computes a greatest common divisor.
    ///
    /// The result is determined up to a unit; implementations may normalize.
    fn gcd(&self, other: &Self) -> Self {
        let mut a = self.clone();
        let mut b = other.clone();

        while !b.is_zero() {
            // b is nonzero, so the remainder exists
            let Ok(r) = a.rem(&b) else { break };
            a = b;
            b = r;
        }

        a
    }

    /// Extended Euclidean algorithm.
    ///
    /// Returns (g, s, t) such that g = self*s + other*t, where g is the
    /// unnormalized gcd produced by the remainder sequence.
    fn extended_gcd(&self, other: &Self) -> (Self, Self, Self) {
        let mut old_r = self.clone();
        let mut r = other.clone();
        let mut old_s = Self::one();
        let mut s = Self::zero();
        let mut old_t = Self::zero();
        let mut t = Self::one();

        while !r.is_zero() {
            let Ok((q, rem)) = old_r.div_rem(&r) else { break };
            old_r = r;
            r = rem;

            let new_s = old_s - q.clone() * s.clone();
            old_s = s;
            s = new_s;

            let new_t = old_t - q * t.clone();
            old_t = t;
            t = new_t;
        }

        (old_r, old_s, old_t)
    }
}

/// A field is a ring where every non-zero element has a multiplicative inverse.
pub trait Field: EuclideanDomain {
    /// Computes the multiplicative inverse.
    ///
    /// # Errors
    ///
    /// Returns [`ArithError::DivisionByZero`] if the element is zero.
    fn inv(&self) -> ArithResult<Self>;

    /// Divides by another element.
    ///
    /// # Errors
    ///
    /// Returns [`ArithError::DivisionByZero`] if `other` is zero.
    fn field_div(&self, other: &Self) -> ArithResult<Self> {
        Ok(self.clone() * other.inv()?)
    }
}

/// Rings with a total order compatible with the ring operations.
///
/// The sign is fallible: for algebraic numbers it is decided by refining an
/// isolating interval, which can give up.
pub trait OrderedRing: Ring {
    /// Returns the sign: -1, 0, or 1.
    ///
    /// # Errors
    ///
    /// Fails only when the sign cannot be decided.
    fn sign(&self) -> ArithResult<i8>;

    /// Returns the absolute value.
    ///
    /// # Errors
    ///
    /// Fails like [`OrderedRing::sign`].
    fn abs(&self) -> ArithResult<Self> {
        if self.sign()? < 0 {
            Ok(-self.clone())
        } else {
            Ok(self.clone())
        }
    }

    /// Compares two elements through the sign of their difference.
    ///
    /// # Errors
    ///
    /// Fails like [`OrderedRing::sign`].
    fn compare(&self, other: &Self) -> ArithResult<Ordering> {
        Ok((self.clone() - other.clone()).sign()?.cmp(&0))
    }

    /// Returns a floating-point approximation.
    ///
    /// # Errors
    ///
    /// Fails when the approximation cannot be computed.
    fn to_f64(&self) -> ArithResult<f64>;
}
