//! Arbitrary precision rational numbers.
//!
//! This module provides exact fractions for interval arithmetic and
//! polynomial coefficients. Besides the field operations it offers the
//! dyadic [`Rational::middle`] used to drive deterministic bisection.

use dashu::base::{Abs, Inverse, Signed as DashuSigned, UnsignedAbs};
use dashu::rational::RBig;
use num_traits::{One, Zero};
use std::fmt;
use std::ops::{Add, Div, Mul, Neg, Sub};

use crate::{ArithError, ArithResult, Integer};

/// An arbitrary precision rational number.
///
/// Rationals are always stored in lowest terms with a positive denominator.
#[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub struct Rational(RBig);

impl Rational {
    /// Creates a new rational from numerator and denominator, reducing it.
    ///
    /// A negative denominator moves its sign to the numerator.
    ///
    /// # Errors
    ///
    /// Returns [`ArithError::ZeroDenominator`] if the denominator is zero.
    pub fn new(numerator: Integer, denominator: Integer) -> ArithResult<Self> {
        if denominator.is_zero() {
            return Err(ArithError::ZeroDenominator);
        }
        let (numerator, denominator) = if denominator.is_negative() {
            (-numerator, -denominator)
        } else {
            (numerator, denominator)
        };
        Ok(Self(RBig::from_parts(
            numerator.into_inner(),
            denominator.into_inner().unsigned_abs(),
        )))
    }

    /// Creates a rational from an integer (denominator = 1).
    #[must_use]
    pub fn from_integer(n: Integer) -> Self {
        Self(RBig::from(n.into_inner()))
    }

    /// Creates a rational from i64 numerator and denominator.
    ///
    /// # Panics
    ///
    /// Panics if the denominator is zero.
    #[must_use]
    pub fn from_i64(numerator: i64, denominator: i64) -> Self {
        assert!(denominator != 0, "denominator cannot be zero");
        Self(RBig::from_parts(
            dashu::integer::IBig::from(numerator) * dashu::integer::IBig::from(denominator.signum()),
            dashu::integer::UBig::from(denominator.unsigned_abs()),
        ))
    }

    /// Returns the numerator.
    #[must_use]
    pub fn numerator(&self) -> Integer {
        Integer::from(self.0.numerator().clone())
    }

    /// Returns the denominator.
    #[must_use]
    pub fn denominator(&self) -> Integer {
        Integer::from(dashu::integer::IBig::from(self.0.denominator().clone()))
    }

    /// Returns true if this rational is an integer.
    #[must_use]
    pub fn is_integer(&self) -> bool {
        self.0.denominator().is_one()
    }

    /// Converts to an integer if the denominator is 1.
    #[must_use]
    pub fn to_integer(&self) -> Option<Integer> {
        if self.is_integer() {
            Some(self.numerator())
        } else {
            None
        }
    }

    /// Largest integer not greater than `self`.
    #[must_use]
    pub fn floor(&self) -> Integer {
        self.numerator().div_rem_floor(&self.denominator()).0
    }

    /// Smallest integer not less than `self`.
    #[must_use]
    pub fn ceil(&self) -> Integer {
        -(-self).floor()
    }

    /// Returns the absolute value.
    #[must_use]
    pub fn abs(&self) -> Self {
        Self(self.0.clone().abs())
    }

    /// Returns the reciprocal (1/x).
    ///
    /// # Errors
    ///
    /// Returns [`ArithError::DivisionByZero`] if the rational is zero.
    pub fn recip(&self) -> ArithResult<Self> {
        if self.is_zero() {
            return Err(ArithError::DivisionByZero);
        }
        Ok(Self(self.0.clone().inv()))
    }

    /// Returns the sign: -1, 0, or 1.
    #[must_use]
    pub fn signum(&self) -> i8 {
        if self.0.is_zero() {
            0
        } else if DashuSigned::is_positive(&self.0) {
            1
        } else {
            -1
        }
    }

    /// Returns true if negative.
    #[must_use]
    pub fn is_negative(&self) -> bool {
        DashuSigned::is_negative(&self.0)
    }

    /// Returns a dyadic rational strictly between `self` and `other`.
    ///
    /// The result lies in the middle half of the interval and has the
    /// smallest power-of-two denominator that fits there, so repeated
    /// bisection shrinks an interval by at least a quarter per step. Returns
    /// the shared value when both endpoints are equal.
    ///
    /// This is not the dyadic with the smallest denominator anywhere in the
    /// open interval: `middle(0, 11/10)` is `1/2`, not `1`. Keeping to the
    /// middle half bounds the number of refinement steps.
    #[must_use]
    pub fn middle(&self, other: &Self) -> Self {
        if self == other {
            return self.clone();
        }
        let (lo, hi) = if self < other { (self, other) } else { (other, self) };
        let quarter = (hi - lo) / Self::from(4);
        let window_lo = lo + &quarter;
        let window_hi = hi - &quarter;

        let two = Integer::new(2);
        let mut scale = Integer::one();
        loop {
            let scaled = &window_lo * &Self::from_integer(scale.clone());
            let candidate = Self(RBig::from_parts(
                scaled.ceil().into_inner(),
                scale.clone().into_inner().unsigned_abs(),
            ));
            if candidate <= window_hi {
                return candidate;
            }
            scale = scale * &two;
        }
    }

    /// Converts to the nearest `f64` below in magnitude.
    ///
    /// Numerator and denominator are first rescaled by a power of two so the
    /// integer quotient carries 54 significant bits; no intermediate value
    /// overflows regardless of the operands' size.
    #[must_use]
    #[allow(clippy::cast_possible_wrap, clippy::cast_possible_truncation)]
    pub fn to_f64(&self) -> f64 {
        if self.is_zero() {
            return 0.0;
        }
        let num = self.numerator().abs();
        let den = self.denominator();
        let shift = 54 - (num.bit_len() as i64 - den.bit_len() as i64);
        let two = Integer::new(2);
        let quotient = if shift >= 0 {
            (num * two.pow(shift as u32)) / den
        } else {
            num / (den * two.pow((-shift) as u32))
        };
        let magnitude = quotient.to_f64() * 2f64.powi(-(shift as i32));
        if self.is_negative() {
            -magnitude
        } else {
            magnitude
        }
    }

    /// Returns the inner `dashu::RBig`.
    #[must_use]
    pub fn into_inner(self) -> RBig {
        self.0
    }

    /// Returns a reference to the inner `dashu::RBig`.
    #[must_use]
    pub fn as_inner(&self) -> &RBig {
        &self.0
    }

    /// Computes self^exp for non-negative exp.
    #[must_use]
    pub fn pow(&self, exp: u32) -> Self {
        Self(self.0.pow(exp as usize))
    }
}

impl Zero for Rational {
    fn zero() -> Self {
        Self(RBig::ZERO)
    }

    fn is_zero(&self) -> bool {
        self.0.is_zero()
    }
}

impl One for Rational {
    fn one() -> Self {
        Self(RBig::ONE)
    }

    fn is_one(&self) -> bool {
        self.0 == RBig::ONE
    }
}

impl fmt::Debug for Rational {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Rational({})", self.0)
    }
}

impl fmt::Display for Rational {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_integer() {
            write!(f, "{}", self.numerator())
        } else {
            write!(f, "{}/{}", self.numerator(), self.denominator())
        }
    }
}

// Arithmetic operations
impl Add for Rational {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        Self(self.0 + rhs.0)
    }
}

impl Add<&Rational> for Rational {
    type Output = Self;

    fn add(self, rhs: &Rational) -> Self::Output {
        Self(self.0 + &rhs.0)
    }
}

impl Add for &Rational {
    type Output = Rational;

    fn add(self, rhs: Self) -> Self::Output {
        Rational(&self.0 + &rhs.0)
    }
}

impl Sub for Rational {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self::Output {
        Self(self.0 - rhs.0)
    }
}

impl Sub<&Rational> for Rational {
    type Output = Self;

    fn sub(self, rhs: &Rational) -> Self::Output {
        Self(self.0 - &rhs.0)
    }
}

impl Sub for &Rational {
    type Output = Rational;

    fn sub(self, rhs: Self) -> Self::Output {
        Rational(&self.0 - &rhs.0)
    }
}

impl Mul for Rational {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self::Output {
        Self(self.0 * rhs.0)
    }
}

impl Mul<&Rational> for Rational {
    type Output = Self;

    fn mul(self, rhs: &Rational) -> Self::Output {
        Self(self.0 * &rhs.0)
    }
}

impl Mul for &Rational {
    type Output = Rational;

    fn mul(self, rhs: Self) -> Self::Output {
        Rational(&self.0 * &rhs.0)
    }
}

impl Div for Rational {
    type Output = Self;

    fn div(self, rhs: Self) -> Self::Output {
        Self(self.0 / rhs.0)
    }
}

impl Div<&Rational> for Rational {
    type Output = Self;

    fn div(self, rhs: &Rational) -> Self::Output {
        Self(self.0 / &rhs.0)
    }
}

impl Div for &Rational {
    type Output = Rational;

    fn div(self, rhs: Self) -> Self::Output {
        Rational(&self.0 / &rhs.0)
    }
}

impl Neg for Rational {
    type Output = Self;

    fn neg(self) -> Self::Output {
        Self(-self.0)
    }
}

impl Neg for &Rational {
    type Output = Rational;

    fn neg(self) -> Self::Output {
        Rational(-&self.0)
    }
}

impl From<Integer> for Rational {
    fn from(n: Integer) -> Self {
        Self::from_integer(n)
    }
}

impl From<i64> for Rational {
    fn from(n: i64) -> Self {
        Self::from_integer(Integer::new(n))
    }
}

impl From<i32> for Rational {
    fn from(n: i32) -> Self {
        Self::from_integer(Integer::new(i64::from(n)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_basic_ops() {
        let a = Rational::from_i64(1, 2);
        let b = Rational::from_i64(1, 3);

        // 1/2 + 1/3 = 5/6
        let sum = a.clone() + b.clone();
        assert_eq!(sum.numerator().to_i64(), Some(5));
        assert_eq!(sum.denominator().to_i64(), Some(6));

        // 1/2 * 1/3 = 1/6
        let prod = a.clone() * b.clone();
        assert_eq!(prod.numerator().to_i64(), Some(1));
        assert_eq!(prod.denominator().to_i64(), Some(6));
    }

    #[test]
    fn test_reduction() {
        // 4/6 should reduce to 2/3
        let r = Rational::from_i64(4, 6);
        assert_eq!(r.numerator().to_i64(), Some(2));
        assert_eq!(r.denominator().to_i64(), Some(3));

        // sign moves to the numerator
        let r = Rational::new(Integer::new(3), Integer::new(-9)).unwrap();
        assert_eq!(r.numerator().to_i64(), Some(-1));
        assert_eq!(r.denominator().to_i64(), Some(3));
    }

    #[test]
    fn test_zero_denominator() {
        assert_eq!(
            Rational::new(Integer::new(1), Integer::new(0)),
            Err(ArithError::ZeroDenominator)
        );
        assert_eq!(Rational::from(0).recip(), Err(ArithError::DivisionByZero));
    }

    #[test]
    fn test_floor_ceil() {
        assert_eq!(Rational::from_i64(7, 2).floor().to_i64(), Some(3));
        assert_eq!(Rational::from_i64(-7, 2).floor().to_i64(), Some(-4));
        assert_eq!(Rational::from_i64(7, 2).ceil().to_i64(), Some(4));
        assert_eq!(Rational::from_i64(-7, 2).ceil().to_i64(), Some(-3));
        assert_eq!(Rational::from(5).ceil().to_i64(), Some(5));
    }

    #[test]
    fn test_middle() {
        let a = Rational::from(0);
        let b = Rational::from(1000);
        let m = a.middle(&b);
        assert!(m >= Rational::from(250) && m <= Rational::from(750));
        assert!(m.is_integer());

        let a = Rational::from_i64(1, 3);
        let b = Rational::from_i64(1, 2);
        let m = b.middle(&a);
        assert!(a < m && m < b);
        assert_eq!(m, Rational::from_i64(3, 8));

        assert_eq!(a.middle(&a), a);
    }

    #[test]
    fn test_middle_stays_in_middle_half() {
        // 1 has a smaller denominator but lies outside [11/40, 33/40]
        let m = Rational::from(0).middle(&Rational::from_i64(11, 10));
        assert_eq!(m, Rational::from_i64(1, 2));
    }

    #[test]
    fn test_to_f64() {
        assert!((Rational::from_i64(1, 3).to_f64() - 1.0 / 3.0).abs() < 1e-15);
        assert!((Rational::from_i64(-22, 7).to_f64() + 22.0 / 7.0).abs() < 1e-14);

        let huge = Rational::new(Integer::new(10).pow(400), Integer::new(10).pow(399) * Integer::new(4))
            .unwrap();
        assert!((huge.to_f64() - 2.5).abs() < 1e-14);
    }

    #[test]
    fn test_display() {
        assert_eq!(Rational::from_i64(3, 1).to_string(), "3");
        assert_eq!(Rational::from_i64(2, 3).to_string(), "2/3");
        assert_eq!(Rational::from_i64(4, -6).to_string(), "-2/3");
    }
}
