//! The field of rational numbers Q.

use num_traits::{One, Zero};
use surd_integers::{ArithResult, Integer, Rational};

use crate::traits::{CommutativeRing, EuclideanDomain, Field, IntegralDomain, OrderedRing, Ring};

/// The field of rational numbers.
///
/// This is a wrapper around [`surd_integers::Rational`] that implements
/// the algebraic traits.
#[derive(Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Default)]
pub struct Q(pub Rational);

impl Q {
    /// Creates a new rational from numerator and denominator.
    ///
    /// # Panics
    ///
    /// Panics if `den` is zero.
    #[must_use]
    pub fn new(num: i64, den: i64) -> Self {
        Self(Rational::from_i64(num, den))
    }

    /// Creates a rational from an integer.
    #[must_use]
    pub fn from_integer(n: Integer) -> Self {
        Self(Rational::from_integer(n))
    }

    /// Returns the inner Rational.
    #[must_use]
    pub fn into_inner(self) -> Rational {
        self.0
    }

    /// Returns a reference to the inner Rational.
    #[must_use]
    pub fn as_inner(&self) -> &Rational {
        &self.0
    }
}

impl Ring for Q {
    fn zero() -> Self {
        Self(Rational::zero())
    }

    fn one() -> Self {
        Self(Rational::one())
    }

    fn is_zero(&self) -> bool {
        self.0.is_zero()
    }

    fn is_one(&self) -> bool {
        self.0.is_one()
    }

    fn from_int(n: i64) -> Self {
        Self(Rational::from(n))
    }

    fn mul_by_scalar(&self, n: i64) -> Self {
        Self(&self.0 * &Rational::from(n))
    }
}

impl CommutativeRing for Q {}

impl IntegralDomain for Q {
    fn exact_div(&self, other: &Self) -> ArithResult<Self> {
        self.field_div(other)
    }
}

impl EuclideanDomain for Q {
    fn div_rem(&self, other: &Self) -> ArithResult<(Self, Self)> {
        // In a field, division is exact, so remainder is always zero
        Ok((self.field_div(other)?, Self::zero()))
    }

    fn gcd(&self, other: &Self) -> Self {
        // In a field, gcd of any two non-zero elements is 1
        if self.is_zero() && other.is_zero() {
            Self::zero()
        } else {
            Self::one()
        }
    }

    fn extended_gcd(&self, other: &Self) -> (Self, Self, Self) {
        if let Ok(inv) = self.inv() {
            // 1 = self * (1/self) + other * 0
            (Self::one(), inv, Self::zero())
        } else if let Ok(inv) = other.inv() {
            (Self::one(), Self::zero(), inv)
        } else {
            (Self::zero(), Self::zero(), Self::zero())
        }
    }
}

impl Field for Q {
    fn inv(&self) -> ArithResult<Self> {
        Ok(Self(self.0.recip()?))
    }
}

impl OrderedRing for Q {
    fn sign(&self) -> ArithResult<i8> {
        Ok(self.0.signum())
    }

    fn abs(&self) -> ArithResult<Self> {
        Ok(Self(self.0.abs()))
    }

    fn to_f64(&self) -> ArithResult<f64> {
        Ok(self.0.to_f64())
    }
}

impl std::ops::Add for Q {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        Self(self.0 + rhs.0)
    }
}

impl std::ops::Sub for Q {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self::Output {
        Self(self.0 - rhs.0)
    }
}

impl std::ops::Mul for Q {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self::Output {
        Self(self.0 * rhs.0)
    }
}

impl std::ops::Neg for Q {
    type Output = Self;

    fn neg(self) -> Self::Output {
        Self(-self.0)
    }
}

impl From<i64> for Q {
    fn from(value: i64) -> Self {
        Self(Rational::from(value))
    }
}

impl From<Rational> for Q {
    fn from(value: Rational) -> Self {
        Self(value)
    }
}

impl std::fmt::Display for Q {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
