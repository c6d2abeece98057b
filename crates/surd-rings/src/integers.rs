//! The ring of integers Z.

use num_traits::{One, Zero};
use surd_integers::{ArithError, ArithResult, Integer};

use crate::traits::{CommutativeRing, EuclideanDomain, IntegralDomain, OrderedRing, Ring};

/// The ring of integers.
///
/// This is a wrapper around [`surd_integers::Integer`] that implements
/// the algebraic traits. Division with remainder rounds toward negative
/// infinity, so remainders share the divisor's sign.
#[derive(Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Default)]
pub struct Z(pub Integer);

impl Z {
    /// Creates a new integer.
    #[must_use]
    pub fn new(value: i64) -> Self {
        Self(Integer::new(value))
    }

    /// Returns the inner Integer.
    #[must_use]
    pub fn into_inner(self) -> Integer {
        self.0
    }

    /// Returns a reference to the inner Integer.
    #[must_use]
    pub fn as_inner(&self) -> &Integer {
        &self.0
    }
}

impl Ring for Z {
    fn zero() -> Self {
        Self(Integer::zero())
    }

    fn one() -> Self {
        Self(Integer::one())
    }

    fn is_zero(&self) -> bool {
        self.0.is_zero()
    }

    fn is_one(&self) -> bool {
        self.0.is_one()
    }

    fn from_int(n: i64) -> Self {
        Self::new(n)
    }

    fn mul_by_scalar(&self, n: i64) -> Self {
        Self(&self.0 * &Integer::new(n))
    }
}

impl CommutativeRing for Z {}

impl IntegralDomain for Z {
    fn exact_div(&self, other: &Self) -> ArithResult<Self> {
        let (q, r) = self.div_rem(other)?;
        if r.is_zero() {
            Ok(q)
        } else {
            Err(ArithError::NotDivisible)
        }
    }
}

impl EuclideanDomain for Z {
    fn div_rem(&self, other: &Self) -> ArithResult<(Self, Self)> {
        if other.is_zero() {
            return Err(ArithError::DivisionByZero);
        }
        let (q, r) = self.0.div_rem_floor(&other.0);
        Ok((Self(q), Self(r)))
    }

    fn gcd(&self, other: &Self) -> Self {
        Self(self.0.gcd(&other.0))
    }

    fn extended_gcd(&self, other: &Self) -> (Self, Self, Self) {
        let (g, s, t) = self.0.extended_gcd(&other.0);
        (Self(g), Self(s), Self(t))
    }
}

impl OrderedRing for Z {
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

impl std::ops::Add for Z {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        Self(self.0 + rhs.0)
    }
}

impl std::ops::Sub for Z {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self::Output {
        Self(self.0 - rhs.0)
    }
}

impl std::ops::Mul for Z {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self::Output {
        Self(self.0 * rhs.0)
    }
}

impl std::ops::Neg for Z {
    type Output = Self;

    fn neg(self) -> Self::Output {
        Self(-self.0)
    }
}

impl From<i64> for Z {
    fn from(value: i64) -> Self {
        Self::new(value)
    }
}

impl From<Integer> for Z {
    fn from(value: Integer) -> Self {
        Self(value)
    }
}

impl std::fmt::Display for Z {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
