//! Elements of real algebraic number fields.

use std::cmp::Ordering;
use std::fmt;

use surd_integers::{ArithError, ArithResult, Rational};
use surd_poly::DensePoly;
use surd_rings::traits::{
    CommutativeRing, EuclideanDomain, Field, IntegralDomain, OrderedRing, Ring,
};
use surd_rings::Q;

use crate::field::AlgebraicField;

/// An element `r(θ)` of a field Q(θ), stored as the residue r of degree
/// below the field degree.
///
/// Two numbers can be combined when their fields are equal, or when one of
/// them lives in a degree-one field: a rational is compatible with every
/// field. Anything else is a [`ArithError::FieldMismatch`]; bring such
/// numbers into a common field with [`crate::extend`] or [`crate::promote`]
/// first.
#[derive(Clone, Debug)]
pub struct AlgebraicNumber {
    field: AlgebraicField,
    residue: DensePoly<Q>,
}

impl AlgebraicNumber {
    pub(crate) fn from_parts(field: AlgebraicField, residue: DensePoly<Q>) -> Self {
        Self { field, residue }
    }

    /// A rational number, in the shared field of rationals.
    #[must_use]
    pub fn rational(q: Rational) -> Self {
        AlgebraicField::rationals().from_rational(q)
    }

    /// Returns the field this number lives in.
    #[must_use]
    pub fn field(&self) -> &AlgebraicField {
        &self.field
    }

    /// Returns the residue polynomial r with `self = r(θ)`.
    #[must_use]
    pub fn residue(&self) -> &DensePoly<Q> {
        &self.residue
    }

    /// Returns true if the residue is constant.
    #[must_use]
    pub fn is_rational(&self) -> bool {
        self.residue.degree() <= 0
    }

    /// Returns the value if it is rational.
    #[must_use]
    pub fn to_rational(&self) -> Option<Rational> {
        self.is_rational().then(|| self.residue.coeff(0).into_inner())
    }

    /// Encloses the value using the field's current interval, without
    /// refining.
    #[must_use]
    pub fn bounds(&self) -> (Rational, Rational) {
        self.field.value_bounds(&self.residue)
    }

    fn common_field(&self, other: &Self) -> ArithResult<AlgebraicField> {
        if self.field.ptr_eq(&other.field) || other.field.degree() == 1 {
            Ok(self.field.clone())
        } else if self.field.degree() == 1 || self.field == other.field {
            Ok(other.field.clone())
        } else {
            Err(ArithError::FieldMismatch)
        }
    }

    /// Adds two numbers.
    ///
    /// # Errors
    ///
    /// Returns [`ArithError::FieldMismatch`] for incompatible fields.
    pub fn try_add(&self, other: &Self) -> ArithResult<Self> {
        let field = self.common_field(other)?;
        Ok(Self::from_parts(field, self.residue.add(&other.residue)))
    }

    /// Subtracts two numbers.
    ///
    /// # Errors
    ///
    /// Returns [`ArithError::FieldMismatch`] for incompatible fields.
    pub fn try_sub(&self, other: &Self) -> ArithResult<Self> {
        let field = self.common_field(other)?;
        Ok(Self::from_parts(field, self.residue.sub(&other.residue)))
    }

    /// Multiplies two numbers.
    ///
    /// # Errors
    ///
    /// Returns [`ArithError::FieldMismatch`] for incompatible fields.
    pub fn try_mul(&self, other: &Self) -> ArithResult<Self> {
        let field = self.common_field(other)?;
        let residue = field.reduce_product(&self.residue.mul(&other.residue));
        Ok(Self::from_parts(field, residue))
    }

    /// Divides two numbers.
    ///
    /// # Errors
    ///
    /// Returns [`ArithError::FieldMismatch`] for incompatible fields and
    /// [`ArithError::DivisionByZero`] if `other` is zero.
    pub fn try_div(&self, other: &Self) -> ArithResult<Self> {
        self.common_field(other)?;
        self.try_mul(&other.try_inv()?)
    }

    /// Computes the multiplicative inverse.
    ///
    /// # Errors
    ///
    /// Returns [`ArithError::DivisionByZero`] for zero.
    pub fn try_inv(&self) -> ArithResult<Self> {
        let residue = self.field.invert(&self.residue)?;
        Ok(Self::from_parts(self.field.clone(), residue))
    }

    fn expect_ok(result: ArithResult<Self>, op: &str) -> Self {
        match result {
            Ok(x) => x,
            Err(e) => panic!("algebraic {op} failed: {e}"),
        }
    }
}

impl Ring for AlgebraicNumber {
    fn zero() -> Self {
        Self::rational(Rational::from(0))
    }

    fn one() -> Self {
        Self::rational(Rational::from(1))
    }

    fn is_zero(&self) -> bool {
        self.residue.is_zero()
    }

    fn is_one(&self) -> bool {
        self.residue.degree() == 0 && self.residue.coeff(0).is_one()
    }
}

impl CommutativeRing for AlgebraicNumber {}

impl IntegralDomain for AlgebraicNumber {
    fn exact_div(&self, other: &Self) -> ArithResult<Self> {
        self.try_div(other)
    }
}

impl EuclideanDomain for AlgebraicNumber {
    fn div_rem(&self, other: &Self) -> ArithResult<(Self, Self)> {
        Ok((self.try_div(other)?, Self::zero()))
    }
}

impl Field for AlgebraicNumber {
    fn inv(&self) -> ArithResult<Self> {
        self.try_inv()
    }

    fn field_div(&self, other: &Self) -> ArithResult<Self> {
        self.try_div(other)
    }
}

impl OrderedRing for AlgebraicNumber {
    fn sign(&self) -> ArithResult<i8> {
        self.field.sign_of(&self.residue)
    }

    fn compare(&self, other: &Self) -> ArithResult<Ordering> {
        Ok(self.try_sub(other)?.sign()?.cmp(&0))
    }

    fn to_f64(&self) -> ArithResult<f64> {
        self.field.approximate(&self.residue)
    }
}

impl PartialEq for AlgebraicNumber {
    /// Numbers in incompatible fields compare unequal.
    fn eq(&self, other: &Self) -> bool {
        self.common_field(other).is_ok() && self.residue == other.residue
    }
}

impl Eq for AlgebraicNumber {}

/// # Panics
///
/// Panics if the operands live in incompatible fields.
impl std::ops::Add for AlgebraicNumber {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        Self::expect_ok(self.try_add(&other), "addition")
    }
}

/// # Panics
///
/// Panics if the operands live in incompatible fields.
impl std::ops::Sub for AlgebraicNumber {
    type Output = Self;

    fn sub(self, other: Self) -> Self {
        Self::expect_ok(self.try_sub(&other), "subtraction")
    }
}

/// # Panics
///
/// Panics if the operands live in incompatible fields.
impl std::ops::Mul for AlgebraicNumber {
    type Output = Self;

    fn mul(self, other: Self) -> Self {
        Self::expect_ok(self.try_mul(&other), "multiplication")
    }
}

/// # Panics
///
/// Panics on incompatible fields or a zero divisor.
impl std::ops::Div for AlgebraicNumber {
    type Output = Self;

    fn div(self, other: Self) -> Self {
        Self::expect_ok(self.try_div(&other), "division")
    }
}

impl std::ops::Neg for AlgebraicNumber {
    type Output = Self;

    fn neg(self) -> Self {
        Self::from_parts(self.field, self.residue.neg())
    }
}

impl From<Rational> for AlgebraicNumber {
    fn from(q: Rational) -> Self {
        Self::rational(q)
    }
}

impl fmt::Display for AlgebraicNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_rational() {
            write!(f, "{}", self.residue.coeff(0))
        } else {
            write!(f, "{} mod ({})", self.residue, self.field.min_poly())
        }
    }
}
