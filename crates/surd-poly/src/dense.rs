//! Dense univariate polynomials.
//!
//! Coefficients live in any [`Ring`], including `DensePoly` itself, which is
//! how bivariate polynomials are built for resultants.

use surd_integers::{ArithError, ArithResult};
use surd_rings::traits::{CommutativeRing, EuclideanDomain, Field, IntegralDomain, Ring};

/// A dense univariate polynomial.
///
/// Coefficients are stored in ascending degree order and the vector never
/// ends in a zero, so the zero polynomial has no coefficients at all and
/// degree -1.
#[derive(Clone, PartialEq, Eq, Debug, Hash)]
pub struct DensePoly<R: Ring> {
    /// Coefficients in ascending degree order.
    coeffs: Vec<R>,
}

impl<R: Ring> DensePoly<R> {
    /// Creates a new polynomial from coefficients.
    #[must_use]
    pub fn new(mut coeffs: Vec<R>) -> Self {
        while coeffs.last().is_some_and(|c| c.is_zero()) {
            coeffs.pop();
        }
        Self { coeffs }
    }

    /// Creates the zero polynomial.
    #[must_use]
    pub fn zero() -> Self {
        Self { coeffs: Vec::new() }
    }

    /// Creates the constant polynomial 1.
    #[must_use]
    pub fn one() -> Self {
        Self::constant(R::one())
    }

    /// Creates a constant polynomial.
    #[must_use]
    pub fn constant(c: R) -> Self {
        Self::new(vec![c])
    }

    /// Creates the polynomial x.
    #[must_use]
    pub fn x() -> Self {
        Self::new(vec![R::zero(), R::one()])
    }

    /// Creates the monomial c * x^n.
    #[must_use]
    pub fn monomial(c: R, n: usize) -> Self {
        let mut coeffs = vec![R::zero(); n + 1];
        coeffs[n] = c;
        Self::new(coeffs)
    }

    /// Returns the degree of the polynomial, or -1 for the zero polynomial.
    #[must_use]
    #[allow(clippy::cast_possible_wrap)]
    pub fn degree(&self) -> isize {
        self.coeffs.len() as isize - 1
    }

    /// Returns true if this is the zero polynomial.
    #[must_use]
    pub fn is_zero(&self) -> bool {
        self.coeffs.is_empty()
    }

    /// Returns true if the polynomial has degree at most zero.
    #[must_use]
    pub fn is_constant(&self) -> bool {
        self.coeffs.len() <= 1
    }

    /// Returns the leading coefficient, zero for the zero polynomial.
    #[must_use]
    pub fn leading_coeff(&self) -> R {
        self.coeffs.last().cloned().unwrap_or_else(R::zero)
    }

    /// Returns the coefficient of x^i.
    #[must_use]
    pub fn coeff(&self, i: usize) -> R {
        self.coeffs.get(i).cloned().unwrap_or_else(R::zero)
    }

    /// Returns all coefficients.
    #[must_use]
    pub fn coeffs(&self) -> &[R] {
        &self.coeffs
    }

    /// Consumes the polynomial, returning its coefficients.
    #[must_use]
    pub fn into_coeffs(self) -> Vec<R> {
        self.coeffs
    }

    /// Evaluates the polynomial at a point using Horner's method.
    #[must_use]
    pub fn eval(&self, x: &R) -> R {
        let mut result = R::zero();
        for c in self.coeffs.iter().rev() {
            result = result * x.clone() + c.clone();
        }
        result
    }

    /// Adds two polynomials.
    #[must_use]
    pub fn add(&self, other: &Self) -> Self {
        let len = self.coeffs.len().max(other.coeffs.len());
        let mut result = Vec::with_capacity(len);

        for i in 0..len {
            result.push(self.coeff(i) + other.coeff(i));
        }

        Self::new(result)
    }

    /// Negates a polynomial.
    #[must_use]
    pub fn neg(&self) -> Self {
        Self {
            coeffs: self.coeffs.iter().map(|c| -c.clone()).collect(),
        }
    }

    /// Subtracts two polynomials.
    #[must_use]
    pub fn sub(&self, other: &Self) -> Self {
        let len = self.coeffs.len().max(other.coeffs.len());
        let mut result = Vec::with_capacity(len);

        for i in 0..len {
            result.push(self.coeff(i) - other.coeff(i));
        }

        Self::new(result)
    }

    /// Multiplies two polynomials (schoolbook).
    #[must_use]
    pub fn mul(&self, other: &Self) -> Self {
        if self.is_zero() || other.is_zero() {
            return Self::zero();
        }

        let n = self.coeffs.len();
        let m = other.coeffs.len();
        let mut result = vec![R::zero(); n + m - 1];

        for (i, a) in self.coeffs.iter().enumerate() {
            if a.is_zero() {
                continue;
            }
            for (j, b) in other.coeffs.iter().enumerate() {
                result[i + j] = result[i + j].clone() + a.clone() * b.clone();
            }
        }

        Self::new(result)
    }

    /// Multiplies by a scalar.
    #[must_use]
    pub fn scale(&self, c: &R) -> Self {
        if c.is_zero() {
            return Self::zero();
        }
        Self::new(self.coeffs.iter().map(|x| x.clone() * c.clone()).collect())
    }

    /// Computes the formal derivative.
    #[must_use]
    #[allow(clippy::cast_possible_wrap)]
    pub fn derivative(&self) -> Self {
        if self.is_constant() {
            return Self::zero();
        }

        let result = self
            .coeffs
            .iter()
            .enumerate()
            .skip(1)
            .map(|(i, c)| c.mul_by_scalar(i as i64))
            .collect();

        Self::new(result)
    }

    /// Shifts the polynomial by multiplying by x^n.
    #[must_use]
    pub fn shift(&self, n: usize) -> Self {
        if self.is_zero() || n == 0 {
            return self.clone();
        }

        let mut coeffs = vec![R::zero(); n];
        coeffs.extend(self.coeffs.iter().cloned());
        Self { coeffs }
    }

    /// Computes the composition self(other).
    #[must_use]
    pub fn compose(&self, other: &Self) -> Self {
        let mut result = Self::zero();
        for c in self.coeffs.iter().rev() {
            result = result.mul(other).add(&Self::constant(c.clone()));
        }
        result
    }

    /// Applies `f` to every coefficient.
    #[must_use]
    pub fn map_coeffs<S: Ring>(&self, f: impl Fn(&R) -> S) -> DensePoly<S> {
        DensePoly::new(self.coeffs.iter().map(f).collect())
    }

    /// Applies a fallible `f` to every coefficient.
    ///
    /// # Errors
    ///
    /// Returns the first error produced by `f`.
    pub fn try_map_coeffs<S: Ring>(
        &self,
        f: impl Fn(&R) -> ArithResult<S>,
    ) -> ArithResult<DensePoly<S>> {
        Ok(DensePoly::new(
            self.coeffs.iter().map(f).collect::<ArithResult<Vec<_>>>()?,
        ))
    }

    /// Pseudo-division by `divisor`.
    ///
    /// Returns `(scale, quotient, remainder)` with
    /// `scale * self = quotient * divisor + remainder`, where
    /// `scale = lc(divisor)^(deg(self) - deg(divisor) + 1)` (or 1 when the
    /// dividend already has smaller degree) and
    /// `deg(remainder) < deg(divisor)`. No coefficient division is needed.
    ///
    /// # Errors
    ///
    /// Returns [`ArithError::DivisionByZero`] if `divisor` is zero.
    pub fn pseudo_divmod(&self, divisor: &Self) -> ArithResult<(R, Self, Self)> {
        if divisor.is_zero() {
            return Err(ArithError::DivisionByZero);
        }

        let n = divisor.coeffs.len();
        let m = self.coeffs.len();
        if m < n {
            return Ok((R::one(), Self::zero(), self.clone()));
        }

        let lc = divisor.leading_coeff();
        let steps = m - n + 1;
        let mut quotient = vec![R::zero(); steps];
        let mut remainder = self.coeffs.clone();

        for k in (0..steps).rev() {
            let t = remainder[n - 1 + k].clone();
            for q in &mut quotient {
                *q = q.clone() * lc.clone();
            }
            quotient[k] = t.clone();
            for r in &mut remainder {
                *r = r.clone() * lc.clone();
            }
            if !t.is_zero() {
                for (j, b) in divisor.coeffs.iter().enumerate() {
                    remainder[k + j] = remainder[k + j].clone() - t.clone() * b.clone();
                }
            }
        }

        let scale = lc.pow(u32::try_from(steps).map_err(|_| ArithError::internal("degree overflow"))?);
        Ok((scale, Self::new(quotient), Self::new(remainder)))
    }
}

impl<R: IntegralDomain> DensePoly<R> {
    /// Divides every coefficient exactly by `c`.
    ///
    /// # Errors
    ///
    /// Fails if any coefficient is not divisible by `c`.
    pub fn div_scalar(&self, c: &R) -> ArithResult<Self> {
        self.try_map_coeffs(|x| x.exact_div(c))
    }
}

impl<F: Field> DensePoly<F> {
    /// Division with remainder over a field.
    ///
    /// # Errors
    ///
    /// Returns [`ArithError::DivisionByZero`] if `divisor` is zero.
    pub fn divmod(&self, divisor: &Self) -> ArithResult<(Self, Self)> {
        let (scale, q, r) = self.pseudo_divmod(divisor)?;
        let inv = scale.inv()?;
        Ok((q.scale(&inv), r.scale(&inv)))
    }

    /// Scales the polynomial so that its leading coefficient is one.
    ///
    /// The zero polynomial is returned unchanged.
    ///
    /// # Errors
    ///
    /// Fails only if the leading coefficient cannot be inverted.
    pub fn monic(&self) -> ArithResult<Self> {
        if self.is_zero() {
            return Ok(self.clone());
        }
        Ok(self.scale(&self.leading_coeff().inv()?))
    }
}

impl<R: Ring> Ring for DensePoly<R> {
    fn zero() -> Self {
        Self::zero()
    }

    fn one() -> Self {
        Self::one()
    }

    fn is_zero(&self) -> bool {
        self.coeffs.is_empty()
    }

    fn is_one(&self) -> bool {
        self.coeffs.len() == 1 && self.coeffs[0].is_one()
    }

    fn from_int(n: i64) -> Self {
        Self::constant(R::from_int(n))
    }

    fn mul_by_scalar(&self, n: i64) -> Self {
        Self::new(self.coeffs.iter().map(|c| c.mul_by_scalar(n)).collect())
    }
}

impl<R: CommutativeRing> CommutativeRing for DensePoly<R> {}

impl<R: IntegralDomain> IntegralDomain for DensePoly<R> {
    /// Exact division through pseudo-division.
    ///
    /// The pseudo-remainder must vanish and the pseudo-quotient must be
    /// divisible by the accumulated scale, otherwise the quotient does not
    /// exist in `R[x]`.
    fn exact_div(&self, other: &Self) -> ArithResult<Self> {
        let (scale, q, r) = self.pseudo_divmod(other)?;
        if !r.is_zero() {
            return Err(ArithError::NotDivisible);
        }
        q.div_scalar(&scale).map_err(|e| match e {
            ArithError::DivisionByZero => ArithError::internal("zero pseudo-division scale"),
            e => e,
        })
    }
}

impl<F: Field> EuclideanDomain for DensePoly<F> {
    fn div_rem(&self, other: &Self) -> ArithResult<(Self, Self)> {
        self.divmod(other)
    }
}

impl<R: Ring> std::ops::Add for DensePoly<R> {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        DensePoly::add(&self, &rhs)
    }
}

impl<R: Ring> std::ops::Sub for DensePoly<R> {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self::Output {
        DensePoly::sub(&self, &rhs)
    }
}

impl<R: Ring> std::ops::Mul for DensePoly<R> {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self::Output {
        DensePoly::mul(&self, &rhs)
    }
}

impl<R: Ring> std::ops::Neg for DensePoly<R> {
    type Output = Self;

    fn neg(self) -> Self::Output {
        DensePoly::neg(&self)
    }
}

impl<R: Ring> std::fmt::Display for DensePoly<R> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.is_zero() {
            return write!(f, "0");
        }

        let mut first = true;
        for (i, c) in self.coeffs.iter().enumerate().rev() {
            if c.is_zero() {
                continue;
            }

            let mut coeff = c.to_string();
            if coeff.contains(' ') {
                coeff = format!("({coeff})");
            }
            let (negative, magnitude) = match coeff.strip_prefix('-') {
                Some(rest) => (true, rest.to_string()),
                None => (false, coeff),
            };

            let term = match (i, magnitude.as_str()) {
                (0, _) => magnitude.clone(),
                (1, "1") => "x".to_string(),
                (1, _) => format!("{magnitude}*x"),
                (_, "1") => format!("x^{i}"),
                _ => format!("{magnitude}*x^{i}"),
            };

            match (first, negative) {
                (true, true) => write!(f, "-{term}")?,
                (true, false) => write!(f, "{term}")?,
                (false, true) => write!(f, " - {term}")?,
                (false, false) => write!(f, " + {term}")?,
            }
            first = false;
        }

        Ok(())
    }
}
