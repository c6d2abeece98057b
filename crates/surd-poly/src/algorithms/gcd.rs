//! Polynomial GCD algorithms.
//!
//! This module provides the Euclidean algorithm over fields, its extended
//! form, and the content/primitive-part split used to move between Q[x]
//! and Z[x].

use num_traits::{One, Zero};
use surd_integers::{ArithResult, Integer, Rational};
use surd_rings::traits::{EuclideanDomain, Field};
use surd_rings::{Q, Z};

use crate::dense::DensePoly;

/// Computes the monic GCD of two polynomials over a field.
///
/// `gcd(0, 0)` is the zero polynomial.
///
/// # Errors
///
/// Propagates coefficient inversion failures, which cannot happen for
/// nonzero leading coefficients of a field.
pub fn poly_gcd<F: Field>(a: &DensePoly<F>, b: &DensePoly<F>) -> ArithResult<DensePoly<F>> {
    let mut p = a.clone();
    let mut q = b.clone();

    while !q.is_zero() {
        let (_, r) = p.divmod(&q)?;
        p = q;
        q = r;
    }

    p.monic()
}

/// Extended polynomial GCD.
///
/// Computes (gcd, s, t) such that gcd = s*a + t*b with gcd monic.
/// For `a = b = 0` the result is `(0, 1, 0)`.
///
/// # Errors
///
/// Propagates coefficient inversion failures.
pub fn poly_extended_gcd<F: Field>(
    a: &DensePoly<F>,
    b: &DensePoly<F>,
) -> ArithResult<(DensePoly<F>, DensePoly<F>, DensePoly<F>)> {
    let mut old_r = a.clone();
    let mut r = b.clone();
    let mut old_s = DensePoly::one();
    let mut s = DensePoly::zero();
    let mut old_t = DensePoly::zero();
    let mut t = DensePoly::one();

    while !r.is_zero() {
        let (q, rem) = old_r.divmod(&r)?;

        let new_s = old_s.sub(&q.mul(&s));
        let new_t = old_t.sub(&q.mul(&t));

        old_r = r;
        r = rem;
        old_s = s;
        s = new_s;
        old_t = t;
        t = new_t;
    }

    if old_r.is_zero() {
        return Ok((DensePoly::zero(), DensePoly::one(), DensePoly::zero()));
    }

    let lead_inv = old_r.leading_coeff().inv()?;
    Ok((
        old_r.scale(&lead_inv),
        old_s.scale(&lead_inv),
        old_t.scale(&lead_inv),
    ))
}

/// Computes the content of a polynomial (GCD of all coefficients).
pub fn content<R: EuclideanDomain>(p: &DensePoly<R>) -> R {
    p.coeffs()
        .iter()
        .cloned()
        .reduce(|a, b| a.gcd(&b))
        .unwrap_or_else(R::zero)
}

/// Computes the primitive part of a polynomial (divided by content).
///
/// # Errors
///
/// Propagates exact-division failures, which indicate a non-normalizing
/// `gcd` in the coefficient domain.
pub fn primitive_part<R: EuclideanDomain>(p: &DensePoly<R>) -> ArithResult<DensePoly<R>> {
    let c = content(p);
    if c.is_zero() || c.is_one() {
        return Ok(p.clone());
    }
    p.div_scalar(&c)
}

/// Clears denominators and content of a rational polynomial.
///
/// The result is the unique primitive integer polynomial with positive
/// leading coefficient that is a rational multiple of `p`.
#[must_use]
pub fn integer_primitive(p: &DensePoly<Q>) -> DensePoly<Z> {
    if p.is_zero() {
        return DensePoly::zero();
    }

    let denom = p
        .coeffs()
        .iter()
        .fold(Integer::one(), |acc, c| acc.lcm(&c.as_inner().denominator()));

    let scaled: Vec<Integer> = p
        .coeffs()
        .iter()
        .map(|c| {
            let r = c.as_inner();
            r.numerator() * (denom.clone() / r.denominator())
        })
        .collect();

    let mut g = scaled.iter().fold(Integer::zero(), |acc, c| acc.gcd(c));
    if scaled.last().is_some_and(Integer::is_negative) {
        g = -g;
    }

    DensePoly::new(scaled.into_iter().map(|c| Z(c / g.clone())).collect())
}

/// Embeds an integer polynomial into Q[x].
#[must_use]
pub fn to_rational(p: &DensePoly<Z>) -> DensePoly<Q> {
    p.map_coeffs(|c| Q(Rational::from_integer(c.as_inner().clone())))
}
