//! Squarefree parts of polynomials.
//!
//! A polynomial is squarefree if it has no repeated factors. Over a field of
//! characteristic 0 that is the case exactly when gcd(f, f') = 1, and
//! f / gcd(f, f') keeps every irreducible factor once.

use surd_integers::ArithResult;
use surd_rings::traits::{Field, IntegralDomain};

use crate::algorithms::gcd::poly_gcd;
use crate::dense::DensePoly;

/// Checks if a polynomial is squarefree.
///
/// # Errors
///
/// Propagates coefficient inversion failures.
pub fn is_squarefree<F: Field>(f: &DensePoly<F>) -> ArithResult<bool> {
    if f.is_constant() {
        return Ok(true);
    }
    Ok(poly_gcd(f, &f.derivative())?.is_constant())
}

/// Computes the monic squarefree part f / gcd(f, f').
///
/// Constants (including zero) are returned unchanged.
///
/// # Errors
///
/// Propagates coefficient inversion failures.
pub fn squarefree_part<F: Field>(f: &DensePoly<F>) -> ArithResult<DensePoly<F>> {
    if f.is_constant() {
        return Ok(f.clone());
    }

    let g = poly_gcd(f, &f.derivative())?;
    f.exact_div(&g)?.monic()
}
