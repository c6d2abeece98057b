//! Squarefree reduction of rational polynomials.
//!
//! Factorization only ever sees the squarefree part: repeated factors are
//! divided out over Q and the result is scaled to a primitive integer
//! polynomial with positive leading coefficient.

use surd_integers::ArithResult;
use surd_poly::{integer_primitive, squarefree_part, DensePoly};
use surd_rings::{Q, Z};

/// Returns the primitive integer polynomial with the same roots as `f`,
/// each of multiplicity one.
///
/// Constants map to the constant 1 and the zero polynomial to zero.
///
/// # Errors
///
/// Propagates coefficient inversion failures of the GCD computation.
pub fn squarefree_integer_part(f: &DensePoly<Q>) -> ArithResult<DensePoly<Z>> {
    if f.is_zero() {
        return Ok(DensePoly::zero());
    }
    Ok(integer_primitive(&squarefree_part(f)?))
}
