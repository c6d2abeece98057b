//! Resultants via the subresultant pseudo-remainder sequence.
//!
//! The resultant of two polynomials f and g is zero iff they share a common
//! root. Over an integral domain it can be computed without fractions: each
//! pseudo-remainder is divided by a factor known to divide it exactly, which
//! keeps coefficient growth polynomial (Collins' subresultant algorithm).
//!
//! Being generic over the coefficient domain, the same code computes
//! integer resultants and, with `DensePoly<DensePoly<Q>>`, eliminates one
//! variable of a bivariate system.

use surd_integers::{ArithError, ArithResult};
use surd_rings::traits::{IntegralDomain, Ring};

use crate::dense::DensePoly;

fn degree_u32<R: Ring>(p: &DensePoly<R>) -> ArithResult<u32> {
    u32::try_from(p.degree()).map_err(|_| ArithError::internal("negative or huge degree"))
}

/// Computes the resultant res(a, b).
///
/// Conventions: the resultant with a zero polynomial is zero, and for a
/// constant `c` and a polynomial of degree n, res(c, b) = c^n.
///
/// # Errors
///
/// Fails only if an exact division that the algorithm guarantees turns out
/// inexact, which means the coefficient ring is not an integral domain.
pub fn resultant<R: IntegralDomain>(a: &DensePoly<R>, b: &DensePoly<R>) -> ArithResult<R> {
    if a.is_zero() || b.is_zero() {
        return Ok(R::zero());
    }

    let mut a = a.clone();
    let mut b = b.clone();
    let mut negate = false;

    if a.degree() < b.degree() {
        std::mem::swap(&mut a, &mut b);
        if a.degree() % 2 == 1 && b.degree() % 2 == 1 {
            negate = true;
        }
    }

    if b.degree() == 0 {
        let r = b.leading_coeff().pow(degree_u32(&a)?);
        return Ok(if negate { -r } else { r });
    }

    let mut g = R::one();
    let mut h = R::one();

    loop {
        let delta = degree_u32(&a)? - degree_u32(&b)?;
        if a.degree() % 2 == 1 && b.degree() % 2 == 1 {
            negate = !negate;
        }

        let (_, _, r) = a.pseudo_divmod(&b)?;
        a = b;
        if r.is_zero() {
            // common factor of positive degree
            return Ok(R::zero());
        }
        b = r.div_scalar(&(g.clone() * h.pow(delta)))?;

        g = a.leading_coeff();
        h = match delta {
            0 => h,
            1 => g.clone(),
            _ => g.pow(delta).exact_div(&h.pow(delta - 1))?,
        };

        if b.degree() == 0 {
            break;
        }
    }

    let deg_a = degree_u32(&a)?;
    let r = b
        .leading_coeff()
        .pow(deg_a)
        .exact_div(&h.pow(deg_a - 1))?;

    Ok(if negate { -r } else { r })
}

/// Computes the discriminant-like quantity res(f, f').
///
/// This differs from the discriminant by the factor
/// `(-1)^(n(n-1)/2) * lc(f)`; it vanishes exactly when f has a repeated root.
///
/// # Errors
///
/// Fails like [`resultant`].
pub fn derivative_resultant<R: IntegralDomain>(f: &DensePoly<R>) -> ArithResult<R> {
    resultant(f, &f.derivative())
}

#[cfg(test)]
mod tests {
    use super::*;
    use surd_rings::{Q, Z};

    fn zpoly(coeffs: &[i64]) -> DensePoly<Z> {
        DensePoly::new(coeffs.iter().map(|&n| Z::new(n)).collect())
    }

    fn qpoly(coeffs: &[i64]) -> DensePoly<Q> {
        DensePoly::new(coeffs.iter().map(|&n| Q::from(n)).collect())
    }

    #[test]
    fn test_resultant_linear() {
        // res(x + 1, x + 2) = (x + 2) at x = -1
        let f = zpoly(&[1, 1]);
        let g = zpoly(&[2, 1]);
        assert_eq!(resultant(&f, &g).unwrap(), Z::new(1));
        assert_eq!(resultant(&g, &f).unwrap(), Z::new(-1));
    }

    #[test]
    fn test_resultant_common_root() {
        // (x+1)^2 and (x+1)(x+2) share x = -1
        let f = zpoly(&[1, 2, 1]);
        let g = zpoly(&[2, 3, 1]);
        assert!(resultant(&f, &g).unwrap().is_zero());
    }

    #[test]
    fn test_resultant_quadratics() {
        // res(x^2 - 2, x - 1) = (sqrt2 - 1)(-sqrt2 - 1) = -1
        assert_eq!(resultant(&zpoly(&[-2, 0, 1]), &zpoly(&[-1, 1])).unwrap(), Z::new(-1));
        // res(x^2 - 2, x^2 - 3) = (2 - 3)^2 = 1
        assert_eq!(resultant(&zpoly(&[-2, 0, 1]), &zpoly(&[-3, 0, 1])).unwrap(), Z::new(1));
        // res(2x^2 + 1, x^3 - 1) = prod of (2w^2 + 1) over the cube roots of
        // unity w = 3 * 3 = 9, and the operand order does not matter here
        let f = zpoly(&[1, 0, 2]);
        let g = zpoly(&[-1, 0, 0, 1]);
        assert_eq!(resultant(&f, &g).unwrap(), Z::new(9));
        assert_eq!(resultant(&g, &f).unwrap(), Z::new(9));
    }

    #[test]
    fn test_resultant_constants() {
        assert_eq!(resultant(&zpoly(&[3]), &zpoly(&[1, 0, 1])).unwrap(), Z::new(9));
        assert_eq!(resultant(&zpoly(&[1, 0, 1]), &zpoly(&[3])).unwrap(), Z::new(9));
        assert!(resultant(&zpoly(&[]), &zpoly(&[1, 1])).unwrap().is_zero());
    }

    #[test]
    fn test_resultant_matches_over_q() {
        // same value whether computed over Z or Q
        let f = qpoly(&[5, -3, 0, 2]);
        let g = qpoly(&[-1, 4, 1]);
        let over_z = resultant(&zpoly(&[5, -3, 0, 2]), &zpoly(&[-1, 4, 1])).unwrap();
        assert_eq!(resultant(&f, &g).unwrap(), Q::from_integer(over_z.into_inner()));
    }

    #[test]
    fn test_bivariate_elimination() {
        // res_x(x^2 - 2, (y - x)^2 - 3) in y is the minimal polynomial of
        // sqrt2 + sqrt3: y^4 - 10y^2 + 1
        let a: DensePoly<DensePoly<Q>> = DensePoly::new(vec![
            DensePoly::constant(Q::from(-2)),
            DensePoly::zero(),
            DensePoly::one(),
        ]);
        // (y - x)^2 - 3 = x^2 - 2y x + (y^2 - 3), coefficients in Q[y]
        let b: DensePoly<DensePoly<Q>> = DensePoly::new(vec![
            qpoly(&[-3, 0, 1]),
            qpoly(&[0, -2]),
            DensePoly::one(),
        ]);
        assert_eq!(resultant(&a, &b).unwrap(), qpoly(&[1, 0, -10, 0, 1]));
    }

    #[test]
    fn test_derivative_resultant() {
        // x^2 - 2: res(f, 2x) = (2 sqrt2)(-2 sqrt2) = -8
        assert_eq!(derivative_resultant(&zpoly(&[-2, 0, 1])).unwrap(), Z::new(-8));
        assert!(derivative_resultant(&zpoly(&[1, 2, 1])).unwrap().is_zero());
    }
}
