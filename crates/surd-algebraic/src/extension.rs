//! Building new fields from old ones.
//!
//! Every operation here reduces to the same two tools: a resultant that
//! eliminates a generator and leaves a rational polynomial in the value of
//! interest, and a real root isolation step that picks out the right
//! irreducible factor of that polynomial by shrinking intervals until only
//! one factor has a root in them.

use log::{debug, warn};
use surd_factor::factor;
use surd_integers::{ArithError, ArithResult, Rational};
use surd_poly::{is_squarefree, poly_gcd, resultant, squarefree_part, DensePoly, SturmSequence};
use surd_rings::traits::{OrderedRing, Ring};
use surd_rings::Q;

use crate::field::AlgebraicField;
use crate::number::AlgebraicNumber;

/// Multipliers k tried in the search for a primitive element `kα + β`.
const MAX_PRIMITIVE_MULTIPLIER: i64 = 1000;

/// Computes the monic squarefree rational polynomial whose roots include
/// every root of `b`, a polynomial with algebraic coefficients.
///
/// With A the minimal polynomial of the coefficient field, this is the
/// squarefree part of `Res_x(A(x), B(x, y))`, where B is `b` with the
/// generator replaced by the variable x.
///
/// # Errors
///
/// Returns [`ArithError::FieldMismatch`] if the coefficients live in
/// incompatible fields, and an internal error if `b` is constant.
pub fn normal(b: &DensePoly<AlgebraicNumber>) -> ArithResult<DensePoly<Q>> {
    if b.degree() < 1 {
        return Err(ArithError::internal("normal of a constant polynomial"));
    }
    let field = coefficient_field(b.coeffs())?;

    // outer variable x (the generator), inner variable y
    let width = field.degree();
    let mut bivariate = vec![Vec::new(); width];
    for c in b.coeffs() {
        for (i, column) in bivariate.iter_mut().enumerate() {
            column.push(c.residue().coeff(i));
        }
    }
    let b_xy = DensePoly::new(bivariate.into_iter().map(DensePoly::new).collect());
    let a_x = lift(field.min_poly());

    let eliminated = resultant(&a_x, &b_xy)?;
    if eliminated.degree() < 1 {
        return Err(ArithError::internal("resultant vanished in normal"));
    }
    squarefree_part(&eliminated)?.monic()
}

/// Finds a field containing the generators of both `fa` and `fb`.
///
/// Returns the field together with the images of the two generators in it.
/// Equal fields and degree-one fields need no new field. Otherwise a
/// primitive element `γ = kα + β` is found, and the smallest of Q(α), Q(β)
/// and Q(γ) that contains both generators is used.
///
/// # Errors
///
/// Returns an internal error if the root of the primitive element cannot be
/// isolated within the configured refinements or no representation is
/// found, neither of which happens for irreducible minimal polynomials.
pub fn extend(
    fa: &AlgebraicField,
    fb: &AlgebraicField,
) -> ArithResult<(AlgebraicField, AlgebraicNumber, AlgebraicNumber)> {
    if fb.degree() == 1 {
        let beta = AlgebraicNumber::from_parts(fa.clone(), fb.generator().residue().clone());
        return Ok((fa.clone(), fa.generator(), beta));
    }
    if fa.degree() == 1 {
        let alpha = AlgebraicNumber::from_parts(fb.clone(), fa.generator().residue().clone());
        return Ok((fb.clone(), alpha, fb.generator()));
    }
    if fa == fb {
        return Ok((fa.clone(), fa.generator(), fa.generator()));
    }

    let (k, composite) = primitive_multiplier(fa.min_poly(), fb.min_poly())?;
    debug!("primitive element {k}*a + b for {fa} and {fb}");

    let (g, lower, upper) = select_factor(fa, fb, k, &composite)?;
    let degree = usize::try_from(g.degree()).unwrap_or(0);
    let k_q = Q::from(k);

    if degree == fa.degree() {
        // Q(γ) = Q(α): β is the common root of B(x) and G(kα + x)
        debug!("second generator lies in {fa}");
        let alpha = fa.generator();
        let shift = DensePoly::new(vec![alpha.clone() * scalar(&k_q), AlgebraicNumber::one()]);
        let beta = common_root(&embed(fb.min_poly()), &embed(&g).compose(&shift))?;
        return Ok((fa.clone(), alpha, beta));
    }
    if degree == fb.degree() {
        // α is the common root of A(x) and G(kx + β)
        debug!("first generator lies in {fb}");
        let beta = fb.generator();
        let shift = DensePoly::new(vec![beta.clone(), scalar(&k_q)]);
        let alpha = common_root(&embed(fa.min_poly()), &embed(&g).compose(&shift))?;
        return Ok((fb.clone(), alpha, beta));
    }

    let field = AlgebraicField::new(g, lower, upper)?.with_config(fa.config().clone());
    debug!("generators combined in new field {field}");
    let gamma = field.generator();
    // α is the common root of A(x) and B(γ - kx)
    let shift = DensePoly::new(vec![gamma.clone(), scalar(&Q::from(-k))]);
    let alpha = common_root(&embed(fa.min_poly()), &embed(fb.min_poly()).compose(&shift))?;
    let beta = gamma.try_sub(&alpha.try_mul(&scalar(&k_q))?)?;
    Ok((field, alpha, beta))
}

/// Returns the real k-th root of `x`, as the generator of a new field.
///
/// The root is the positive one. Zero is its own root and `k = 1` returns
/// `x` unchanged. A rational root comes back as a rational in the field of
/// `x`. Negative `x` is not supported: there is no positive root to find,
/// and the search fails with an internal error.
///
/// # Errors
///
/// Returns [`ArithError::ZeroRootIndex`] for `k = 0`, and an internal
/// error if bisection does not isolate the root within the configured
/// number of steps.
pub fn root(x: &AlgebraicNumber, k: u32) -> ArithResult<AlgebraicNumber> {
    if k == 0 {
        return Err(ArithError::ZeroRootIndex);
    }
    if k == 1 || x.is_zero() {
        return Ok(x.clone());
    }

    // y^k - x
    let mut coeffs = vec![AlgebraicNumber::zero(); k as usize + 1];
    coeffs[0] = -x.clone();
    coeffs[k as usize] = AlgebraicNumber::one();
    let candidates = factor(&normal(&DensePoly::new(coeffs))?)?;
    let sequences = candidates
        .iter()
        .map(SturmSequence::new)
        .collect::<ArithResult<Vec<_>>>()?;

    let (_, upper) = x.bounds();
    let mut lo = Rational::from(0);
    let mut hi = Rational::from(1) + if upper > Rational::from(1) { upper } else { Rational::from(1) };

    for _ in 0..=x.field().config().max_root_bisections {
        if let Some(i) = unique_root(&sequences, &lo, &hi) {
            let field = AlgebraicField::new(candidates[i].clone(), lo, hi)?
                .with_config(x.field().config().clone());
            debug!("root {k} of {x} generates {field}");
            return Ok(field.generator());
        }

        let mid = lo.middle(&hi);
        let power = AlgebraicNumber::rational(mid.pow(k));
        match x.try_sub(&power)?.sign()? {
            1 => lo = mid,
            -1 => hi = mid,
            _ => return Ok(x.field().from_rational(mid)),
        }
    }

    warn!("root {k} of {x} not isolated in [{lo}, {hi}]");
    Err(ArithError::internal("root bisection exhausted its steps"))
}

/// Brings every number of `numbers` into one common field.
///
/// The field grows one [`extend`] at a time; numbers already converted are
/// re-expressed in each new field through the image of the old generator.
///
/// # Errors
///
/// Fails like [`extend`].
pub fn promote(numbers: &[AlgebraicNumber]) -> ArithResult<Vec<AlgebraicNumber>> {
    let mut field = AlgebraicField::rationals();
    let mut promoted: Vec<AlgebraicNumber> = Vec::with_capacity(numbers.len());

    for x in numbers {
        let (next, old_image, new_image) = extend(&field, x.field())?;
        if !next.ptr_eq(&field) {
            promoted = promoted
                .iter()
                .map(|y| substitute(y.residue(), &old_image))
                .collect::<ArithResult<_>>()?;
        }
        promoted.push(substitute(x.residue(), &new_image)?);
        field = next;
    }

    Ok(promoted)
}

/// Evaluates a residue polynomial at `image`, in the field of `image`.
fn substitute(residue: &DensePoly<Q>, image: &AlgebraicNumber) -> ArithResult<AlgebraicNumber> {
    let field = image.field();
    residue
        .coeffs()
        .iter()
        .rev()
        .try_fold(field.from_rational(Rational::from(0)), |acc, c| {
            acc.try_mul(image)?
                .try_add(&field.from_rational(c.as_inner().clone()))
        })
}

/// Finds the one field the coefficients of a polynomial share.
fn coefficient_field(coeffs: &[AlgebraicNumber]) -> ArithResult<AlgebraicField> {
    let mut field = AlgebraicField::rationals();
    for c in coeffs {
        if c.field().degree() == 1 {
            continue;
        }
        if field.degree() == 1 {
            field = c.field().clone();
        } else if field != *c.field() {
            return Err(ArithError::FieldMismatch);
        }
    }
    Ok(field)
}

fn lift(p: &DensePoly<Q>) -> DensePoly<DensePoly<Q>> {
    p.map_coeffs(|c| DensePoly::constant(c.clone()))
}

fn embed(p: &DensePoly<Q>) -> DensePoly<AlgebraicNumber> {
    p.map_coeffs(scalar)
}

fn scalar(c: &Q) -> AlgebraicNumber {
    AlgebraicNumber::rational(c.as_inner().clone())
}

/// Searches for k such that `Res_x(A(x), B(y - kx))` is squarefree.
fn primitive_multiplier(a: &DensePoly<Q>, b: &DensePoly<Q>) -> ArithResult<(i64, DensePoly<Q>)> {
    let a_x = lift(a);
    let b_x = lift(b);

    for k in 1..=MAX_PRIMITIVE_MULTIPLIER {
        let shift = DensePoly::new(vec![DensePoly::x(), DensePoly::constant(Q::from(-k))]);
        let composite = resultant(&a_x, &b_x.compose(&shift))?;
        if is_squarefree(&composite)? {
            return Ok((k, composite));
        }
    }

    warn!("no primitive element for {a} and {b}");
    Err(ArithError::internal("primitive element search exhausted"))
}

/// Picks the irreducible factor of `composite` whose root is `kα + β`, and
/// an interval isolating that root.
fn select_factor(
    fa: &AlgebraicField,
    fb: &AlgebraicField,
    k: i64,
    composite: &DensePoly<Q>,
) -> ArithResult<(DensePoly<Q>, Rational, Rational)> {
    let candidates = factor(composite)?;
    let sequences = candidates
        .iter()
        .map(SturmSequence::new)
        .collect::<ArithResult<Vec<_>>>()?;
    let k = Rational::from(k);

    for _ in 0..=fa.config().max_refinements {
        let (a_lo, a_hi) = fa.interval();
        let (b_lo, b_hi) = fb.interval();
        let lower = &k * &a_lo + b_lo;
        let upper = &k * &a_hi + b_hi;

        if let Some(i) = unique_root(&sequences, &lower, &upper) {
            return Ok((candidates[i].clone(), lower, upper));
        }
        fa.refine();
        fb.refine();
    }

    warn!("could not isolate {k}*a + b for {fa} and {fb}");
    Err(ArithError::internal("primitive element root not isolated"))
}

/// Returns the index of the only sequence with a root in `[lower, upper]`,
/// if the roots of all of them together number exactly one.
fn unique_root(sequences: &[SturmSequence], lower: &Rational, upper: &Rational) -> Option<usize> {
    let counts: Vec<usize> = sequences.iter().map(|s| s.count_roots(lower, upper)).collect();
    if counts.iter().sum::<usize>() != 1 {
        return None;
    }
    counts.iter().position(|&n| n == 1)
}

/// Extracts the root of a linear common factor of `p` and `q`.
fn common_root(
    p: &DensePoly<AlgebraicNumber>,
    q: &DensePoly<AlgebraicNumber>,
) -> ArithResult<AlgebraicNumber> {
    let g = poly_gcd(p, q)?;
    if g.degree() != 1 {
        warn!("common factor {g} is not linear");
        return Err(ArithError::internal("no representation for a generator"));
    }
    // g is monic
    Ok(-g.coeff(0))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn qpoly(coeffs: &[i64]) -> DensePoly<Q> {
        DensePoly::new(coeffs.iter().map(|&n| Q::from(n)).collect())
    }

    fn r(n: i64) -> Rational {
        Rational::from(n)
    }

    fn sqrt(n: i64) -> AlgebraicField {
        AlgebraicField::new(qpoly(&[-n, 0, 1]), r(0), r(n)).unwrap()
    }

    fn assert_close(x: &AlgebraicNumber, expected: f64) {
        let value = x.to_f64().unwrap();
        assert!((value - expected).abs() < 1e-12, "{value} != {expected}");
    }

    #[test]
    fn test_normal_of_sqrt() {
        // y^2 - sqrt2 has roots ±2^(1/4); over Q: y^4 - 2
        let f = sqrt(2);
        let p = DensePoly::new(vec![-f.generator(), AlgebraicNumber::zero(), AlgebraicNumber::one()]);
        assert_eq!(normal(&p).unwrap(), qpoly(&[-2, 0, 0, 0, 1]));
    }

    #[test]
    fn test_normal_rational_coefficients() {
        // 2y^2 - 2y - 4 = 2 (y - 2)(y + 1)
        let p = DensePoly::new(vec![
            AlgebraicNumber::from_int(-4),
            AlgebraicNumber::from_int(-2),
            AlgebraicNumber::from_int(2),
        ]);
        assert_eq!(normal(&p).unwrap(), qpoly(&[-2, -1, 1]));
    }

    #[test]
    fn test_normal_errors() {
        let constant = DensePoly::constant(AlgebraicNumber::from_int(3));
        assert!(normal(&constant).unwrap_err().is_internal());

        let mixed = DensePoly::new(vec![sqrt(2).generator(), sqrt(3).generator()]);
        assert_eq!(normal(&mixed), Err(ArithError::FieldMismatch));
    }

    #[test]
    fn test_extend_sqrt2_sqrt3() {
        let fa = sqrt(2);
        let fb = sqrt(3);
        let (field, a, b) = extend(&fa, &fb).unwrap();

        assert_eq!(field.degree(), 4);
        assert_eq!(field.min_poly(), &qpoly(&[1, 0, -10, 0, 1]));
        assert_eq!((a.clone() * a.clone()).to_rational(), Some(r(2)));
        assert_eq!((b.clone() * b.clone()).to_rational(), Some(r(3)));
        assert_close(&a, 2f64.sqrt());
        assert_close(&b, 3f64.sqrt());
        assert_close(&field.generator(), 2f64.sqrt() + 3f64.sqrt());
    }

    #[test]
    fn test_extend_embeddings_stay_in_intervals() {
        let fa = sqrt(2);
        let fb = sqrt(3);
        let (field, a, b) = extend(&fa, &fb).unwrap();

        for _ in 0..100 {
            field.refine();
            fa.refine();
            fb.refine();
            for (x, f) in [(&a, &fa), (&b, &fb)] {
                let (lo, hi) = f.interval();
                let lo = AlgebraicNumber::rational(lo);
                let hi = AlgebraicNumber::rational(hi);
                assert!(x.compare(&lo).unwrap().is_ge());
                assert!(x.compare(&hi).unwrap().is_le());
            }
        }
    }

    #[test]
    fn test_extend_trivial_cases() {
        let f = sqrt(2);
        let (same, a, b) = extend(&f, &f.clone()).unwrap();
        assert!(same.ptr_eq(&f));
        assert_eq!(a, b);

        let q = AlgebraicField::rational(Rational::from_i64(1, 3));
        let (field, a, third) = extend(&f, &q).unwrap();
        assert!(field.ptr_eq(&f));
        assert_eq!(a, f.generator());
        assert_eq!(third.to_rational(), Some(Rational::from_i64(1, 3)));
        assert!(third.field().ptr_eq(&f));

        let (field, third, b) = extend(&q, &f).unwrap();
        assert!(field.ptr_eq(&f));
        assert_eq!(b, f.generator());
        assert_eq!(third.to_rational(), Some(Rational::from_i64(1, 3)));
    }

    #[test]
    fn test_extend_contained_field() {
        // sqrt8 = 2 sqrt2 generates the same field as sqrt2
        let fa = sqrt(2);
        let fb = sqrt(8);
        let (field, a, b) = extend(&fa, &fb).unwrap();
        assert_eq!(field.degree(), 2);
        assert_eq!(b, a.mul_by_scalar(2));
        assert_close(&b, 8f64.sqrt());
    }

    #[test]
    fn test_extend_conjugate_roots() {
        // -sqrt2 and sqrt2 share a minimal polynomial but not a root
        let fa = sqrt(2);
        let fb = AlgebraicField::new(qpoly(&[-2, 0, 1]), r(-2), r(0)).unwrap();
        let (field, a, b) = extend(&fa, &fb).unwrap();
        assert_eq!(field.degree(), 2);
        assert!((a + b).is_zero());
    }

    #[test]
    fn test_root_of_rational() {
        let two = AlgebraicNumber::rational(r(2));
        let s = root(&two, 2).unwrap();
        assert_eq!(s.field().min_poly(), &qpoly(&[-2, 0, 1]));
        assert_eq!((s.clone() * s.clone()).to_rational(), Some(r(2)));
        assert_close(&s, 2f64.sqrt());

        let c = root(&two, 3).unwrap();
        assert_close(&c, 2f64.cbrt());
    }

    #[test]
    fn test_root_exact() {
        let s = root(&AlgebraicNumber::rational(r(4)), 2).unwrap();
        assert_eq!(s.to_rational(), Some(r(2)));

        let q = root(&AlgebraicNumber::rational(Rational::from_i64(1, 4)), 2).unwrap();
        assert_eq!(q.to_rational(), Some(Rational::from_i64(1, 2)));
    }

    #[test]
    fn test_root_degenerate() {
        let x = sqrt(2).generator();
        assert_eq!(root(&x, 0), Err(ArithError::ZeroRootIndex));
        assert_eq!(root(&x, 1).unwrap(), x);
        let zero = AlgebraicNumber::zero();
        assert!(root(&zero, 5).unwrap().is_zero());
    }

    #[test]
    fn test_root_round_trip() {
        // 1 + sqrt2
        let x = sqrt(2).from_vector(vec![r(1), r(1)]);
        let s = root(&x, 2).unwrap();
        assert_close(&s, (1.0 + 2f64.sqrt()).sqrt());

        let common = promote(&[x, s]).unwrap();
        let (x, s) = (&common[0], &common[1]);
        assert_eq!(s.clone() * s.clone(), x.clone());
    }

    #[test]
    fn test_promote() {
        let a = sqrt(2).generator();
        let b = sqrt(3).from_vector(vec![r(1), r(2)]);
        let c = AlgebraicNumber::rational(Rational::from_i64(5, 7));
        let all = promote(&[a, c, b]).unwrap();

        assert_eq!(all.len(), 3);
        assert!(all[0].field() == all[1].field() && all[1].field() == all[2].field());
        assert_close(&all[0], 2f64.sqrt());
        assert_eq!(all[1].to_rational(), Some(Rational::from_i64(5, 7)));
        assert_close(&all[2], 1.0 + 2.0 * 3f64.sqrt());

        // arithmetic across the promoted numbers is exact
        let sum = all[0].clone() * all[2].clone();
        assert_close(&sum, 2f64.sqrt() * (1.0 + 2.0 * 3f64.sqrt()));
    }

    #[test]
    fn test_promote_empty() {
        assert!(promote(&[]).unwrap().is_empty());
    }
}
