//! Sturm sequences and real root isolation.
//!
//! The Sturm sequence of p is `p, p', -rem(p, p'), ...`, continued with
//! negated remainders until the remainder vanishes. The number of sign
//! changes of the sequence at a point, zeros skipped, drops by exactly one
//! each time the point passes a real root of p.

use num_traits::{One, Zero};
use surd_integers::{ArithError, ArithResult, Rational};
use surd_rings::Q;

use crate::dense::DensePoly;

/// Bisection cap for [`isolate_root`].
pub const MAX_ISOLATION_STEPS: usize = 100;

/// A precomputed Sturm sequence.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SturmSequence {
    chain: Vec<DensePoly<Q>>,
}

impl SturmSequence {
    /// Builds the Sturm sequence of `p`.
    ///
    /// # Errors
    ///
    /// Returns [`ArithError::DivisionByZero`] for the zero polynomial, which
    /// has no finite root count.
    pub fn new(p: &DensePoly<Q>) -> ArithResult<Self> {
        if p.is_zero() {
            return Err(ArithError::DivisionByZero);
        }

        let mut chain = vec![p.clone()];
        let mut prev = p.clone();
        let mut cur = p.derivative();

        while !cur.is_zero() {
            let (_, r) = prev.divmod(&cur)?;
            chain.push(cur.clone());
            prev = cur;
            cur = r.neg();
        }

        Ok(Self { chain })
    }

    /// Sturm sequence of `x - root`, which is just `x - root, 1`.
    #[must_use]
    pub fn linear(root: &Rational) -> Self {
        let p = DensePoly::new(vec![Q(-root), Q(Rational::one())]);
        Self {
            chain: vec![p, DensePoly::one()],
        }
    }

    /// Returns the polynomials of the sequence.
    #[must_use]
    pub fn chain(&self) -> &[DensePoly<Q>] {
        &self.chain
    }

    /// Counts the sign changes of the sequence at `x`, skipping zeros.
    #[must_use]
    pub fn sign_changes(&self, x: &Rational) -> usize {
        let x = Q(x.clone());
        let mut changes = 0;
        let mut last = 0i8;

        for p in &self.chain {
            let s = p.eval(&x).0.signum();
            if s == 0 {
                continue;
            }
            if last != 0 && s != last {
                changes += 1;
            }
            last = s;
        }

        changes
    }

    /// Counts the distinct real roots in the closed interval `[lower, upper]`.
    ///
    /// An empty interval (`lower > upper`) contains no roots.
    #[must_use]
    pub fn count_roots(&self, lower: &Rational, upper: &Rational) -> usize {
        if lower > upper {
            return 0;
        }

        let at_lower = self.sign_changes(lower);
        let at_upper = self.sign_changes(upper);
        let lower_is_root = self.chain[0].eval(&Q(lower.clone())).0.is_zero();

        at_lower.saturating_sub(at_upper) + usize::from(lower_is_root)
    }
}

/// Counts the distinct real roots of `p` in `[lower, upper]`.
///
/// # Errors
///
/// Fails for the zero polynomial.
pub fn count_roots(p: &DensePoly<Q>, lower: &Rational, upper: &Rational) -> ArithResult<usize> {
    Ok(SturmSequence::new(p)?.count_roots(lower, upper))
}

/// Cauchy's bound: every real root of `p` lies in `(-b, b)` for
/// `b = 1 + max |a_i / a_n|`.
#[must_use]
pub fn root_bound(p: &DensePoly<Q>) -> Rational {
    let lead = p.leading_coeff().0;
    if lead.is_zero() {
        return Rational::one();
    }

    let mut max = Rational::zero();
    for c in p.coeffs().iter().take(p.coeffs().len() - 1) {
        let ratio = (&c.0 / &lead).abs();
        if ratio > max {
            max = ratio;
        }
    }

    max + Rational::one()
}

/// Finds an interval centered at `x` that contains exactly one root of `p`,
/// by bisecting on its radius.
///
/// Returns the interval `(x - d, x + d)` as a pair of bounds. When `x` is
/// itself a root the interval degenerates to `[x, x]`. The radius `d` is the
/// first bisection point that isolates a root, not the smallest such radius.
///
/// # Errors
///
/// Returns [`ArithError::RootIsolationTie`] when no radius isolates a single
/// root within [`MAX_ISOLATION_STEPS`] bisections: two roots at the same
/// distance from `x`, or no real roots at all.
pub fn isolate_root(p: &DensePoly<Q>, x: &Rational) -> ArithResult<(Rational, Rational)> {
    let sturm = SturmSequence::new(p)?;
    let around = |d: &Rational| sturm.count_roots(&(x - d), &(x + d));

    let mut lo = Rational::zero();
    let mut hi = root_bound(p) + x.abs();

    match around(&lo) {
        1 => return Ok((x.clone(), x.clone())),
        0 => {}
        _ => return Err(ArithError::internal("multiple roots at one point")),
    }
    match around(&hi) {
        0 => return Err(ArithError::RootIsolationTie),
        1 => return Ok((x - &hi, x + &hi)),
        _ => {}
    }

    // count(lo) == 0 and count(hi) >= 2 throughout
    for _ in 0..MAX_ISOLATION_STEPS {
        let mid = lo.middle(&hi);
        match around(&mid) {
            0 => lo = mid,
            1 => return Ok((x - &mid, x + &mid)),
            _ => hi = mid,
        }
    }

    Err(ArithError::RootIsolationTie)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn r(n: i64) -> Rational {
        Rational::from(n)
    }

    fn from_roots(roots: &[i64]) -> DensePoly<Q> {
        roots.iter().fold(DensePoly::one(), |acc, &root| {
            acc.mul(&DensePoly::new(vec![Q::from(-root), Q::from(1)]))
        })
    }

    #[test]
    fn test_sturm_chain() {
        // x^2 - 2: chain is x^2 - 2, 2x, 2
        let p = DensePoly::new(vec![Q::from(-2), Q::from(0), Q::from(1)]);
        let s = SturmSequence::new(&p).unwrap();
        assert_eq!(s.chain().len(), 3);
        assert_eq!(s.chain()[2], DensePoly::constant(Q::from(2)));
        assert!(SturmSequence::new(&DensePoly::zero()).is_err());

        let linear = DensePoly::new(vec![Q::new(-1, 2), Q::from(1)]);
        assert_eq!(
            SturmSequence::linear(&Rational::from_i64(1, 2)),
            SturmSequence::new(&linear).unwrap()
        );
    }

    #[test]
    fn test_count_roots_explicit() {
        let p = from_roots(&[-3, 0, 3]);
        assert_eq!(count_roots(&p, &r(-4), &r(4)).unwrap(), 3);
        assert_eq!(count_roots(&p, &r(1), &r(4)).unwrap(), 1);
        assert_eq!(count_roots(&p, &r(-2), &r(2)).unwrap(), 1);
    }

    #[test]
    fn test_count_roots_endpoints() {
        let p = from_roots(&[-3, 0, 3]);
        // both endpoints are roots
        assert_eq!(count_roots(&p, &r(0), &r(3)).unwrap(), 2);
        assert_eq!(count_roots(&p, &r(-3), &r(-3)).unwrap(), 1);
        assert_eq!(count_roots(&p, &r(1), &r(2)).unwrap(), 0);
        assert_eq!(count_roots(&p, &r(4), &r(-4)).unwrap(), 0);
    }

    #[test]
    fn test_count_roots_repeated() {
        // (x - 1)^2 (x + 2): two distinct roots
        let p = from_roots(&[1, 1, -2]);
        assert_eq!(count_roots(&p, &r(-5), &r(5)).unwrap(), 2);
        // x^2 + 1 has none
        let q = DensePoly::new(vec![Q::from(1), Q::from(0), Q::from(1)]);
        assert_eq!(count_roots(&q, &r(-10), &r(10)).unwrap(), 0);
    }

    #[test]
    fn test_root_bound() {
        let p = from_roots(&[-3, 0, 3]); // x^3 - 9x
        assert_eq!(root_bound(&p), r(10));
    }

    #[test]
    fn test_isolate_root() {
        let p = from_roots(&[-3, 0, 3]);
        let (lo, hi) = isolate_root(&p, &r(2)).unwrap();
        assert!(lo <= r(3) && r(3) <= hi);
        assert_eq!(count_roots(&p, &lo, &hi).unwrap(), 1);

        // x is a root
        let (lo, hi) = isolate_root(&p, &r(0)).unwrap();
        assert_eq!((lo, hi), (r(0), r(0)));

        // sqrt 2 from 1
        let q = DensePoly::new(vec![Q::from(-2), Q::from(0), Q::from(1)]);
        let (lo, hi) = isolate_root(&q, &r(1)).unwrap();
        assert_eq!(count_roots(&q, &lo, &hi).unwrap(), 1);
        assert_eq!((lo, hi), (r(0), r(2)));
    }

    #[test]
    fn test_isolate_root_radius_not_minimal() {
        // radius 1 around 1 isolates sqrt 2, though radius 1/2 already does
        let q = DensePoly::new(vec![Q::from(-2), Q::from(0), Q::from(1)]);
        let (lo, hi) = isolate_root(&q, &r(1)).unwrap();
        assert_eq!(&hi - &r(1), r(1));
        let half = Rational::from_i64(1, 2);
        assert_eq!(count_roots(&q, &(r(1) - &half), &(r(1) + &half)).unwrap(), 1);
        assert!(lo < r(1) - &half);
    }

    #[test]
    fn test_isolate_root_tie() {
        // 0 is equidistant from -1 and 1
        let p = from_roots(&[-1, 1]);
        assert_eq!(isolate_root(&p, &r(0)), Err(ArithError::RootIsolationTie));

        let q = DensePoly::new(vec![Q::from(1), Q::from(0), Q::from(1)]);
        assert_eq!(isolate_root(&q, &r(0)), Err(ArithError::RootIsolationTie));
    }
}
