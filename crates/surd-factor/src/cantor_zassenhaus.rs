//! Cantor-Zassenhaus factorization over Z/pZ for an odd prime p.
//!
//! Factorization of a squarefree polynomial runs in two stages. Distinct-degree
//! factorization groups the irreducible factors by degree, using that
//! `x^(p^d) - x` is the product of all monic irreducibles of degree dividing d.
//! Equal-degree factorization then splits each group with random
//! polynomials T: for a random T, `T^((p^d - 1)/2)` is `+1` modulo about half
//! of the factors and `-1` or `0` modulo the rest, so `gcd(T^((p^d-1)/2) - 1, f)`
//! is usually a proper factor.

use log::{trace, warn};
use num_traits::One;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use surd_integers::{ArithError, ArithResult, Integer};
use surd_poly::{DensePoly, ModularPolyRing};
use surd_rings::Z;

use crate::config::FactorConfig;

pub(crate) fn degree(p: &DensePoly<Z>) -> usize {
    usize::try_from(p.degree()).unwrap_or(0)
}

fn exponent(d: usize) -> ArithResult<u32> {
    u32::try_from(d).map_err(|_| ArithError::internal("factor degree out of range"))
}

/// Factors a squarefree polynomial modulo the odd prime `p` into monic
/// irreducibles.
///
/// # Errors
///
/// Returns [`ArithError::NotInvertible`] if `f` vanishes modulo p, and an
/// internal error if some equal-degree split exhausts
/// [`FactorConfig::max_split_trials`].
pub fn factor_mod_prime(
    f: &DensePoly<Z>,
    p: u64,
    config: &FactorConfig,
) -> ArithResult<Vec<DensePoly<Z>>> {
    let ring = ModularPolyRing::new(Integer::from(p))?;
    let f = ring.monic(f)?;
    if f.is_zero() {
        return Err(ArithError::NotInvertible);
    }

    let mut rng = ChaCha8Rng::seed_from_u64(config.seed);
    let mut factors = Vec::new();

    for (d, group) in distinct_degree_factorization(&ring, &f)? {
        factors.extend(equal_degree_factorization(
            &ring,
            &group,
            d,
            &mut rng,
            config.max_split_trials,
        )?);
    }

    Ok(factors)
}

/// Distinct-degree factorization of a monic squarefree polynomial.
///
/// Returns pairs `(d, g)` where g is the product of all irreducible factors
/// of degree d. Degrees are increasing and the products multiply back to `f`.
///
/// # Errors
///
/// Fails if the modulus of `ring` is not prime.
pub fn distinct_degree_factorization(
    ring: &ModularPolyRing,
    f: &DensePoly<Z>,
) -> ArithResult<Vec<(usize, DensePoly<Z>)>> {
    let x = DensePoly::x();
    let mut v = ring.monic(f)?;
    let mut h = x.clone();
    let mut groups = Vec::new();
    let mut d = 0;

    loop {
        d += 1;
        if 2 * d > degree(&v) {
            break;
        }

        // h = x^(p^d) mod v
        h = ring.pow_mod(&h, ring.modulus(), &v)?;
        let g = ring.gcd(&ring.sub(&h, &x), &v)?;
        if g.degree() > 0 {
            v = ring.exact_div(&v, &g)?;
            h = ring.rem(&h, &v)?;
            groups.push((d, g));
        }
    }

    if v.degree() > 0 {
        groups.push((degree(&v), v));
    }

    Ok(groups)
}

/// Splits a monic squarefree product of degree-`d` irreducibles into its
/// factors.
///
/// # Errors
///
/// Returns an internal error when a split does not succeed within
/// `max_trials` random attempts.
pub fn equal_degree_factorization<G: Rng>(
    ring: &ModularPolyRing,
    f: &DensePoly<Z>,
    d: usize,
    rng: &mut G,
    max_trials: usize,
) -> ArithResult<Vec<DensePoly<Z>>> {
    if degree(f) <= d {
        return Ok(vec![f.clone()]);
    }

    let (g, h) = split(ring, f, d, rng, max_trials)?;
    let mut factors = equal_degree_factorization(ring, &g, d, rng, max_trials)?;
    factors.extend(equal_degree_factorization(ring, &h, d, rng, max_trials)?);
    Ok(factors)
}

fn split<G: Rng>(
    ring: &ModularPolyRing,
    f: &DensePoly<Z>,
    d: usize,
    rng: &mut G,
    max_trials: usize,
) -> ArithResult<(DensePoly<Z>, DensePoly<Z>)> {
    let p = ring.modulus();
    let e = (p.pow(exponent(d)?) - Integer::one()) / Integer::new(2);
    let n = degree(f);

    for trial in 0..max_trials {
        let t = random_monic(ring, 2 * d - 1, rng)?;
        let a = ring.sub(&ring.pow_mod(&t, &e, f)?, &DensePoly::one());
        let g = ring.gcd(&a, f)?;

        trace!("equal-degree split trial {trial}: gcd degree {}", g.degree());
        if g.degree() > 0 && degree(&g) < n {
            let h = ring.exact_div(f, &g)?;
            return Ok((g, h));
        }
    }

    warn!("no equal-degree split of a degree {n} polynomial after {max_trials} trials");
    Err(ArithError::internal(format!(
        "equal-degree splitting failed after {max_trials} trials"
    )))
}

fn random_monic<G: Rng>(
    ring: &ModularPolyRing,
    deg: usize,
    rng: &mut G,
) -> ArithResult<DensePoly<Z>> {
    let p = ring
        .modulus()
        .to_i64()
        .ok_or_else(|| ArithError::internal("prime does not fit a machine word"))?;

    let mut coeffs: Vec<Z> = (0..deg).map(|_| Z::new(rng.gen_range(0..p))).collect();
    coeffs.push(Z::new(1));
    Ok(DensePoly::new(coeffs))
}
