//! Factorization of univariate rational polynomials.
//!
//! The squarefree part is scaled to a primitive integer polynomial f and
//! factored modulo a suitable odd prime p. The modular factors are lifted
//! to p^e, where p^e is large enough to read the coefficients of every
//! candidate factor exactly, and recombined into true factors over Z.

use log::debug;
use num_traits::Zero;
use surd_integers::{ArithError, ArithResult, Integer, Primes};
use surd_poly::{to_rational, DensePoly, ModularPolyRing};
use surd_rings::{Q, Z};

use crate::cantor_zassenhaus::{degree, factor_mod_prime};
use crate::config::FactorConfig;
use crate::hensel::hensel_lift;
use crate::recombine::recombine;
use crate::squarefree::squarefree_integer_part;

/// Number of odd primes tried before prime selection gives up.
const MAX_PRIME_CANDIDATES: usize = 10_000;

/// Factors a rational polynomial into monic irreducible factors over Q.
///
/// Multiplicities and the leading coefficient are dropped: the result is
/// the set of distinct irreducible factors, in no particular order.
/// Constants, including zero, have no factors.
///
/// # Errors
///
/// Returns an internal error if the randomized splitting exhausts its
/// trials, which does not happen for valid inputs.
pub fn factor(f: &DensePoly<Q>) -> ArithResult<Vec<DensePoly<Q>>> {
    factor_with(f, &FactorConfig::default())
}

/// [`factor`] with explicit parameters.
///
/// # Errors
///
/// Fails like [`factor`].
pub fn factor_with(f: &DensePoly<Q>, config: &FactorConfig) -> ArithResult<Vec<DensePoly<Q>>> {
    let g = squarefree_integer_part(f)?;
    if g.degree() < 1 {
        return Ok(vec![]);
    }

    factor_squarefree(&g, config)?
        .iter()
        .map(|h| to_rational(h).monic())
        .collect()
}

/// Factors a primitive squarefree integer polynomial over Z.
fn factor_squarefree(f: &DensePoly<Z>, config: &FactorConfig) -> ArithResult<Vec<DensePoly<Z>>> {
    if f.degree() <= 1 {
        return Ok(vec![f.clone()]);
    }

    let p = choose_prime(f)?;
    let modular = factor_mod_prime(f, p, config)?;
    debug!("{} factors modulo {p}", modular.len());
    if modular.len() == 1 {
        return Ok(vec![f.clone()]);
    }

    let p = Integer::from(p);
    let lc = f.leading_coeff().into_inner();
    let e = precision_for(&p, &lc, &coefficient_bound(f));
    let lifted = hensel_lift(f, &modular, &p, e)?;

    recombine(f, &lifted)
}

/// Selects the first odd prime p such that p does not divide the leading
/// coefficient of `f` and `f` stays squarefree modulo p.
///
/// # Errors
///
/// Returns an internal error if no suitable prime is found among the first
/// odd primes, which cannot happen for a squarefree `f`.
pub fn choose_prime(f: &DensePoly<Z>) -> ArithResult<u64> {
    for p in Primes::new().skip(1).take(MAX_PRIME_CANDIDATES) {
        let ring = ModularPolyRing::new(Integer::from(p))?;
        let fp = ring.reduce(f);
        if fp.degree() != f.degree() {
            continue;
        }
        if ring.gcd(&fp, &ring.derivative(&fp))?.degree() == 0 {
            debug!("selected prime {p} for a degree {} polynomial", f.degree());
            return Ok(p);
        }
    }

    Err(ArithError::internal("no prime keeps the polynomial squarefree"))
}

/// Bounds the absolute value of every coefficient of every proper factor of
/// `f` over Z.
///
/// This is Mignotte's bound `C(k, k/2) * ||f||_2` for the largest proper
/// factor degree `k = deg f - 1`, with the norm rounded up.
#[must_use]
pub fn coefficient_bound(f: &DensePoly<Z>) -> Integer {
    let norm_squared = f
        .coeffs()
        .iter()
        .fold(Integer::zero(), |acc, c| acc + &c.0 * &c.0);
    let k = u32::try_from(degree(f).saturating_sub(1)).unwrap_or(u32::MAX);

    Integer::binomial(k, k / 2) * norm_squared.isqrt_ceil()
}

/// Returns the smallest `e >= 1` with `p^e > 2 * |lc| * bound`.
#[must_use]
pub fn precision_for(p: &Integer, lc: &Integer, bound: &Integer) -> u32 {
    let target = Integer::new(2) * lc.abs() * bound.clone();
    let mut e = 1;
    let mut power = p.clone();
    while power <= target {
        power = power * p.clone();
        e += 1;
    }
    debug!("Hensel target precision {p}^{e}");
    e
}
