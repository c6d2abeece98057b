//! Hensel lifting for polynomial factorization.
//!
//! Lifts a factorization modulo p to a factorization modulo p^k.
//! The factor list is split in half, the two partial products are lifted
//! together, then each half is lifted recursively against its product.
//! Each pair lift uses quadratic Hensel lifting, which doubles the
//! precision every iteration.

use log::debug;
use surd_integers::{ArithError, ArithResult, Integer};
use surd_poly::{DensePoly, ModularPolyRing};
use surd_rings::Z;

/// Result of Hensel lifting.
#[derive(Clone, Debug)]
pub struct HenselLiftResult {
    /// The lifted factors, monic and reduced into `[0, modulus)`.
    pub factors: Vec<DensePoly<Z>>,
    /// The prime used.
    pub prime: Integer,
    /// The final modulus (p^k).
    pub modulus: Integer,
    /// Number of precision doublings per lifted pair.
    pub steps: usize,
}

/// Lifts a factorization from Z_p to Z_{p^k}.
///
/// `factors_mod_p` must be monic, pairwise coprime modulo p, and multiply
/// to `f` divided by its leading coefficient modulo p. The leading
/// coefficient of `f` must not be divisible by p. The lifted factors
/// multiply to `f / lc(f)` modulo p^k and agree with the input modulo p.
///
/// # Errors
///
/// Returns [`ArithError::NotInvertible`] when two input factors share a
/// common factor modulo p, or when p divides the leading coefficient.
pub fn hensel_lift(
    f: &DensePoly<Z>,
    factors_mod_p: &[DensePoly<Z>],
    p: &Integer,
    target_k: u32,
) -> ArithResult<HenselLiftResult> {
    let target_k = target_k.max(1);
    let modulus = p.pow(target_k);
    debug!("Hensel lifting {} factors to {p}^{target_k}", factors_mod_p.len());

    let mut steps = 0;
    let mut k = 1;
    while k < target_k {
        k = (2 * k).min(target_k);
        steps += 1;
    }

    let factors = if factors_mod_p.is_empty() {
        vec![]
    } else {
        lift_factors(f, factors_mod_p, p, target_k)?
    };

    Ok(HenselLiftResult {
        factors,
        prime: p.clone(),
        modulus,
        steps,
    })
}

fn lift_factors(
    f: &DensePoly<Z>,
    factors: &[DensePoly<Z>],
    p: &Integer,
    target_k: u32,
) -> ArithResult<Vec<DensePoly<Z>>> {
    if factors.len() == 1 {
        let ring = ModularPolyRing::new(p.pow(target_k))?;
        return Ok(vec![ring.monic(f)?]);
    }

    let ring_p = ModularPolyRing::new(p.clone())?;
    let mid = factors.len() / 2;
    let (g_factors, h_factors) = factors.split_at(mid);

    let g = factors_product(&ring_p, g_factors);
    let h = factors_product(&ring_p, h_factors);
    let (g, h) = hensel_lift_pair(f, &g, &h, p, target_k)?;

    let mut lifted = lift_factors(&g, g_factors, p, target_k)?;
    lifted.extend(lift_factors(&h, h_factors, p, target_k)?);
    Ok(lifted)
}

/// Lifts `f = g * h (mod p)` to `f = g* * h* (mod p^target_k)`, all monic.
fn hensel_lift_pair(
    f: &DensePoly<Z>,
    g: &DensePoly<Z>,
    h: &DensePoly<Z>,
    p: &Integer,
    target_k: u32,
) -> ArithResult<(DensePoly<Z>, DensePoly<Z>)> {
    let ring_p = ModularPolyRing::new(p.clone())?;
    let (one, mut s, mut t) = ring_p.extended_gcd(g, h)?;
    if one.degree() != 0 {
        return Err(ArithError::NotInvertible);
    }

    let mut g = g.clone();
    let mut h = h.clone();
    let mut k = 1;

    while k < target_k {
        k = (2 * k).min(target_k);
        let ring = ModularPolyRing::new(p.pow(k))?;
        let f = ring.monic(f)?;

        // s*g + t*h = 1 and f = g*h hold modulo the previous precision
        let e = ring.sub(&f, &ring.mul(&g, &h));
        let (q, r) = ring.divmod(&ring.mul(&s, &e), &h)?;
        let new_g = ring.add(&ring.add(&g, &ring.mul(&t, &e)), &ring.mul(&q, &g));
        let new_h = ring.add(&h, &r);

        let b = ring.sub(
            &ring.add(&ring.mul(&s, &new_g), &ring.mul(&t, &new_h)),
            &DensePoly::one(),
        );
        let (c, d) = ring.divmod(&ring.mul(&s, &b), &new_h)?;
        s = ring.sub(&s, &d);
        t = ring.sub(&ring.sub(&t, &ring.mul(&t, &b)), &ring.mul(&c, &new_g));

        g = new_g;
        h = new_h;
    }

    Ok((g, h))
}

fn factors_product(ring: &ModularPolyRing, factors: &[DensePoly<Z>]) -> DensePoly<Z> {
    factors
        .iter()
        .fold(DensePoly::one(), |acc, f| ring.mul(&acc, f))
}
