//! Recovery of integer factors from lifted modular factors.
//!
//! A true factor of f over Z reduces modulo p^e to the product of some
//! subset of the lifted factors, times a unit. Scaling such a product by
//! lc(f) and reading its coefficients in the symmetric range recovers
//! lc(f)/lc(g) * g exactly, as long as p^e exceeds twice the coefficient
//! bound. Subsets are tried by increasing size and tested by trial division.

use log::debug;
use surd_integers::{ArithError, ArithResult};
use surd_poly::algorithms::gcd::primitive_part;
use surd_poly::{DensePoly, ModularPolyRing};
use surd_rings::traits::IntegralDomain;
use surd_rings::Z;

use crate::hensel::HenselLiftResult;

/// Iterator over the k-element subsets of `0..n`, as increasing index
/// vectors in lexicographic order.
#[derive(Clone, Debug)]
pub struct Combinations {
    n: usize,
    indices: Vec<usize>,
    done: bool,
}

impl Combinations {
    /// Starts the enumeration of k-subsets of `0..n`.
    #[must_use]
    pub fn new(n: usize, k: usize) -> Self {
        Self {
            n,
            indices: (0..k).collect(),
            done: k > n,
        }
    }
}

impl Iterator for Combinations {
    type Item = Vec<usize>;

    fn next(&mut self) -> Option<Vec<usize>> {
        if self.done {
            return None;
        }
        let current = self.indices.clone();

        let k = self.indices.len();
        match (0..k).rev().find(|&i| self.indices[i] < self.n - k + i) {
            Some(i) => {
                self.indices[i] += 1;
                for j in i + 1..k {
                    self.indices[j] = self.indices[j - 1] + 1;
                }
            }
            None => self.done = true,
        }

        Some(current)
    }
}

/// Splits the primitive squarefree polynomial `f` into its irreducible
/// factors over Z, given its lifted modular factorization.
///
/// Factors are primitive with positive leading coefficient. Their product
/// is `f` up to sign.
///
/// # Errors
///
/// Propagates failures of the modular arithmetic, which indicate a lifted
/// factorization that does not belong to `f`.
pub fn recombine(f: &DensePoly<Z>, lifted: &HenselLiftResult) -> ArithResult<Vec<DensePoly<Z>>> {
    let ring = ModularPolyRing::new(lifted.modulus.clone())?;
    let mut remaining = lifted.factors.clone();
    let mut cofactor = f.clone();
    let mut factors = Vec::new();
    let mut size = 1;

    while 2 * size <= remaining.len() {
        match try_subsets(&ring, &cofactor, &remaining, size)? {
            Some((subset, g, quotient)) => {
                debug!("recombined factor {g} from {} modular factors", subset.len());
                for &i in subset.iter().rev() {
                    remaining.remove(i);
                }
                cofactor = quotient;
                factors.push(g);
            }
            None => size += 1,
        }
    }

    if cofactor.degree() > 0 {
        debug!("remaining cofactor {cofactor} is irreducible");
        factors.push(normalize_sign(cofactor));
    }

    Ok(factors)
}

type Found = (Vec<usize>, DensePoly<Z>, DensePoly<Z>);

fn try_subsets(
    ring: &ModularPolyRing,
    cofactor: &DensePoly<Z>,
    factors: &[DensePoly<Z>],
    size: usize,
) -> ArithResult<Option<Found>> {
    let lc = cofactor.leading_coeff().into_inner();

    for subset in Combinations::new(factors.len(), size) {
        let product = subset
            .iter()
            .fold(DensePoly::one(), |acc, &i| ring.mul(&acc, &factors[i]));
        let candidate = ring.symmetric(&ring.scale(&product, &lc));
        let g = normalize_sign(primitive_part(&candidate)?);

        match cofactor.exact_div(&g) {
            Ok(quotient) => return Ok(Some((subset, g, quotient))),
            Err(ArithError::NotDivisible) => {}
            Err(e) => return Err(e),
        }
    }

    Ok(None)
}

fn normalize_sign(g: DensePoly<Z>) -> DensePoly<Z> {
    if g.leading_coeff().0.is_negative() {
        g.neg()
    } else {
        g
    }
}
