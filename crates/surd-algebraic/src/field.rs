//! Real algebraic number fields.
//!
//! A field Q(θ) is a minimal polynomial A together with a rational interval
//! isolating one real root θ of A. The interval, and the bounds on θ^i
//! derived from it, form a shared cache: every number of the field sees the
//! same interval, and narrowing it for one number sharpens all of them.
//! That state sits behind a mutex, so a field handle can be shared between
//! threads and refinements are serialized per field.

use std::fmt;
use std::sync::{Arc, OnceLock};

use log::{debug, trace, warn};
use num_traits::{One, Zero};
use parking_lot::Mutex;
use surd_integers::{ArithError, ArithResult, Rational};
use surd_poly::{poly_extended_gcd, DensePoly, SturmSequence};
use surd_rings::traits::Ring;
use surd_rings::Q;

use crate::config::Config;
use crate::number::AlgebraicNumber;

/// A real algebraic number field Q(θ).
///
/// Cloning is cheap and yields a handle to the same field; refining through
/// one handle is visible through all of them.
#[derive(Clone)]
pub struct AlgebraicField {
    inner: Arc<FieldInner>,
}

struct FieldInner {
    /// Monic minimal polynomial of θ.
    min_poly: DensePoly<Q>,
    degree: usize,
    sturm: SturmSequence,
    /// `x^i mod min_poly` for `i` in `0..=2 * degree`.
    powers: Vec<DensePoly<Q>>,
    config: Config,
    isolation: Mutex<Isolation>,
}

#[derive(Clone, Debug)]
struct Isolation {
    lower: Rational,
    upper: Rational,
    /// Enclosures of θ^i for `i` in `0..=degree`.
    power_bounds: Vec<(Rational, Rational)>,
}

impl Isolation {
    fn new(lower: Rational, upper: Rational, degree: usize) -> Self {
        let power_bounds = power_bounds(&lower, &upper, degree);
        Self {
            lower,
            upper,
            power_bounds,
        }
    }
}

fn power_bounds(lower: &Rational, upper: &Rational, degree: usize) -> Vec<(Rational, Rational)> {
    let mut bounds = Vec::with_capacity(degree + 1);
    let mut lower_pow = Rational::one();
    let mut upper_pow = Rational::one();

    for i in 0..=degree {
        let bound = if i == 0 {
            (Rational::one(), Rational::one())
        } else if !lower.is_negative() || i % 2 == 1 {
            // x^i is increasing here
            (lower_pow.clone(), upper_pow.clone())
        } else if upper.signum() <= 0 {
            (upper_pow.clone(), lower_pow.clone())
        } else if lower_pow > upper_pow {
            (Rational::zero(), lower_pow.clone())
        } else {
            (Rational::zero(), upper_pow.clone())
        };
        bounds.push(bound);

        lower_pow = lower_pow * lower;
        upper_pow = upper_pow * upper;
    }

    bounds
}

fn power_table(min_poly: &DensePoly<Q>, degree: usize) -> Vec<DensePoly<Q>> {
    let mut table = Vec::with_capacity(2 * degree + 1);
    let mut power = DensePoly::one();

    for _ in 0..=2 * degree {
        table.push(power.clone());
        let shifted = power.shift(1);
        power = if shifted.degree() == min_poly.degree() {
            shifted.sub(&min_poly.scale(&shifted.leading_coeff()))
        } else {
            shifted
        };
    }

    table
}

impl AlgebraicField {
    /// Creates the field generated by the unique root of `min_poly` in
    /// `[lower, upper]`.
    ///
    /// The polynomial is made monic. It should be irreducible; this is not
    /// checked, but a reducible one makes inversion fail on zero divisors.
    ///
    /// # Errors
    ///
    /// Returns [`ArithError::AmbiguousRootInterval`] unless the interval
    /// contains exactly one real root of a polynomial of degree at least one.
    pub fn new(min_poly: DensePoly<Q>, lower: Rational, upper: Rational) -> ArithResult<Self> {
        let min_poly = min_poly.monic()?;
        let Ok(degree) = usize::try_from(min_poly.degree()) else {
            return Err(ArithError::AmbiguousRootInterval { roots: 0 });
        };
        if degree == 0 {
            return Err(ArithError::AmbiguousRootInterval { roots: 0 });
        }

        let sturm = SturmSequence::new(&min_poly)?;
        let roots = sturm.count_roots(&lower, &upper);
        if roots != 1 {
            return Err(ArithError::AmbiguousRootInterval { roots });
        }

        debug!("new field of degree {degree}: root of {min_poly} in [{lower}, {upper}]");
        Ok(Self::from_parts(min_poly, degree, sturm, lower, upper, Config::default()))
    }

    /// The degree-one field generated by the rational `q`.
    #[must_use]
    pub fn rational(q: Rational) -> Self {
        let min_poly = DensePoly::new(vec![Q(-&q), Q::one()]);
        let sturm = SturmSequence::linear(&q);
        Self::from_parts(min_poly, 1, sturm, q.clone(), q, Config::default())
    }

    /// The field of rational numbers, shared by every rational constant.
    #[must_use]
    pub fn rationals() -> Self {
        static RATIONALS: OnceLock<AlgebraicField> = OnceLock::new();
        RATIONALS
            .get_or_init(|| Self::rational(Rational::zero()))
            .clone()
    }

    fn from_parts(
        min_poly: DensePoly<Q>,
        degree: usize,
        sturm: SturmSequence,
        lower: Rational,
        upper: Rational,
        config: Config,
    ) -> Self {
        let powers = power_table(&min_poly, degree);
        Self {
            inner: Arc::new(FieldInner {
                min_poly,
                degree,
                sturm,
                powers,
                config,
                isolation: Mutex::new(Isolation::new(lower, upper, degree)),
            }),
        }
    }

    /// Returns an independent copy of this field using `config`.
    ///
    /// The copy starts from the current interval but is refined separately.
    #[must_use]
    pub fn with_config(&self, config: Config) -> Self {
        let isolation = self.inner.isolation.lock().clone();
        Self {
            inner: Arc::new(FieldInner {
                min_poly: self.inner.min_poly.clone(),
                degree: self.inner.degree,
                sturm: self.inner.sturm.clone(),
                powers: self.inner.powers.clone(),
                config,
                isolation: Mutex::new(isolation),
            }),
        }
    }

    /// Returns the degree of the field over Q.
    #[must_use]
    pub fn degree(&self) -> usize {
        self.inner.degree
    }

    /// Returns the monic minimal polynomial of the generator.
    #[must_use]
    pub fn min_poly(&self) -> &DensePoly<Q> {
        &self.inner.min_poly
    }

    /// Returns the configuration the field was built with.
    #[must_use]
    pub fn config(&self) -> &Config {
        &self.inner.config
    }

    /// Returns the current isolating interval `(lower, upper)`.
    #[must_use]
    pub fn interval(&self) -> (Rational, Rational) {
        let isolation = self.inner.isolation.lock();
        (isolation.lower.clone(), isolation.upper.clone())
    }

    /// Returns true if both handles point at the same field object.
    #[must_use]
    pub fn ptr_eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.inner, &other.inner)
    }

    /// Halves the isolating interval, roughly.
    ///
    /// The new interval still contains exactly one root. A degenerate
    /// interval, where the root is rational and known exactly, is left as is.
    pub fn refine(&self) {
        let mut isolation = self.inner.isolation.lock();
        if isolation.lower == isolation.upper {
            return;
        }

        let mid = isolation.lower.middle(&isolation.upper);
        let (lower, upper) = if self.inner.min_poly.eval(&Q(mid.clone())).is_zero() {
            (mid.clone(), mid)
        } else if self.inner.sturm.count_roots(&isolation.lower, &mid) == 1 {
            (isolation.lower.clone(), mid)
        } else {
            (mid, isolation.upper.clone())
        };

        trace!("refined root of {} to [{lower}, {upper}]", self.inner.min_poly);
        *isolation = Isolation::new(lower, upper, self.inner.degree);
    }

    /// The generator θ.
    #[must_use]
    pub fn generator(&self) -> AlgebraicNumber {
        self.element(&DensePoly::x())
    }

    /// Embeds a rational number.
    #[must_use]
    pub fn from_rational(&self, q: Rational) -> AlgebraicNumber {
        AlgebraicNumber::from_parts(self.clone(), DensePoly::constant(Q(q)))
    }

    /// Builds `c_0 + c_1 θ + c_2 θ^2 + ...`; longer vectors are reduced.
    #[must_use]
    pub fn from_vector(&self, coeffs: Vec<Rational>) -> AlgebraicNumber {
        self.element(&DensePoly::new(coeffs.into_iter().map(Q).collect()))
    }

    /// The value of `p(θ)`.
    #[must_use]
    pub fn element(&self, p: &DensePoly<Q>) -> AlgebraicNumber {
        AlgebraicNumber::from_parts(self.clone(), self.reduce(p))
    }

    /// Reduces `p` modulo the minimal polynomial.
    pub(crate) fn reduce(&self, p: &DensePoly<Q>) -> DensePoly<Q> {
        let n = self.inner.degree;
        let tail = &self.inner.min_poly.coeffs()[..n];
        let mut coeffs = p.coeffs().to_vec();

        // x^n = -(a_0 + a_1 x + ... + a_{n-1} x^{n-1})
        while coeffs.len() > n {
            let Some(high) = coeffs.pop() else { break };
            if high.is_zero() {
                continue;
            }
            let k = coeffs.len() - n;
            for (i, a) in tail.iter().enumerate() {
                coeffs[k + i] = coeffs[k + i].clone() - high.clone() * a.clone();
            }
        }

        DensePoly::new(coeffs)
    }

    /// Reduces a product of two residues through the power table.
    pub(crate) fn reduce_product(&self, p: &DensePoly<Q>) -> DensePoly<Q> {
        if p.coeffs().len() > self.inner.powers.len() {
            return self.reduce(p);
        }
        p.coeffs()
            .iter()
            .zip(&self.inner.powers)
            .filter(|(c, _)| !c.is_zero())
            .fold(DensePoly::zero(), |acc, (c, power)| acc.add(&power.scale(c)))
    }

    /// Inverts a residue modulo the minimal polynomial.
    pub(crate) fn invert(&self, residue: &DensePoly<Q>) -> ArithResult<DensePoly<Q>> {
        let (g, s, _) = poly_extended_gcd(residue, &self.inner.min_poly)?;
        if g.degree() != 0 {
            return Err(ArithError::DivisionByZero);
        }
        Ok(self.reduce(&s))
    }

    /// Encloses `residue(θ)` using the current interval.
    pub(crate) fn value_bounds(&self, residue: &DensePoly<Q>) -> (Rational, Rational) {
        let isolation = self.inner.isolation.lock();
        let mut lo = Rational::zero();
        let mut hi = Rational::zero();

        for (c, (pow_lo, pow_hi)) in residue.coeffs().iter().zip(&isolation.power_bounds) {
            let c = c.as_inner();
            if c.is_negative() {
                lo = lo + c * pow_hi;
                hi = hi + c * pow_lo;
            } else {
                lo = lo + c * pow_lo;
                hi = hi + c * pow_hi;
            }
        }

        (lo, hi)
    }

    /// Determines the sign of `residue(θ)`, refining as needed.
    pub(crate) fn sign_of(&self, residue: &DensePoly<Q>) -> ArithResult<i8> {
        if residue.is_zero() {
            return Ok(0);
        }

        for _ in 0..=self.inner.config.max_refinements {
            let (lo, hi) = self.value_bounds(residue);
            if lo.signum() > 0 {
                return Ok(1);
            }
            if hi.signum() < 0 {
                return Ok(-1);
            }
            if lo == hi {
                return Ok(0);
            }
            self.refine();
        }

        warn!("sign of {residue} undecided in {self}");
        Err(ArithError::internal("sign determination exhausted its refinements"))
    }

    /// Approximates `residue(θ)` to within the configured tolerance.
    pub(crate) fn approximate(&self, residue: &DensePoly<Q>) -> ArithResult<f64> {
        for _ in 0..=self.inner.config.max_refinements {
            let (lo, hi) = self.value_bounds(residue);
            if &hi - &lo <= self.inner.config.approx_tolerance {
                return Ok(((lo + hi) / Rational::from(2)).to_f64());
            }
            self.refine();
        }

        warn!("approximation of {residue} did not converge in {self}");
        Err(ArithError::internal("approximation exhausted its refinements"))
    }
}

impl PartialEq for AlgebraicField {
    /// Two fields are equal when they have the same minimal polynomial and
    /// their intervals isolate the same root.
    fn eq(&self, other: &Self) -> bool {
        if self.ptr_eq(other) {
            return true;
        }
        if self.min_poly() != other.min_poly() {
            return false;
        }

        let (a_lo, a_hi) = self.interval();
        let (b_lo, b_hi) = other.interval();
        let lo = if a_lo > b_lo { a_lo } else { b_lo };
        let hi = if a_hi < b_hi { a_hi } else { b_hi };
        self.inner.sturm.count_roots(&lo, &hi) == 1
    }
}

impl Eq for AlgebraicField {}

impl fmt::Debug for AlgebraicField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (lower, upper) = self.interval();
        f.debug_struct("AlgebraicField")
            .field("min_poly", &self.inner.min_poly.to_string())
            .field("lower", &lower)
            .field("upper", &upper)
            .finish()
    }
}

impl fmt::Display for AlgebraicField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (lower, upper) = self.interval();
        write!(f, "Q[x]/({}) at [{lower}, {upper}]", self.inner.min_poly)
    }
}
