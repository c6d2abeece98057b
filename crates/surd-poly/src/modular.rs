//! Polynomial arithmetic over Z/mZ.
//!
//! The modulus is only known at run time (a prime chosen during
//! factorization, then its powers during Hensel lifting), so instead of a
//! coefficient type the arithmetic lives on a context value. Polynomials are
//! plain `DensePoly<Z>` kept reduced into `[0, m)`.

use num_traits::{One, Zero};
use surd_integers::{ArithError, ArithResult, Integer, IntegerMod};
use surd_rings::Z;

use crate::dense::DensePoly;

/// Polynomial arithmetic modulo a fixed integer.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ModularPolyRing {
    modulus: Integer,
}

impl ModularPolyRing {
    /// Creates a context for arithmetic modulo `modulus`.
    ///
    /// # Errors
    ///
    /// Returns [`ArithError::DivisionByZero`] unless `modulus > 1`.
    pub fn new(modulus: Integer) -> ArithResult<Self> {
        if modulus <= Integer::one() {
            return Err(ArithError::DivisionByZero);
        }
        Ok(Self { modulus })
    }

    /// Returns the modulus.
    #[must_use]
    pub fn modulus(&self) -> &Integer {
        &self.modulus
    }

    fn reduce_coeff(&self, c: &Integer) -> Integer {
        c.div_rem_floor(&self.modulus).1
    }

    /// Reduces every coefficient into `[0, m)`.
    #[must_use]
    pub fn reduce(&self, p: &DensePoly<Z>) -> DensePoly<Z> {
        p.map_coeffs(|c| Z(self.reduce_coeff(&c.0)))
    }

    /// Maps every coefficient to the symmetric range `[-m/2, m/2)`.
    #[must_use]
    pub fn symmetric(&self, p: &DensePoly<Z>) -> DensePoly<Z> {
        let two = Integer::new(2);
        p.map_coeffs(|c| {
            let r = self.reduce_coeff(&c.0);
            if &r * &two >= self.modulus {
                Z(r - &self.modulus)
            } else {
                Z(r)
            }
        })
    }

    /// Adds two polynomials.
    #[must_use]
    pub fn add(&self, a: &DensePoly<Z>, b: &DensePoly<Z>) -> DensePoly<Z> {
        self.reduce(&a.add(b))
    }

    /// Subtracts two polynomials.
    #[must_use]
    pub fn sub(&self, a: &DensePoly<Z>, b: &DensePoly<Z>) -> DensePoly<Z> {
        self.reduce(&a.sub(b))
    }

    /// Multiplies two polynomials.
    #[must_use]
    pub fn mul(&self, a: &DensePoly<Z>, b: &DensePoly<Z>) -> DensePoly<Z> {
        self.reduce(&a.mul(b))
    }

    /// Multiplies by a scalar.
    #[must_use]
    pub fn scale(&self, a: &DensePoly<Z>, c: &Integer) -> DensePoly<Z> {
        self.reduce(&a.scale(&Z(c.clone())))
    }

    /// Inverts a scalar modulo m.
    ///
    /// # Errors
    ///
    /// Returns [`ArithError::NotInvertible`] if `gcd(c, m) != 1`.
    pub fn inv_scalar(&self, c: &Integer) -> ArithResult<Integer> {
        Ok(IntegerMod::new(c.clone(), self.modulus.clone())?
            .inv()?
            .value()
            .clone())
    }

    /// Scales `a` to a monic polynomial.
    ///
    /// # Errors
    ///
    /// Returns [`ArithError::NotInvertible`] if the leading coefficient is
    /// not a unit.
    pub fn monic(&self, a: &DensePoly<Z>) -> ArithResult<DensePoly<Z>> {
        let a = self.reduce(a);
        if a.is_zero() {
            return Ok(a);
        }
        let inv = self.inv_scalar(&a.leading_coeff().0)?;
        Ok(self.scale(&a, &inv))
    }

    /// Division with remainder by a divisor whose leading coefficient is a
    /// unit modulo m.
    ///
    /// # Errors
    ///
    /// Returns [`ArithError::DivisionByZero`] for a zero divisor and
    /// [`ArithError::NotInvertible`] for a non-unit leading coefficient.
    pub fn divmod(
        &self,
        a: &DensePoly<Z>,
        b: &DensePoly<Z>,
    ) -> ArithResult<(DensePoly<Z>, DensePoly<Z>)> {
        let b = self.reduce(b);
        if b.is_zero() {
            return Err(ArithError::DivisionByZero);
        }
        let lc_inv = self.inv_scalar(&b.leading_coeff().0)?;

        let n = b.coeffs().len();
        let mut rem: Vec<Integer> = self
            .reduce(a)
            .into_coeffs()
            .into_iter()
            .map(Z::into_inner)
            .collect();
        if rem.len() < n {
            return Ok((DensePoly::zero(), DensePoly::new(rem.into_iter().map(Z).collect())));
        }

        let mut quot = vec![Integer::zero(); rem.len() - n + 1];
        for k in (0..quot.len()).rev() {
            let t = self.reduce_coeff(&(&rem[n - 1 + k] * &lc_inv));
            if t.is_zero() {
                continue;
            }
            for (j, c) in b.coeffs().iter().enumerate() {
                rem[k + j] = self.reduce_coeff(&(&rem[k + j] - &(&t * &c.0)));
            }
            quot[k] = t;
        }

        rem.truncate(n - 1);
        Ok((
            DensePoly::new(quot.into_iter().map(Z).collect()),
            DensePoly::new(rem.into_iter().map(Z).collect()),
        ))
    }

    /// Remainder of `a` modulo `b`.
    ///
    /// # Errors
    ///
    /// Fails like [`ModularPolyRing::divmod`].
    pub fn rem(&self, a: &DensePoly<Z>, b: &DensePoly<Z>) -> ArithResult<DensePoly<Z>> {
        Ok(self.divmod(a, b)?.1)
    }

    /// Exact quotient `a / b`.
    ///
    /// # Errors
    ///
    /// Returns [`ArithError::NotDivisible`] when the remainder is nonzero.
    pub fn exact_div(&self, a: &DensePoly<Z>, b: &DensePoly<Z>) -> ArithResult<DensePoly<Z>> {
        let (q, r) = self.divmod(a, b)?;
        if r.is_zero() {
            Ok(q)
        } else {
            Err(ArithError::NotDivisible)
        }
    }

    /// Monic GCD. Requires a prime modulus.
    ///
    /// # Errors
    ///
    /// Returns [`ArithError::NotInvertible`] if some remainder has a
    /// non-unit leading coefficient, i.e. the modulus is not prime.
    pub fn gcd(&self, a: &DensePoly<Z>, b: &DensePoly<Z>) -> ArithResult<DensePoly<Z>> {
        let mut p = self.reduce(a);
        let mut q = self.reduce(b);
        while !q.is_zero() {
            let r = self.rem(&p, &q)?;
            p = q;
            q = r;
        }
        self.monic(&p)
    }

    /// Extended GCD: returns `(g, s, t)` with `s*a + t*b = g`, g monic.
    /// Requires a prime modulus.
    ///
    /// # Errors
    ///
    /// Fails like [`ModularPolyRing::gcd`].
    pub fn extended_gcd(
        &self,
        a: &DensePoly<Z>,
        b: &DensePoly<Z>,
    ) -> ArithResult<(DensePoly<Z>, DensePoly<Z>, DensePoly<Z>)> {
        let mut old_r = self.reduce(a);
        let mut r = self.reduce(b);
        let mut old_s = DensePoly::one();
        let mut s = DensePoly::zero();
        let mut old_t = DensePoly::zero();
        let mut t = DensePoly::one();

        while !r.is_zero() {
            let (q, rem) = self.divmod(&old_r, &r)?;
            let new_s = self.sub(&old_s, &self.mul(&q, &s));
            let new_t = self.sub(&old_t, &self.mul(&q, &t));
            old_r = r;
            r = rem;
            old_s = s;
            s = new_s;
            old_t = t;
            t = new_t;
        }

        if old_r.is_zero() {
            return Ok((old_r, DensePoly::one(), DensePoly::zero()));
        }

        let inv = self.inv_scalar(&old_r.leading_coeff().0)?;
        Ok((
            self.scale(&old_r, &inv),
            self.scale(&old_s, &inv),
            self.scale(&old_t, &inv),
        ))
    }

    /// Computes `base^exp mod (m, modulus_poly)` by repeated squaring.
    ///
    /// # Errors
    ///
    /// Returns [`ArithError::NegativeExponent`] if `exp < 0`, and fails like
    /// [`ModularPolyRing::divmod`] on `modulus_poly`.
    pub fn pow_mod(
        &self,
        base: &DensePoly<Z>,
        exp: &Integer,
        modulus_poly: &DensePoly<Z>,
    ) -> ArithResult<DensePoly<Z>> {
        if exp.is_negative() {
            return Err(ArithError::NegativeExponent(exp.to_i64().unwrap_or(i64::MIN)));
        }
        let mut result = self.rem(&DensePoly::one(), modulus_poly)?;
        let mut base = self.rem(base, modulus_poly)?;
        let mut exp = exp.clone();
        let two = Integer::new(2);

        while exp.signum() > 0 {
            if exp.is_odd() {
                result = self.rem(&self.mul(&result, &base), modulus_poly)?;
            }
            exp = exp / two.clone();
            if exp.signum() > 0 {
                base = self.rem(&self.mul(&base, &base), modulus_poly)?;
            }
        }

        Ok(result)
    }

    /// Formal derivative, reduced.
    #[must_use]
    pub fn derivative(&self, a: &DensePoly<Z>) -> DensePoly<Z> {
        self.reduce(&a.derivative())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use surd_rings::traits::Ring;

    fn zpoly(coeffs: &[i64]) -> DensePoly<Z> {
        DensePoly::new(coeffs.iter().map(|&n| Z::new(n)).collect())
    }

    fn ring(m: i64) -> ModularPolyRing {
        ModularPolyRing::new(Integer::new(m)).unwrap()
    }

    #[test]
    fn test_reduce_and_symmetric() {
        let r = ring(7);
        assert_eq!(r.reduce(&zpoly(&[-1, 8, 14])), zpoly(&[6, 1]));
        assert_eq!(r.symmetric(&zpoly(&[6, 3, 4])), zpoly(&[-1, 3, -3]));
        assert!(ModularPolyRing::new(Integer::new(1)).is_err());
    }

    #[test]
    fn test_divmod() {
        let r = ring(7);
        // q * b + rem reconstructs a
        let a = zpoly(&[1, 0, 1]);
        let b = zpoly(&[2, 3]);
        let (q, rem) = r.divmod(&a, &b).unwrap();
        assert_eq!(r.add(&r.mul(&q, &b), &rem), a);
        assert!(rem.degree() < 1);

        // non-unit leading coefficient modulo 9
        let r9 = ring(9);
        assert_eq!(r9.divmod(&a, &zpoly(&[1, 3])), Err(ArithError::NotInvertible));
        assert_eq!(r.divmod(&a, &zpoly(&[7, 14])), Err(ArithError::DivisionByZero));
    }

    #[test]
    fn test_gcd() {
        let r = ring(5);
        // x^2 - 1 and x^2 + 3x + 2 share x + 1
        let g = r.gcd(&zpoly(&[-1, 0, 1]), &zpoly(&[2, 3, 1])).unwrap();
        assert_eq!(g, zpoly(&[1, 1]));

        let a = zpoly(&[2, 0, 1]);
        let b = zpoly(&[1, 1]);
        let (g, s, t) = r.extended_gcd(&a, &b).unwrap();
        assert!(g.is_one());
        assert_eq!(r.add(&r.mul(&s, &a), &r.mul(&t, &b)), g);
    }

    #[test]
    fn test_pow_mod() {
        let r = ring(3);
        // x^3 = x (mod 3, x^3 - x) and generally x^p = x mod (x^p - x)
        let f = zpoly(&[0, -1, 0, 1]);
        let x = zpoly(&[0, 1]);
        assert_eq!(r.pow_mod(&x, &Integer::new(3), &f).unwrap(), x);
        assert_eq!(r.pow_mod(&x, &Integer::new(0), &f).unwrap(), zpoly(&[1]));
        // x^4 mod (x^2 + 1) = 1
        assert_eq!(
            r.pow_mod(&x, &Integer::new(4), &zpoly(&[1, 0, 1])).unwrap(),
            zpoly(&[1])
        );
    }

    #[test]
    fn test_inv_scalar() {
        let r = ring(9);
        // 2 * 5 = 10 = 1 (mod 9)
        assert_eq!(r.inv_scalar(&Integer::new(2)).unwrap(), Integer::new(5));
        assert_eq!(r.inv_scalar(&Integer::new(-7)).unwrap(), Integer::new(5));
        assert_eq!(r.inv_scalar(&Integer::new(6)), Err(ArithError::NotInvertible));
    }

    #[test]
    fn test_pow_mod_negative_exponent() {
        let r = ring(5);
        let x = zpoly(&[0, 1]);
        assert_eq!(
            r.pow_mod(&x, &Integer::new(-2), &zpoly(&[1, 0, 1])),
            Err(ArithError::NegativeExponent(-2))
        );
    }
}
