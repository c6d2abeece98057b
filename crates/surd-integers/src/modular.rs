//! Modular arithmetic.
//!
//! Residues modulo a runtime modulus, as needed by the factorization engine
//! which only learns its prime (and the Hensel power of it) while running.

use num_traits::{One, Zero};
use std::fmt;

use crate::{ArithError, ArithResult, Integer};

/// A residue class `value mod modulus` with `0 <= value < modulus`.
///
/// Binary operations require both operands to share the modulus and report
/// [`ArithError::ModulusMismatch`] otherwise. Residues carry no order, so
/// there is no sign or comparison beyond equality.
///
/// Residues are used through `ModularPolyRing` in the polynomial layer, not
/// as `DensePoly` coefficients: a runtime modulus has no `Ring::zero()`.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct IntegerMod {
    value: Integer,
    modulus: Integer,
}

impl IntegerMod {
    /// Creates a new residue, reducing `value` into `[0, modulus)`.
    ///
    /// # Errors
    ///
    /// Returns [`ArithError::DivisionByZero`] if the modulus is not positive.
    pub fn new(value: Integer, modulus: Integer) -> ArithResult<Self> {
        if modulus.signum() <= 0 {
            return Err(ArithError::DivisionByZero);
        }
        let value = value.div_rem_floor(&modulus).1;
        Ok(Self { value, modulus })
    }

    /// Returns the canonical representative in `[0, modulus)`.
    #[must_use]
    pub fn value(&self) -> &Integer {
        &self.value
    }

    /// Returns the modulus.
    #[must_use]
    pub fn modulus(&self) -> &Integer {
        &self.modulus
    }

    /// Returns the representative in `[-modulus/2, modulus/2)`.
    #[must_use]
    pub fn symmetric(&self) -> Integer {
        if self.value.clone() * Integer::new(2) >= self.modulus {
            self.value.clone() - &self.modulus
        } else {
            self.value.clone()
        }
    }

    /// Returns true if this is the zero residue.
    #[must_use]
    pub fn is_zero(&self) -> bool {
        self.value.is_zero()
    }

    fn check(&self, other: &Self) -> ArithResult<()> {
        if self.modulus == other.modulus {
            Ok(())
        } else {
            Err(ArithError::ModulusMismatch)
        }
    }

    fn wrap(&self, value: Integer) -> Self {
        Self {
            value: value.div_rem_floor(&self.modulus).1,
            modulus: self.modulus.clone(),
        }
    }

    /// Adds two residues.
    ///
    /// # Errors
    ///
    /// Returns [`ArithError::ModulusMismatch`] if the moduli differ.
    pub fn add(&self, other: &Self) -> ArithResult<Self> {
        self.check(other)?;
        Ok(self.wrap(&self.value + &other.value))
    }

    /// Subtracts two residues.
    ///
    /// # Errors
    ///
    /// Returns [`ArithError::ModulusMismatch`] if the moduli differ.
    pub fn sub(&self, other: &Self) -> ArithResult<Self> {
        self.check(other)?;
        Ok(self.wrap(&self.value - &other.value))
    }

    /// Multiplies two residues.
    ///
    /// # Errors
    ///
    /// Returns [`ArithError::ModulusMismatch`] if the moduli differ.
    pub fn mul(&self, other: &Self) -> ArithResult<Self> {
        self.check(other)?;
        Ok(self.wrap(&self.value * &other.value))
    }

    /// Returns the additive inverse.
    #[must_use]
    pub fn neg(&self) -> Self {
        self.wrap(-&self.value)
    }

    /// Computes the multiplicative inverse.
    ///
    /// # Errors
    ///
    /// Returns [`ArithError::NotInvertible`] when `gcd(value, modulus) != 1`.
    pub fn inv(&self) -> ArithResult<Self> {
        let (g, s, _) = self.value.extended_gcd(&self.modulus);
        if !g.is_one() {
            return Err(ArithError::NotInvertible);
        }
        Ok(self.wrap(s))
    }

    /// Divides by another residue.
    ///
    /// # Errors
    ///
    /// Fails like [`IntegerMod::inv`] and [`IntegerMod::mul`].
    pub fn div(&self, other: &Self) -> ArithResult<Self> {
        self.mul(&other.inv()?)
    }

    /// Computes self^exp by repeated squaring.
    ///
    /// # Errors
    ///
    /// Returns [`ArithError::NegativeExponent`] if `exp < 0`.
    pub fn pow(&self, exp: &Integer) -> ArithResult<Self> {
        if exp.is_negative() {
            return Err(ArithError::NegativeExponent(exp.to_i64().unwrap_or(i64::MIN)));
        }

        let mut result = self.wrap(Integer::one());
        let mut base = self.clone();
        let mut exp = exp.clone();
        let two = Integer::new(2);

        while !exp.is_zero() {
            if exp.is_odd() {
                result = result.wrap(&result.value * &base.value);
            }
            base = base.wrap(&base.value * &base.value);
            exp = exp / two.clone();
        }

        Ok(result)
    }
}

impl fmt::Debug for IntegerMod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} (mod {})", self.value, self.modulus)
    }
}

impl fmt::Display for IntegerMod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn m7(n: i64) -> IntegerMod {
        IntegerMod::new(Integer::new(n), Integer::new(7)).unwrap()
    }

    #[test]
    fn test_basic_ops() {
        let a = m7(5);
        let b = m7(4);

        assert_eq!(a.add(&b).unwrap(), m7(2)); // 5 + 4 = 9 ≡ 2 (mod 7)
        assert_eq!(a.sub(&b).unwrap(), m7(1));
        assert_eq!(a.mul(&b).unwrap(), m7(6)); // 20 ≡ 6 (mod 7)
        assert_eq!(a.neg(), m7(2));
    }

    #[test]
    fn test_inverse() {
        // 3 * 5 = 15 ≡ 1 (mod 7), so inv(3) = 5
        assert_eq!(m7(3).inv().unwrap(), m7(5));
        assert_eq!(m7(0).inv(), Err(ArithError::NotInvertible));

        let m9 = |n| IntegerMod::new(Integer::new(n), Integer::new(9)).unwrap();
        assert_eq!(m9(6).inv(), Err(ArithError::NotInvertible));
        assert_eq!(m9(2).inv().unwrap(), m9(5));
    }

    #[test]
    fn test_modulus_mismatch() {
        let a = m7(3);
        let b = IntegerMod::new(Integer::new(3), Integer::new(11)).unwrap();
        assert_eq!(a.add(&b), Err(ArithError::ModulusMismatch));
        assert_eq!(a.mul(&b), Err(ArithError::ModulusMismatch));
    }

    #[test]
    fn test_pow() {
        let a = m7(3);
        assert_eq!(a.pow(&Integer::new(0)).unwrap(), m7(1));
        assert_eq!(a.pow(&Integer::new(2)).unwrap(), m7(2)); // 9 mod 7 = 2
        assert_eq!(a.pow(&Integer::new(6)).unwrap(), m7(1)); // Fermat's little theorem
    }

    #[test]
    fn test_pow_negative_exponent() {
        assert_eq!(m7(3).pow(&Integer::new(-1)), Err(ArithError::NegativeExponent(-1)));
        assert_eq!(m7(0).pow(&Integer::new(-5)), Err(ArithError::NegativeExponent(-5)));
    }

    #[test]
    fn test_negative_and_symmetric() {
        let a = m7(-3);
        assert_eq!(a.value().to_i64(), Some(4)); // -3 ≡ 4 (mod 7)
        assert_eq!(a.symmetric().to_i64(), Some(-3));
        assert_eq!(m7(3).symmetric().to_i64(), Some(3));
        assert!(IntegerMod::new(Integer::new(1), Integer::new(0)).is_err());
    }
}
