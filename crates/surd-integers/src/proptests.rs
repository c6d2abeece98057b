//! Property-based tests for arbitrary precision arithmetic.

#[cfg(test)]
mod tests {
    use num_traits::{One, Zero};
    use proptest::prelude::*;

    use crate::{Integer, IntegerMod, Rational};

    // Strategy for generating small integers
    fn small_int() -> impl Strategy<Value = i64> {
        -1000i64..1000i64
    }

    // Strategy for generating non-zero integers
    fn non_zero_int() -> impl Strategy<Value = i64> {
        prop_oneof![(-1000i64..=-1i64), (1i64..=1000i64)]
    }

    proptest! {
        #[test]
        fn integer_distributive(a in small_int(), b in small_int(), c in small_int()) {
            let a = Integer::new(a);
            let b = Integer::new(b);
            let c = Integer::new(c);
            prop_assert_eq!(
                a.clone() * (b.clone() + c.clone()),
                a.clone() * b + a * c
            );
        }

        #[test]
        fn gcd_divides_both(a in non_zero_int(), b in non_zero_int()) {
            let a = Integer::new(a);
            let b = Integer::new(b);
            let g = a.gcd(&b);

            prop_assert!((a % g.clone()).is_zero());
            prop_assert!((b % g).is_zero());
        }

        #[test]
        fn extended_gcd_bezout(a in small_int(), b in small_int()) {
            let a = Integer::new(a);
            let b = Integer::new(b);
            let (g, s, t) = a.extended_gcd(&b);
            prop_assert_eq!(g.clone(), a.gcd(&b));
            prop_assert_eq!(a * s + b * t, g);
        }

        #[test]
        fn floor_division_remainder_range(a in small_int(), b in 1i64..100i64) {
            let a = Integer::new(a);
            let b = Integer::new(b);
            let (q, r) = a.div_rem_floor(&b);
            prop_assert!(r.signum() >= 0 && r < b);
            prop_assert_eq!(q * b + r, a);
        }

        #[test]
        fn isqrt_ceil_is_tight(n in 0i64..1_000_000i64) {
            let n = Integer::new(n);
            let s = n.isqrt_ceil();
            prop_assert!(&s * &s >= n);
            if !s.is_zero() {
                let below = s - Integer::one();
                prop_assert!(&below * &below < n);
            }
        }

        #[test]
        fn rational_sum_matches_float(
            num_a in small_int(),
            den_a in non_zero_int(),
            num_b in small_int(),
            den_b in non_zero_int()
        ) {
            let a = Rational::from_i64(num_a, den_a);
            let b = Rational::from_i64(num_b, den_b);
            let expected = num_a as f64 / den_a as f64 + num_b as f64 / den_b as f64;
            prop_assert!(((a + b).to_f64() - expected).abs() < 1e-9);
        }

        #[test]
        fn rational_reduction_idempotent(num in small_int(), den in non_zero_int()) {
            let r = Rational::from_i64(num, den);
            let again = Rational::new(r.numerator(), r.denominator()).unwrap();
            prop_assert_eq!(again.clone(), r.clone());
            prop_assert!(r.denominator().signum() > 0);
            prop_assert!(r.numerator().gcd(&r.denominator()).is_one() || r.is_zero());
        }

        #[test]
        fn rational_multiplicative_inverse(num in non_zero_int(), den in non_zero_int()) {
            let a = Rational::from_i64(num, den);
            let inv = a.recip().unwrap();
            prop_assert!((a * inv).is_one());
        }

        #[test]
        fn middle_is_strictly_between(
            num_a in small_int(),
            den_a in 1i64..50i64,
            num_b in small_int(),
            den_b in 1i64..50i64
        ) {
            let a = Rational::from_i64(num_a, den_a);
            let b = Rational::from_i64(num_b, den_b);
            let m = a.middle(&b);
            if a == b {
                prop_assert_eq!(m, a);
            } else {
                let (lo, hi) = if a < b { (a, b) } else { (b, a) };
                prop_assert!(lo < m && m < hi);
                // the denominator is a power of two
                let mut den = m.denominator();
                while !den.is_odd() {
                    den = den / Integer::new(2);
                }
                prop_assert!(den.is_one());
            }
        }

        #[test]
        fn residue_inverse(a in 1i64..1000i64) {
            let p = Integer::new(998_244_353);
            let a = IntegerMod::new(Integer::new(a), p).unwrap();
            let inv = a.inv().unwrap();
            prop_assert!(a.mul(&inv).unwrap().value().is_one());
        }
    }
}
