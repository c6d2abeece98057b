//! Property-based tests for polynomial arithmetic.

#[cfg(test)]
mod tests {
    use proptest::prelude::*;
    use surd_integers::Rational;
    use surd_rings::traits::{IntegralDomain, Ring};
    use surd_rings::{Q, Z};

    use crate::algorithms::resultant::resultant;
    use crate::dense::DensePoly;
    use crate::modular::ModularPolyRing;
    use crate::sturm::count_roots;

    // Strategy for generating small rational coefficients
    fn small_coeff() -> impl Strategy<Value = Q> {
        (-100i64..100i64).prop_map(Q::from)
    }

    // Strategy for generating small polynomials (degree 0-4)
    fn small_poly() -> impl Strategy<Value = DensePoly<Q>> {
        proptest::collection::vec(small_coeff(), 1..=5).prop_map(DensePoly::new)
    }

    // Strategy for generating non-constant polynomials
    fn nonconstant_poly() -> impl Strategy<Value = DensePoly<Q>> {
        small_poly().prop_filter("polynomial must be non-constant", |p| p.degree() > 0)
    }

    fn int_poly() -> impl Strategy<Value = DensePoly<Z>> {
        proptest::collection::vec((-20i64..20i64).prop_map(Z::new), 1..=4).prop_map(DensePoly::new)
    }

    proptest! {
        // Polynomial ring axioms

        #[test]
        fn poly_add_commutative(a in small_poly(), b in small_poly()) {
            prop_assert_eq!(a.add(&b), b.add(&a));
        }

        #[test]
        fn poly_mul_commutative(a in small_poly(), b in small_poly()) {
            prop_assert_eq!(a.mul(&b), b.mul(&a));
        }

        #[test]
        fn poly_mul_associative(a in small_poly(), b in small_poly(), c in small_poly()) {
            prop_assert_eq!(a.mul(&b).mul(&c), a.mul(&b.mul(&c)));
        }

        #[test]
        fn poly_distributive(a in small_poly(), b in small_poly(), c in small_poly()) {
            // a * (b + c) = a * b + a * c
            let left = a.mul(&b.add(&c));
            let right = a.mul(&b).add(&a.mul(&c));
            prop_assert_eq!(left, right);
        }

        #[test]
        fn poly_additive_inverse(a in small_poly()) {
            prop_assert!(a.add(&a.neg()).is_zero());
            prop_assert_eq!(a.sub(&a).degree(), -1);
        }

        #[test]
        fn poly_never_ends_in_zero(a in small_poly(), b in small_poly()) {
            for p in [a.add(&b), a.sub(&b), a.mul(&b), a.derivative()] {
                prop_assert!(p.coeffs().last().map_or(true, |c| !c.is_zero()));
            }
        }

        #[test]
        fn poly_mul_degree(a in small_poly(), b in small_poly()) {
            // deg(a * b) = deg(a) + deg(b) for non-zero polynomials
            if !a.is_zero() && !b.is_zero() {
                prop_assert_eq!(a.mul(&b).degree(), a.degree() + b.degree());
            }
        }

        // Evaluation and composition are ring homomorphisms

        #[test]
        fn poly_eval_mul(a in small_poly(), b in small_poly(), x in small_coeff()) {
            prop_assert_eq!(a.mul(&b).eval(&x), a.eval(&x) * b.eval(&x));
        }

        #[test]
        fn poly_compose_eval(a in small_poly(), b in small_poly(), x in small_coeff()) {
            prop_assert_eq!(a.compose(&b).eval(&x), a.eval(&b.eval(&x)));
        }

        // Division

        #[test]
        fn divmod_reconstructs(p in small_poly(), q in nonconstant_poly()) {
            let (quot, rem) = p.mul(&q).add(&p).divmod(&q).unwrap();
            prop_assert!(rem.degree() < q.degree());
            prop_assert_eq!(q.mul(&quot).add(&rem), p.mul(&q).add(&p));

            let (quot, rem) = p.mul(&q).divmod(&q).unwrap();
            prop_assert_eq!(quot, p);
            prop_assert!(rem.is_zero());
        }

        #[test]
        fn pseudo_divmod_identity(a in int_poly(), b in int_poly()) {
            prop_assume!(!b.is_zero());
            let (scale, q, r) = a.pseudo_divmod(&b).unwrap();
            prop_assert_eq!(a.scale(&scale), q.mul(&b).add(&r));
            prop_assert!(r.degree() < b.degree());
        }

        #[test]
        fn exact_div_of_product(a in int_poly(), b in int_poly()) {
            prop_assume!(!b.is_zero());
            prop_assert_eq!(a.mul(&b).exact_div(&b).unwrap(), a);
        }

        // Resultants

        #[test]
        fn resultant_swap_sign(a in int_poly(), b in int_poly()) {
            prop_assume!(!a.is_zero() && !b.is_zero());
            let ab = resultant(&a, &b).unwrap();
            let ba = resultant(&b, &a).unwrap();
            if a.degree() % 2 == 1 && b.degree() % 2 == 1 {
                prop_assert_eq!(ab, -ba);
            } else {
                prop_assert_eq!(ab, ba);
            }
        }

        #[test]
        fn resultant_vanishes_on_common_factor(a in int_poly(), b in int_poly(), c in -5i64..5) {
            prop_assume!(!a.is_zero() && !b.is_zero());
            let linear = DensePoly::new(vec![Z::new(c), Z::one()]);
            prop_assert!(resultant(&a.mul(&linear), &b.mul(&linear)).unwrap().is_zero());
        }

        // Root counting

        #[test]
        fn count_roots_matches_brute_force(
            roots in proptest::collection::btree_set(-6i64..6, 1..=4),
            lo in -7i64..7,
            width in 0i64..10
        ) {
            let p = roots.iter().fold(DensePoly::one(), |acc, &r| {
                acc.mul(&DensePoly::new(vec![Q::from(-r), Q::one()]))
            });
            let hi = lo + width;
            let expected = roots.iter().filter(|&&r| lo <= r && r <= hi).count();
            let counted = count_roots(&p, &Rational::from(lo), &Rational::from(hi)).unwrap();
            prop_assert_eq!(counted, expected);
        }

        // Modular arithmetic

        #[test]
        fn modular_divmod_reconstructs(a in int_poly(), b in int_poly()) {
            let ring = ModularPolyRing::new(surd_integers::Integer::new(101)).unwrap();
            let b = ring.reduce(&b);
            prop_assume!(!b.is_zero());
            let (q, r) = ring.divmod(&a, &b).unwrap();
            prop_assert_eq!(ring.add(&ring.mul(&q, &b), &r), ring.reduce(&a));
        }
    }
}
