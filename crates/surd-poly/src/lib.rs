//! # surd-poly
//!
//! Univariate polynomial arithmetic for surd.
//!
//! This crate provides:
//! - Dense univariate polynomials over any ring, including polynomial rings
//!   (bivariate polynomials for resultants)
//! - Pseudo-division, exact division and division over fields
//! - GCD, extended GCD, content and squarefree parts
//! - Resultants by the subresultant PRS
//! - Sturm sequences: exact real root counting and isolation over Q
//! - Arithmetic over Z/mZ for modular factorization

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod algorithms;
pub mod dense;
pub mod modular;
pub mod sturm;

#[cfg(test)]
mod proptests;

pub use algorithms::gcd::{integer_primitive, poly_extended_gcd, poly_gcd, to_rational};
pub use algorithms::resultant::resultant;
pub use algorithms::squarefree::{is_squarefree, squarefree_part};
pub use dense::DensePoly;
pub use modular::ModularPolyRing;
pub use sturm::{count_roots, isolate_root, SturmSequence};
