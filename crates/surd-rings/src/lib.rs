//! # surd-rings
//!
//! Algebraic structures for surd.
//!
//! This crate provides:
//! - Capability traits: `Ring`, `IntegralDomain`, `EuclideanDomain`,
//!   `Field`, `OrderedRing`
//! - Concrete implementations: Z, Q
//! - Generic exponentiation by repeated squaring
//!
//! A type implements only the capabilities it supports: residues have no
//! order, integers have no inverses, and generic algorithms ask for the
//! smallest trait they need.
//!
//! ## Trait Hierarchy
//!
//! ```text
//! Ring
//!  ├── CommutativeRing
//!  │    └── IntegralDomain      (exact division)
//!  │         └── EuclideanDomain (division with remainder)
//!  │              └── Field      (inverses)
//!  └── OrderedRing               (sign, comparison)
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod integers;
pub mod rationals;
pub mod traits;

pub use integers::Z;
pub use rationals::Q;
pub use surd_integers::{ArithError, ArithResult};
pub use traits::{power, CommutativeRing, EuclideanDomain, Field, IntegralDomain, OrderedRing, Ring};
