//! # Surd
//!
//! Exact arithmetic on real algebraic numbers.
//!
//! Surd represents a real algebraic number as a polynomial in the generator
//! of a field Q(θ), where θ is pinned down by its minimal polynomial and a
//! rational isolating interval. Everything is exact: signs and comparisons
//! are decided by narrowing intervals, never by rounding.
//!
//! ## Layers
//!
//! - [`integers`]: big integers, fractions, residues modulo m, primes
//! - [`rings`]: capability traits and the rings Z and Q
//! - [`poly`]: dense polynomials, resultants, Sturm sequences
//! - [`factor`]: factorization over Q
//! - [`algebraic`]: algebraic number fields and their extensions
//!
//! ## Quick Start
//!
//! ```rust
//! use surd::prelude::*;
//!
//! let two = AlgebraicNumber::rational(Rational::from(2));
//! let sqrt2 = root(&two, 2).unwrap();
//! assert_eq!((sqrt2.clone() * sqrt2.clone()).to_rational(), Some(Rational::from(2)));
//! assert_eq!(sqrt2.sign().unwrap(), 1);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub use surd_algebraic as algebraic;
pub use surd_factor as factor;
pub use surd_integers as integers;
pub use surd_poly as poly;
pub use surd_rings as rings;

/// Prelude module for convenient imports.
pub mod prelude {
    pub use surd_algebraic::{extend, normal, promote, root, AlgebraicField, AlgebraicNumber};
    pub use surd_factor::factor;
    pub use surd_integers::{ArithError, ArithResult, Integer, Rational};
    pub use surd_poly::{resultant, DensePoly, SturmSequence};
    pub use surd_rings::{EuclideanDomain, Field, OrderedRing, Ring, Q, Z};
}
