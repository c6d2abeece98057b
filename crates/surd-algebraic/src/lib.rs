//! # surd-algebraic
//!
//! Exact arithmetic on real algebraic numbers.
//!
//! A field Q(θ) is given by the minimal polynomial A of θ and a rational
//! interval containing exactly one real root of A, the one θ stands for.
//! Numbers are residues modulo A. Arithmetic is exact polynomial
//! arithmetic; the interval is only consulted, and narrowed on demand, when
//! a sign or a numeric approximation is needed.
//!
//! This crate provides:
//! - [`AlgebraicField`]: a shared handle to Q(θ) with a refinable interval
//! - [`AlgebraicNumber`]: field elements with ring, field and order traits
//! - [`normal`]: the rational polynomial of a root of a polynomial over Q(θ)
//! - [`extend`]: a common field Q(α, β) by the primitive element theorem
//! - [`root`] and [`promote`]: real k-th roots and common fields for lists

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod config;
pub mod extension;
pub mod field;
pub mod number;

pub use config::Config;
pub use extension::{extend, normal, promote, root};
pub use field::AlgebraicField;
pub use number::AlgebraicNumber;
