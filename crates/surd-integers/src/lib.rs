//! # surd-integers
//!
//! Arbitrary precision integer and rational arithmetic for surd.
//!
//! This crate wraps `dashu` to provide:
//! - Arbitrary precision integers (`Integer`) with floor division,
//!   extended GCD, integer square roots and binomials
//! - Arbitrary precision fractions (`Rational`) kept in lowest terms
//! - Residues with a runtime modulus (`IntegerMod`)
//! - A lazy sequence of primes (`Primes`)
//! - The error type shared by every surd crate (`ArithError`)

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod error;
pub mod integer;
pub mod modular;
pub mod primes;
pub mod rational;

#[cfg(test)]
mod proptests;

pub use error::{ArithError, ArithResult};
pub use integer::Integer;
pub use modular::IntegerMod;
pub use primes::Primes;
pub use rational::Rational;
