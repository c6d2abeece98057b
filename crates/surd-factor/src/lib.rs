//! Polynomial factorization over the rationals.
//!
//! The pipeline is the classical one:
//! - **Squarefree reduction**: strip repeated factors and clear denominators
//! - **Prime selection**: an odd prime keeping the polynomial squarefree
//! - **Cantor-Zassenhaus**: distinct-degree then randomized equal-degree
//!   splitting over Z/pZ
//! - **Hensel lifting**: lift the modular factors to Z/p^eZ
//! - **Recombination**: products of lifted factors tested by trial division
//!
//! Randomized steps draw from a `ChaCha8Rng` seeded by [`FactorConfig`], so
//! a factorization is reproducible.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod cantor_zassenhaus;
pub mod config;
pub mod hensel;
pub mod recombine;
pub mod squarefree;
pub mod univariate;

// Re-exports
pub use cantor_zassenhaus::{
    distinct_degree_factorization, equal_degree_factorization, factor_mod_prime,
};
pub use config::FactorConfig;
pub use hensel::{hensel_lift, HenselLiftResult};
pub use recombine::{recombine, Combinations};
pub use squarefree::squarefree_integer_part;
pub use univariate::{choose_prime, coefficient_bound, factor, factor_with, precision_for};
