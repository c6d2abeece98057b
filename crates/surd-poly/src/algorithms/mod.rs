//! Polynomial algorithms.
//!
//! - GCD, extended GCD and content over Q and Z
//! - Squarefree parts
//! - Resultants by the subresultant pseudo-remainder sequence

pub mod gcd;
pub mod resultant;
pub mod squarefree;
