//! Iteration limits for refinement-driven operations.

use surd_integers::Rational;

/// Bounds on the refinement loops of a field.
///
/// Every loop that narrows an isolating interval until some question is
/// decided stops after a fixed number of steps and reports an internal
/// error instead of running forever.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Config {
    /// Refinements allowed while deciding a sign, approximating a value or
    /// selecting a factor in [`crate::extend`].
    pub max_refinements: usize,
    /// Width of the value enclosure below which `to_f64` stops refining.
    pub approx_tolerance: Rational,
    /// Bisection steps allowed while isolating a k-th root in [`crate::root`].
    pub max_root_bisections: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            max_refinements: 2000,
            approx_tolerance: Rational::from_i64(1, 1 << 60),
            max_root_bisections: 200,
        }
    }
}
