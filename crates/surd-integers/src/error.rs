//! Errors shared by every layer of the arithmetic stack.

use thiserror::Error;

/// Convenience alias used throughout the surd crates.
pub type ArithResult<T> = Result<T, ArithError>;

/// Failure of an exact arithmetic operation.
///
/// Variants fall into three groups: caller-correctable input errors,
/// mathematically undefined operations, and internal invariant violations.
/// Only the last group indicates a bug or an input outside the supported
/// envelope; see [`ArithError::is_internal`].
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ArithError {
    /// A fraction was built with a zero denominator.
    #[error("denominator cannot be zero")]
    ZeroDenominator,

    /// An isolating interval does not contain exactly one root.
    #[error("isolating interval contains {roots} roots, expected exactly one")]
    AmbiguousRootInterval {
        /// Number of real roots found in the interval.
        roots: usize,
    },

    /// Two algebraic numbers live in incompatible fields.
    #[error("algebraic numbers belong to incompatible fields")]
    FieldMismatch,

    /// Two residues were combined under different moduli.
    #[error("residues have different moduli")]
    ModulusMismatch,

    /// A power was requested with a negative exponent.
    #[error("exponent must be non-negative, got {0}")]
    NegativeExponent(i64),

    /// A zeroth root was requested.
    #[error("root index must be positive")]
    ZeroRootIndex,

    /// Division by the zero element.
    #[error("division by zero")]
    DivisionByZero,

    /// Inversion of a non-unit, e.g. a residue sharing a factor with its modulus.
    #[error("element is not invertible")]
    NotInvertible,

    /// Exact division left a nonzero remainder.
    #[error("division leaves a nonzero remainder")]
    NotDivisible,

    /// Two roots are equidistant from the requested point.
    #[error("cannot isolate a unique root near the given point")]
    RootIsolationTie,

    /// A bounded internal search was exhausted.
    #[error("internal invariant violated: {0}")]
    Internal(String),
}

impl ArithError {
    /// Returns true for internal invariant violations, as opposed to input
    /// or domain errors.
    #[must_use]
    pub fn is_internal(&self) -> bool {
        matches!(self, ArithError::Internal(_))
    }

    /// Builds an [`ArithError::Internal`] from a message.
    pub fn internal(msg: impl Into<String>) -> Self {
        ArithError::Internal(msg.into())
    }
}
