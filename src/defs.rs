//! Definitions.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Precision of ball radii in bits. Radii are always rounded upwards to this precision.
pub const MAG_PREC: usize = 64;

/// Accuracy reported for exact values, and the magnitude used for "unbounded" exponents.
pub const PREC_EXACT: i64 = i64::MAX / 8;

/// Maximum number of rungs in a Newton precision ladder.
pub const MAX_LADDER_RUNGS: usize = 64;

/// Default maximum bisection depth of a root search.
pub const DEFAULT_MAX_DEPTH: usize = 30;

/// Default maximum number of block checks of a root search.
pub const DEFAULT_MAX_EVAL: usize = 100_000;

/// Default maximum number of isolated roots of a root search.
pub const DEFAULT_MAX_FOUND: usize = 100_000;

/// Default working precision used for isolation.
pub const DEFAULT_P: usize = 30;

/// Default number of extra bits given to the function evaluations of Newton steps.
pub const DEFAULT_EVAL_EXTRA_PREC: usize = 10;

/// Default number of bisection steps applied before Newton refinement.
pub const DEFAULT_BISECT_ITERS: usize = 5;

/// Possible errors.
#[derive(Debug, Clone, Copy, PartialEq, thiserror::Error)]
pub enum Error {
    /// Underlying floating point operation failed.
    #[error("arithmetic failure: {0}")]
    Arithmetic(#[from] astro_float::Error),

    /// Function could not be evaluated at the requested point and precision.
    #[error("function evaluation failed")]
    Evaluation,

    /// Radius of a ball is negative or NaN.
    #[error("invalid ball radius")]
    InvalidRadius,
}

/// Outcome of a refinement operation.
///
/// The refined value is always returned next to the status. Unless the status is `Success`
/// the value is the last one that was certified before the failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Status {
    /// Operation completed and all invariants hold on the output.
    Success,

    /// Input does not meet a precondition of the operation, or the function could not be evaluated.
    ImpreciseInput,

    /// A step could not make certified progress.
    NoConvergence,
}

impl Status {
    /// Returns true if `self` is `Success`.
    pub fn is_success(&self) -> bool {
        *self == Status::Success
    }
}

/// Digits to bits: `d * log2(10) + 10`.
pub fn digits_to_bits(digits: usize) -> usize {
    (digits as f64 * core::f64::consts::LOG2_10) as usize + 10
}
