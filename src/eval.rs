//! Evaluator: the black-box function whose roots are searched.

use smallvec::{smallvec, SmallVec};

use crate::ball::Ball;
use crate::defs::Error;

/// Value and scaled derivatives `[f(x), f'(x), f''(x)/2!, ...]` of a function on a ball.
/// Every entry encloses the corresponding exact coefficient.
pub type Jet = SmallVec<[Ball; 3]>;

/// A real function that can enclose its value and scaled derivatives on a ball.
///
/// `C` is an opaque context passed through the calculus unchanged, e.g. a constants cache.
///
/// Implementations must be deterministic, and increasing `p` must never widen the enclosures
/// returned for the same input ball.
pub trait Evaluator<C: ?Sized> {
    /// Fills `out` with enclosures of `f^(k)(x) / k!` for `k` in `0..out.len()`, computed with
    /// working precision `p`. The length of `out` is the order of the jet.
    ///
    /// ## Errors
    ///
    /// Any error signals that the function could not be evaluated. The calculus never
    /// trusts `out` after an error.
    fn evaluate(&self, out: &mut [Ball], x: &Ball, ctx: &mut C, p: usize) -> Result<(), Error>;
}

impl<C: ?Sized, F> Evaluator<C> for F
where
    F: Fn(&mut [Ball], &Ball, &mut C, usize) -> Result<(), Error>,
{
    fn evaluate(&self, out: &mut [Ball], x: &Ball, ctx: &mut C, p: usize) -> Result<(), Error> {
        self(out, x, ctx, p)
    }
}

/// Evaluates a jet of the given order.
///
/// ## Errors
///
/// - Errors of the evaluator.
/// - Arithmetic: an entry of the jet has a NaN midpoint carrying a float error.
/// - Evaluation: an entry of the jet has a NaN midpoint without an associated error.
pub fn eval_jet<C, F>(f: &F, x: &Ball, ctx: &mut C, order: usize, p: usize) -> Result<Jet, Error>
where
    C: ?Sized,
    F: Evaluator<C> + ?Sized,
{
    let mut out: Jet = smallvec![Ball::indeterminate(); order];
    f.evaluate(&mut out, x, ctx, p)?;

    if let Some(bad) = out.iter().find(|b| b.mid().is_nan()) {
        return Err(match bad.mid().err() {
            Some(e) => Error::Arithmetic(e),
            None => Error::Evaluation,
        });
    }

    Ok(out)
}

/// Sign of the function at `x`: 1 or -1 when certain, 0 when unknown or when the evaluation fails.
pub fn sign_at<C, F>(f: &F, x: &Ball, ctx: &mut C, p: usize) -> i8
where
    C: ?Sized,
    F: Evaluator<C> + ?Sized,
{
    match eval_jet(f, x, ctx, 1, p) {
        Ok(v) => v[0].sign(),
        Err(_) => 0,
    }
}
