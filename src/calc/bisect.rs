//! Partition of a block and the bisection refiner.

use tracing::debug;

use crate::ball::Ball;
use crate::ctx::Calc;
use crate::defs::Status;
use crate::eval::{eval_jet, sign_at, Evaluator};

impl Calc {
    /// Splits `block` into its left and right halves, and returns them with the sign of `f`
    /// at the exact midpoint of `block`, evaluated with precision `p`.
    /// The sign is 0 if it can not be determined.
    pub fn partition<C, F>(&self, f: &F, ctx: &mut C, block: &Ball, p: usize) -> (Ball, Ball, i8)
    where
        C: ?Sized,
        F: Evaluator<C> + ?Sized,
    {
        let msign = sign_at(f, &block.mid_ball(), ctx, p);
        let (l, u) = block.bisect();
        (l, u, msign)
    }

    /// Refines a root of `f` bracketed by `start` with `iters` bisection steps, evaluating
    /// signs with precision `p`.
    ///
    /// On success the radius of the result is exactly `rad(start) / 2^iters`.
    ///
    /// ## Status
    ///
    /// - ImpreciseInput: signs of `f` at the endpoints of `start` are not strictly opposite.
    ///   `start` is returned.
    ///   Also returned with the ball of the last completed step when `f` fails to evaluate at
    ///   a midpoint.
    /// - NoConvergence: sign of `f` at the midpoint of a step could not be determined. The
    ///   ball of the last completed step is returned.
    pub fn refine_root_bisect<C, F>(
        &self,
        f: &F,
        ctx: &mut C,
        start: &Ball,
        iters: usize,
        p: usize,
    ) -> (Ball, Status)
    where
        C: ?Sized,
        F: Evaluator<C> + ?Sized,
    {
        let asign = sign_at(f, &Ball::exact(start.lower()), ctx, p);
        let bsign = sign_at(f, &Ball::exact(start.upper()), ctx, p);

        if asign == 0 || bsign == 0 || asign == bsign {
            if self.verbose() {
                debug!(asign, bsign, "bisection: endpoint signs do not bracket a root");
            }
            return (start.clone(), Status::ImpreciseInput);
        }

        let mut x = start.clone();
        for i in 0..iters {
            let msign = match eval_jet(f, &x.mid_ball(), ctx, 1, p) {
                Ok(v) => v[0].sign(),
                Err(e) => {
                    if self.verbose() {
                        debug!(step = i, error = %e, "bisection: evaluation failed");
                    }
                    return (x, Status::ImpreciseInput);
                }
            };

            if msign == 0 {
                if self.verbose() {
                    debug!(step = i, x = %x, "bisection: sign at midpoint is unknown");
                }
                return (x, Status::NoConvergence);
            }

            // The root is in the half whose endpoint signs differ.
            let (l, u) = x.bisect();
            x = if msign == asign { u } else { l };
        }

        (x, Status::Success)
    }
}
