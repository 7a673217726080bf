//! Newton refinement with a doubling precision schedule.

use tracing::debug;

use crate::ball::util::abs_bound_lt_2exp;
use crate::ball::Ball;
use crate::calc::newton::ConvergenceCertificate;
use crate::ctx::Calc;
use crate::defs::{Status, MAX_LADDER_RUNGS};
use crate::eval::Evaluator;

impl Calc {
    /// Computes the working precisions of a Newton refinement to precision `p`, starting from a
    /// ball with relative accuracy `start_accuracy` bits, under convergence factor `factor`.
    ///
    /// Every rung is half of the previous one plus a padding derived from the magnitude of the
    /// factor. The list is in descending order: the first element is the final precision.
    /// Returns `None` if more than `MAX_LADDER_RUNGS` rungs would be needed.
    pub fn precision_ladder(
        &self,
        start_accuracy: i64,
        factor: &astro_float::BigFloat,
        p: usize,
    ) -> Option<Vec<usize>> {
        let p = p as i64;
        let padding = (abs_bound_lt_2exp(factor).min(p) + 5).max(0);

        let mut precs = Vec::with_capacity(16);
        precs.push(p + padding);

        // every rung doubles the accuracy of the previous one
        let target = start_accuracy.saturating_mul(2);
        while let Some(&last) = precs.last() {
            if last + padding <= target {
                break;
            }
            precs.push(last / 2 + padding);
            if precs.len() == MAX_LADDER_RUNGS {
                return None;
            }
        }

        Some(precs.into_iter().map(|v| v as usize).collect())
    }

    /// Refines `start` to precision `p` with certified Newton steps inside the region of `cert`.
    ///
    /// Steps are performed with the precisions of `precision_ladder` from the smallest to the
    /// largest, each with `extra_prec` additional bits for function evaluation.
    ///
    /// ## Status
    ///
    /// - ImpreciseInput: accuracy of `start` is too low to reach `p` by doubling, or `f`
    ///   could not be evaluated. `start` is returned in the first case.
    /// - NoConvergence: a step failed. The ball of the last successful step is returned.
    pub fn refine_root_newton<C, F>(
        &self,
        f: &F,
        ctx: &mut C,
        start: &Ball,
        cert: &ConvergenceCertificate,
        extra_prec: usize,
        p: usize,
    ) -> (Ball, Status)
    where
        C: ?Sized,
        F: Evaluator<C> + ?Sized,
    {
        let start_accuracy = start.rel_accuracy_bits();

        let precs = match self.precision_ladder(start_accuracy, &cert.factor, p) {
            Some(precs) => precs,
            None => {
                if self.verbose() {
                    debug!(start_accuracy, p, "newton refinement: start is too imprecise");
                }
                return (start.clone(), Status::ImpreciseInput);
            }
        };

        if self.verbose() {
            debug!(start_accuracy, ?precs, "newton refinement");
        }

        let mut x = start.clone();
        for wp in precs.iter().rev().map(|v| v + extra_prec) {
            let (y, status) = self.newton_step(f, ctx, &x, cert, wp);
            if status != Status::Success {
                return (y, status);
            }
            x = y;
        }

        (x, Status::Success)
    }
}
