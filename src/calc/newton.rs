//! Certified Newton steps.

use astro_float::{BigFloat, INF_POS};
use tracing::debug;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::ball::util::lt;
use crate::ball::Ball;
use crate::ctx::Calc;
use crate::defs::Status;
use crate::eval::{eval_jet, Evaluator};

/// Region of a root together with an upper bound of `|f''(t) / (2 f'(t))|` for every `t` in
/// the region.
///
/// The bound is what makes the remainder of a Newton step computable: a step started from a
/// ball `x` inside the region lands within `rad(x)^2 * factor` of the classical update.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ConvergenceCertificate {
    /// Upper bound of `|f'' / (2 f')|` over the region. Positive infinity if no finite bound
    /// is known.
    pub factor: BigFloat,

    /// Region.
    pub region: Ball,
}

impl ConvergenceCertificate {
    /// Returns true if the factor is finite. Newton steps can only succeed with a finite factor.
    pub fn is_finite(&self) -> bool {
        !self.factor.is_inf() && !self.factor.is_nan()
    }
}

impl Calc {
    /// Computes an upper bound of `|f''(t) / (2 f'(t))|` for every `t` in `region` using
    /// working precision `p`.
    ///
    /// Returns positive infinity if the derivative may vanish on the region or `f` could not
    /// be evaluated.
    pub fn newton_conv_factor<C, F>(&self, f: &F, ctx: &mut C, region: &Ball, p: usize) -> BigFloat
    where
        C: ?Sized,
        F: Evaluator<C> + ?Sized,
    {
        let jet = match eval_jet(f, region, ctx, 3, p) {
            Ok(jet) => jet,
            Err(e) => {
                if self.verbose() {
                    debug!(error = %e, "convergence factor: evaluation failed");
                }
                return INF_POS;
            }
        };

        let factor = jet[2].div(&jet[1], p).abs_ubound();

        if self.verbose() {
            debug!(factor = %factor, region = %region, "convergence factor");
        }

        factor
    }

    /// Computes the convergence certificate of `region` using working precision `p`.
    pub fn newton_certificate<C, F>(
        &self,
        f: &F,
        ctx: &mut C,
        region: &Ball,
        p: usize,
    ) -> ConvergenceCertificate
    where
        C: ?Sized,
        F: Evaluator<C> + ?Sized,
    {
        ConvergenceCertificate {
            factor: self.newton_conv_factor(f, ctx, region, p),
            region: region.clone(),
        }
    }

    /// Performs one Newton step from `x` with working precision `p`.
    ///
    /// The function is evaluated at the exact midpoint of `x` and the update
    /// `u = mid(x) - f(mid(x)) / f'(mid(x))` is widened by `rad(x)^2 * factor`.
    /// The step succeeds if `u` lies in the region of `cert` and `rad(u) < rad(x)`.
    ///
    /// ## Status
    ///
    /// - NoConvergence: the step did not contract inside the region. `x` is returned.
    /// - ImpreciseInput: `f` could not be evaluated. `x` is returned.
    pub fn newton_step<C, F>(
        &self,
        f: &F,
        ctx: &mut C,
        x: &Ball,
        cert: &ConvergenceCertificate,
        p: usize,
    ) -> (Ball, Status)
    where
        C: ?Sized,
        F: Evaluator<C> + ?Sized,
    {
        let err = x.newton_remainder(&cert.factor);
        let t = x.mid_ball();

        let jet = match eval_jet(f, &t, ctx, 2, p) {
            Ok(jet) => jet,
            Err(e) => {
                if self.verbose() {
                    debug!(error = %e, p, "newton step: evaluation failed");
                }
                return (x.clone(), Status::ImpreciseInput);
            }
        };

        let mut u = t.sub(&jet[0].div(&jet[1], p), p);
        u.add_error(&err);

        if cert.region.contains(&u) && lt(u.rad(), x.rad()) {
            if self.verbose() {
                debug!(p, rad = %u.rad(), "newton step");
            }
            (u, Status::Success)
        } else {
            if self.verbose() {
                debug!(p, x = %x, u = %u, "newton step: no contraction");
            }
            (x.clone(), Status::NoConvergence)
        }
    }
}
