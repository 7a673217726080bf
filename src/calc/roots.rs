//! Root search: isolation followed by refinement of every isolated root.

use tracing::{debug, warn};

use crate::ball::Ball;
use crate::calc::isolate::{Block, BlockStatus};
use crate::ctx::Calc;
use crate::defs::Status;
use crate::eval::Evaluator;

/// Isolated root and its refinement.
#[derive(Debug, Clone, PartialEq)]
pub struct Root {
    /// Isolating block.
    pub block: Ball,

    /// Refined enclosure of the root.
    pub refined: Ball,

    /// `Success` if every refinement step succeeded, otherwise the status of the first step
    /// that failed.
    pub status: Status,
}

/// Result of a root search.
#[derive(Debug, Clone, PartialEq)]
pub struct RootReport {
    /// Isolated roots from left to right.
    pub roots: Vec<Root>,

    /// Number of blocks that could not be classified.
    pub unknown: usize,

    /// Number of blocks proven to have no zero.
    pub no_zero: usize,

    /// All blocks of the search.
    pub blocks: Vec<Block>,
}

impl RootReport {
    /// Returns true if every part of the initial block was classified and every root was
    /// refined successfully.
    pub fn is_complete(&self) -> bool {
        self.unknown == 0 && self.roots.iter().all(|r| r.status.is_success())
    }
}

impl Calc {
    /// Finds the real roots of `f` in `block` and refines each of them to precision `target_prec`.
    ///
    /// Roots are isolated with the search limits and the low precision of the context. Every
    /// isolated block is bisected `bisect_iters` times, the result being the region of the
    /// convergence certificate, and `bisect_iters` more times, the result being the start of
    /// Newton refinement.
    ///
    /// ## Examples
    ///
    /// ```
    /// use astro_float::BigFloat;
    /// use astro_float_calc::{digits_to_bits, Ball, Calc, Polynomial};
    ///
    /// // x^2 - 2
    /// let f = Polynomial::from_i64(&[-2, 0, 1]);
    /// let (a, b) = (BigFloat::from_f64(-4.0, 64), BigFloat::from_f64(4.0, 64));
    /// let block = Ball::from_endpoints(&a, &b);
    ///
    /// let report = Calc::default().find_roots(&f, &mut (), &block, digits_to_bits(100));
    ///
    /// assert!(report.is_complete());
    /// assert_eq!(report.roots.len(), 2);
    /// let root = &report.roots[1].refined;
    /// assert!(root.mul(root, 1000).contains(&Ball::from_i64(2)));
    /// ```
    pub fn find_roots<C, F>(
        &self,
        f: &F,
        ctx: &mut C,
        block: &Ball,
        target_prec: usize,
    ) -> RootReport
    where
        C: ?Sized,
        F: Evaluator<C> + ?Sized,
    {
        let p = self.precision();
        let blocks = self.isolate_roots(f, ctx, block, self.limits(), p);

        let mut roots = Vec::new();
        let mut unknown = 0;
        let mut no_zero = 0;

        for b in blocks.iter() {
            match b.status {
                BlockStatus::NoZero => no_zero += 1,
                BlockStatus::Unknown => unknown += 1,
                BlockStatus::IsolatedZero => {
                    let (refined, status) = self.refine_isolated(f, ctx, &b.ball, target_prec);
                    roots.push(Root {
                        block: b.ball.clone(),
                        refined,
                        status,
                    });
                }
            }
        }

        if self.verbose() {
            debug!(roots = roots.len(), unknown, no_zero, "root search done");
        }

        RootReport {
            roots,
            unknown,
            no_zero,
            blocks,
        }
    }

    fn refine_isolated<C, F>(
        &self,
        f: &F,
        ctx: &mut C,
        block: &Ball,
        target_prec: usize,
    ) -> (Ball, Status)
    where
        C: ?Sized,
        F: Evaluator<C> + ?Sized,
    {
        let p = self.precision();
        let iters = self.bisect_iters();

        let (region, region_status) = self.refine_root_bisect(f, ctx, block, iters, p);
        if region_status != Status::Success {
            warn!(status = ?region_status, block = %block, "bisection of the region failed");
        }

        let cert = self.newton_certificate(f, ctx, &region, p);

        let (start, start_status) = self.refine_root_bisect(f, ctx, &region, iters, p);
        if start_status != Status::Success {
            warn!(status = ?start_status, block = %block, "bisection of the start failed");
        }

        let (refined, newton_status) =
            self.refine_root_newton(f, ctx, &start, &cert, self.eval_extra_prec(), target_prec);
        if newton_status != Status::Success {
            warn!(status = ?newton_status, block = %block, "newton refinement failed");
        }

        let status = [region_status, start_status, newton_status]
            .into_iter()
            .find(|s| !s.is_success())
            .unwrap_or(Status::Success);

        (refined, status)
    }
}
