//! Isolation of the real roots of a function.

use tracing::debug;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::ball::Ball;
use crate::ctx::{Calc, SearchLimits};
use crate::eval::{eval_jet, sign_at, Evaluator};

/// Classification of a block.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum BlockStatus {
    /// Function has no zero in the block.
    NoZero,

    /// Block contains exactly one simple zero.
    IsolatedZero,

    /// Nothing is known about the block.
    Unknown,
}

/// Sub-interval of the initial block of a root search.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Block {
    /// Interval of the block. Midpoint and radius are exact.
    pub ball: Ball,

    /// Classification.
    pub status: BlockStatus,

    /// Number of bisections from the initial block.
    pub depth: usize,
}

impl Block {
    /// Returns true if the block is `IsolatedZero`.
    pub fn is_isolated(&self) -> bool {
        self.status == BlockStatus::IsolatedZero
    }
}

/// Budget of a root search shared by all of its blocks.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchBudget {
    /// Block checks left.
    pub evals: usize,

    /// Roots left to find.
    pub found: usize,
}

impl SearchBudget {
    /// Budget for the given limits.
    pub fn new(limits: &SearchLimits) -> Self {
        SearchBudget {
            evals: limits.max_eval,
            found: limits.max_found,
        }
    }

    /// Returns true if no more blocks can be checked.
    pub fn is_exhausted(&self) -> bool {
        self.evals == 0 || self.found == 0
    }
}

// Block waiting to be checked with the signs of the function at its endpoints.
struct Pending {
    ball: Ball,
    asign: i8,
    bsign: i8,
    depth: usize,
}

impl Calc {
    /// Splits `block` into classified sub-blocks which together cover `block`.
    ///
    /// A block with a certified sign change and a derivative bounded away from zero is
    /// `IsolatedZero`. A block on which the function does not vanish is `NoZero`. Other blocks
    /// are bisected until `limits.max_depth` is reached, and become `Unknown` afterwards, or
    /// as soon as the budget of block checks or roots is exhausted.
    ///
    /// Blocks are returned in order from left to right. Function values are computed with
    /// precision `p`.
    ///
    /// ## Examples
    ///
    /// ```
    /// use astro_float::BigFloat;
    /// use astro_float_calc::{Ball, BlockStatus, Calc, Polynomial, SearchLimits};
    ///
    /// // (x - 1)(x - 2)(x - 3)
    /// let f = Polynomial::from_i64(&[-6, 11, -6, 1]);
    /// let (a, b) = (BigFloat::from_f64(0.0, 64), BigFloat::from_f64(5.0, 64));
    /// let block = Ball::from_endpoints(&a, &b);
    ///
    /// let calc = Calc::default();
    /// let blocks = calc.isolate_roots(&f, &mut (), &block, &SearchLimits::default(), 64);
    ///
    /// let isolated = blocks.iter().filter(|b| b.status == BlockStatus::IsolatedZero).count();
    /// assert_eq!(isolated, 3);
    /// ```
    pub fn isolate_roots<C, F>(
        &self,
        f: &F,
        ctx: &mut C,
        block: &Ball,
        limits: &SearchLimits,
        p: usize,
    ) -> Vec<Block>
    where
        C: ?Sized,
        F: Evaluator<C> + ?Sized,
    {
        let mut budget = SearchBudget::new(limits);
        let mut blocks = Vec::new();

        let asign = sign_at(f, &Ball::exact(block.lower()), ctx, p);
        let bsign = sign_at(f, &Ball::exact(block.upper()), ctx, p);

        // depth first, left half before right half
        let mut stack = vec![Pending {
            ball: block.clone(),
            asign,
            bsign,
            depth: 0,
        }];

        while let Some(Pending {
            ball,
            asign,
            bsign,
            depth,
        }) = stack.pop()
        {
            if budget.is_exhausted() {
                blocks.push(Block {
                    ball,
                    status: BlockStatus::Unknown,
                    depth,
                });
                continue;
            }

            budget.evals -= 1;

            let status = self.check_block(f, ctx, &ball, asign, bsign, p);

            if status == BlockStatus::IsolatedZero {
                budget.found -= 1;
            }

            if status != BlockStatus::Unknown || depth >= limits.max_depth {
                if self.verbose() {
                    debug!(?status, depth, block = %ball, "block classified");
                }
                blocks.push(Block {
                    ball,
                    status,
                    depth,
                });
                continue;
            }

            let (l, u, msign) = self.partition(f, ctx, &ball, p);

            if msign == 0 && self.verbose() {
                debug!(depth, block = %ball, "possible zero at midpoint");
            }

            stack.push(Pending {
                ball: u,
                asign: msign,
                bsign,
                depth: depth + 1,
            });
            stack.push(Pending {
                ball: l,
                asign,
                bsign: msign,
                depth: depth + 1,
            });
        }

        if self.verbose() {
            debug!(
                blocks = blocks.len(),
                evals_left = budget.evals,
                found_left = budget.found,
                "root isolation done"
            );
        }

        blocks
    }

    fn check_block<C, F>(
        &self,
        f: &F,
        ctx: &mut C,
        block: &Ball,
        asign: i8,
        bsign: i8,
        p: usize,
    ) -> BlockStatus
    where
        C: ?Sized,
        F: Evaluator<C> + ?Sized,
    {
        if sign_at(f, block, ctx, p) != 0 {
            return BlockStatus::NoZero;
        }

        if asign * bsign < 0 {
            if let Ok(jet) = eval_jet(f, block, ctx, 2, p) {
                if jet[1].is_finite() && !jet[1].contains_zero() {
                    return BlockStatus::IsolatedZero;
                }
            }
        }

        BlockStatus::Unknown
    }
}
