//! Calculus context: parameters shared by the root finding operations.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::defs::{
    DEFAULT_BISECT_ITERS, DEFAULT_EVAL_EXTRA_PREC, DEFAULT_MAX_DEPTH, DEFAULT_MAX_EVAL,
    DEFAULT_MAX_FOUND, DEFAULT_P,
};

/// Limits of a root search.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct SearchLimits {
    /// Maximum number of bisections of the initial block.
    pub max_depth: usize,

    /// Maximum number of block checks. Each check evaluates the function on a block.
    pub max_eval: usize,

    /// Maximum number of isolated roots. The search stops once this many are found.
    pub max_found: usize,
}

impl SearchLimits {
    /// Creates search limits.
    pub fn new(max_depth: usize, max_eval: usize, max_found: usize) -> Self {
        SearchLimits {
            max_depth,
            max_eval,
            max_found,
        }
    }
}

impl Default for SearchLimits {
    fn default() -> Self {
        Self::new(DEFAULT_MAX_DEPTH, DEFAULT_MAX_EVAL, DEFAULT_MAX_FOUND)
    }
}

/// Context of the root finding calculus.
///
/// All root finding operations are methods of the context. The context holds no state that
/// changes during an operation, so one context can be shared by any number of searches.
///
/// ## Examples
///
/// ```
/// use astro_float_calc::{Calc, SearchLimits};
///
/// let mut calc = Calc::default();
/// calc.set_verbose(true);
/// calc.set_limits(SearchLimits::new(20, 1000, 10));
///
/// assert!(calc.verbose());
/// assert_eq!(calc.limits().max_found, 10);
/// assert_eq!(calc.precision(), 30);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Calc {
    verbose: bool,
    limits: SearchLimits,
    p: usize,
    eval_extra_prec: usize,
    bisect_iters: usize,
}

impl Calc {
    /// Create a new context.
    ///
    /// `p` is the working precision used for isolation, bisection and convergence factors.
    /// `eval_extra_prec` is added to the working precision of every Newton step.
    /// `bisect_iters` is the number of bisection steps applied to an isolated block before
    /// Newton refinement.
    pub fn new(
        verbose: bool,
        limits: SearchLimits,
        p: usize,
        eval_extra_prec: usize,
        bisect_iters: usize,
    ) -> Self {
        Calc {
            verbose,
            limits,
            p,
            eval_extra_prec,
            bisect_iters,
        }
    }

    /// Enables or disables diagnostic events.
    pub fn set_verbose(&mut self, verbose: bool) {
        self.verbose = verbose;
    }

    /// Sets the search limits.
    pub fn set_limits(&mut self, limits: SearchLimits) {
        self.limits = limits;
    }

    /// Sets the low working precision.
    pub fn set_precision(&mut self, p: usize) {
        self.p = p;
    }

    /// Sets the extra precision of the function evaluations of Newton steps.
    pub fn set_eval_extra_prec(&mut self, eval_extra_prec: usize) {
        self.eval_extra_prec = eval_extra_prec;
    }

    /// Sets the number of bisection steps applied before Newton refinement.
    pub fn set_bisect_iters(&mut self, bisect_iters: usize) {
        self.bisect_iters = bisect_iters;
    }

    /// Returns true if diagnostic events are enabled.
    pub fn verbose(&self) -> bool {
        self.verbose
    }

    /// Returns the search limits.
    pub fn limits(&self) -> &SearchLimits {
        &self.limits
    }

    /// Returns the low working precision.
    pub fn precision(&self) -> usize {
        self.p
    }

    /// Returns the extra precision of the function evaluations of Newton steps.
    pub fn eval_extra_prec(&self) -> usize {
        self.eval_extra_prec
    }

    /// Returns the number of bisection steps applied before Newton refinement.
    pub fn bisect_iters(&self) -> usize {
        self.bisect_iters
    }
}

impl Default for Calc {
    fn default() -> Self {
        Self::new(
            false,
            SearchLimits::default(),
            DEFAULT_P,
            DEFAULT_EVAL_EXTRA_PREC,
            DEFAULT_BISECT_ITERS,
        )
    }
}
