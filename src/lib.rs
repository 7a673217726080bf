//! Astro-float-calc is a library for certified root finding with arbitrary precision ball arithmetic on top of `astro-float`.
//!
//! ## Introduction
//!
//! **Balls**
//!
//!
//! A real number is represented by the data type `Ball`: a `BigFloat` midpoint and a radius.
//! The true value always lies within the radius around the midpoint.
//! Every operation on balls accounts for rounding of the midpoint by growing the radius, so the result encloses
//! the exact result for every input inside the operand balls.
//! Radii have the precision of one word and are always rounded upwards.
//!
//!
//! **Functions**
//!
//!
//! A function is given as an `Evaluator`: it fills a slice with enclosures of the value and the scaled
//! derivatives `f^(k)(x) / k!` of the function on a ball `x`. The evaluator receives an opaque context,
//! e.g. the constants cache of `astro-float`. Closures of the matching signature are evaluators.
//! `Sine` and `Polynomial` are ready-made evaluators.
//!
//!
//! **Root finding**
//!
//!
//! All operations are methods of the context `Calc`.
//! `Calc::isolate_roots` splits an interval into blocks which either contain no zero, contain exactly one simple zero,
//! or could not be classified within the search limits.
//! `Calc::refine_root_bisect` shrinks a bracketing ball using only signs of the function.
//! `Calc::refine_root_newton` refines a root with certified Newton steps, doubling the working precision at each step.
//! `Calc::find_roots` combines the above.
//!
//!
//! **Error handling**
//!
//!
//! Refinement operations return the refined ball together with a `Status`.
//! Unless the status is `Success`, the returned ball is the last one that was certified.
//! Isolation never fails: blocks that could not be classified are returned as `Unknown`.
//!
//!
//! **Logging**
//!
//!
//! Diagnostic events are emitted with `tracing` when the context is verbose.
//! Verbosity never changes results.
//!
//!
//! ## Examples
//!
//! The example below finds the roots of `sin(x)` between 1 and 101 and refines them to 300 bits.
//!
//! ```
//! use astro_float::{BigFloat, Consts};
//! use astro_float_calc::{Ball, Calc, Sine};
//!
//! let mut cc = Consts::new().expect("Constants cache initialized");
//!
//! let (a, b) = (BigFloat::from_f64(1.0, 64), BigFloat::from_f64(101.0, 64));
//! let block = Ball::from_endpoints(&a, &b);
//!
//! let calc = Calc::default();
//! let report = calc.find_roots(&Sine::new(), &mut cc, &block, 300);
//!
//! assert_eq!(report.roots.len(), 32);
//! assert_eq!(report.unknown, 0);
//!
//! // the first root is pi
//! let pi = Ball::pi(320, &mut cc);
//! assert!(report.roots[0].refined.overlaps(&pi));
//! ```

#![deny(missing_docs)]
#![deny(clippy::suspicious)]
#![allow(clippy::comparison_chain)]
#![allow(clippy::collapsible_else_if)]
#![allow(clippy::collapsible_if)]
#![allow(clippy::module_inception)]
#![allow(clippy::should_implement_trait)]

mod ball;
mod calc;
pub mod ctx;
mod defs;
mod eval;
mod funcs;

pub use crate::ball::Ball;
pub use crate::calc::Block;
pub use crate::calc::BlockStatus;
pub use crate::calc::ConvergenceCertificate;
pub use crate::calc::Root;
pub use crate::calc::RootReport;
pub use crate::calc::SearchBudget;
pub use crate::ctx::Calc;
pub use crate::ctx::SearchLimits;
pub use crate::defs::digits_to_bits;
pub use crate::defs::Error;
pub use crate::defs::Status;
pub use crate::eval::eval_jet;
pub use crate::eval::sign_at;
pub use crate::eval::Evaluator;
pub use crate::eval::Jet;
pub use crate::funcs::Polynomial;
pub use crate::funcs::Scale;
pub use crate::funcs::Sine;

pub use crate::defs::MAG_PREC;
pub use crate::defs::MAX_LADDER_RUNGS;
pub use crate::defs::PREC_EXACT;
