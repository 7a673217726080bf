//! Ready-made evaluators.

mod poly;
mod sin;

pub use poly::Polynomial;
pub use sin::{Scale, Sine};
