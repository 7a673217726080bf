//! Ball arithmetic: rigorous enclosures of real numbers on top of `BigFloat`.

mod arith;
mod ball;
mod elem;
pub(crate) mod util;

pub use ball::Ball;
