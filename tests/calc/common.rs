//! Components used in integration tests

use astro_float::{BigFloat, Consts};
use astro_float_calc::{Ball, Block, BlockStatus};
use rand::random;

/// Ball of the interval `[a, b]`.
pub fn interval(a: f64, b: f64) -> Ball {
    Ball::from_endpoints(&BigFloat::from_f64(a, 64), &BigFloat::from_f64(b, 64))
}

/// Number of blocks with the given status.
pub fn count(blocks: &[Block], status: BlockStatus) -> usize {
    blocks.iter().filter(|b| b.status == status).count()
}

/// Asserts that `blocks` cover `block` from left to right without gaps or overlaps.
pub fn assert_tiling(blocks: &[Block], block: &Ball) {
    assert!(!blocks.is_empty());
    assert_eq!(blocks[0].ball.lower(), block.lower());
    assert_eq!(blocks[blocks.len() - 1].ball.upper(), block.upper());
    for w in blocks.windows(2) {
        assert_eq!(
            w[0].ball.upper(),
            w[1].ball.lower(),
            "gap between {} and {}",
            w[0].ball,
            w[1].ball
        );
    }
}

/// Enclosure of `k * pi`.
pub fn pi_multiple(k: i64, p: usize, cc: &mut Consts) -> Ball {
    Ball::pi(p, cc).mul(&Ball::from_i64(k), p)
}

/// Returns true if `x` has radius below `2^e`.
pub fn rad_below_2exp(x: &Ball, e: i32) -> bool {
    let bound = BigFloat::from_f64(2f64.powi(e), 64);
    matches!(x.rad().cmp(&bound), Some(c) if c < 0)
}

/// Random number in `[0, n)` with step `1 / 2^s`.
pub fn random_dyadic(n: u32, s: u32) -> f64 {
    let steps = n << s;
    (random::<u32>() % steps) as f64 / (1u32 << s) as f64
}

/// Random value in `[from, to]`.
pub fn random_in(from: usize, to: usize) -> usize {
    from + random::<usize>() % (to - from + 1)
}
