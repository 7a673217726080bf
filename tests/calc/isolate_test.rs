//! Root isolation of the sine function.

use crate::calc::common::{assert_tiling, count, interval, pi_multiple, random_dyadic, random_in};
use astro_float::Consts;
use astro_float_calc::{Ball, BlockStatus, Calc, SearchLimits, Sine};

#[test]
fn calc_isolate_sin() {
    let mut cc = Consts::new().unwrap();
    let calc = Calc::default();
    let block = interval(1.0, 101.0);

    let blocks = calc.isolate_roots(&Sine::new(), &mut cc, &block, &SearchLimits::default(), 30);

    assert_eq!(count(&blocks, BlockStatus::IsolatedZero), 32);
    assert_eq!(count(&blocks, BlockStatus::Unknown), 0);
    assert_tiling(&blocks, &block);

    for (k, b) in blocks.iter().filter(|b| b.is_isolated()).enumerate() {
        let root = pi_multiple(k as i64 + 1, 128, &mut cc);
        assert!(b.ball.contains(&root), "{} does not contain {}", b.ball, root);
    }

    for b in blocks.iter().filter(|b| b.status == BlockStatus::NoZero) {
        for k in 1..=32 {
            assert!(!b.ball.overlaps(&pi_multiple(k, 128, &mut cc)));
        }
    }
}

#[test]
fn calc_isolate_sin_root_at_endpoint() {
    let mut cc = Consts::new().unwrap();
    let calc = Calc::default();
    let block = interval(0.0, 100.0);

    let blocks = calc.isolate_roots(&Sine::new(), &mut cc, &block, &SearchLimits::default(), 30);

    // the root at 0 has an endpoint sign of 0 and can not be certified
    assert_eq!(count(&blocks, BlockStatus::IsolatedZero), 31);
    assert_eq!(count(&blocks, BlockStatus::Unknown), 1);
    assert_tiling(&blocks, &block);

    let first = &blocks[0];
    assert_eq!(first.status, BlockStatus::Unknown);
    assert_eq!(first.depth, 30);
    assert!(first.ball.contains(&Ball::zero()));
}

#[test]
fn calc_isolate_sin_limits() {
    let mut cc = Consts::new().unwrap();
    let calc = Calc::default();
    let block = interval(1.0, 101.0);

    // a shallow search leaves the neighbourhoods of some roots unknown
    let limits = SearchLimits::new(3, 100_000, 100_000);
    let blocks = calc.isolate_roots(&Sine::new(), &mut cc, &block, &limits, 30);
    assert_tiling(&blocks, &block);
    assert!(blocks.iter().all(|b| b.depth <= 3));
    assert!(count(&blocks, BlockStatus::Unknown) > 0);
    assert!(count(&blocks, BlockStatus::IsolatedZero) < 32);

    // the number of roots found is capped
    let limits = SearchLimits::new(30, 100_000, 5);
    let blocks = calc.isolate_roots(&Sine::new(), &mut cc, &block, &limits, 30);
    assert_tiling(&blocks, &block);
    assert_eq!(count(&blocks, BlockStatus::IsolatedZero), 5);
    for (k, b) in blocks.iter().filter(|b| b.is_isolated()).enumerate() {
        assert!(b.ball.contains(&pi_multiple(k as i64 + 1, 128, &mut cc)));
    }
}

#[test]
fn calc_isolate_half_pi_random() {
    let mut cc = Consts::new().unwrap();
    let f = Sine::half_pi();

    for _ in 0..20 {
        // endpoints are never integers
        let a = random_dyadic(40, 4) - 20.0 + 1.0 / 32.0;
        let b = a + 1.0 + random_dyadic(20, 4);
        let block = interval(a, b);

        let p = random_in(30, 130);
        let depth = random_in(20, 40);

        let calc = Calc::default();
        let limits = SearchLimits::new(depth, 100_000, 100_000);

        let blocks = calc.isolate_roots(&f, &mut cc, &block, &limits, p);
        assert_tiling(&blocks, &block);

        // zeros of sin(pi x / 2) are the even integers
        let evens: Vec<i64> = (a.ceil() as i64..=b.floor() as i64).filter(|n| n % 2 == 0).collect();

        for blk in blocks.iter().filter(|blk| blk.is_isolated()) {
            let inside = evens.iter().filter(|&&n| blk.ball.contains(&Ball::from_i64(n))).count();
            assert_eq!(inside, 1, "block {} at p {}", blk.ball, p);
        }

        for blk in blocks.iter().filter(|blk| blk.status == BlockStatus::NoZero) {
            assert!(evens.iter().all(|&n| !blk.ball.contains(&Ball::from_i64(n))));
        }

        for blk in blocks.iter().filter(|blk| blk.status == BlockStatus::Unknown) {
            assert_eq!(blk.depth, depth);
        }

        if count(&blocks, BlockStatus::Unknown) == 0 {
            assert_eq!(count(&blocks, BlockStatus::IsolatedZero), evens.len());
        }
    }
}

#[test]
fn calc_isolate_sin_zero_midpoint() {
    let mut cc = Consts::new().unwrap();
    let calc = Calc::default();
    let block = interval(-10.0, 10.0);

    let blocks = calc.isolate_roots(&Sine::new(), &mut cc, &block, &SearchLimits::default(), 30);

    // the root at 0 is the first midpoint and stays unknown on both sides
    assert_eq!(count(&blocks, BlockStatus::IsolatedZero), 6);
    assert_eq!(count(&blocks, BlockStatus::Unknown), 2);
    assert_tiling(&blocks, &block);

    let unknown: Vec<_> = blocks.iter().filter(|b| b.status == BlockStatus::Unknown).collect();
    assert!(unknown[0].ball.upper().is_zero());
    assert!(unknown[1].ball.lower().is_zero());
    assert!(unknown.iter().all(|b| b.depth == 30));

    let roots: Vec<_> = blocks.iter().filter(|b| b.is_isolated()).collect();
    for (b, k) in roots.iter().zip([-3, -2, -1, 1, 2, 3]) {
        assert!(b.ball.contains(&pi_multiple(k, 128, &mut cc)));
    }
}
