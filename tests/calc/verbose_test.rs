//! Diagnostics never change results.

use crate::calc::common::interval;
use astro_float::Consts;
use astro_float_calc::{Calc, Polynomial, RootReport, SearchLimits, Sine};
use tracing::Level;

fn sin_roots(verbose: bool) -> RootReport {
    let mut cc = Consts::new().unwrap();
    let mut calc = Calc::default();
    calc.set_verbose(verbose);
    calc.find_roots(&Sine::new(), &mut cc, &interval(1.0, 21.0), 200)
}

fn poly_roots(verbose: bool) -> RootReport {
    let mut calc = Calc::default();
    calc.set_verbose(verbose);
    calc.set_limits(SearchLimits::new(10, 1000, 1000));

    // (x - 1)^2 (2x - 3): a double root left unknown and a root at a bisection midpoint
    let f = Polynomial::from_i64(&[-3, 8, -7, 2]);
    calc.find_roots(&f, &mut (), &interval(0.0, 3.0), 100)
}

#[test]
fn calc_verbose_invariance() {
    let subscriber = tracing_subscriber::fmt()
        .with_max_level(Level::DEBUG)
        .with_test_writer()
        .finish();

    let (sin_loud, poly_loud) =
        tracing::subscriber::with_default(subscriber, || (sin_roots(true), poly_roots(true)));

    let sin_quiet = sin_roots(false);
    let poly_quiet = poly_roots(false);

    assert_eq!(sin_loud, sin_quiet);
    assert_eq!(poly_loud, poly_quiet);

    assert_eq!(sin_quiet.roots.len(), 6);
    assert!(sin_quiet.is_complete());
    assert!(poly_quiet.unknown > 0);
}
