//! Auxiliary functions for radius arithmetic.
//!
//! Radii are nonnegative numbers with precision `MAG_PREC`. All operations round upwards,
//! and an infinite operand always gives an infinite result.

use astro_float::{BigFloat, RoundingMode, INF_POS};

use crate::defs::{MAG_PREC, PREC_EXACT};

/// Returns true if `x` is neither NaN nor infinite.
#[inline]
pub fn is_finite(x: &BigFloat) -> bool {
    !x.is_nan() && !x.is_inf()
}

/// Zero with radius precision.
#[inline]
pub fn mag_zero() -> BigFloat {
    BigFloat::new(MAG_PREC)
}

/// Upper bound of `|x|` with radius precision.
pub fn mag_from(x: &BigFloat) -> BigFloat {
    if !is_finite(x) {
        return INF_POS;
    }

    let mut ret = x.abs();
    match ret.set_precision(MAG_PREC, RoundingMode::Up) {
        Ok(()) => ret,
        Err(_) => INF_POS,
    }
}

/// Lower bound of `|x|` with radius precision.
pub fn mag_from_lower(x: &BigFloat) -> BigFloat {
    if !is_finite(x) {
        return mag_zero();
    }

    let mut ret = x.abs();
    match ret.set_precision(MAG_PREC, RoundingMode::Down) {
        Ok(()) => ret,
        Err(_) => mag_zero(),
    }
}

/// Upper bound of `a + b`.
pub fn mag_add(a: &BigFloat, b: &BigFloat) -> BigFloat {
    if a.is_inf() || b.is_inf() || a.is_nan() || b.is_nan() {
        return INF_POS;
    }
    a.add(b, MAG_PREC, RoundingMode::Up)
}

/// Upper bound of `a * b`. Zero times infinity gives infinity.
pub fn mag_mul(a: &BigFloat, b: &BigFloat) -> BigFloat {
    if a.is_inf() || b.is_inf() || a.is_nan() || b.is_nan() {
        return INF_POS;
    }
    a.mul(b, MAG_PREC, RoundingMode::Up)
}

/// Upper bound of `a / b`, where `b` is a lower bound of the divisor.
pub fn mag_div(a: &BigFloat, b: &BigFloat) -> BigFloat {
    if a.is_inf() || a.is_nan() || b.is_nan() || b.is_zero() {
        return INF_POS;
    }
    if b.is_inf() {
        return mag_zero();
    }
    a.div(b, MAG_PREC, RoundingMode::Up)
}

/// Midpoint and error of a result known to lie between `lo` and `hi`.
///
/// `lo` and `hi` are the results of the same operation rounded down and up.
pub fn enclose(lo: BigFloat, hi: BigFloat) -> (BigFloat, BigFloat) {
    if !is_finite(&lo) || !is_finite(&hi) {
        return (BigFloat::new(MAG_PREC), INF_POS);
    }

    if lo.cmp(&hi) == Some(0) {
        return (lo, mag_zero());
    }

    let err = hi.sub(&lo, MAG_PREC, RoundingMode::Up);
    (lo, err)
}

/// Smallest `e` such that `|x| < 2^e`.
///
/// Zero gives `-PREC_EXACT`, infinity and NaN give `PREC_EXACT`.
pub fn abs_bound_lt_2exp(x: &BigFloat) -> i64 {
    if x.is_zero() {
        return -PREC_EXACT;
    }
    if !is_finite(x) {
        return PREC_EXACT;
    }
    match x.exponent() {
        Some(e) => e as i64,
        None => PREC_EXACT,
    }
}

/// Compares two finite numbers. NaN compares as unordered.
#[inline]
pub fn lt(a: &BigFloat, b: &BigFloat) -> bool {
    matches!(a.cmp(b), Some(c) if c < 0)
}

/// Compares two finite numbers. NaN compares as unordered.
#[inline]
pub fn le(a: &BigFloat, b: &BigFloat) -> bool {
    matches!(a.cmp(b), Some(c) if c <= 0)
}

/// Exact `a + b` of two finite numbers.
pub fn exact_add(a: &BigFloat, b: &BigFloat) -> BigFloat {
    // full precision operations lose the other operand when one of them is zero
    if a.is_zero() {
        return b.clone();
    }
    if b.is_zero() {
        return a.clone();
    }
    a.add_full_prec(b)
}

/// Exact `a - b` of two finite numbers.
pub fn exact_sub(a: &BigFloat, b: &BigFloat) -> BigFloat {
    if b.is_zero() {
        return a.clone();
    }
    if a.is_zero() {
        return b.neg();
    }
    a.sub_full_prec(b)
}

/// Exact `a * b` of two finite numbers.
pub fn exact_mul(a: &BigFloat, b: &BigFloat) -> BigFloat {
    if a.is_zero() || b.is_zero() {
        return mag_zero();
    }
    a.mul_full_prec(b)
}
