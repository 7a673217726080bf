//! Ball: a midpoint and a radius enclosing a real number.

use core::fmt::Display;

use astro_float::{BigFloat, INF_NEG, INF_POS, WORD_BIT_SIZE};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::ball::util::{
    abs_bound_lt_2exp, exact_add, exact_mul, exact_sub, is_finite, le, lt, mag_add, mag_from,
    mag_mul, mag_zero,
};
use crate::defs::{MAG_PREC, PREC_EXACT};

/// A real number `v` represented by the interval `[mid - rad, mid + rad]` containing it.
///
/// The midpoint has arbitrary precision. The radius has precision `MAG_PREC` and is always
/// rounded upwards. Balls are values: every operation produces a new ball.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "RawBall"))]
pub struct Ball {
    mid: BigFloat,
    rad: BigFloat,
}

impl Ball {
    /// Creates a ball from a midpoint and a radius. The radius is replaced by an upper bound
    /// of its absolute value with precision `MAG_PREC`.
    ///
    /// A NaN midpoint is kept, with infinite radius, so that the error it carries can be
    /// inspected. An infinite midpoint gives the indeterminate ball.
    pub fn new(mid: BigFloat, rad: BigFloat) -> Self {
        if mid.is_nan() {
            return Ball { mid, rad: INF_POS };
        }
        if mid.is_inf() {
            return Self::indeterminate();
        }
        Ball {
            mid,
            rad: mag_from(&rad),
        }
    }

    /// Ball with zero radius.
    pub fn exact(mid: BigFloat) -> Self {
        Self::new(mid, mag_zero())
    }

    /// Ball enclosing every real number.
    pub fn indeterminate() -> Self {
        Ball {
            mid: BigFloat::new(MAG_PREC),
            rad: INF_POS,
        }
    }

    /// Zero.
    pub fn zero() -> Self {
        Self::exact(BigFloat::new(WORD_BIT_SIZE))
    }

    /// One.
    pub fn one() -> Self {
        Self::exact(BigFloat::from_word(1, WORD_BIT_SIZE))
    }

    /// Exact ball from an `f64`.
    pub fn from_f64(f: f64) -> Self {
        Self::exact(BigFloat::from_f64(f, WORD_BIT_SIZE))
    }

    /// Exact ball from an `i64`.
    pub fn from_i64(i: i64) -> Self {
        Self::exact(BigFloat::from_i64(i, WORD_BIT_SIZE))
    }

    /// Exact ball from a `u64`.
    pub fn from_u64(u: u64) -> Self {
        Self::exact(BigFloat::from_u64(u, WORD_BIT_SIZE))
    }

    /// Smallest ball containing the interval `[a, b]`. The midpoint is exact.
    /// If `a > b`, the endpoints are swapped.
    pub fn from_endpoints(a: &BigFloat, b: &BigFloat) -> Self {
        if !is_finite(a) || !is_finite(b) {
            return Self::indeterminate();
        }

        let half = half();
        let mid = exact_mul(&exact_add(a, b), &half);
        let rad = exact_mul(&exact_sub(b, a), &half);

        Self::new(mid, rad)
    }

    /// Returns the midpoint.
    pub fn mid(&self) -> &BigFloat {
        &self.mid
    }

    /// Returns the radius.
    pub fn rad(&self) -> &BigFloat {
        &self.rad
    }

    /// The midpoint as a ball with zero radius.
    pub fn mid_ball(&self) -> Self {
        Ball {
            mid: self.mid.clone(),
            rad: mag_zero(),
        }
    }

    /// Returns true if both the midpoint and the radius are finite.
    pub fn is_finite(&self) -> bool {
        is_finite(&self.mid) && is_finite(&self.rad)
    }

    /// Returns true if the radius is zero.
    pub fn is_exact(&self) -> bool {
        self.rad.is_zero()
    }

    /// Returns true if every point of the ball is strictly positive.
    pub fn is_positive(&self) -> bool {
        self.is_finite() && lt(&self.rad, &self.mid)
    }

    /// Returns true if every point of the ball is strictly negative.
    pub fn is_negative(&self) -> bool {
        self.is_finite() && lt(&self.rad, &self.mid.neg())
    }

    /// Returns true if the ball may contain zero.
    pub fn contains_zero(&self) -> bool {
        !self.is_finite() || le(&self.mid.abs(), &self.rad)
    }

    /// Sign of the enclosed number: 1 or -1 when certain, and 0 when the ball contains zero.
    pub fn sign(&self) -> i8 {
        if self.is_positive() {
            1
        } else if self.is_negative() {
            -1
        } else {
            0
        }
    }

    /// Exact lower endpoint.
    pub fn lower(&self) -> BigFloat {
        if !self.is_finite() {
            return INF_NEG;
        }
        exact_sub(&self.mid, &self.rad)
    }

    /// Exact upper endpoint.
    pub fn upper(&self) -> BigFloat {
        if !self.is_finite() {
            return INF_POS;
        }
        exact_add(&self.mid, &self.rad)
    }

    /// Returns true if `other` is a subset of `self`.
    pub fn contains(&self, other: &Ball) -> bool {
        if !is_finite(&self.mid) || self.rad.is_nan() {
            return false;
        }
        if self.rad.is_inf() {
            return true;
        }
        if !other.is_finite() {
            return false;
        }

        // |mid - other.mid| + other.rad <= rad, computed exactly
        let d = exact_sub(&self.mid, &other.mid).abs();
        let slack = exact_sub(&self.rad, &other.rad);
        le(&d, &slack)
    }

    /// Returns true if `x` lies in the ball.
    pub fn contains_point(&self, x: &BigFloat) -> bool {
        self.contains(&Ball::exact(x.clone()))
    }

    /// Returns true if `self` and `other` have a common point.
    pub fn overlaps(&self, other: &Ball) -> bool {
        if !self.is_finite() || !other.is_finite() {
            return true;
        }
        let d = exact_sub(&self.mid, &other.mid).abs();
        let r = exact_add(&self.rad, &other.rad);
        le(&d, &r)
    }

    /// Upper bound of the absolute value of every point of the ball.
    pub fn abs_ubound(&self) -> BigFloat {
        if !self.is_finite() {
            return INF_POS;
        }
        mag_add(&mag_from(&self.mid), &self.rad)
    }

    /// Adds `err` to the radius.
    pub fn add_error(&mut self, err: &BigFloat) {
        self.rad = mag_add(&self.rad, &mag_from(err));
    }

    /// Relative accuracy in bits: `exponent(mid) - exponent(rad) - 1`.
    ///
    /// Exact balls give `PREC_EXACT`. Balls with zero or non-finite midpoint, or with
    /// infinite radius, give `-PREC_EXACT`.
    pub fn rel_accuracy_bits(&self) -> i64 {
        if !self.is_finite() {
            return -PREC_EXACT;
        }
        if self.rad.is_zero() {
            return PREC_EXACT;
        }
        if self.mid.is_zero() {
            return -PREC_EXACT;
        }
        abs_bound_lt_2exp(&self.mid) - abs_bound_lt_2exp(&self.rad) - 1
    }

    /// Splits the ball into the left and right halves. Both halves are exact: their radius is
    /// half of the radius of `self`, and their midpoints are `mid -/+ rad/2`.
    pub fn bisect(&self) -> (Ball, Ball) {
        if !self.is_finite() {
            return (self.clone(), self.clone());
        }

        let r = exact_mul(&self.rad, &half());
        let l = Ball {
            mid: exact_sub(&self.mid, &r),
            rad: r.clone(),
        };
        let u = Ball {
            mid: exact_add(&self.mid, &r),
            rad: r,
        };

        (l, u)
    }

    /// `rad^2 * factor`, the remainder of a Newton step started from `self`.
    pub(crate) fn newton_remainder(&self, factor: &BigFloat) -> BigFloat {
        mag_mul(&mag_mul(&self.rad, &self.rad), factor)
    }
}

#[inline]
fn half() -> BigFloat {
    BigFloat::from_f64(0.5, WORD_BIT_SIZE)
}

impl Display for Ball {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "[{} +/- {}]", self.mid, self.rad)
    }
}

// Deserialized form of a ball, validated before it becomes one.
#[cfg(feature = "serde")]
#[derive(Deserialize)]
struct RawBall {
    mid: BigFloat,
    rad: BigFloat,
}

#[cfg(feature = "serde")]
impl TryFrom<RawBall> for Ball {
    type Error = crate::defs::Error;

    fn try_from(raw: RawBall) -> Result<Self, Self::Error> {
        if raw.rad.is_nan() || (raw.rad.is_negative() && !raw.rad.is_zero()) {
            return Err(crate::defs::Error::InvalidRadius);
        }
        Ok(Ball::new(raw.mid, raw.rad))
    }
}

impl From<BigFloat> for Ball {
    fn from(mid: BigFloat) -> Self {
        Ball::exact(mid)
    }
}
