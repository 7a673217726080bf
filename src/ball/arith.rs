//! Arithmetic operations on balls.
//!
//! Midpoints are computed twice, rounded down and rounded up, and the distance between the
//! two results is charged to the radius of the result.

use astro_float::RoundingMode;

use crate::ball::util::{enclose, mag_add, mag_div, mag_from, mag_from_lower, mag_mul};
use crate::ball::Ball;
use crate::defs::MAG_PREC;

impl Ball {
    /// Adds `d2` to `self` with working precision `p`.
    pub fn add(&self, d2: &Ball, p: usize) -> Ball {
        if !self.is_finite() || !d2.is_finite() {
            return Ball::indeterminate();
        }

        let lo = self.mid().add(d2.mid(), p, RoundingMode::Down);
        let hi = self.mid().add(d2.mid(), p, RoundingMode::Up);
        let (mid, err) = enclose(lo, hi);

        let rad = mag_add(&mag_add(self.rad(), d2.rad()), &err);
        Ball::new(mid, rad)
    }

    /// Subtracts `d2` from `self` with working precision `p`.
    pub fn sub(&self, d2: &Ball, p: usize) -> Ball {
        if !self.is_finite() || !d2.is_finite() {
            return Ball::indeterminate();
        }

        let lo = self.mid().sub(d2.mid(), p, RoundingMode::Down);
        let hi = self.mid().sub(d2.mid(), p, RoundingMode::Up);
        let (mid, err) = enclose(lo, hi);

        let rad = mag_add(&mag_add(self.rad(), d2.rad()), &err);
        Ball::new(mid, rad)
    }

    /// Multiplies `self` by `d2` with working precision `p`.
    pub fn mul(&self, d2: &Ball, p: usize) -> Ball {
        if !self.is_finite() || !d2.is_finite() {
            return Ball::indeterminate();
        }

        let lo = self.mid().mul(d2.mid(), p, RoundingMode::Down);
        let hi = self.mid().mul(d2.mid(), p, RoundingMode::Up);
        let (mid, err) = enclose(lo, hi);

        // |m1| r2 + |m2| r1 + r1 r2
        let m1 = mag_from(self.mid());
        let m2 = mag_from(d2.mid());
        let mut rad = mag_mul(&m1, d2.rad());
        rad = mag_add(&rad, &mag_mul(&m2, self.rad()));
        rad = mag_add(&rad, &mag_mul(self.rad(), d2.rad()));
        rad = mag_add(&rad, &err);

        Ball::new(mid, rad)
    }

    /// Divides `self` by `d2` with working precision `p`.
    /// The result is indeterminate if `d2` contains zero.
    pub fn div(&self, d2: &Ball, p: usize) -> Ball {
        if !self.is_finite() || !d2.is_finite() || d2.contains_zero() {
            return Ball::indeterminate();
        }

        let lo = self.mid().div(d2.mid(), p, RoundingMode::Down);
        let hi = self.mid().div(d2.mid(), p, RoundingMode::Up);
        let (mid, err) = enclose(lo, hi);

        if d2.is_exact() && self.is_exact() {
            return Ball::new(mid, err);
        }

        // (|m1| r2 + |m2| r1) / (|m2| (|m2| - r2))
        let m1 = mag_from(self.mid());
        let m2 = mag_from(d2.mid());
        let num = mag_add(&mag_mul(&m1, d2.rad()), &mag_mul(&m2, self.rad()));

        let m2_lower = mag_from_lower(d2.mid());
        let gap = m2_lower.sub(d2.rad(), MAG_PREC, RoundingMode::Down);
        if !gap.is_positive() || gap.is_zero() {
            return Ball::indeterminate();
        }
        let den = m2_lower.mul(&gap, MAG_PREC, RoundingMode::Down);

        let rad = mag_add(&mag_div(&num, &den), &err);
        Ball::new(mid, rad)
    }

    /// Returns `-self`.
    pub fn neg(&self) -> Ball {
        if !self.is_finite() {
            return Ball::indeterminate();
        }
        Ball::new(self.mid().neg(), self.rad().clone())
    }

    /// Divides `self` by an exact nonzero integer with working precision `p`.
    pub fn div_u64(&self, u: u64, p: usize) -> Ball {
        self.div(&Ball::from_u64(u), p)
    }
}
