//! Elementary functions and constants on balls.

use astro_float::{BigFloat, Consts, RoundingMode, WORD_BIT_SIZE};

use crate::ball::util::{enclose, le, mag_add};
use crate::ball::Ball;

impl Ball {
    /// Encloses pi with precision `p`.
    pub fn pi(p: usize, cc: &mut Consts) -> Ball {
        let lo = cc.pi(p, RoundingMode::Down);
        let hi = cc.pi(p, RoundingMode::Up);
        let (mid, err) = enclose(lo, hi);
        Ball::new(mid, err)
    }

    /// Encloses the sine of every point of the ball with working precision `p`.
    pub fn sin(&self, p: usize, cc: &mut Consts) -> Ball {
        if self.is_unbounded_angle() {
            return unit_ball();
        }

        let lo = self.mid().sin(p, RoundingMode::Down, cc);
        let hi = self.mid().sin(p, RoundingMode::Up, cc);
        lipschitz_enclosure(lo, hi, self.rad())
    }

    /// Encloses the cosine of every point of the ball with working precision `p`.
    pub fn cos(&self, p: usize, cc: &mut Consts) -> Ball {
        if self.is_unbounded_angle() {
            return unit_ball();
        }

        let lo = self.mid().cos(p, RoundingMode::Down, cc);
        let hi = self.mid().cos(p, RoundingMode::Up, cc);
        lipschitz_enclosure(lo, hi, self.rad())
    }

    // The radius covers at least one half-period, or the ball is not finite.
    fn is_unbounded_angle(&self) -> bool {
        !self.is_finite() || le(&BigFloat::from_word(2, WORD_BIT_SIZE), self.rad())
    }
}

// [-1, 1]
fn unit_ball() -> Ball {
    Ball::new(BigFloat::new(WORD_BIT_SIZE), BigFloat::from_word(1, WORD_BIT_SIZE))
}

// Value at the midpoint bracketed by [lo, hi], plus rad for a function with Lipschitz constant 1.
fn lipschitz_enclosure(lo: BigFloat, hi: BigFloat, rad: &BigFloat) -> Ball {
    let (mid, err) = enclose(lo, hi);
    Ball::new(mid, mag_add(&err, rad))
}
