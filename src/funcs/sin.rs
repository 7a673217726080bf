//! Sine evaluator.

use astro_float::Consts;

use crate::ball::Ball;
use crate::defs::Error;
use crate::eval::Evaluator;

/// Scale `a` of the argument of `sin(a x)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Scale {
    /// `a = 1`.
    Unit,

    /// `a = pi/2`. Zeros are the even integers.
    HalfPi,
}

/// `sin(a x)`. The evaluator context is a constants cache.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Sine {
    scale: Scale,
}

impl Sine {
    /// `sin(x)`.
    pub fn new() -> Self {
        Sine { scale: Scale::Unit }
    }

    /// `sin(pi x / 2)`.
    pub fn half_pi() -> Self {
        Sine {
            scale: Scale::HalfPi,
        }
    }

    /// Returns the scale of the argument.
    pub fn scale(&self) -> Scale {
        self.scale
    }
}

impl Default for Sine {
    fn default() -> Self {
        Self::new()
    }
}

impl Evaluator<Consts> for Sine {
    fn evaluate(&self, out: &mut [Ball], x: &Ball, cc: &mut Consts, p: usize) -> Result<(), Error> {
        if out.is_empty() {
            return Ok(());
        }

        let a = match self.scale {
            Scale::Unit => Ball::one(),
            Scale::HalfPi => Ball::pi(p, cc).div_u64(2, p),
        };
        let t = x.mul(&a, p);

        let s = t.sin(p, cc);
        let c = if out.len() > 1 { t.cos(p, cc) } else { Ball::indeterminate() };

        // k-th coefficient is a^k sin(t + k pi/2) / k!
        let mut scale = Ball::one();
        for (k, v) in out.iter_mut().enumerate() {
            if k > 0 {
                scale = scale.mul(&a, p).div_u64(k as u64, p);
            }

            let d = match k % 4 {
                0 => s.clone(),
                1 => c.clone(),
                2 => s.neg(),
                _ => c.neg(),
            };

            *v = if k > 0 { d.mul(&scale, p) } else { d };
        }

        Ok(())
    }
}
