//! Polynomial evaluator.

use crate::ball::Ball;
use crate::defs::Error;
use crate::eval::Evaluator;

/// Polynomial with ball coefficients, in ascending order of degree.
#[derive(Debug, Clone, PartialEq)]
pub struct Polynomial {
    coeffs: Vec<Ball>,
}

impl Polynomial {
    /// Creates a polynomial `c[0] + c[1] x + c[2] x^2 + ...`.
    pub fn new(coeffs: Vec<Ball>) -> Self {
        Polynomial { coeffs }
    }

    /// Polynomial with exact integer coefficients in ascending order.
    pub fn from_i64(coeffs: &[i64]) -> Self {
        Self::new(coeffs.iter().map(|c| Ball::from_i64(*c)).collect())
    }

    /// Returns the coefficients.
    pub fn coeffs(&self) -> &[Ball] {
        &self.coeffs
    }

    /// Degree of the polynomial, or `None` for an empty coefficient list.
    pub fn degree(&self) -> Option<usize> {
        self.coeffs.len().checked_sub(1)
    }
}

impl<C: ?Sized> Evaluator<C> for Polynomial {
    // Taylor shift to x by repeated synthetic division: the remainder of dividing by (t - x)
    // is the next coefficient, and the quotient is carried over.
    fn evaluate(&self, out: &mut [Ball], x: &Ball, _ctx: &mut C, p: usize) -> Result<(), Error> {
        let mut coeffs = self.coeffs.clone();

        for v in out.iter_mut() {
            let Some(lead) = coeffs.last() else {
                *v = Ball::zero();
                continue;
            };

            let mut acc = lead.clone();
            let mut quot = Vec::with_capacity(coeffs.len() - 1);
            for c in coeffs.iter().rev().skip(1) {
                quot.push(acc.clone());
                acc = acc.mul(x, p).add(c, p);
            }
            quot.reverse();

            *v = acc;
            coeffs = quot;
        }

        Ok(())
    }
}
