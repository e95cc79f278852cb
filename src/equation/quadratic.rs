use std::fmt;

use num::complex::Complex64;

use super::{check_leading_coefficient, fmt_terms, Family, Polynomial};
use crate::{util::doc_macros::errors_degenerate, Result};

/// `ax^2 + bx + c`
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Quadratic {
    pub a: f64,
    pub b: f64,
    pub c: f64,
}

impl Quadratic {
    #[must_use]
    pub const fn new(a: f64, b: f64, c: f64) -> Self {
        Self { a, b, c }
    }

    /// `b^2 - 4ac`
    #[must_use]
    pub fn discriminant(&self) -> f64 {
        self.b.mul_add(self.b, -4.0 * self.a * self.c)
    }

    /// Roots in `[(-b + √D) / 2a, (-b - √D) / 2a]` order. `a` must not be zero.
    ///
    /// With a non-negative discriminant the root of larger magnitude comes
    /// from `q = -(b + sign(b)·√D) / 2` and the other one from `c / q`, so
    /// neither is computed as a difference of nearly equal numbers.
    pub(crate) fn closed_form(&self) -> Vec<Complex64> {
        let Self { a, b, c } = *self;
        let discriminant = self.discriminant();

        if discriminant < 0.0 {
            let plus_minus_term = Complex64::new(discriminant, 0.0).sqrt();
            let two_a = 2.0 * a;
            return vec![(plus_minus_term - b) / two_a, (-plus_minus_term - b) / two_a];
        }

        let q = -0.5 * b.signum().mul_add(discriminant.sqrt(), b);
        if q == 0.0 {
            // b = 0 and D = 0
            return vec![Complex64::new(0.0, 0.0); 2];
        }
        let (large, small) = (Complex64::new(q / a, 0.0), Complex64::new(c / q, 0.0));
        if b.is_sign_negative() {
            vec![large, small]
        } else {
            vec![small, large]
        }
    }
}

impl Polynomial for Quadratic {
    fn family(&self) -> Family {
        Family::Quadratic
    }

    fn coefficients(&self) -> Vec<f64> {
        vec![self.a, self.b, self.c]
    }

    fn eval(&self, z: Complex64) -> Complex64 {
        z * z * self.a + z * self.b + self.c
    }

    fn derivative(&self, z: Complex64) -> Complex64 {
        z * (2.0 * self.a) + self.b
    }

    fn eval_real(&self, x: f64) -> f64 {
        self.a.mul_add(x, self.b).mul_add(x, self.c)
    }

    /// Quadratic formula with a complex discriminant, so negative
    /// discriminants give a conjugate pair. Real roots are computed in the
    /// form that avoids cancellation when `b^2` dwarfs `4ac`.
    ///
    /// Returns `[(-b + √D) / 2a, (-b - √D) / 2a]` using the principal square
    /// root. A double root is returned twice.
    ///
    /// # Errors
    #[doc = errors_degenerate!()]
    ///
    /// # Examples
    ///
    /// ```
    /// use low_poly::{complex, Polynomial, Quadratic};
    ///
    /// let roots = Quadratic::new(1.0, 0.0, 1.0).solve_algebraically().unwrap();
    /// assert_eq!(roots, vec![complex!(0.0, 1.0), complex!(0.0, -1.0)]);
    /// ```
    fn solve_algebraically(&self) -> Result<Vec<Complex64>> {
        check_leading_coefficient(Family::Quadratic, self.a)?;
        Ok(self.closed_form())
    }
}

impl fmt::Display for Quadratic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt_terms(f, &[(self.a, 2), (self.b, 1), (self.c, 0)])
    }
}
