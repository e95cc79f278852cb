use std::fmt;

use num::complex::Complex64;

use super::{check_leading_coefficient, fmt_terms, Family, Polynomial, Quadratic};
use crate::{util::doc_macros::errors_degenerate, Result};

/// `ax^4 + bx^2 + c`
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Biquadratic {
    pub a: f64,
    pub b: f64,
    pub c: f64,
}

impl Biquadratic {
    #[must_use]
    pub const fn new(a: f64, b: f64, c: f64) -> Self {
        Self { a, b, c }
    }

    /// The quadratic `ay^2 + by + c` obtained by substituting `y = x^2`
    #[must_use]
    pub const fn resolvent(&self) -> Quadratic {
        Quadratic::new(self.a, self.b, self.c)
    }

    /// `[√y1, -√y1, √y2, -√y2]` for the resolvent roots `y1, y2`. `a` must
    /// not be zero.
    pub(crate) fn closed_form(&self) -> Vec<Complex64> {
        let ys = self.resolvent().closed_form();
        log::trace!("resolvent roots {{y1: \"{}\", y2: \"{}\"}}", ys[0], ys[1]);

        ys.into_iter()
            .flat_map(|y| {
                let x = y.sqrt();
                [x, -x]
            })
            .collect()
    }
}

impl Polynomial for Biquadratic {
    fn family(&self) -> Family {
        Family::Biquadratic
    }

    fn coefficients(&self) -> Vec<f64> {
        vec![self.a, self.b, self.c]
    }

    fn eval(&self, z: Complex64) -> Complex64 {
        let z2 = z * z;
        (z2 * self.a + self.b) * z2 + self.c
    }

    fn derivative(&self, z: Complex64) -> Complex64 {
        let z2 = z * z;
        (z2 * (4.0 * self.a) + 2.0 * self.b) * z
    }

    fn eval_real(&self, x: f64) -> f64 {
        let x2 = x * x;
        self.a.mul_add(x2, self.b).mul_add(x2, self.c)
    }

    /// Solves the resolvent quadratic for `y = x^2`, then takes both square
    /// roots of each `y`.
    ///
    /// Returns `[√y1, -√y1, √y2, -√y2]` with principal square roots, so the
    /// roots always come in `±` pairs.
    ///
    /// # Errors
    #[doc = errors_degenerate!()]
    ///
    /// # Examples
    ///
    /// ```
    /// use low_poly::{complex, Biquadratic, Polynomial};
    ///
    /// // (x^2 - 1)(x^2 - 4)
    /// let roots = Biquadratic::new(1.0, -5.0, 4.0).solve_algebraically().unwrap();
    /// assert_eq!(roots, vec![complex!(2.0), complex!(-2.0), complex!(1.0), complex!(-1.0)]);
    /// ```
    fn solve_algebraically(&self) -> Result<Vec<Complex64>> {
        check_leading_coefficient(Family::Biquadratic, self.a)?;
        Ok(self.closed_form())
    }
}

impl fmt::Display for Biquadratic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt_terms(f, &[(self.a, 4), (self.b, 2), (self.c, 0)])
    }
}

#[cfg(test)]
mod test {
    use super::Biquadratic;
    use crate::{
        Error, Family, Polynomial,
        __testing::{check_roots, max_relative_residual},
    };

    #[test]
    fn four_real_roots() {
        let p = Biquadratic::new(1.0, -5.0, 4.0);
        let roots = p.solve_algebraically().unwrap();
        assert!(check_roots(
            roots,
            vec![complex!(1.0), complex!(-1.0), complex!(2.0), complex!(-2.0)],
            1E-12
        ));
    }

    #[test]
    fn purely_imaginary_roots() {
        // (x^2 + 1)(x^2 + 9)
        let p = Biquadratic::new(1.0, 10.0, 9.0);
        let roots = p.solve_algebraically().unwrap();
        assert!(check_roots(
            roots,
            vec![
                complex!(0.0, 1.0),
                complex!(0.0, -1.0),
                complex!(0.0, 3.0),
                complex!(0.0, -3.0)
            ],
            1E-12
        ));
    }

    #[test]
    fn complex_resolvent_roots() {
        // x^4 + 1, roots are the primitive 8th roots of unity
        let p = Biquadratic::new(1.0, 0.0, 1.0);
        let roots = p.solve_algebraically().unwrap();
        let s = std::f64::consts::FRAC_1_SQRT_2;
        assert!(check_roots(
            roots.clone(),
            vec![
                complex!(s, s),
                complex!(-s, s),
                complex!(s, -s),
                complex!(-s, -s)
            ],
            1E-12
        ));
        for root in roots {
            assert!(p.eval(root).norm() < 1E-12);
        }
    }

    #[test]
    fn pairs() {
        let p = Biquadratic::new(-3.0, 2.0, 7.5);
        let roots = p.solve_algebraically().unwrap();
        assert_eq!(roots.len(), 4);
        assert_eq!(roots[0], -roots[1]);
        assert_eq!(roots[2], -roots[3]);
    }

    #[test]
    fn widely_spread_roots() {
        // resolvent roots near -1E-4 and -1E4
        let p = Biquadratic::new(1.0, 1E4, 1.0);
        let roots = p.solve_algebraically().unwrap();
        assert!(max_relative_residual(&p, &roots) < 1E-14, "{roots:?}");
        // y1·y2 = c/a
        assert!(((roots[0] * roots[2]).powu(2) - complex!(1.0)).norm() < 1E-12);
        assert!(p.eval(roots[0]).norm() < 1E-12);
    }

    #[test]
    fn degenerate() {
        assert_eq!(
            Biquadratic::new(0.0, 1.0, -1.0).solve_algebraically(),
            Err(Error::DegenerateLeadingCoefficient(Family::Biquadratic))
        );
    }

    #[test]
    fn derivative() {
        let p = Biquadratic::new(2.0, -1.0, 3.0);
        // 8x^3 - 2x at x = i
        assert_eq!(p.derivative(complex!(0.0, 1.0)), complex!(0.0, -10.0));
        assert_eq!(p.eval_real(2.0), 31.0);
    }

    #[test]
    fn iterative() {
        let p = Biquadratic::new(1.0, -5.0, 4.0);
        let (root, _) = p.solve_with_newton(complex!(2.5), 1E-12, None).unwrap();
        assert!((root - complex!(2.0)).norm() < 1E-12);
        let (root, _) = p.solve_with_bisection(1.5, 3.0, 1E-10, None).unwrap();
        assert!((root.re - 2.0).abs() < 1E-9);
        // x = 0 is a critical point
        assert_eq!(
            p.solve_with_newton(complex!(0.0), 1E-12, None),
            Err(Error::DerivativeTooSmall { iteration: 1 })
        );
    }
}
