//! The supported equation families and the capabilities they share.

use std::fmt;

use num::complex::Complex64;

use crate::{
    roots::{bisection, newton},
    util::doc_macros::{errors_bisection, errors_newton},
    Error, Result, LEADING_COEFFICIENT_THRESHOLD,
};

mod biquadratic;
pub use biquadratic::Biquadratic;
mod cubic;
pub use cubic::Cubic;
mod quadratic;
pub use quadratic::Quadratic;

/// Tag identifying an equation family
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Family {
    Quadratic,
    Cubic,
    Biquadratic,
}

impl Family {
    /// Degree of the polynomials in this family
    #[must_use]
    pub const fn degree(self) -> usize {
        match self {
            Self::Quadratic => 2,
            Self::Cubic => 3,
            Self::Biquadratic => 4,
        }
    }
}

impl fmt::Display for Family {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Quadratic => "quadratic",
            Self::Cubic => "cubic",
            Self::Biquadratic => "biquadratic",
        };
        f.write_str(name)
    }
}

/// Rejects leading coefficients that would be divided by in closed form.
fn check_leading_coefficient(family: Family, a: f64) -> Result<()> {
    if a.abs() < LEADING_COEFFICIENT_THRESHOLD {
        return Err(match family {
            Family::Cubic => Error::NotACubic,
            family => Error::DegenerateLeadingCoefficient(family),
        });
    }
    Ok(())
}

/// Capabilities every equation family provides.
///
/// Implementors only need to know how to evaluate themselves and how to
/// solve in closed form; the iterative strategies are provided on top of
/// [`Polynomial::eval`], [`Polynomial::derivative`] and
/// [`Polynomial::eval_real`].
pub trait Polynomial {
    fn family(&self) -> Family;

    /// Coefficients of the terms present in this family, highest degree first
    fn coefficients(&self) -> Vec<f64>;

    fn degree(&self) -> usize {
        self.family().degree()
    }

    /// Evaluate the polynomial at a complex point
    fn eval(&self, z: Complex64) -> Complex64;

    /// Evaluate the first derivative at a complex point
    fn derivative(&self, z: Complex64) -> Complex64;

    /// Evaluate the polynomial at a real point
    fn eval_real(&self, x: f64) -> f64;

    /// All roots in closed form, as many as the degree (counted with
    /// multiplicity).
    ///
    /// # Errors
    /// When the leading coefficient is (almost) zero.
    fn solve_algebraically(&self) -> Result<Vec<Complex64>>;

    /// A single root with Newton's method, see [`crate::roots::newton`].
    ///
    /// # Errors
    #[doc = errors_newton!()]
    fn solve_with_newton(
        &self,
        initial_guess: Complex64,
        epsilon: f64,
        max_iter: Option<usize>,
    ) -> Result<(Complex64, usize)> {
        newton(
            |z| self.eval(z),
            |z| self.derivative(z),
            initial_guess,
            epsilon,
            max_iter,
        )
    }

    /// A single real root with bisection, see [`crate::roots::bisection`].
    ///
    /// # Errors
    #[doc = errors_bisection!()]
    fn solve_with_bisection(
        &self,
        left: f64,
        right: f64,
        epsilon: f64,
        max_iter: Option<usize>,
    ) -> Result<(Complex64, usize)> {
        bisection(|x| self.eval_real(x), left, right, epsilon, max_iter)
    }
}

/// Any of the supported equations.
///
/// ```
/// use low_poly::{Cubic, Equation, Polynomial};
///
/// let eq = Equation::from(Cubic::new(1.0, 0.0, -1.0, -2.0));
/// assert_eq!(eq.degree(), 3);
/// assert_eq!(eq.to_string(), "x^3 - x - 2");
/// ```
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Equation {
    Quadratic(Quadratic),
    Cubic(Cubic),
    Biquadratic(Biquadratic),
}

impl Polynomial for Equation {
    fn family(&self) -> Family {
        match self {
            Self::Quadratic(p) => p.family(),
            Self::Cubic(p) => p.family(),
            Self::Biquadratic(p) => p.family(),
        }
    }

    fn coefficients(&self) -> Vec<f64> {
        match self {
            Self::Quadratic(p) => p.coefficients(),
            Self::Cubic(p) => p.coefficients(),
            Self::Biquadratic(p) => p.coefficients(),
        }
    }

    fn eval(&self, z: Complex64) -> Complex64 {
        match self {
            Self::Quadratic(p) => p.eval(z),
            Self::Cubic(p) => p.eval(z),
            Self::Biquadratic(p) => p.eval(z),
        }
    }

    fn derivative(&self, z: Complex64) -> Complex64 {
        match self {
            Self::Quadratic(p) => p.derivative(z),
            Self::Cubic(p) => p.derivative(z),
            Self::Biquadratic(p) => p.derivative(z),
        }
    }

    fn eval_real(&self, x: f64) -> f64 {
        match self {
            Self::Quadratic(p) => p.eval_real(x),
            Self::Cubic(p) => p.eval_real(x),
            Self::Biquadratic(p) => p.eval_real(x),
        }
    }

    fn solve_algebraically(&self) -> Result<Vec<Complex64>> {
        match self {
            Self::Quadratic(p) => p.solve_algebraically(),
            Self::Cubic(p) => p.solve_algebraically(),
            Self::Biquadratic(p) => p.solve_algebraically(),
        }
    }
}

impl Equation {
    const fn leading_coefficient(&self) -> f64 {
        match self {
            Self::Quadratic(p) => p.a,
            Self::Cubic(p) => p.a,
            Self::Biquadratic(p) => p.a,
        }
    }

    /// The error [`Polynomial::solve_algebraically`] would report for a
    /// vanishing leading coefficient, without solving anything.
    pub(crate) fn check_degenerate(&self) -> Result<()> {
        check_leading_coefficient(self.family(), self.leading_coefficient())
    }

    /// Closed-form roots, assuming [`Equation::check_degenerate`] passed.
    pub(crate) fn closed_form(&self) -> Vec<Complex64> {
        match self {
            Self::Quadratic(p) => p.closed_form(),
            Self::Cubic(p) => p.closed_form(),
            Self::Biquadratic(p) => p.closed_form(),
        }
    }
}

impl From<Quadratic> for Equation {
    fn from(value: Quadratic) -> Self {
        Self::Quadratic(value)
    }
}

impl From<Cubic> for Equation {
    fn from(value: Cubic) -> Self {
        Self::Cubic(value)
    }
}

impl From<Biquadratic> for Equation {
    fn from(value: Biquadratic) -> Self {
        Self::Biquadratic(value)
    }
}

impl fmt::Display for Equation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Quadratic(p) => fmt::Display::fmt(p, f),
            Self::Cubic(p) => fmt::Display::fmt(p, f),
            Self::Biquadratic(p) => fmt::Display::fmt(p, f),
        }
    }
}

/// Write `terms` (pairs of coefficient and exponent, highest degree first)
/// in the usual `ax^n + bx + c` notation, skipping zero terms.
#[allow(clippy::float_cmp)]
fn fmt_terms(f: &mut fmt::Formatter<'_>, terms: &[(f64, u32)]) -> fmt::Result {
    let mut first = true;
    for &(coeff, exp) in terms {
        if coeff == 0.0 {
            continue;
        }
        let magnitude = coeff.abs();
        if first {
            if coeff < 0.0 {
                f.write_str("-")?;
            }
        } else if coeff < 0.0 {
            f.write_str(" - ")?;
        } else {
            f.write_str(" + ")?;
        }
        first = false;

        let unit = magnitude == 1.0 && exp > 0;
        if !unit {
            write!(f, "{magnitude}")?;
        }
        match exp {
            0 => {}
            1 => f.write_str("x")?,
            _ => write!(f, "x^{exp}")?,
        }
    }
    if first {
        f.write_str("0")?;
    }
    Ok(())
}
