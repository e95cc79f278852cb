use std::time::{Duration, Instant};

use itertools::Itertools;
use num::complex::Complex64;

use crate::{
    format_complex,
    util::doc_macros::{errors_bisection, errors_degenerate, errors_newton},
    Equation, Polynomial, Result,
};

/// Solving strategy, together with the parameters it needs.
///
/// `max_iter` falls back to [`crate::DEFAULT_MAX_ITER`] when `None`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Method {
    /// Closed-form roots, all of them
    Algebraic,

    /// A single root with Newton's method
    Newton {
        initial_guess: Complex64,
        epsilon: f64,
        max_iter: Option<usize>,
    },

    /// A single real root with bisection
    Bisection {
        left: f64,
        right: f64,
        epsilon: f64,
        max_iter: Option<usize>,
    },
}

impl Method {
    /// Newton's method with the default iteration budget
    #[must_use]
    pub const fn newton(initial_guess: Complex64, epsilon: f64) -> Self {
        Self::Newton {
            initial_guess,
            epsilon,
            max_iter: None,
        }
    }

    /// Bisection with the default iteration budget
    #[must_use]
    pub const fn bisection(left: f64, right: f64, epsilon: f64) -> Self {
        Self::Bisection {
            left,
            right,
            epsilon,
            max_iter: None,
        }
    }

    #[must_use]
    pub const fn is_iterative(&self) -> bool {
        !matches!(self, Self::Algebraic)
    }
}

/// Outcome of a successful solve.
#[derive(Clone, Debug, PartialEq)]
pub struct Solution {
    /// All roots for [`Method::Algebraic`], a single root otherwise
    pub roots: Vec<Complex64>,

    /// Iterations used, always 0 for [`Method::Algebraic`]
    pub iterations: usize,

    /// Wall time spent inside the algorithm, input checks excluded.
    /// Diagnostic only.
    pub elapsed: Duration,
}

impl Solution {
    /// `|f(root)|` for every root
    #[must_use]
    pub fn residuals(&self, poly: &impl Polynomial) -> Vec<f64> {
        self.roots.iter().map(|&z| poly.eval(z).norm()).collect_vec()
    }

    /// Human readable summary: one `xN = ...` line per root, followed by the
    /// iteration count for iterative methods and the elapsed time.
    ///
    /// ```
    /// use low_poly::{Equation, Method, Quadratic};
    ///
    /// let solution = Equation::from(Quadratic::new(1.0, 0.0, 1.0))
    ///     .solve(&Method::Algebraic)
    ///     .unwrap();
    /// let report = solution.report(3, false);
    /// assert!(report.starts_with("x1 = 1.000i\nx2 = -1.000i\nElapsed: "));
    /// ```
    #[must_use]
    pub fn report(&self, decimal_places: usize, show_iterations: bool) -> String {
        let mut lines = self
            .roots
            .iter()
            .enumerate()
            .map(|(i, &z)| format!("x{} = {}", i + 1, format_complex(z, decimal_places)))
            .collect_vec();
        if show_iterations {
            lines.push(format!("Iterations: {}", self.iterations));
        }
        lines.push(format!("Elapsed: {:?}", self.elapsed));
        lines.join("\n")
    }
}

impl Equation {
    /// Solve with the given strategy, timing only the algorithm itself.
    ///
    /// # Errors
    /// Algebraic:
    #[doc = errors_degenerate!()]
    /// - [`Error::NotACubic`](crate::Error::NotACubic) for cubics.
    ///
    /// Newton:
    #[doc = errors_newton!()]
    ///
    /// Bisection:
    #[doc = errors_bisection!()]
    ///
    /// # Examples
    ///
    /// ```
    /// use low_poly::{complex, Equation, Method, Quadratic};
    ///
    /// let eq = Equation::from(Quadratic::new(1.0, 0.0, -2.0));
    /// let solution = eq.solve(&Method::newton(complex!(1.5), 1E-10)).unwrap();
    /// assert!((solution.roots[0].re - std::f64::consts::SQRT_2).abs() < 1E-10);
    /// assert!(solution.iterations > 0);
    /// ```
    pub fn solve(&self, method: &Method) -> Result<Solution> {
        log::debug!("solving {{equation: \"{self}\", method: \"{method:?}\"}}");

        if matches!(method, Method::Algebraic) {
            self.check_degenerate()?;
        }

        let start = Instant::now();
        let (roots, iterations) = match *method {
            Method::Algebraic => (self.closed_form(), 0),
            Method::Newton {
                initial_guess,
                epsilon,
                max_iter,
            } => {
                let (root, iterations) = self.solve_with_newton(initial_guess, epsilon, max_iter)?;
                (vec![root], iterations)
            }
            Method::Bisection {
                left,
                right,
                epsilon,
                max_iter,
            } => {
                let (root, iterations) =
                    self.solve_with_bisection(left, right, epsilon, max_iter)?;
                (vec![root], iterations)
            }
        };
        let elapsed = start.elapsed();

        log::debug!("solved {{roots: {roots:?}, iterations: {iterations}, elapsed: {elapsed:?}}}");
        Ok(Solution {
            roots,
            iterations,
            elapsed,
        })
    }
}
