//! Root finders for low-degree real polynomials over the complex field.
//!
//! Three equation families are supported: quadratic (`ax^2 + bx + c`),
//! cubic (`ax^3 + bx^2 + cx + d`) and biquadratic (`ax^4 + bx^2 + c`). Each
//! one can be solved in closed form, with Newton's method or with bisection.
//!
//! ```
//! use low_poly::{Equation, Method, Quadratic};
//!
//! let eq = Equation::from(Quadratic::new(1.0, -3.0, 2.0));
//! let solution = eq.solve(&Method::Algebraic).unwrap();
//! assert_eq!(solution.roots.len(), 2);
//! assert_eq!(solution.iterations, 0);
//! ```
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![allow(clippy::many_single_char_names)]

pub use num;

/// Shorthand for building a [`num::complex::Complex64`], mostly useful in tests.
///
/// ```
/// # use low_poly::complex;
/// use num::complex::Complex64;
///
/// assert_eq!(complex!(1.0), Complex64::new(1.0, 0.0));
/// assert_eq!(complex!(1.0, 2.0), Complex64::new(1.0, 2.0));
/// ```
#[macro_export]
macro_rules! complex {
    ($re:expr) => {
        $crate::num::complex::Complex64::new($re, 0.0)
    };
    ($re:expr, $im:expr) => {
        $crate::num::complex::Complex64::new($re, $im)
    };
}

mod error;
pub use error::{Error, Result};

pub mod equation;
pub use equation::{Biquadratic, Cubic, Equation, Family, Polynomial, Quadratic};

pub mod roots;

mod solution;
pub use solution::{Method, Solution};

mod util;
#[doc(hidden)]
pub use util::__testing;
pub use util::complex::{c_cbrt, format_complex};

/// Number of iterations used by the iterative solvers when the caller does
/// not provide one.
pub const DEFAULT_MAX_ITER: usize = 1000;

/// Newton steps are refused when `|f'(z)|` falls below this value.
pub const DERIVATIVE_THRESHOLD: f64 = 1E-12;

/// Leading coefficients smaller than this (in absolute value) are treated as zero.
pub const LEADING_COEFFICIENT_THRESHOLD: f64 = 1E-12;
