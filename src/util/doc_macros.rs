//! Macros for reducing doc comment boilerplate.

/// Documents the failure modes of Newton's method.
macro_rules! errors_newton {
    () => {
        r"- [`Error::DerivativeTooSmall`](crate::Error::DerivativeTooSmall): `|f'(z)|` dropped below [`DERIVATIVE_THRESHOLD`](crate::DERIVATIVE_THRESHOLD) before convergence.
- [`Error::DidNotConverge`](crate::Error::DidNotConverge): the step size did not fall below `epsilon` within `max_iter` iterations. No partial result is returned.
"
    };
}
pub(crate) use errors_newton;

/// Documents the failure modes of bisection.
macro_rules! errors_bisection {
    () => {
        r"- [`Error::NoSignChange`](crate::Error::NoSignChange): `f(left)` and `f(right)` have the same sign and neither is within `epsilon` of zero.
"
    };
}
pub(crate) use errors_bisection;

/// Documents the degenerate leading coefficient error.
macro_rules! errors_degenerate {
    () => {
        r"- [`Error::DegenerateLeadingCoefficient`](crate::Error::DegenerateLeadingCoefficient): `|a|` is below [`LEADING_COEFFICIENT_THRESHOLD`](crate::LEADING_COEFFICIENT_THRESHOLD).
"
    };
}
pub(crate) use errors_degenerate;
