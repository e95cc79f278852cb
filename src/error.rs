use thiserror::Error;

use crate::Family;

/// The top-level error type for this crate.
///
/// Every failure is final for the call that produced it; retrying with a
/// different guess, interval or tolerance is up to the caller.
#[derive(Debug, Error, Clone, PartialEq)]
#[non_exhaustive]
pub enum Error {
    /// Newton's method hit a point where the derivative is (almost) zero
    #[error("derivative vanished at iteration {iteration}, Newton step is undefined")]
    DerivativeTooSmall { iteration: usize },

    /// Newton's method used up its iteration budget
    #[error("did not converge within {max_iter} iterations")]
    DidNotConverge { max_iter: usize },

    /// The bisection interval does not bracket a root
    #[error("f({left}) and f({right}) have the same sign, the interval does not bracket a root")]
    NoSignChange { left: f64, right: f64 },

    #[error("not a cubic equation (a == 0)")]
    NotACubic,

    #[error("leading coefficient of the {0} equation is zero")]
    DegenerateLeadingCoefficient(Family),
}

pub type Result<T> = std::result::Result<T, Error>;
