use num::complex::Complex64;

use crate::{
    util::doc_macros::errors_newton, Error, Result, DEFAULT_MAX_ITER, DERIVATIVE_THRESHOLD,
};

/// Find a single root using Newton's method.
///
/// Iterates `z = z - f(z) / f'(z)` starting from `initial_guess` until two
/// consecutive guesses are closer than `epsilon`. Everything happens in
/// complex arithmetic, so a complex initial guess can reach complex roots,
/// while a real guess on a real polynomial stays on the real axis.
///
/// `max_iter` defaults to [`DEFAULT_MAX_ITER`].
///
/// # Returns
/// - the root
/// - number of iterations taken
///
/// # Errors
#[doc = errors_newton!()]
///
/// # Examples
///
/// ```
/// use low_poly::{complex, roots::newton};
///
/// let (root, iterations) = newton(|z| z * z - 2.0, |z| z * 2.0, complex!(1.5), 1E-10, None).unwrap();
/// assert!((root.re - std::f64::consts::SQRT_2).abs() < 1E-10);
/// assert!(iterations < 20);
/// ```
pub fn newton<F, D>(
    f: F,
    df: D,
    initial_guess: Complex64,
    epsilon: f64,
    max_iter: Option<usize>,
) -> Result<(Complex64, usize)>
where
    F: Fn(Complex64) -> Complex64,
    D: Fn(Complex64) -> Complex64,
{
    let max_iter = max_iter.unwrap_or(DEFAULT_MAX_ITER);
    log::trace!("starting with arguments: {{initial_guess: \"{initial_guess}\", epsilon: {epsilon}, max_iter: {max_iter}}}");

    let mut guess = initial_guess;
    for i in 1..=max_iter {
        let pdx = df(guess);
        if pdx.norm() < DERIVATIVE_THRESHOLD {
            log::debug!("derivative vanished {{iteration: {i}, guess: \"{guess}\", pdx: \"{pdx}\"}}");
            return Err(Error::DerivativeTooSmall { iteration: i });
        }

        let guess_new = guess - f(guess) / pdx;
        log::trace!("step {{iteration: {i}, guess: \"{guess_new}\"}}");

        // stopping criterion: step size below target precision
        if (guess_new - guess).norm() < epsilon {
            return Ok((guess_new, i));
        }
        guess = guess_new;
    }

    log::debug!("did not converge {{last_guess: \"{guess}\", max_iter: {max_iter}}}");
    Err(Error::DidNotConverge { max_iter })
}
