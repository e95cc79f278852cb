use num::complex::Complex64;

use crate::{util::doc_macros::errors_bisection, Error, Result, DEFAULT_MAX_ITER};

/// Find a single real root of `f` inside `[left, right]` by bisection.
///
/// If either endpoint already satisfies `|f(x)| < epsilon` it is returned
/// right away with an iteration count of 1, before the sign change is
/// checked. Otherwise the interval is halved until `|f(mid)| < epsilon` or
/// the half-width drops to `epsilon`.
///
/// Running out of iterations is *not* an error: the last midpoint is
/// returned as a best-effort result.
///
/// `max_iter` defaults to [`DEFAULT_MAX_ITER`].
///
/// # Returns
/// - the root, as a complex number with zero imaginary part
/// - number of iterations taken
///
/// # Errors
#[doc = errors_bisection!()]
///
/// # Examples
///
/// ```
/// use low_poly::roots::bisection;
///
/// let (root, _) = bisection(|x| x * x * x - x - 2.0, 1.0, 2.0, 1E-8, None).unwrap();
/// assert!((root.re - 1.521_379_71).abs() < 1E-7);
/// ```
pub fn bisection<F>(
    f: F,
    mut left: f64,
    mut right: f64,
    epsilon: f64,
    max_iter: Option<usize>,
) -> Result<(Complex64, usize)>
where
    F: Fn(f64) -> f64,
{
    let max_iter = max_iter.unwrap_or(DEFAULT_MAX_ITER);
    log::trace!("starting with arguments: {{left: {left}, right: {right}, epsilon: {epsilon}, max_iter: {max_iter}}}");

    let mut f_left = f(left);
    let mut f_right = f(right);

    if f_left.abs() < epsilon {
        log::trace!("left endpoint is already a root");
        return Ok((Complex64::new(left, 0.0), 1));
    }
    if f_right.abs() < epsilon {
        log::trace!("right endpoint is already a root");
        return Ok((Complex64::new(right, 0.0), 1));
    }
    if f_left.is_sign_negative() == f_right.is_sign_negative() {
        return Err(Error::NoSignChange { left, right });
    }

    let mut mid = (left + right) / 2.0;
    let mut iterations = 0;
    while (right - left) / 2.0 > epsilon && iterations < max_iter {
        mid = (left + right) / 2.0;
        iterations += 1;

        let f_mid = f(mid);
        if f_mid.abs() < epsilon {
            log::trace!("stopping because target precision reached");
            return Ok((Complex64::new(mid, 0.0), iterations));
        }

        if f_mid.is_sign_negative() == f_left.is_sign_negative() {
            left = mid;
            f_left = f_mid;
        } else {
            right = mid;
            f_right = f_mid;
        }
        log::trace!("bracket {{iteration: {iterations}, left: [{left}, {f_left}], right: [{right}, {f_right}]}}");
    }

    if iterations >= max_iter {
        log::debug!("iterations exhausted, returning best guess {{mid: {mid}, half_width: {}}}", (right - left) / 2.0);
    }
    Ok((Complex64::new(mid, 0.0), iterations))
}
