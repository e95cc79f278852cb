//! Testing utilities, do not depend on any of these in production!

use fastrand::Rng;
use itertools::Itertools;
use num::complex::Complex64;

use crate::{Biquadratic, Cubic, Family, Polynomial, Quadratic};

struct RandStreamF64 {
    state: Rng,
}

impl RandStreamF64 {
    fn new(seed: u64) -> Self {
        Self {
            state: Rng::with_seed(seed),
        }
    }
}

impl Iterator for RandStreamF64 {
    type Item = f64;

    fn next(&mut self) -> Option<Self::Item> {
        Some(self.state.f64())
    }
}

/// Endless stream of uniformly distributed reals in `[min, max)`
pub struct RandStreamR64 {
    real_stream: RandStreamF64,
    min: f64,
    max: f64,
}

impl RandStreamR64 {
    #[must_use]
    pub fn new(seed: u64, min: f64, max: f64) -> Self {
        assert!(min <= max, "minimum should be smaller or equal to maximum");
        Self {
            real_stream: RandStreamF64::new(seed),
            min,
            max,
        }
    }
}

impl Iterator for RandStreamR64 {
    type Item = f64;

    fn next(&mut self) -> Option<Self::Item> {
        Some((self.real_stream.next()?).mul_add(self.max - self.min, self.min))
    }
}

/// Endless stream of reals whose magnitude lies in `[min, max)` with a random sign.
///
/// Handy for leading coefficients, which must stay away from zero.
pub struct RandStreamNonZeroR64 {
    magnitude_stream: RandStreamR64,
    sign_stream: Rng,
}

impl RandStreamNonZeroR64 {
    #[must_use]
    pub fn new(seed: u64, min: f64, max: f64) -> Self {
        assert!(0.0 < min, "minimum magnitude should be positive");
        let mut seeds = Rng::with_seed(seed);
        Self {
            magnitude_stream: RandStreamR64::new(seeds.u64(..), min, max),
            sign_stream: Rng::with_seed(seeds.u64(..)),
        }
    }
}

impl Iterator for RandStreamNonZeroR64 {
    type Item = f64;

    fn next(&mut self) -> Option<Self::Item> {
        let m = self.magnitude_stream.next()?;
        Some(if self.sign_stream.bool() { m } else { -m })
    }
}

/// Endless stream of reals `±10^e` with `e` uniform in `[min_exp, max_exp)`
/// and a random sign.
///
/// Spreads coefficients over many orders of magnitude, which is where
/// cancellation shows up.
pub struct RandStreamLogR64 {
    exp_stream: RandStreamR64,
    sign_stream: Rng,
}

impl RandStreamLogR64 {
    #[must_use]
    pub fn new(seed: u64, min_exp: f64, max_exp: f64) -> Self {
        let mut seeds = Rng::with_seed(seed);
        Self {
            exp_stream: RandStreamR64::new(seeds.u64(..), min_exp, max_exp),
            sign_stream: Rng::with_seed(seeds.u64(..)),
        }
    }
}

impl Iterator for RandStreamLogR64 {
    type Item = f64;

    fn next(&mut self) -> Option<Self::Item> {
        let m = 10f64.powf(self.exp_stream.next()?);
        Some(if self.sign_stream.bool() { m } else { -m })
    }
}

/// Random quadratic with leading coefficient drawn from `leading` and the
/// rest from `rest`
pub fn random_quadratic(
    leading: &mut impl Iterator<Item = f64>,
    rest: &mut impl Iterator<Item = f64>,
) -> Quadratic {
    let (b, c) = rest.next_tuple().expect("rng stream should be infinite");
    Quadratic::new(leading.next().expect("rng stream should be infinite"), b, c)
}

/// Random cubic with leading coefficient drawn from `leading` and the rest
/// from `rest`
pub fn random_cubic(
    leading: &mut impl Iterator<Item = f64>,
    rest: &mut impl Iterator<Item = f64>,
) -> Cubic {
    let (b, c, d) = rest.next_tuple().expect("rng stream should be infinite");
    Cubic::new(leading.next().expect("rng stream should be infinite"), b, c, d)
}

/// Random biquadratic with leading coefficient drawn from `leading` and the
/// rest from `rest`
pub fn random_biquadratic(
    leading: &mut impl Iterator<Item = f64>,
    rest: &mut impl Iterator<Item = f64>,
) -> Biquadratic {
    let (b, c) = rest.next_tuple().expect("rng stream should be infinite");
    Biquadratic::new(leading.next().expect("rng stream should be infinite"), b, c)
}

/// Generate one cubic test case where the roots are known and can be
/// compared: three real roots from `roots_stream`, scaled by the next value
/// of `scale_stream`.
pub fn test_case_cubic_roots(
    roots_stream: &mut impl Iterator<Item = f64>,
    scale_stream: &mut impl Iterator<Item = f64>,
) -> (Cubic, Vec<Complex64>) {
    let (r1, r2, r3) = roots_stream
        .next_tuple()
        .expect("rng stream should be infinite");
    let a = scale_stream.next().expect("rng stream should be infinite");
    // a(x - r1)(x - r2)(x - r3)
    let cubic = Cubic::new(
        a,
        -a * (r1 + r2 + r3),
        a * r3.mul_add(r1 + r2, r1 * r2),
        -a * r1 * r2 * r3,
    );
    let roots = vec![r1, r2, r3]
        .into_iter()
        .map(|r| Complex64::new(r, 0.0))
        .collect_vec();
    (cubic, roots)
}

/// Largest `|f(root)|` over all roots
pub fn max_residual(poly: &impl Polynomial, roots: &[Complex64]) -> f64 {
    roots
        .iter()
        .map(|&z| poly.eval(z).norm())
        .fold(0.0, f64::max)
}

/// Largest `|f(root)|` over all roots, each divided by the sum of the term
/// magnitudes `|c_k|·|root|^k`. Unlike [`max_residual`] this does not grow
/// with the size of the coefficients or of the roots.
pub fn max_relative_residual(poly: &impl Polynomial, roots: &[Complex64]) -> f64 {
    let exponents: &[i32] = match poly.family() {
        Family::Quadratic => &[2, 1, 0],
        Family::Cubic => &[3, 2, 1, 0],
        Family::Biquadratic => &[4, 2, 0],
    };
    let coeffs = poly.coefficients();
    roots
        .iter()
        .map(|&z| {
            let r = z.norm();
            let scale: f64 = coeffs
                .iter()
                .zip(exponents)
                .map(|(c, &k)| c.abs() * r.powi(k))
                .sum();
            let residual = poly.eval(z).norm();
            if scale > 0.0 {
                residual / scale
            } else {
                residual
            }
        })
        .fold(0.0, f64::max)
}

/// Check that all roots have been found, regardless of their order
#[must_use]
pub fn check_roots(roots1: Vec<Complex64>, mut roots2: Vec<Complex64>, tol: f64) -> bool {
    if roots1.len() != roots2.len() {
        return false;
    }

    for r1 in roots1 {
        let mut best_idx = 0;
        let mut best_d = f64::MAX;
        for (i, r2) in roots2.iter().enumerate() {
            let d = (r1 - r2).norm();
            if d < best_d {
                best_idx = i;
                best_d = d;
            }
        }
        if best_d > tol {
            return false;
        }
        roots2.remove(best_idx);
    }
    true
}

#[cfg(test)]
mod test {
    use super::{
        check_roots, max_relative_residual, RandStreamLogR64, RandStreamNonZeroR64, RandStreamR64,
    };
    use crate::{Cubic, Quadratic};

    #[test]
    fn check_roots_ignores_order() {
        assert!(check_roots(
            vec![complex!(1.0), complex!(0.0, 1.0)],
            vec![complex!(0.0, 1.0), complex!(1.0)],
            1E-12
        ));
        assert!(!check_roots(
            vec![complex!(1.0), complex!(1.0)],
            vec![complex!(1.0), complex!(2.0)],
            1E-3
        ));
        assert!(!check_roots(vec![complex!(1.0)], vec![], 1E-3));
    }

    #[test]
    fn streams_respect_bounds() {
        assert!(RandStreamR64::new(1, -2.0, 3.0)
            .take(1000)
            .all(|x| (-2.0..3.0).contains(&x)));
        assert!(RandStreamNonZeroR64::new(2, 0.5, 4.0)
            .take(1000)
            .all(|x| (0.5..4.0).contains(&x.abs())));
        let values = RandStreamLogR64::new(3, -4.0, 4.0).take(1000).collect::<Vec<_>>();
        assert!(values.iter().all(|x| (0.99E-4..=1.01E4).contains(&x.abs())));
        assert!(values.iter().any(|&x| x < 0.0) && values.iter().any(|&x| x > 0.0));
    }

    #[test]
    fn relative_residual_is_scale_free() {
        let p = Quadratic::new(1.0, 0.0, -4.0);
        assert_eq!(max_relative_residual(&p, &[complex!(2.0)]), 0.0);
        // |f(1)| = 3, terms sum to 1 + 4
        assert!((max_relative_residual(&p, &[complex!(1.0)]) - 0.6).abs() < 1E-15);
        let scaled = Quadratic::new(1E6, 0.0, -4E6);
        assert!((max_relative_residual(&scaled, &[complex!(1.0)]) - 0.6).abs() < 1E-15);
        // x^3 at the origin
        assert_eq!(
            max_relative_residual(&Cubic::new(1.0, 0.0, 0.0, 0.0), &[complex!(0.0)]),
            0.0
        );
    }
}
