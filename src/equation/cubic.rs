use std::fmt;

use num::{complex::Complex64, Zero};

use super::{check_leading_coefficient, fmt_terms, Family, Polynomial, Quadratic};
use crate::{c_cbrt, Result};

/// `ax^3 + bx^2 + cx + d`
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Cubic {
    pub a: f64,
    pub b: f64,
    pub c: f64,
    pub d: f64,
}

/// Primitive cube root of unity, `-1/2 + i·√3/2`
const OMEGA: Complex64 = Complex64::new(-0.5, 0.866_025_403_784_438_6);

/// Cardano roots whose imaginary part is below this fraction of the largest
/// root modulus count as real.
const REAL_AXIS_TOLERANCE: f64 = 1E-7;

/// Newton steps spent on the real root before deflating.
const POLISH_STEPS: usize = 3;

impl Cubic {
    #[must_use]
    pub const fn new(a: f64, b: f64, c: f64, d: f64) -> Self {
        Self { a, b, c, d }
    }

    /// Coefficients `(p, q, offset)` of the depressed cubic `t^3 + pt + q`,
    /// where `x = t + offset`. `a` must not be zero.
    pub(crate) fn depressed(&self) -> (f64, f64, f64) {
        let Self { a, b, c, d } = *self;
        let p = (3.0 * a * c - b * b) / (3.0 * a * a);
        let q = (2.0 * b * b * b - 9.0 * a * b * c + 27.0 * a * a * d) / (27.0 * a * a * a);
        let offset = -b / (3.0 * a);
        (p, q, offset)
    }

    /// `[u + v, uω + vω̄, uω̄ + vω]`, each shifted by `-b/3a`.
    ///
    /// Only `u` is obtained from a cube root; `v` is derived from
    /// `u·v = -p/3`, which keeps the pair consistent whatever branch `u`
    /// lands on.
    fn cardano(&self) -> [Complex64; 3] {
        let (p, q, offset) = self.depressed();
        log::trace!("depressed cubic {{p: {p}, q: {q}, offset: {offset}}}");

        let half_q = Complex64::new(-q / 2.0, 0.0);
        let delta = Complex64::new(q / 2.0, 0.0).powu(2) + Complex64::new(p / 3.0, 0.0).powu(3);
        let sqrt_delta = delta.sqrt();

        // pick the sign that avoids cancellation, the other cube root follows from u·v = -p/3
        let w = if (half_q + sqrt_delta).norm() >= (half_q - sqrt_delta).norm() {
            half_q + sqrt_delta
        } else {
            half_q - sqrt_delta
        };
        let u = c_cbrt(w);
        let v = if w.is_zero() {
            // only happens when p = q = 0, a triple root at the offset
            Complex64::zero()
        } else {
            Complex64::new(-p / 3.0, 0.0) / u
        };
        debug_assert!((u * v + p / 3.0).norm() <= 1E-9 * p.abs());

        let omega_bar = OMEGA.conj();
        [
            u + v + offset,
            u * OMEGA + v * omega_bar + offset,
            u * omega_bar + v * OMEGA + offset,
        ]
    }

    /// Newton steps along the real axis, kept only while they shrink `|f|`.
    fn polish(&self, mut x: f64) -> f64 {
        let mut fx = self.eval_real(x);
        for _ in 0..POLISH_STEPS {
            let dfx = (3.0 * self.a).mul_add(x, 2.0 * self.b).mul_add(x, self.c);
            if dfx == 0.0 {
                break;
            }
            let next = x - fx / dfx;
            let f_next = self.eval_real(next);
            if f_next.abs() >= fx.abs() {
                break;
            }
            x = next;
            fx = f_next;
        }
        x
    }

    /// Factor out the root `r`, working from the leading coefficient down.
    /// Stable when `r` is not the largest root.
    fn deflate_downward(&self, r: f64) -> Quadratic {
        let b = self.a.mul_add(r, self.b);
        let c = b.mul_add(r, self.c);
        Quadratic::new(self.a, b, c)
    }

    /// Factor out the root `r`, working from the constant term up. Stable
    /// when `r` is the largest root, `r` must not be zero.
    fn deflate_upward(&self, r: f64) -> Quadratic {
        let c = -self.d / r;
        let b = (c - self.c) / r;
        Quadratic::new(self.a, b, c)
    }

    /// All three roots, the real one first. `a` must not be zero.
    ///
    /// Cardano's formula locates a real root: the largest one in modulus
    /// when all three are real, the only one otherwise. That root is
    /// polished and factored out, and the remaining pair comes from the
    /// quadratic that is left, which keeps roots of very different sizes
    /// accurate.
    pub(crate) fn closed_form(&self) -> Vec<Complex64> {
        let cardano = self.cardano();
        let scale = cardano.iter().map(|z| z.norm()).fold(0.0, f64::max);

        let anchor = cardano
            .into_iter()
            .filter(|z| z.im.abs() <= REAL_AXIS_TOLERANCE * scale)
            .max_by(|z1, z2| z1.norm().total_cmp(&z2.norm()))
            .or_else(|| {
                cardano
                    .into_iter()
                    .min_by(|z1, z2| z1.im.abs().total_cmp(&z2.im.abs()))
            })
            .unwrap_or_else(Complex64::zero);
        let x1 = self.polish(anchor.re);
        log::trace!("real root {{cardano: \"{anchor}\", polished: {x1}}}");

        let rest = if x1 != 0.0 && anchor.norm() >= scale {
            self.deflate_upward(x1)
        } else {
            self.deflate_downward(x1)
        };

        let mut roots = vec![Complex64::new(x1, 0.0)];
        roots.extend(rest.closed_form());
        roots
    }
}

impl Polynomial for Cubic {
    fn family(&self) -> Family {
        Family::Cubic
    }

    fn coefficients(&self) -> Vec<f64> {
        vec![self.a, self.b, self.c, self.d]
    }

    fn eval(&self, z: Complex64) -> Complex64 {
        // Horner's method
        ((z * self.a + self.b) * z + self.c) * z + self.d
    }

    fn derivative(&self, z: Complex64) -> Complex64 {
        (z * (3.0 * self.a) + 2.0 * self.b) * z + self.c
    }

    fn eval_real(&self, x: f64) -> f64 {
        self.a.mul_add(x, self.b).mul_add(x, self.c).mul_add(x, self.d)
    }

    /// Cardano's formula, carried out in complex arithmetic so that the same
    /// code handles one real root and three real roots.
    ///
    /// Cube roots use the polar principal branch (see [`c_cbrt`]). The real
    /// root found this way is factored out and the other two are read off
    /// the remaining quadratic, so the real root always comes first.
    ///
    /// # Errors
    /// - [`Error::NotACubic`](crate::Error::NotACubic): `|a|` is below
    ///   [`LEADING_COEFFICIENT_THRESHOLD`](crate::LEADING_COEFFICIENT_THRESHOLD).
    ///
    /// # Examples
    ///
    /// ```
    /// use low_poly::{Cubic, Polynomial};
    ///
    /// // (x - 1)(x - 2)(x - 3)
    /// let p = Cubic::new(1.0, -6.0, 11.0, -6.0);
    /// let mut roots: Vec<f64> = p.solve_algebraically().unwrap().iter().map(|z| z.re).collect();
    /// roots.sort_by(f64::total_cmp);
    /// for (root, expected) in roots.iter().zip([1.0, 2.0, 3.0]) {
    ///     assert!((root - expected).abs() < 1E-9);
    /// }
    /// ```
    fn solve_algebraically(&self) -> Result<Vec<Complex64>> {
        check_leading_coefficient(Family::Cubic, self.a)?;
        Ok(self.closed_form())
    }
}

impl fmt::Display for Cubic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt_terms(f, &[(self.a, 3), (self.b, 2), (self.c, 1), (self.d, 0)])
    }
}

#[cfg(test)]
mod test {
    use super::Cubic;
    use crate::{
        Error, Polynomial,
        __testing::{check_roots, max_relative_residual},
    };

    #[test]
    fn one_real_two_complex() {
        // x^3 - 1
        let roots = Cubic::new(1.0, 0.0, 0.0, -1.0).solve_algebraically().unwrap();
        let s = 3f64.sqrt() / 2.0;
        assert!(check_roots(
            roots,
            vec![complex!(1.0), complex!(-0.5, s), complex!(-0.5, -s)],
            1E-12
        ));
    }

    #[test]
    fn three_real_roots() {
        // (x - 1)(x - 2)(x - 3)
        let p = Cubic::new(1.0, -6.0, 11.0, -6.0);
        let roots = p.solve_algebraically().unwrap();
        assert!(check_roots(
            roots.clone(),
            vec![complex!(1.0), complex!(2.0), complex!(3.0)],
            1E-9
        ));
        for root in roots {
            assert!(root.im.abs() < 1E-9, "{root}");
        }
    }

    #[test]
    fn triple_root() {
        // 2(x + 1)^3
        let roots = Cubic::new(2.0, 6.0, 6.0, 2.0).solve_algebraically().unwrap();
        assert!(check_roots(
            roots,
            vec![complex!(-1.0), complex!(-1.0), complex!(-1.0)],
            1E-12
        ));
    }

    #[test]
    fn double_root() {
        // (x - 1)^2 (x + 2) = x^3 - 3x + 2
        let p = Cubic::new(1.0, 0.0, -3.0, 2.0);
        let roots = p.solve_algebraically().unwrap();
        assert!(check_roots(
            roots,
            vec![complex!(1.0), complex!(1.0), complex!(-2.0)],
            1E-6
        ));
    }

    #[test]
    fn negative_radicand() {
        // -q/2 is negative, so u is the principal cube root of a negative real
        let p = Cubic::new(1.0, 0.0, 1.0, 10.0);
        let roots = p.solve_algebraically().unwrap();
        for root in &roots {
            assert!(p.eval(*root).norm() < 1E-9, "{root}");
        }
        assert!(roots.iter().any(|z| (z - complex!(-2.0)).norm() < 1E-9));
    }

    #[test]
    fn depressed_form() {
        // (x - 1)(x - 2)(x - 3) = (t - 1)t(t + 1) with x = t + 2
        let p = Cubic::new(1.0, -6.0, 11.0, -6.0);
        assert_eq!(p.depressed(), (-1.0, 0.0, 2.0));
    }

    #[test]
    fn tiny_roots() {
        // x^3 - 3E-40 x, roots 0 and ±√3·1E-20
        let roots = Cubic::new(1.0, 0.0, -3E-40, 0.0).solve_algebraically().unwrap();
        assert!(roots.iter().all(|z| z.im == 0.0), "{roots:?}");
        let mut re = roots.iter().map(|z| z.re).collect::<Vec<_>>();
        re.sort_by(f64::total_cmp);
        let r = 3f64.sqrt() * 1E-20;
        for (got, expected) in re.iter().zip([-r, 0.0, r]) {
            assert!((got - expected).abs() < 1E-32, "{re:?}");
        }
    }

    #[test]
    fn roots_of_very_different_size() {
        // tiny leading coefficient: one root near -4.5E7, two near zero
        let p = Cubic::new(
            2.099_309_476_978_114E-4,
            9457.541_027_817_933,
            4530.300_337_496_921,
            97.689_198_283_169_18,
        );
        let roots = p.solve_algebraically().unwrap();
        assert!(max_relative_residual(&p, &roots) < 1E-12, "{roots:?}");
        assert!((roots[0].re + 4.505_072_277_8E7).abs() < 1.0, "{roots:?}");
        assert!((roots[1] - complex!(-0.022_632_893)).norm() < 1E-6, "{roots:?}");
        assert!((roots[2] - complex!(-0.456_381_723)).norm() < 1E-6, "{roots:?}");
    }

    #[test]
    fn real_root_comes_first() {
        let roots = Cubic::new(1.0, 0.0, -1.0, -2.0).solve_algebraically().unwrap();
        assert_eq!(roots[0].im, 0.0);
        assert!((roots[0].re - 1.521_379_706_804_568).abs() < 1E-14);
        assert_eq!(roots[1], roots[2].conj());
    }

    #[test]
    fn vieta() {
        let p = Cubic::new(-2.5, 3.0, 7.0, -1.25);
        let roots = p.solve_algebraically().unwrap();
        let sum: num::complex::Complex64 = roots.iter().sum();
        assert!((sum - complex!(-p.b / p.a)).norm() < 1E-9);
        let product: num::complex::Complex64 = roots.iter().product();
        assert!((product - complex!(-p.d / p.a)).norm() < 1E-9);
    }

    #[test]
    fn not_a_cubic() {
        assert_eq!(
            Cubic::new(1E-13, 1.0, 1.0, 1.0).solve_algebraically(),
            Err(Error::NotACubic)
        );
    }

    #[test]
    fn derivative() {
        let p = Cubic::new(1.0, -2.0, 3.0, -4.0);
        // 3x^2 - 4x + 3 at x = 2
        assert_eq!(p.derivative(complex!(2.0)), complex!(7.0));
        assert_eq!(p.eval(complex!(2.0)), complex!(2.0));
        assert_eq!(p.eval_real(2.0), 2.0);
    }

    #[test]
    fn iterative() {
        let p = Cubic::new(1.0, 0.0, -1.0, -2.0);
        let (root, _) = p.solve_with_bisection(1.0, 2.0, 1E-8, None).unwrap();
        assert!((root.re - 1.521_379_71).abs() < 1E-7);
        let (root, _) = p.solve_with_newton(complex!(1.0), 1E-12, None).unwrap();
        assert!((root.re - 1.521_379_706_804_568).abs() < 1E-10);
        assert_eq!(
            p.solve_with_bisection(3.0, 4.0, 1E-8, None),
            Err(Error::NoSignChange {
                left: 3.0,
                right: 4.0
            })
        );
    }
}
