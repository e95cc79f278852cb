// internal utilities for dealing with Complex annoyances

use num::complex::Complex64;

/// Principal cube root of a complex number.
///
/// Takes the polar form `(r, θ)` with `θ = atan2(im, re)` in `(-π, π]` and
/// returns `r^(1/3)·(cos(θ/3) + i·sin(θ/3))`. For negative reals this is
/// *not* the real cube root, it is the one with argument `π/3`.
///
/// ```
/// use low_poly::c_cbrt;
/// use num::complex::Complex64;
///
/// let z = c_cbrt(Complex64::new(8.0, 0.0));
/// assert!((z - Complex64::new(2.0, 0.0)).norm() < 1E-12);
/// ```
#[must_use]
pub fn c_cbrt(z: Complex64) -> Complex64 {
    let r = z.norm();
    let theta = z.im.atan2(z.re);
    Complex64::from_polar(r.cbrt(), theta / 3.0)
}

/// Render a complex number with `decimal_places` fractional digits.
///
/// Components smaller than `10^-(decimal_places + 2)` are treated as noise:
/// a negligible imaginary part yields a bare real, a negligible real part
/// yields a bare imaginary term. Otherwise the output is `"re + |im|i"` or
/// `"re - |im|i"`.
///
/// ```
/// use low_poly::format_complex;
/// use num::complex::Complex64;
///
/// assert_eq!(format_complex(Complex64::new(3.000_000_1, 1E-7), 4), "3.0000");
/// assert_eq!(format_complex(Complex64::new(0.0, -2.0), 2), "-2.00i");
/// assert_eq!(format_complex(Complex64::new(1.5, -2.0), 1), "1.5 - 2.0i");
/// ```
#[must_use]
pub fn format_complex(z: Complex64, decimal_places: usize) -> String {
    let exponent = i32::try_from(decimal_places).unwrap_or(i32::MAX - 2) + 2;
    let tolerance = 10f64.powi(-exponent);

    if z.im.abs() < tolerance {
        return fmt_fixed(z.re, decimal_places);
    }
    if z.re.abs() < tolerance {
        return format!("{}i", fmt_fixed(z.im, decimal_places));
    }
    let sign = if z.im.is_sign_negative() { '-' } else { '+' };
    format!(
        "{} {sign} {}i",
        fmt_fixed(z.re, decimal_places),
        fmt_fixed(z.im.abs(), decimal_places)
    )
}

/// fixed-point formatting that never prints a negative zero
fn fmt_fixed(x: f64, decimal_places: usize) -> String {
    let s = format!("{x:.decimal_places$}");
    if s.starts_with('-') && s[1..].chars().all(|c| c == '0' || c == '.') {
        s[1..].to_owned()
    } else {
        s
    }
}

#[cfg(test)]
mod test {
    use std::f64::consts::PI;

    use num::complex::Complex64;

    use super::{c_cbrt, format_complex};

    #[test]
    fn cbrt_is_principal() {
        let z = c_cbrt(complex!(-8.0));
        assert!((z - Complex64::from_polar(2.0, PI / 3.0)).norm() < 1E-12);
        assert!((z * z * z - complex!(-8.0)).norm() < 1E-12);
    }

    #[test]
    fn cbrt_of_complex() {
        let w = complex!(1.0, 2.0);
        let z = c_cbrt(w);
        assert!((z.powu(3) - w).norm() < 1E-12);
        assert!(z.arg().abs() <= PI / 3.0 + 1E-12);
    }

    #[test]
    fn cbrt_of_zero() {
        assert_eq!(c_cbrt(complex!(0.0)), complex!(0.0));
    }

    #[test]
    fn suppresses_imaginary_noise() {
        assert_eq!(format_complex(complex!(3.000_000_1, 0.000_000_1), 4), "3.0000");
    }

    #[test]
    fn suppresses_real_noise() {
        assert_eq!(format_complex(complex!(1E-9, 1.25), 2), "1.25i");
    }

    #[test]
    fn imaginary_part_just_above_tolerance() {
        assert_eq!(format_complex(complex!(1.0, 2E-6), 4), "1.0000 + 0.0000i");
    }

    #[test]
    fn sign_of_imaginary_part() {
        assert_eq!(format_complex(complex!(-0.5, 0.75), 2), "-0.50 + 0.75i");
        assert_eq!(format_complex(complex!(-0.5, -0.75), 2), "-0.50 - 0.75i");
    }

    #[test]
    fn no_negative_zero() {
        assert_eq!(format_complex(complex!(-1E-5), 3), "0.000");
        assert_eq!(format_complex(complex!(-0.0), 0), "0");
    }
}
