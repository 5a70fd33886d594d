//! Closed-form fit functions.
//!
//! Each function is a single expression of `x` and its positional parameters.
//! Nothing is validated: a zero width, a negative decay or `sqrt` of a negative
//! `x` simply yields whatever IEEE-754 says (NaN/Inf), which is what a
//! least-squares driver expects from a model callback.

use crate::math::{erfc, sinc};

/// Angular frequency hard-coded by [`fixed_sin`] (10 kHz drive).
pub const FIXED_SIN_OMEGA: f64 = 0.0628;

/// Angular frequency hard-coded by [`fixed_sin_5khz`] (5 kHz drive).
pub const FIXED_SIN_5KHZ_OMEGA: f64 = 0.0314;

/// `m*x + b`
pub fn linear(x: f64, m: f64, b: f64) -> f64 {
    m * x + b
}

/// `A*(x - x0)^2 + C`
pub fn parabola(x: f64, a: f64, x0: f64, c: f64) -> f64 {
    a * (x - x0).powi(2) + c
}

/// `A*sqrt(x)`; NaN for `x < 0`.
pub fn sqrt(x: f64, a: f64) -> f64 {
    a * x.sqrt()
}

/// `A*exp(-(x - x0)^2/(2*sigma^2)) + C`
pub fn gaussian(x: f64, a: f64, x0: f64, sigma: f64, c: f64) -> f64 {
    a * (-(x - x0).powi(2) / (2.0 * sigma.powi(2))).exp() + c
}

/// `A*b^2/((x - x0)^2 + sigma^2) + C`
///
/// With `b = sigma` the peak height above the offset is exactly `A`.
pub fn lorentzian(x: f64, a: f64, b: f64, x0: f64, sigma: f64, c: f64) -> f64 {
    a * b.powi(2) / ((x - x0).powi(2) + sigma.powi(2)) + c
}

/// `A*sin(omega*x - phi) + C`
pub fn sin(x: f64, a: f64, omega: f64, phi: f64, c: f64) -> f64 {
    a * (omega * x - phi).sin() + c
}

/// `A*cos(omega*x - phi) + C`
pub fn cos(x: f64, a: f64, omega: f64, phi: f64, c: f64) -> f64 {
    a * (omega * x - phi).cos() + c
}

/// `A*sinc((x - x0)/sigma) + C`, normalized sinc.
pub fn sinc_fit(x: f64, a: f64, x0: f64, sigma: f64, c: f64) -> f64 {
    a * sinc((x - x0) / sigma) + c
}

/// `A*sinc((x - x0)/sigma)^2 + C`, normalized sinc.
pub fn sinc2(x: f64, a: f64, x0: f64, sigma: f64, c: f64) -> f64 {
    a * sinc((x - x0) / sigma).powi(2) + c
}

/// Damped trap oscillation with a linear drift:
/// `A*exp(-x/b)*sin(l*x - x0) + C + D*x`
pub fn trap_freq(x: f64, a: f64, b: f64, l: f64, x0: f64, c: f64, d: f64) -> f64 {
    a * (-x / b).exp() * (l * x - x0).sin() + c + d * x
}

/// Damped trap oscillation without drift:
/// `A*exp(-x/b)*sin(l*x - x0) + C`
pub fn trap_freq2(x: f64, a: f64, b: f64, l: f64, x0: f64, c: f64) -> f64 {
    a * (-x / b).exp() * (l * x - x0).sin() + c
}

/// Rabi flopping: `A*sin(b/2*x - x0)^2 + C`
pub fn rabi_freq(x: f64, a: f64, b: f64, x0: f64, c: f64) -> f64 {
    a * (b / 2.0 * x - x0).sin().powi(2) + c
}

/// `A*exp(-x/sigma)`
pub fn exponential(x: f64, a: f64, sigma: f64) -> f64 {
    a * (-x / sigma).exp()
}

/// Rabi lineshape: a Lorentzian envelope times a detuning-dependent
/// squared sine.
///
/// `(b^2/(l^2 + (x - m)^2)) * (A*sin(sqrt(s^2 + (x - j)^2)*k)^2 + p)`
#[allow(clippy::too_many_arguments)]
pub fn rabi_line(x: f64, b: f64, l: f64, m: f64, a: f64, s: f64, j: f64, k: f64, p: f64) -> f64 {
    let envelope = b.powi(2) / (l.powi(2) + (x - m).powi(2));
    let generalized = (s.powi(2) + (x - j).powi(2)).sqrt();
    envelope * (a * (generalized * k).sin().powi(2) + p)
}

/// `A*erfc((x - x0)/b) + C`
pub fn erfc_fit(x: f64, a: f64, x0: f64, b: f64, c: f64) -> f64 {
    a * erfc((x - x0) / b) + c
}

/// `A*sin(omega*t) + B*cos(omega*t) + C`
pub fn sin_plus_cos(t: f64, omega: f64, a: f64, b: f64, c: f64) -> f64 {
    a * (omega * t).sin() + b * (omega * t).cos() + c
}

/// `A*sin(0.0628*t - p) + C`
pub fn fixed_sin(t: f64, a: f64, p: f64, c: f64) -> f64 {
    sin(t, a, FIXED_SIN_OMEGA, p, c)
}

/// `A*sin(0.0314*t - p) + C`
pub fn fixed_sin_5khz(t: f64, a: f64, p: f64, c: f64) -> f64 {
    sin(t, a, FIXED_SIN_5KHZ_OMEGA, p, c)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;
    use std::f64::consts::{FRAC_PI_2, PI};

    #[test]
    fn gaussian_peak_is_amplitude_plus_offset() {
        assert_eq!(gaussian(5.0, 2.0, 5.0, 1.0, 1.0), 3.0);
        assert_eq!(gaussian(-3.0, 0.5, -3.0, 42.0, -1.0), -0.5);
    }

    #[test]
    fn gaussian_at_one_sigma() {
        let y = gaussian(1.0, 1.0, 0.0, 1.0, 0.0);
        assert_abs_diff_eq!(y, (-0.5_f64).exp(), epsilon = 1e-15);
    }

    #[test]
    fn lorentzian_half_width() {
        // At x0 ± sigma the height has dropped to half (with b = sigma).
        let y = lorentzian(3.0, 4.0, 2.0, 1.0, 2.0, 0.0);
        assert_abs_diff_eq!(y, 2.0, epsilon = 1e-15);
    }

    #[test]
    fn sin_and_cos_are_quarter_period_apart() {
        let x = 0.37;
        let s = sin(x, 1.5, 2.0, FRAC_PI_2, 0.25);
        let c = cos(x, 1.5, 2.0, 0.0, 0.25);
        assert_abs_diff_eq!(s, -c + 0.5, epsilon = 1e-14);
    }

    #[test]
    fn sinc_zeros() {
        assert_abs_diff_eq!(sinc_fit(3.0, 1.0, 1.0, 2.0, 0.5), 0.5, epsilon = 1e-15);
        assert_eq!(sinc2(1.0, 2.0, 1.0, 2.0, 0.5), 2.5);
    }

    #[test]
    fn trap_freq_variants_differ_by_drift() {
        let x = 0.8;
        let with_drift = trap_freq(x, 3.0, 0.5, 20.0, -2.0, 1.0, 0.25);
        let without = trap_freq2(x, 3.0, 0.5, 20.0, -2.0, 1.0);
        assert_abs_diff_eq!(with_drift - without, 0.25 * x, epsilon = 1e-14);
    }

    #[test]
    fn rabi_freq_full_flop() {
        // b/2*x = pi/2 drives the population fully.
        assert_abs_diff_eq!(rabi_freq(1.0, 1.0, PI, 0.0, 0.0), 1.0, epsilon = 1e-15);
        assert_abs_diff_eq!(rabi_freq(2.0, 1.0, PI, 0.0, 0.0), 0.0, epsilon = 1e-15);
    }

    #[test]
    fn rabi_line_on_resonance() {
        // x = m = j, l = b: envelope 1, sqrt(s^2) = s.
        let y = rabi_line(0.0, 2.0, 2.0, 0.0, 1.0, FRAC_PI_2, 0.0, 1.0, 0.1);
        assert_abs_diff_eq!(y, 1.1, epsilon = 1e-15);
    }

    #[test]
    fn erfc_fit_at_center() {
        assert_eq!(erfc_fit(2.0, 3.0, 2.0, 0.5, 1.0), 4.0);
    }

    #[test]
    fn sin_plus_cos_at_zero_is_cos_amplitude() {
        assert_eq!(sin_plus_cos(0.0, 7.0, 2.0, 3.0, 1.0), 4.0);
    }

    #[test]
    fn exponential_and_sqrt_edges() {
        assert_eq!(exponential(0.0, 3.5, 0.1), 3.5);
        assert_eq!(sqrt(0.0, 9.0), 0.0);
        assert!(sqrt(-1.0, 9.0).is_nan());
    }

    #[test]
    fn degenerate_parameters_follow_ieee() {
        // 0/0 inside the exponent.
        assert!(gaussian(1.0, 1.0, 1.0, 0.0, 0.0).is_nan());
        // Off-center with zero width decays to the offset.
        assert_eq!(gaussian(2.0, 1.0, 1.0, 0.0, 0.5), 0.5);
        assert!(lorentzian(0.0, 1.0, 1.0, 0.0, 0.0, 0.0).is_infinite());
    }
}
