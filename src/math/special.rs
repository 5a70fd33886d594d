//! Special functions used by the fit models.
//!
//! - `sinc(u)` is the *normalized* sinc, `sin(πu) / (πu)`, with `sinc(0) = 1`.
//! - `erfc(u)` is the complementary error function, delegated to `libm`.

use std::f64::consts::PI;

/// Below this `|πu|` the series `1 - (πu)²/6` is exact to machine precision.
const SINC_SERIES: f64 = 1e-8;

/// Normalized sinc.
pub fn sinc(u: f64) -> f64 {
    let x = PI * u;
    if x.abs() < SINC_SERIES {
        return 1.0 - x * x / 6.0;
    }
    x.sin() / x
}

/// Complementary error function.
pub fn erfc(u: f64) -> f64 {
    libm::erfc(u)
}
