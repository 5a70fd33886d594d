//! Shape-preserving evaluation over the independent variable.
//!
//! A fit function is defined on a single `f64`. `Abscissa` lifts it onto the
//! containers a caller is likely to hold: a bare scalar, slices, `Vec`s,
//! fixed-size arrays and `nalgebra` vectors. The output always has the same
//! shape as the input, so `f(x)` and `f([x])[0]` agree bit for bit.

use nalgebra::DVector;

pub trait Abscissa {
    type Output;

    /// Apply `f` element-wise.
    fn map_values<F: Fn(f64) -> f64>(&self, f: F) -> Self::Output;

    /// Number of elements (1 for scalars).
    fn len_values(&self) -> usize;
}

impl Abscissa for f64 {
    type Output = f64;

    fn map_values<F: Fn(f64) -> f64>(&self, f: F) -> f64 {
        f(*self)
    }

    fn len_values(&self) -> usize {
        1
    }
}

impl Abscissa for [f64] {
    type Output = Vec<f64>;

    fn map_values<F: Fn(f64) -> f64>(&self, f: F) -> Vec<f64> {
        self.iter().map(|&x| f(x)).collect()
    }

    fn len_values(&self) -> usize {
        self.len()
    }
}

impl Abscissa for Vec<f64> {
    type Output = Vec<f64>;

    fn map_values<F: Fn(f64) -> f64>(&self, f: F) -> Vec<f64> {
        self.as_slice().map_values(f)
    }

    fn len_values(&self) -> usize {
        self.len()
    }
}

impl<const N: usize> Abscissa for [f64; N] {
    type Output = [f64; N];

    fn map_values<F: Fn(f64) -> f64>(&self, f: F) -> [f64; N] {
        (*self).map(f)
    }

    fn len_values(&self) -> usize {
        N
    }
}

impl Abscissa for DVector<f64> {
    type Output = DVector<f64>;

    fn map_values<F: Fn(f64) -> f64>(&self, f: F) -> DVector<f64> {
        self.map(f)
    }

    fn len_values(&self) -> usize {
        self.len()
    }
}

/// Evenly spaced grid over `[start, end]` with `n` points (at least two).
pub fn linspace(start: f64, end: f64, n: usize) -> Vec<f64> {
    let n = n.max(2);
    (0..n)
        .map(|i| {
            let u = i as f64 / (n as f64 - 1.0);
            start + u * (end - start)
        })
        .collect()
}
