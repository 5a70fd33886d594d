//! Model dispatch.
//!
//! The rest of the crate works with a `ModelKind` plus a parameter slice, the
//! same positional `(x, *params)` convention a least-squares driver uses.
//! Two primitive operations are provided:
//! - predict `y(x)` for a single scalar
//! - evaluate over any `Abscissa` (scalar, slice, vector), optionally in parallel

use rayon::prelude::*;

use crate::domain::{CurveModel, ModelKind};
use crate::error::ModelError;
use crate::math::Abscissa;
use crate::models::functions::*;

/// Inputs shorter than this are evaluated serially by `evaluate_par`.
const PAR_MIN_LEN: usize = 4096;

/// Check that `params` has the right length for `model`.
pub fn check_params(model: ModelKind, params: &[f64]) -> Result<(), ModelError> {
    if params.len() == model.param_len() {
        Ok(())
    } else {
        Err(ModelError::param_count(model, params.len()))
    }
}

/// Predict `y(x)` for the given model kind.
pub fn predict(model: ModelKind, x: f64, params: &[f64]) -> Result<f64, ModelError> {
    check_params(model, params)?;
    Ok(predict_unchecked(model, x, params))
}

/// Evaluate `model` element-wise over `x`, returning the same shape.
pub fn evaluate<X>(model: ModelKind, x: &X, params: &[f64]) -> Result<X::Output, ModelError>
where
    X: Abscissa + ?Sized,
{
    check_params(model, params)?;
    Ok(x.map_values(|v| predict_unchecked(model, v, params)))
}

/// Evaluate `model` over a slice using the rayon pool for large inputs.
///
/// The result is identical to `evaluate` on the same slice.
pub fn evaluate_par(model: ModelKind, xs: &[f64], params: &[f64]) -> Result<Vec<f64>, ModelError> {
    check_params(model, params)?;
    if xs.len() < PAR_MIN_LEN {
        return Ok(xs.map_values(|v| predict_unchecked(model, v, params)));
    }
    Ok(xs
        .par_iter()
        .map(|&v| predict_unchecked(model, v, params))
        .collect())
}

/// # Panics
/// Panics if `params` is shorter than `model.param_len()`. Public entry points
/// call `check_params` first.
fn predict_unchecked(model: ModelKind, x: f64, p: &[f64]) -> f64 {
    match model {
        ModelKind::Linear => linear(x, p[0], p[1]),
        ModelKind::Parabola => parabola(x, p[0], p[1], p[2]),
        ModelKind::Sqrt => sqrt(x, p[0]),
        ModelKind::Gaussian => gaussian(x, p[0], p[1], p[2], p[3]),
        ModelKind::Lorentzian => lorentzian(x, p[0], p[1], p[2], p[3], p[4]),
        ModelKind::Sin => sin(x, p[0], p[1], p[2], p[3]),
        ModelKind::Cos => cos(x, p[0], p[1], p[2], p[3]),
        ModelKind::Sinc => sinc_fit(x, p[0], p[1], p[2], p[3]),
        ModelKind::Sinc2 => sinc2(x, p[0], p[1], p[2], p[3]),
        ModelKind::TrapFreq => trap_freq(x, p[0], p[1], p[2], p[3], p[4], p[5]),
        ModelKind::TrapFreq2 => trap_freq2(x, p[0], p[1], p[2], p[3], p[4]),
        ModelKind::RabiFreq => rabi_freq(x, p[0], p[1], p[2], p[3]),
        ModelKind::Exponential => exponential(x, p[0], p[1]),
        ModelKind::RabiLine => rabi_line(x, p[0], p[1], p[2], p[3], p[4], p[5], p[6], p[7]),
        ModelKind::Erfc => erfc_fit(x, p[0], p[1], p[2], p[3]),
        ModelKind::SinPlusCos => sin_plus_cos(x, p[0], p[1], p[2], p[3]),
        ModelKind::FixedSin => fixed_sin(x, p[0], p[1], p[2]),
        ModelKind::FixedSin5kHz => fixed_sin_5khz(x, p[0], p[1], p[2]),
    }
}

impl CurveModel {
    /// Bind a parameter vector to a model, rejecting a wrong arity.
    pub fn new(kind: ModelKind, params: Vec<f64>) -> Result<Self, ModelError> {
        check_params(kind, &params)?;
        Ok(Self { kind, params })
    }

    /// Predict `y(x)`.
    pub fn predict(&self, x: f64) -> Result<f64, ModelError> {
        predict(self.kind, x, &self.params)
    }

    /// Evaluate over any abscissa.
    pub fn eval<X: Abscissa + ?Sized>(&self, x: &X) -> Result<X::Output, ModelError> {
        evaluate(self.kind, x, &self.params)
    }

    /// `(name, value)` pairs in positional order.
    pub fn named_params(&self) -> Vec<(&'static str, f64)> {
        self.kind
            .param_names()
            .iter()
            .copied()
            .zip(self.params.iter().copied())
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ones(kind: ModelKind) -> Vec<f64> {
        vec![1.0; kind.param_len()]
    }

    #[test]
    fn predict_smoke_all_models() {
        for kind in ModelKind::ALL {
            let y = predict(kind, 0.5, &ones(kind)).unwrap();
            assert!(y.is_finite(), "{} gave {y}", kind.display_name());
        }
    }

    #[test]
    fn wrong_arity_is_rejected() {
        for kind in ModelKind::ALL {
            let too_many = vec![1.0; kind.param_len() + 1];
            let err = predict(kind, 0.0, &too_many).unwrap_err();
            assert!(matches!(err, ModelError::ParamCount { .. }));
            assert!(evaluate(kind, &[0.0_f64, 1.0], &too_many[1..kind.param_len()]).is_err());
        }
    }

    #[test]
    fn curve_model_checks_on_construction() {
        assert!(CurveModel::new(ModelKind::Linear, vec![1.0]).is_err());
        let model = CurveModel::new(ModelKind::Linear, vec![2.0, 1.0]).unwrap();
        assert_eq!(model.predict(3.0).unwrap(), 7.0);
        assert_eq!(model.eval(&vec![0.0_f64, 1.0]).unwrap(), vec![1.0, 3.0]);
        assert_eq!(model.named_params(), vec![("m", 2.0), ("b", 1.0)]);
    }

    #[test]
    fn deserialized_model_with_bad_arity_errors_instead_of_panicking() {
        let model = CurveModel { kind: ModelKind::Gaussian, params: vec![1.0] };
        assert!(model.predict(0.0).is_err());
    }

    #[test]
    fn parallel_matches_serial() {
        let xs: Vec<f64> = (0..10_000).map(|i| i as f64 * 1e-3).collect();
        let params = [2.0, 5.0, 1.5, 0.3];
        let serial = evaluate(ModelKind::Gaussian, xs.as_slice(), &params).unwrap();
        let parallel = evaluate_par(ModelKind::Gaussian, &xs, &params).unwrap();
        assert_eq!(serial, parallel);
    }
}
