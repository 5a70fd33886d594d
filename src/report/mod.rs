//! Reporting utilities: residuals, fit quality, and formatted terminal output.
//!
//! We keep formatting code in one place so:
//! - the model code stays clean and testable
//! - output changes are localized

pub mod format;

pub use format::*;

use crate::domain::{CurveModel, DataPoint, FitQuality, Residual};
use crate::error::AppError;

/// Compute fitted values and residuals (`y_obs - y_fit`) for each point.
///
/// A model that evaluates to NaN/Inf somewhere is a legitimate outcome of bad
/// parameters, but it makes every aggregate meaningless, so it is reported as
/// an error here rather than silently summed.
pub fn compute_residuals(points: &[DataPoint], model: &CurveModel) -> Result<Vec<Residual>, AppError> {
    let mut out = Vec::with_capacity(points.len());
    for p in points {
        let y_fit = model.predict(p.x)?;
        if !y_fit.is_finite() {
            return Err(AppError::new(
                4,
                format!("Non-finite model prediction at x={} during residual computation.", p.x),
            ));
        }
        out.push(Residual {
            point: *p,
            y_fit,
            residual: p.y - y_fit,
        });
    }
    Ok(out)
}

/// Sum of squared residuals and RMSE.
pub fn fit_quality(residuals: &[Residual]) -> FitQuality {
    let n = residuals.len();
    let sse: f64 = residuals.iter().map(|r| r.residual * r.residual).sum();
    let rmse = if n == 0 { 0.0 } else { (sse / n as f64).sqrt() };
    FitQuality { sse, rmse, n }
}

/// The `top_n` points with the largest absolute residual, largest first.
pub fn largest_residuals(residuals: &[Residual], top_n: usize) -> Vec<Residual> {
    let mut sorted = residuals.to_vec();
    sorted.sort_by(|a, b| {
        b.residual
            .abs()
            .partial_cmp(&a.residual.abs())
            .unwrap_or(std::cmp::Ordering::Equal)
    });
    sorted.truncate(top_n);
    sorted
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ModelKind;

    fn line() -> CurveModel {
        CurveModel::new(ModelKind::Linear, vec![1.0, 0.0]).unwrap()
    }

    fn pts() -> Vec<DataPoint> {
        vec![
            DataPoint { x: 0.0, y: 0.0 },
            DataPoint { x: 1.0, y: 3.0 },
            DataPoint { x: 2.0, y: 1.0 },
        ]
    }

    #[test]
    fn compute_residuals_basic() {
        let residuals = compute_residuals(&pts(), &line()).unwrap();
        let r: Vec<f64> = residuals.iter().map(|r| r.residual).collect();
        assert_eq!(r, vec![0.0, 2.0, -1.0]);
    }

    #[test]
    fn quality_figures() {
        let residuals = compute_residuals(&pts(), &line()).unwrap();
        let q = fit_quality(&residuals);
        assert_eq!(q.n, 3);
        assert_eq!(q.sse, 5.0);
        assert!((q.rmse - (5.0_f64 / 3.0).sqrt()).abs() < 1e-15);
        assert_eq!(fit_quality(&[]).rmse, 0.0);
    }

    #[test]
    fn largest_residuals_by_magnitude() {
        let residuals = compute_residuals(&pts(), &line()).unwrap();
        let top = largest_residuals(&residuals, 2);
        assert_eq!(top.len(), 2);
        assert_eq!(top[0].point.x, 1.0);
        assert_eq!(top[1].point.x, 2.0);
    }

    #[test]
    fn non_finite_prediction_is_an_error() {
        let model = CurveModel::new(ModelKind::Sqrt, vec![1.0]).unwrap();
        let err = compute_residuals(&[DataPoint { x: -1.0, y: 0.0 }], &model).unwrap_err();
        assert_eq!(err.exit_code(), 4);
    }
}
