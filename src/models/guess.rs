//! Starting points for an external least-squares driver.
//!
//! Nonlinear fits are sensitive to where they start. Each model carries a
//! cheap heuristic derived from the data: peak models start at the point of
//! largest `|y|` with a width of half the x-span, oscillators start at unit
//! frequency, and the trap/Rabi models fall back to fixed values that work
//! for typical lab scans.
//!
//! `Ok(None)` means the model has no preferred start; the driver's own default
//! (usually all ones) applies.

use crate::domain::{DataPoint, ModelKind};
use crate::error::ModelError;

/// Summary statistics the heuristics draw from.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DataSummary {
    pub min_x: f64,
    pub max_x: f64,
    pub min_y: f64,
    pub max_y: f64,
    pub mean_y: f64,
    /// `x` of the point with the largest `|y|`.
    pub x_of_max: f64,
}

impl DataSummary {
    /// Summarize a data set. Returns `None` when it is empty.
    pub fn from_points(points: &[DataPoint]) -> Option<Self> {
        let first = points.first()?;

        let mut s = DataSummary {
            min_x: first.x,
            max_x: first.x,
            min_y: first.y,
            max_y: first.y,
            mean_y: 0.0,
            x_of_max: first.x,
        };
        let mut abs_max = first.y.abs();
        let mut sum_y = 0.0;

        for p in points {
            s.min_x = s.min_x.min(p.x);
            s.max_x = s.max_x.max(p.x);
            s.min_y = s.min_y.min(p.y);
            s.max_y = s.max_y.max(p.y);
            sum_y += p.y;
            // Strict comparison keeps the first occurrence on ties.
            if p.y.abs() > abs_max {
                abs_max = p.y.abs();
                s.x_of_max = p.x;
            }
        }
        s.mean_y = sum_y / points.len() as f64;
        Some(s)
    }

    fn half_span(&self) -> f64 {
        (self.max_x - self.min_x) / 2.0
    }
}

/// Heuristic initial parameters for `model` given the data to be fitted.
pub fn initial_guess(model: ModelKind, points: &[DataPoint]) -> Result<Option<Vec<f64>>, ModelError> {
    let guess = match model {
        ModelKind::Linear => None,
        ModelKind::TrapFreq => Some(vec![10000.0, 0.05, 20.0, -2.0, 100.0, -0.1]),
        ModelKind::TrapFreq2 => Some(vec![10000.0, 0.05, 20.0, -2.0, 100.0]),
        ModelKind::RabiFreq => Some(vec![1.0, 1.0, 1.0, 0.0]),
        ModelKind::RabiLine => Some(vec![1.0, 1.0, 1.0, 1.0, 1.0, 1.0, 1.0, 0.0]),
        ModelKind::Erfc => Some(vec![1.0, 1.0, 1.0, 0.0]),
        ModelKind::SinPlusCos => Some(vec![1.0, 1.0, 1.0, 0.0]),
        ModelKind::FixedSin | ModelKind::FixedSin5kHz => Some(vec![1.0, 1.0, 0.0]),
        data_driven => {
            let s = DataSummary::from_points(points)
                .ok_or(ModelError::EmptyData(data_driven.display_name()))?;
            Some(data_driven_guess(data_driven, &s))
        }
    };
    Ok(guess)
}

fn data_driven_guess(model: ModelKind, s: &DataSummary) -> Vec<f64> {
    let rise = s.max_y - s.mean_y;
    match model {
        ModelKind::Parabola => vec![rise, s.x_of_max, s.mean_y],
        ModelKind::Sqrt => vec![s.max_y - s.min_y],
        ModelKind::Gaussian | ModelKind::Sinc | ModelKind::Sinc2 => {
            vec![rise, s.x_of_max, s.half_span(), s.mean_y]
        }
        // b = sigma makes `A` the peak height above the offset.
        ModelKind::Lorentzian => vec![rise, s.half_span(), s.x_of_max, s.half_span(), s.mean_y],
        ModelKind::Sin | ModelKind::Cos => vec![rise, 1.0, 0.0, s.mean_y],
        ModelKind::Exponential => vec![s.max_x - s.min_x, 1.0],
        other => vec![1.0; other.param_len()],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pts(xy: &[(f64, f64)]) -> Vec<DataPoint> {
        xy.iter().map(|&(x, y)| DataPoint { x, y }).collect()
    }

    #[test]
    fn summary_tracks_abs_peak() {
        let data = pts(&[(0.0, 1.0), (1.0, -5.0), (2.0, 4.0)]);
        let s = DataSummary::from_points(&data).unwrap();
        assert_eq!(s.x_of_max, 1.0);
        assert_eq!(s.max_y, 4.0);
        assert_eq!(s.min_y, -5.0);
        assert_eq!(s.mean_y, 0.0);
        assert!(DataSummary::from_points(&[]).is_none());
    }

    #[test]
    fn gaussian_guess_from_peak() {
        let data = pts(&[(0.0, 1.0), (1.0, 3.0), (2.0, 5.0), (3.0, 3.0), (4.0, 1.0)]);
        let g = initial_guess(ModelKind::Gaussian, &data).unwrap().unwrap();
        assert_eq!(g, vec![5.0 - 2.6, 2.0, 2.0, 2.6]);
    }

    #[test]
    fn lorentzian_guess_has_five_entries() {
        let data = pts(&[(0.0, 0.0), (1.0, 2.0), (2.0, 0.0)]);
        let g = initial_guess(ModelKind::Lorentzian, &data).unwrap().unwrap();
        assert_eq!(g.len(), ModelKind::Lorentzian.param_len());
        assert_eq!(g[1], g[3]);
    }

    #[test]
    fn every_guess_has_the_model_arity() {
        let data = pts(&[(0.0, 1.0), (1.0, 2.0), (2.0, 0.5)]);
        for kind in ModelKind::ALL {
            if let Some(g) = initial_guess(kind, &data).unwrap() {
                assert_eq!(g.len(), kind.param_len(), "{}", kind.display_name());
            }
        }
    }

    #[test]
    fn linear_has_no_preferred_start() {
        assert_eq!(initial_guess(ModelKind::Linear, &[]).unwrap(), None);
    }

    #[test]
    fn fixed_guesses_do_not_need_data() {
        assert!(initial_guess(ModelKind::TrapFreq, &[]).unwrap().is_some());
        assert!(initial_guess(ModelKind::FixedSin5kHz, &[]).unwrap().is_some());
    }

    #[test]
    fn data_driven_guess_rejects_empty_data() {
        let err = initial_guess(ModelKind::Parabola, &[]).unwrap_err();
        assert_eq!(err, ModelError::EmptyData("Parabola"));
    }
}
