//! Shared domain types.
//!
//! These types are intentionally kept lightweight and serializable so they can be:
//!
//! - used in-memory while evaluating models
//! - exported to JSON/CSV
//! - reloaded later by an external fitting script

use std::path::PathBuf;

use chrono::{DateTime, Utc};
use clap::ValueEnum;
use serde::{Deserialize, Serialize};

use crate::error::ModelError;

/// Every fit function known to the library.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "kebab-case")]
pub enum ModelKind {
    Linear,
    Parabola,
    Sqrt,
    Gaussian,
    Lorentzian,
    Sin,
    Cos,
    Sinc,
    #[value(name = "sinc2")]
    Sinc2,
    TrapFreq,
    #[value(name = "trap-freq2")]
    TrapFreq2,
    RabiFreq,
    Exponential,
    RabiLine,
    Erfc,
    SinPlusCos,
    FixedSin,
    #[serde(rename = "fixed-sin-5khz")]
    #[value(name = "fixed-sin-5khz")]
    FixedSin5kHz,
}

impl ModelKind {
    pub const ALL: [ModelKind; 18] = [
        ModelKind::Linear,
        ModelKind::Parabola,
        ModelKind::Sqrt,
        ModelKind::Gaussian,
        ModelKind::Lorentzian,
        ModelKind::Sin,
        ModelKind::Cos,
        ModelKind::Sinc,
        ModelKind::Sinc2,
        ModelKind::TrapFreq,
        ModelKind::TrapFreq2,
        ModelKind::RabiFreq,
        ModelKind::Exponential,
        ModelKind::RabiLine,
        ModelKind::Erfc,
        ModelKind::SinPlusCos,
        ModelKind::FixedSin,
        ModelKind::FixedSin5kHz,
    ];

    /// Human-readable label for terminal output.
    pub fn display_name(self) -> &'static str {
        match self {
            ModelKind::Linear => "Linear",
            ModelKind::Parabola => "Parabola",
            ModelKind::Sqrt => "Sqrt",
            ModelKind::Gaussian => "Gaussian",
            ModelKind::Lorentzian => "Lorentzian",
            ModelKind::Sin => "Sin",
            ModelKind::Cos => "Cos",
            ModelKind::Sinc => "Sinc",
            ModelKind::Sinc2 => "Sinc2",
            ModelKind::TrapFreq => "TrapFreq",
            ModelKind::TrapFreq2 => "TrapFreq2",
            ModelKind::RabiFreq => "RabiFreq",
            ModelKind::Exponential => "Exponential",
            ModelKind::RabiLine => "RabiLine",
            ModelKind::Erfc => "ErfcFit",
            ModelKind::SinPlusCos => "SinPlusCos",
            ModelKind::FixedSin => "FixedSin",
            ModelKind::FixedSin5kHz => "FixedSin5kHz",
        }
    }

    /// Name accepted on the command line and in model files.
    pub fn cli_name(self) -> &'static str {
        match self {
            ModelKind::Linear => "linear",
            ModelKind::Parabola => "parabola",
            ModelKind::Sqrt => "sqrt",
            ModelKind::Gaussian => "gaussian",
            ModelKind::Lorentzian => "lorentzian",
            ModelKind::Sin => "sin",
            ModelKind::Cos => "cos",
            ModelKind::Sinc => "sinc",
            ModelKind::Sinc2 => "sinc2",
            ModelKind::TrapFreq => "trap-freq",
            ModelKind::TrapFreq2 => "trap-freq2",
            ModelKind::RabiFreq => "rabi-freq",
            ModelKind::Exponential => "exponential",
            ModelKind::RabiLine => "rabi-line",
            ModelKind::Erfc => "erfc",
            ModelKind::SinPlusCos => "sin-plus-cos",
            ModelKind::FixedSin => "fixed-sin",
            ModelKind::FixedSin5kHz => "fixed-sin-5khz",
        }
    }

    /// Positional parameter names, in call order (after `x`).
    pub fn param_names(self) -> &'static [&'static str] {
        match self {
            ModelKind::Linear => &["m", "b"],
            ModelKind::Parabola => &["A", "x0", "C"],
            ModelKind::Sqrt => &["A"],
            ModelKind::Gaussian => &["A", "x0", "sigma", "C"],
            ModelKind::Lorentzian => &["A", "b", "x0", "sigma", "C"],
            ModelKind::Sin | ModelKind::Cos => &["A", "omega", "phi", "C"],
            ModelKind::Sinc | ModelKind::Sinc2 => &["A", "x0", "sigma", "C"],
            ModelKind::TrapFreq => &["Amplitude", "b", "l", "Center", "Offset", "Linear Slope"],
            ModelKind::TrapFreq2 => &["Amplitude", "b", "l", "Center", "Offset"],
            ModelKind::RabiFreq => &["Amplitude", "b", "Center", "Offset"],
            ModelKind::Exponential => &["Amplitude", "sigma"],
            ModelKind::RabiLine => &["b", "l", "m", "A", "s", "j", "k", "p"],
            ModelKind::Erfc => &["Amp", "Center", "b", "Offset"],
            ModelKind::SinPlusCos => &["omega", "Sin Amp", "Cos Amp", "Offset"],
            ModelKind::FixedSin | ModelKind::FixedSin5kHz => &["Amplitude", "phase", "offset"],
        }
    }

    /// Number of parameters the model takes.
    pub fn param_len(self) -> usize {
        self.param_names().len()
    }

    /// Closed-form expression, for listings.
    pub fn formula(self) -> &'static str {
        match self {
            ModelKind::Linear => "m*x + b",
            ModelKind::Parabola => "A*(x - x0)^2 + C",
            ModelKind::Sqrt => "A*sqrt(x)",
            ModelKind::Gaussian => "A*exp(-(x - x0)^2/(2*sigma^2)) + C",
            ModelKind::Lorentzian => "A*b^2/((x - x0)^2 + sigma^2) + C",
            ModelKind::Sin => "A*sin(omega*x - phi) + C",
            ModelKind::Cos => "A*cos(omega*x - phi) + C",
            ModelKind::Sinc => "A*sinc((x - x0)/sigma) + C",
            ModelKind::Sinc2 => "A*sinc((x - x0)/sigma)^2 + C",
            ModelKind::TrapFreq => "A*exp(-x/b)*sin(l*x - x0) + C + D*x",
            ModelKind::TrapFreq2 => "A*exp(-x/b)*sin(l*x - x0) + C",
            ModelKind::RabiFreq => "A*sin(b/2*x - x0)^2 + C",
            ModelKind::Exponential => "A*exp(-x/sigma)",
            ModelKind::RabiLine => "(b^2/(l^2 + (x - m)^2))*(A*sin(sqrt(s^2 + (x - j)^2)*k)^2 + p)",
            ModelKind::Erfc => "A*erfc((x - x0)/b) + C",
            ModelKind::SinPlusCos => "A*sin(omega*x) + B*cos(omega*x) + C",
            ModelKind::FixedSin => "A*sin(0.0628*x - p) + C",
            ModelKind::FixedSin5kHz => "A*sin(0.0314*x - p) + C",
        }
    }

    /// Look up a model by its CLI name (case-insensitive).
    pub fn from_name(name: &str) -> Result<ModelKind, ModelError> {
        let wanted = name.trim().to_ascii_lowercase();
        ModelKind::ALL
            .into_iter()
            .find(|k| k.cli_name() == wanted || k.display_name().eq_ignore_ascii_case(&wanted))
            .ok_or_else(|| ModelError::UnknownModel(name.to_string()))
    }
}

/// A model together with a concrete parameter vector.
///
/// `CurveModel::new` (see `models::model`) rejects a wrong parameter count up
/// front. Deserialized models are re-checked on every evaluation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CurveModel {
    pub kind: ModelKind,
    pub params: Vec<f64>,
}

/// A single `(x, y)` observation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DataPoint {
    pub x: f64,
    pub y: f64,
}

/// Per-observation comparison against a model.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Residual {
    pub point: DataPoint,
    pub y_fit: f64,
    pub residual: f64,
}

/// Goodness-of-fit figures for a fixed parameter set.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FitQuality {
    pub sse: f64,
    pub rmse: f64,
    pub n: usize,
}

/// An evaluated grid, stored alongside a model for quick re-plotting.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CurveGrid {
    pub x: Vec<f64>,
    pub y: Vec<f64>,
}

/// A saved model file (JSON).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ModelFile {
    pub tool: String,
    pub generated_at: DateTime<Utc>,
    pub model: CurveModel,
    pub param_names: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub grid: Option<CurveGrid>,
}

/// Settings for synthetic sample generation.
#[derive(Debug, Clone)]
pub struct SampleConfig {
    pub x_min: f64,
    pub x_max: f64,
    pub count: usize,
    /// Standard deviation of additive Gaussian noise on `y`.
    pub noise: f64,
    pub seed: u64,
    /// Draw `x` uniformly at random instead of on an even grid.
    pub random_x: bool,
}

/// Process-level settings resolved from the environment and CLI flags.
#[derive(Debug, Clone, Default)]
pub struct RunConfig {
    /// Style sheet to use instead of the bundled one.
    pub style_path: Option<PathBuf>,
    /// Verbosity (0 = warnings only).
    pub verbosity: u8,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn names_are_unique_and_resolvable() {
        for kind in ModelKind::ALL {
            assert_eq!(ModelKind::from_name(kind.cli_name()), Ok(kind));
            assert_eq!(ModelKind::from_name(kind.display_name()), Ok(kind));
        }
        assert!(ModelKind::from_name("voigt").is_err());
    }

    #[test]
    fn serde_names_match_cli_names() {
        for kind in ModelKind::ALL {
            let json = serde_json::to_string(&kind).unwrap();
            assert_eq!(json, format!("\"{}\"", kind.cli_name()));
        }
    }

    #[test]
    fn clap_names_match_cli_names() {
        for kind in ModelKind::ALL {
            let value = kind.to_possible_value().unwrap();
            assert_eq!(value.get_name(), kind.cli_name());
        }
    }
}
