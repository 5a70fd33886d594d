//! Terminal formatting for models, evaluations, guesses and residuals.

use crate::domain::{CurveModel, FitQuality, ModelKind, Residual};

/// Table of every model: CLI name, parameters and formula.
pub fn format_model_list() -> String {
    let mut out = String::new();
    out.push_str(
        format!("{:<16} {:<44} {}\n", "model", "parameters", "formula").trim_end(),
    );
    out.push('\n');
    out.push_str(format!("{:-<16} {:-<44} {:-<8}\n", "", "", "").trim_end());
    out.push('\n');

    for kind in ModelKind::ALL {
        out.push_str(
            format!(
                "{:<16} {:<44} {}\n",
                kind.cli_name(),
                truncate(&kind.param_names().join(", "), 44),
                kind.formula()
            )
            .trim_end(),
        );
        out.push('\n');
    }
    out
}

/// Two-column `x y` table of an evaluation.
pub fn format_values(xs: &[f64], ys: &[f64]) -> String {
    let mut out = String::new();
    out.push_str(&format!("{:>16} {:>20}\n", "x", "y"));
    for (x, y) in xs.iter().zip(ys) {
        out.push_str(&format!("{:>16} {:>20}\n", fmt_num(*x), fmt_num(*y)));
    }
    out
}

/// An initial guess, one parameter per line.
pub fn format_guess(kind: ModelKind, guess: Option<&[f64]>) -> String {
    let mut out = String::new();
    out.push_str(&format!("Initial guess for {} ({}):\n", kind.display_name(), kind.formula()));
    match guess {
        Some(values) => {
            for (name, v) in kind.param_names().iter().zip(values) {
                out.push_str(&format!("- {name:<14} {}\n", fmt_num(*v)));
            }
        }
        None => out.push_str("- none (use the fitter's default starting point)\n"),
    }
    out
}

/// Model, quality figures and the worst-fitting points.
pub fn format_residual_report(model: &CurveModel, quality: &FitQuality, worst: &[Residual]) -> String {
    let mut out = String::new();
    out.push_str(&format!("Model: {} = {}\n", model.kind.display_name(), model.kind.formula()));
    for (name, v) in model.named_params() {
        out.push_str(&format!("- {name:<14} {}\n", fmt_num(v)));
    }
    out.push_str(&format!(
        "\nPoints: n={} | SSE={:.6e} | RMSE={:.6e}\n",
        quality.n, quality.sse, quality.rmse
    ));

    if !worst.is_empty() {
        out.push_str("\nLargest residuals:\n");
        out.push_str(format!("{:>14} {:>14} {:>14} {:>14}\n", "x", "y_obs", "y_fit", "residual").trim_end());
        out.push('\n');
        for r in worst {
            out.push_str(&format!(
                "{:>14} {:>14} {:>14} {:>14}\n",
                fmt_num(r.point.x),
                fmt_num(r.point.y),
                fmt_num(r.y_fit),
                fmt_num(r.residual)
            ));
        }
    }
    out
}

/// Compact number format: fixed for moderate magnitudes, exponent otherwise.
fn fmt_num(v: f64) -> String {
    let a = v.abs();
    if v == 0.0 || (1e-3..1e6).contains(&a) || !v.is_finite() {
        format!("{v:.6}")
    } else {
        format!("{v:.6e}")
    }
}

fn truncate(s: &str, max: usize) -> String {
    if s.chars().count() <= max {
        return s.to_string();
    }
    let mut out = String::new();
    for (i, ch) in s.chars().enumerate() {
        if i + 1 >= max {
            break;
        }
        out.push(ch);
    }
    out.push('.');
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::DataPoint;

    #[test]
    fn model_list_has_every_model() {
        let txt = format_model_list();
        for kind in ModelKind::ALL {
            assert!(txt.contains(kind.cli_name()), "missing {}", kind.cli_name());
        }
        assert!(txt.contains("A*sin(0.0628*x - p) + C"));
    }

    #[test]
    fn number_format() {
        assert_eq!(fmt_num(3.0), "3.000000");
        assert_eq!(fmt_num(0.0), "0.000000");
        assert_eq!(fmt_num(1.5e-7), "1.500000e-7");
        assert_eq!(fmt_num(f64::NAN), "NaN");
    }

    #[test]
    fn guess_without_values() {
        let txt = format_guess(ModelKind::Linear, None);
        assert!(txt.contains("none"));
        let txt = format_guess(ModelKind::Exponential, Some(&[2.0, 1.0][..]));
        assert!(txt.contains("Amplitude"));
        assert!(txt.contains("2.000000"));
    }

    #[test]
    fn residual_report_lists_worst_points() {
        let model = CurveModel::new(ModelKind::Linear, vec![1.0, 0.0]).unwrap();
        let worst = vec![Residual {
            point: DataPoint { x: 1.0, y: 3.0 },
            y_fit: 1.0,
            residual: 2.0,
        }];
        let q = FitQuality { sse: 4.0, rmse: 2.0, n: 1 };
        let txt = format_residual_report(&model, &q, &worst);
        assert!(txt.contains("Largest residuals"));
        assert!(txt.contains("2.000000"));
    }

    #[test]
    fn truncate_long_text() {
        assert_eq!(truncate("abcdef", 4), "abc.");
        assert_eq!(truncate("abc", 4), "abc");
    }
}
