//! Synthetic `(x, y)` samples drawn from a model plus Gaussian noise.
//!
//! Handy for exercising an external fitter: generate data from known
//! parameters, fit it, and compare.

use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};

use rand::prelude::*;
use rand::rngs::StdRng;
use rand_distr::Normal;
use tracing::debug;

use crate::domain::{CurveModel, DataPoint, SampleConfig};
use crate::error::AppError;
use crate::math::linspace;

/// Draw `config.count` noisy observations of `model` over `[x_min, x_max]`.
///
/// The same model and config always produce the same sample.
pub fn generate_sample(model: &CurveModel, config: &SampleConfig) -> Result<Vec<DataPoint>, AppError> {
    if config.count == 0 {
        return Err(AppError::new(2, "Sample count must be > 0."));
    }
    if !(config.x_min.is_finite() && config.x_max.is_finite() && config.x_max > config.x_min) {
        return Err(AppError::new(2, "Invalid x range for sample generation."));
    }
    if !(config.noise.is_finite() && config.noise >= 0.0) {
        return Err(AppError::new(2, "Noise level must be finite and >= 0."));
    }

    let seed = sample_seed(model, config);
    let mut rng = StdRng::seed_from_u64(seed);
    let normal = Normal::new(0.0, config.noise)
        .map_err(|e| AppError::new(4, format!("Noise distribution error: {e}")))?;

    let mut xs = if config.random_x {
        (0..config.count)
            .map(|_| rng.gen_range(config.x_min..=config.x_max))
            .collect::<Vec<_>>()
    } else if config.count == 1 {
        vec![config.x_min]
    } else {
        linspace(config.x_min, config.x_max, config.count)
    };
    xs.sort_by(|a, b| a.total_cmp(b));

    let ys = model.eval(xs.as_slice())?;
    let points = xs
        .into_iter()
        .zip(ys)
        .map(|(x, y)| DataPoint {
            x,
            y: y + normal.sample(&mut rng),
        })
        .collect::<Vec<_>>();

    debug!(
        model = model.kind.cli_name(),
        n = points.len(),
        seed,
        "generated synthetic sample"
    );
    Ok(points)
}

fn sample_seed(model: &CurveModel, config: &SampleConfig) -> u64 {
    let mut hasher = DefaultHasher::new();
    model.kind.hash(&mut hasher);
    for p in &model.params {
        p.to_bits().hash(&mut hasher);
    }
    config.seed.hash(&mut hasher);
    config.count.hash(&mut hasher);
    config.x_min.to_bits().hash(&mut hasher);
    config.x_max.to_bits().hash(&mut hasher);
    config.noise.to_bits().hash(&mut hasher);
    config.random_x.hash(&mut hasher);
    hasher.finish()
}
