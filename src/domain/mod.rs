//! Domain types used throughout the crate.
//!
//! This module defines:
//!
//! - the model registry (`ModelKind`) and bound models (`CurveModel`)
//! - observations and residuals (`DataPoint`, `Residual`, `FitQuality`)
//! - file and run configuration types (`ModelFile`, `SampleConfig`, `RunConfig`)

pub mod types;

pub use types::*;
