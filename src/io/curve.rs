//! Read/write model JSON files.
//!
//! A model file is the portable hand-off to an external fitting script:
//! - model kind + positional parameters (and their names, for humans)
//! - when it was written
//! - optionally, a precomputed evaluated grid for quick plotting
//!
//! The schema is defined by `domain::ModelFile`.

use std::fs::File;
use std::path::Path;

use chrono::Utc;
use tracing::info;

use crate::domain::{CurveGrid, CurveModel, ModelFile};
use crate::error::AppError;

/// Build a model file for `model`, with an optional evaluated grid.
pub fn model_file(model: &CurveModel, grid: Option<CurveGrid>) -> ModelFile {
    ModelFile {
        tool: "fitm".to_string(),
        generated_at: Utc::now(),
        model: model.clone(),
        param_names: model.kind.param_names().iter().map(|s| s.to_string()).collect(),
        grid,
    }
}

/// Write a model JSON file.
pub fn write_model_json(path: &Path, file_data: &ModelFile) -> Result<(), AppError> {
    let file = File::create(path)
        .map_err(|e| AppError::new(2, format!("Failed to create model JSON '{}': {e}", path.display())))?;
    serde_json::to_writer_pretty(file, file_data)
        .map_err(|e| AppError::new(2, format!("Failed to write model JSON: {e}")))?;
    info!(path = %path.display(), model = file_data.model.kind.cli_name(), "wrote model file");
    Ok(())
}

/// Read a model JSON file, re-checking the parameter count.
pub fn read_model_json(path: &Path) -> Result<ModelFile, AppError> {
    let file = File::open(path)
        .map_err(|e| AppError::new(2, format!("Failed to open model JSON '{}': {e}", path.display())))?;
    let data: ModelFile =
        serde_json::from_reader(file).map_err(|e| AppError::new(2, format!("Invalid model JSON: {e}")))?;
    CurveModel::new(data.model.kind, data.model.params.clone())?;
    Ok(data)
}
