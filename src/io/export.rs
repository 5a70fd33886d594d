//! Export evaluated points to CSV.
//!
//! The export is meant to be easy to consume in spreadsheets or by the
//! fitting scripts that read samples back in (`x,y` header).

use std::fs::File;
use std::io::Write;
use std::path::Path;

use tracing::info;

use crate::domain::DataPoint;
use crate::error::AppError;

/// Write `(x, y)` points to a CSV file.
pub fn write_points_csv(path: &Path, points: &[DataPoint]) -> Result<(), AppError> {
    let file = File::create(path)
        .map_err(|e| AppError::new(2, format!("Failed to create export CSV '{}': {e}", path.display())))?;
    write_points(file, points)?;
    info!(path = %path.display(), rows = points.len(), "wrote CSV");
    Ok(())
}

/// Write `(x, y)` points as CSV to any sink.
pub fn write_points<W: Write>(sink: W, points: &[DataPoint]) -> Result<(), AppError> {
    let mut writer = csv::Writer::from_writer(sink);
    writer
        .write_record(["x", "y"])
        .map_err(|e| AppError::new(2, format!("Failed to write export CSV header: {e}")))?;
    for p in points {
        writer
            .write_record([p.x.to_string(), p.y.to_string()])
            .map_err(|e| AppError::new(2, format!("Failed to write export CSV row: {e}")))?;
    }
    writer
        .flush()
        .map_err(|e| AppError::new(2, format!("Failed to flush export CSV: {e}")))?;
    Ok(())
}
