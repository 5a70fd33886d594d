//! CSV ingest for `(x, y)` samples.
//!
//! The file must have a header row with `x` and `y` columns (matched
//! case-insensitively after trimming). Other columns are ignored. Rows that
//! fail to parse are collected as `RowError`s rather than aborting the load,
//! so one bad line in a long scan does not hide the rest of the data.

use std::collections::HashMap;
use std::fs::File;
use std::io::Read;
use std::path::Path;

use csv::StringRecord;
use tracing::{debug, warn};

use crate::domain::DataPoint;
use crate::error::AppError;

/// A row that could not be used.
#[derive(Debug, Clone, PartialEq)]
pub struct RowError {
    pub line: usize,
    pub message: String,
}

/// Ingest output: parsed points plus the rows that were skipped.
#[derive(Debug, Clone)]
pub struct IngestedData {
    pub points: Vec<DataPoint>,
    pub row_errors: Vec<RowError>,
    pub rows_read: usize,
}

/// Load samples from a CSV file.
pub fn load_points(path: &Path) -> Result<IngestedData, AppError> {
    let file = File::open(path)
        .map_err(|e| AppError::new(2, format!("Failed to open CSV '{}': {e}", path.display())))?;
    let data = read_points(file)?;
    debug!(
        path = %path.display(),
        rows = data.rows_read,
        used = data.points.len(),
        "loaded samples"
    );
    for err in &data.row_errors {
        warn!(line = err.line, "{}", err.message);
    }
    Ok(data)
}

/// Parse samples from any CSV source.
pub fn read_points<R: Read>(source: R) -> Result<IngestedData, AppError> {
    let mut reader = csv::ReaderBuilder::new()
        .flexible(true)
        .trim(csv::Trim::All)
        .from_reader(source);

    let headers = reader
        .headers()
        .map_err(|e| AppError::new(2, format!("Failed to read CSV headers: {e}")))?
        .clone();
    let header_map = build_header_map(&headers);
    let x_idx = column(&header_map, "x")?;
    let y_idx = column(&header_map, "y")?;

    let mut points = Vec::new();
    let mut row_errors = Vec::new();
    let mut rows_read = 0usize;

    for (idx, result) in reader.records().enumerate() {
        // +2: header is line 1, records are 1-based after it.
        let line = idx + 2;
        rows_read += 1;

        let record = match result {
            Ok(r) => r,
            Err(e) => {
                row_errors.push(RowError {
                    line,
                    message: format!("CSV parse error: {e}"),
                });
                continue;
            }
        };

        match parse_row(&record, x_idx, y_idx) {
            Ok(p) => points.push(p),
            Err(message) => row_errors.push(RowError { line, message }),
        }
    }

    if points.is_empty() {
        return Err(AppError::new(3, "No valid rows in sample CSV."));
    }

    Ok(IngestedData {
        points,
        row_errors,
        rows_read,
    })
}

fn build_header_map(headers: &StringRecord) -> HashMap<String, usize> {
    headers
        .iter()
        .enumerate()
        .map(|(i, h)| (h.trim().to_ascii_lowercase(), i))
        .collect()
}

fn column(header_map: &HashMap<String, usize>, name: &str) -> Result<usize, AppError> {
    header_map
        .get(name)
        .copied()
        .ok_or_else(|| AppError::new(2, format!("Missing required column: `{name}`")))
}

fn parse_row(record: &StringRecord, x_idx: usize, y_idx: usize) -> Result<DataPoint, String> {
    Ok(DataPoint {
        x: parse_field(record, x_idx, "x")?,
        y: parse_field(record, y_idx, "y")?,
    })
}

fn parse_field(record: &StringRecord, idx: usize, name: &str) -> Result<f64, String> {
    let raw = record
        .get(idx)
        .filter(|s| !s.is_empty())
        .ok_or_else(|| format!("Missing value: `{name}`"))?;
    raw.parse::<f64>()
        .map_err(|_| format!("Invalid number for `{name}`: '{raw}'"))
}
