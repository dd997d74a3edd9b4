//! Point-cloud CSV reader and writer.
use std::path::Path;

use anyhow::{anyhow, bail, Context, Result};
use csv::StringRecord;
use ndarray::{Array2, Axis};

use crate::transform::from_points;

/// Read a point cloud from a two-column `x,y` CSV file.
///
/// A header row is optional: a first record whose fields are not numbers is
/// skipped. Any later unparsable record is an error.
pub fn read_points_csv<P: AsRef<Path>>(path: P) -> Result<Array2<f64>> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .trim(csv::Trim::All)
        .from_path(&path)
        .with_context(|| format!("Failed to open point file: {}", path.as_ref().display()))?;

    let mut points = Vec::new();
    for (line_idx, record) in reader.records().enumerate() {
        let record = record.with_context(|| {
            format!("Failed to read line {} of {}", line_idx + 1, path.as_ref().display())
        })?;
        match parse_point(&record) {
            Ok(point) => points.push(point),
            Err(_) if line_idx == 0 => {
                log::debug!("Skipping header row: {:?}", record);
            }
            Err(e) => {
                return Err(e.context(format!(
                    "Invalid point on line {} of {}",
                    line_idx + 1,
                    path.as_ref().display()
                )))
            }
        }
    }

    if points.is_empty() {
        bail!("No points found in {}", path.as_ref().display());
    }
    log::debug!("Read {} points from {}", points.len(), path.as_ref().display());

    Ok(from_points(&points))
}

fn parse_point(record: &StringRecord) -> Result<(f64, f64)> {
    if record.len() != 2 {
        bail!("expected 2 columns (x, y), found {}", record.len());
    }
    let field = |idx: usize| -> Result<f64> {
        let raw = record.get(idx).unwrap_or_default();
        raw.parse::<f64>()
            .map_err(|e| anyhow!("'{}' is not a number: {}", raw, e))
    };
    Ok((field(0)?, field(1)?))
}

/// Write a point cloud as `x,y` rows with a header.
pub fn write_points_csv<P: AsRef<Path>>(path: P, points: &Array2<f64>) -> Result<()> {
    if points.nrows() != 2 {
        bail!("Point cloud must have 2 rows, found {}", points.nrows());
    }
    let mut writer = csv::Writer::from_path(&path)
        .with_context(|| format!("Failed to create point file: {}", path.as_ref().display()))?;
    writer.write_record(["x", "y"])?;
    for column in points.axis_iter(Axis(1)) {
        writer.write_record([column[0].to_string(), column[1].to_string()])?;
    }
    writer.flush()?;
    Ok(())
}
