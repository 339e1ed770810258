//! ingest::writer - processed-data CSV export.
//!
//! Writes one row per index with the header `x,original_y,salted_y,smoothed_y`
//! and every number formatted with six decimals.
use crate::{
    ingest::errors::{IngestError, IngestResult},
    pipeline::PipelineResult,
};
use std::{fs::File, io::Write, path::Path};

pub const PROCESSED_HEADER: [&str; 4] = ["x", "original_y", "salted_y", "smoothed_y"];

/// Write the three stages of a run as CSV.
///
/// Parameters
/// ----------
/// - `writer`: any `io::Write` sink.
/// - `result`: the pipeline run to export.
/// - `axis`: optional x values (e.g. from [`read_csv`](crate::ingest::read_csv));
///   the index is used when `None`.
///
/// Errors
/// ------
/// - `IngestError::AxisLengthMismatch` when `axis` and the series differ in
///   length.
/// - `IngestError::Csv` / `IngestError::Io` on write failure.
pub fn write_processed_csv<W: Write>(writer: W, result: &PipelineResult, axis: Option<&[f64]>) -> IngestResult<()> {
    if let Some(axis) = axis {
        if axis.len() != result.len() {
            return Err(IngestError::AxisLengthMismatch { expected: result.len(), actual: axis.len() });
        }
    }

    let mut csv = csv::Writer::from_writer(writer);
    csv.write_record(PROCESSED_HEADER)?;

    let rows = result.raw().iter().zip(result.salted().iter()).zip(result.smoothed().iter());
    for (((i, raw), (_, salted)), (_, smoothed)) in rows {
        let x = axis.map_or(i as f64, |axis| axis[i]);
        csv.write_record([
            format!("{x:.6}"),
            format!("{raw:.6}"),
            format!("{salted:.6}"),
            format!("{smoothed:.6}"),
        ])?;
    }
    csv.flush()?;
    Ok(())
}

/// Create (or truncate) `path` and write the processed CSV into it.
pub fn save_processed(path: impl AsRef<Path>, result: &PipelineResult, axis: Option<&[f64]>) -> IngestResult<()> {
    let file = File::create(path.as_ref())?;
    write_processed_csv(file, result, axis)
}
