//! ingest::reader - header-driven CSV import.
//!
//! Purpose
//! -------
//! Read a two-column-ish CSV file (an axis column and a value column) into a
//! raw [`Series`] plus its axis values.
//!
//! Key behaviors
//! -------------
//! - Column choice comes from the header: a name containing `time`, `date`
//!   or `x` marks the axis column, one containing `value`, `y`, `data` or
//!   `measure` marks the value column. Matching is case-insensitive and the
//!   last matching column wins. Without matches, columns 0 and 1 are used.
//! - Rows whose value cell does not parse to a finite number are skipped
//!   with a `warn!`. A non-numeric axis cell falls back to the row's
//!   position in the output.
//! - When no row parses, the file is read again taking the first numeric
//!   cell of each row, with positional axis values.
use crate::{
    ingest::errors::{IngestError, IngestResult},
    series::Series,
};
use csv::{ReaderBuilder, StringRecord, Trim};
use std::{fs::File, io::Read, path::Path};
use tracing::{debug, warn};

const AXIS_KEYS: [&str; 3] = ["time", "date", "x"];
const VALUE_KEYS: [&str; 4] = ["value", "y", "data", "measure"];

/// Series read from a data file together with its axis.
#[derive(Debug, Clone, PartialEq)]
pub struct IngestedData {
    pub axis: Vec<f64>,
    pub series: Series,
}

/// Read series data from any CSV stream with a header row.
///
/// Errors
/// ------
/// - `IngestError::Io` / `IngestError::Csv` when the stream cannot be read.
/// - `IngestError::NoNumericData` when no row holds a finite number.
///
/// Examples
/// --------
/// ```rust
/// # use pssg::ingest::read_csv;
/// let text = "time,value\n0,1.5\n1,oops\n2,2.5\n";
/// let data = read_csv(text.as_bytes()).unwrap();
/// assert_eq!(data.series.to_vec(), vec![1.5, 2.5]);
/// assert_eq!(data.axis, vec![0.0, 2.0]);
/// ```
pub fn read_csv<R: Read>(reader: R) -> IngestResult<IngestedData> {
    let mut csv = ReaderBuilder::new().has_headers(false).flexible(true).trim(Trim::All).from_reader(reader);

    let mut records = Vec::new();
    for (line, record) in csv.records().enumerate() {
        match record {
            Ok(record) => records.push(record),
            Err(err) if err.is_io_error() => return Err(IngestError::Csv(err)),
            Err(err) => warn!(line = line + 1, %err, "skipping unreadable CSV record"),
        }
    }

    let Some((header, rows)) = records.split_first() else {
        return Err(IngestError::NoNumericData);
    };
    let (axis_col, value_col) = detect_columns(header);
    debug!(axis_col, value_col, rows = rows.len(), "detected CSV columns");

    let (mut axis, mut values) = read_columns(rows, axis_col, value_col);
    if values.is_empty() {
        debug!("no rows in detected columns; falling back to first numeric cell");
        values = rows.iter().filter_map(|row| row.iter().find_map(parse_finite)).collect();
        axis = (0..values.len()).map(|i| i as f64).collect();
    }
    if values.is_empty() {
        return Err(IngestError::NoNumericData);
    }

    Ok(IngestedData { axis, series: Series::new(values)? })
}

/// Open and read a CSV file.
pub fn load_csv(path: impl AsRef<Path>) -> IngestResult<IngestedData> {
    let file = File::open(path.as_ref())?;
    read_csv(file)
}

/// Axis and value column indices chosen from the header record.
///
/// Notes
/// -----
/// - Matching is by plain substring, and the axis keys are checked first:
///   any name containing `x` (`index`, `max_temp`, `box_count`) is taken as
///   the axis column even when it holds the measurements. Rename such
///   columns before import.
pub fn detect_columns(header: &StringRecord) -> (usize, usize) {
    let mut axis_col = 0;
    let mut value_col = 1;
    for (i, name) in header.iter().enumerate() {
        let name = name.to_ascii_lowercase();
        if AXIS_KEYS.iter().any(|key| name.contains(key)) {
            axis_col = i;
        } else if VALUE_KEYS.iter().any(|key| name.contains(key)) {
            value_col = i;
        }
    }
    (axis_col, value_col)
}

fn read_columns(rows: &[StringRecord], axis_col: usize, value_col: usize) -> (Vec<f64>, Vec<f64>) {
    let mut axis = Vec::with_capacity(rows.len());
    let mut values = Vec::with_capacity(rows.len());
    for (row_idx, row) in rows.iter().enumerate() {
        match row.get(value_col).and_then(parse_finite) {
            Some(value) => {
                let x = row.get(axis_col).and_then(parse_finite).unwrap_or(values.len() as f64);
                axis.push(x);
                values.push(value);
            }
            None => warn!(row = row_idx + 2, "skipping row without a numeric value"),
        }
    }
    (axis, values)
}

fn parse_finite(cell: &str) -> Option<f64> {
    cell.parse::<f64>().ok().filter(|v| v.is_finite())
}
