//! ingest - CSV import of raw series and export of processed runs.
//!
//! Purpose
//! -------
//! Move data between files and the pipeline: [`read_csv`] / [`load_csv`]
//! build a raw [`Series`](crate::series::Series) from a headered CSV, and
//! [`write_processed_csv`] / [`save_processed`] write the three stages of a
//! [`PipelineResult`](crate::pipeline::PipelineResult) side by side.
//!
//! Key behaviors
//! -------------
//! - Import is lenient: unreadable rows are logged with `warn!` and skipped;
//!   only an input without any finite number is an error.
//! - Export uses the fixed header `x,original_y,salted_y,smoothed_y` with
//!   six-decimal numbers.

pub mod errors;
pub mod reader;
pub mod writer;

// ---- Re-exports (primary public surface) ----------------------------------

pub use self::errors::{IngestError, IngestResult};
pub use self::reader::{IngestedData, detect_columns, load_csv, read_csv};
pub use self::writer::{PROCESSED_HEADER, save_processed, write_processed_csv};
