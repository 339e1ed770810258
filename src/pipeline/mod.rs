//! pipeline - end-to-end PSSG run over one series.
//!
//! Purpose
//! -------
//! Chain the numeric stages in their fixed order: statistics → classify →
//! salt → smooth, and hand the caller a self-contained [`PipelineResult`].
//!
//! Key behaviors
//! -------------
//! - [`run_pipeline`] validates [`PipelineOptions`] first, then runs every
//!   stage once; the statistics pass is shared between classification and
//!   salting.
//! - Results are owned by the caller; the crate keeps no session state, so
//!   independent runs can proceed concurrently.
//!
//! Downstream usage
//! ----------------
//! - The CLI and the Python bindings feed ingested series into
//!   [`run_pipeline`] and pass the result to a
//!   [`Renderer`](crate::render::Renderer) and to
//!   [`write_processed_csv`](crate::ingest::write_processed_csv).

pub mod options;
pub mod result;
pub mod run;

// ---- Re-exports (primary public surface) ----------------------------------

pub use self::options::PipelineOptions;
pub use self::result::PipelineResult;
pub use self::run::run_pipeline;
