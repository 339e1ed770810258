//! Series containers for the PSSG pipeline.
//!
//! Purpose
//! -------
//! Provide the validated, immutable numeric series that every pipeline stage
//! consumes and produces. A series is an ordered run of `(index, value)`
//! pairs whose index is implied by position, tagged with the [`Stage`] that
//! produced it.
//!
//! Key behaviors
//! -------------
//! - [`Series::new`] / [`Series::from_array`] reject empty and non-finite
//!   input once, so downstream stages can rely on clean data.
//! - [`Series::iter`] yields `(index, value)` pairs in index order; every call
//!   starts a fresh pass from index 0.
//! - Stage outputs are built through a crate-internal constructor that keeps
//!   the parent's length, so index ranges are preserved across the pipeline.
//!   It re-runs the finiteness check, so no stage can hand on `inf` or NaN.
//!
//! Invariants & assumptions
//! ------------------------
//! - `len() >= 1` and all values are finite.
//! - Indices are contiguous `0..len()`; gaps are not representable.
//! - A series is never mutated after construction.
//!
//! Testing notes
//! -------------
//! - Unit tests cover construction (happy path, empty, non-finite), accessors,
//!   and the restartable iterator.
use crate::series::{errors::SeriesResult, validation::validate_values};
use ndarray::{Array1, ArrayView1, Ix1};
use std::{fmt, iter::Enumerate, ops::Range};

/// Pipeline step that produced a [`Series`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Stage {
    Raw,
    Salted,
    Smoothed,
}

impl Stage {
    /// Lower-case stage name used in logs, file names and CSV headers.
    pub const fn name(self) -> &'static str {
        match self {
            Stage::Raw => "raw",
            Stage::Salted => "salted",
            Stage::Smoothed => "smoothed",
        }
    }
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// `Series` - validated numeric series for one pipeline stage.
///
/// Purpose
/// -------
/// Hold the values of one stage (`raw`, `salted` or `smoothed`) as an
/// `ndarray::Array1<f64>` together with the stage tag.
///
/// Fields
/// ------
/// - `values`: `Array1<f64>`
///   Observations in index order; non-empty and finite.
/// - `stage`: [`Stage`]
///   Which pipeline step produced the values.
///
/// Invariants
/// ----------
/// - `values.len() > 0`, every entry finite.
/// - Series derived from a parent (salted, smoothed) have the parent's length.
///
/// Performance
/// -----------
/// - Construction is a single O(n) validation scan; accessors are O(1) and
///   never allocate, except [`Series::to_vec`].
#[derive(Debug, Clone, PartialEq)]
pub struct Series {
    values: Array1<f64>,
    stage: Stage,
}

impl Series {
    /// Build a raw series from values ordered by position.
    ///
    /// Errors
    /// ------
    /// - `SeriesError::EmptySeries` when `values` is empty.
    /// - `SeriesError::NonFiniteValue { index, value }` on the first NaN/±∞.
    ///
    /// Examples
    /// --------
    /// ```rust
    /// # use pssg::series::{Series, Stage};
    /// let series = Series::new(vec![1.0, 2.5, 4.0]).unwrap();
    /// assert_eq!(series.len(), 3);
    /// assert_eq!(series.value_at(1), Some(2.5));
    /// assert_eq!(series.stage(), Stage::Raw);
    /// ```
    pub fn new(values: Vec<f64>) -> SeriesResult<Self> {
        Self::from_array(Array1::from(values))
    }

    /// Build a raw series from an existing array.
    ///
    /// Same validation as [`Series::new`].
    pub fn from_array(values: Array1<f64>) -> SeriesResult<Self> {
        validate_values(values.view())?;
        Ok(Series { values, stage: Stage::Raw })
    }

    /// Stage output sharing this series' index range.
    ///
    /// Errors
    /// ------
    /// - `SeriesError::NonFiniteValue` when the stage produced a non-finite
    ///   value.
    pub(crate) fn derive(&self, values: Array1<f64>, stage: Stage) -> SeriesResult<Series> {
        debug_assert_eq!(values.len(), self.values.len(), "stage output must keep the length");
        validate_values(values.view())?;
        Ok(Series { values, stage })
    }

    /// Number of points.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Always `false`: a series cannot be constructed empty.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Value at `index`, or `None` past the end.
    pub fn value_at(&self, index: usize) -> Option<f64> {
        self.values.get(index).copied()
    }

    /// Contiguous index range `0..len()`.
    pub fn index_range(&self) -> Range<usize> {
        0..self.values.len()
    }

    /// Borrowed view of the values.
    pub fn values(&self) -> ArrayView1<'_, f64> {
        self.values.view()
    }

    pub fn to_vec(&self) -> Vec<f64> {
        self.values.to_vec()
    }

    pub fn into_values(self) -> Array1<f64> {
        self.values
    }

    pub fn stage(&self) -> Stage {
        self.stage
    }

    /// `(index, value)` pairs in index order.
    pub fn iter(&self) -> SeriesIter<'_> {
        SeriesIter { inner: self.values.iter().enumerate() }
    }
}

impl TryFrom<Vec<f64>> for Series {
    type Error = crate::series::errors::SeriesError;

    fn try_from(values: Vec<f64>) -> SeriesResult<Self> {
        Series::new(values)
    }
}

impl<'a> IntoIterator for &'a Series {
    type Item = (usize, f64);
    type IntoIter = SeriesIter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Iterator over `(index, value)` pairs of a [`Series`].
#[derive(Clone)]
pub struct SeriesIter<'a> {
    inner: Enumerate<ndarray::iter::Iter<'a, f64, Ix1>>,
}

impl Iterator for SeriesIter<'_> {
    type Item = (usize, f64);

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().map(|(index, &value)| (index, value))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl ExactSizeIterator for SeriesIter<'_> {}
