//! classify::shape - the coarse shape label attached to a series.
use serde::{Deserialize, Serialize};
use std::fmt;

/// Shape of a series as seen by the classifier.
///
/// Variants
/// --------
/// - `Trend`: a persistent upward or downward drift dominates.
/// - `Cyclic { lag }`: the series repeats with the detected period `lag`
///   (always ≥ 2 when produced by the classifier).
/// - `Random`: neither of the above; also the label for constant series.
///
/// Serialized as `{ "shape": "cyclic", "lag": 8 }` so labels can be pinned in
/// configuration files.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "shape", rename_all = "snake_case")]
pub enum ShapeLabel {
    Trend,
    Cyclic { lag: usize },
    Random,
}

impl ShapeLabel {
    pub const fn name(self) -> &'static str {
        match self {
            ShapeLabel::Trend => "trend",
            ShapeLabel::Cyclic { .. } => "cyclic",
            ShapeLabel::Random => "random",
        }
    }

    /// Detected period for `Cyclic`, `None` otherwise.
    pub const fn lag(self) -> Option<usize> {
        match self {
            ShapeLabel::Cyclic { lag } => Some(lag),
            _ => None,
        }
    }

    /// Build a label from its name and an optional lag.
    ///
    /// Matching is case-insensitive. `cyclic` requires a lag; the lag is
    /// ignored for the other shapes. Returns `None` for unknown names.
    pub fn from_parts(name: &str, lag: Option<usize>) -> Option<ShapeLabel> {
        match name.trim().to_ascii_lowercase().as_str() {
            "trend" => Some(ShapeLabel::Trend),
            "random" => Some(ShapeLabel::Random),
            "cyclic" => lag.map(|lag| ShapeLabel::Cyclic { lag }),
            _ => None,
        }
    }
}

impl fmt::Display for ShapeLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ShapeLabel::Cyclic { lag } => write!(f, "cyclic(lag={lag})"),
            other => f.write_str(other.name()),
        }
    }
}
