//! render::errors - failures while drawing or writing charts.

#[cfg(feature = "python-bindings")]
use pyo3::{PyErr, exceptions::PyValueError};

pub type RenderResult<T> = Result<T, RenderError>;

/// RenderError - chart rendering or export failure.
///
/// Variants
/// --------
/// - `InvalidDimensions { width, height, margin }`
///   The canvas leaves no drawable plot area (zero size, or margins that
///   consume the whole canvas).
/// - `Image(image::ImageError)`
///   PNG encoding failed.
/// - `Io(std::io::Error)`
///   The output directory could not be created.
#[derive(Debug, thiserror::Error)]
pub enum RenderError {
    #[error("Canvas {width}x{height} with margin {margin} leaves no plot area")]
    InvalidDimensions { width: u32, height: u32, margin: u32 },

    #[error("image encoding failed: {0}")]
    Image(#[from] image::ImageError),

    #[error("cannot write chart: {0}")]
    Io(#[from] std::io::Error),
}

#[cfg(feature = "python-bindings")]
impl From<RenderError> for PyErr {
    fn from(err: RenderError) -> PyErr {
        PyValueError::new_err(format!("RenderError: {err}"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_dimensions_message_includes_sizes() {
        let msg = RenderError::InvalidDimensions { width: 0, height: 600, margin: 40 }.to_string();

        assert!(msg.contains("0x600"));
        assert!(msg.contains("40"));
    }
}
