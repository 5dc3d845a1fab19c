//! Error types for the plot backend.

use linecode_spec::BackendError;
use thiserror::Error;

use crate::png::PngError;

/// Result type for plot operations.
pub type PlotResult<T> = Result<T, PlotError>;

/// Errors that can occur while producing a plot image.
#[derive(Debug, Error)]
pub enum PlotError {
    /// Canvas dimensions cannot hold an image.
    #[error("invalid canvas size: {width}x{height}")]
    InvalidCanvas {
        /// Requested width.
        width: u32,
        /// Requested height.
        height: u32,
    },

    /// PNG encoding failed.
    #[error("PNG error: {0}")]
    Png(#[from] PngError),
}

impl BackendError for PlotError {
    fn code(&self) -> &'static str {
        match self {
            PlotError::InvalidCanvas { .. } => "PLOT_001",
            PlotError::Png(_) => "PLOT_002",
        }
    }

    fn category(&self) -> &'static str {
        "plot"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_backend_error_codes() {
        let err = PlotError::InvalidCanvas {
            width: 0,
            height: 400,
        };
        assert_eq!(err.code(), "PLOT_001");
        assert_eq!(err.category(), "plot");
        assert_eq!(err.message(), "invalid canvas size: 0x400");

        let err = PlotError::from(PngError::InvalidDimensions("0x0".to_string()));
        assert_eq!(err.code(), "PLOT_002");
    }
}
