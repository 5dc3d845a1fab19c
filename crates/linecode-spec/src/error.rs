//! Error types for plot-request validation and processing.

use thiserror::Error;

/// Error codes for plot-request validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    /// E001: Unsupported spec_version
    UnsupportedSpecVersion,
    /// E002: Amplitude is zero, negative, or not finite
    InvalidAmplitude,
    /// E003: Canvas dimensions are zero or too large
    InvalidCanvasSize,
    /// E004: Unsafe output path (absolute or traversal)
    UnsafeOutputPath,
    /// E005: Output path extension is not `.png`
    PathFormatMismatch,
    /// E006: Style value out of range (line width, font size)
    InvalidStyle,
}

impl ErrorCode {
    /// Returns the error code string (e.g., "E001").
    pub fn code(&self) -> &'static str {
        match self {
            ErrorCode::UnsupportedSpecVersion => "E001",
            ErrorCode::InvalidAmplitude => "E002",
            ErrorCode::InvalidCanvasSize => "E003",
            ErrorCode::UnsafeOutputPath => "E004",
            ErrorCode::PathFormatMismatch => "E005",
            ErrorCode::InvalidStyle => "E006",
        }
    }
}

impl std::fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.code())
    }
}

/// Warning codes for plot-request validation.
///
/// Warnings never block plotting: they describe input the encoder accepts
/// permissively but that probably isn't what the user meant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum WarningCode {
    /// W001: Bit string contains characters other than '0' and '1'
    NonBinaryCharacters,
    /// W002: Scheme name is not recognized; nothing will be plotted
    UnknownScheme,
    /// W003: Bit string is empty; nothing will be plotted
    EmptyBitString,
    /// W004: More samples than horizontal pixels
    SubPixelBitWidth,
}

impl WarningCode {
    /// Returns the warning code string (e.g., "W001").
    pub fn code(&self) -> &'static str {
        match self {
            WarningCode::NonBinaryCharacters => "W001",
            WarningCode::UnknownScheme => "W002",
            WarningCode::EmptyBitString => "W003",
            WarningCode::SubPixelBitWidth => "W004",
        }
    }
}

impl std::fmt::Display for WarningCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.code())
    }
}

/// A coded validation finding with a message and optional JSON path.
///
/// Errors and warnings share this shape and differ only in their code type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Diagnostic<C> {
    /// The error or warning code.
    pub code: C,
    /// Human-readable message.
    pub message: String,
    /// JSON path to the problematic field (e.g., "canvas.width").
    pub path: Option<String>,
}

/// A blocking validation finding.
pub type ValidationError = Diagnostic<ErrorCode>;

/// An advisory validation finding.
pub type ValidationWarning = Diagnostic<WarningCode>;

impl<C> Diagnostic<C> {
    pub fn new(code: C, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
            path: None,
        }
    }

    pub fn with_path(code: C, message: impl Into<String>, path: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
            path: Some(path.into()),
        }
    }
}

impl<C: std::fmt::Display> std::fmt::Display for Diagnostic<C> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.code, self.message)?;
        match &self.path {
            Some(path) => write!(f, " (at {})", path),
            None => Ok(()),
        }
    }
}

impl<C: std::fmt::Display + std::fmt::Debug> std::error::Error for Diagnostic<C> {}

/// Top-level error type for plot-request operations.
#[derive(Debug, Error)]
pub enum SpecError {
    /// JSON parsing error.
    #[error("JSON parse error: {0}")]
    JsonParse(#[from] serde_json::Error),

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Everything validation found, errors and warnings alike.
///
/// Validation never stops at the first problem, so a single pass reports
/// every bad field.
#[derive(Debug, Clone, Default)]
pub struct ValidationResult {
    pub errors: Vec<ValidationError>,
    pub warnings: Vec<ValidationWarning>,
}

impl ValidationResult {
    pub fn success() -> Self {
        Self::default()
    }

    pub fn add_error(&mut self, error: ValidationError) {
        self.errors.push(error);
    }

    pub fn add_warning(&mut self, warning: ValidationWarning) {
        self.warnings.push(warning);
    }

    /// Returns true if there are no errors. Warnings never block.
    pub fn is_ok(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn has_error(&self, code: ErrorCode) -> bool {
        self.errors.iter().any(|e| e.code == code)
    }

    pub fn has_warning(&self, code: WarningCode) -> bool {
        self.warnings.iter().any(|w| w.code == code)
    }
}

/// Common trait for backend errors.
///
/// Each backend error type implements this trait so the CLI can report a
/// stable code and category without depending on backend internals.
pub trait BackendError: std::error::Error {
    /// Get the error code for reporting (e.g. "PLOT_001").
    fn code(&self) -> &'static str;

    /// Get a human-readable message describing the error.
    fn message(&self) -> String {
        self.to_string()
    }

    /// Get the error category for grouping related errors.
    fn category(&self) -> &'static str;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_codes_are_stable() {
        assert_eq!(ErrorCode::UnsupportedSpecVersion.code(), "E001");
        assert_eq!(ErrorCode::InvalidAmplitude.code(), "E002");
        assert_eq!(ErrorCode::InvalidStyle.to_string(), "E006");
        assert_eq!(WarningCode::NonBinaryCharacters.code(), "W001");
        assert_eq!(WarningCode::SubPixelBitWidth.to_string(), "W004");
    }

    #[test]
    fn test_display_includes_path() {
        let err = ValidationError::with_path(
            ErrorCode::InvalidAmplitude,
            "amplitude must be positive, got 0",
            "amplitude",
        );
        assert_eq!(
            err.to_string(),
            "E002: amplitude must be positive, got 0 (at amplitude)"
        );

        let warning = ValidationWarning::new(WarningCode::EmptyBitString, "nothing to plot");
        assert_eq!(warning.to_string(), "W003: nothing to plot");
    }

    #[test]
    fn test_result_tracks_ok_flag() {
        let mut result = ValidationResult::default();
        assert!(result.is_ok());

        result.add_warning(ValidationWarning::new(WarningCode::UnknownScheme, "x"));
        assert!(result.is_ok());
        assert!(result.has_warning(WarningCode::UnknownScheme));

        result.add_error(ValidationError::new(ErrorCode::InvalidCanvasSize, "y"));
        assert!(!result.is_ok());
        assert!(result.has_error(ErrorCode::InvalidCanvasSize));
    }
}
