//! JSON output types for machine-readable CLI output.
//!
//! Every command that accepts `--json` prints exactly one of these documents
//! to stdout, so scripts can parse results without scraping colored text.

use linecode_backend_signal::SignalStats;
use linecode_spec::{Scheme, ValidationError, ValidationWarning};
use serde::{Deserialize, Serialize};

use crate::input::InputError;

/// Stable error codes for CLI-level failures.
///
/// Validation failures pass through their own `E00x` codes and render
/// failures through the backend's `PLOT_00x` codes.
pub mod error_codes {
    /// File could not be read
    pub const FILE_READ: &str = "CLI_001";
    /// Unknown file extension
    pub const UNKNOWN_EXTENSION: &str = "CLI_002";
    /// JSON parse error
    pub const JSON_PARSE: &str = "CLI_003";
    /// Output path missing for a PNG plot
    pub const MISSING_OUTPUT: &str = "CLI_004";
    /// Output file could not be written
    pub const FILE_WRITE: &str = "CLI_006";
}

/// A structured error in JSON output.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct JsonError {
    /// Stable error code (e.g., "CLI_001", "E002")
    pub code: String,
    /// Human-readable error message
    pub message: String,
    /// JSON path to the problematic field (if applicable)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub path: Option<String>,
    /// Source file path (if applicable)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub file: Option<String>,
}

impl JsonError {
    /// Creates a new error with code and message.
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            path: None,
            file: None,
        }
    }

    /// Sets the JSON path for this error.
    pub fn with_path(mut self, path: impl Into<String>) -> Self {
        self.path = Some(path.into());
        self
    }

    /// Sets the file path for this error.
    pub fn with_file(mut self, file: impl Into<String>) -> Self {
        self.file = Some(file.into());
        self
    }
}

impl From<&ValidationError> for JsonError {
    fn from(error: &ValidationError) -> Self {
        Self {
            code: error.code.to_string(),
            message: error.message.clone(),
            path: error.path.clone(),
            file: None,
        }
    }
}

/// A structured warning in JSON output.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct JsonWarning {
    /// Stable warning code (e.g., "W001")
    pub code: String,
    /// Human-readable warning message
    pub message: String,
    /// JSON path to the problematic field (if applicable)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub path: Option<String>,
}

impl From<&ValidationWarning> for JsonWarning {
    fn from(warning: &ValidationWarning) -> Self {
        Self {
            code: warning.code.to_string(),
            message: warning.message.clone(),
            path: warning.path.clone(),
        }
    }
}

/// Converts an input loading error to a JSON error.
pub fn input_error_to_json(error: &InputError, file: Option<&str>) -> JsonError {
    let code = match error {
        InputError::FileRead { .. } => error_codes::FILE_READ,
        InputError::UnknownExtension { .. } => error_codes::UNKNOWN_EXTENSION,
        InputError::JsonParse { .. } => error_codes::JSON_PARSE,
    };
    let json = JsonError::new(code, error.to_string());
    match file {
        Some(file) => json.with_file(file),
        None => json,
    }
}

/// Collects validation errors and warnings into their JSON forms.
pub fn validation_to_json(
    result: &linecode_spec::ValidationResult,
) -> (Vec<JsonError>, Vec<JsonWarning>) {
    (
        result.errors.iter().map(JsonError::from).collect(),
        result.warnings.iter().map(JsonWarning::from).collect(),
    )
}

/// Output of `linecode encode --json`.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct EncodeOutput {
    pub success: bool,
    pub errors: Vec<JsonError>,
    pub warnings: Vec<JsonWarning>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub result: Option<EncodeResult>,
}

/// Successful encode payload.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct EncodeResult {
    /// Resolved scheme; absent when the name was not recognized.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scheme: Option<Scheme>,
    pub amplitude: f64,
    pub bits: usize,
    pub samples: Vec<f64>,
    pub stats: SignalStats,
}

impl EncodeOutput {
    pub fn success(result: EncodeResult, warnings: Vec<JsonWarning>) -> Self {
        Self {
            success: true,
            errors: Vec::new(),
            warnings,
            result: Some(result),
        }
    }

    pub fn failure(errors: Vec<JsonError>, warnings: Vec<JsonWarning>) -> Self {
        Self {
            success: false,
            errors,
            warnings,
            result: None,
        }
    }
}

/// Output of `linecode plot --json`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PlotOutput {
    pub success: bool,
    pub errors: Vec<JsonError>,
    pub warnings: Vec<JsonWarning>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub result: Option<PlotResultJson>,
}

/// Successful plot payload.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct PlotResultJson {
    /// Written PNG path.
    pub path: String,
    /// BLAKE3 hash of the PNG bytes.
    pub hash: String,
    pub width: u32,
    pub height: u32,
    /// Number of samples plotted.
    pub samples: usize,
    /// False when the canvas was left blank.
    pub drawn: bool,
}

impl PlotOutput {
    pub fn success(result: PlotResultJson, warnings: Vec<JsonWarning>) -> Self {
        Self {
            success: true,
            errors: Vec::new(),
            warnings,
            result: Some(result),
        }
    }

    pub fn failure(errors: Vec<JsonError>, warnings: Vec<JsonWarning>) -> Self {
        Self {
            success: false,
            errors,
            warnings,
            result: None,
        }
    }
}

/// Output of `linecode validate --json`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ValidateOutput {
    pub success: bool,
    pub errors: Vec<JsonError>,
    pub warnings: Vec<JsonWarning>,
    /// Canonical scheme identifier, when the name resolved.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scheme: Option<Scheme>,
}

impl ValidateOutput {
    pub fn new(
        errors: Vec<JsonError>,
        warnings: Vec<JsonWarning>,
        scheme: Option<Scheme>,
    ) -> Self {
        Self {
            success: errors.is_empty(),
            errors,
            warnings,
            scheme,
        }
    }
}

/// One entry of `linecode schemes --json`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct SchemeInfo {
    pub id: Scheme,
    pub name: String,
    pub samples_per_bit: usize,
}

impl From<Scheme> for SchemeInfo {
    fn from(scheme: Scheme) -> Self {
        Self {
            id: scheme,
            name: scheme.display_name().to_string(),
            samples_per_bit: scheme.samples_per_bit(),
        }
    }
}
