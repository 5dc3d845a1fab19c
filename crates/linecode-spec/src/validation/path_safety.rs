//! Output path safety validation.

use crate::error::{ErrorCode, ValidationError, ValidationResult};

/// Checks if an output path is safe to write under the working directory.
pub fn is_safe_output_path(path: &str) -> bool {
    output_path_safety_errors(path).is_empty()
}

/// Validates the plot output path and its extension.
pub(super) fn validate_output_path(path: &str, result: &mut ValidationResult) {
    for message in output_path_safety_errors(path) {
        result.add_error(ValidationError::with_path(
            ErrorCode::UnsafeOutputPath,
            message,
            "output",
        ));
    }

    let is_png = path
        .rsplit_once('.')
        .map(|(_, ext)| ext.eq_ignore_ascii_case("png"))
        .unwrap_or(false);
    if !is_png {
        result.add_error(ValidationError::with_path(
            ErrorCode::PathFormatMismatch,
            format!("output path must end in '.png': '{}'", path),
            "output",
        ));
    }
}

pub(super) fn output_path_safety_errors(path: &str) -> Vec<String> {
    let mut errors = Vec::new();

    if path.is_empty() {
        errors.push("output path cannot be empty".to_string());
        return errors;
    }

    if path.starts_with('/') || path.starts_with('\\') {
        errors.push(format!(
            "output path must be relative, not absolute: '{}'",
            path
        ));
    }

    if path.len() >= 2 && path.chars().nth(1) == Some(':') {
        errors.push(format!(
            "output path must not contain drive letter: '{}'",
            path
        ));
    }

    if path.contains('\\') {
        errors.push(format!(
            "output path must use forward slashes only: '{}'",
            path
        ));
    }

    if path.split('/').any(|segment| segment == "..") {
        errors.push(format!("output path must not contain '..': '{}'", path));
    }

    errors
}
