//! Numeric checks shared by plot-request validation.

use std::fmt;

/// Largest canvas edge accepted, in pixels.
pub const MAX_CANVAS_DIMENSION: u32 = 4096;

/// Error type for a single failed numeric check.
#[derive(Debug, Clone, PartialEq)]
pub struct CommonValidationError {
    /// Human-readable error message.
    pub message: String,
}

impl CommonValidationError {
    /// Creates a new validation error with the given message.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

impl fmt::Display for CommonValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for CommonValidationError {}

/// Validate that a canvas is at least 1x1 and at most
/// [`MAX_CANVAS_DIMENSION`] on each edge.
///
/// ```
/// use linecode_spec::validation::common::validate_canvas_size;
///
/// assert!(validate_canvas_size(800, 400).is_ok());
/// assert!(validate_canvas_size(0, 400).is_err());
/// ```
pub fn validate_canvas_size(width: u32, height: u32) -> Result<(), CommonValidationError> {
    if width == 0 || height == 0 {
        return Err(CommonValidationError::new(format!(
            "canvas must be at least 1x1, got {}x{}",
            width, height
        )));
    }

    // The raster surface allocates one RGBA pixel per cell.
    if width > MAX_CANVAS_DIMENSION || height > MAX_CANVAS_DIMENSION {
        return Err(CommonValidationError::new(format!(
            "canvas is too large: max is {}x{}, got {}x{}",
            MAX_CANVAS_DIMENSION, MAX_CANVAS_DIMENSION, width, height
        )));
    }

    Ok(())
}

/// Validate that a value is finite and strictly positive.
///
/// ```
/// use linecode_spec::validation::common::validate_positive;
///
/// assert!(validate_positive("amplitude", 5.0).is_ok());
/// assert!(validate_positive("amplitude", 0.0).is_err());
/// assert!(validate_positive("amplitude", f64::NAN).is_err());
/// ```
pub fn validate_positive(name: &str, value: f64) -> Result<(), CommonValidationError> {
    if !value.is_finite() {
        return Err(CommonValidationError::new(format!(
            "{} must be finite, got {}",
            name, value
        )));
    }
    if value <= 0.0 {
        return Err(CommonValidationError::new(format!(
            "{} must be positive, got {}",
            name, value
        )));
    }
    Ok(())
}

/// Validate that a value is finite and within `[min, max]`.
pub fn validate_range(
    name: &str,
    value: f64,
    min: f64,
    max: f64,
) -> Result<(), CommonValidationError> {
    if !value.is_finite() {
        return Err(CommonValidationError::new(format!(
            "{} must be finite, got {}",
            name, value
        )));
    }
    if value < min || value > max {
        return Err(CommonValidationError::new(format!(
            "{} must be in [{}, {}], got {}",
            name, min, max, value
        )));
    }
    Ok(())
}

/// Validate that every channel of an RGBA color is in `[0, 1]`.
pub fn validate_color(name: &str, rgba: &[f64; 4]) -> Result<(), CommonValidationError> {
    for (channel, value) in ["r", "g", "b", "a"].iter().zip(rgba) {
        validate_range(&format!("{}.{}", name, channel), *value, 0.0, 1.0)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_canvas_size_bounds() {
        assert!(validate_canvas_size(1, 1).is_ok());
        assert!(validate_canvas_size(800, 400).is_ok());
        assert!(validate_canvas_size(4096, 4096).is_ok());

        let err = validate_canvas_size(0, 100).unwrap_err();
        assert!(err.message.contains("0x100"));

        let err = validate_canvas_size(4097, 10).unwrap_err();
        assert!(err.message.contains("max is"));
    }

    #[test]
    fn test_positive_rejects_zero_negative_and_nan() {
        assert!(validate_positive("amplitude", 0.001).is_ok());

        let err = validate_positive("amplitude", 0.0).unwrap_err();
        assert!(err.message.contains("positive"));
        assert!(validate_positive("amplitude", -3.0).is_err());

        let err = validate_positive("amplitude", f64::NAN).unwrap_err();
        assert!(err.message.contains("finite"));
        assert!(validate_positive("amplitude", f64::INFINITY).is_err());
    }

    #[test]
    fn test_range_is_inclusive() {
        assert!(validate_range("font", 4.0, 4.0, 96.0).is_ok());
        assert!(validate_range("font", 96.0, 4.0, 96.0).is_ok());

        let err = validate_range("font", 100.0, 4.0, 96.0).unwrap_err();
        assert!(err.message.contains("[4, 96]"));
    }

    #[test]
    fn test_color_channels_checked() {
        assert!(validate_color("style.grid_color", &[0.8, 0.8, 0.8, 1.0]).is_ok());

        let err = validate_color("style.grid_color", &[0.8, 1.2, 0.8, 1.0]).unwrap_err();
        assert!(err.message.contains("style.grid_color.g"));
    }
}
