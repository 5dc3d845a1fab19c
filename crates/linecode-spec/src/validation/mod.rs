//! Plot-request validation.
//!
//! Validation separates input the pipeline must refuse (errors) from input it
//! accepts but that likely isn't intended (warnings). Encoding itself stays
//! permissive: a request that only carries warnings still encodes and plots
//! exactly as the encoder and renderer define.

pub mod common;
mod path_safety;

use crate::error::{ErrorCode, ValidationError, ValidationResult, ValidationWarning, WarningCode};
use crate::plot::{PlotSpec, PlotStyle, SPEC_VERSION};

pub use common::{
    validate_canvas_size, validate_color, validate_positive, validate_range,
    CommonValidationError, MAX_CANVAS_DIMENSION,
};
pub use path_safety::is_safe_output_path;

use path_safety::validate_output_path;

/// Largest line width accepted, in pixels.
pub const MAX_LINE_WIDTH: f64 = 64.0;

/// Accepted label font sizes, in pixels.
pub const FONT_SIZE_RANGE: (f64, f64) = (4.0, 96.0);

/// Validates a plot request.
///
/// ```
/// use linecode_spec::{PlotSpec, Scheme};
/// use linecode_spec::validation::validate_plot_spec;
///
/// let spec = PlotSpec::builder("1011", Scheme::NrzI).amplitude(5.0).build();
/// assert!(validate_plot_spec(&spec).is_ok());
/// ```
pub fn validate_plot_spec(spec: &PlotSpec) -> ValidationResult {
    let mut result = ValidationResult::success();

    if spec.spec_version != SPEC_VERSION {
        result.add_error(ValidationError::with_path(
            ErrorCode::UnsupportedSpecVersion,
            format!(
                "spec_version must be {}, got {}",
                SPEC_VERSION, spec.spec_version
            ),
            "spec_version",
        ));
    }

    validate_amplitude(spec.amplitude, &mut result);

    if let Err(e) = validate_canvas_size(spec.canvas.width, spec.canvas.height) {
        result.add_error(ValidationError::with_path(
            ErrorCode::InvalidCanvasSize,
            e.message,
            "canvas",
        ));
    }

    validate_style(&spec.style, &mut result);

    if let Some(output) = &spec.output {
        validate_output_path(output, &mut result);
    }

    validate_bits(spec, &mut result);

    result
}

fn validate_amplitude(amplitude: Option<f64>, result: &mut ValidationResult) {
    let Some(amplitude) = amplitude else {
        result.add_error(ValidationError::with_path(
            ErrorCode::InvalidAmplitude,
            "amplitude is required",
            "amplitude",
        ));
        return;
    };

    if let Err(e) = validate_positive("amplitude", amplitude) {
        result.add_error(ValidationError::with_path(
            ErrorCode::InvalidAmplitude,
            e.message,
            "amplitude",
        ));
    }
}

fn validate_style(style: &PlotStyle, result: &mut ValidationResult) {
    let colors = [
        ("style.background", &style.background),
        ("style.grid_color", &style.grid_color),
        ("style.axis_color", &style.axis_color),
        ("style.trace_color", &style.trace_color),
        ("style.label_color", &style.label_color),
    ];
    for (path, rgba) in colors {
        if let Err(e) = validate_color(path, rgba) {
            result.add_error(ValidationError::with_path(
                ErrorCode::InvalidStyle,
                e.message,
                path,
            ));
        }
    }

    let widths = [
        ("style.grid_line_width", style.grid_line_width),
        ("style.axis_line_width", style.axis_line_width),
        ("style.trace_line_width", style.trace_line_width),
    ];
    for (path, width) in widths {
        let check = validate_positive(path, width)
            .and_then(|_| validate_range(path, width, 0.0, MAX_LINE_WIDTH));
        if let Err(e) = check {
            result.add_error(ValidationError::with_path(
                ErrorCode::InvalidStyle,
                e.message,
                path,
            ));
        }
    }

    let (min_font, max_font) = FONT_SIZE_RANGE;
    if let Err(e) = validate_range(
        "style.label_font_size",
        style.label_font_size,
        min_font,
        max_font,
    ) {
        result.add_error(ValidationError::with_path(
            ErrorCode::InvalidStyle,
            e.message,
            "style.label_font_size",
        ));
    }

    let offsets = [
        ("style.label_margin", style.label_margin),
        ("style.label_baseline_offset", style.label_baseline_offset),
    ];
    let limit = MAX_CANVAS_DIMENSION as f64;
    for (path, offset) in offsets {
        if let Err(e) = validate_range(path, offset, -limit, limit) {
            result.add_error(ValidationError::with_path(
                ErrorCode::InvalidStyle,
                e.message,
                path,
            ));
        }
    }
}

fn validate_bits(spec: &PlotSpec, result: &mut ValidationResult) {
    if spec.bits.is_empty() {
        result.add_warning(ValidationWarning::with_path(
            WarningCode::EmptyBitString,
            "bit string is empty; nothing will be plotted",
            "bits",
        ));
    }

    let stray: Vec<char> = spec
        .bits
        .chars()
        .filter(|c| *c != '0' && *c != '1')
        .collect();
    if !stray.is_empty() {
        let mut shown: Vec<String> = stray.iter().take(5).map(|c| format!("{:?}", c)).collect();
        if stray.len() > shown.len() {
            shown.push("...".to_string());
        }
        result.add_warning(ValidationWarning::with_path(
            WarningCode::NonBinaryCharacters,
            format!(
                "bit string contains {} non-binary character(s) ({}); they encode per the scheme's fall-through branch",
                stray.len(),
                shown.join(", ")
            ),
            "bits",
        ));
    }

    let Some(scheme) = spec.resolved_scheme() else {
        result.add_warning(ValidationWarning::with_path(
            WarningCode::UnknownScheme,
            format!("unknown scheme '{}'; nothing will be plotted", spec.scheme),
            "scheme",
        ));
        return;
    };

    let samples = spec.bit_count() * scheme.samples_per_bit();
    if samples > spec.canvas.width as usize {
        result.add_warning(ValidationWarning::with_path(
            WarningCode::SubPixelBitWidth,
            format!(
                "{} samples on a {}px canvas gives less than one pixel per sample",
                samples, spec.canvas.width
            ),
            "bits",
        ));
    }
}

#[cfg(test)]
mod tests;
