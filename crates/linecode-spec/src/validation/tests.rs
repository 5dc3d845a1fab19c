use super::*;
use crate::error::{ErrorCode, WarningCode};
use crate::plot::PlotSpec;
use crate::scheme::Scheme;

fn make_valid_spec() -> PlotSpec {
    PlotSpec::builder("10110", Scheme::NrzL)
        .amplitude(5.0)
        .output("plots/nrz_l.png")
        .build()
}

fn error_codes(result: &ValidationResult) -> Vec<ErrorCode> {
    result.errors.iter().map(|e| e.code).collect()
}

#[test]
fn test_valid_spec() {
    let result = validate_plot_spec(&make_valid_spec());
    assert!(result.is_ok(), "{:?}", result.errors);
    assert!(result.warnings.is_empty());
}

#[test]
fn test_unsupported_spec_version() {
    let mut spec = make_valid_spec();
    spec.spec_version = 2;
    let result = validate_plot_spec(&spec);
    assert_eq!(error_codes(&result), vec![ErrorCode::UnsupportedSpecVersion]);
}

#[test]
fn test_amplitude_must_be_set_and_positive() {
    for amplitude in [None, Some(0.0), Some(-1.0), Some(f64::NAN), Some(f64::INFINITY)] {
        let mut spec = make_valid_spec();
        spec.amplitude = amplitude;
        let result = validate_plot_spec(&spec);
        assert_eq!(
            error_codes(&result),
            vec![ErrorCode::InvalidAmplitude],
            "amplitude {:?}",
            amplitude
        );
        assert_eq!(result.errors[0].path.as_deref(), Some("amplitude"));
    }
}

#[test]
fn test_fractional_amplitude_is_valid() {
    let mut spec = make_valid_spec();
    spec.amplitude = Some(0.3);
    assert!(validate_plot_spec(&spec).is_ok());
}

#[test]
fn test_large_amplitude_is_valid() {
    for amplitude in [1500.0, 40000.0, 1e9] {
        let mut spec = make_valid_spec();
        spec.amplitude = Some(amplitude);
        let result = validate_plot_spec(&spec);
        assert!(result.is_ok(), "amplitude {}: {:?}", amplitude, result.errors);
    }
}

#[test]
fn test_invalid_canvas() {
    let mut spec = make_valid_spec();
    spec.canvas.width = 0;
    let result = validate_plot_spec(&spec);
    assert_eq!(error_codes(&result), vec![ErrorCode::InvalidCanvasSize]);
}

#[test]
fn test_unsafe_output_path() {
    let mut spec = make_valid_spec();
    spec.output = Some("../escape.png".to_string());
    let result = validate_plot_spec(&spec);
    assert_eq!(error_codes(&result), vec![ErrorCode::UnsafeOutputPath]);
}

#[test]
fn test_output_extension_must_be_png() {
    let mut spec = make_valid_spec();
    spec.output = Some("plot.svg".to_string());
    let result = validate_plot_spec(&spec);
    assert_eq!(error_codes(&result), vec![ErrorCode::PathFormatMismatch]);
}

#[test]
fn test_invalid_style() {
    let mut spec = make_valid_spec();
    spec.style.trace_line_width = 0.0;
    spec.style.label_font_size = 200.0;
    spec.style.grid_color = [1.5, 0.0, 0.0, 1.0];
    let result = validate_plot_spec(&spec);
    assert_eq!(result.errors.len(), 3);
    assert!(result
        .errors
        .iter()
        .all(|e| e.code == ErrorCode::InvalidStyle));
}

#[test]
fn test_non_binary_characters_warn_only() {
    let mut spec = make_valid_spec();
    spec.bits = "10x1 ".to_string();
    let result = validate_plot_spec(&spec);
    assert!(result.is_ok());
    assert!(result.has_warning(WarningCode::NonBinaryCharacters));
    assert!(result.warnings[0].message.contains("2 non-binary"));
}

#[test]
fn test_unknown_scheme_warns() {
    let mut spec = make_valid_spec();
    spec.scheme = "4B5B".to_string();
    let result = validate_plot_spec(&spec);
    assert!(result.is_ok());
    assert!(result.has_warning(WarningCode::UnknownScheme));
}

#[test]
fn test_empty_bits_warns() {
    let mut spec = make_valid_spec();
    spec.bits.clear();
    let result = validate_plot_spec(&spec);
    assert!(result.is_ok());
    assert!(result.has_warning(WarningCode::EmptyBitString));
}

#[test]
fn test_sub_pixel_bit_width_counts_split_samples() {
    let mut spec = PlotSpec::builder("1".repeat(60), Scheme::Manchester)
        .amplitude(1.0)
        .canvas(100, 50)
        .build();
    let result = validate_plot_spec(&spec);
    assert!(result.has_warning(WarningCode::SubPixelBitWidth));

    spec.scheme = Scheme::NrzL.display_name().to_string();
    let result = validate_plot_spec(&spec);
    assert!(!result.has_warning(WarningCode::SubPixelBitWidth));
}

#[test]
fn test_errors_accumulate() {
    let mut spec = make_valid_spec();
    spec.spec_version = 9;
    spec.amplitude = Some(0.0);
    spec.canvas.height = 0;
    let result = validate_plot_spec(&spec);
    assert_eq!(
        error_codes(&result),
        vec![
            ErrorCode::UnsupportedSpecVersion,
            ErrorCode::InvalidAmplitude,
            ErrorCode::InvalidCanvasSize,
        ]
    );
}
