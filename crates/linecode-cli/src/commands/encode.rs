//! Encode command implementation
//!
//! Encodes a bit string and prints the voltage samples.

use anyhow::Result;
use colored::Colorize;
use linecode_backend_signal::{encode_named, SignalStats};
use linecode_spec::{validate_plot_spec, PlotSpec, ValidationResult, WarningCode};
use std::process::ExitCode;

use super::json_output::{validation_to_json, EncodeOutput, EncodeResult};
use super::reporting;

/// Run the encode command
///
/// # Arguments
/// * `bits` - Bit string to encode
/// * `scheme` - Scheme name, matched case-insensitively
/// * `amplitude` - Peak level in volts
/// * `json_output` - Whether to output machine-readable JSON
///
/// # Returns
/// Exit code: 0 on success, 1 if the request is invalid
pub fn run(bits: &str, scheme: &str, amplitude: f64, json_output: bool) -> Result<ExitCode> {
    let spec = PlotSpec::builder(bits, Default::default())
        .scheme_name(scheme)
        .amplitude(amplitude)
        .build();

    let validation = encode_validation(&spec);

    if json_output {
        run_json(&spec, &validation)
    } else {
        run_human(&spec, &validation)
    }
}

/// Validates `spec` for encoding only; canvas warnings do not apply.
fn encode_validation(spec: &PlotSpec) -> ValidationResult {
    let mut result = validate_plot_spec(spec);
    result
        .warnings
        .retain(|w| w.code != WarningCode::SubPixelBitWidth);
    result
}

fn run_human(spec: &PlotSpec, validation: &ValidationResult) -> Result<ExitCode> {
    let scheme_label = spec
        .resolved_scheme()
        .map(|s| s.display_name().to_string())
        .unwrap_or_else(|| spec.scheme.clone());
    println!(
        "{} {} ({}, {}V)",
        "Encoding:".cyan().bold(),
        spec.bits,
        scheme_label,
        spec.amplitude_or_nan()
    );

    reporting::print_validation_results(validation);
    if !validation.is_ok() {
        println!(
            "\n{} Request has {} error(s)",
            "FAILED".red().bold(),
            validation.errors.len()
        );
        return Ok(ExitCode::from(1));
    }

    let samples = encode_named(&spec.bits, &spec.scheme, spec.amplitude_or_nan());
    let stats = SignalStats::from_samples(&samples);

    let rendered: Vec<String> = samples.iter().map(|s| s.to_string()).collect();
    println!("\n{} [{}]", "Samples:".bold(), rendered.join(", "));
    println!(
        "{} {} samples, {} transitions, dc {:.3}, longest run {}",
        "Stats:".dimmed(),
        stats.samples,
        stats.transitions,
        stats.dc_level,
        stats.longest_run
    );
    println!("\n{} Encoded {} bit(s)", "SUCCESS".green().bold(), spec.bit_count());
    Ok(ExitCode::SUCCESS)
}

fn run_json(spec: &PlotSpec, validation: &ValidationResult) -> Result<ExitCode> {
    let (errors, warnings) = validation_to_json(validation);
    if !errors.is_empty() {
        reporting::print_json(&EncodeOutput::failure(errors, warnings))?;
        return Ok(ExitCode::from(1));
    }

    let samples = encode_named(&spec.bits, &spec.scheme, spec.amplitude_or_nan());
    let result = EncodeResult {
        scheme: spec.resolved_scheme(),
        amplitude: spec.amplitude_or_nan(),
        bits: spec.bit_count(),
        stats: SignalStats::from_samples(&samples),
        samples,
    };
    reporting::print_json(&EncodeOutput::success(result, warnings))?;
    Ok(ExitCode::SUCCESS)
}
