//! Plot command implementation
//!
//! Encodes a bit string and writes the waveform as a PNG, or prints the
//! recorded draw operations.

use anyhow::{Context, Result};
use colored::Colorize;
use linecode_backend_plot::{plot_ops, plot_png, PlotError};
use linecode_backend_signal::encode_named;
use linecode_spec::{validate_plot_spec, BackendError, PlotSpec};
use std::fs;
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use thiserror::Error;
use tracing::info;

use super::json_output::{
    error_codes, input_error_to_json, validation_to_json, JsonError, PlotOutput, PlotResultJson,
};
use super::reporting;
use crate::input::{resolve_plot_spec, PlotOverrides};

/// Failures after a request has passed validation.
#[derive(Debug, Error)]
pub enum PlotCommandError {
    #[error("no output path (pass --output or set \"output\" in the plot spec)")]
    MissingOutput,

    #[error(transparent)]
    Render(#[from] PlotError),

    #[error("failed to write '{}': {source}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl PlotCommandError {
    fn code(&self) -> &'static str {
        match self {
            PlotCommandError::MissingOutput => error_codes::MISSING_OUTPUT,
            PlotCommandError::Render(e) => e.code(),
            PlotCommandError::Write { .. } => error_codes::FILE_WRITE,
        }
    }
}

/// Run the plot command
///
/// # Arguments
/// * `spec_path` - Optional JSON plot spec
/// * `overrides` - Flag values that replace spec fields
/// * `out_root` - Directory the output path is resolved against (default: ".")
/// * `ops` - Print draw operations as JSON instead of writing a PNG
/// * `json_output` - Whether to output machine-readable JSON
///
/// # Returns
/// Exit code: 0 on success, 1 on invalid input or write failure
pub fn run(
    spec_path: Option<&str>,
    overrides: &PlotOverrides,
    out_root: Option<&str>,
    ops: bool,
    json_output: bool,
) -> Result<ExitCode> {
    let out_root = out_root.unwrap_or(".");
    if json_output && !ops {
        return run_json(spec_path, overrides, out_root);
    }

    let spec = resolve_plot_spec(spec_path, overrides).with_context(|| match spec_path {
        Some(path) => format!("Failed to load plot spec: {}", path),
        None => "Failed to build plot request".to_string(),
    })?;

    let validation = validate_plot_spec(&spec);

    if ops {
        if !validation.is_ok() {
            let (errors, warnings) = validation_to_json(&validation);
            reporting::print_json(&PlotOutput::failure(errors, warnings))?;
            return Ok(ExitCode::from(1));
        }
        let samples = encode_named(&spec.bits, &spec.scheme, spec.amplitude_or_nan());
        let ops = plot_ops(
            &samples,
            spec.amplitude_or_nan(),
            spec.canvas.width as f64,
            spec.canvas.height as f64,
            &spec.style,
        );
        reporting::print_json(&ops)?;
        return Ok(ExitCode::SUCCESS);
    }

    println!("{} {}", "Plotting:".cyan().bold(), plot_header(&spec));

    reporting::print_validation_results(&validation);
    if !validation.is_ok() {
        println!(
            "\n{} Request has {} error(s)",
            "FAILED".red().bold(),
            validation.errors.len()
        );
        return Ok(ExitCode::from(1));
    }

    match write_plot(&spec, out_root) {
        Ok(result) => {
            if !result.drawn {
                println!("{}", "Nothing to plot, wrote blank canvas".yellow());
            }
            println!("{} {}", "Wrote:".dimmed(), result.path);
            println!("{} {}", "Hash:".dimmed(), &result.hash[..16]);
            println!("\n{} Plotted {} sample(s)", "SUCCESS".green().bold(), result.samples);
            Ok(ExitCode::SUCCESS)
        }
        Err(e) => {
            println!("\n{} [{}] {}", "FAILED".red().bold(), e.code(), e);
            Ok(ExitCode::from(1))
        }
    }
}

/// One-line summary of a request, e.g. `1011 (NRZ-L, 5V, 800x400)`.
fn plot_header(spec: &PlotSpec) -> String {
    let amplitude = match spec.amplitude {
        Some(a) => format!("{}V", a),
        None => "-".to_string(),
    };
    format!(
        "{} ({}, {}, {}x{})",
        spec.bits, spec.scheme, amplitude, spec.canvas.width, spec.canvas.height
    )
}

fn run_json(
    spec_path: Option<&str>,
    overrides: &PlotOverrides,
    out_root: &str,
) -> Result<ExitCode> {
    let spec = match resolve_plot_spec(spec_path, overrides) {
        Ok(spec) => spec,
        Err(e) => {
            let error = input_error_to_json(&e, spec_path);
            reporting::print_json(&PlotOutput::failure(vec![error], vec![]))?;
            return Ok(ExitCode::from(1));
        }
    };

    let validation = validate_plot_spec(&spec);
    let (errors, warnings) = validation_to_json(&validation);
    if !errors.is_empty() {
        reporting::print_json(&PlotOutput::failure(errors, warnings))?;
        return Ok(ExitCode::from(1));
    }

    match write_plot(&spec, out_root) {
        Ok(result) => {
            reporting::print_json(&PlotOutput::success(result, warnings))?;
            Ok(ExitCode::SUCCESS)
        }
        Err(e) => {
            let error = JsonError::new(e.code(), e.to_string());
            reporting::print_json(&PlotOutput::failure(vec![error], warnings))?;
            Ok(ExitCode::from(1))
        }
    }
}

/// Encodes, renders, and writes a validated request.
pub fn write_plot(spec: &PlotSpec, out_root: &str) -> Result<PlotResultJson, PlotCommandError> {
    let output = spec
        .output
        .as_deref()
        .ok_or(PlotCommandError::MissingOutput)?;

    let samples = encode_named(&spec.bits, &spec.scheme, spec.amplitude_or_nan());
    let image = plot_png(
        &samples,
        spec.amplitude_or_nan(),
        spec.canvas.width,
        spec.canvas.height,
        &spec.style,
    )?;

    let path = Path::new(out_root).join(output);
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).map_err(|source| PlotCommandError::Write {
            path: parent.to_path_buf(),
            source,
        })?;
    }
    fs::write(&path, &image.png_data).map_err(|source| PlotCommandError::Write {
        path: path.clone(),
        source,
    })?;

    info!(path = %path.display(), hash = %image.hash, "wrote plot");

    Ok(PlotResultJson {
        path: path.to_string_lossy().into_owned(),
        hash: image.hash,
        width: image.width,
        height: image.height,
        samples: samples.len(),
        drawn: image.drawn,
    })
}
