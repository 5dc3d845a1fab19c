//! Validate command implementation
//!
//! Validates a plot spec file without encoding or rendering.

use anyhow::{Context, Result};
use colored::Colorize;
use linecode_spec::validate_plot_spec;
use std::path::Path;
use std::process::ExitCode;

use super::json_output::{input_error_to_json, validation_to_json, ValidateOutput};
use super::reporting;
use crate::input::load_plot_spec;

/// Run the validate command
///
/// # Arguments
/// * `spec_path` - Path to the JSON plot spec
/// * `json_output` - Whether to output machine-readable JSON
///
/// # Returns
/// Exit code: 0 if valid, 1 if invalid
pub fn run(spec_path: &str, json_output: bool) -> Result<ExitCode> {
    if json_output {
        run_json(spec_path)
    } else {
        run_human(spec_path)
    }
}

fn run_human(spec_path: &str) -> Result<ExitCode> {
    println!("{} {}", "Validating:".cyan().bold(), spec_path);

    let spec = load_plot_spec(Path::new(spec_path))
        .with_context(|| format!("Failed to load plot spec: {}", spec_path))?;

    let result = validate_plot_spec(&spec);
    reporting::print_validation_results(&result);

    if result.is_ok() {
        println!("\n{} Plot spec is valid", "SUCCESS".green().bold());
        Ok(ExitCode::SUCCESS)
    } else {
        println!(
            "\n{} Plot spec has {} error(s)",
            "FAILED".red().bold(),
            result.errors.len()
        );
        Ok(ExitCode::from(1))
    }
}

fn run_json(spec_path: &str) -> Result<ExitCode> {
    let spec = match load_plot_spec(Path::new(spec_path)) {
        Ok(spec) => spec,
        Err(e) => {
            let error = input_error_to_json(&e, Some(spec_path));
            reporting::print_json(&ValidateOutput::new(vec![error], vec![], None))?;
            return Ok(ExitCode::from(1));
        }
    };

    let result = validate_plot_spec(&spec);
    let (errors, warnings) = validation_to_json(&result);
    let output = ValidateOutput::new(errors, warnings, spec.resolved_scheme());
    reporting::print_json(&output)?;

    if output.success {
        Ok(ExitCode::SUCCESS)
    } else {
        Ok(ExitCode::from(1))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn write_spec(dir: &tempfile::TempDir, content: &str) -> String {
        let path = dir.path().join("plot.json");
        std::fs::write(&path, content).unwrap();
        path.to_string_lossy().into_owned()
    }

    #[test]
    fn test_valid_spec() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_spec(
            &dir,
            r#"{ "bits": "0110", "scheme": "Manchester", "amplitude": 2.5, "output": "m.png" }"#,
        );
        assert_eq!(run(&path, false).unwrap(), ExitCode::SUCCESS);
        assert_eq!(run(&path, true).unwrap(), ExitCode::SUCCESS);
    }

    #[test]
    fn test_invalid_spec() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_spec(&dir, r#"{ "bits": "0110", "amplitude": -1.0 }"#);
        assert_eq!(run(&path, false).unwrap(), ExitCode::from(1));
        assert_eq!(run(&path, true).unwrap(), ExitCode::from(1));
    }

    #[test]
    fn test_missing_file() {
        assert!(run("/nonexistent/plot.json", false).is_err());
        assert_eq!(
            run("/nonexistent/plot.json", true).unwrap(),
            ExitCode::from(1)
        );
    }
}
