//! Schemes command implementation

use anyhow::Result;
use colored::Colorize;
use linecode_spec::Scheme;
use std::process::ExitCode;

use super::json_output::SchemeInfo;
use super::reporting;

/// Lists the supported line-encoding schemes.
pub fn run(json_output: bool) -> Result<ExitCode> {
    if json_output {
        let schemes: Vec<SchemeInfo> = Scheme::ALL.into_iter().map(SchemeInfo::from).collect();
        reporting::print_json(&schemes)?;
        return Ok(ExitCode::SUCCESS);
    }

    println!("{}", "Schemes:".cyan().bold());
    for scheme in Scheme::ALL {
        println!(
            "  {:<24} {:<26} {}",
            scheme.as_str().bold(),
            scheme.display_name(),
            format!("{} sample(s)/bit", scheme.samples_per_bit()).dimmed()
        );
    }
    Ok(ExitCode::SUCCESS)
}
