//! LineCode CLI - Command-line interface for line encoding and waveform plots
//!
//! This binary encodes bit strings with a chosen line-encoding scheme and
//! renders the resulting voltage waveform as a PNG.

use clap::{Parser, Subcommand};
use colored::Colorize;
use std::process::ExitCode;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use linecode_cli::commands;
use linecode_cli::input::PlotOverrides;

/// LineCode - Line-Encoding Signal Plotter
#[derive(Parser)]
#[command(name = "linecode")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Encode a bit string and print the voltage samples
    Encode {
        /// Bit string; characters other than 0 and 1 are accepted
        #[arg(short, long)]
        bits: String,

        /// Scheme name (NRZ-L, NRZ-I, Bipolar AMI, Pseudoternary, Manchester, Differential Manchester)
        #[arg(short, long, default_value = "NRZ-L")]
        scheme: String,

        /// Peak voltage in volts
        #[arg(short, long, allow_hyphen_values = true)]
        amplitude: f64,

        /// Output machine-readable JSON (no colored output)
        #[arg(long)]
        json: bool,
    },

    /// Encode a bit string and plot the waveform
    Plot {
        /// Path to a JSON plot spec; flags override its fields
        #[arg(long)]
        spec: Option<String>,

        /// Bit string
        #[arg(short, long)]
        bits: Option<String>,

        /// Scheme name
        #[arg(short, long)]
        scheme: Option<String>,

        /// Peak voltage in volts
        #[arg(short, long, allow_hyphen_values = true)]
        amplitude: Option<f64>,

        /// Canvas width in pixels
        #[arg(long)]
        width: Option<u32>,

        /// Canvas height in pixels
        #[arg(long)]
        height: Option<u32>,

        /// Relative output PNG path
        #[arg(short, long)]
        output: Option<String>,

        /// Output root directory (default: current directory)
        #[arg(long)]
        out_root: Option<String>,

        /// Print draw operations as JSON instead of writing a PNG
        #[arg(long)]
        ops: bool,

        /// Output machine-readable JSON (no colored output)
        #[arg(long)]
        json: bool,
    },

    /// List supported line-encoding schemes
    Schemes {
        /// Output machine-readable JSON (no colored output)
        #[arg(long)]
        json: bool,
    },

    /// Validate a plot spec file without rendering
    Validate {
        /// Path to the JSON plot spec
        #[arg(short, long)]
        spec: String,

        /// Output machine-readable JSON (no colored output)
        #[arg(long)]
        json: bool,
    },
}

fn init_tracing(verbose: u8) {
    let filter = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    // Logs go to stderr so --json output on stdout stays parseable.
    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter)))
        .init();
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let result = match cli.command {
        Commands::Encode {
            bits,
            scheme,
            amplitude,
            json,
        } => commands::encode::run(&bits, &scheme, amplitude, json),
        Commands::Plot {
            spec,
            bits,
            scheme,
            amplitude,
            width,
            height,
            output,
            out_root,
            ops,
            json,
        } => {
            let overrides = PlotOverrides {
                bits,
                scheme,
                amplitude,
                width,
                height,
                output,
            };
            commands::plot::run(spec.as_deref(), &overrides, out_root.as_deref(), ops, json)
        }
        Commands::Schemes { json } => commands::schemes::run(json),
        Commands::Validate { spec, json } => commands::validate::run(&spec, json),
    };

    match result {
        Ok(code) => code,
        Err(e) => {
            eprintln!("{}: {:#}", "error".red().bold(), e);
            ExitCode::from(1)
        }
    }
}
