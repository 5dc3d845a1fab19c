//! Test harness for driving CLI commands against a scratch directory.

use std::fs;
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use tempfile::TempDir;

use linecode_cli::commands;
use linecode_cli::input::PlotOverrides;

use crate::png_info::{read_png_info, PngInfo};

/// A scratch directory plus helpers that run commands inside it.
pub struct TestHarness {
    /// Working directory for test outputs.
    pub work_dir: TempDir,
}

impl TestHarness {
    /// Create a new test harness.
    pub fn new() -> Self {
        Self {
            work_dir: TempDir::new().expect("Failed to create work dir"),
        }
    }

    /// Get the working directory path.
    pub fn path(&self) -> &Path {
        self.work_dir.path()
    }

    /// Write a plot spec JSON file and return its path.
    pub fn write_spec(&self, name: &str, json: &serde_json::Value) -> PathBuf {
        let path = self.path().join(name);
        fs::write(&path, serde_json::to_string_pretty(json).unwrap())
            .expect("Failed to write spec file");
        path
    }

    /// Run `plot` with the harness directory as output root.
    pub fn plot(&self, spec_path: Option<&Path>, overrides: &PlotOverrides) -> ExitCode {
        let spec = spec_path.map(|p| p.to_string_lossy().into_owned());
        commands::plot::run(
            spec.as_deref(),
            overrides,
            self.path().to_str(),
            false,
            true,
        )
        .expect("plot command errored")
    }

    /// Run `validate` on a spec file.
    pub fn validate(&self, spec_path: &Path) -> ExitCode {
        commands::validate::run(spec_path.to_str().unwrap(), true)
            .expect("validate command errored")
    }

    /// Read an output file relative to the harness directory.
    pub fn read_output(&self, rel_path: &str) -> Vec<u8> {
        fs::read(self.path().join(rel_path)).expect("Failed to read output")
    }

    /// Read and parse the PNG header of an output file.
    pub fn png_info(&self, rel_path: &str) -> PngInfo {
        read_png_info(&self.read_output(rel_path)).expect("Output is not a valid PNG")
    }
}

impl Default for TestHarness {
    fn default() -> Self {
        Self::new()
    }
}
