//! Plot request loading.
//!
//! A request comes from an optional JSON spec file with command-line flags
//! layered on top. Flags always win over file values.

use std::path::{Path, PathBuf};

use linecode_spec::{PlotSpec, Scheme, SpecError};
use thiserror::Error;
use tracing::debug;

/// Recognized spec file extensions.
pub const JSON_EXTENSIONS: &[&str] = &["json"];

/// Errors loading a plot request.
#[derive(Debug, Error)]
pub enum InputError {
    /// File could not be read.
    #[error("failed to read file '{}': {source}", path.display())]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Unknown file extension.
    #[error("unknown file extension {} (expected .json)", describe_extension(.extension))]
    UnknownExtension { extension: Option<String> },

    /// JSON parsing failed.
    #[error("JSON parse error: {message}")]
    JsonParse { message: String },
}

fn describe_extension(extension: &Option<String>) -> String {
    match extension {
        Some(ext) => format!("'.{}'", ext),
        None => "(none)".to_string(),
    }
}

/// Command-line values that replace spec file fields when present.
#[derive(Debug, Clone, Default)]
pub struct PlotOverrides {
    pub bits: Option<String>,
    pub scheme: Option<String>,
    pub amplitude: Option<f64>,
    pub width: Option<u32>,
    pub height: Option<u32>,
    pub output: Option<String>,
}

impl PlotOverrides {
    /// Applies every present value to `spec`.
    pub fn apply(&self, spec: &mut PlotSpec) {
        if let Some(bits) = &self.bits {
            spec.bits = bits.clone();
        }
        if let Some(scheme) = &self.scheme {
            spec.scheme = scheme.clone();
        }
        if let Some(amplitude) = self.amplitude {
            spec.amplitude = Some(amplitude);
        }
        if let Some(width) = self.width {
            spec.canvas.width = width;
        }
        if let Some(height) = self.height {
            spec.canvas.height = height;
        }
        if let Some(output) = &self.output {
            spec.output = Some(output.clone());
        }
    }
}

/// Loads a plot spec from a JSON file.
pub fn load_plot_spec(path: &Path) -> Result<PlotSpec, InputError> {
    let extension = path
        .extension()
        .and_then(|e| e.to_str())
        .map(|s| s.to_lowercase());

    match extension.as_deref() {
        Some(ext) if JSON_EXTENSIONS.contains(&ext) => {}
        _ => return Err(InputError::UnknownExtension { extension }),
    }

    PlotSpec::from_file(path).map_err(|e| match e {
        SpecError::Io(source) => InputError::FileRead {
            path: path.to_path_buf(),
            source,
        },
        SpecError::JsonParse(e) => InputError::JsonParse {
            message: e.to_string(),
        },
    })
}

/// Builds the effective plot request from an optional spec file and flags.
pub fn resolve_plot_spec(
    spec_path: Option<&str>,
    overrides: &PlotOverrides,
) -> Result<PlotSpec, InputError> {
    let mut spec = match spec_path {
        Some(path) => {
            debug!(path, "loading plot spec");
            load_plot_spec(Path::new(path))?
        }
        None => PlotSpec::builder("", Scheme::default()).build(),
    };
    overrides.apply(&mut spec);
    Ok(spec)
}
