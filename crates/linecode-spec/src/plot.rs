//! Plot request types.
//!
//! A [`PlotSpec`] is the JSON document the CLI accepts in place of the
//! original form inputs: the bit string, the scheme selector, the voltage
//! field, and the canvas the plot is drawn on.

use serde::{Deserialize, Serialize};

use crate::error::SpecError;
use crate::scheme::Scheme;

/// Current plot spec version.
pub const SPEC_VERSION: u32 = 1;

/// Default canvas width in pixels.
pub const DEFAULT_CANVAS_WIDTH: u32 = 800;

/// Default canvas height in pixels.
pub const DEFAULT_CANVAS_HEIGHT: u32 = 400;

/// A request to encode a bit string and plot the resulting waveform.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PlotSpec {
    /// Spec format version.
    #[serde(default = "default_spec_version")]
    pub spec_version: u32,

    /// Bits in time order. Characters other than '0'/'1' are accepted.
    #[serde(default)]
    pub bits: String,

    /// Scheme name as entered. Unrecognized names plot nothing.
    #[serde(default = "default_scheme_name")]
    pub scheme: String,

    /// Peak voltage (+V/-V). `None` models an unset voltage field.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub amplitude: Option<f64>,

    /// Canvas dimensions.
    #[serde(default)]
    pub canvas: CanvasParams,

    /// Grid, label, and trace styling.
    #[serde(default)]
    pub style: PlotStyle,

    /// Relative output path for the rendered PNG.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub output: Option<String>,
}

fn default_spec_version() -> u32 {
    SPEC_VERSION
}

fn default_scheme_name() -> String {
    Scheme::default().display_name().to_string()
}

/// Canvas dimensions in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CanvasParams {
    /// Width in pixels.
    pub width: u32,
    /// Height in pixels.
    pub height: u32,
}

impl Default for CanvasParams {
    fn default() -> Self {
        Self {
            width: DEFAULT_CANVAS_WIDTH,
            height: DEFAULT_CANVAS_HEIGHT,
        }
    }
}

/// Visual style for the plot. Colors are RGBA in 0.0-1.0.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PlotStyle {
    /// Canvas background after clearing.
    #[serde(default = "default_background")]
    pub background: [f64; 4],

    /// Horizontal and vertical grid lines.
    #[serde(default = "default_grid_color")]
    pub grid_color: [f64; 4],

    /// The emphasized 0V line.
    #[serde(default = "default_axis_color")]
    pub axis_color: [f64; 4],

    /// The waveform trace.
    #[serde(default = "default_trace_color")]
    pub trace_color: [f64; 4],

    /// Voltage labels.
    #[serde(default = "default_label_color")]
    pub label_color: [f64; 4],

    /// Grid line width in pixels.
    #[serde(default = "default_grid_line_width")]
    pub grid_line_width: f64,

    /// 0V line width in pixels.
    #[serde(default = "default_axis_line_width")]
    pub axis_line_width: f64,

    /// Trace line width in pixels.
    #[serde(default = "default_trace_line_width")]
    pub trace_line_width: f64,

    /// Label font size in pixels.
    #[serde(default = "default_label_font_size")]
    pub label_font_size: f64,

    /// Distance from the right edge to the label's right end.
    #[serde(default = "default_label_margin")]
    pub label_margin: f64,

    /// Offset from a grid line down to the label baseline.
    #[serde(default = "default_label_baseline_offset")]
    pub label_baseline_offset: f64,
}

fn rgb8(r: u8, g: u8, b: u8) -> [f64; 4] {
    [r as f64 / 255.0, g as f64 / 255.0, b as f64 / 255.0, 1.0]
}

fn default_background() -> [f64; 4] {
    [1.0, 1.0, 1.0, 1.0]
}

fn default_grid_color() -> [f64; 4] {
    rgb8(0xcc, 0xcc, 0xcc)
}

fn default_axis_color() -> [f64; 4] {
    rgb8(0x9c, 0x9a, 0x9a)
}

fn default_trace_color() -> [f64; 4] {
    rgb8(0x00, 0x7a, 0xcc)
}

fn default_label_color() -> [f64; 4] {
    [0.0, 0.0, 0.0, 1.0]
}

fn default_grid_line_width() -> f64 {
    1.0
}

fn default_axis_line_width() -> f64 {
    1.5
}

fn default_trace_line_width() -> f64 {
    2.0
}

fn default_label_font_size() -> f64 {
    12.0
}

fn default_label_margin() -> f64 {
    5.0
}

fn default_label_baseline_offset() -> f64 {
    5.0
}

impl Default for PlotStyle {
    fn default() -> Self {
        Self {
            background: default_background(),
            grid_color: default_grid_color(),
            axis_color: default_axis_color(),
            trace_color: default_trace_color(),
            label_color: default_label_color(),
            grid_line_width: default_grid_line_width(),
            axis_line_width: default_axis_line_width(),
            trace_line_width: default_trace_line_width(),
            label_font_size: default_label_font_size(),
            label_margin: default_label_margin(),
            label_baseline_offset: default_label_baseline_offset(),
        }
    }
}

impl PlotSpec {
    /// Creates a new builder.
    pub fn builder(bits: impl Into<String>, scheme: Scheme) -> PlotSpecBuilder {
        PlotSpecBuilder::new(bits, scheme)
    }

    /// Parses a plot spec from JSON.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Reads and parses a plot spec file.
    pub fn from_file(path: impl AsRef<std::path::Path>) -> Result<Self, SpecError> {
        let json = std::fs::read_to_string(path)?;
        Ok(Self::from_json(&json)?)
    }

    /// Serializes the plot spec to pretty-printed JSON.
    pub fn to_json_pretty(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    /// Resolves the scheme name, or `None` if it is not recognized.
    pub fn resolved_scheme(&self) -> Option<Scheme> {
        Scheme::from_name(&self.scheme)
    }

    /// Amplitude as a plain number; an unset field reads as NaN.
    pub fn amplitude_or_nan(&self) -> f64 {
        self.amplitude.unwrap_or(f64::NAN)
    }

    /// Number of characters in the bit string.
    pub fn bit_count(&self) -> usize {
        self.bits.chars().count()
    }
}

/// Builder for [`PlotSpec`].
#[derive(Debug, Clone)]
pub struct PlotSpecBuilder {
    spec: PlotSpec,
}

impl PlotSpecBuilder {
    /// Creates a builder with default canvas and style.
    pub fn new(bits: impl Into<String>, scheme: Scheme) -> Self {
        Self {
            spec: PlotSpec {
                spec_version: SPEC_VERSION,
                bits: bits.into(),
                scheme: scheme.display_name().to_string(),
                amplitude: None,
                canvas: CanvasParams::default(),
                style: PlotStyle::default(),
                output: None,
            },
        }
    }

    /// Sets the peak voltage.
    pub fn amplitude(mut self, amplitude: f64) -> Self {
        self.spec.amplitude = Some(amplitude);
        self
    }

    /// Sets the scheme by raw name (may be unrecognized).
    pub fn scheme_name(mut self, name: impl Into<String>) -> Self {
        self.spec.scheme = name.into();
        self
    }

    /// Sets the canvas dimensions.
    pub fn canvas(mut self, width: u32, height: u32) -> Self {
        self.spec.canvas = CanvasParams { width, height };
        self
    }

    /// Sets the style.
    pub fn style(mut self, style: PlotStyle) -> Self {
        self.spec.style = style;
        self
    }

    /// Sets the output path.
    pub fn output(mut self, path: impl Into<String>) -> Self {
        self.spec.output = Some(path.into());
        self
    }

    /// Builds the plot request.
    pub fn build(self) -> PlotSpec {
        self.spec
    }
}
