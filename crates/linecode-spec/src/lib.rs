//! LineCode plot request library
//!
//! This crate holds the types every other LineCode crate agrees on: the
//! closed set of line-encoding [`Scheme`]s, the [`PlotSpec`] JSON document
//! that describes one encode-and-plot request, and validation that sorts bad
//! input into blocking errors and advisory warnings.
//!
//! # Example
//!
//! ```
//! use linecode_spec::{PlotSpec, Scheme, WarningCode};
//! use linecode_spec::validation::validate_plot_spec;
//!
//! let spec = PlotSpec::builder("1011x", Scheme::DifferentialManchester)
//!     .amplitude(5.0)
//!     .canvas(800, 400)
//!     .output("plots/diff_manchester.png")
//!     .build();
//!
//! let result = validate_plot_spec(&spec);
//! assert!(result.is_ok());
//! assert!(result.has_warning(WarningCode::NonBinaryCharacters));
//! ```
//!
//! # Modules
//!
//! - [`error`]: Error and warning types for validation
//! - [`scheme`]: Scheme identifiers and name lookup
//! - [`plot`]: Plot request type, canvas, style, and builder
//! - [`validation`]: Plot request validation

pub mod error;
pub mod plot;
pub mod scheme;
pub mod validation;

pub use error::{
    BackendError, Diagnostic, ErrorCode, SpecError, ValidationError, ValidationResult, ValidationWarning,
    WarningCode,
};
pub use plot::{
    CanvasParams, PlotSpec, PlotSpecBuilder, PlotStyle, DEFAULT_CANVAS_HEIGHT,
    DEFAULT_CANVAS_WIDTH, SPEC_VERSION,
};
pub use scheme::{Scheme, UnknownScheme};
pub use validation::{is_safe_output_path, validate_plot_spec};
