//! LineCode Plot Backend
//!
//! This crate draws an encoded voltage sample sequence as a gridded step
//! waveform. The renderer targets the [`DrawingSurface`] trait, so the same
//! drawing pass can rasterize into a [`Canvas`] or be captured by a
//! [`DrawRecorder`] for inspection.
//!
//! # Features
//!
//! - **Geometry**: pure voltage-to-pixel mapping, grid lines, and trace vertices
//! - **Raster canvas**: anti-aliased strokes and 5x7 bitmap label text
//! - **Recorder**: serializable draw operations
//! - **Deterministic PNG**: fixed compression settings for byte-identical output
//!
//! # Example
//!
//! ```
//! use linecode_backend_plot::{render, DrawRecorder};
//!
//! let mut recorder = DrawRecorder::new();
//! render(&[5.0, -5.0], 5.0, 100.0, 100.0, &mut recorder);
//!
//! let trace = recorder.strokes().pop().unwrap();
//! assert_eq!(trace.points, vec![(0.0, 0.0), (50.0, 0.0), (50.0, 100.0), (100.0, 100.0)]);
//! ```
//!
//! # Determinism
//!
//! Rendering uses no randomness or clocks, and the PNG writer emits no
//! timestamps. The same samples, amplitude, canvas, and style always produce
//! the same bytes and BLAKE3 hash.

pub mod canvas;
pub mod color;
pub mod error;
pub mod font;
pub mod geometry;
pub mod png;
pub mod recorder;
pub mod render;
pub mod surface;

pub use canvas::Canvas;
pub use color::Color;
pub use error::{PlotError, PlotResult};
pub use geometry::{format_volts, GridLine, PlotGeometry};
pub use png::{PngConfig, PngError};
pub use recorder::{DrawOp, DrawRecorder, RecordedStroke, RecordedText};
pub use render::{plot_ops, plot_png, render, render_styled, PlotImage};
pub use surface::{DrawingSurface, TextAlign};
