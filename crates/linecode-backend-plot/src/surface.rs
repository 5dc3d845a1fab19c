//! The drawing surface the renderer targets.
//!
//! The trait mirrors a minimal immediate-mode 2D context: a current path that
//! is built with `move_to`/`line_to` and painted with `stroke`, plus text
//! drawn with the current fill color, font size, and alignment. Coordinates
//! are in pixels with the origin at the top left and y growing downward.

use serde::{Deserialize, Serialize};

use crate::color::Color;

/// Horizontal anchoring of text relative to its x coordinate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TextAlign {
    /// x is the left edge.
    #[default]
    Left,
    /// x is the horizontal center.
    Center,
    /// x is the right edge.
    Right,
}

/// A 2D surface that plots can be drawn on.
pub trait DrawingSurface {
    /// Resets a rectangle to the surface background.
    fn clear_rect(&mut self, x: f64, y: f64, width: f64, height: f64);

    /// Discards the current path.
    fn begin_path(&mut self);

    /// Starts a new subpath at a point.
    fn move_to(&mut self, x: f64, y: f64);

    /// Extends the current subpath with a straight segment.
    fn line_to(&mut self, x: f64, y: f64);

    /// Paints the current path with the stroke color and line width.
    fn stroke(&mut self);

    /// Sets the color used by `stroke`.
    fn set_stroke_color(&mut self, color: Color);

    /// Sets the line width used by `stroke`.
    fn set_line_width(&mut self, width: f64);

    /// Sets the color used by `fill_text`.
    fn set_fill_color(&mut self, color: Color);

    /// Sets the font size in pixels.
    fn set_font(&mut self, size_px: f64);

    /// Sets horizontal text alignment.
    fn set_text_align(&mut self, align: TextAlign);

    /// Draws text with its baseline at `y`.
    fn fill_text(&mut self, text: &str, x: f64, y: f64);
}
