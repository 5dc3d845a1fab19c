//! Step-waveform renderer.
//!
//! Drawing order is fixed: clear, horizontal grid with labels, vertical grid,
//! then the trace on top.

use linecode_spec::validation::validate_canvas_size;
use linecode_spec::PlotStyle;
use tracing::{debug, warn};

use crate::canvas::Canvas;
use crate::color::Color;
use crate::error::{PlotError, PlotResult};
use crate::geometry::PlotGeometry;
use crate::png::{write_rgba_to_vec_with_hash, PngConfig};
use crate::recorder::{DrawOp, DrawRecorder};
use crate::surface::{DrawingSurface, TextAlign};

/// Renders `samples` with the default style.
///
/// Returns false, leaving the surface untouched, when there is nothing to
/// plot (see [`PlotGeometry::new`]).
pub fn render<S: DrawingSurface + ?Sized>(
    samples: &[f64],
    amplitude: f64,
    width: f64,
    height: f64,
    surface: &mut S,
) -> bool {
    render_styled(
        samples,
        amplitude,
        width,
        height,
        &PlotStyle::default(),
        surface,
    )
}

/// Renders `samples` with an explicit style.
pub fn render_styled<S: DrawingSurface + ?Sized>(
    samples: &[f64],
    amplitude: f64,
    width: f64,
    height: f64,
    style: &PlotStyle,
    surface: &mut S,
) -> bool {
    let Some(geometry) = PlotGeometry::new(samples.len(), amplitude, width, height) else {
        if samples.is_empty() {
            debug!("no samples, skipping render");
        } else {
            warn!(amplitude, width, height, "nothing plottable, skipping render");
        }
        return false;
    };

    debug!(
        samples = samples.len(),
        bit_width = geometry.bit_width(),
        voltage_levels = geometry.voltage_levels(),
        "rendering waveform"
    );

    surface.clear_rect(0.0, 0.0, width, height);
    draw_horizontal_grid(&geometry, style, surface);
    draw_vertical_grid(&geometry, style, surface);
    draw_trace(&geometry, samples, style, surface);
    true
}

fn draw_horizontal_grid<S: DrawingSurface + ?Sized>(
    geometry: &PlotGeometry,
    style: &PlotStyle,
    surface: &mut S,
) {
    let width = geometry.width();
    for line in geometry.grid_lines() {
        surface.begin_path();
        surface.move_to(0.0, line.y);
        surface.line_to(width, line.y);
        if line.emphasized {
            surface.set_stroke_color(Color::from_array(style.axis_color));
            surface.set_line_width(style.axis_line_width);
        } else {
            surface.set_stroke_color(Color::from_array(style.grid_color));
            surface.set_line_width(style.grid_line_width);
        }
        surface.stroke();

        surface.set_fill_color(Color::from_array(style.label_color));
        surface.set_font(style.label_font_size);
        surface.set_text_align(TextAlign::Right);
        surface.fill_text(
            &line.label,
            width - style.label_margin,
            line.y + style.label_baseline_offset,
        );
    }
}

fn draw_vertical_grid<S: DrawingSurface + ?Sized>(
    geometry: &PlotGeometry,
    style: &PlotStyle,
    surface: &mut S,
) {
    surface.set_stroke_color(Color::from_array(style.grid_color));
    surface.set_line_width(style.grid_line_width);
    for x in geometry.vertical_lines() {
        surface.begin_path();
        surface.move_to(x, 0.0);
        surface.line_to(x, geometry.height());
        surface.stroke();
    }
}

fn draw_trace<S: DrawingSurface + ?Sized>(
    geometry: &PlotGeometry,
    samples: &[f64],
    style: &PlotStyle,
    surface: &mut S,
) {
    let points = geometry.trace_points(samples);
    let Some((&(x0, y0), rest)) = points.split_first() else {
        return;
    };
    surface.begin_path();
    surface.set_stroke_color(Color::from_array(style.trace_color));
    surface.set_line_width(style.trace_line_width);
    surface.move_to(x0, y0);
    for &(x, y) in rest {
        surface.line_to(x, y);
    }
    surface.stroke();
}

/// A rendered plot encoded as PNG.
#[derive(Debug)]
pub struct PlotImage {
    /// PNG file bytes.
    pub png_data: Vec<u8>,
    /// BLAKE3 hash of the PNG bytes.
    pub hash: String,
    /// Whether a waveform was drawn. False means a blank, cleared canvas.
    pub drawn: bool,
    /// Canvas width in pixels.
    pub width: u32,
    /// Canvas height in pixels.
    pub height: u32,
}

/// Renders onto a fresh [`Canvas`] and encodes it as PNG.
///
/// When nothing is plottable the canvas stays at its background color.
pub fn plot_png(
    samples: &[f64],
    amplitude: f64,
    width: u32,
    height: u32,
    style: &PlotStyle,
) -> PlotResult<PlotImage> {
    if validate_canvas_size(width, height).is_err() {
        return Err(PlotError::InvalidCanvas { width, height });
    }

    let mut canvas = Canvas::new(width, height, Color::from_array(style.background));
    let drawn = render_styled(
        samples,
        amplitude,
        width as f64,
        height as f64,
        style,
        &mut canvas,
    );

    let (png_data, hash) = write_rgba_to_vec_with_hash(&canvas, &PngConfig::default())?;
    debug!(bytes = png_data.len(), hash = %hash, "encoded plot PNG");

    Ok(PlotImage {
        png_data,
        hash,
        drawn,
        width,
        height,
    })
}

/// Renders onto a [`DrawRecorder`] and returns the recorded operations.
pub fn plot_ops(
    samples: &[f64],
    amplitude: f64,
    width: f64,
    height: f64,
    style: &PlotStyle,
) -> Vec<DrawOp> {
    let mut recorder = DrawRecorder::new();
    render_styled(samples, amplitude, width, height, style, &mut recorder);
    recorder.into_ops()
}
