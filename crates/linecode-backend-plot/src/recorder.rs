//! A surface that records draw calls instead of rasterizing them.

use serde::{Deserialize, Serialize};

use crate::color::Color;
use crate::surface::{DrawingSurface, TextAlign};

/// One recorded draw call. Colors are hex strings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "op", rename_all = "snake_case")]
pub enum DrawOp {
    ClearRect {
        x: f64,
        y: f64,
        width: f64,
        height: f64,
    },
    BeginPath,
    MoveTo {
        x: f64,
        y: f64,
    },
    LineTo {
        x: f64,
        y: f64,
    },
    Stroke,
    SetStrokeColor {
        color: String,
    },
    SetLineWidth {
        width: f64,
    },
    SetFillColor {
        color: String,
    },
    SetFont {
        size_px: f64,
    },
    SetTextAlign {
        align: TextAlign,
    },
    FillText {
        text: String,
        x: f64,
        y: f64,
    },
}

/// A painted path with the state it was stroked with.
#[derive(Debug, Clone, PartialEq)]
pub struct RecordedStroke {
    pub color: String,
    pub width: f64,
    pub points: Vec<(f64, f64)>,
}

/// A drawn label with the state it was filled with.
#[derive(Debug, Clone, PartialEq)]
pub struct RecordedText {
    pub text: String,
    pub x: f64,
    pub y: f64,
    pub color: String,
    pub size_px: f64,
    pub align: TextAlign,
}

/// Records every [`DrawingSurface`] call in order.
#[derive(Debug, Clone, Default)]
pub struct DrawRecorder {
    ops: Vec<DrawOp>,
}

impl DrawRecorder {
    /// Creates an empty recorder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Recorded operations in call order.
    pub fn ops(&self) -> &[DrawOp] {
        &self.ops
    }

    /// Consumes the recorder, returning its operations.
    pub fn into_ops(self) -> Vec<DrawOp> {
        self.ops
    }

    /// Returns true if nothing was drawn.
    pub fn is_empty(&self) -> bool {
        self.ops.is_empty()
    }

    /// Serializes the operations as pretty JSON.
    pub fn to_json_pretty(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(&self.ops)
    }

    /// Replays the operations, returning each stroke with its points flattened.
    pub fn strokes(&self) -> Vec<RecordedStroke> {
        let mut strokes = Vec::new();
        let mut color = Color::black().to_hex();
        let mut width = 1.0;
        let mut points = Vec::new();
        for op in &self.ops {
            match op {
                DrawOp::BeginPath => points.clear(),
                DrawOp::MoveTo { x, y } | DrawOp::LineTo { x, y } => points.push((*x, *y)),
                DrawOp::SetStrokeColor { color: c } => color = c.clone(),
                DrawOp::SetLineWidth { width: w } => width = *w,
                DrawOp::Stroke => strokes.push(RecordedStroke {
                    color: color.clone(),
                    width,
                    points: points.clone(),
                }),
                _ => {}
            }
        }
        strokes
    }

    /// Replays the operations, returning each text draw.
    pub fn texts(&self) -> Vec<RecordedText> {
        let mut texts = Vec::new();
        let mut color = Color::black().to_hex();
        let mut size_px = 10.0;
        let mut align = TextAlign::Left;
        for op in &self.ops {
            match op {
                DrawOp::SetFillColor { color: c } => color = c.clone(),
                DrawOp::SetFont { size_px: s } => size_px = *s,
                DrawOp::SetTextAlign { align: a } => align = *a,
                DrawOp::FillText { text, x, y } => texts.push(RecordedText {
                    text: text.clone(),
                    x: *x,
                    y: *y,
                    color: color.clone(),
                    size_px,
                    align,
                }),
                _ => {}
            }
        }
        texts
    }
}

impl DrawingSurface for DrawRecorder {
    fn clear_rect(&mut self, x: f64, y: f64, width: f64, height: f64) {
        self.ops.push(DrawOp::ClearRect {
            x,
            y,
            width,
            height,
        });
    }

    fn begin_path(&mut self) {
        self.ops.push(DrawOp::BeginPath);
    }

    fn move_to(&mut self, x: f64, y: f64) {
        self.ops.push(DrawOp::MoveTo { x, y });
    }

    fn line_to(&mut self, x: f64, y: f64) {
        self.ops.push(DrawOp::LineTo { x, y });
    }

    fn stroke(&mut self) {
        self.ops.push(DrawOp::Stroke);
    }

    fn set_stroke_color(&mut self, color: Color) {
        self.ops.push(DrawOp::SetStrokeColor {
            color: color.to_hex(),
        });
    }

    fn set_line_width(&mut self, width: f64) {
        self.ops.push(DrawOp::SetLineWidth { width });
    }

    fn set_fill_color(&mut self, color: Color) {
        self.ops.push(DrawOp::SetFillColor {
            color: color.to_hex(),
        });
    }

    fn set_font(&mut self, size_px: f64) {
        self.ops.push(DrawOp::SetFont { size_px });
    }

    fn set_text_align(&mut self, align: TextAlign) {
        self.ops.push(DrawOp::SetTextAlign { align });
    }

    fn fill_text(&mut self, text: &str, x: f64, y: f64) {
        self.ops.push(DrawOp::FillText {
            text: text.to_string(),
            x,
            y,
        });
    }
}
