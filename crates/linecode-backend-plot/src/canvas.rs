//! RGBA raster surface.

use std::collections::HashMap;

use crate::color::Color;
use crate::font;
use crate::surface::{DrawingSurface, TextAlign};

// Row-major offset, widened before multiplying.
fn pixel_index(width: u32, x: u32, y: u32) -> usize {
    y as usize * width as usize + x as usize
}

/// A raster canvas implementing [`DrawingSurface`].
///
/// Strokes are anti-aliased by pixel-center distance to each segment, with
/// per-pixel coverage taken as the maximum over the whole path so that
/// overlapping segments of one stroke do not darken their joins.
#[derive(Debug, Clone)]
pub struct Canvas {
    pub width: u32,
    pub height: u32,
    pub data: Vec<Color>,
    background: Color,
    stroke_color: Color,
    fill_color: Color,
    line_width: f64,
    font_size: f64,
    text_align: TextAlign,
    subpaths: Vec<Vec<(f64, f64)>>,
}

impl Canvas {
    /// Create a canvas filled with `background`.
    pub fn new(width: u32, height: u32, background: Color) -> Self {
        let size = (width as usize) * (height as usize);
        Self {
            width,
            height,
            data: vec![background; size],
            background,
            stroke_color: Color::black(),
            fill_color: Color::black(),
            line_width: 1.0,
            font_size: 10.0,
            text_align: TextAlign::Left,
            subpaths: Vec::new(),
        }
    }

    /// The color `clear_rect` paints.
    pub fn background(&self) -> Color {
        self.background
    }

    /// Get pixel at (x, y), or `None` outside the canvas.
    pub fn get(&self, x: u32, y: u32) -> Option<Color> {
        if x >= self.width || y >= self.height {
            return None;
        }
        Some(self.data[pixel_index(self.width, x, y)])
    }

    /// Set pixel at (x, y). Out-of-bounds writes are ignored.
    pub fn set(&mut self, x: u32, y: u32, color: Color) {
        if x < self.width && y < self.height {
            let index = pixel_index(self.width, x, y);
            self.data[index] = color;
        }
    }

    fn blend(&mut self, x: u32, y: u32, color: Color, coverage: f64) {
        if let Some(dst) = self.get(x, y) {
            self.set(x, y, color.blend_over(&dst, coverage));
        }
    }

    /// Convert to 8-bit RGBA bytes, row-major.
    pub fn to_rgba8(&self) -> Vec<u8> {
        self.data.iter().flat_map(|c| c.to_rgba8()).collect()
    }

    fn stroke_coverage(&self) -> HashMap<(u32, u32), f64> {
        let mut coverage: HashMap<(u32, u32), f64> = HashMap::new();
        let half = self.line_width / 2.0;
        if !(half.is_finite() && half > 0.0) {
            return coverage;
        }

        for subpath in &self.subpaths {
            for segment in subpath.windows(2) {
                let (a, b) = (segment[0], segment[1]);
                let Some((x0, y0, x1, y1)) = self.clip_box(a, b, half) else {
                    continue;
                };
                for py in y0..=y1 {
                    for px in x0..=x1 {
                        let center = (px as f64 + 0.5, py as f64 + 0.5);
                        let d = distance_to_segment(center, a, b);
                        let c = (half + 0.5 - d).clamp(0.0, 1.0);
                        if c > 0.0 {
                            let entry = coverage.entry((px, py)).or_insert(0.0);
                            *entry = entry.max(c);
                        }
                    }
                }
            }
        }
        coverage
    }

    // Pixel bounds of a segment's stroke footprint, clipped to the canvas.
    fn clip_box(&self, a: (f64, f64), b: (f64, f64), half: f64) -> Option<(u32, u32, u32, u32)> {
        if self.width == 0 || self.height == 0 {
            return None;
        }
        let pad = half + 1.0;
        let min_x = (a.0.min(b.0) - pad).floor().max(0.0);
        let min_y = (a.1.min(b.1) - pad).floor().max(0.0);
        let max_x = (a.0.max(b.0) + pad).ceil().min(self.width as f64 - 1.0);
        let max_y = (a.1.max(b.1) + pad).ceil().min(self.height as f64 - 1.0);
        if !(min_x <= max_x && min_y <= max_y) {
            return None;
        }
        Some((min_x as u32, min_y as u32, max_x as u32, max_y as u32))
    }
}

fn distance_to_segment(p: (f64, f64), a: (f64, f64), b: (f64, f64)) -> f64 {
    let (dx, dy) = (b.0 - a.0, b.1 - a.1);
    let len_sq = dx * dx + dy * dy;
    let t = if len_sq > 0.0 {
        (((p.0 - a.0) * dx + (p.1 - a.1) * dy) / len_sq).clamp(0.0, 1.0)
    } else {
        0.0
    };
    let (cx, cy) = (a.0 + t * dx, a.1 + t * dy);
    ((p.0 - cx).powi(2) + (p.1 - cy).powi(2)).sqrt()
}

impl DrawingSurface for Canvas {
    fn clear_rect(&mut self, x: f64, y: f64, width: f64, height: f64) {
        let x0 = x.max(0.0).floor() as u32;
        let y0 = y.max(0.0).floor() as u32;
        let x1 = (x + width).min(self.width as f64).ceil().max(0.0) as u32;
        let y1 = (y + height).min(self.height as f64).ceil().max(0.0) as u32;
        for py in y0..y1 {
            for px in x0..x1 {
                self.set(px, py, self.background);
            }
        }
    }

    fn begin_path(&mut self) {
        self.subpaths.clear();
    }

    fn move_to(&mut self, x: f64, y: f64) {
        self.subpaths.push(vec![(x, y)]);
    }

    fn line_to(&mut self, x: f64, y: f64) {
        match self.subpaths.last_mut() {
            Some(subpath) => subpath.push((x, y)),
            None => self.subpaths.push(vec![(x, y)]),
        }
    }

    fn stroke(&mut self) {
        let color = self.stroke_color;
        let mut pixels: Vec<((u32, u32), f64)> = self.stroke_coverage().into_iter().collect();
        pixels.sort_by_key(|(pos, _)| *pos);
        for ((x, y), c) in pixels {
            self.blend(x, y, color, c);
        }
    }

    fn set_stroke_color(&mut self, color: Color) {
        self.stroke_color = color;
    }

    fn set_line_width(&mut self, width: f64) {
        self.line_width = width;
    }

    fn set_fill_color(&mut self, color: Color) {
        self.fill_color = color;
    }

    fn set_font(&mut self, size_px: f64) {
        self.font_size = size_px;
    }

    fn set_text_align(&mut self, align: TextAlign) {
        self.text_align = align;
    }

    fn fill_text(&mut self, text: &str, x: f64, y: f64) {
        if !x.is_finite() || !y.is_finite() {
            return;
        }
        let scale = font::scale_for_size(self.font_size);
        let width = font::text_width(text, scale) as f64;
        let left = match self.text_align {
            TextAlign::Left => x,
            TextAlign::Center => x - width / 2.0,
            TextAlign::Right => x - width,
        }
        .round() as i64;
        let top = y.round() as i64 - (font::GLYPH_HEIGHT * scale) as i64;

        let color = self.fill_color;
        for (i, c) in text.chars().enumerate() {
            let Some(rows) = font::glyph(c) else {
                continue;
            };
            let origin_x = left + (i as i64) * (font::GLYPH_ADVANCE * scale) as i64;
            for row in 0..font::GLYPH_HEIGHT {
                for col in 0..font::GLYPH_WIDTH {
                    if !font::is_lit(rows, col, row) {
                        continue;
                    }
                    for sy in 0..scale {
                        for sx in 0..scale {
                            let px = origin_x + (col * scale + sx) as i64;
                            let py = top + (row * scale + sy) as i64;
                            if px >= 0 && py >= 0 {
                                self.blend(px as u32, py as u32, color, 1.0);
                            }
                        }
                    }
                }
            }
        }
    }
}
