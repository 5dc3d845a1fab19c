//! 5x7 bitmap glyphs for axis labels.
//!
//! Only the characters voltage labels use are defined. Anything else renders
//! as a blank cell of the same advance.

/// Glyph width in cells.
pub const GLYPH_WIDTH: u32 = 5;

/// Glyph height in cells.
pub const GLYPH_HEIGHT: u32 = 7;

/// Horizontal advance per character, including one cell of spacing.
pub const GLYPH_ADVANCE: u32 = GLYPH_WIDTH + 1;

// Each row is 5 bits, most significant bit on the left.
const GLYPHS: &[(char, [u8; 7])] = &[
    (' ', [0b00000, 0b00000, 0b00000, 0b00000, 0b00000, 0b00000, 0b00000]),
    ('+', [0b00000, 0b00100, 0b00100, 0b11111, 0b00100, 0b00100, 0b00000]),
    ('-', [0b00000, 0b00000, 0b00000, 0b11111, 0b00000, 0b00000, 0b00000]),
    ('.', [0b00000, 0b00000, 0b00000, 0b00000, 0b00000, 0b00000, 0b00100]),
    ('0', [0b01110, 0b10001, 0b10011, 0b10101, 0b11001, 0b10001, 0b01110]),
    ('1', [0b00100, 0b01100, 0b00100, 0b00100, 0b00100, 0b00100, 0b01110]),
    ('2', [0b01110, 0b10001, 0b00001, 0b00010, 0b00100, 0b01000, 0b11111]),
    ('3', [0b11111, 0b00010, 0b00100, 0b00010, 0b00001, 0b10001, 0b01110]),
    ('4', [0b00010, 0b00110, 0b01010, 0b10010, 0b11111, 0b00010, 0b00010]),
    ('5', [0b11111, 0b10000, 0b11110, 0b00001, 0b00001, 0b10001, 0b01110]),
    ('6', [0b00110, 0b01000, 0b10000, 0b11110, 0b10001, 0b10001, 0b01110]),
    ('7', [0b11111, 0b00001, 0b00010, 0b00100, 0b01000, 0b01000, 0b01000]),
    ('8', [0b01110, 0b10001, 0b10001, 0b01110, 0b10001, 0b10001, 0b01110]),
    ('9', [0b01110, 0b10001, 0b10001, 0b01111, 0b00001, 0b00010, 0b01100]),
    ('V', [0b10001, 0b10001, 0b10001, 0b10001, 0b10001, 0b01010, 0b00100]),
];

/// Returns the glyph rows for a character, or `None` if it is not defined.
pub fn glyph(c: char) -> Option<&'static [u8; 7]> {
    GLYPHS
        .iter()
        .find(|(glyph_char, _)| *glyph_char == c)
        .map(|(_, rows)| rows)
}

/// Returns true if the cell at `(col, row)` of a glyph is lit.
pub fn is_lit(rows: &[u8; 7], col: u32, row: u32) -> bool {
    if col >= GLYPH_WIDTH || row >= GLYPH_HEIGHT {
        return false;
    }
    rows[row as usize] & (1 << (GLYPH_WIDTH - 1 - col)) != 0
}

/// Integer cell scale for a font size in pixels.
pub fn scale_for_size(size_px: f64) -> u32 {
    if !size_px.is_finite() {
        return 1;
    }
    (size_px / 12.0).round().max(1.0) as u32
}

/// Width in pixels of `text` at the given scale.
pub fn text_width(text: &str, scale: u32) -> u32 {
    let count = text.chars().count() as u32;
    if count == 0 {
        return 0;
    }
    (count * GLYPH_ADVANCE - 1) * scale
}
