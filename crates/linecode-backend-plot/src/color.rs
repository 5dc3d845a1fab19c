//! Color utilities for plot surfaces.

/// RGBA color with f64 components (0.0 to 1.0 range).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Color {
    pub r: f64,
    pub g: f64,
    pub b: f64,
    pub a: f64,
}

impl Color {
    /// Create a new color with alpha = 1.0.
    pub const fn rgb(r: f64, g: f64, b: f64) -> Self {
        Self { r, g, b, a: 1.0 }
    }

    /// Create a new color with alpha.
    pub const fn rgba(r: f64, g: f64, b: f64, a: f64) -> Self {
        Self { r, g, b, a }
    }

    /// Create black.
    pub const fn black() -> Self {
        Self::rgb(0.0, 0.0, 0.0)
    }

    /// Create white.
    pub const fn white() -> Self {
        Self::rgb(1.0, 1.0, 1.0)
    }

    /// Create from an `[r, g, b, a]` array.
    pub fn from_array(rgba: [f64; 4]) -> Self {
        Self::rgba(rgba[0], rgba[1], rgba[2], rgba[3])
    }

    /// Create from 8-bit RGB.
    pub fn from_rgb8(rgb: [u8; 3]) -> Self {
        Self::rgb(
            rgb[0] as f64 / 255.0,
            rgb[1] as f64 / 255.0,
            rgb[2] as f64 / 255.0,
        )
    }

    /// Parse `#rgb` or `#rrggbb`.
    pub fn from_hex(hex: &str) -> Option<Self> {
        let digits = hex.strip_prefix('#')?;
        let channel = |s: &str| u8::from_str_radix(s, 16).ok();
        match digits.len() {
            3 => {
                let mut rgb = [0u8; 3];
                for (i, c) in digits.chars().enumerate() {
                    let v = c.to_digit(16)? as u8;
                    rgb[i] = v * 17;
                }
                Some(Self::from_rgb8(rgb))
            }
            6 => Some(Self::from_rgb8([
                channel(digits.get(0..2)?)?,
                channel(digits.get(2..4)?)?,
                channel(digits.get(4..6)?)?,
            ])),
            _ => None,
        }
    }

    /// Clamp all components to [0.0, 1.0].
    pub fn clamp(&self) -> Color {
        Color {
            r: self.r.clamp(0.0, 1.0),
            g: self.g.clamp(0.0, 1.0),
            b: self.b.clamp(0.0, 1.0),
            a: self.a.clamp(0.0, 1.0),
        }
    }

    /// Convert to 8-bit RGBA.
    pub fn to_rgba8(&self) -> [u8; 4] {
        let c = self.clamp();
        [
            (c.r * 255.0).round() as u8,
            (c.g * 255.0).round() as u8,
            (c.b * 255.0).round() as u8,
            (c.a * 255.0).round() as u8,
        ]
    }

    /// Format as `#rrggbb`, or `#rrggbbaa` when not opaque.
    pub fn to_hex(&self) -> String {
        let [r, g, b, a] = self.to_rgba8();
        if a == 255 {
            format!("#{:02x}{:02x}{:02x}", r, g, b)
        } else {
            format!("#{:02x}{:02x}{:02x}{:02x}", r, g, b, a)
        }
    }

    /// Source-over compositing of `self` onto `dst` at the given coverage.
    pub fn blend_over(&self, dst: &Color, coverage: f64) -> Color {
        let alpha = (self.a * coverage).clamp(0.0, 1.0);
        let out_a = alpha + dst.a * (1.0 - alpha);
        if out_a <= 0.0 {
            return Color::rgba(0.0, 0.0, 0.0, 0.0);
        }
        let mix = |s: f64, d: f64| (s * alpha + d * dst.a * (1.0 - alpha)) / out_a;
        Color {
            r: mix(self.r, dst.r),
            g: mix(self.g, dst.g),
            b: mix(self.b, dst.b),
            a: out_a,
        }
    }
}

impl Default for Color {
    fn default() -> Self {
        Self::black()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hex_round_trip() {
        let accent = Color::from_hex("#007acc").unwrap();
        assert_eq!(accent.to_rgba8(), [0x00, 0x7a, 0xcc, 0xff]);
        assert_eq!(accent.to_hex(), "#007acc");

        assert_eq!(Color::from_hex("#ccc").unwrap().to_hex(), "#cccccc");
        assert_eq!(Color::from_hex("007acc"), None);
        assert_eq!(Color::from_hex("#12345"), None);
        assert_eq!(Color::from_hex("#zzzzzz"), None);
    }

    #[test]
    fn test_translucent_hex() {
        let c = Color::rgba(1.0, 0.0, 0.0, 0.5);
        assert_eq!(c.to_hex(), "#ff000080");
    }

    #[test]
    fn test_blend_full_coverage_replaces() {
        let out = Color::black().blend_over(&Color::white(), 1.0);
        assert_eq!(out.to_rgba8(), [0, 0, 0, 255]);
    }

    #[test]
    fn test_blend_half_coverage_mixes() {
        let out = Color::black().blend_over(&Color::white(), 0.5);
        assert_eq!(out.to_rgba8(), [128, 128, 128, 255]);
    }

    #[test]
    fn test_blend_zero_coverage_keeps_destination() {
        let dst = Color::from_hex("#9c9a9a").unwrap();
        let out = Color::black().blend_over(&dst, 0.0);
        assert_eq!(out.to_rgba8(), dst.to_rgba8());
    }
}
